//! Export helpers for CSV and JSON artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export: {0}")]
    Io(#[from] io::Error),
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod conversion {
    use std::io::Write;

    use serde::Serialize;
    use spacecalc_core::format::format;
    use spacecalc_units::Conversion;

    use crate::ExportError;

    /// What was converted.
    #[derive(Debug, Clone, Serialize)]
    pub struct Source<'a> {
        pub category: &'a str,
        pub unit: &'a str,
        pub value: f64,
    }

    /// CSV/JSON row: `unit,name,value,display`.
    #[derive(Debug, Serialize)]
    struct Row<'a> {
        unit: &'a str,
        name: &'a str,
        value: f64,
        display: String,
    }

    #[derive(Serialize)]
    struct Document<'a> {
        source: &'a Source<'a>,
        results: Vec<Row<'a>>,
    }

    fn rows(results: &[Conversion]) -> Vec<Row<'_>> {
        results
            .iter()
            .map(|result| Row {
                unit: result.unit.key,
                name: result.unit.name,
                value: result.value,
                display: format(result.value),
            })
            .collect()
    }

    /// Write one CSV row per converted unit, with a header line.
    pub fn write_csv<W: Write>(writer: W, results: &[Conversion]) -> Result<(), ExportError> {
        let mut csv = csv::Writer::from_writer(writer);
        for row in rows(results) {
            csv.serialize(row)?;
        }
        csv.flush()?;
        Ok(())
    }

    /// Write a pretty-printed JSON document with the source and the results.
    ///
    /// Non-finite values serialize as `null`; `display` keeps their rendering.
    pub fn write_json<W: Write>(
        mut writer: W,
        source: &Source<'_>,
        results: &[Conversion],
    ) -> Result<(), ExportError> {
        let document = Document {
            source,
            results: rows(results),
        };
        serde_json::to_writer_pretty(&mut writer, &document)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}

pub mod orbital {
    use std::io::Write;

    use serde::Serialize;
    use spacecalc_core::format::format;
    use spacecalc_orbits::{OrbitalInput, OrbitalOutput};

    use crate::ExportError;

    /// CSV/JSON row: `label,value,unit,display`.
    #[derive(Debug, Serialize)]
    struct Row {
        label: &'static str,
        value: f64,
        unit: &'static str,
        display: String,
    }

    #[derive(Serialize)]
    struct Document<'a> {
        #[serde(skip_serializing_if = "Option::is_none")]
        preset: Option<&'a str>,
        input: &'a OrbitalInput,
        results: Vec<Row>,
    }

    fn rows(output: &OrbitalOutput) -> Vec<Row> {
        output
            .records()
            .into_iter()
            .map(|record| Row {
                label: record.label,
                value: record.value,
                unit: record.unit,
                display: format(record.value),
            })
            .collect()
    }

    /// Write the six orbital quantities as CSV, in display order.
    pub fn write_csv<W: Write>(writer: W, output: &OrbitalOutput) -> Result<(), ExportError> {
        let mut csv = csv::Writer::from_writer(writer);
        for row in rows(output) {
            csv.serialize(row)?;
        }
        csv.flush()?;
        Ok(())
    }

    /// Write the inputs (and preset name, if any) and the six quantities as JSON.
    pub fn write_json<W: Write>(
        mut writer: W,
        preset: Option<&str>,
        input: &OrbitalInput,
        output: &OrbitalOutput,
    ) -> Result<(), ExportError> {
        let document = Document {
            preset,
            input,
            results: rows(output),
        };
        serde_json::to_writer_pretty(&mut writer, &document)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spacecalc_orbits::{OrbitalInput, compute_orbit};
    use spacecalc_units::convert;

    #[test]
    fn conversion_csv_quotes_grouped_values() {
        let results = convert("basic", "kilometers", 1.5).unwrap();
        let mut buffer = Vec::new();
        conversion::write_csv(&mut buffer, &results).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("unit,name,value,display"));
        assert_eq!(lines.next(), Some("meters,Meters (m),1500.0,\"1,500\""));
        assert_eq!(text.lines().count(), results.len() + 1);
    }

    #[test]
    fn conversion_json_carries_source() {
        let results = convert("basic", "celsius", 100.0).unwrap();
        let source = conversion::Source {
            category: "basic",
            unit: "celsius",
            value: 100.0,
        };
        let mut buffer = Vec::new();
        conversion::write_json(&mut buffer, &source, &results).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(json["source"]["unit"], "celsius");
        assert_eq!(json["results"][0]["unit"], "fahrenheit");
        assert_eq!(json["results"][0]["display"], "212");
        assert_eq!(json["results"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn orbital_exports_six_rows() {
        let input = OrbitalInput {
            radius_km: 42_164.0,
            central_mass_kg: 5.972e24,
            orbital_mass_kg: 500.0,
        };
        let output = compute_orbit(&input).unwrap();

        let mut csv_buffer = Vec::new();
        orbital::write_csv(&mut csv_buffer, &output).unwrap();
        let text = String::from_utf8(csv_buffer).unwrap();
        assert_eq!(text.lines().count(), 7);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("label,value,unit,display"));
        assert!(lines.next().unwrap().starts_with("Orbital Velocity,"));

        let mut json_buffer = Vec::new();
        orbital::write_json(&mut json_buffer, Some("geo"), &input, &output).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&json_buffer).unwrap();
        assert_eq!(json["preset"], "geo");
        assert_eq!(json["input"]["radius_km"], 42_164.0);
        assert_eq!(json["results"][5]["label"], "Orbital Energy");
    }

    #[test]
    fn writer_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/results.csv");
        {
            let mut writer = writer_for_path(&path).unwrap();
            writer.write_all(b"ok\n").unwrap();
            writer.flush().unwrap();
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), "ok\n");
    }
}
