//! Plain-text rendering of results for terminal output.

use std::io::{self, Write};

use clap::ValueEnum;
use space_calculator::format::format;
use space_calculator::orbits::OrbitalOutput;
use space_calculator::units::{CategorySummary, Conversion, Unit};

/// Output format for result listings.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

/// `"1 result"` / `"3 results"`.
pub fn result_count(count: usize) -> String {
    format!("{count} result{}", if count == 1 { "" } else { "s" })
}

pub fn write_conversion_table<W: Write + ?Sized>(
    writer: &mut W,
    results: &[Conversion],
) -> io::Result<()> {
    let width = results
        .iter()
        .map(|result| result.unit.name.chars().count())
        .max()
        .unwrap_or(0);
    for result in results {
        writeln!(
            writer,
            "{:<width$}  {}",
            result.unit.name,
            format(result.value),
            width = width
        )?;
    }
    writeln!(writer, "{}", result_count(results.len()))
}

pub fn write_orbital_table<W: Write + ?Sized>(
    writer: &mut W,
    output: &OrbitalOutput,
) -> io::Result<()> {
    writeln!(writer, "Orbital Parameters")?;
    for record in output.records() {
        writeln!(
            writer,
            "{:<20} {} {}",
            record.label,
            format(record.value),
            record.unit
        )?;
    }
    Ok(())
}

pub fn write_category_list<W: Write + ?Sized>(
    writer: &mut W,
    summaries: &[CategorySummary],
) -> io::Result<()> {
    for summary in summaries {
        writeln!(
            writer,
            "{:<12} {} ({} units)",
            summary.key, summary.name, summary.unit_count
        )?;
    }
    Ok(())
}

pub fn write_unit_list<W: Write + ?Sized>(writer: &mut W, units: &[Unit]) -> io::Result<()> {
    for unit in units {
        writeln!(writer, "{:<24} {}", unit.key, unit.name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use space_calculator::units::convert;

    #[test]
    fn pluralises_result_count() {
        assert_eq!(result_count(0), "0 results");
        assert_eq!(result_count(1), "1 result");
        assert_eq!(result_count(3), "3 results");
    }

    #[test]
    fn table_lists_every_result_then_count() {
        let results = convert("everyday", "mpg", 235.214).unwrap();
        let mut buffer = Vec::new();
        write_conversion_table(&mut buffer, &results).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("Liters per 100 km (L/100km)"));
        assert!(lines[1].ends_with(" 1"));
        assert_eq!(lines[3], "3 results");
    }
}
