use std::io::Write;
use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use space_calculator::config::load_settings_or_default;
use space_calculator::export::{conversion as export_conversion, writer_for_path};
use space_calculator::format::format;
use space_calculator::units::{self, Conversion, convert, convert_to, get_category};
use spacecalc_cli::output::{self, OutputFormat};
use spacecalc_cli::{DEFAULT_SETTINGS_PATH, LogArgs, setup_logging};
use tracing::info;

/// Convert a value into every compatible unit of a category.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Unit converter across nine physical-quantity categories (see --list)"
)]
struct Cli {
    /// Category key (defaults to the configured default category)
    #[arg(long)]
    category: Option<String>,

    /// Source unit key, e.g. `meters` or `fahrenheit`
    #[arg(long)]
    from: Option<String>,

    /// Value expressed in the source unit
    #[arg(long, allow_negative_numbers = true)]
    value: Option<f64>,

    /// Only report this target unit
    #[arg(long)]
    to: Option<String>,

    /// List categories, or the units of --category when given
    #[arg(long, default_value_t = false)]
    list: bool,

    /// Output format for the result listing
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Output path (use '-' for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,

    /// Settings file
    #[arg(long, default_value = DEFAULT_SETTINGS_PATH)]
    config: PathBuf,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli.log)?;
    let settings = load_settings_or_default(&cli.config)?;

    let mut writer = writer_for_path(&cli.output)?;

    if cli.list {
        match cli.category.as_deref() {
            Some(key) => output::write_unit_list(&mut writer, get_category(key)?.units)?,
            None => output::write_category_list(&mut writer, &units::list_categories())?,
        }
        writer.flush()?;
        return Ok(());
    }

    let category = cli.category.unwrap_or(settings.default_category);
    let from = cli
        .from
        .ok_or_else(|| anyhow!("--from is required unless --list is given"))?;
    let value = cli
        .value
        .ok_or_else(|| anyhow!("--value is required unless --list is given"))?;

    let results = match cli.to.as_deref() {
        Some(to) => {
            let value = convert_to(&category, &from, to, value)?;
            let unit = get_category(&category)?
                .unit(to)
                .ok_or_else(|| anyhow!("unit '{}' not found in '{}'", to, category))?;
            vec![Conversion { unit, value }]
        }
        None => convert(&category, &from, value)?,
    };
    info!(category = %category, from = %from, count = results.len(), "conversion complete");

    match cli.format {
        OutputFormat::Table if cli.to.is_some() => {
            for result in &results {
                writeln!(writer, "{} {}", format(result.value), result.unit.name)?;
            }
        }
        OutputFormat::Table => output::write_conversion_table(&mut writer, &results)?,
        OutputFormat::Csv => export_conversion::write_csv(&mut writer, &results)?,
        OutputFormat::Json => {
            let source = export_conversion::Source {
                category: &category,
                unit: &from,
                value,
            };
            export_conversion::write_json(&mut writer, &source, &results)?
        }
    }
    writer.flush()?;
    Ok(())
}

