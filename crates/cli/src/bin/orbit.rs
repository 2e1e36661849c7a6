use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, anyhow};
use clap::Parser;
use space_calculator::config::{find_preset, load_presets, load_settings_or_default};
use space_calculator::export::{orbital as export_orbital, writer_for_path};
use space_calculator::format::format;
use space_calculator::orbits::{OrbitalInput, compute_orbit};
use spacecalc_cli::output::{self, OutputFormat};
use spacecalc_cli::{DEFAULT_SETTINGS_PATH, LogArgs, setup_logging};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Circular orbit calculator (velocity, period, escape velocity, force, energy)"
)]
struct Cli {
    /// Preset name from the preset catalog (case-insensitive)
    #[arg(long)]
    preset: Option<String>,

    /// Orbital radius from the centre of the primary, in km
    #[arg(long, allow_negative_numbers = true)]
    radius_km: Option<f64>,

    /// Mass of the central body, in kg
    #[arg(long, allow_negative_numbers = true)]
    central_mass_kg: Option<f64>,

    /// Mass of the orbiting body, in kg
    #[arg(long, allow_negative_numbers = true)]
    orbital_mass_kg: Option<f64>,

    /// Preset catalog (YAML file, TOML file, or directory of TOML files)
    #[arg(long)]
    presets: Option<PathBuf>,

    /// List the available presets and exit
    #[arg(long, default_value_t = false)]
    list_presets: bool,

    /// Output format
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
    let presets_path = cli.presets.clone().unwrap_or(settings.presets_dir);

    let mut writer = writer_for_path(&cli.output)?;

    if cli.list_presets {
        let presets = load_presets(&presets_path)
            .with_context(|| format!("loading presets from {}", presets_path.display()))?;
        for preset in &presets {
            writeln!(
                writer,
                "{:<16} r={} km  M={} kg  m={} kg  {}",
                preset.name,
                format(preset.radius_km),
                format(preset.central_mass_kg),
                format(preset.orbital_mass_kg),
                preset.description.as_deref().unwrap_or("")
            )?;
        }
        writer.flush()?;
        return Ok(());
    }

    let (preset_name, base) = match cli.preset.as_deref() {
        Some(name) => {
            let presets = load_presets(&presets_path)
                .with_context(|| format!("loading presets from {}", presets_path.display()))?;
            let preset = find_preset(&presets, name).ok_or_else(|| {
                anyhow!(
                    "preset '{}' not found in {}",
                    name,
                    presets_path.display()
                )
            })?;
            (
                Some(preset.name.clone()),
                Some((
                    preset.radius_km,
                    preset.central_mass_kg,
                    preset.orbital_mass_kg,
                )),
            )
        }
        None => (None, None),
    };

    // Explicit flags override preset fields.
    let input = OrbitalInput {
        radius_km: cli
            .radius_km
            .or(base.map(|b| b.0))
            .ok_or_else(|| anyhow!("--radius-km is required without --preset"))?,
        central_mass_kg: cli
            .central_mass_kg
            .or(base.map(|b| b.1))
            .ok_or_else(|| anyhow!("--central-mass-kg is required without --preset"))?,
        orbital_mass_kg: cli
            .orbital_mass_kg
            .or(base.map(|b| b.2))
            .ok_or_else(|| anyhow!("--orbital-mass-kg is required without --preset"))?,
    };

    let result = compute_orbit(&input)?;
    info!(
        preset = preset_name.as_deref().unwrap_or("-"),
        radius_km = input.radius_km,
        "orbit computed"
    );

    match cli.format {
        OutputFormat::Table => output::write_orbital_table(&mut writer, &result)?,
        OutputFormat::Csv => export_orbital::write_csv(&mut writer, &result)?,
        OutputFormat::Json => {
            export_orbital::write_json(&mut writer, preset_name.as_deref(), &input, &result)?
        }
    }
    writer.flush()?;
    Ok(())
}
