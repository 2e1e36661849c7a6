//! Shared plumbing for the Space Calculator binaries.

pub mod logging;
pub mod output;

use space_calculator::config::AngleModeSetting;
use space_calculator::scientific::AngleMode;

pub use logging::{LogArgs, setup_logging};
pub use output::OutputFormat;

/// Default settings location, relative to the working directory.
pub const DEFAULT_SETTINGS_PATH: &str = "configs/settings.toml";

/// Map the configured angle mode onto the evaluator's.
pub fn angle_mode(setting: AngleModeSetting) -> AngleMode {
    match setting {
        AngleModeSetting::Degrees => AngleMode::Degrees,
        AngleModeSetting::Radians => AngleMode::Radians,
    }
}
