//! Calculator engine: unit conversion, scientific evaluation, and orbital mechanics.
//!
//! Each concern lives in its own workspace crate so that front-ends (the CLI today,
//! a GUI or web shell later) share one implementation. This crate re-exports them
//! under short module names.

use thiserror::Error;

pub use spacecalc_config as config;
pub use spacecalc_core::{constants, format};
pub use spacecalc_export as export;
pub use spacecalc_orbits as orbits;
pub use spacecalc_scientific as scientific;
pub use spacecalc_units as units;

/// Any error the core can report, for shells that funnel them into one place.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Conversion(#[from] units::ConversionError),
    #[error(transparent)]
    Eval(#[from] scientific::EvalError),
    #[error(transparent)]
    Orbit(#[from] orbits::OrbitError),
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Export(#[from] export::ExportError),
}

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
