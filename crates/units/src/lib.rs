//! Table-driven unit conversion across physical-quantity categories.

use thiserror::Error;

pub mod convert;
pub mod table;

pub use convert::{Conversion, convert, convert_to};
pub use table::{
    Category, CategorySummary, FuelMeasure, TemperatureScale, Unit, UnitKind, categories,
    get_category, list_categories,
};

/// Errors surfaced by unit lookups and conversions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("unknown conversion category '{0}'")]
    UnknownCategory(String),
    #[error("unknown unit '{unit}' in category '{category}'")]
    UnknownUnit { category: String, unit: String },
    #[error("value must be a finite number (got {0})")]
    InvalidValue(f64),
    #[error("cannot convert '{from}' to '{to}': different conversion families")]
    IncompatibleUnits { from: String, to: String },
}
