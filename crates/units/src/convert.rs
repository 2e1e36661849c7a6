//! Category-scoped unit conversion.

use serde::Serialize;
use spacecalc_core::constants::{KML_PER_MPG, MPG_L100KM, MPG_PER_KML};
use spacecalc_core::temperature;
use tracing::debug;

use crate::ConversionError;
use crate::table::{self, Category, FuelMeasure, TemperatureScale, Unit, UnitKind};

/// One converted value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub unit: &'static Unit,
    pub value: f64,
}

/// Convert `value` expressed in `from_key` into every compatible unit of the category.
///
/// Results follow the category's declaration order and exclude the source unit, except
/// for fuel efficiency where all three measures are always reported.
pub fn convert(
    category_key: &str,
    from_key: &str,
    value: f64,
) -> Result<Vec<Conversion>, ConversionError> {
    if !value.is_finite() {
        return Err(ConversionError::InvalidValue(value));
    }
    let category = table::get_category(category_key)?;
    let from = lookup_unit(category, from_key)?;

    let results = match from.kind {
        UnitKind::Temperature(scale) => convert_temperature(category, from, scale, value),
        UnitKind::FuelEfficiency(measure) => convert_fuel(category, measure, value),
        UnitKind::Linear => convert_linear(category, from, value),
    };

    debug!(
        category = category.key,
        from = from.key,
        value,
        results = results.len(),
        "converted"
    );
    Ok(results)
}

/// Convert `value` from one unit to a single target unit of the same category.
pub fn convert_to(
    category_key: &str,
    from_key: &str,
    to_key: &str,
    value: f64,
) -> Result<f64, ConversionError> {
    let category = table::get_category(category_key)?;
    let to = lookup_unit(category, to_key)?;
    let results = convert(category_key, from_key, value)?;

    if let Some(hit) = results.iter().find(|result| result.unit.key == to.key) {
        return Ok(hit.value);
    }
    if to_key == from_key {
        return Ok(value);
    }
    Err(ConversionError::IncompatibleUnits {
        from: from_key.to_string(),
        to: to_key.to_string(),
    })
}

fn lookup_unit(category: &Category, key: &str) -> Result<&'static Unit, ConversionError> {
    category
        .unit(key)
        .ok_or_else(|| ConversionError::UnknownUnit {
            category: category.key.to_string(),
            unit: key.to_string(),
        })
}

fn convert_linear(category: &Category, from: &Unit, value: f64) -> Vec<Conversion> {
    let base_value = value * from.factor;
    category
        .units
        .iter()
        .filter(|unit| unit.key != from.key && unit.is_linear())
        .map(|unit| Conversion {
            unit,
            value: base_value / unit.factor,
        })
        .collect()
}

fn convert_temperature(
    category: &Category,
    from: &Unit,
    scale: TemperatureScale,
    value: f64,
) -> Vec<Conversion> {
    let celsius = match scale {
        TemperatureScale::Celsius => value,
        TemperatureScale::Fahrenheit => temperature::fahrenheit_to_celsius(value),
        TemperatureScale::Kelvin => temperature::kelvin_to_celsius(value),
    };
    let fahrenheit = temperature::celsius_to_fahrenheit(celsius);
    let kelvin = temperature::celsius_to_kelvin(celsius);

    category
        .units
        .iter()
        .filter(|unit| unit.key != from.key)
        .filter_map(|unit| {
            let value = match unit.kind {
                UnitKind::Temperature(TemperatureScale::Celsius) => celsius,
                UnitKind::Temperature(TemperatureScale::Fahrenheit) => fahrenheit,
                UnitKind::Temperature(TemperatureScale::Kelvin) => kelvin,
                UnitKind::Linear | UnitKind::FuelEfficiency(_) => return None,
            };
            Some(Conversion { unit, value })
        })
        .collect()
}

/// Fuel economy readings derived from any one of the three measures.
#[derive(Debug, Clone, Copy, PartialEq)]
struct FuelEconomy {
    mpg: f64,
    l100km: f64,
    kml: f64,
}

impl FuelEconomy {
    fn from_measure(measure: FuelMeasure, value: f64) -> Self {
        match measure {
            FuelMeasure::MilesPerGallon => Self {
                mpg: value,
                l100km: MPG_L100KM / value,
                kml: value * KML_PER_MPG,
            },
            FuelMeasure::LitersPer100Km => Self {
                mpg: MPG_L100KM / value,
                l100km: value,
                kml: 100.0 / value,
            },
            FuelMeasure::KmPerLiter => Self {
                mpg: value * MPG_PER_KML,
                l100km: 100.0 / value,
                kml: value,
            },
        }
    }

    fn get(&self, measure: FuelMeasure) -> f64 {
        match measure {
            FuelMeasure::MilesPerGallon => self.mpg,
            FuelMeasure::LitersPer100Km => self.l100km,
            FuelMeasure::KmPerLiter => self.kml,
        }
    }
}

// The source measure is reported alongside the other two.
fn convert_fuel(category: &Category, measure: FuelMeasure, value: f64) -> Vec<Conversion> {
    let economy = FuelEconomy::from_measure(measure, value);
    category
        .units
        .iter()
        .filter_map(|unit| match unit.kind {
            UnitKind::FuelEfficiency(target) => Some(Conversion {
                unit,
                value: economy.get(target),
            }),
            UnitKind::Linear | UnitKind::Temperature(_) => None,
        })
        .collect()
}
