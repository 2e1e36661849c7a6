//! Static registry of conversion categories.
//!
//! Every category lists its units in declaration order, which is also the order
//! conversion results are reported in. Linear factors express how many of the
//! category's base units make up one of the unit. Temperature and fuel-efficiency
//! units carry a placeholder factor of 1 and are converted by dedicated formulas.

use serde::Serialize;

use crate::ConversionError;

/// Affine temperature scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

/// The three mutually reciprocal fuel-efficiency measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FuelMeasure {
    MilesPerGallon,
    LitersPer100Km,
    KmPerLiter,
}

/// Conversion family of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitKind {
    /// Convertible by the multiplicative factor alone.
    Linear,
    Temperature(TemperatureScale),
    FuelEfficiency(FuelMeasure),
}

/// A single unit within a category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unit {
    pub key: &'static str,
    pub name: &'static str,
    pub factor: f64,
    pub kind: UnitKind,
}

impl Unit {
    const fn linear(key: &'static str, name: &'static str, factor: f64) -> Self {
        Self {
            key,
            name,
            factor,
            kind: UnitKind::Linear,
        }
    }

    const fn temperature(key: &'static str, name: &'static str, scale: TemperatureScale) -> Self {
        Self {
            key,
            name,
            factor: 1.0,
            kind: UnitKind::Temperature(scale),
        }
    }

    const fn fuel(key: &'static str, name: &'static str, measure: FuelMeasure) -> Self {
        Self {
            key,
            name,
            factor: 1.0,
            kind: UnitKind::FuelEfficiency(measure),
        }
    }

    /// True when the unit converts by its factor alone.
    pub fn is_linear(&self) -> bool {
        matches!(self.kind, UnitKind::Linear)
    }
}

/// A named group of physically related units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub key: &'static str,
    pub name: &'static str,
    pub units: &'static [Unit],
}

impl Category {
    /// Look up a unit by key within this category.
    pub fn unit(&self, key: &str) -> Option<&'static Unit> {
        self.units.iter().find(|unit| unit.key == key)
    }

    pub fn summary(&self) -> CategorySummary {
        CategorySummary {
            key: self.key,
            name: self.name,
            unit_count: self.units.len(),
        }
    }
}

/// Lightweight listing entry for a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub key: &'static str,
    pub name: &'static str,
    pub unit_count: usize,
}

/// All categories in display order.
pub fn categories() -> &'static [Category] {
    CATEGORIES
}

/// Resolve a category by key.
pub fn get_category(key: &str) -> Result<&'static Category, ConversionError> {
    CATEGORIES
        .iter()
        .find(|category| category.key == key)
        .ok_or_else(|| ConversionError::UnknownCategory(key.to_string()))
}

/// Summaries of every category, in display order.
pub fn list_categories() -> Vec<CategorySummary> {
    CATEGORIES.iter().map(Category::summary).collect()
}

use FuelMeasure::{KmPerLiter, LitersPer100Km, MilesPerGallon};
use TemperatureScale::{Celsius, Fahrenheit, Kelvin};

static CATEGORIES: &[Category] = &[
    Category {
        key: "basic",
        name: "Basic Quantities",
        units: BASIC,
    },
    Category {
        key: "motion",
        name: "Motion & Mechanics",
        units: MOTION,
    },
    Category {
        key: "electricity",
        name: "Electricity & Magnetism",
        units: ELECTRICITY,
    },
    Category {
        key: "waves",
        name: "Waves, Light & Sound",
        units: WAVES,
    },
    Category {
        key: "chemistry",
        name: "Chemistry & Material Science",
        units: CHEMISTRY,
    },
    Category {
        key: "astronomy",
        name: "Astronomy & Space",
        units: ASTRONOMY,
    },
    Category {
        key: "biology",
        name: "Biology & Medicine",
        units: BIOLOGY,
    },
    Category {
        key: "computing",
        name: "Information & Computing",
        units: COMPUTING,
    },
    Category {
        key: "everyday",
        name: "Everyday & Practical",
        units: EVERYDAY,
    },
];

static BASIC: &[Unit] = &[
    Unit::linear("meters", "Meters (m)", 1.0),
    Unit::linear("kilometers", "Kilometers (km)", 1000.0),
    Unit::linear("inches", "Inches (in)", 0.0254),
    Unit::linear("feet", "Feet (ft)", 0.3048),
    Unit::linear("miles", "Miles (mi)", 1609.344),
    Unit::linear("light-years", "Light Years (ly)", 9.461e15),
    Unit::linear("parsecs", "Parsecs (pc)", 3.086e16),
    Unit::linear("astronomical-units", "Astronomical Units (AU)", 1.496e11),
    Unit::linear("square-meters", "Square Meters (m²)", 1.0),
    Unit::linear("acres", "Acres", 4046.86),
    Unit::linear("hectares", "Hectares (ha)", 10000.0),
    Unit::linear("liters", "Liters (L)", 0.001),
    Unit::linear("gallons-us", "US Gallons (gal)", 0.00378541),
    Unit::linear("kilograms", "Kilograms (kg)", 1.0),
    Unit::linear("pounds", "Pounds (lb)", 0.453592),
    Unit::linear("seconds", "Seconds (s)", 1.0),
    Unit::linear("minutes", "Minutes (min)", 60.0),
    Unit::linear("hours", "Hours (h)", 3600.0),
    Unit::linear("days", "Days (d)", 86400.0),
    Unit::linear("years", "Years (yr)", 31557600.0),
    Unit::temperature("celsius", "Celsius (°C)", Celsius),
    Unit::temperature("fahrenheit", "Fahrenheit (°F)", Fahrenheit),
    Unit::temperature("kelvin", "Kelvin (K)", Kelvin),
];

static MOTION: &[Unit] = &[
    Unit::linear("meters-per-second", "Meters per Second (m/s)", 1.0),
    Unit::linear("kilometers-per-hour", "Kilometers per Hour (km/h)", 0.277778),
    Unit::linear("miles-per-hour", "Miles per Hour (mph)", 0.44704),
    Unit::linear("knots", "Knots (kn)", 0.514444),
    Unit::linear("g-force", "G-Force (g)", 9.80665),
    Unit::linear("newtons", "Newtons (N)", 1.0),
    Unit::linear("pound-force", "Pound-Force (lbf)", 4.44822),
    Unit::linear("joules", "Joules (J)", 1.0),
    Unit::linear("kilojoules", "Kilojoules (kJ)", 1000.0),
    Unit::linear("calories", "Calories (cal)", 4.184),
    Unit::linear("kilowatt-hours", "Kilowatt-Hours (kWh)", 3600000.0),
    Unit::linear("watts", "Watts (W)", 1.0),
    Unit::linear("kilowatts", "Kilowatts (kW)", 1000.0),
    Unit::linear("horsepower", "Horsepower (hp)", 745.7),
    Unit::linear("pascals", "Pascals (Pa)", 1.0),
    Unit::linear("psi", "Pounds per Square Inch (psi)", 6894.76),
    Unit::linear("bar", "Bar (bar)", 100000.0),
    Unit::linear("newton-meters", "Newton-Meters (N⋅m)", 1.0),
    Unit::linear("pound-feet", "Pound-Feet (lb⋅ft)", 1.35582),
];

static ELECTRICITY: &[Unit] = &[
    Unit::linear("amperes", "Amperes (A)", 1.0),
    Unit::linear("milliamperes", "Milliamperes (mA)", 0.001),
    Unit::linear("volts", "Volts (V)", 1.0),
    Unit::linear("kilovolts", "Kilovolts (kV)", 1000.0),
    Unit::linear("ohms", "Ohms (Ω)", 1.0),
    Unit::linear("kiloohms", "Kiloohms (kΩ)", 1000.0),
    Unit::linear("farads", "Farads (F)", 1.0),
    Unit::linear("microfarads", "Microfarads (μF)", 0.000001),
    Unit::linear("henries", "Henries (H)", 1.0),
    Unit::linear("millihenries", "Millihenries (mH)", 0.001),
    Unit::linear("tesla", "Tesla (T)", 1.0),
    Unit::linear("gauss", "Gauss (G)", 0.0001),
];

static WAVES: &[Unit] = &[
    Unit::linear("hertz", "Hertz (Hz)", 1.0),
    Unit::linear("kilohertz", "Kilohertz (kHz)", 1000.0),
    Unit::linear("megahertz", "Megahertz (MHz)", 1000000.0),
    Unit::linear("gigahertz", "Gigahertz (GHz)", 1000000000.0),
    Unit::linear("nanometers", "Nanometers (nm)", 0.000000001),
    Unit::linear("micrometers", "Micrometers (μm)", 0.000001),
    Unit::linear("decibels", "Decibels (dB)", 1.0),
    Unit::linear("lumens", "Lumens (lm)", 1.0),
    Unit::linear("candela", "Candela (cd)", 1.0),
    Unit::linear("lux", "Lux (lx)", 1.0),
    Unit::linear("gray", "Gray (Gy)", 1.0),
    Unit::linear("sievert", "Sievert (Sv)", 1.0),
];

static CHEMISTRY: &[Unit] = &[
    Unit::linear("molarity", "Molarity (M)", 1.0),
    Unit::linear("molality", "Molality (m)", 1.0),
    Unit::linear("ppm", "Parts per Million (ppm)", 1.0),
    Unit::linear("ppb", "Parts per Billion (ppb)", 0.001),
    Unit::linear("percentage", "Percentage (%)", 1.0),
    Unit::linear("kg-per-cubic-meter", "kg/m³", 1.0),
    Unit::linear("g-per-cubic-centimeter", "g/cm³", 1000.0),
    Unit::linear("ph", "pH Scale", 1.0),
    Unit::linear("pascal-seconds", "Pascal-Seconds (Pa⋅s)", 1.0),
    Unit::linear("centipoise", "Centipoise (cP)", 0.001),
];

static ASTRONOMY: &[Unit] = &[
    Unit::linear("astronomical-units", "Astronomical Units (AU)", 1.496e11),
    Unit::linear("light-years", "Light Years (ly)", 9.461e15),
    Unit::linear("parsecs", "Parsecs (pc)", 3.086e16),
    Unit::linear("earth-radii", "Earth Radii (R⊕)", 6.371e6),
    Unit::linear("solar-radii", "Solar Radii (R☉)", 6.96e8),
    Unit::linear("lunar-distance", "Lunar Distance (LD)", 3.844e8),
    Unit::linear("solar-masses", "Solar Masses (M☉)", 1.989e30),
    Unit::linear("stellar-magnitude", "Stellar Magnitude (mag)", 1.0),
];

static BIOLOGY: &[Unit] = &[
    Unit::linear("beats-per-minute", "Beats per Minute (BPM)", 1.0),
    Unit::linear("mmHg", "Millimeters of Mercury (mmHg)", 1.0),
    Unit::temperature("celsius-body", "Body Temperature (°C)", Celsius),
    Unit::temperature("fahrenheit-body", "Body Temperature (°F)", Fahrenheit),
    Unit::linear("bmi", "Body Mass Index (BMI)", 1.0),
    Unit::linear("mg-per-kg", "mg/kg", 1.0),
    Unit::linear("mcg-per-kg", "μg/kg", 0.001),
    Unit::linear("oxygen-saturation", "Oxygen Saturation (%)", 1.0),
];

static COMPUTING: &[Unit] = &[
    Unit::linear("bytes", "Bytes (B)", 1.0),
    Unit::linear("kilobytes", "Kilobytes (KB)", 1024.0),
    Unit::linear("megabytes", "Megabytes (MB)", 1048576.0),
    Unit::linear("gigabytes", "Gigabytes (GB)", 1073741824.0),
    Unit::linear("terabytes", "Terabytes (TB)", 1099511627776.0),
    Unit::linear("megahertz", "Megahertz (MHz)", 1000000.0),
    Unit::linear("gigahertz", "Gigahertz (GHz)", 1000000000.0),
    Unit::linear("flops", "FLOPS", 1.0),
    Unit::linear("megaflops", "MFLOPS", 1000000.0),
    Unit::linear("gigaflops", "GFLOPS", 1000000000.0),
    Unit::linear("bits-per-second", "Bits per Second (bps)", 1.0),
    Unit::linear("kilobits-per-second", "Kilobits per Second (kbps)", 1000.0),
    Unit::linear("megabits-per-second", "Megabits per Second (Mbps)", 1000000.0),
    Unit::linear("gigabits-per-second", "Gigabits per Second (Gbps)", 1000000000.0),
    Unit::linear("pixels", "Pixels", 1.0),
    Unit::linear("dpi", "Dots per Inch (DPI)", 1.0),
    Unit::linear("ppi", "Pixels per Inch (PPI)", 1.0),
];

static EVERYDAY: &[Unit] = &[
    Unit::linear("degrees", "Degrees (°)", 1.0),
    Unit::linear("radians", "Radians (rad)", 57.2958),
    Unit::linear("gradians", "Gradians (grad)", 0.9),
    Unit::linear("decibels", "Decibels (dB)", 1.0),
    Unit::linear("lux", "Lux (lx)", 1.0),
    Unit::linear("lumens", "Lumens (lm)", 1.0),
    Unit::linear("cups", "Cups", 0.000236588),
    Unit::linear("teaspoons", "Teaspoons (tsp)", 0.00000492892),
    Unit::linear("tablespoons", "Tablespoons (tbsp)", 0.0000147868),
    Unit::linear("ounces-fluid", "Fluid Ounces (fl oz)", 0.0000295735),
    Unit::fuel("mpg", "Miles per Gallon (mpg)", MilesPerGallon),
    Unit::fuel("liters-per-100km", "Liters per 100 km (L/100km)", LitersPer100Km),
    Unit::fuel("km-per-liter", "Kilometers per Liter (km/L)", KmPerLiter),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn nine_categories_in_display_order() {
        let keys: Vec<_> = categories().iter().map(|c| c.key).collect();
        assert_eq!(
            keys,
            [
                "basic",
                "motion",
                "electricity",
                "waves",
                "chemistry",
                "astronomy",
                "biology",
                "computing",
                "everyday"
            ]
        );
    }

    #[test]
    fn unit_keys_are_unique_within_each_category() {
        for category in categories() {
            let mut seen = HashSet::new();
            for unit in category.units {
                assert!(
                    seen.insert(unit.key),
                    "duplicate unit '{}' in '{}'",
                    unit.key,
                    category.key
                );
            }
            assert!(
                (8..=23).contains(&category.units.len()),
                "{} has {} units",
                category.key,
                category.units.len()
            );
        }
    }

    #[test]
    fn shared_keys_carry_identical_factors() {
        let basic = get_category("basic").unwrap();
        let astronomy = get_category("astronomy").unwrap();
        for key in ["light-years", "parsecs", "astronomical-units"] {
            assert_eq!(
                basic.unit(key).unwrap().factor,
                astronomy.unit(key).unwrap().factor
            );
        }
        let waves = get_category("waves").unwrap();
        let computing = get_category("computing").unwrap();
        assert_eq!(
            waves.unit("megahertz").unwrap().factor,
            computing.unit("megahertz").unwrap().factor
        );
    }

    #[test]
    fn special_units_are_tagged() {
        let biology = get_category("biology").unwrap();
        assert_eq!(
            biology.unit("fahrenheit-body").unwrap().kind,
            UnitKind::Temperature(Fahrenheit)
        );
        let everyday = get_category("everyday").unwrap();
        let fuel: Vec<_> = everyday
            .units
            .iter()
            .filter(|u| matches!(u.kind, UnitKind::FuelEfficiency(_)))
            .map(|u| u.key)
            .collect();
        assert_eq!(fuel, ["mpg", "liters-per-100km", "km-per-liter"]);
    }

    #[test]
    fn unknown_category_is_reported() {
        let err = get_category("alchemy").unwrap_err();
        assert_eq!(err, ConversionError::UnknownCategory("alchemy".into()));
    }

    #[test]
    fn summaries_match_table() {
        let summaries = list_categories();
        assert_eq!(summaries.len(), 9);
        assert_eq!(summaries[0].unit_count, 23);
        assert_eq!(summaries[8].name, "Everyday & Practical");
    }
}
