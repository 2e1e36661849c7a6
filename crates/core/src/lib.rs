//! Core constants, unit helpers, and shared formatting for the Space Calculator workspace.

pub mod format;

/// Physical and mathematical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Newtonian gravitational constant (m³·kg⁻¹·s⁻²).
    pub const G: f64 = 6.674_30e-11;
    /// Seconds per hour.
    pub const SECONDS_PER_HOUR: f64 = 3_600.0;
    /// Seconds per day.
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
    /// Absolute zero offset between Celsius and Kelvin.
    pub const KELVIN_OFFSET: f64 = 273.15;
    /// Litres per 100 km equivalent to 1 US mile per gallon.
    pub const MPG_L100KM: f64 = 235.214;
    /// Kilometres per litre in 1 US mile per gallon.
    pub const KML_PER_MPG: f64 = 0.425_144;
    /// US miles per gallon in 1 kilometre per litre.
    pub const MPG_PER_KML: f64 = 2.352_14;
}

/// Basic unit conversion helpers.
pub mod units {
    /// Convert kilometres to metres.
    #[inline]
    pub fn km_to_m(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert metres per second to kilometres per second.
    #[inline]
    pub fn ms_to_kms(v: f64) -> f64 {
        v / 1_000.0
    }

    /// Convert degrees to radians.
    #[inline]
    pub fn deg_to_rad(v: f64) -> f64 {
        v * std::f64::consts::PI / 180.0
    }

    /// Convert radians to degrees.
    #[inline]
    pub fn rad_to_deg(v: f64) -> f64 {
        v * 180.0 / std::f64::consts::PI
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::{SECONDS_PER_DAY, SECONDS_PER_HOUR};

    /// Convert seconds to hours.
    #[inline]
    pub fn seconds_to_hours(seconds: f64) -> f64 {
        seconds / SECONDS_PER_HOUR
    }

    /// Convert seconds to days.
    #[inline]
    pub fn seconds_to_days(seconds: f64) -> f64 {
        seconds / SECONDS_PER_DAY
    }
}

/// Affine temperature helpers. Everything routes through Celsius.
pub mod temperature {
    use super::constants::KELVIN_OFFSET;

    #[inline]
    pub fn fahrenheit_to_celsius(f: f64) -> f64 {
        (f - 32.0) * 5.0 / 9.0
    }

    #[inline]
    pub fn celsius_to_fahrenheit(c: f64) -> f64 {
        c * 9.0 / 5.0 + 32.0
    }

    #[inline]
    pub fn kelvin_to_celsius(k: f64) -> f64 {
        k - KELVIN_OFFSET
    }

    #[inline]
    pub fn celsius_to_kelvin(c: f64) -> f64 {
        c + KELVIN_OFFSET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_helpers_agree_on_fixed_points() {
        assert_eq!(temperature::celsius_to_fahrenheit(100.0), 212.0);
        assert_eq!(temperature::fahrenheit_to_celsius(32.0), 0.0);
        assert_eq!(temperature::celsius_to_kelvin(0.0), 273.15);
        assert!((temperature::kelvin_to_celsius(0.0) + 273.15).abs() < 1e-12);
    }

    #[test]
    fn angle_helpers_invert() {
        let x = 37.5;
        assert!((units::rad_to_deg(units::deg_to_rad(x)) - x).abs() < 1e-12);
        assert!((units::deg_to_rad(180.0) - std::f64::consts::PI).abs() < 1e-15);
    }

    #[test]
    fn time_helpers() {
        assert_eq!(time::seconds_to_hours(7_200.0), 2.0);
        assert_eq!(time::seconds_to_days(172_800.0), 2.0);
    }
}
