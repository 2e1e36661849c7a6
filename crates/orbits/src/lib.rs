//! Circular-orbit helpers (Newtonian two-body estimates).
use serde::Serialize;
use spacecalc_core::constants::G;
use spacecalc_core::time::{seconds_to_days, seconds_to_hours};
use spacecalc_core::units::{km_to_m, ms_to_kms};
use thiserror::Error;
use tracing::debug;

/// Physical inputs for a circular orbit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitalInput {
    pub radius_km: f64,
    pub central_mass_kg: f64,
    pub orbital_mass_kg: f64,
}

/// Derived orbital quantities in display units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitalOutput {
    pub orbital_velocity_km_s: f64,
    pub orbital_period_hours: f64,
    pub orbital_period_days: f64,
    pub escape_velocity_km_s: f64,
    pub gravitational_force_n: f64,
    /// Negative for a bound orbit.
    pub orbital_energy_j: f64,
}

/// A labelled value as shown in the results panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitalQuantity {
    pub label: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

impl OrbitalOutput {
    /// The six results in display order.
    pub fn records(&self) -> [OrbitalQuantity; 6] {
        [
            OrbitalQuantity {
                label: "Orbital Velocity",
                value: self.orbital_velocity_km_s,
                unit: "km/s",
            },
            OrbitalQuantity {
                label: "Orbital Period",
                value: self.orbital_period_hours,
                unit: "hours",
            },
            OrbitalQuantity {
                label: "Orbital Period",
                value: self.orbital_period_days,
                unit: "days",
            },
            OrbitalQuantity {
                label: "Escape Velocity",
                value: self.escape_velocity_km_s,
                unit: "km/s",
            },
            OrbitalQuantity {
                label: "Gravitational Force",
                value: self.gravitational_force_n,
                unit: "N",
            },
            OrbitalQuantity {
                label: "Orbital Energy",
                value: self.orbital_energy_j,
                unit: "J",
            },
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrbitError {
    #[error("{field} must be a finite positive number (got {value})")]
    InvalidInput { field: &'static str, value: f64 },
}

/// Circular orbital speed (m/s) for gravitational parameter `mu_m3_s2` at `radius_m`.
pub fn circular_velocity(mu_m3_s2: f64, radius_m: f64) -> f64 {
    (mu_m3_s2 / radius_m).sqrt()
}

/// Escape speed (m/s) from `radius_m`.
pub fn escape_velocity(mu_m3_s2: f64, radius_m: f64) -> f64 {
    (2.0 * mu_m3_s2 / radius_m).sqrt()
}

/// Velocity, period, escape velocity, force, and energy of a circular orbit.
pub fn compute_orbit(input: &OrbitalInput) -> Result<OrbitalOutput, OrbitError> {
    validate("radius_km", input.radius_km)?;
    validate("central_mass_kg", input.central_mass_kg)?;
    validate("orbital_mass_kg", input.orbital_mass_kg)?;

    let r = km_to_m(input.radius_km);
    let mu = G * input.central_mass_kg;
    let m = input.orbital_mass_kg;

    let velocity = circular_velocity(mu, r);
    let period = 2.0 * std::f64::consts::PI * r / velocity;
    let escape = escape_velocity(mu, r);
    let force = mu * m / (r * r);
    let energy = -mu * m / (2.0 * r);

    let output = OrbitalOutput {
        orbital_velocity_km_s: ms_to_kms(velocity),
        orbital_period_hours: seconds_to_hours(period),
        orbital_period_days: seconds_to_days(period),
        escape_velocity_km_s: ms_to_kms(escape),
        gravitational_force_n: force,
        orbital_energy_j: energy,
    };
    debug!(
        radius_km = input.radius_km,
        velocity_km_s = output.orbital_velocity_km_s,
        period_hours = output.orbital_period_hours,
        "computed orbit"
    );
    Ok(output)
}

fn validate(field: &'static str, value: f64) -> Result<(), OrbitError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(OrbitError::InvalidInput { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EARTH_MASS_KG: f64 = 5.972e24;

    fn leo() -> OrbitalInput {
        OrbitalInput {
            radius_km: 6_871.0,
            central_mass_kg: EARTH_MASS_KG,
            orbital_mass_kg: 1_000.0,
        }
    }

    #[test]
    fn escape_is_root_two_times_circular() {
        let out = compute_orbit(&leo()).unwrap();
        assert_relative_eq!(
            out.escape_velocity_km_s,
            out.orbital_velocity_km_s * std::f64::consts::SQRT_2,
            max_relative = 1e-12
        );
    }

    #[test]
    fn energy_is_half_force_times_radius() {
        let input = leo();
        let out = compute_orbit(&input).unwrap();
        let r = input.radius_km * 1_000.0;
        assert!(out.orbital_energy_j < 0.0);
        assert_relative_eq!(
            out.orbital_energy_j,
            -0.5 * out.gravitational_force_n * r,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            out.orbital_period_days * 24.0,
            out.orbital_period_hours,
            max_relative = 1e-12
        );
    }

    #[test]
    fn records_keep_display_order() {
        let out = compute_orbit(&leo()).unwrap();
        let records = out.records();
        let labels: Vec<_> = records.iter().map(|r| (r.label, r.unit)).collect();
        assert_eq!(
            labels,
            [
                ("Orbital Velocity", "km/s"),
                ("Orbital Period", "hours"),
                ("Orbital Period", "days"),
                ("Escape Velocity", "km/s"),
                ("Gravitational Force", "N"),
                ("Orbital Energy", "J"),
            ]
        );
    }

    #[test]
    fn rejects_non_positive_or_non_finite_fields() {
        let mut input = leo();
        input.radius_km = 0.0;
        assert_eq!(
            compute_orbit(&input),
            Err(OrbitError::InvalidInput {
                field: "radius_km",
                value: 0.0
            })
        );

        let mut input = leo();
        input.orbital_mass_kg = -1.0;
        assert!(matches!(
            compute_orbit(&input),
            Err(OrbitError::InvalidInput {
                field: "orbital_mass_kg",
                ..
            })
        ));

        let mut input = leo();
        input.central_mass_kg = f64::INFINITY;
        assert!(compute_orbit(&input).is_err());
    }
}
