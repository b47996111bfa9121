//! Ideal-string physics.
//!
//! Maps length, tension and linear density to the wave speed, fundamental
//! frequency and wavelength of a lossless string fixed at both ends, plus the
//! amplitude heuristic used when drawing it.

use crate::constants::{AMPLITUDE_NUMERATOR, MIN_AMPLITUDE};
use crate::error::ParameterError;
use crate::types::*;

/// Stateless calculator for [`DerivedQuantities`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PhysicsEngine;

impl PhysicsEngine {
    /// Creates a physics engine.
    pub fn new() -> Self {
        Self
    }

    /// Computes the derived quantities for a string.
    ///
    /// # Arguments
    ///
    /// * `length` - Vibrating length `L` in metres
    /// * `tension` - Tension `F` in newtons
    /// * `linear_density` - Linear density `μ` in kg/m
    ///
    /// # Returns
    ///
    /// The derived quantities, or a [`ParameterError`] naming the first input that is
    /// not finite and strictly positive.
    pub fn compute(
        &self,
        length: f64,
        tension: f64,
        linear_density: f64,
    ) -> Result<DerivedQuantities, ParameterError> {
        check(ParameterField::Length, length)?;
        check(ParameterField::Tension, tension)?;
        check(ParameterField::Density, linear_density)?;

        let wave_speed = (tension / linear_density).sqrt();
        let frequency = wave_speed / (2.0 * length);

        Ok(DerivedQuantities {
            wave_speed,
            frequency,
            // v / f reduces to 2L; use it directly so it stays exact.
            wavelength: 2.0 * length,
            amplitude: amplitude_for_tension(tension),
        })
    }

    /// Validates the field texts and computes the derived quantities.
    pub fn compute_inputs(&self, inputs: &ParameterInputs) -> Result<DerivedQuantities, ParameterError> {
        let p = inputs.physical()?;
        self.compute(p.length, p.tension, p.linear_density)
    }
}

/// Display amplitude, `max(2, 12 / sqrt(F))`.
///
/// Not physically derived: keeps the oscillation visible at high tension without
/// blowing up at low tension.
pub fn amplitude_for_tension(tension: f64) -> f64 {
    (AMPLITUDE_NUMERATOR / tension.sqrt()).max(MIN_AMPLITUDE)
}

fn check(field: ParameterField, value: f64) -> Result<(), ParameterError> {
    if !value.is_finite() {
        Err(ParameterError::NotFinite { field, value })
    } else if value <= 0.0 {
        Err(ParameterError::NonPositive { field, value })
    } else {
        Ok(())
    }
}
