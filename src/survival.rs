//! # Survival probabilities
//!
//! A protocol for querying the survival probability `S(T)` of a system at a
//! future time `T`. `S: [0, ∞) → [0, 1]` is monotonically decreasing with
//! `S(0) = 1`, right-continuous, and has finitely many discontinuities.
//!
//! The instantaneous hazard rate is `h(T) = -S'(T) / S(T)`, using the right
//! derivative. It is non-negative, and `+∞` where `S` has a cusp.
//!
//! This module is independent of the handle and printable layers.

use thiserror::Error;

/// A probability in `[0, 1]`.
pub type Probability = f64;

/// A non-negative point in time.
pub type Time = f64;

/// Failure to compute a survival quantity.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ComputationError {
    #[error("survival probability is zero at t = {at}")]
    ZeroSurvival { at: Time },

    #[error("computed probability {value} is outside [0, 1]")]
    ProbabilityOutOfRange { value: f64 },

    #[error("hazard rate at T = {at} is not a number")]
    NotANumber { at: Time },
}

/// Survival probability of a system over time.
///
/// Preconditions on times (`0 <= t <= T`) are the caller's responsibility
/// and are only checked in debug builds.
pub trait Survival {
    /// The probability `S(T)` that the system survives at least until `big_t`.
    fn survival_prob(&self, big_t: Time) -> Result<Probability, ComputationError>;

    /// The hazard rate `h(T)` at `big_t`.
    fn hazard_rate(&self, big_t: Time) -> Result<f64, ComputationError>;

    /// The probability `S(T | t)` of surviving until `big_t` given survival
    /// until `t`, i.e. `S(T) / S(t)`.
    ///
    /// Implementors with a cheaper closed form may override this.
    fn conditional_survival_prob(&self, big_t: Time, t: Time) -> Result<Probability, ComputationError> {
        debug_assert!(0.0 <= t, "conditioning time must be non-negative");
        debug_assert!(t <= big_t, "conditioning time must not exceed the horizon");
        let s_t = self.survival_prob(t)?;
        if s_t == 0.0 {
            return Err(ComputationError::ZeroSurvival { at: t });
        }
        checked_probability(self.survival_prob(big_t)? / s_t)
    }
}

/// Reject values outside `[0, 1]` (including NaN).
pub fn checked_probability(value: f64) -> Result<Probability, ComputationError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ComputationError::ProbabilityOutOfRange { value })
    }
}

/// Constant hazard: `S(T) = exp(-rate * T)`.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Exponential {
    pub rate: f64,
}

#[cfg(feature = "std")]
impl Exponential {
    pub fn new(rate: f64) -> Self {
        debug_assert!(rate >= 0.0, "hazard rate must be non-negative");
        Self { rate }
    }
}

#[cfg(feature = "std")]
impl Survival for Exponential {
    fn survival_prob(&self, big_t: Time) -> Result<Probability, ComputationError> {
        debug_assert!(big_t >= 0.0, "time must be non-negative");
        checked_probability((-self.rate * big_t).exp())
    }

    fn hazard_rate(&self, big_t: Time) -> Result<f64, ComputationError> {
        debug_assert!(big_t >= 0.0, "time must be non-negative");
        if self.rate.is_nan() {
            return Err(ComputationError::NotANumber { at: big_t });
        }
        Ok(self.rate)
    }

    fn conditional_survival_prob(&self, big_t: Time, t: Time) -> Result<Probability, ComputationError> {
        debug_assert!(0.0 <= t && t <= big_t);
        if self.survival_prob(t)? == 0.0 {
            return Err(ComputationError::ZeroSurvival { at: t });
        }
        // Memoryless: S(T | t) = S(T - t).
        self.survival_prob(big_t - t)
    }
}
