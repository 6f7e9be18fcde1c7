//! Minimum-variation guard for asset price updates.

use crate::error::CoreError;

/// Smallest relative change accepted by a price update (1%).
pub const MIN_VARIATION: f64 = 0.01;

/// Slack, relative to the baseline, absorbed when comparing against the 1%
/// threshold. Decimal inputs such as 1.1 -> 1.111 are exactly 1% but land a
/// few ULPs short once stored as `f64`.
const ROUNDING_SLACK: f64 = 1e-9;

/// Validate a requested value before it reaches the guard.
pub fn validate_value(value: f64) -> Result<(), CoreError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::BadRequest(format!(
            "Asset value must be a finite non-negative number, got {value}"
        )));
    }
    Ok(())
}

/// Check that moving from `current` to `requested` is at least a 1% change.
///
/// The relative change uses the pre-update value as denominator and the
/// boundary is inclusive, up to binary rounding of decimal inputs. From a
/// zero baseline any positive value passes and zero fails, so nothing is
/// ever divided by zero.
pub fn check_variation(current: f64, requested: f64) -> Result<(), CoreError> {
    validate_value(requested)?;

    let passes = if current == 0.0 {
        requested > 0.0
    } else {
        let delta = (requested - current).abs();
        delta + ROUNDING_SLACK * current >= MIN_VARIATION * current
    };

    if passes {
        Ok(())
    } else {
        Err(CoreError::InvalidVariation { current, requested })
    }
}
