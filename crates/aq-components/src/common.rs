//! Common helpers for component calculations.

use aq_core::numeric::ensure_non_negative;

use crate::error::ComponentResult;

/// Seconds per minute; rates are per minute, steps are in seconds.
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Validate a configured flow rate (l/min): finite and non-negative.
pub fn check_rate(value: f64, what: &'static str) -> ComponentResult<f64> {
    Ok(ensure_non_negative(value, what)?)
}

/// Validate a configured volume (l): finite and non-negative.
pub fn check_volume(value: f64, what: &'static str) -> ComponentResult<f64> {
    Ok(ensure_non_negative(value, what)?)
}

/// Net volume change (l) over `elapsed_s` for the given rates (l/min).
///
/// Not clamped: a container may go below zero if it drains faster than it
/// fills.
pub fn volume_delta_l(elapsed_s: f64, inflow_lpm: f64, outflow_lpm: f64) -> f64 {
    elapsed_s / SECONDS_PER_MINUTE * (inflow_lpm - outflow_lpm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_delta() {
        assert_eq!(volume_delta_l(60.0, 5.0, 2.0), 3.0);
        assert_eq!(volume_delta_l(30.0, 0.0, 10.0), -5.0);
        assert_eq!(volume_delta_l(10.0, 4.0, 4.0), 0.0);
    }

    #[test]
    fn test_check_rate() {
        assert!(check_rate(1.0, "test").is_ok());
        assert!(check_rate(0.0, "test").is_ok());
        assert!(check_rate(-1.0, "test").is_err());
        assert!(check_rate(f64::INFINITY, "test").is_err());
        assert!(check_volume(f64::NAN, "test").is_err());
    }
}
