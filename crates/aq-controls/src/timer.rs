//! Duty-cycle timers that turn circuit values into on/off durations.

use std::f64::consts::LN_2;

use aq_core::units::{Capacitance, Resistance, Time, as_seconds, kohm, uf};

/// Source of on/off durations for timer-driven pumps.
///
/// Resistances are in kΩ, capacitance in µF, returned durations in seconds.
pub trait DutyCycleTimer {
    /// Duration of the output-high phase.
    fn time_high(&self, r1_kohm: f64, r2_kohm: f64, c_uf: f64) -> f64;

    /// Duration of the output-low phase.
    fn time_low(&self, r2_kohm: f64, c_uf: f64) -> f64;
}

/// NE555 in astable mode.
///
/// ```text
/// t_high = ln2 * (R1 + R2) * C
/// t_low  = ln2 * R2 * C
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Astable555;

impl Astable555 {
    pub fn high(r1: Resistance, r2: Resistance, c: Capacitance) -> Time {
        (r1 + r2) * c * LN_2
    }

    pub fn low(r2: Resistance, c: Capacitance) -> Time {
        r2 * c * LN_2
    }
}

impl DutyCycleTimer for Astable555 {
    fn time_high(&self, r1_kohm: f64, r2_kohm: f64, c_uf: f64) -> f64 {
        as_seconds(Self::high(kohm(r1_kohm), kohm(r2_kohm), uf(c_uf)))
    }

    fn time_low(&self, r2_kohm: f64, c_uf: f64) -> f64 {
        as_seconds(Self::low(kohm(r2_kohm), uf(c_uf)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn astable_high_longer_than_low() {
        let t = Astable555;
        let high = t.time_high(10.0, 100.0, 1000.0);
        let low = t.time_low(100.0, 1000.0);
        assert!(high > low);
    }

    #[test]
    fn astable_known_values() {
        // 100 kΩ * 1000 µF = 100 s
        let t = Astable555;
        assert!((t.time_low(100.0, 1000.0) - 100.0 * LN_2).abs() < 1e-6);
        assert!((t.time_high(50.0, 100.0, 1000.0) - 150.0 * LN_2).abs() < 1e-6);
    }
}
