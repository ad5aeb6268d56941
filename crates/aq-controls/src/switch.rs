//! Duty-cycle switch for timed pumps.
//!
//! The switch alternates between an on phase and an off phase. Elapsed time
//! accumulates on every advance except the one that flips the phase, which
//! resets it to zero instead.

use aq_core::numeric::ensure_non_negative;
use aq_core::units::{Time, as_seconds};

use crate::error::ControlResult;

/// On/off state machine with fixed phase durations (seconds).
#[derive(Debug, Clone, PartialEq)]
pub struct DutySwitch {
    on_s: f64,
    off_s: f64,
    on: bool,
    since_switch_s: f64,
}

impl DutySwitch {
    /// Create a switch that starts in the on phase.
    pub fn new(on: Time, off: Time) -> ControlResult<Self> {
        Self::from_seconds(as_seconds(on), as_seconds(off))
    }

    /// Create a switch from raw second values.
    pub fn from_seconds(on_s: f64, off_s: f64) -> ControlResult<Self> {
        let on_s = ensure_non_negative(on_s, "on duration")?;
        let off_s = ensure_non_negative(off_s, "off duration")?;
        Ok(Self {
            on_s,
            off_s,
            on: true,
            since_switch_s: 0.0,
        })
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn since_switch_s(&self) -> f64 {
        self.since_switch_s
    }

    pub fn on_s(&self) -> f64 {
        self.on_s
    }

    pub fn off_s(&self) -> f64 {
        self.off_s
    }

    /// Duration of the phase the switch is currently in.
    fn phase_s(&self) -> f64 {
        if self.on { self.on_s } else { self.off_s }
    }

    /// Whether the switched load should be running right now.
    ///
    /// Besides the plain "on and within the on phase" case, an expired off
    /// phase also reports active: the flip happens on the next
    /// [`advance`](Self::advance), but the load already runs for this tick.
    /// The mirror case, an expired on phase, reports inactive.
    pub fn is_active(&self) -> bool {
        if self.on {
            self.since_switch_s < self.on_s
        } else {
            self.since_switch_s >= self.off_s
        }
    }

    /// Advance by `elapsed_s`. Returns `true` when the phase flipped.
    pub fn advance(&mut self, elapsed_s: f64) -> bool {
        if self.since_switch_s >= self.phase_s() {
            self.on = !self.on;
            self.since_switch_s = 0.0;
            tracing::trace!(on = self.on, "duty switch flipped");
            true
        } else {
            self.since_switch_s += elapsed_s;
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aq_core::units::minutes;
    use proptest::prelude::*;

    #[test]
    fn starts_on_and_active() {
        let sw = DutySwitch::new(minutes(1.0), minutes(2.0)).unwrap();
        assert!(sw.is_on());
        assert!(sw.is_active());
        assert!((sw.on_s() - 60.0).abs() < 1e-9);
        assert!((sw.off_s() - 120.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_negative_duration() {
        assert!(DutySwitch::from_seconds(-1.0, 10.0).is_err());
        assert!(DutySwitch::from_seconds(10.0, f64::NAN).is_err());
    }

    #[test]
    fn expired_on_phase_is_inactive_before_flip() {
        let mut sw = DutySwitch::from_seconds(20.0, 20.0).unwrap();
        assert!(!sw.advance(10.0));
        assert!(!sw.advance(10.0));
        // since_switch == on duration: still on, but no longer active
        assert!(sw.is_on());
        assert!(!sw.is_active());
        assert!(sw.advance(10.0));
        assert!(!sw.is_on());
        assert_eq!(sw.since_switch_s(), 0.0);
    }

    #[test]
    fn expired_off_phase_is_active_before_flip() {
        let mut sw = DutySwitch::from_seconds(0.0, 20.0).unwrap();
        // zero on phase flips immediately
        assert!(sw.advance(10.0));
        assert!(!sw.is_on());
        assert!(!sw.is_active());
        sw.advance(10.0);
        sw.advance(10.0);
        assert!(!sw.is_on());
        assert!(sw.is_active());
        assert!(sw.advance(10.0));
        assert!(sw.is_on());
    }

    proptest! {
        #[test]
        fn each_phase_spans_duration_plus_one_tick(
            on_ticks in 1u32..20,
            off_ticks in 1u32..20,
            dt in 1u32..120,
        ) {
            let dt = f64::from(dt);
            let mut sw = DutySwitch::from_seconds(
                f64::from(on_ticks) * dt,
                f64::from(off_ticks) * dt,
            ).unwrap();

            let mut ticks_on = 0;
            while sw.is_on() {
                sw.advance(dt);
                ticks_on += 1;
            }
            prop_assert_eq!(ticks_on, on_ticks + 1);

            let mut ticks_off = 0;
            while !sw.is_on() {
                sw.advance(dt);
                ticks_off += 1;
            }
            prop_assert_eq!(ticks_off, off_ticks + 1);
        }
    }
}
