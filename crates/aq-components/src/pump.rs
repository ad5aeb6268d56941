//! Pump component models.
//!
//! All pumps draw from an unlimited reservoir, so they never need a
//! predecessor and can head a chain. Their state is the switch position:
//! on for a plain [`Pump`], alternating for the timed variants.

use aq_controls::{DutyCycleTimer, DutySwitch};
use aq_core::numeric::ensure_non_negative;
use aq_core::units::minutes;

use crate::catalog::{ComponentKind, ParamValue};
use crate::common::check_rate;
use crate::error::ComponentResult;
use crate::traits::{FlowComponent, StateSample};

/// Always-on pump with a fixed rate.
#[derive(Clone, Debug, PartialEq)]
pub struct Pump {
    /// Pump rate (l/min)
    pub outflow_lpm: f64,
}

impl Pump {
    pub fn new(outflow_lpm: f64) -> ComponentResult<Self> {
        Ok(Self {
            outflow_lpm: check_rate(outflow_lpm, "pump outflow")?,
        })
    }
}

impl FlowComponent for Pump {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Pump
    }

    fn outflow_lpm(&self) -> f64 {
        self.outflow_lpm
    }

    fn state(&self) -> StateSample {
        StateSample::OnOff(true)
    }

    fn step(&mut self, _elapsed_s: f64, _inflow_lpm: Option<f64>) -> ComponentResult<()> {
        Ok(())
    }

    fn params(&self) -> Vec<(&'static str, ParamValue)> {
        vec![("outflow", ParamValue::Float(self.outflow_lpm))]
    }
}

/// Pump switched on and off by a timer with fixed on/off periods.
///
/// ## Switching
///
/// The pump starts on. While on it pumps at `outflow_lpm` until the on
/// period has elapsed; the tick at which it has fully elapsed already
/// reports zero, and the following step flips the switch off. The off
/// phase mirrors this: the tick at which the off period has elapsed already
/// reports the full rate, one tick before the switch turns back on.
#[derive(Clone, Debug, PartialEq)]
pub struct TimedPump {
    /// On period (min)
    pub ontime_min: f64,
    /// Off period (min)
    pub offtime_min: f64,
    /// Rate while running (l/min)
    pub outflow_lpm: f64,
    switch: DutySwitch,
}

impl TimedPump {
    /// Create a timed pump.
    ///
    /// # Arguments
    /// * `ontime_min` - Minutes spent pumping per cycle
    /// * `offtime_min` - Minutes spent idle per cycle
    /// * `outflow_lpm` - Rate while pumping (l/min)
    pub fn new(ontime_min: f64, offtime_min: f64, outflow_lpm: f64) -> ComponentResult<Self> {
        let ontime_min = ensure_non_negative(ontime_min, "pump on time")?;
        let offtime_min = ensure_non_negative(offtime_min, "pump off time")?;
        Ok(Self {
            ontime_min,
            offtime_min,
            outflow_lpm: check_rate(outflow_lpm, "pump outflow")?,
            switch: DutySwitch::new(minutes(ontime_min), minutes(offtime_min))?,
        })
    }

    pub fn switch(&self) -> &DutySwitch {
        &self.switch
    }
}

impl FlowComponent for TimedPump {
    fn kind(&self) -> ComponentKind {
        ComponentKind::TimedPump
    }

    fn outflow_lpm(&self) -> f64 {
        if self.switch.is_active() {
            self.outflow_lpm
        } else {
            0.0
        }
    }

    fn state(&self) -> StateSample {
        StateSample::OnOff(self.switch.is_on())
    }

    fn step(&mut self, elapsed_s: f64, _inflow_lpm: Option<f64>) -> ComponentResult<()> {
        if self.switch.advance(elapsed_s) {
            tracing::debug!(on = self.switch.is_on(), "timed pump switched");
        }
        Ok(())
    }

    fn params(&self) -> Vec<(&'static str, ParamValue)> {
        vec![
            ("outflow", ParamValue::Float(self.outflow_lpm)),
            ("ontime", ParamValue::Float(self.ontime_min)),
            ("offtime", ParamValue::Float(self.offtime_min)),
        ]
    }
}

/// Timed pump whose periods come from an RC timing circuit.
///
/// A relay on the timer output switches the pump. In the normal wiring the
/// pump runs while the timer output is high; the inverted wiring uses the
/// relay's normally-closed side, so the pump runs while the output is low.
/// Durations are fixed at construction; switching behaves exactly like
/// [`TimedPump`].
#[derive(Clone, Debug, PartialEq)]
pub struct TimerPump {
    /// Timer resistor 1 (kΩ)
    pub r1_kohm: f64,
    /// Timer resistor 2 (kΩ)
    pub r2_kohm: f64,
    /// Timer capacitor (µF)
    pub c_uf: f64,
    /// Rate while running (l/min)
    pub outflow_lpm: f64,
    /// Pump runs on timer-low instead of timer-high
    pub inverted: bool,
    switch: DutySwitch,
}

impl TimerPump {
    /// Pump running while the timer output is high.
    pub fn new(
        r1_kohm: f64,
        r2_kohm: f64,
        c_uf: f64,
        outflow_lpm: f64,
        timer: &dyn DutyCycleTimer,
    ) -> ComponentResult<Self> {
        Self::build(r1_kohm, r2_kohm, c_uf, outflow_lpm, false, timer)
    }

    /// Pump running while the timer output is low.
    pub fn inverted(
        r1_kohm: f64,
        r2_kohm: f64,
        c_uf: f64,
        outflow_lpm: f64,
        timer: &dyn DutyCycleTimer,
    ) -> ComponentResult<Self> {
        Self::build(r1_kohm, r2_kohm, c_uf, outflow_lpm, true, timer)
    }

    fn build(
        r1_kohm: f64,
        r2_kohm: f64,
        c_uf: f64,
        outflow_lpm: f64,
        inverted: bool,
        timer: &dyn DutyCycleTimer,
    ) -> ComponentResult<Self> {
        let r1_kohm = ensure_non_negative(r1_kohm, "timer resistor 1")?;
        let r2_kohm = ensure_non_negative(r2_kohm, "timer resistor 2")?;
        let c_uf = ensure_non_negative(c_uf, "timer capacitor")?;

        let high_s = timer.time_high(r1_kohm, r2_kohm, c_uf);
        let low_s = timer.time_low(r2_kohm, c_uf);
        let (on_s, off_s) = if inverted {
            (low_s, high_s)
        } else {
            (high_s, low_s)
        };
        tracing::debug!(on_s, off_s, inverted, "timer pump durations");

        Ok(Self {
            r1_kohm,
            r2_kohm,
            c_uf,
            outflow_lpm: check_rate(outflow_lpm, "pump outflow")?,
            inverted,
            switch: DutySwitch::from_seconds(on_s, off_s)?,
        })
    }

    pub fn switch(&self) -> &DutySwitch {
        &self.switch
    }
}

impl FlowComponent for TimerPump {
    fn kind(&self) -> ComponentKind {
        if self.inverted {
            ComponentKind::InvTimed555Pump
        } else {
            ComponentKind::Timed555Pump
        }
    }

    fn outflow_lpm(&self) -> f64 {
        if self.switch.is_active() {
            self.outflow_lpm
        } else {
            0.0
        }
    }

    fn state(&self) -> StateSample {
        StateSample::OnOff(self.switch.is_on())
    }

    fn step(&mut self, elapsed_s: f64, _inflow_lpm: Option<f64>) -> ComponentResult<()> {
        if self.switch.advance(elapsed_s) {
            tracing::debug!(on = self.switch.is_on(), "timer pump switched");
        }
        Ok(())
    }

    fn params(&self) -> Vec<(&'static str, ParamValue)> {
        vec![
            ("outflow", ParamValue::Float(self.outflow_lpm)),
            ("r1", ParamValue::Float(self.r1_kohm)),
            ("r2", ParamValue::Float(self.r2_kohm)),
            ("c", ParamValue::Float(self.c_uf)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aq_controls::Astable555;

    /// Timer with fixed outputs, independent of the circuit values.
    struct FixedTimer {
        high_s: f64,
        low_s: f64,
    }

    impl DutyCycleTimer for FixedTimer {
        fn time_high(&self, _r1: f64, _r2: f64, _c: f64) -> f64 {
            self.high_s
        }

        fn time_low(&self, _r2: f64, _c: f64) -> f64 {
            self.low_s
        }
    }

    fn outflow_trace(pump: &mut dyn FlowComponent, dt: f64, ticks: usize) -> Vec<f64> {
        let mut trace = Vec::with_capacity(ticks);
        for _ in 0..ticks {
            trace.push(pump.outflow_lpm());
            pump.step(dt, None).unwrap();
        }
        trace
    }

    #[test]
    fn pump_stays_on() {
        let mut pump = Pump::new(5.0).unwrap();
        for _ in 0..50 {
            pump.step(10.0, None).unwrap();
            assert_eq!(pump.outflow_lpm(), 5.0);
            assert_eq!(pump.state(), StateSample::OnOff(true));
        }
    }

    #[test]
    fn pump_invalid_rate() {
        assert!(Pump::new(-5.0).is_err());
        assert!(Pump::new(f64::NAN).is_err());
    }

    #[test]
    fn timed_pump_lookahead_edges() {
        // 1 min on, 1 min off, 10 s ticks
        let mut pump = TimedPump::new(1.0, 1.0, 10.0).unwrap();
        let trace = outflow_trace(&mut pump, 10.0, 20);

        // on phase: six running ticks, then the expired tick reports zero
        assert_eq!(&trace[0..6], &[10.0; 6]);
        assert_eq!(trace[6], 0.0);
        // off phase: six idle ticks, then the expired tick already runs
        assert_eq!(&trace[7..13], &[0.0; 6]);
        assert_eq!(trace[13], 10.0);
        // back on
        assert_eq!(&trace[14..20], &[10.0; 6]);
    }

    #[test]
    fn timed_pump_state_flips_after_expired_tick() {
        let mut pump = TimedPump::new(1.0, 1.0, 10.0).unwrap();
        let mut states = Vec::new();
        for _ in 0..15 {
            states.push(pump.state());
            pump.step(10.0, None).unwrap();
        }
        assert!(states[..7].iter().all(|s| *s == StateSample::OnOff(true)));
        assert!(states[7..14].iter().all(|s| *s == StateSample::OnOff(false)));
        assert_eq!(states[14], StateSample::OnOff(true));
    }

    #[test]
    fn timed_pump_params_in_minutes() {
        let pump = TimedPump::new(2.0, 3.5, 7.0).unwrap();
        assert_eq!(
            pump.params(),
            vec![
                ("outflow", ParamValue::Float(7.0)),
                ("ontime", ParamValue::Float(2.0)),
                ("offtime", ParamValue::Float(3.5)),
            ]
        );
        assert!((pump.switch().on_s() - 120.0).abs() < 1e-9);
        assert!((pump.switch().off_s() - 210.0).abs() < 1e-9);
    }

    #[test]
    fn timer_pump_uses_high_for_on() {
        let timer = FixedTimer {
            high_s: 30.0,
            low_s: 10.0,
        };
        let pump = TimerPump::new(1.0, 1.0, 1.0, 4.0, &timer).unwrap();
        assert_eq!(pump.switch().on_s(), 30.0);
        assert_eq!(pump.switch().off_s(), 10.0);
        assert_eq!(pump.kind(), ComponentKind::Timed555Pump);
    }

    #[test]
    fn inverted_timer_pump_swaps_durations() {
        let timer = FixedTimer {
            high_s: 30.0,
            low_s: 10.0,
        };
        let pump = TimerPump::inverted(1.0, 1.0, 1.0, 4.0, &timer).unwrap();
        assert_eq!(pump.switch().on_s(), 10.0);
        assert_eq!(pump.switch().off_s(), 30.0);
        assert_eq!(pump.kind(), ComponentKind::InvTimed555Pump);
    }

    #[test]
    fn timer_pump_matches_timed_pump_behaviour() {
        let timer = FixedTimer {
            high_s: 60.0,
            low_s: 60.0,
        };
        let mut timer_pump = TimerPump::new(1.0, 1.0, 1.0, 10.0, &timer).unwrap();
        let mut timed_pump = TimedPump::new(1.0, 1.0, 10.0).unwrap();
        assert_eq!(
            outflow_trace(&mut timer_pump, 10.0, 40),
            outflow_trace(&mut timed_pump, 10.0, 40)
        );
    }

    #[test]
    fn timer_pump_with_astable() {
        let pump = TimerPump::new(10.0, 100.0, 1000.0, 4.0, &Astable555).unwrap();
        assert!(pump.switch().on_s() > pump.switch().off_s());
    }

    #[test]
    fn timer_pump_rejects_negative_resistor() {
        assert!(TimerPump::new(-1.0, 100.0, 1000.0, 4.0, &Astable555).is_err());
    }
}
