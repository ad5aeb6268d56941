//! Integration tests: full runs over small chains.

use aq_chain::{Chain, ChainBuilder};
use aq_components::{
    ComponentKind, Container, FloodDrainContainer, FlowComponent, ParamValue, ParamValues, Pump,
    StateSample, TimedPump, WaterSource,
};
use aq_core::ComponentId;
use aq_sim::{SimError, SimOptions, SimProgress, run, run_with_progress};
use proptest::prelude::*;

fn id(i: u32) -> ComponentId {
    ComponentId::from_index(i)
}

fn volumes(states: &[StateSample]) -> Vec<f64> {
    states
        .iter()
        .map(|s| match s {
            StateSample::Volume(v) => *v,
            other => panic!("expected a volume, got {:?}", other),
        })
        .collect()
}

/// Pump -> Container -> FloodDrainContainer, built through the registry.
fn three_stage_chain(pump_lpm: f64) -> Chain {
    let mut b = ChainBuilder::new();
    b.add_kind(
        ComponentKind::TimedPump,
        ParamValues::new()
            .with("ontime", ParamValue::Integer(5))
            .with("offtime", ParamValue::Integer(3))
            .with("outflow", ParamValue::Float(pump_lpm)),
    )
    .unwrap();
    b.add_kind(
        ComponentKind::Container,
        ParamValues::new()
            .with("outflow", ParamValue::Float(4.0))
            .with("threshold", ParamValue::Integer(20))
            .with("start_content", ParamValue::Integer(15)),
    )
    .unwrap();
    b.add_kind(
        ComponentKind::FloodDrainContainer,
        ParamValues::new()
            .with("outflow", ParamValue::Float(12.0))
            .with("threshold", ParamValue::Integer(30))
            .with("start_content", ParamValue::Integer(0)),
    )
    .unwrap();
    b.build().unwrap()
}

#[test]
fn time_axis_excludes_duration() {
    let mut chain = Chain::new();
    chain.push(Pump::new(1.0).unwrap()).unwrap();

    let record = run(&mut chain, 1000, 1).unwrap();
    assert_eq!(record.t_s, vec![0, 1000, 2000, 3000]);
    assert_eq!(record.series[0].len(), 4);

    let record = run(&mut chain, 3600, 1).unwrap();
    assert_eq!(record.t_s, vec![0]);
}

#[test]
fn container_fills_then_plateaus() {
    // Pump(5) -> Container(outflow 5, threshold 10, start 0)
    let mut chain = Chain::new();
    let pump = chain.push(Pump::new(5.0).unwrap()).unwrap();
    let tank = chain
        .push(Container::new(pump, 5.0, 10.0, 0.0).unwrap())
        .unwrap();

    let record = run(&mut chain, 60, 1).unwrap();
    let v = volumes(record.states(tank).unwrap());

    assert_eq!(&v[..3], &[0.0, 5.0, 10.0]);
    assert!(v[2..].iter().all(|&x| x == 10.0));
    assert!(
        record
            .states(pump)
            .unwrap()
            .iter()
            .all(|s| *s == StateSample::OnOff(true))
    );
}

#[test]
fn flood_drain_cycles() {
    // Source(2) -> FloodDrainContainer(outflow 20, threshold 10, start 0)
    let mut chain = Chain::new();
    chain.push(WaterSource::new(2.0).unwrap()).unwrap();
    chain
        .push(FloodDrainContainer::new(id(0), 20.0, 10.0, 0.0).unwrap())
        .unwrap();

    let record = run(&mut chain, 60, 1).unwrap();
    let v = volumes(record.states(id(1)).unwrap());

    assert_eq!(&v[..7], &[0.0, 2.0, 4.0, 6.0, 8.0, 10.0, -8.0]);

    // A flood is a sample at or above the threshold followed by a drop.
    let floods = v
        .windows(2)
        .filter(|w| w[0] >= 10.0 && w[1] < w[0])
        .count();
    assert!(floods >= 2, "expected repeated cycles, got {}", floods);
}

#[test]
fn flood_drain_outflow_zero_unless_flooding() {
    let mut chain = Chain::new();
    chain.push(WaterSource::new(2.0).unwrap()).unwrap();
    chain
        .push(FloodDrainContainer::new(id(0), 20.0, 10.0, 0.0).unwrap())
        .unwrap();

    for _ in 0..60 {
        chain.step_all(60.0).unwrap();
        let bed = match chain.get(id(1)).unwrap() {
            aq_components::Component::FloodDrain(bed) => bed.clone(),
            other => panic!("unexpected component {:?}", other),
        };
        if !bed.is_flooding() && bed.volume_l() < 10.0 {
            assert_eq!(bed.outflow_lpm(), 0.0);
        }
    }
}

#[test]
fn timed_pump_blocks_follow_lookahead() {
    // 1 min on, 1 min off at 10 s steps: each phase lasts 7 samples.
    let mut chain = Chain::new();
    chain.push(TimedPump::new(1.0, 1.0, 10.0).unwrap()).unwrap();

    let record = run(&mut chain, 10, 1).unwrap();
    let on: Vec<bool> = record.states(id(0)).unwrap()
        .iter()
        .map(|s| *s == StateSample::OnOff(true))
        .collect();

    assert_eq!(on.len(), 360);
    for (k, is_on) in on.iter().enumerate() {
        assert_eq!(*is_on, (k / 7) % 2 == 0, "sample {}", k);
    }
}

#[test]
fn timed_pump_feeds_container_in_blocks() {
    // Pump outflow pattern per 14-tick cycle: 6 x 10, 0, 6 x 0, 10.
    let mut chain = Chain::new();
    let pump = chain.push(TimedPump::new(1.0, 1.0, 6.0).unwrap()).unwrap();
    let tank = chain
        .push(Container::new(pump, 0.0, 1000.0, 0.0).unwrap())
        .unwrap();

    let record = run(&mut chain, 10, 1).unwrap();
    let v = volumes(record.states(tank).unwrap());

    // 6 l/min over 10 s is 1 l per tick.
    assert_eq!(v[6], 6.0);
    assert_eq!(v[7], 6.0);
    assert_eq!(v[14], 7.0);
    assert_eq!(v[14 * 10], 70.0);
}

#[test]
fn invalid_options_rejected_before_stepping() {
    let mut chain = Chain::new();
    let pump = chain.push(TimedPump::new(1.0, 1.0, 6.0).unwrap()).unwrap();
    let before = chain.clone();

    for (step, hours) in [(0, 1), (4000, 1), (10, 0), (10, 25)] {
        assert!(matches!(
            run(&mut chain, step, hours),
            Err(SimError::InvalidArg { .. })
        ));
    }
    assert_eq!(chain, before);
    assert_eq!(chain.get(pump).unwrap().state(), StateSample::OnOff(true));
}

#[test]
fn progress_reports_every_step() {
    let mut chain = three_stage_chain(5.0);
    let mut seen: Vec<SimProgress> = Vec::new();
    let record = run_with_progress(&mut chain, &SimOptions::new(900, 2), |p| seen.push(p)).unwrap();

    assert_eq!(record.len(), 8);
    assert_eq!(seen.len(), 8);
    assert_eq!(seen[0].step, 1);
    assert_eq!(seen[7].step, 8);
    assert!(seen.iter().all(|p| p.total_steps == 8));
    assert_eq!(seen.iter().map(|p| p.t_s).collect::<Vec<_>>(), record.t_s);
}

proptest! {
    #[test]
    fn time_axis_length(step in 1_u32..=3600, hours in 1_u32..=3) {
        let mut chain = Chain::new();
        chain.push(WaterSource::new(1.0).unwrap()).unwrap();

        let record = run(&mut chain, step, hours).unwrap();
        let duration = hours * 3600;
        prop_assert_eq!(record.len(), duration.div_ceil(step) as usize);
        prop_assert!(record.t_s.iter().enumerate().all(|(k, &t)| t == k as u32 * step));
        prop_assert!(record.t_s.iter().all(|&t| t < duration));
        prop_assert_eq!(record.series[0].len(), record.len());
    }

    #[test]
    fn sources_and_pumps_are_invariant(rate in 0.0_f64..50.0, step in 1_u32..600) {
        let mut chain = Chain::new();
        let src = chain.push(WaterSource::new(rate).unwrap()).unwrap();
        let pump = chain.push(Pump::new(rate).unwrap()).unwrap();

        let record = run(&mut chain, step, 1).unwrap();
        prop_assert!(record.states(src).unwrap().iter().all(|s| *s == StateSample::Empty));
        prop_assert!(record.states(pump).unwrap().iter().all(|s| *s == StateSample::OnOff(true)));
        prop_assert_eq!(chain.get(src).unwrap().outflow_lpm(), rate);
        prop_assert_eq!(chain.get(pump).unwrap().outflow_lpm(), rate);
    }

    #[test]
    fn runs_are_deterministic(rate in 0.0_f64..20.0, step in 5_u32..300) {
        let mut a = three_stage_chain(rate);
        let mut b = three_stage_chain(rate);
        let ra = run(&mut a, step, 2).unwrap();
        let rb = run(&mut b, step, 2).unwrap();
        prop_assert_eq!(ra, rb);
    }
}
