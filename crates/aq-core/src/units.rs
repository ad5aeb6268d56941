// aq-core/src/units.rs

use uom::si::f64::{
    Capacitance as UomCapacitance, ElectricalResistance as UomElectricalResistance,
    Time as UomTime, Volume as UomVolume, VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type Capacitance = UomCapacitance;
pub type Resistance = UomElectricalResistance;
pub type Time = UomTime;
pub type Volume = UomVolume;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn lpm(v: f64) -> VolumeRate {
    use uom::si::volume_rate::liter_per_minute;
    VolumeRate::new::<liter_per_minute>(v)
}

#[inline]
pub fn liters(v: f64) -> Volume {
    use uom::si::volume::liter;
    Volume::new::<liter>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn minutes(v: f64) -> Time {
    use uom::si::time::minute;
    Time::new::<minute>(v)
}

#[inline]
pub fn kohm(v: f64) -> Resistance {
    use uom::si::electrical_resistance::kiloohm;
    Resistance::new::<kiloohm>(v)
}

#[inline]
pub fn uf(v: f64) -> Capacitance {
    use uom::si::capacitance::microfarad;
    Capacitance::new::<microfarad>(v)
}

/// Seconds in a `Time`.
#[inline]
pub fn as_seconds(t: Time) -> f64 {
    use uom::si::time::second;
    t.get::<second>()
}

/// Minutes in a `Time`.
#[inline]
pub fn as_minutes(t: Time) -> f64 {
    use uom::si::time::minute;
    t.get::<minute>()
}

/// Liters per minute in a `VolumeRate`.
#[inline]
pub fn as_lpm(q: VolumeRate) -> f64 {
    use uom::si::volume_rate::liter_per_minute;
    q.get::<liter_per_minute>()
}

/// Liters in a `Volume`.
#[inline]
pub fn as_liters(v: Volume) -> f64 {
    use uom::si::volume::liter;
    v.get::<liter>()
}
