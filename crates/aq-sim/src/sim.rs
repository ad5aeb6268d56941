//! Simulation runner and result recording.

use aq_chain::Chain;
use aq_components::StateSample;
use aq_core::ComponentId;

use crate::error::{SimError, SimResult};

/// Largest accepted step (seconds).
pub const MAX_TIME_STEP_S: u32 = 3600;
/// Longest accepted run (hours).
pub const MAX_DURATION_H: u32 = 24;

const SECONDS_PER_HOUR: u32 = 3600;

/// Options for simulation runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimOptions {
    /// Fixed time step (seconds)
    pub time_step_s: u32,
    /// Run length (hours)
    pub duration_h: u32,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            time_step_s: 10,
            duration_h: 1,
        }
    }
}

impl SimOptions {
    pub fn new(time_step_s: u32, duration_h: u32) -> Self {
        Self {
            time_step_s,
            duration_h,
        }
    }

    pub fn validate(&self) -> SimResult<()> {
        if !(1..=MAX_TIME_STEP_S).contains(&self.time_step_s) {
            return Err(SimError::InvalidArg {
                what: "time step must be between 1 and 3600 seconds",
            });
        }
        if !(1..=MAX_DURATION_H).contains(&self.duration_h) {
            return Err(SimError::InvalidArg {
                what: "run duration must be between 1 and 24 hours",
            });
        }
        Ok(())
    }

    /// Run length in seconds.
    pub fn duration_s(&self) -> u32 {
        self.duration_h.saturating_mul(SECONDS_PER_HOUR)
    }

    /// Number of samples a run produces: multiples of the step below the
    /// duration.
    pub fn total_steps(&self) -> usize {
        match self.time_step_s {
            0 => 0,
            step => self.duration_s().div_ceil(step) as usize,
        }
    }
}

/// Progress report passed to [`run_with_progress`] after every step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimProgress {
    /// Steps completed so far (1-based)
    pub step: usize,
    pub total_steps: usize,
    /// Time of the sample just taken (seconds)
    pub t_s: u32,
}

/// Record of simulation results.
///
/// `series[i][k]` is the state of chain position `i` at time `t_s[k]`,
/// taken before the step at that time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimRecord {
    /// Time points (seconds)
    pub t_s: Vec<u32>,
    /// One state sequence per chain position
    pub series: Vec<Vec<StateSample>>,
}

impl SimRecord {
    fn with_capacity(components: usize, samples: usize) -> Self {
        Self {
            t_s: Vec::with_capacity(samples),
            series: (0..components)
                .map(|_| Vec::with_capacity(samples))
                .collect(),
        }
    }

    fn push(&mut self, t_s: u32, chain: &Chain) {
        self.t_s.push(t_s);
        for (series, state) in self.series.iter_mut().zip(chain.states()) {
            series.push(state);
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.t_s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t_s.is_empty()
    }

    pub fn component_count(&self) -> usize {
        self.series.len()
    }

    /// Samples for one chain position.
    pub fn states(&self, id: ComponentId) -> Option<&[StateSample]> {
        self.series.get(id.as_usize()).map(Vec::as_slice)
    }

    /// Numeric samples for one chain position (see [`StateSample::value`]).
    pub fn values(&self, id: ComponentId) -> Option<Vec<Option<f64>>> {
        self.states(id)
            .map(|s| s.iter().map(StateSample::value).collect())
    }

    /// The time axis in minutes.
    pub fn t_min(&self) -> Vec<f64> {
        self.t_s.iter().map(|&t| f64::from(t) / 60.0).collect()
    }
}

/// Run `chain` with a `time_step_s` step for `duration_h` hours.
pub fn run(chain: &mut Chain, time_step_s: u32, duration_h: u32) -> SimResult<SimRecord> {
    run_with_options(chain, &SimOptions::new(time_step_s, duration_h))
}

pub fn run_with_options(chain: &mut Chain, opts: &SimOptions) -> SimResult<SimRecord> {
    run_with_progress(chain, opts, |_| {})
}

/// Run a simulation, reporting progress after every step.
///
/// At each sample time the chain state is recorded first, then every
/// component steps. A failing step aborts the run with no partial record.
pub fn run_with_progress<F>(
    chain: &mut Chain,
    opts: &SimOptions,
    mut on_progress: F,
) -> SimResult<SimRecord>
where
    F: FnMut(SimProgress),
{
    opts.validate()?;
    if chain.is_empty() {
        return Err(SimError::InvalidArg {
            what: "chain must contain at least one component",
        });
    }

    let duration_s = opts.duration_s();
    let total_steps = opts.total_steps();
    let elapsed_s = f64::from(opts.time_step_s);
    tracing::debug!(
        components = chain.len(),
        time_step_s = opts.time_step_s,
        duration_s,
        total_steps,
        "starting run"
    );

    let mut record = SimRecord::with_capacity(chain.len(), total_steps);
    let mut t_s = 0;
    let mut step = 0;
    while t_s < duration_s {
        record.push(t_s, chain);
        chain
            .step_all(elapsed_s)
            .map_err(|source| SimError::Step { t_s, source })?;

        step += 1;
        tracing::trace!(step, t_s, "stepped chain");
        on_progress(SimProgress {
            step,
            total_steps,
            t_s,
        });
        t_s += opts.time_step_s;
    }

    tracing::debug!(samples = record.len(), "run finished");
    Ok(record)
}
