use std::time::Duration;

use spin_sleep::SpinSleeper;
use tracing::{debug, info, warn};
use unicycle_kinematics::{ControlInput, MotionModel, State, UnicycleModel};

use crate::settings::{Segment, SimulationSettings};

/// Expands a schedule into one control input per step, in order.
pub fn expand_schedule(schedule: &[Segment]) -> impl Iterator<Item = ControlInput> + '_ {
    schedule
        .iter()
        .flat_map(|segment| std::iter::repeat_n(segment.control(), segment.steps as usize))
}

/// Drives a model over a command schedule from a fixed initial state.
pub struct Simulation {
    model: UnicycleModel,
    settings: SimulationSettings,
}

impl Simulation {
    pub fn new(model: UnicycleModel, settings: SimulationSettings) -> Self {
        Simulation { model, settings }
    }

    /// Runs the whole schedule and returns every propagated state, initial state excluded.
    pub fn run(&self) -> Vec<State> {
        let dt = self.settings.dt;
        let total_steps: usize = self.settings.schedule.iter().map(|s| s.steps as usize).sum();
        info!(
            model = %self.model,
            dt,
            total_steps,
            initial_state = %self.settings.initial_state,
            "Starting rollout"
        );

        let pacing = if self.settings.realtime { Self::pacing(dt) } else { None };

        let mut trajectory = Vec::with_capacity(total_steps);
        let mut previous: Option<ControlInput> = None;
        let mut state = self.settings.initial_state;

        for control in expand_schedule(&self.settings.schedule) {
            if previous != Some(control) {
                match self.model.turn_radius(&control) {
                    Some(radius) => debug!(%control, radius, "Arc segment"),
                    None => debug!(%control, "Straight segment"),
                }
                previous = Some(control);
            }

            state = self.model.next_state(&state, &control, dt);
            let step = trajectory.len() + 1;
            let logged = if self.settings.wrap_heading { state.normalized() } else { state };
            debug!(step, state = %logged, "Propagated state");
            trajectory.push(state);

            if let Some((sleeper, period)) = &pacing {
                sleeper.sleep(*period);
            }
        }

        match trajectory.last() {
            Some(last) => {
                let logged = if self.settings.wrap_heading { last.normalized() } else { *last };
                info!(steps = trajectory.len(), final_state = %logged, "Rollout complete");
            }
            None => warn!("Schedule is empty; nothing to propagate"),
        }

        trajectory
    }

    /// Sleeper and period for real-time pacing, or `None` when `dt` cannot be slept.
    fn pacing(dt: f64) -> Option<(SpinSleeper, Duration)> {
        if dt <= 0.0 {
            warn!(dt, "Real-time pacing requested with a non-positive time step; running unpaced");
            return None;
        }
        match Duration::try_from_secs_f64(dt) {
            Ok(period) => Some((SpinSleeper::new(10_000), period)),
            Err(e) => {
                warn!(dt, error = %e, "Time step does not fit a sleep duration; running unpaced");
                None
            }
        }
    }
}
