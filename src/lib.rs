use crate::domain::fcfs::{ScheduleResult, compute_fcfs};
use crate::domain::summary::ScheduleSummary;
use crate::error::Result;
use crate::loader::input::{InputAdapter, ScheduleInput};

pub mod api;
pub mod domain;
pub mod error;
pub mod export;
pub mod loader;
pub mod logger;
pub mod render;

/// A validated input together with the FCFS result computed from it.
#[derive(Debug, Clone)]
pub struct ScheduleRun {
    pub name: String,
    pub input: ScheduleInput,
    pub result: ScheduleResult,
}

impl ScheduleRun {
    pub fn summary(&self) -> ScheduleSummary {
        ScheduleSummary::from_result(&self.result, self.input.disk_size)
    }
}

/// Reads and validates input from `adapter`, then runs the FCFS calculation.
///
/// Nothing is computed when the adapter rejects its input.
pub fn run_schedule(adapter: &dyn InputAdapter) -> Result<ScheduleRun> {
    let input = adapter.read_inputs()?;
    log::info!("Scheduling {} requests from '{}' starting at cylinder {}.", input.requests.len(), adapter.name(), input.head_position);

    let result = compute_fcfs(input.head_position, &input.requests);

    Ok(ScheduleRun { name: adapter.name(), input, result })
}

/// Runs every adapter independently; a rejected input does not stop the ones after it.
///
/// Results keep the order of `adapters`.
pub fn run_all(adapters: &[Box<dyn InputAdapter>]) -> Vec<Result<ScheduleRun>> {
    let runs: Vec<Result<ScheduleRun>> = adapters.iter().map(|adapter| run_schedule(adapter.as_ref())).collect();

    let rejected = runs.iter().filter(|run| run.is_err()).count();
    if rejected > 0 {
        log::warn!("{} of {} inputs were rejected.", rejected, runs.len());
    }

    runs
}
