use std::io::Write;

use crate::api::scenario_dto::ScheduleResultDto;
use crate::domain::fcfs::ScheduleResult;
use crate::ScheduleRun;
use crate::error::Result;

pub const STEP_HEADERS: [&str; 4] = ["step", "from", "to", "distance"];

/// Writes one CSV row per seek step, `;` separated.
pub fn write_steps_csv<W: Write>(result: &ScheduleResult, writer: W) -> Result<()> {
    let mut csv_wtr = csv::WriterBuilder::new().delimiter(b';').from_writer(writer);

    csv_wtr.write_record(STEP_HEADERS)?;
    for step in result.path.steps() {
        csv_wtr.write_record([step.index.to_string(), step.from.to_string(), step.to.to_string(), step.distance.to_string()])?;
    }

    csv_wtr.flush()?;
    Ok(())
}

pub fn to_json(result: &ScheduleResult, disk_size: Option<i64>) -> Result<String> {
    let dto = ScheduleResultDto::from_result(result, disk_size);
    Ok(serde_json::to_string_pretty(&dto)?)
}

/// Serialises several runs as one JSON array, in the given order.
pub fn to_json_array(runs: &[&ScheduleRun]) -> Result<String> {
    let dtos: Vec<ScheduleResultDto> = runs.iter().map(|run| ScheduleResultDto::from_result(&run.result, run.input.disk_size)).collect();
    Ok(serde_json::to_string_pretty(&dtos)?)
}
