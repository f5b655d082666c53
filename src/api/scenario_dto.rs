use serde::{Deserialize, Serialize};

use crate::domain::fcfs::ScheduleResult;
use crate::domain::summary::ScheduleSummary;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ScenariosDto {
    pub scenarios: Vec<ScenarioDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioDto {
    pub name: Option<String>,
    pub head_position: Option<i64>,
    #[serde(default)]
    pub requests: Vec<i64>,
    pub disk_size: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResultDto {
    pub head_position: i64,
    pub requests: Vec<i64>,
    pub path: Vec<i64>,
    pub total_movement: u64,
    pub average_seek: f64,
    pub throughput: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_size: Option<i64>,
}

impl ScheduleResultDto {
    pub fn from_result(result: &ScheduleResult, disk_size: Option<i64>) -> Self {
        let summary = ScheduleSummary::from_result(result, disk_size);
        let path = result.path.positions().to_vec();

        ScheduleResultDto {
            head_position: result.path.head_position(),
            requests: path[1..].to_vec(),
            path,
            total_movement: result.total_movement,
            average_seek: summary.average_seek,
            throughput: summary.throughput,
            disk_size,
        }
    }
}
