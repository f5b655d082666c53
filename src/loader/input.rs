use std::path::Path;

use crate::api::scenario_dto::{ScenarioDto, ScenariosDto};
use crate::error::{InvalidInputError, Result};
use crate::loader::parser::{parse_disk_size, parse_head_position, parse_json_file, parse_requests};

/// Validated input for one FCFS calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleInput {
    pub head_position: i64,
    pub requests: Vec<i64>,
    pub disk_size: Option<i64>,
}

impl ScheduleInput {
    /// Builds an input, enforcing a non-empty request list and, when a disk size
    /// is given, that every cylinder lies in `0..disk_size`.
    pub fn new(head_position: i64, requests: Vec<i64>, disk_size: Option<i64>) -> std::result::Result<Self, InvalidInputError> {
        if requests.is_empty() {
            return Err(InvalidInputError::MissingRequests);
        }

        if let Some(disk_size) = disk_size {
            if disk_size <= 0 {
                return Err(InvalidInputError::NonPositiveDiskSize(disk_size));
            }
            if let Some(&value) = std::iter::once(&head_position).chain(requests.iter()).find(|&&c| c < 0 || c >= disk_size) {
                return Err(InvalidInputError::OutOfRange { value, disk_size });
            }
        }

        Ok(ScheduleInput { head_position, requests, disk_size })
    }
}

/// Source of calculator input. Implementations do all parsing and validation
/// so the calculator only ever sees well-typed values.
pub trait InputAdapter {
    /// Short label used in log lines and reports.
    fn name(&self) -> String;

    fn read_inputs(&self) -> std::result::Result<ScheduleInput, InvalidInputError>;
}

/// Raw text fields as typed by a user, e.g. CLI arguments.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    pub head_position: Option<String>,
    pub requests: Option<String>,
    pub disk_size: Option<String>,
}

impl TextInput {
    pub fn new(head_position: Option<&str>, requests: Option<&str>, disk_size: Option<&str>) -> Self {
        TextInput {
            head_position: head_position.map(str::to_string),
            requests: requests.map(str::to_string),
            disk_size: disk_size.map(str::to_string),
        }
    }

    fn parse(&self) -> std::result::Result<ScheduleInput, InvalidInputError> {
        let requests = parse_requests(self.requests.as_deref().unwrap_or_default())?;
        let head_position = parse_head_position(self.head_position.as_deref().unwrap_or_default())?;
        let disk_size = self.disk_size.as_deref().map(parse_disk_size).transpose()?;

        ScheduleInput::new(head_position, requests, disk_size)
    }
}

impl InputAdapter for TextInput {
    fn name(&self) -> String {
        "command line".to_string()
    }

    fn read_inputs(&self) -> std::result::Result<ScheduleInput, InvalidInputError> {
        self.parse().inspect_err(|e| log::warn!("Rejected {} input: {}", self.name(), e))
    }
}

/// One scenario taken from a JSON scenario file.
#[derive(Debug, Clone)]
pub struct ScenarioInput {
    index: usize,
    dto: ScenarioDto,
}

impl ScenarioInput {
    pub fn new(index: usize, dto: ScenarioDto) -> Self {
        ScenarioInput { index, dto }
    }
}

impl InputAdapter for ScenarioInput {
    fn name(&self) -> String {
        match &self.dto.name {
            Some(name) => name.clone(),
            None => format!("scenario #{}", self.index + 1),
        }
    }

    fn read_inputs(&self) -> std::result::Result<ScheduleInput, InvalidInputError> {
        self.dto
            .head_position
            .ok_or(InvalidInputError::MissingHeadPosition)
            .and_then(|head_position| ScheduleInput::new(head_position, self.dto.requests.clone(), self.dto.disk_size))
            .inspect_err(|e| log::warn!("Rejected {}: {}", self.name(), e))
    }
}

/// Loads every scenario of a JSON scenario file as a separate input adapter.
pub fn load_scenarios(file_path: impl AsRef<Path>) -> Result<Vec<ScenarioInput>> {
    let file_path = file_path.as_ref();
    let root: ScenariosDto = parse_json_file(file_path)?;
    log::info!("Loaded {} scenarios from '{}'.", root.scenarios.len(), file_path.display());

    Ok(root.scenarios.into_iter().enumerate().map(|(i, dto)| ScenarioInput::new(i, dto)).collect())
}
