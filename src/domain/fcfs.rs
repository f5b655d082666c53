use crate::domain::movement::MovementPath;

/// Outcome of one FCFS calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleResult {
    pub total_movement: u64,
    pub path: MovementPath,
}

impl ScheduleResult {
    /// Number of requests that were serviced (the path minus the initial head position).
    pub fn request_count(&self) -> usize {
        self.path.len() - 1
    }
}

/// Services `requests` strictly in the given order, starting from `head_position`.
///
/// Every integer is accepted, including negative cylinders and an empty
/// request list (which yields a zero movement and a single-element path).
/// Range checks belong to the input adapters.
pub fn compute_fcfs(head_position: i64, requests: &[i64]) -> ScheduleResult {
    let mut current = head_position;
    let mut total: u64 = 0;
    let mut path = MovementPath::starting_at(head_position);

    for &request in requests {
        total = total.saturating_add(request.abs_diff(current));
        current = request;
        path.push(current);
    }

    log::debug!("FCFS from cylinder {} over {} requests: total head movement {}", head_position, requests.len(), total);

    ScheduleResult { total_movement: total, path }
}
