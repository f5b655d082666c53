use std::fmt;

use crate::domain::fcfs::ScheduleResult;

/// Human facing metrics derived from a [`ScheduleResult`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleSummary {
    pub total_movement: u64,
    pub request_count: usize,
    /// Mean distance per serviced request, 0.0 without requests.
    pub average_seek: f64,
    /// Requests serviced per cylinder travelled, 0.0 when the head never moved.
    pub throughput: f64,
    pub min_cylinder: i64,
    pub max_cylinder: i64,
    pub disk_size: Option<i64>,
}

impl ScheduleSummary {
    pub fn from_result(result: &ScheduleResult, disk_size: Option<i64>) -> Self {
        let request_count = result.request_count();
        let total = result.total_movement;

        let average_seek = if request_count == 0 { 0.0 } else { total as f64 / request_count as f64 };
        let throughput = if total == 0 { 0.0 } else { request_count as f64 / total as f64 };

        ScheduleSummary {
            total_movement: total,
            request_count,
            average_seek,
            throughput,
            min_cylinder: result.path.min_cylinder(),
            max_cylinder: result.path.max_cylinder(),
            disk_size,
        }
    }
}

/// The one-line result shown to the user after a calculation.
pub fn total_movement_line(total_movement: u64) -> String {
    format!("Total Head Movement: {} Cylinders", total_movement)
}

impl fmt::Display for ScheduleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", total_movement_line(self.total_movement))?;
        writeln!(f, "Requests Serviced: {}", self.request_count)?;
        writeln!(f, "Average Seek Distance: {:.2}", self.average_seek)?;
        write!(f, "Throughput: {:.2} requests per cylinder", self.throughput)?;
        if let Some(disk_size) = self.disk_size {
            write!(f, "\nDisk Size: {}", disk_size)?;
        }
        Ok(())
    }
}
