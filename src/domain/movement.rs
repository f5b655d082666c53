use std::fmt;

/// One seek of the disk head between two consecutive positions of a [`MovementPath`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeekStep {
    /// Zero-based index of the step. Step `i` moves from `path[i]` to `path[i + 1]`.
    pub index: usize,
    pub from: i64,
    pub to: i64,
    /// Absolute distance travelled, in cylinders.
    pub distance: u64,
}

/// Ordered cylinder positions visited by the head, starting with the initial head position.
///
/// The path is immutable once built. It always holds at least one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementPath {
    positions: Vec<i64>,
}

impl MovementPath {
    pub fn starting_at(head_position: i64) -> Self {
        MovementPath { positions: vec![head_position] }
    }

    pub(crate) fn push(&mut self, position: i64) {
        self.positions.push(position);
    }

    pub fn head_position(&self) -> i64 {
        self.positions[0]
    }

    pub fn positions(&self) -> &[i64] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Never true; a path always contains the initial head position.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn steps(&self) -> impl Iterator<Item = SeekStep> + '_ {
        self.positions.windows(2).enumerate().map(|(index, pair)| SeekStep {
            index,
            from: pair[0],
            to: pair[1],
            distance: pair[0].abs_diff(pair[1]),
        })
    }

    /// Sum of absolute differences between consecutive positions.
    ///
    /// Saturates at `u64::MAX` instead of overflowing.
    pub fn total_variation(&self) -> u64 {
        self.steps().fold(0u64, |acc, step| acc.saturating_add(step.distance))
    }

    pub fn min_cylinder(&self) -> i64 {
        self.positions.iter().copied().min().unwrap_or_default()
    }

    pub fn max_cylinder(&self) -> i64 {
        self.positions.iter().copied().max().unwrap_or_default()
    }
}

impl fmt::Display for MovementPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, position) in self.positions.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", position)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_cover_every_consecutive_pair() {
        let mut path = MovementPath::starting_at(10);
        path.push(4);
        path.push(12);

        let steps: Vec<SeekStep> = path.steps().collect();

        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0], SeekStep { index: 0, from: 10, to: 4, distance: 6 });
        assert_eq!(steps[1], SeekStep { index: 1, from: 4, to: 12, distance: 8 });
        assert_eq!(path.total_variation(), 14);
    }

    #[test]
    fn test_single_position_has_no_steps() {
        let path = MovementPath::starting_at(-3);

        assert_eq!(path.steps().count(), 0);
        assert_eq!(path.total_variation(), 0);
        assert_eq!(path.min_cylinder(), -3);
        assert_eq!(path.max_cylinder(), -3);
        assert!(!path.is_empty());
    }

    #[test]
    fn test_extreme_positions_do_not_overflow() {
        let mut path = MovementPath::starting_at(i64::MIN);
        path.push(i64::MAX);
        path.push(i64::MIN);
        path.push(i64::MAX);

        assert_eq!(path.steps().next().map(|s| s.distance), Some(u64::MAX));
        assert_eq!(path.total_variation(), u64::MAX);
    }

    #[test]
    fn test_display_lists_positions() {
        let mut path = MovementPath::starting_at(0);
        path.push(5);

        assert_eq!(path.to_string(), "[0, 5]");
    }
}
