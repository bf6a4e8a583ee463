/// Axis along which four chips can connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Bottom-left to top-right, /
    UpwardDiagonal,
    /// Top-left to bottom-right, \
    DownwardDiagonal,
}

impl Direction {
    /// All directions, in the order a new chip is checked against them.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::UpwardDiagonal,
        Direction::DownwardDiagonal,
    ];

    /// (row, column) delta walking away from the lowest end of a run.
    pub fn step(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::UpwardDiagonal => (1, 1),
            // Lowest row of a \ run is its right end, so walk up and left
            Direction::DownwardDiagonal => (1, -1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_never_descend() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.step();
            assert!(dr >= 0);
            assert!(dr != 0 || dc > 0, "{dir:?} must move forward");
        }
    }

    #[test]
    fn test_check_order() {
        assert_eq!(Direction::ALL[0], Direction::Horizontal);
        assert_eq!(Direction::ALL[3], Direction::DownwardDiagonal);
    }
}
