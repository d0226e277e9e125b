//! The three objectives and the fixed pairs of them that are plotted
//! against each other on the 2×2 grid.

use std::fmt::{Display, Formatter};

/// A measured outcome dimension.  The discriminant is the column of
/// the objective in a result table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Objective {
    Economic = 0,
    Biodiversity = 1,
    Health = 2,
}

impl Objective {
    pub const ALL: [Objective; 3] =
        [Objective::Economic, Objective::Biodiversity, Objective::Health];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Axis label.
    pub fn name(self) -> &'static str {
        match self {
            Objective::Economic => "economic",
            Objective::Biodiversity => "biodiversity",
            Objective::Health => "health",
        }
    }
}

impl Display for Objective {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Position of a subplot in the grid, `(row, col)` from the top left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

/// Rows and columns of the subplot grid.
pub const GRID_ROWS: usize = 2;
pub const GRID_COLS: usize = 2;

/// Two objectives drawn against each other, `x` on the horizontal
/// axis.  Invariant: `x` comes before `y` in [`Objective::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisPair {
    x: Objective,
    y: Objective,
}

/// The pairs drawn on the figure, in drawing order.
pub const AXIS_PAIRS: [AxisPair; 3] = [
    AxisPair { x: Objective::Economic, y: Objective::Biodiversity },
    AxisPair { x: Objective::Economic, y: Objective::Health },
    AxisPair { x: Objective::Biodiversity, y: Objective::Health },
];

impl AxisPair {
    /// Return `None` unless `x` precedes `y`.
    pub fn new(x: Objective, y: Objective) -> Option<AxisPair> {
        (x < y).then_some(AxisPair { x, y })
    }

    pub fn x(self) -> Objective { self.x }

    pub fn y(self) -> Objective { self.y }

    /// The lower triangle of the grid: the row is picked by `y` (which
    /// is never the first objective) and the column by `x`.
    pub fn cell(self) -> Cell {
        Cell { row: self.y.index() - 1, col: self.x.index() }
    }
}

/// The only grid cell that no pair of [`AXIS_PAIRS`] lands on.
pub fn legend_cell() -> Cell {
    let used: Vec<Cell> = AXIS_PAIRS.iter().map(|p| p.cell()).collect();
    (0 .. GRID_ROWS)
        .flat_map(|row| (0 .. GRID_COLS).map(move |col| Cell { row, col }))
        .find(|c| !used.contains(c))
        .unwrap_or(Cell { row: 0, col: GRID_COLS - 1 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_land_in_lower_triangle() {
        let cells: Vec<_> = AXIS_PAIRS.iter().map(|p| p.cell()).collect();
        assert_eq!(cells, [Cell { row: 0, col: 0 },
                           Cell { row: 1, col: 0 },
                           Cell { row: 1, col: 1 }]);
    }

    #[test]
    fn pair_names() {
        let names: Vec<_> = AXIS_PAIRS.iter()
            .map(|p| (p.x().name(), p.y().name()))
            .collect();
        assert_eq!(names, [("economic", "biodiversity"),
                           ("economic", "health"),
                           ("biodiversity", "health")]);
    }

    #[test]
    fn legend_goes_top_right() {
        assert_eq!(legend_cell(), Cell { row: 0, col: 1 });
    }

    #[test]
    fn pair_requires_ordered_objectives() {
        assert!(AxisPair::new(Objective::Health, Objective::Economic).is_none());
        assert!(AxisPair::new(Objective::Health, Objective::Health).is_none());
        assert_eq!(AxisPair::new(Objective::Economic, Objective::Health),
                   Some(AXIS_PAIRS[1]));
        assert_eq!(Objective::ALL.map(Objective::index), [0, 1, 2]);
    }
}
