//! What goes where on the figure, computed without touching Python.

use crate::{
    objective::{legend_cell, AxisPair, Cell, AXIS_PAIRS},
    scenario::Scenario,
    table::ResultTable,
};

/// One scenario projected onto the two objectives of a panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub scenario: Scenario,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// A scatter subplot: one series per table, in table order.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub cell: Cell,
    pub pair: AxisPair,
    pub series: Vec<Series>,
}

impl Panel {
    pub fn xlabel(&self) -> &'static str { self.pair.x().name() }

    pub fn ylabel(&self) -> &'static str { self.pair.y().name() }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FigurePlan {
    pub panels: Vec<Panel>,
    /// Panel whose legend entries are copied to `legend_cell`.
    pub legend_source: Cell,
    pub legend_cell: Cell,
}

impl FigurePlan {
    pub fn new(tables: &[ResultTable]) -> FigurePlan {
        let panels: Vec<Panel> = AXIS_PAIRS.iter().map(|&pair| {
            let series = tables.iter().map(|t| {
                let (x, y) = t.project(pair);
                Series { scenario: t.scenario(), x, y }
            }).collect();
            Panel { cell: pair.cell(), pair, series }
        }).collect();
        FigurePlan { legend_source: AXIS_PAIRS[0].cell(),
                     legend_cell: legend_cell(),
                     panels }
    }

    pub fn panel(&self, cell: Cell) -> Option<&Panel> {
        self.panels.iter().find(|p| p.cell == cell)
    }

    /// The scenarios drawn on the legend source panel, in drawing order.
    pub fn legend_entries(&self) -> Vec<Scenario> {
        self.panel(self.legend_source)
            .map(|p| p.series.iter().map(|s| s.scenario).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Four tables of three rows, every value distinct.
    fn tables() -> [ResultTable; 4] {
        let mut k = 0.;
        Scenario::ALL.map(|s| {
            let mut row = || { k += 3.; [k, k + 1., k + 2.] };
            let rows = [row(), row(), row()];
            ResultTable::from_rows(s, &rows)
        })
    }

    #[test]
    fn panels_project_every_table() {
        let tables = tables();
        let plan = FigurePlan::new(&tables);
        assert_eq!(plan.panels.len(), 3);
        for panel in &plan.panels {
            assert_eq!(panel.cell, panel.pair.cell());
            assert_eq!(panel.series.len(), 4);
            for (series, table) in panel.series.iter().zip(&tables) {
                assert_eq!(series.scenario, table.scenario());
                assert_eq!(series.x, table.column(panel.pair.x()).to_vec());
                assert_eq!(series.y, table.column(panel.pair.y()).to_vec());
            }
        }
    }

    #[test]
    fn labels_per_cell() {
        let plan = FigurePlan::new(&tables());
        let label = |row, col| {
            let p = plan.panel(Cell { row, col }).unwrap();
            (p.xlabel(), p.ylabel())
        };
        assert_eq!(label(0, 0), ("economic", "biodiversity"));
        assert_eq!(label(1, 0), ("economic", "health"));
        assert_eq!(label(1, 1), ("biodiversity", "health"));
        assert!(plan.panel(Cell { row: 0, col: 1 }).is_none());
    }

    #[test]
    fn legend_has_one_entry_per_table() {
        let plan = FigurePlan::new(&tables());
        assert_eq!(plan.legend_source, Cell { row: 0, col: 0 });
        assert_eq!(plan.legend_cell, Cell { row: 0, col: 1 });
        assert_eq!(plan.legend_entries(), Scenario::ALL);
    }
}
