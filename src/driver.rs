//! Draw the Pareto fronts of all scenarios and save the figure.

use tracing::{debug, info, warn};
use crate::{
    Error,
    config::{Config, MARKER},
    layout::FigurePlan,
    matplotlib::{self as plt, Axes, Figure},
    objective::{Cell, GRID_COLS, GRID_ROWS},
    table::{self, ResultTable},
};

/// A drawn, not yet saved, figure.
pub struct Drawing {
    pub figure: Figure,
    pub axes: [[Axes; GRID_COLS]; GRID_ROWS],
}

impl Drawing {
    pub fn axes(&self, cell: Cell) -> &Axes {
        &self.axes[cell.row][cell.col]
    }

    fn axes_mut(&mut self, cell: Cell) -> &mut Axes {
        &mut self.axes[cell.row][cell.col]
    }
}

/// Apply the style sheet of `config`.  Unknown styles (older
/// Matplotlib releases name the seaborn styles differently) only
/// produce a warning; a missing Matplotlib is an error.
fn apply_style(config: &Config) -> Result<(), Error> {
    let Some(style) = &config.style else { return Ok(()) };
    match plt::use_style(style) {
        Err(e @ Error::UnknownStyle(_)) => {
            warn!(error = %e, "cannot apply plot style");
            Ok(())
        }
        r => r,
    }
}

/// Draw `plan` on a new figure.
pub fn draw(plan: &FigurePlan, config: &Config) -> Result<Drawing, Error> {
    apply_style(config)?;
    let (figure, axes) = plt::subplots()?;
    let (w, h) = config.figure_size;
    figure.set_size_inches(w, h)?;
    let mut drawing = Drawing { figure, axes };

    for panel in &plan.panels {
        let ax = drawing.axes_mut(panel.cell);
        for series in &panel.series {
            debug!(cell = ?panel.cell, scenario = %series.scenario,
                   points = series.x.len(), "drawing series");
            ax.xy(&series.x, &series.y)
                .fmt(MARKER)
                .label(series.scenario.label())
                .plot()?;
        }
        ax.set_xlabel(panel.xlabel())?.set_ylabel(panel.ylabel())?;
    }

    let entries = drawing.axes(plan.legend_source).legend_handles_labels()?;
    debug!(entries = entries.labels().len(), "moving legend");
    let style = &config.legend;
    let legend_ax = drawing.axes_mut(plan.legend_cell);
    legend_ax.legend()
        .entries(&entries)
        .loc(&style.loc)
        .fontsize(style.fontsize)
        .markerscale(style.markerscale)
        .labelspacing(style.labelspacing)
        .place()?;
    legend_ax.axis_off()?;

    drawing.figure.tight_layout()?;
    Ok(drawing)
}

/// Draw the tables and save the figure to `config.output`.
pub fn render(tables: &[ResultTable; 4], config: &Config)
              -> Result<Drawing, Error> {
    let plan = FigurePlan::new(tables);
    let drawing = draw(&plan, config)?;
    drawing.figure.save().dpi(config.dpi).to_file(&config.output)?;
    info!(path = %config.output.display(), dpi = config.dpi, "saved figure");
    Ok(drawing)
}

/// Load the four result tables, draw them, save the figure and, if
/// requested, show it.  All tables are loaded before anything is drawn.
pub fn run(config: &Config) -> Result<(), Error> {
    info!(input = %config.input_dir.display(), "plotting Pareto fronts");
    let tables = table::load_all(config)?;
    let _drawing = render(&tables, config)?;
    if config.show {
        plt::show()?;
    }
    Ok(())
}
