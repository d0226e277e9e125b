//! Where the tables come from, where the figure goes and how it looks.
//!
//! The program has no command line or environment configuration; the
//! constants below are the whole of it.  [`Config`] only exists so the
//! driver can be pointed at other directories.

use std::path::PathBuf;
use crate::scenario::Scenario;

/// Directory holding `set1.csv` … `set4.csv`.
pub const INPUT_DIR: &str = "data/optimization_results";
pub const OUTPUT_PATH: &str = "figures/pareto_fronts.png";
pub const DPI: f64 = 300.;
/// Width and height in inches.
pub const FIGURE_SIZE: (f64, f64) = (8., 6.);
pub const STYLE: &str = "seaborn-v0_8-whitegrid";
/// Format of every scenario series: markers only.
pub const MARKER: &str = "o";

/// Placement of the legend in its dedicated cell.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendStyle {
    pub loc: String,
    pub fontsize: f64,
    pub markerscale: f64,
    pub labelspacing: f64,
}

impl Default for LegendStyle {
    fn default() -> Self {
        LegendStyle { loc: "center".into(),
                      fontsize: 12.,
                      markerscale: 1.,
                      labelspacing: 1.2 }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub input_dir: PathBuf,
    pub output: PathBuf,
    pub dpi: f64,
    pub figure_size: (f64, f64),
    /// Matplotlib style sheet applied before drawing, if any.
    pub style: Option<String>,
    pub legend: LegendStyle,
    /// Display the figure once saved.
    pub show: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config { input_dir: INPUT_DIR.into(),
                 output: OUTPUT_PATH.into(),
                 dpi: DPI,
                 figure_size: FIGURE_SIZE,
                 style: Some(STYLE.into()),
                 legend: LegendStyle::default(),
                 show: true }
    }
}

impl Config {
    /// Path of the result table of `scenario`.
    pub fn table_path(&self, scenario: Scenario) -> PathBuf {
        self.input_dir.join(scenario.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn default_paths() {
        let config = Config::default();
        assert_eq!(config.table_path(Scenario::PublicNoStem),
                   Path::new("data/optimization_results/set3.csv"));
        assert_eq!(config.output, Path::new("figures/pareto_fronts.png"));
        assert_eq!(config.dpi, 300.);
        assert_eq!(config.legend.loc, "center");
    }
}
