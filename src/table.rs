//! Loading of optimization result tables.
//!
//! A table is a text file with a header row whose fields are separated
//! by single spaces.  The first three columns hold the economic,
//! biodiversity and health objective values of each solution; any
//! further column is ignored.

use std::{fs::File, path::{Path, PathBuf}};
use ndarray::{Array2, ArrayView1, Axis};
use polars::prelude::*;
use tracing::{debug, info};
use crate::{
    Error,
    config::Config,
    objective::{AxisPair, Objective},
    scenario::Scenario,
};

/// The objective values of the solutions found for one scenario, one
/// row per solution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
    scenario: Scenario,
    values: Array2<f64>, // rows × objectives
}

impl ResultTable {
    /// Read the table of `scenario` from `path`.
    pub fn from_path(scenario: Scenario, path: impl AsRef<Path>)
                     -> Result<ResultTable, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Io {
            path: path.to_path_buf(), source })?;
        // Infer column types from every row: an integer-looking prefix
        // must not turn a column with later decimals into Int64.
        let df = CsvReader::new(file)
            .has_header(true)
            .with_separator(b' ')
            .infer_schema(None)
            .finish()?;
        debug!(%scenario, path = %path.display(), shape = ?df.shape(),
               "parsed table");
        Self::from_frame_at(scenario, &df, path)
    }

    /// Take the first three columns of `df` as the objective values.
    pub fn from_frame(scenario: Scenario, df: &DataFrame)
                      -> Result<ResultTable, Error> {
        Self::from_frame_at(scenario, df, Path::new("<frame>"))
    }

    fn from_frame_at(scenario: Scenario, df: &DataFrame, path: &Path)
                     -> Result<ResultTable, Error> {
        let malformed = |reason: String| Error::Table {
            path: PathBuf::from(path), reason };
        let n_obj = Objective::ALL.len();
        if df.width() < n_obj {
            return Err(malformed(format!(
                "expected at least {} columns, found {}", n_obj, df.width())))
        }
        let mut columns = Vec::with_capacity(n_obj);
        for col in &df.get_columns()[.. n_obj] {
            let values = col.cast(&DataType::Float64).map_err(|_| malformed(
                format!("column {:?} is not numeric", col.name())))?;
            // Non-strict casting turns unparsable cells into nulls.
            let values: Option<Vec<f64>> = values.f64()?.into_iter().collect();
            let values = values.ok_or_else(|| malformed(format!(
                "column {:?} has missing or non-numeric values", col.name())))?;
            columns.push(values);
        }
        let values = Array2::from_shape_fn(
            (df.height(), n_obj), |(i, j)| columns[j][i]);
        Ok(ResultTable { scenario, values })
    }

    /// Build a table directly from rows of (economic, biodiversity,
    /// health) values.
    pub fn from_rows(scenario: Scenario, rows: &[[f64; 3]]) -> ResultTable {
        let values = Array2::from_shape_fn(
            (rows.len(), 3), |(i, j)| rows[i][j]);
        ResultTable { scenario, values }
    }

    pub fn scenario(&self) -> Scenario {
        self.scenario
    }

    /// Number of solutions.
    pub fn rows(&self) -> usize {
        self.values.len_of(Axis(0))
    }

    pub fn column(&self, objective: Objective) -> ArrayView1<'_, f64> {
        self.values.column(objective.index())
    }

    /// The values of the two objectives of `pair`, as `(x, y)`.
    pub fn project(&self, pair: AxisPair) -> (Vec<f64>, Vec<f64>) {
        (self.column(pair.x()).to_vec(), self.column(pair.y()).to_vec())
    }
}

/// Load the tables of all scenarios, in [`Scenario::ALL`] order.  When
/// some tables cannot be loaded, the error of the first one is returned.
pub fn load_all(config: &Config) -> Result<[ResultTable; 4], Error> {
    let [a, b, c, d] = Scenario::ALL.map(|s| {
        let path = config.table_path(s);
        let table = ResultTable::from_path(s, &path)?;
        info!(scenario = %s, rows = table.rows(), path = %path.display(),
              "loaded result table");
        Ok::<_, Error>(table)
    });
    Ok([a?, b?, c?, d?])
}
