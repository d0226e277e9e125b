//! Pairwise Pareto front plots of multi-objective optimization results.
//!
//! Four result tables, one per policy scenario, hold the economic,
//! biodiversity and health objective values of the solutions found.
//! Each pair of objectives is scatter plotted on a 2×2 grid, the
//! remaining cell holding the legend:
//!
//! ```text
//!  economic × biodiversity  |  legend
//!  -------------------------+----------------------
//!  economic × health        |  biodiversity × health
//! ```
//!
//! Drawing goes through [Matplotlib][] via the [`matplotlib`] module.
//!
//! ```no_run
//! use pareto_fronts::{config::Config, driver};
//! driver::run(&Config::default())?;
//! # Ok::<(), pareto_fronts::Error>(())
//! ```
//!
//! [Matplotlib]: https://matplotlib.org/

pub mod config;
pub mod driver;
mod error;
pub mod layout;
pub mod matplotlib;
pub mod objective;
pub mod scenario;
pub mod table;

pub use error::Error;
pub use objective::{AxisPair, Objective};
pub use scenario::Scenario;
pub use table::ResultTable;
