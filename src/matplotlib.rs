//! Thin [Rust][] handles over the [Matplotlib][] Python visualization
//! library.
//!
//! The interface stays close to Matplotlib's explicit one while keeping
//! a Rust flavor: every call that reaches Python returns a
//! [`Result`] carrying [`Error`].
//!
//! ```no_run
//! use pareto_fronts::matplotlib as plt;
//! let (fig, [[mut ax]]) = plt::subplots()?;
//! ax.xy(&[1., 2., 3., 4.], &[1., 4., 2., 3.]).fmt("o").plot()?;
//! fig.save().dpi(300.).to_file("target/XY_plot.png")?;
//! # Ok::<(), pareto_fronts::Error>(())
//! ```
//!
//! [Rust]: https://www.rust-lang.org/
//! [Matplotlib]: https://matplotlib.org/

use std::path::Path;
use lazy_static::lazy_static;
use pyo3::{
    prelude::*,
    exceptions::{PyFileNotFoundError, PyOSError, PyPermissionError},
    types::PyDict,
};
use numpy::PyArray1;
use crate::Error;

/// Call the method `$m` of the Python object `$obj` with the
/// positional arguments `$args`.
macro_rules! meth {
    ($obj: expr, $m: ident) => {
        Python::with_gil(|py| -> Result<PyObject, Error> {
            Ok($obj.bind(py).call_method0(stringify!($m))?.unbind())
        })
    };
    ($obj: expr, $m: ident, $args: expr) => {
        Python::with_gil(|py| -> Result<PyObject, Error> {
            Ok($obj.bind(py).call_method1(stringify!($m), $args)?.unbind())
        })
    };
}

/// Import and return a handle to the module `$m`.
macro_rules! pyimport { ($m: literal) => {
    Python::with_gil(|py|
        PyModule::import_bound(py, $m).map(Bound::unbind))
}}

lazy_static! {
    static ref PYPLOT: Result<Py<PyModule>, PyErr> = {
        pyimport!("matplotlib.pyplot")
    };
}

/// Return a handle to the module `$m`.
/// ⚠ This may try to lock Python's GIL.  Make sure it is executed
/// outside a call to `Python::with_gil`.
macro_rules! pymod { ($m: ident) => {
    $m.as_ref().map_err(|_| Error::NoMatplotlib)
}}


/// Trait expressing that `Self` can be converted to a numpy.ndarray.
/// The values are copied so that Matplotlib artists never point into
/// Rust memory once the call returns.
pub trait Data {
    fn to_numpy(&self, py: Python<'_>) -> PyObject;
}

impl<T> Data for T where T: AsRef<[f64]> + ?Sized {
    fn to_numpy(&self, py: Python<'_>) -> PyObject {
        PyArray1::from_slice_bound(py, self.as_ref()).into_any().unbind()
    }
}

#[derive(Debug)]
pub struct Axes {
    ax: PyObject,
}

/// The top level container for all the plot elements.
#[derive(Debug)]
pub struct Figure {
    fig: PyObject, // instance of matplotlib.figure.Figure
}

#[inline(always)]
fn grid<const R: usize, const C: usize, U>(
    f: impl Fn(usize, usize) -> U) -> [[U; C]; R] {
    let mut r = 0;
    [(); R].map(|_| {
        let mut c = 0;
        let row = [(); C].map(|_| {
            let y = f(r, c);
            c += 1;
            y });
        r += 1;
        row })
}

impl Figure {
    /// Add an `R`×`C` grid of subplots to the figure.  The grid is
    /// never squeezed: a 1×1 grid is still `[[Axes; 1]; 1]`.
    pub fn subplots<const R: usize, const C: usize>(
        &self) -> Result<[[Axes; C]; R], Error> {
        Python::with_gil(|py| {
            let kwargs = PyDict::new_bound(py);
            kwargs.set_item("squeeze", false)?;
            let axs = self.fig.bind(py)
                .call_method("subplots", (R, C), Some(&kwargs))?;
            let rows: Vec<Vec<PyObject>> =
                axs.call_method0("tolist")?.extract()?;
            Ok(grid(|r, c| Axes { ax: rows[r][c].clone_ref(py) }))
        })
    }

    /// Set the figure size in inches.
    pub fn set_size_inches(&self, w: f64, h: f64) -> Result<&Self, Error> {
        meth!(self.fig, set_size_inches, (w, h))?;
        Ok(self)
    }

    /// Adjust the padding between and around subplots.
    pub fn tight_layout(&self) -> Result<&Self, Error> {
        meth!(self.fig, tight_layout)?;
        Ok(self)
    }

    pub fn save(&self) -> Savefig<'_> {
        Savefig { fig: self, dpi: None }
    }
}

pub struct Savefig<'a> {
    fig: &'a Figure,
    dpi: Option<f64>,
}

impl<'a> Savefig<'a> {
    pub fn dpi(&mut self, dpi: f64) -> &mut Self {
        if dpi > 0. {
            self.dpi = Some(dpi);
        } else {
            self.dpi = None;
        }
        self
    }

    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        Python::with_gil(|py| {
            let kwargs = PyDict::new_bound(py);
            if let Some(dpi) = self.dpi {
                kwargs.set_item("dpi", dpi)?;
            }
            self.fig.fig.bind(py)
                .call_method("savefig", (path.as_ref(),), Some(&kwargs))
                .map_err(|e| {
                    if e.is_instance_of::<PyFileNotFoundError>(py) {
                        Error::FileNotFound
                    } else if e.is_instance_of::<PyPermissionError>(py) {
                        Error::Permission
                    } else {
                        Error::Python(e)
                    }
                })?;
            Ok(())
        })
    }
}


/// Create a new pyplot figure.
pub fn figure() -> Result<Figure, Error> {
    let pyplot = pymod!(PYPLOT)?;
    Python::with_gil(|py| {
        let fig = pyplot.bind(py).getattr("figure")?.call0()?;
        Ok(Figure { fig: fig.unbind() })
    })
}

pub fn subplots<const R: usize, const C: usize>(
) -> Result<(Figure, [[Axes; C]; R]), Error> {
    let fig = figure()?;
    let ax = fig.subplots()?;
    Ok((fig, ax))
}

/// Display all open figures.
pub fn show() -> Result<(), Error> {
    let pyplot = pymod!(PYPLOT)?;
    Python::with_gil(|py| {
        pyplot.bind(py).getattr("show")?.call0()?;
        Ok(())
    })
}

/// Use the Matplotlib style sheet `name` for the figures created
/// afterwards, e.g. "seaborn-v0_8-whitegrid".  A name Matplotlib does
/// not know yields [`Error::UnknownStyle`].
pub fn use_style(name: &str) -> Result<(), Error> {
    let pyplot = pymod!(PYPLOT)?;
    Python::with_gil(|py| {
        pyplot.bind(py).getattr("style")?
            .call_method1("use", (name,))
            .map_err(|e| {
                // matplotlib.style.use raises OSError for unknown names.
                if e.is_instance_of::<PyOSError>(py) {
                    Error::UnknownStyle(name.to_string())
                } else {
                    Error::Python(e)
                }
            })?;
        Ok(())
    })
}


/// Legend entries (artists and their labels) harvested from an
/// [`Axes`].
pub struct LegendHandles {
    handles: Vec<PyObject>,
    labels: Vec<String>,
}

impl LegendHandles {
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// The data of one line drawn on an [`Axes`].
#[derive(Debug, Clone, PartialEq)]
pub struct LineData {
    pub label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Axes {
    /// Plot `y` versus `x` as lines and/or markers.
    ///
    /// ```no_run
    /// use pareto_fronts::matplotlib as plt;
    /// let (fig, [[mut ax]]) = plt::subplots()?;
    /// ax.xy(&[1., 2.], &[1., 4.]).label("a")
    ///     .xy(&[1., 2.], &[3., 2.]).label("b").plot()?;
    /// fig.save().to_file("target/XY_two.png")?;
    /// # Ok::<(), pareto_fronts::Error>(())
    /// ```
    // FIXME: Do we want to check that `x` and `y` have the same
    // dimension?  Better error message?
    #[must_use]
    pub fn xy<'a, D>(&'a mut self, x: &'a D, y: &'a D) -> XY<'a, D>
    where D: Data + ?Sized {
        // The chain leading to plot starts with the data (using this
        // function) so that additional data may be added, sharing
        // common options.  We also mutably borrow `self` to reflect that
        // the final `.plot()` will mutate the underlying Python object.
        XY { axes: self,
             options: PlotOptions::new(),
             data: (x, y),
             prev_data: vec![] }
    }

    pub fn set_xlabel(&mut self, label: &str) -> Result<&mut Self, Error> {
        meth!(self.ax, set_xlabel, (label,))?;
        Ok(self)
    }

    pub fn set_ylabel(&mut self, label: &str) -> Result<&mut Self, Error> {
        meth!(self.ax, set_ylabel, (label,))?;
        Ok(self)
    }

    pub fn xlabel(&self) -> Result<String, Error> {
        Python::with_gil(|py| {
            Ok(self.ax.bind(py).call_method0("get_xlabel")?.extract()?)
        })
    }

    pub fn ylabel(&self) -> Result<String, Error> {
        Python::with_gil(|py| {
            Ok(self.ax.bind(py).call_method0("get_ylabel")?.extract()?)
        })
    }

    /// Hide the axis lines, ticks, ticklabels, grid and axis labels.
    pub fn axis_off(&mut self) -> Result<&mut Self, Error> {
        meth!(self.ax, axis, ("off",))?;
        Ok(self)
    }

    /// Whether the axis decorations are drawn.
    pub fn axis_on(&self) -> Result<bool, Error> {
        Python::with_gil(|py| {
            Ok(self.ax.bind(py).getattr("axison")?.extract()?)
        })
    }

    /// Return the lines drawn so far, in drawing order.
    pub fn lines(&self) -> Result<Vec<LineData>, Error> {
        Python::with_gil(|py| {
            let mut lines = vec![];
            for line in self.ax.bind(py).call_method0("get_lines")?.iter()? {
                let line = line?;
                let x = line.call_method0("get_xdata")?
                    .call_method0("tolist")?.extract()?;
                let y = line.call_method0("get_ydata")?
                    .call_method0("tolist")?.extract()?;
                let label = line.call_method0("get_label")?.extract()?;
                lines.push(LineData { label, x, y });
            }
            Ok(lines)
        })
    }

    /// Handles and labels of the artists that would go into a legend
    /// of these axes.
    pub fn legend_handles_labels(&self) -> Result<LegendHandles, Error> {
        Python::with_gil(|py| {
            let (handles, labels): (Vec<PyObject>, Vec<String>) =
                self.ax.bind(py)
                    .call_method0("get_legend_handles_labels")?
                    .extract()?;
            Ok(LegendHandles { handles, labels })
        })
    }

    /// Start placing a legend on these axes.  Without
    /// [`Legend::entries`], the artists of these axes are used.
    #[must_use]
    pub fn legend(&mut self) -> Legend<'_> {
        Legend { axes: self,
                 entries: None,
                 loc: None,
                 fontsize: None,
                 markerscale: None,
                 labelspacing: None }
    }

    /// Labels of the legend placed on these axes, if any.
    pub fn legend_labels(&self) -> Result<Vec<String>, Error> {
        Python::with_gil(|py| {
            let legend = self.ax.bind(py).call_method0("get_legend")?;
            if legend.is_none() {
                return Ok(vec![])
            }
            let mut labels = vec![];
            for text in legend.call_method0("get_texts")?.iter()? {
                labels.push(text?.call_method0("get_text")?.extract()?);
            }
            Ok(labels)
        })
    }
}

#[derive(Clone)]
struct PlotOptions<'a> {
    fmt: &'a str,
    label: &'a str,
}

impl<'a> PlotOptions<'a> {
    fn new() -> PlotOptions<'static> {
        PlotOptions { fmt: "", label: "" }
    }

    fn kwargs<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let kwargs = PyDict::new_bound(py);
        if !self.label.is_empty() {
            kwargs.set_item("label", self.label)?
        }
        Ok(kwargs)
    }

    fn plot_xy<D>(&self, py: Python<'_>, axes: &Axes, x: &D, y: &D)
                  -> PyResult<()>
    where D: Data + ?Sized {
        let xn = x.to_numpy(py);
        let yn = y.to_numpy(py);
        axes.ax.bind(py).call_method(
            "plot", (xn, yn, self.fmt), Some(&self.kwargs(py)?))?;
        Ok(())
    }
}

/// Declare methods to set the options assuming `self.options` exists.
macro_rules! set_plotoptions { () => {
    #[must_use]
    pub fn fmt(mut self, fmt: &'a str) -> Self {
        self.options.fmt = fmt;
        self
    }

    #[must_use]
    pub fn label(mut self, label: &'a str) -> Self {
        self.options.label = label;
        self
    }
}}

pub struct XY<'a, D>
where D: ?Sized {
    axes: &'a Axes,
    // Latest data and its setting.
    options: PlotOptions<'a>,
    data: (&'a D, &'a D),
    // Previous data with their settings.
    prev_data: Vec<(PlotOptions<'a>, (&'a D, &'a D))>,
}

impl<'a, D> XY<'a, D>
where D: Data + ?Sized {
    set_plotoptions!();

    /// Plot the data with the options specified in [`XY`].
    pub fn plot(self) -> Result<(), Error> {
        Python::with_gil(|py| {
            for (opt, (x, y)) in self.prev_data.iter() {
                opt.plot_xy(py, self.axes, *x, *y)?;
            }
            let (x, y) = self.data;
            self.options.plot_xy(py, self.axes, x, y)?;
            Ok(())
        })
    }

    /// Add the dataset (`x`, `y`).  It starts with the options of the
    /// previous dataset, which may then be overridden.
    #[must_use]
    pub fn xy(mut self, x: &'a D, y: &'a D) -> Self {
        let data = std::mem::replace(&mut self.data, (x, y));
        self.prev_data.push((self.options.clone(), data));
        self
    }
}


/// Options of a legend being placed on an [`Axes`].
#[must_use]
pub struct Legend<'a> {
    axes: &'a Axes,
    entries: Option<&'a LegendHandles>,
    loc: Option<&'a str>,
    fontsize: Option<f64>,
    markerscale: Option<f64>,
    labelspacing: Option<f64>,
}

impl<'a> Legend<'a> {
    /// Use the entries harvested from (possibly other) axes.
    pub fn entries(mut self, entries: &'a LegendHandles) -> Self {
        self.entries = Some(entries);
        self
    }

    /// Location of the legend, e.g. "center" or "upper right".
    pub fn loc(mut self, loc: &'a str) -> Self {
        self.loc = Some(loc);
        self
    }

    pub fn fontsize(mut self, size: f64) -> Self {
        self.fontsize = Some(size);
        self
    }

    /// Relative size of the legend markers compared to the originals.
    pub fn markerscale(mut self, scale: f64) -> Self {
        self.markerscale = Some(scale);
        self
    }

    /// Vertical space between entries, in font-size units.
    pub fn labelspacing(mut self, spacing: f64) -> Self {
        self.labelspacing = Some(spacing);
        self
    }

    pub fn place(self) -> Result<(), Error> {
        Python::with_gil(|py| {
            let kwargs = PyDict::new_bound(py);
            if let Some(loc) = self.loc {
                kwargs.set_item("loc", loc)?
            }
            if let Some(s) = self.fontsize {
                kwargs.set_item("fontsize", s)?
            }
            if let Some(s) = self.markerscale {
                kwargs.set_item("markerscale", s)?
            }
            if let Some(s) = self.labelspacing {
                kwargs.set_item("labelspacing", s)?
            }
            let ax = self.axes.ax.bind(py);
            match self.entries {
                Some(e) => {
                    let handles: Vec<PyObject> =
                        e.handles.iter().map(|h| h.clone_ref(py)).collect();
                    ax.call_method(
                        "legend", (handles, e.labels.clone()), Some(&kwargs))?;
                }
                None => {
                    ax.call_method("legend", (), Some(&kwargs))?;
                }
            }
            Ok(())
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    // Tests reaching Python need the `matplotlib` module; run them with
    // `cargo test -- --ignored` where it is installed.

    #[test]
    #[ignore = "requires the matplotlib Python module"]
    fn a_basic_grid() -> Result<(), Error> {
        let (fig, [[mut ax0, mut ax1],
                   [mut ax2, mut ax3]]) = subplots()?;
        ax0.xy(&[1., 2., 3., 4.], &[1., 4., 2., 3.]).plot()?;
        ax1.xy(&[1., 2., 3., 4.], &[1., 4., 2., 3.]).fmt(".").plot()?;
        ax2.xy(&[1., 2., 3., 4.], &[1., 4., 2., 3.]).fmt("r").plot()?;
        ax3.xy(&[1., 2., 3., 4.], &[1., 4., 2., 3.]).fmt("r.").plot()?;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a_basic_grid.png");
        fig.save().to_file(&path)?;
        assert!(path.exists());
        Ok(())
    }

    #[test]
    #[ignore = "requires the matplotlib Python module"]
    fn chained_datasets_keep_their_labels() -> Result<(), Error> {
        let (_fig, [[mut ax]]) = subplots()?;
        ax.xy(&[1., 2.], &[3., 4.]).fmt("o").label("first")
            .xy(&[5., 6.], &[7., 8.]).label("second")
            .plot()?;
        let lines = ax.lines()?;
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], LineData { label: "first".into(),
                                        x: vec![1., 2.], y: vec![3., 4.] });
        assert_eq!(lines[1].label, "second");
        assert_eq!(lines[1].x, vec![5., 6.]);
        let entries = ax.legend_handles_labels()?;
        assert_eq!(entries.labels(), ["first", "second"]);
        Ok(())
    }

    #[test]
    #[ignore = "requires the matplotlib Python module"]
    fn legend_moves_to_other_axes() -> Result<(), Error> {
        let (_fig, [[mut src, mut dst]]) = subplots()?;
        src.xy(&[1.], &[1.]).fmt("o").label("a").plot()?;
        src.xy(&[2.], &[2.]).fmt("o").label("b").plot()?;
        let entries = src.legend_handles_labels()?;
        dst.legend().entries(&entries).loc("center").fontsize(12.)
            .markerscale(1.).labelspacing(1.2).place()?;
        dst.axis_off()?;
        assert_eq!(dst.legend_labels()?, ["a", "b"]);
        assert!(src.legend_labels()?.is_empty());
        assert!(!dst.axis_on()?);
        assert!(src.axis_on()?);
        Ok(())
    }

    #[test]
    #[ignore = "requires the matplotlib Python module"]
    fn labels_round_trip() -> Result<(), Error> {
        let (_fig, [[mut ax]]) = subplots()?;
        ax.set_xlabel("economic")?.set_ylabel("health")?;
        assert_eq!(ax.xlabel()?, "economic");
        assert_eq!(ax.ylabel()?, "health");
        Ok(())
    }

    #[test]
    #[ignore = "requires the matplotlib Python module"]
    fn save_into_missing_directory() -> Result<(), Error> {
        let (fig, [[mut ax]]) = subplots()?;
        ax.xy(&[1., 2.], &[1., 2.]).plot()?;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("plot.png");
        match fig.save().dpi(300.).to_file(&path) {
            Err(Error::FileNotFound) => {}
            r => panic!("expected FileNotFound, got {:?}", r),
        }
        Ok(())
    }

    #[test]
    #[ignore = "requires the matplotlib Python module"]
    fn unknown_style_is_reported() -> Result<(), Error> {
        match use_style("no-such-style-sheet") {
            Err(Error::UnknownStyle(name)) =>
                assert_eq!(name, "no-such-style-sheet"),
            r => panic!("expected UnknownStyle, got {:?}", r),
        }
        use_style("default")?;
        Ok(())
    }
}
