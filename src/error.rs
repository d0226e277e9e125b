use std::{
    fmt::{Display, Formatter},
    path::PathBuf,
};
use polars::error::PolarsError;
use pyo3::PyErr;

/// Possible errors while loading result tables and drawing the figure.
#[derive(Debug)]
pub enum Error {
    /// The Python library "matplotlib" was not found.
    NoMatplotlib,
    /// The path contains an element that is not a directory or does
    /// not exist.
    FileNotFound,
    /// Permission denied to access or create the filesystem path.
    Permission,
    /// Matplotlib has no style sheet with this name.
    UnknownStyle(String),
    /// An input table could not be opened.
    Io { path: PathBuf, source: std::io::Error },
    /// An input table was read but does not hold three numeric columns.
    Table { path: PathBuf, reason: String },
    /// The CSV reader rejected the input.
    Polars(PolarsError),
    /// Other Python errors.
    Python(PyErr),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Error::NoMatplotlib =>
                write!(f, "The matplotlib library has not been found.\n\
Please install it.  See https://matplotlib.org/\n\
If you use Anaconda, see https://github.com/PyO3/pyo3/issues/1554"),
            Error::FileNotFound =>
                write!(f, "A path contains an element that is not a \
                           directory or does not exist"),
            Error::Permission =>
                write!(f, "Permission denied to access or create the \
                           filesystem path"),
            Error::UnknownStyle(name) =>
                write!(f, "unknown Matplotlib style sheet {:?}", name),
            Error::Io { path, source } =>
                write!(f, "cannot open {}: {}", path.display(), source),
            Error::Table { path, reason } =>
                write!(f, "malformed table {}: {}", path.display(), reason),
            Error::Polars(e) =>
                write!(f, "CSV error: {}", e),
            Error::Python(e) =>
                write!(f, "Python error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            Error::Polars(e) => Some(e),
            Error::Python(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PyErr> for Error {
    fn from(e: PyErr) -> Self { Error::Python(e) }
}

impl From<PolarsError> for Error {
    fn from(e: PolarsError) -> Self { Error::Polars(e) }
}
