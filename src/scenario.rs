use std::fmt::{Display, Formatter};

/// One of the four policy configurations whose optimization results
/// are compared.  The declaration order is the drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scenario {
    PrivateNoStem,
    PrivateStem,
    PublicNoStem,
    PublicStem,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::PrivateNoStem,
        Scenario::PrivateStem,
        Scenario::PublicNoStem,
        Scenario::PublicStem,
    ];

    /// Legend label.
    pub fn label(self) -> &'static str {
        match self {
            Scenario::PrivateNoStem => "private, no STEM",
            Scenario::PrivateStem => "private, STEM",
            Scenario::PublicNoStem => "public, no STEM",
            Scenario::PublicStem => "public, STEM",
        }
    }

    /// Name of the result table inside the input directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Scenario::PrivateNoStem => "set1.csv",
            Scenario::PrivateStem => "set2.csv",
            Scenario::PublicNoStem => "set3.csv",
            Scenario::PublicStem => "set4.csv",
        }
    }
}

impl Display for Scenario {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
