//! Evolution axis model

use std::fmt;

/// Categorical nature of a change, derived from the files it touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    Governance,
    Memory,
    Runtime,
    Interface,
    Structure,
}

impl Axis {
    /// All axes in their fixed enumeration order (also the tie-break order)
    pub const ALL: [Axis; 5] = [
        Axis::Governance,
        Axis::Memory,
        Axis::Runtime,
        Axis::Interface,
        Axis::Structure,
    ];

    /// Lower-case identifier
    pub fn as_str(self) -> &'static str {
        match self {
            Axis::Governance => "governance",
            Axis::Memory => "memory",
            Axis::Runtime => "runtime",
            Axis::Interface => "interface",
            Axis::Structure => "structure",
        }
    }

    /// Capitalized label for display
    pub fn label(self) -> &'static str {
        match self {
            Axis::Governance => "Governance",
            Axis::Memory => "Memory",
            Axis::Runtime => "Runtime",
            Axis::Interface => "Interface",
            Axis::Structure => "Structure",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
