//! Continent labels for geographic grouping.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Continent classification for a country display name.
///
/// `Other` is the catch-all for names a continent table does not know;
/// classification is total and never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Continent {
    Africa,
    Asia,
    Europe,
    NorthAmerica,
    SouthAmerica,
    Oceania,
    Other,
}

impl Continent {
    /// Fixed priority order used to break count ties, so ranked output is
    /// deterministic regardless of input order.
    pub const PRIORITY: [Continent; 7] = [
        Continent::Africa,
        Continent::Asia,
        Continent::Europe,
        Continent::NorthAmerica,
        Continent::SouthAmerica,
        Continent::Oceania,
        Continent::Other,
    ];

    /// Position in the fixed priority order.
    pub fn priority(&self) -> usize {
        Self::PRIORITY.iter().position(|c| c == self).unwrap_or(Self::PRIORITY.len())
    }

    /// Chart label for this continent.
    pub fn label(&self) -> &'static str {
        match self {
            Continent::Africa => "Africa",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::NorthAmerica => "North America",
            Continent::SouthAmerica => "South America",
            Continent::Oceania => "Oceania",
            Continent::Other => "Other",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_covers_every_variant() {
        assert_eq!(Continent::PRIORITY.len(), 7);
        assert_eq!(Continent::Africa.priority(), 0);
        assert_eq!(Continent::Other.priority(), 6);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Continent::Europe.label(), "Europe");
        assert_eq!(Continent::SouthAmerica.label(), "South America");
    }
}
