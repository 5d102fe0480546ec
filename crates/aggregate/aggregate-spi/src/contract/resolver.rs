//! Continent resolver trait definition.

use crate::model::Continent;

/// Maps a country display name to a continent label.
///
/// Resolution is a total function: implementations classify names they do not
/// know as [`Continent::Other`], never an error. The reference table behind
/// an implementation is injectable data, not code.
pub trait ContinentResolver: Send + Sync {
    /// Continent for a country display name.
    fn continent_of(&self, location_name: &str) -> Continent;
}
