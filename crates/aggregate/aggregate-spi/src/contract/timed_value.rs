//! Timed value trait definition.

use chrono::NaiveDate;

/// A record the period grouper can bucket: a calendar date plus one numeric
/// observation.
///
/// Both accessors are optional by design. A `None` date marks a malformed row
/// (dropped, never an abort); a `None` value contributes zero to a sum and is
/// excluded from an average's denominator.
pub trait TimedValue {
    /// Calendar date of the observation, `None` when missing or unparseable.
    fn calendar_date(&self) -> Option<NaiveDate>;

    /// Numeric value of the observation, `None` when missing or non-numeric.
    fn value(&self) -> Option<f64>;
}

impl TimedValue for crate::model::PredictionRecord {
    fn calendar_date(&self) -> Option<NaiveDate> {
        crate::model::PredictionRecord::calendar_date(self)
    }

    fn value(&self) -> Option<f64> {
        self.valeur_predite.filter(|v| v.is_finite())
    }
}
