use std::cmp::Ordering;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum StatsError {
    #[error("Cannot compute the mean of an empty series")]
    #[diagnostic(code(weather::stats::empty))]
    EmptySeries,
}

/// An extreme value of a series and the position it was found at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum {
    pub value: f64,
    // When several values tie, this is the last one.
    pub index: usize,
}

// `-0.0` and `0.0` compare equal, NaN falls back to a total order.
fn compare(left: &f64, right: &f64) -> Ordering {
    left.partial_cmp(right).unwrap_or_else(|| left.total_cmp(right))
}

pub fn calculate_mean(series: &[f64]) -> Result<f64, StatsError> {
    if series.is_empty() {
        return Err(StatsError::EmptySeries);
    }
    Ok(series.iter().sum::<f64>() / series.len() as f64)
}

pub fn find_min(series: &[f64]) -> Option<Extremum> {
    // `min_by` keeps the first of equal elements, walk backward to get the last.
    series
        .iter()
        .enumerate()
        .rev()
        .min_by(|(_, left), (_, right)| compare(left, right))
        .map(|(index, &value)| Extremum { value, index })
}

pub fn find_max(series: &[f64]) -> Option<Extremum> {
    // `max_by` already keeps the last of equal elements.
    series
        .iter()
        .enumerate()
        .max_by(|(_, left), (_, right)| compare(left, right))
        .map(|(index, &value)| Extremum { value, index })
}
