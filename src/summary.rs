use log::debug;
use miette::Diagnostic;
use thiserror::Error;

use crate::{
    date::{convert_date, ParseDateError},
    record::Record,
    stats::{calculate_mean, find_max, find_min, StatsError},
    temperature::{convert_f_to_c, format_temperature, Celsius, ConversionError},
};

#[derive(Debug, Error, Diagnostic)]
pub enum SummaryError {
    #[error("No weather records to summarize")]
    #[diagnostic(code(weather::summary::empty))]
    NoRecords,
    #[error(transparent)]
    #[diagnostic(transparent)]
    Date(#[from] ParseDateError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Conversion(#[from] ConversionError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Stats(#[from] StatsError),
}

/// Aggregate overview of all the records.
///
/// Ties on the lowest or highest temperature are attributed to the last day
/// reaching it. Fails with [`SummaryError::NoRecords`] on an empty slice.
pub fn generate_summary(records: &[Record]) -> Result<String, SummaryError> {
    let lows = records
        .iter()
        .map(|record| convert_f_to_c(record.low).map(f64::from))
        .collect::<Result<Vec<_>, _>>()?;
    let highs = records
        .iter()
        .map(|record| convert_f_to_c(record.high).map(f64::from))
        .collect::<Result<Vec<_>, _>>()?;

    let (Some(min), Some(max)) = (find_min(&lows), find_max(&highs)) else {
        return Err(SummaryError::NoRecords);
    };
    let min_day = convert_date(&records[min.index].date)?;
    let max_day = convert_date(&records[max.index].date)?;
    debug!(
        "lowest on record {}, highest on record {}",
        min.index, max.index
    );

    let avg_low = Celsius::new(calculate_mean(&lows)?);
    let avg_high = Celsius::new(calculate_mean(&highs)?);

    Ok(format!(
        "{} Day Overview
  The lowest temperature will be {}, and will occur on {min_day}.
  The highest temperature will be {}, and will occur on {max_day}.
  The average low this week is {}.
  The average high this week is {}.
",
        records.len(),
        format_temperature(Celsius::new(min.value)),
        format_temperature(Celsius::new(max.value)),
        format_temperature(avg_low),
        format_temperature(avg_high),
    ))
}

/// One block per record, in input order.
///
/// Empty input gives an empty string: no record is ever looked up by index
/// here, so zero records simply render zero blocks.
pub fn generate_daily_summary(records: &[Record]) -> Result<String, SummaryError> {
    let mut summary = String::new();

    for record in records {
        let date = convert_date(&record.date)?;
        let low = convert_f_to_c(record.low)?;
        let high = convert_f_to_c(record.high)?;

        summary.push_str(&format!(
            "---- {date} ----
  Minimum Temperature: {}
  Maximum Temperature: {}

",
            format_temperature(low),
            format_temperature(high),
        ));
    }

    Ok(summary)
}
