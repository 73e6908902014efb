use miette::Diagnostic;
use thiserror::Error;
use time::{format_description::BorrowedFormatItem, macros::format_description, OffsetDateTime};

/// `2021-07-06T07:00:00+00:00`
const ISO_WITH_OFFSET: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
);

/// `Tuesday 06 July 2021`
const HUMAN_READABLE: &[BorrowedFormatItem<'static>] =
    format_description!("[weekday] [day] [month repr:long] [year]");

#[derive(Debug, Error, Diagnostic)]
pub enum ParseDateError {
    #[error("Invalid date `{input}`: {source}")]
    #[diagnostic(
        code(weather::date),
        help("expected a timestamp like 2021-07-06T07:00:00+00:00")
    )]
    Invalid {
        input: String,
        #[source]
        source: time::error::Parse,
    },
    #[error("Could not format date `{input}`: {source}")]
    #[diagnostic(code(weather::date))]
    Format {
        input: String,
        #[source]
        source: time::error::Format,
    },
}

pub fn parse_date(iso_string: &str) -> Result<OffsetDateTime, ParseDateError> {
    OffsetDateTime::parse(iso_string, ISO_WITH_OFFSET).map_err(|source| {
        ParseDateError::Invalid {
            input: iso_string.to_string(),
            source,
        }
    })
}

/// Converts an ISO timestamp with offset into e.g. `Tuesday 06 July 2021`.
///
/// The weekday is the one of the local date, the offset is not applied.
pub fn convert_date(iso_string: &str) -> Result<String, ParseDateError> {
    parse_date(iso_string)?
        .format(HUMAN_READABLE)
        .map_err(|source| ParseDateError::Format {
            input: iso_string.to_string(),
            source,
        })
}
