use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

use csv::StringRecord;
use log::{debug, trace};
use miette::Diagnostic;
use thiserror::Error;

/// One day of weather, temperatures in degrees Fahrenheit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Raw ISO timestamp with offset, as read from the source.
    pub date: String,
    pub low: i32,
    pub high: i32,
}

impl Record {
    pub fn new(date: impl Into<String>, low: i32, high: i32) -> Self {
        Self {
            date: date.into(),
            low,
            high,
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum FormatError {
    #[error("Could not read the weather data: {0}")]
    #[diagnostic(code(weather::format::io))]
    Io(#[from] std::io::Error),
    #[error("Malformed csv: {0}")]
    #[diagnostic(code(weather::format::csv))]
    Csv(#[from] csv::Error),
    #[error("Missing header row")]
    #[diagnostic(code(weather::format::header))]
    MissingHeader,
    #[error("Line {line}: expected 3 columns (date, low, high), found {found}")]
    #[diagnostic(code(weather::format::columns))]
    WrongColumnCount { line: u64, found: usize },
    #[error("Line {line}: temperature `{value}` is not an integer")]
    #[diagnostic(code(weather::format::temperature))]
    BadTemperature {
        line: u64,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

fn parse_temperature(line: u64, value: &str) -> Result<i32, FormatError> {
    value
        .trim()
        .parse()
        .map_err(|source| FormatError::BadTemperature {
            line,
            value: value.to_string(),
            source,
        })
}

fn record_from_row(row: &StringRecord) -> Result<Record, FormatError> {
    let line = row.position().map_or(0, |position| position.line());
    let fields: Vec<&str> = row.iter().collect();
    let &[date, low, high] = fields.as_slice() else {
        return Err(FormatError::WrongColumnCount {
            line,
            found: fields.len(),
        });
    };

    Ok(Record {
        date: date.to_string(),
        low: parse_temperature(line, low)?,
        high: parse_temperature(line, high)?,
    })
}

/// Reads a table: a header row, then `date,low,high` rows.
///
/// Blank lines are skipped. `\n`, `\r\n` and a lone `\r` all end a row.
pub fn load_data_from_reader(reader: impl Read) -> Result<Vec<Record>, FormatError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let header = reader.headers()?;
    if header.is_empty() {
        return Err(FormatError::MissingHeader);
    }
    trace!("skipping header {header:?}");

    let mut records = Vec::new();
    for row in reader.records() {
        let record = record_from_row(&row?)?;
        trace!("loaded {record:?}");
        records.push(record);
    }

    debug!("loaded {} records", records.len());
    Ok(records)
}

pub fn parse_records(s: &str) -> Result<Vec<Record>, FormatError> {
    load_data_from_reader(s.as_bytes())
}

/// Loads the records of a csv file. The file is closed before returning.
pub fn load_data_from_csv(path: impl AsRef<Path>) -> Result<Vec<Record>, FormatError> {
    let path = path.as_ref();
    debug!("opening {}", path.display());
    let file = File::open(path)?;
    load_data_from_reader(file)
}

/// Writes one `date,low,high` row per record, without a header.
pub fn write_records(writer: impl Write, records: &[Record]) -> Result<(), FormatError> {
    let mut writer = csv::Writer::from_writer(writer);
    for record in records {
        writer.write_record([
            record.date.as_str(),
            record.low.to_string().as_str(),
            record.high.to_string().as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Regenerates the data rows of `records`.
pub fn write_rows(records: &[Record]) -> Result<String, FormatError> {
    let mut rows = Vec::new();
    write_records(&mut rows, records)?;
    // Every field written is valid UTF-8.
    Ok(String::from_utf8_lossy(&rows).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "date,min,max
2021-07-02T07:00:00+08:00,49,67
2021-07-03T07:00:00+08:00,57,68

2021-07-04T07:00:00+08:00,56,62
";

    #[test]
    fn skips_header_and_empty_rows() {
        let records = parse_records(TABLE).unwrap();
        assert_eq!(
            records,
            vec![
                Record::new("2021-07-02T07:00:00+08:00", 49, 67),
                Record::new("2021-07-03T07:00:00+08:00", 57, 68),
                Record::new("2021-07-04T07:00:00+08:00", 56, 62),
            ]
        );
    }

    #[test]
    fn header_only() {
        assert!(parse_records("date,min,max\n").unwrap().is_empty());
        assert!(matches!(parse_records(""), Err(FormatError::MissingHeader)));
    }

    #[test]
    fn crlf_and_missing_final_newline() {
        let records = parse_records("date,min,max\r\n2021-07-02T07:00:00+08:00,-3,12").unwrap();
        assert_eq!(records, vec![Record::new("2021-07-02T07:00:00+08:00", -3, 12)]);
    }

    #[test]
    fn carriage_return_line_endings() {
        let records =
            parse_records("date,min,max\r2021-07-05T07:00:00+00:00,49,67\r").unwrap();
        assert_eq!(records, vec![Record::new("2021-07-05T07:00:00+00:00", 49, 67)]);
    }

    #[test]
    fn quote_inside_a_plain_field_is_kept() {
        let records = parse_records("date,min,max\nab\"c,49,67\n").unwrap();
        assert_eq!(records, vec![Record::new("ab\"c", 49, 67)]);
    }

    #[test]
    fn quoted_fields() {
        let records = parse_records("\"date\",\"min\",\"max\"\n\"2021-07-02T07:00:00+08:00\",\"49\",67\n").unwrap();
        assert_eq!(records, vec![Record::new("2021-07-02T07:00:00+08:00", 49, 67)]);
    }

    #[test]
    fn wrong_column_count_reports_line() {
        let err = parse_records("date,min,max\n2021-07-02T07:00:00+08:00,49,67\n\n2021-07-03T07:00:00+08:00,57\n").unwrap_err();
        assert!(
            matches!(err, FormatError::WrongColumnCount { line: 4, found: 2 }),
            "{err:?}"
        );

        let err = parse_records("date,min,max\n2021-07-02T07:00:00+08:00,49,67,\n").unwrap_err();
        assert!(matches!(err, FormatError::WrongColumnCount { line: 2, found: 4 }));
    }

    #[test]
    fn non_integer_temperature() {
        let err = parse_records("date,min,max\n2021-07-02T07:00:00+08:00,49.5,67\n").unwrap_err();
        match err {
            FormatError::BadTemperature { line, value, .. } => {
                assert_eq!(line, 2);
                assert_eq!(value, "49.5");
            }
            e => panic!("unexpected error {e:?}"),
        }
    }

    #[test]
    fn unterminated_quote_swallows_the_row() {
        let err = parse_records("date,min,max\n\"2021-07-02T07:00:00+08:00,49,67\n").unwrap_err();
        assert!(matches!(err, FormatError::WrongColumnCount { line: 2, found: 1 }));
    }

    #[test]
    fn regenerates_rows() {
        let records = parse_records(TABLE).unwrap();
        let rows = TABLE
            .lines()
            .skip(1)
            .filter(|line| !line.is_empty())
            .map(|line| format!("{line}\n"))
            .collect::<String>();
        assert_eq!(write_rows(&records).unwrap(), rows);
    }

    #[test]
    fn quotes_dates_that_need_it() {
        let record = Record::new("5 July, 2021", 49, 67);
        let rows = write_rows(&[record.clone()]).unwrap();
        assert_eq!(rows, "\"5 July, 2021\",49,67\n");
        let reloaded = parse_records(&format!("date,min,max\n{rows}")).unwrap();
        assert_eq!(reloaded, vec![record]);
    }
}
