//! Text summaries of daily weather records.
//!
//! Records are read from a table of `date,low,high` rows, temperatures in
//! degrees Fahrenheit, and summarized in degrees Celsius.

pub mod date;
pub mod record;
pub mod stats;
pub mod summary;
pub mod temperature;

pub use date::{convert_date, ParseDateError};
pub use record::{
    load_data_from_csv, load_data_from_reader, parse_records, write_records, write_rows,
    FormatError, Record,
};
pub use stats::{calculate_mean, find_max, find_min, Extremum, StatsError};
pub use summary::{generate_daily_summary, generate_summary, SummaryError};
pub use temperature::{
    convert_f_to_c, format_temperature, round_one_decimal, AsFahrenheit, Celsius,
    ConversionError, DEGREE_SYMBOL,
};
