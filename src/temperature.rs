use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

pub const DEGREE_SYMBOL: &str = "\u{00B0}C";

/// Appends the degree Celsius unit to an already rounded temperature.
pub fn format_temperature(temp: impl fmt::Display) -> String {
    format!("{temp}{DEGREE_SYMBOL}")
}

/// Rounds to one decimal place, ties away from zero.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Not a number: `{0}`")]
    #[diagnostic(code(weather::conversion))]
    NotANumber(String),
}

/// Anything that can be read as a temperature in degrees Fahrenheit.
pub trait AsFahrenheit {
    fn as_fahrenheit(&self) -> Result<f64, ConversionError>;
}

impl AsFahrenheit for f64 {
    fn as_fahrenheit(&self) -> Result<f64, ConversionError> {
        Ok(*self)
    }
}

impl AsFahrenheit for f32 {
    fn as_fahrenheit(&self) -> Result<f64, ConversionError> {
        Ok(f64::from(*self))
    }
}

impl AsFahrenheit for i32 {
    fn as_fahrenheit(&self) -> Result<f64, ConversionError> {
        Ok(f64::from(*self))
    }
}

impl AsFahrenheit for i64 {
    fn as_fahrenheit(&self) -> Result<f64, ConversionError> {
        Ok(*self as f64)
    }
}

impl AsFahrenheit for str {
    fn as_fahrenheit(&self) -> Result<f64, ConversionError> {
        self.trim()
            .parse()
            .map_err(|_| ConversionError::NotANumber(self.to_string()))
    }
}

impl AsFahrenheit for &str {
    fn as_fahrenheit(&self) -> Result<f64, ConversionError> {
        (**self).as_fahrenheit()
    }
}

impl AsFahrenheit for String {
    fn as_fahrenheit(&self) -> Result<f64, ConversionError> {
        self.as_str().as_fahrenheit()
    }
}

/// A temperature in degrees Celsius, rounded to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Celsius(f64);

impl Celsius {
    pub fn new(value: f64) -> Self {
        Self(round_one_decimal(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<Celsius> for f64 {
    fn from(value: Celsius) -> Self {
        value.0
    }
}

impl PartialEq<f64> for Celsius {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

// Whole values keep their trailing `.0`, `100.0` not `100`.
impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_finite() && self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

pub fn convert_f_to_c(temp: impl AsFahrenheit) -> Result<Celsius, ConversionError> {
    let fahrenheit = temp.as_fahrenheit()?;
    Ok(Celsius::new((fahrenheit - 32.0) * 5.0 / 9.0))
}
