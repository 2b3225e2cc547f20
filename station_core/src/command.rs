//! Parsing of operator-entered text into engine commands.
//!
//! Keywords are trimmed and matched case-insensitively. Threshold edits are
//! all-or-nothing: every field is parsed before any value is returned.

use core::str::FromStr;

use crate::error::ParseError;
use crate::model::Thresholds;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpCommand {
    On,
    Off,
}

impl PumpCommand {
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl FromStr for PumpCommand {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            _ => Err(ParseError::InvalidKeyword {
                expected: "on|off",
                input: s.trim().to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValveCommand {
    Open,
    Close,
}

impl ValveCommand {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl FromStr for ValveCommand {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "close" => Ok(Self::Close),
            _ => Err(ParseError::InvalidKeyword {
                expected: "open|close",
                input: s.trim().to_string(),
            }),
        }
    }
}

fn parse_number(field: &'static str, input: &str) -> Result<f64, ParseError> {
    let input = input.trim();
    input.parse().map_err(|_| ParseError::InvalidNumber {
        field,
        input: input.to_string(),
    })
}

fn parse_integer(field: &'static str, input: &str) -> Result<i32, ParseError> {
    let input = input.trim();
    input.parse().map_err(|_| ParseError::InvalidInteger {
        field,
        input: input.to_string(),
    })
}

/// Parse the four threshold fields in prompt order.
pub fn parse_thresholds(
    min_pressure: &str,
    max_pressure: &str,
    max_flow: &str,
    min_water_level: &str,
) -> Result<Thresholds, ParseError> {
    Ok(Thresholds {
        min_pressure: parse_number("minimum pressure", min_pressure)?,
        max_pressure: parse_number("maximum pressure", max_pressure)?,
        max_flow: parse_number("maximum flow", max_flow)?,
        min_water_level: parse_integer("minimum water level", min_water_level)?,
    })
}
