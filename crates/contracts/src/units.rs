//! Numeric width and timestamp unit enums shared by every stage.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ContractError;

/// Target numeric width for parsed values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FloatKind {
    /// Single precision; values are parsed as `f32` then widened
    #[serde(rename = "float32")]
    F32,
    /// Double precision
    #[default]
    #[serde(rename = "float64")]
    F64,
}

impl FloatKind {
    /// Parse a token at this width, returning the widened value.
    #[inline]
    pub fn parse(self, token: &str) -> Option<f64> {
        match self {
            FloatKind::F32 => token.parse::<f32>().ok().map(f64::from),
            FloatKind::F64 => token.parse::<f64>().ok(),
        }
    }

    /// The wider of two kinds
    pub fn widest(self, other: FloatKind) -> FloatKind {
        if self == FloatKind::F64 || other == FloatKind::F64 {
            FloatKind::F64
        } else {
            FloatKind::F32
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FloatKind::F32 => "float32",
            FloatKind::F64 => "float64",
        }
    }
}

impl fmt::Display for FloatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FloatKind {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "float32" | "f32" => Ok(FloatKind::F32),
            "float64" | "f64" | "float" => Ok(FloatKind::F64),
            other => Err(ContractError::UnknownName {
                kind: "numeric type",
                value: other.to_string(),
            }),
        }
    }
}

/// Unit of a timestamp column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    /// Seconds
    #[default]
    S,
    /// Milliseconds
    Ms,
    /// Microseconds
    Us,
    /// Nanoseconds
    Ns,
}

impl TimeUnit {
    /// Multiply a raw interval by this to get seconds
    #[inline]
    pub fn scale_to_seconds(self) -> f64 {
        match self {
            TimeUnit::S => 1.0,
            TimeUnit::Ms => 1e-3,
            TimeUnit::Us => 1e-6,
            TimeUnit::Ns => 1e-9,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeUnit::S => "s",
            TimeUnit::Ms => "ms",
            TimeUnit::Us => "us",
            TimeUnit::Ns => "ns",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "s" => Ok(TimeUnit::S),
            "ms" => Ok(TimeUnit::Ms),
            "us" => Ok(TimeUnit::Us),
            "ns" => Ok(TimeUnit::Ns),
            other => Err(ContractError::UnknownName {
                kind: "time unit",
                value: other.to_string(),
            }),
        }
    }
}
