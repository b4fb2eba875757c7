//! Plain `{x0, y0, x1, y1}` record used for export, comparison and parsing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Plain-data view of a box: `(x0, y0)` is the top-left corner and
/// `(x1, y1)` the bottom-right corner when produced by `to_object`.
///
/// Records parsed or deserialized from outside are not normalized; convert
/// into a `Rectangle`/`BoundingBox` for that.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

/// Failure to parse `"x0,y0,x1,y1"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseCoordsError {
    /// Input did not contain exactly four comma-separated fields.
    WrongArity(usize),
    /// A field could not be parsed as `f64`.
    BadNumber { index: usize, text: String },
}

impl fmt::Display for ParseCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCoordsError::WrongArity(n) => {
                write!(f, "expected 4 comma-separated numbers x0,y0,x1,y1, got {n}")
            }
            ParseCoordsError::BadNumber { index, text } => {
                write!(f, "field {index} ({text:?}) is not a number")
            }
        }
    }
}

impl std::error::Error for ParseCoordsError {}

impl FromStr for Coords {
    type Err = ParseCoordsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(',').map(str::trim).collect();
        if fields.len() != 4 {
            return Err(ParseCoordsError::WrongArity(fields.len()));
        }
        let mut v = [0.0f64; 4];
        for (index, text) in fields.iter().enumerate() {
            v[index] = text.parse().map_err(|_| ParseCoordsError::BadNumber {
                index,
                text: (*text).to_string(),
            })?;
        }
        Ok(Coords {
            x0: v[0],
            y0: v[1],
            x1: v[2],
            y1: v[3],
        })
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.x0, self.y0, self.x1, self.y1)
    }
}
