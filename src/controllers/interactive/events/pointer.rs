use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::core::data::point::Point;

/// Pointer input as seen by the engine, in window pixel coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointerEvent {
    /// Zoom in, then re-center on the clicked pixel.
    LeftClick(Point),
    /// Zoom out, then re-center on the clicked pixel.
    RightClick(Point),
    /// Update the cursor readout only.
    Moved(Point),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsePointerEventError {
    MissingSeparator(String),
    UnknownKind(String),
    InvalidCoordinates(String),
}

impl fmt::Display for ParsePointerEventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator(input) => {
                write!(f, "expected <kind>:<x>,<y> but got '{}'", input)
            }
            Self::UnknownKind(kind) => {
                write!(f, "unknown pointer event '{}', expected left, right or move", kind)
            }
            Self::InvalidCoordinates(coords) => {
                write!(f, "invalid pixel coordinates '{}'", coords)
            }
        }
    }
}

impl Error for ParsePointerEventError {}

impl FromStr for PointerEvent {
    type Err = ParsePointerEventError;

    /// Parses `left:X,Y`, `right:X,Y` or `move:X,Y`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, coords) = s
            .split_once(':')
            .ok_or_else(|| ParsePointerEventError::MissingSeparator(s.to_string()))?;

        let point = parse_point(coords)
            .ok_or_else(|| ParsePointerEventError::InvalidCoordinates(coords.to_string()))?;

        match kind.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::LeftClick(point)),
            "right" => Ok(Self::RightClick(point)),
            "move" => Ok(Self::Moved(point)),
            _ => Err(ParsePointerEventError::UnknownKind(kind.to_string())),
        }
    }
}

fn parse_point(coords: &str) -> Option<Point> {
    let (x, y) = coords.split_once(',')?;

    Some(Point {
        x: x.trim().parse().ok()?,
        y: y.trim().parse().ok()?,
    })
}
