use std::{error::Error, fmt};

#[derive(Debug, PartialEq)]
pub enum MandelbrotError {
    ZeroMaxIterationsError,
    InvalidEscapeRadius { escape_radius: f64 },
    InvalidBaseExtent { width: f64, height: f64 },
    InvalidBaseZoom { base_zoom: f64 },
}

impl fmt::Display for MandelbrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::InvalidEscapeRadius { escape_radius } => {
                write!(f, "Escape radius must be positive and finite, got {}", escape_radius)
            }
            Self::InvalidBaseExtent { width, height } => {
                write!(
                    f,
                    "Base extent must be positive and finite, got {}x{}",
                    width, height
                )
            }
            Self::InvalidBaseZoom { base_zoom } => {
                write!(f, "Base zoom must be positive and finite, got {}", base_zoom)
            }
        }
    }
}

impl Error for MandelbrotError {}
