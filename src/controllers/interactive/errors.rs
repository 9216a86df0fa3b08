use std::error::Error;
use std::fmt;

use crate::core::data::pixel_size::PixelSizeError;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

#[derive(Debug, PartialEq)]
pub enum EngineError {
    PixelSize(PixelSizeError),
    Config(MandelbrotError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelSize(err) => write!(f, "invalid viewport: {}", err),
            Self::Config(err) => write!(f, "invalid configuration: {}", err),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PixelSize(err) => Some(err),
            Self::Config(err) => Some(err),
        }
    }
}

impl From<PixelSizeError> for EngineError {
    fn from(err: PixelSizeError) -> Self {
        Self::PixelSize(err)
    }
}

impl From<MandelbrotError> for EngineError {
    fn from(err: MandelbrotError) -> Self {
        Self::Config(err)
    }
}
