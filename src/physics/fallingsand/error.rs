//! Errors raised by the falling sand engine.
//! None of these are expected during normal play, the movement rules always
//! check the neighborhood before they move. They catch mistakes in new rules
//! and bad input from the placement brush.

use thiserror::Error;

use super::util::vectors::XyVector;

/// Errors from the occupancy grid and from particles moving around in it
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A grid needs at least one column and one row
    #[error("a grid cannot be {cols}x{rows}, both sides must be positive")]
    ZeroSized { cols: usize, rows: usize },

    #[error("{0} went outside the constraints of the grid")]
    OutOfBounds(XyVector),

    #[error("you cannot move a pixel from {0}, it is outside of the grid")]
    SourceOutOfBounds(XyVector),

    #[error("you cannot move a pixel to {0}, it is outside of the grid")]
    DestinationOutOfBounds(XyVector),

    #[error("the position {0} is already taken")]
    DestinationOccupied(XyVector),

    /// Moving nothing would make the destination look taken by no one
    #[error("there is no pixel at {0} to move")]
    SourceEmpty(XyVector),
}

/// Errors from building a simulation config
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("pixel size must be positive")]
    ZeroPixelSize,

    /// The screen has to fit at least one cell along each side
    #[error("a {width}x{height} screen cannot fit a single {pixel_size}px cell")]
    ScreenTooSmall {
        width: u32,
        height: u32,
        pixel_size: u32,
    },

    #[error(transparent)]
    Grid(#[from] GridError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_the_position() {
        let msg = format!("{}", GridError::DestinationOccupied(XyVector::new(5, 5)));
        assert!(msg.contains("already taken"));
        assert!(msg.contains("(5, 5)"));
    }

    #[test]
    fn test_grid_error_converts_into_config_error() {
        let err: ConfigError = GridError::ZeroSized { cols: 0, rows: 3 }.into();
        assert_eq!(err, ConfigError::Grid(GridError::ZeroSized { cols: 0, rows: 3 }));
    }
}
