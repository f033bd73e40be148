//! Configuration of the sandbox
//! The grid size is derived from the screen size and the size of one cell.

use super::error::ConfigError;

pub const SCREEN_WIDTH: u32 = 1000;
pub const SCREEN_HEIGHT: u32 = 500;
pub const PIXEL_SIZE: u32 = 5;
pub const SCREEN_TITLE: &str = "Sand";
/// Ticks to wait between placements while the mouse is held
pub const PLACEMENT_INTERVAL: u32 = 2;

/// Validated sandbox configuration, build it with [SimulationConfigBuilder]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    screen_width: u32,
    screen_height: u32,
    pixel_size: u32,
    placement_interval: u32,
    title: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            pixel_size: PIXEL_SIZE,
            placement_interval: PLACEMENT_INTERVAL,
            title: SCREEN_TITLE.to_string(),
        }
    }
}

impl SimulationConfig {
    pub fn get_screen_width(&self) -> u32 {
        self.screen_width
    }
    pub fn get_screen_height(&self) -> u32 {
        self.screen_height
    }
    /// The side of one cell in pixels
    pub fn get_pixel_size(&self) -> u32 {
        self.pixel_size
    }
    pub fn get_placement_interval(&self) -> u32 {
        self.placement_interval
    }
    pub fn get_title(&self) -> &str {
        &self.title
    }
    /// Number of grid columns, any leftover pixels on the right are unused
    pub fn get_cols(&self) -> usize {
        (self.screen_width / self.pixel_size) as usize
    }
    /// Number of grid rows, any leftover pixels at the top are unused
    pub fn get_rows(&self) -> usize {
        (self.screen_height / self.pixel_size) as usize
    }
}

/// Builds a SimulationConfig
pub struct SimulationConfigBuilder {
    screen_width: u32,
    screen_height: u32,
    pixel_size: u32,
    placement_interval: u32,
    title: String,
}

impl Default for SimulationConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationConfigBuilder {
    /// Start here
    pub fn new() -> Self {
        let defaults = SimulationConfig::default();
        Self {
            screen_width: defaults.screen_width,
            screen_height: defaults.screen_height,
            pixel_size: defaults.pixel_size,
            placement_interval: defaults.placement_interval,
            title: defaults.title,
        }
    }
    /// Width of the window in pixels
    pub fn screen_width(mut self, screen_width: u32) -> Self {
        self.screen_width = screen_width;
        self
    }
    /// Height of the window in pixels
    pub fn screen_height(mut self, screen_height: u32) -> Self {
        self.screen_height = screen_height;
        self
    }
    /// Side of a single cell in pixels
    pub fn pixel_size(mut self, pixel_size: u32) -> Self {
        self.pixel_size = pixel_size;
        self
    }
    /// Minimum number of ticks between two placements while the mouse is held.
    /// 0 and 1 both mean every tick.
    pub fn placement_interval(mut self, placement_interval: u32) -> Self {
        self.placement_interval = placement_interval;
        self
    }
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Checks the screen fits at least one cell each way
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        if self.pixel_size == 0 {
            return Err(ConfigError::ZeroPixelSize);
        }
        if self.screen_width < self.pixel_size || self.screen_height < self.pixel_size {
            return Err(ConfigError::ScreenTooSmall {
                width: self.screen_width,
                height: self.screen_height,
                pixel_size: self.pixel_size,
            });
        }
        Ok(SimulationConfig {
            screen_width: self.screen_width,
            screen_height: self.screen_height,
            pixel_size: self.pixel_size,
            placement_interval: self.placement_interval,
            title: self.title,
        })
    }
}
