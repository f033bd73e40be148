//! Image utilities
//! Keeps us from having to use bevy image types in the physics engine

use bevy::render::{
    render_resource::{Extent3d, TextureDimension, TextureFormat},
    texture::Image,
};

/// Bytes per pixel, RGBA
pub const CHANNELS: usize = 4;

/// Representing a raw RGBA image, top row first
/// Game engine agnostic, full ownership, no lifetimes, not a component
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawImage {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

impl RawImage {
    /// A fully transparent image
    pub fn new_transparent(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height * CHANNELS],
        }
    }

    /// Paint one pixel, column x and row `row` counted from the top
    /// Does nothing if the pixel is outside of the image
    pub fn set_pixel(&mut self, x: usize, row: usize, rgba: [u8; 4]) {
        if x >= self.width || row >= self.height {
            return;
        }
        let start = (row * self.width + x) * CHANNELS;
        self.pixels[start..start + CHANNELS].copy_from_slice(&rgba);
    }

    /// Read one pixel, column x and row `row` counted from the top
    pub fn get_pixel(&self, x: usize, row: usize) -> Option<[u8; 4]> {
        if x >= self.width || row >= self.height {
            return None;
        }
        let start = (row * self.width + x) * CHANNELS;
        let mut out = [0; 4];
        out.copy_from_slice(&self.pixels[start..start + CHANNELS]);
        Some(out)
    }

    /// Convert to a bevy image
    /// Load this into `Assets<Image>` to get a texture like the following
    /// ```ignore
    /// let image: RawImage = RawImage::default();
    /// let image_handle: Handle<Image> = images.add(image.to_bevy_image());
    /// ```
    pub fn to_bevy_image(self) -> Image {
        let size = Extent3d {
            width: self.width as u32,
            height: self.height as u32,
            depth_or_array_layers: 1,
        };

        Image::new(
            size,
            TextureDimension::D2,
            self.pixels,
            TextureFormat::Rgba8UnormSrgb,
        )
    }
}
