//! Image representation for the color-adjustment pipeline.

use std::fmt;

use ::image::{DynamicImage, GrayImage, RgbImage};
use serde::{Deserialize, Serialize};

use crate::error::GradingError;

/// Channel layout of a [`GradingImage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PixelLayout {
    /// Single 8-bit intensity per pixel.
    Gray8,
    /// Interleaved 8-bit R, G, B.
    Rgb8,
}

impl PixelLayout {
    /// Number of interleaved channels per pixel.
    pub const fn channels(self) -> usize {
        match self {
            Self::Gray8 => 1,
            Self::Rgb8 => 3,
        }
    }
}

impl fmt::Display for PixelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gray8 => write!(f, "8-bit grayscale"),
            Self::Rgb8 => write!(f, "8-bit RGB"),
        }
    }
}

/// Owned 8-bit raster, row-major with interleaved channels.
///
/// The buffer length always equals `width × height × channels`; the only
/// way to build one from raw data is [`GradingImage::new`], which checks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradingImage {
    width: u32,
    height: u32,
    layout: PixelLayout,
    data: Vec<u8>,
}

impl GradingImage {
    /// Wrap a raw buffer, rejecting any length that does not match the
    /// declared dimensions and layout.
    pub fn new(
        width: u32,
        height: u32,
        layout: PixelLayout,
        data: Vec<u8>,
    ) -> Result<Self, GradingError> {
        let expected = width as usize * height as usize * layout.channels();
        if data.len() != expected {
            return Err(GradingError::InvalidInput(format!(
                "{width}x{height} {layout} image needs {expected} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            layout,
            data,
        })
    }

    /// Uniform RGB image filled with `rgb`.
    pub fn from_rgb_pixel(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let count = width as usize * height as usize;
        let mut data = Vec::with_capacity(count * 3);
        for _ in 0..count {
            data.extend_from_slice(&rgb);
        }
        Self {
            width,
            height,
            layout: PixelLayout::Rgb8,
            data,
        }
    }

    /// Uniform grayscale image filled with `value`.
    pub fn from_gray_pixel(width: u32, height: u32, value: u8) -> Self {
        Self {
            width,
            height,
            layout: PixelLayout::Gray8,
            data: vec![value; width as usize * height as usize],
        }
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    pub fn channels(&self) -> usize {
        self.layout.channels()
    }

    /// `true` when the image carries R, G and B channels.
    pub fn is_rgb(&self) -> bool {
        self.layout == PixelLayout::Rgb8
    }

    /// Raw interleaved samples.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Samples of the pixel at `(x, y)`, one entry per channel.
    ///
    /// # Panics
    /// Panics if the coordinate lies outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let channels = self.channels();
        let start = (y as usize * self.width as usize + x as usize) * channels;
        &self.data[start..start + channels]
    }

    /// Expand to three channels. RGB input is returned as-is.
    pub fn to_rgb(self) -> Self {
        match self.layout {
            PixelLayout::Rgb8 => self,
            PixelLayout::Gray8 => {
                let mut data = Vec::with_capacity(self.data.len() * 3);
                for &v in &self.data {
                    data.extend_from_slice(&[v, v, v]);
                }
                Self {
                    width: self.width,
                    height: self.height,
                    layout: PixelLayout::Rgb8,
                    data,
                }
            }
        }
    }

    /// Convert a decoded image. 8-bit luma stays grayscale; every other
    /// color type is converted to 8-bit RGB (alpha is discarded).
    pub fn from_dynamic(img: &DynamicImage) -> Self {
        match img {
            DynamicImage::ImageLuma8(gray) => Self {
                width: gray.width(),
                height: gray.height(),
                layout: PixelLayout::Gray8,
                data: gray.as_raw().clone(),
            },
            other => {
                let rgb = other.to_rgb8();
                let (width, height) = rgb.dimensions();
                Self {
                    width,
                    height,
                    layout: PixelLayout::Rgb8,
                    data: rgb.into_raw(),
                }
            }
        }
    }

    /// Hand the buffer back to the `image` crate for encoding.
    pub fn into_dynamic(self) -> DynamicImage {
        let Self {
            width,
            height,
            layout,
            data,
        } = self;
        match layout {
            PixelLayout::Gray8 => GrayImage::from_raw(width, height, data)
                .map(DynamicImage::ImageLuma8)
                .expect("gray buffer length is checked on construction"),
            PixelLayout::Rgb8 => RgbImage::from_raw(width, height, data)
                .map(DynamicImage::ImageRgb8)
                .expect("rgb buffer length is checked on construction"),
        }
    }
}

/// Store a float sample: clamp to the channel range, then truncate.
#[inline]
pub(crate) fn clamp_channel(v: f32) -> u8 {
    v.clamp(0.0, 255.0) as u8
}
