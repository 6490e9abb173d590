use alloc::borrow::Cow;
use alloc::vec::Vec;

#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

use crate::error::PnmError;

/// Color model of a decoded image.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorModel {
    /// One byte per pixel, each either 0x00 or 0xFF.
    Bilevel,
    /// One byte per pixel, 8-bit grayscale.
    Gray,
    /// Three bytes per pixel, 8-bit R,G,B.
    Rgb,
}

impl ColorModel {
    /// Bytes per pixel for this model.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Bilevel | Self::Gray => 1,
            Self::Rgb => 3,
        }
    }

    /// Number of channels.
    pub fn channels(&self) -> usize {
        match self {
            Self::Bilevel | Self::Gray => 1,
            Self::Rgb => 3,
        }
    }
}

/// Decoded image. Pixels may be borrowed (zero-copy) or owned.
///
/// The buffer always holds exactly `width * height * bytes_per_pixel` bytes
/// in row-major order.
#[derive(Clone, Debug)]
pub struct Image<'a> {
    pixels: Cow<'a, [u8]>,
    pub width: u32,
    pub height: u32,
    pub model: ColorModel,
}

impl<'a> Image<'a> {
    /// Build an image from an owned pixel buffer.
    ///
    /// Dimensions must be nonzero and `pixels` must hold exactly
    /// `width * height * model.bytes_per_pixel()` bytes.
    pub fn new(
        width: u32,
        height: u32,
        model: ColorModel,
        pixels: Vec<u8>,
    ) -> Result<Image<'static>, PnmError> {
        if width == 0 || height == 0 {
            return Err(PnmError::InvalidData(alloc::format!(
                "image dimensions {width}x{height} must be nonzero"
            )));
        }
        let needed = (width as usize)
            .checked_mul(height as usize)
            .and_then(|wh| wh.checked_mul(model.bytes_per_pixel()))
            .ok_or(PnmError::DimensionsTooLarge { width, height })?;
        if pixels.len() != needed {
            return Err(PnmError::BufferTooSmall {
                needed,
                actual: pixels.len(),
            });
        }
        Ok(Image {
            pixels: Cow::Owned(pixels),
            width,
            height,
            model,
        })
    }

    /// Access the pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the pixel data (copies if borrowed).
    pub fn into_owned(self) -> Image<'static> {
        Image {
            pixels: Cow::Owned(self.pixels.into_owned()),
            width: self.width,
            height: self.height,
            model: self.model,
        }
    }

    /// Whether the pixel data is borrowed (zero-copy from input).
    pub fn is_borrowed(&self) -> bool {
        matches!(self.pixels, Cow::Borrowed(_))
    }

    /// Pixel at (x, y) expanded to R,G,B,A channels.
    ///
    /// Bilevel and grayscale samples are mirrored into R, G and B; bilevel
    /// alpha mirrors the sample, other models are opaque.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let off = (y as usize * self.width as usize + x as usize) * self.model.bytes_per_pixel();
        let px = &self.pixels[off..];
        match self.model {
            ColorModel::Bilevel => [px[0], px[0], px[0], px[0]],
            ColorModel::Gray => [px[0], px[0], px[0], 255],
            ColorModel::Rgb => [px[0], px[1], px[2], 255],
        }
    }

    pub(crate) fn borrowed(data: &'a [u8], width: u32, height: u32, model: ColorModel) -> Self {
        Self {
            pixels: Cow::Borrowed(data),
            width,
            height,
            model,
        }
    }

    pub(crate) fn owned(data: Vec<u8>, width: u32, height: u32, model: ColorModel) -> Self {
        Self {
            pixels: Cow::Owned(data),
            width,
            height,
            model,
        }
    }

    /// Reinterpret an RGB image as a typed pixel slice.
    ///
    /// Returns [`PnmError::ModelMismatch`] unless the model is [`ColorModel::Rgb`].
    #[cfg(feature = "rgb")]
    pub fn as_rgb(&self) -> Result<&[rgb::RGB8], PnmError> {
        if self.model != ColorModel::Rgb {
            return Err(PnmError::ModelMismatch {
                expected: ColorModel::Rgb,
                actual: self.model,
            });
        }
        Ok(self.pixels().as_pixels())
    }

    /// Zero-copy view of an RGB image as an [`imgref::ImgRef`].
    ///
    /// Returns [`PnmError::ModelMismatch`] unless the model is [`ColorModel::Rgb`].
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> Result<imgref::ImgRef<'_, rgb::RGB8>, PnmError> {
        let pixels = self.as_rgb()?;
        Ok(imgref::ImgRef::new(
            pixels,
            self.width as usize,
            self.height as usize,
        ))
    }

    /// Convert an RGB image to an [`imgref::ImgVec`].
    ///
    /// Returns [`PnmError::ModelMismatch`] unless the model is [`ColorModel::Rgb`].
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> Result<imgref::ImgVec<rgb::RGB8>, PnmError> {
        let pixels = self.as_rgb()?;
        Ok(imgref::ImgVec::new(
            pixels.to_vec(),
            self.width as usize,
            self.height as usize,
        ))
    }
}
