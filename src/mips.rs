//! CPU-side mipmap chain generation for RGBA8 images.
//!
//! Given a full-resolution image, [`MipImage::mip_chain`] produces every
//! half-resolution level down to 1x1 using a bilinear box filter, ready to be
//! uploaded level-by-level to a mipmapped GPU texture.
//!
//! # Example
//!
//! ```
//! use strata::MipImage;
//!
//! // A solid 4x4 image downsamples to itself at every level.
//! let pixels = [200u8, 100, 50, 255].repeat(16);
//! let image = MipImage::new(4, 4, pixels).unwrap();
//! let chain = image.mip_chain();
//!
//! assert_eq!(chain.len(), 3); // 4x4, 2x2, 1x1
//! assert_eq!(chain[2].data(), &[200, 100, 50, 255]);
//! ```

use std::path::Path;

/// Errors that can occur when constructing or loading a [`MipImage`].
#[derive(Debug)]
pub enum MipError {
    /// Width or height was zero.
    InvalidDimensions { width: u32, height: u32 },
    /// The pixel buffer length does not match `width * height * 4`.
    DataSizeMismatch { expected: usize, actual: usize },
    /// The source file could not be opened or decoded.
    Image(image::ImageError),
}

impl std::fmt::Display for MipError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MipError::InvalidDimensions { width, height } => {
                write!(f, "image dimensions must be non-zero, got {}x{}", width, height)
            }
            MipError::DataSizeMismatch { expected, actual } => {
                write!(
                    f,
                    "pixel buffer length {} does not match dimensions (expected {})",
                    actual, expected
                )
            }
            MipError::Image(e) => write!(f, "image error: {}", e),
        }
    }
}

impl std::error::Error for MipError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MipError::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<image::ImageError> for MipError {
    fn from(e: image::ImageError) -> Self {
        MipError::Image(e)
    }
}

/// An RGBA8 image buffer: one level of a mip chain.
///
/// Construction validates that both dimensions are non-zero and that the
/// buffer holds exactly `width * height` 4-byte pixels; the image is
/// immutable afterwards, so every `MipImage` in circulation is well-formed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MipImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl MipImage {
    /// Creates an image from raw RGBA8 bytes in row-major order.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, MipError> {
        if width == 0 || height == 0 {
            return Err(MipError::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(MipError::DataSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Copies a decoded [`image::RgbaImage`] into a `MipImage`.
    pub fn from_image(img: &image::RgbaImage) -> Result<Self, MipError> {
        let (width, height) = img.dimensions();
        Self::new(width, height, img.as_raw().clone())
    }

    /// Loads and decodes an image file, converting to RGBA8.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MipError> {
        let img = image::open(path)?.to_rgba8();
        Self::from_image(&img)
    }

    /// Converts back into an [`image::RgbaImage`], e.g. to save a level to
    /// disk for inspection.
    pub fn into_image(self) -> image::RgbaImage {
        image::RgbaImage::from_raw(self.width, self.height, self.data)
            .expect("MipImage buffer length always matches its dimensions")
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw RGBA8 bytes, row-major, ready for a texture-level upload.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Reads the pixel at `(x, y)` with clamp-to-edge semantics: coordinates
    /// past the right or bottom edge return the nearest edge texel.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let x = x.min(self.width - 1) as usize;
        let y = y.min(self.height - 1) as usize;
        let i = (y * self.width as usize + x) * 4;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    /// Produces the next mip level: a `max(1, w/2)` x `max(1, h/2)` image
    /// where each destination pixel is the bilinear blend of the four source
    /// texels around its center.
    ///
    /// Interpolation is per-channel and linear (not gamma-aware), and the
    /// blended value is truncated toward zero when written back into 8-bit
    /// storage.
    pub fn next_level(&self) -> MipImage {
        let dst_width = (self.width / 2).max(1);
        let dst_height = (self.height / 2).max(1);
        let mut data = Vec::with_capacity(dst_width as usize * dst_height as usize * 4);

        for y in 0..dst_height {
            for x in 0..dst_width {
                // Destination pixel center mapped into source texel space.
                let u = (x as f32 + 0.5) / dst_width as f32;
                let v = (y as f32 + 0.5) / dst_height as f32;
                let au = u * self.width as f32 - 0.5;
                let av = v * self.height as f32 - 0.5;

                let tx = au.floor();
                let ty = av.floor();
                let t1 = au - tx;
                let t2 = av - ty;
                let (tx, ty) = (tx as u32, ty as u32);

                let tl = self.pixel(tx, ty);
                let tr = self.pixel(tx + 1, ty);
                let bl = self.pixel(tx, ty + 1);
                let br = self.pixel(tx + 1, ty + 1);

                for c in 0..4 {
                    let top = lerp(tl[c], tr[c], t1);
                    let bottom = lerp(bl[c], br[c], t1);
                    let blended = top + (bottom - top) * t2;
                    data.push(blended as u8);
                }
            }
        }

        MipImage {
            width: dst_width,
            height: dst_height,
            data,
        }
    }

    /// The number of levels [`MipImage::mip_chain`] will produce for this
    /// image: `1 + floor(log2(max(width, height)))`.
    pub fn mip_level_count(&self) -> u32 {
        num_mip_levels(self.width, self.height)
    }

    /// Generates the full mip chain: level 0 is `self`, each following level
    /// halves the previous one, and the chain ends at 1x1.
    pub fn mip_chain(self) -> Vec<MipImage> {
        let mut levels = vec![self];
        loop {
            let last = &levels[levels.len() - 1];
            if last.width == 1 && last.height == 1 {
                break;
            }
            let next = last.next_level();
            levels.push(next);
        }
        levels
    }
}

fn lerp(a: u8, b: u8, t: f32) -> f32 {
    let a = a as f32;
    a + (b as f32 - a) * t
}

/// Mip levels needed to take a `width` x `height` texture down to 1x1,
/// counting the base level.
pub fn num_mip_levels(width: u32, height: u32) -> u32 {
    1 + width.max(height).max(1).ilog2()
}
