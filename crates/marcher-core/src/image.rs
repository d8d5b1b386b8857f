//! The [`Image`] type — an owned, row-major grid of [`Rgb`] samples.
//!
//! Pixels are addressed either by [`Point`] or by the flat index
//! `x + y * width` defined by [`Bounds`]. Decoding and encoding files is the
//! application's job; this type only holds samples.

use crate::color::Rgb;
use crate::geom::{Bounds, Point};

/// An owned `width × height` raster of RGB samples.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawImage")
)]
pub struct Image {
    bounds: Bounds,
    pixels: Vec<Rgb>,
}

/// Unchecked wire form of [`Image`]; converted through [`Image::from_pixels`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawImage {
    bounds: Bounds,
    pixels: Vec<Rgb>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawImage> for Image {
    type Error = String;

    fn try_from(raw: RawImage) -> Result<Self, Self::Error> {
        let Bounds { width, height } = raw.bounds;
        let found = raw.pixels.len();
        Self::from_pixels(width, height, raw.pixels)
            .ok_or_else(|| format!("{width}x{height} image cannot hold {found} pixels"))
    }
}

impl Image {
    /// Create a new image of the given dimensions, filled with black.
    pub fn new(width: usize, height: usize) -> Self {
        let bounds = Bounds::new(width, height);
        Self {
            bounds,
            pixels: vec![Rgb::BLACK; bounds.len()],
        }
    }

    /// Wrap existing samples. Returns `None` when `pixels.len()` does not
    /// equal `width * height`.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Rgb>) -> Option<Self> {
        let bounds = Bounds::new(width, height);
        if width.checked_mul(height)? != pixels.len() {
            return None;
        }
        Some(Self { bounds, pixels })
    }

    /// Build an image by evaluating `f` at every point, row by row.
    pub fn from_fn(width: usize, height: usize, f: impl Fn(Point) -> Rgb) -> Self {
        let bounds = Bounds::new(width, height);
        Self {
            bounds,
            pixels: bounds.iter().map(f).collect(),
        }
    }

    /// Extent of the image.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.bounds.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.bounds.height
    }

    /// Number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Whether the image has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Sample at flat index `idx`.
    ///
    /// # Panics
    /// If `idx >= self.len()`.
    #[inline]
    pub fn pixel(&self, idx: usize) -> Rgb {
        self.pixels[idx]
    }

    /// Overwrite the sample at flat index `idx`.
    ///
    /// # Panics
    /// If `idx >= self.len()`.
    #[inline]
    pub fn set_pixel(&mut self, idx: usize, c: Rgb) {
        self.pixels[idx] = c;
    }

    /// Sample at `p`, or `None` outside the image.
    pub fn at(&self, p: Point) -> Option<Rgb> {
        self.bounds.index_of(p).map(|i| self.pixels[i])
    }

    /// Overwrite the sample at `p`. Returns `false` (and does nothing)
    /// when `p` is outside the image.
    pub fn set(&mut self, p: Point, c: Rgb) -> bool {
        match self.bounds.index_of(p) {
            Some(i) => {
                self.pixels[i] = c;
                true
            }
            None => false,
        }
    }

    /// Set every pixel to `c`.
    pub fn fill(&mut self, c: Rgb) {
        self.pixels.fill(c);
    }

    /// All samples in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Interleaved `R, G, B` bytes in row-major order, as image encoders
    /// expect them.
    pub fn as_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.channels()).collect()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn image_round_trip() {
        let im = Image::from_fn(3, 2, |p| Rgb::new(p.x as u8, p.y as u8, 9));
        let json = serde_json::to_string(&im).unwrap();
        let back: Image = serde_json::from_str(&json).unwrap();
        assert_eq!(im, back);
    }

    #[test]
    fn pixel_count_must_match_bounds() {
        let empty = r#"{"bounds":{"width":3,"height":3},"pixels":[]}"#;
        let err = serde_json::from_str::<Image>(empty).unwrap_err();
        assert!(err.to_string().contains("3x3 image cannot hold 0 pixels"), "{err}");

        let short = Image::new(2, 2);
        let mut value = serde_json::to_value(&short).unwrap();
        value["bounds"]["width"] = serde_json::json!(3);
        assert!(serde_json::from_value::<Image>(value).is_err());
    }
}
