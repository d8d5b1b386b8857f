//! Colour samples: [`Rgb`].

// ---------------------------------------------------------------------------
// Rgb
// ---------------------------------------------------------------------------

/// A pixel sample with three 8-bit channels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const GREEN: Self = Self::new(0, 255, 0);

    /// Construct from individual channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack from `0x00RRGGBB`. The top byte is ignored.
    #[inline]
    pub const fn from_packed(v: u32) -> Self {
        Self::new(((v >> 16) & 0xFF) as u8, ((v >> 8) & 0xFF) as u8, (v & 0xFF) as u8)
    }

    /// Pack into `0x00RRGGBB`.
    #[inline]
    pub const fn packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Channels as an array, in R, G, B order.
    #[inline]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Euclidean distance between the two colours seen as 3-vectors.
    pub fn distance(self, other: Rgb) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        c.channels()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_round_trip() {
        let c = Rgb::new(0x12, 0x34, 0x56);
        assert_eq!(c.packed(), 0x0012_3456);
        assert_eq!(Rgb::from_packed(0xFF12_3456), c);
    }

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(Rgb::BLACK.distance(Rgb::BLACK), 0.0);
        assert_eq!(Rgb::new(3, 4, 0).distance(Rgb::BLACK), 5.0);
        let d = Rgb::WHITE.distance(Rgb::BLACK);
        assert!((d - (3.0f64 * 255.0 * 255.0).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Rgb::new(10, 200, 30);
        let b = Rgb::new(250, 0, 31);
        assert_eq!(a.distance(b), b.distance(a));
    }

    #[test]
    fn array_conversions() {
        let c: Rgb = [1, 2, 3].into();
        assert_eq!(c, Rgb::new(1, 2, 3));
        let arr: [u8; 3] = c.into();
        assert_eq!(arr, [1, 2, 3]);
    }
}
