//! Built-in step-cost functions, selectable from the command line.

use std::fmt;
use std::str::FromStr;

use marcher_core::{Image, Rgb};
use marcher_paths::WeightOracle;
use serde::Serialize;

/// Constant added to the colour-based costs so that no step is free.
const STEP_FLOOR: f64 = 0.01;

/// Number of serpentine lanes used by [`all_colour`].
const LANES: usize = 5;

/// The named weight functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Weight {
    /// Mode 1: Euclidean RGB distance between the two pixels.
    SimilarColour,
    /// Mode 2: how far the destination pixel is from white.
    HowWhite,
    /// Mode 3: scripted serpentine that sweeps the whole image.
    AllColour,
}

impl Weight {
    pub const ALL: [Weight; 3] = [Self::SimilarColour, Self::HowWhite, Self::AllColour];

    /// Numeric mode used on the command line.
    pub const fn mode(self) -> u8 {
        match self {
            Self::SimilarColour => 1,
            Self::HowWhite => 2,
            Self::AllColour => 3,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::SimilarColour => "similar-colour",
            Self::HowWhite => "how-white",
            Self::AllColour => "all-colour",
        }
    }

    pub fn from_mode(mode: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.mode() == mode)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses either the numeric mode (`"1"`) or the name (`"similar-colour"`).
impl FromStr for Weight {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(mode) = s.parse::<u8>() {
            return Self::from_mode(mode).ok_or_else(|| format!("mode {mode} is not in 1..=3"));
        }
        Self::ALL
            .into_iter()
            .find(|w| w.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown weight function '{s}'"))
    }
}

impl WeightOracle<Image> for Weight {
    fn cost(&self, im: &Image, from: usize, to: usize) -> f64 {
        match self {
            Self::SimilarColour => similar_colour(im, from, to),
            Self::HowWhite => how_white(im, from, to),
            Self::AllColour => all_colour(im, from, to),
        }
    }
}

/// Euclidean distance between the two pixels' colours, plus a small floor.
pub fn similar_colour(im: &Image, a: usize, b: usize) -> f64 {
    im.pixel(a).distance(im.pixel(b)) + STEP_FLOOR
}

/// Distance of the destination pixel from white, scaled by 1/10, plus a
/// small floor. The source pixel is ignored.
pub fn how_white(im: &Image, _a: usize, b: usize) -> f64 {
    im.pixel(b).distance(Rgb::WHITE) / 10.0 + STEP_FLOOR
}

/// A serpentine that sweeps the image along five horizontal lanes.
///
/// Lanes sit at rows `h * (2k + 1) / 10`. Even lanes run right, odd lanes
/// run left. On a lane, stepping in its direction is free, and inside the
/// turn margin (`w / 10 + 1` columns at the lane's far end) stepping down is
/// free instead. The last lane never turns. Every other step costs 1.
pub fn all_colour(im: &Image, a: usize, b: usize) -> f64 {
    let (w, h) = (im.width(), im.height());
    let (x, y) = (a % w, a / w);
    let margin = w / 10;

    let Some(lane) = (0..LANES).find(|k| y == h * (2 * k + 1) / 10) else {
        return 1.0;
    };
    let rightward = lane % 2 == 0;
    let turning = lane + 1 < LANES
        && if rightward {
            x + 1 + margin >= w
        } else {
            x <= margin
        };

    let free = if turning {
        a + w
    } else if rightward {
        a + 1
    } else {
        a.wrapping_sub(1)
    };
    if b == free { 0.0 } else { 1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marcher_paths::find_path;

    const EPS: f64 = 1e-4;

    #[test]
    fn parse_modes_and_names() {
        assert_eq!("1".parse::<Weight>(), Ok(Weight::SimilarColour));
        assert_eq!("2".parse::<Weight>(), Ok(Weight::HowWhite));
        assert_eq!("3".parse::<Weight>(), Ok(Weight::AllColour));
        assert_eq!("how-white".parse::<Weight>(), Ok(Weight::HowWhite));
        assert_eq!("All-Colour".parse::<Weight>(), Ok(Weight::AllColour));
        assert!("0".parse::<Weight>().is_err());
        assert!("4".parse::<Weight>().is_err());
        assert_eq!(
            "sepia".parse::<Weight>(),
            Err("unknown weight function 'sepia'".to_string())
        );
    }

    #[test]
    fn display_round_trips() {
        for w in Weight::ALL {
            assert_eq!(w.to_string().parse::<Weight>(), Ok(w));
            assert_eq!(Weight::from_mode(w.mode()), Some(w));
        }
    }

    #[test]
    fn similar_colour_values() {
        let im = Image::from_pixels(
            3,
            1,
            vec![Rgb::new(0, 0, 0), Rgb::new(3, 4, 0), Rgb::new(3, 4, 12)],
        )
        .unwrap();
        assert!((similar_colour(&im, 0, 1) - 5.01).abs() < 1e-12);
        assert!((similar_colour(&im, 1, 2) - 12.01).abs() < 1e-12);
        assert_eq!(similar_colour(&im, 1, 0), similar_colour(&im, 0, 1));
    }

    #[test]
    fn how_white_depends_on_destination_only() {
        let im = Image::from_pixels(2, 1, vec![Rgb::WHITE, Rgb::BLACK]).unwrap();
        assert!((how_white(&im, 1, 0) - 0.01).abs() < 1e-12);
        let black = (3.0f64 * 255.0 * 255.0 / 100.0).sqrt() + 0.01;
        assert!((how_white(&im, 0, 1) - black).abs() < 1e-9);
    }

    #[test]
    fn all_colour_thresholds_on_200_square() {
        let im = Image::new(200, 200);
        // Lane 0 (row 20) runs right and turns from x = 179.
        assert_eq!(all_colour(&im, 4000, 4001), 0.0);
        assert_eq!(all_colour(&im, 4178, 4179), 0.0);
        assert_eq!(all_colour(&im, 4178, 4378), 1.0);
        assert_eq!(all_colour(&im, 4179, 4379), 0.0);
        assert_eq!(all_colour(&im, 4179, 4180), 1.0);
        // Lane 1 (row 60) runs left and turns up to x = 20.
        assert_eq!(all_colour(&im, 12021, 12020), 0.0);
        assert_eq!(all_colour(&im, 12020, 12220), 0.0);
        assert_eq!(all_colour(&im, 12020, 12019), 1.0);
        // Lane 4 (row 180) runs right all the way.
        assert_eq!(all_colour(&im, 36198, 36199), 0.0);
        assert_eq!(all_colour(&im, 36199, 36399), 1.0);
        // Off-lane steps.
        assert_eq!(all_colour(&im, 0, 1), 1.0);
        assert_eq!(all_colour(&im, 0, 200), 1.0);
    }

    #[test]
    fn all_colour_sweeps_every_lane() {
        let im = Image::new(200, 200);
        let path = find_path(&im, &Weight::AllColour).unwrap().unwrap();
        // 199 rows to descend, four of them via free turns.
        assert!((path.cost() - 195.0).abs() < EPS);
        let rows: Vec<usize> = [20, 60, 100, 140, 180].to_vec();
        for row in rows {
            let on_row = path.cells().iter().filter(|&&c| c / 200 == row).count();
            assert!(on_row >= 150, "lane row {row} only has {on_row} cells");
        }
    }

    #[test]
    fn all_colour_tiny_images() {
        let im = Image::new(1, 1);
        let path = find_path(&im, &Weight::AllColour).unwrap().unwrap();
        assert_eq!(path.cells(), &[0]);
        let im = Image::new(3, 2);
        let path = find_path(&im, &Weight::AllColour).unwrap().unwrap();
        assert!(path.cost() <= 3.0);
    }
}
