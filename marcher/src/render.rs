use marcher_core::{Image, Rgb};
use marcher_paths::MarchPath;

/// Green-channel drop from the first path cell to the last.
const GRADIENT_SPAN: f64 = 120.0;

/// Colour of the `step`-th of `len` path cells: light green fading to dark.
pub fn path_shade(step: usize, len: usize) -> Rgb {
    let per_step = GRADIENT_SPAN / len.max(1) as f64;
    let g = 255.0 - step as f64 * per_step;
    // Truncates like an integer cast of the shade.
    Rgb::new(0, g as u8, 0)
}

/// Copy of `im` with every path cell painted along a green gradient.
pub fn overlay_path(im: &Image, path: &MarchPath) -> Image {
    let mut out = im.clone();
    let len = path.len();
    for (step, &cell) in path.cells().iter().enumerate() {
        out.set_pixel(cell, path_shade(step, len));
    }
    out
}
