use std::path::PathBuf;

use log::info;
use marcher_core::Image;
use marcher_paths::{MarchPath, Marcher, SearchStats};
use serde::Serialize;

use crate::config::RunConfig;
use crate::error::RunError;
use crate::imageio::{load_image, save_image};
use crate::render::overlay_path;
use crate::weights::Weight;

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub image: PathBuf,
    pub output: PathBuf,
    pub weight: Weight,
    pub width: usize,
    pub height: usize,
    pub cost: f64,
    pub path_len: usize,
    pub stats: SearchStats,
}

impl Report {
    pub fn to_json(&self) -> Result<String, RunError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// March across an in-memory image. `Ok((None, _))` means no path exists.
pub fn march(image: &Image, weight: Weight) -> Result<(Option<MarchPath>, SearchStats), RunError> {
    let mut marcher = Marcher::for_context(image)?;
    let path = marcher.find_path(image, &weight)?;
    Ok((path, marcher.last_stats()))
}

/// Load the image, find the path, and write the visualization.
pub fn run(config: &RunConfig) -> Result<Report, RunError> {
    let image = load_image(&config.image)?;
    info!(
        "marching {} ({}x{}) with {}",
        config.image.display(),
        image.width(),
        image.height(),
        config.weight
    );

    let (path, stats) = march(&image, config.weight)?;
    let path = path.ok_or_else(|| RunError::NoPath {
        image: config.image.clone(),
    })?;
    info!("path cost {:.6} over {} pixels", path.cost(), path.len());

    save_image(&config.output, &overlay_path(&image, &path))?;

    Ok(Report {
        image: config.image.clone(),
        output: config.output.clone(),
        weight: config.weight,
        width: image.width(),
        height: image.height(),
        cost: path.cost(),
        path_len: path.len(),
        stats,
    })
}
