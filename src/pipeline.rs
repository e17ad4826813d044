use std::path::PathBuf;

use crate::{
    config::SweepConfig,
    foundation::error::{StripError, StripResult},
    layout::{CanvasGeometry, Size},
    raster::{RasterOps, WHITE},
    sweep::enumerate::{Sweep, enumerate_sweeps},
};

/// A sweep canvas with every screenshot layered on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposedCanvas {
    pub key: String,
    pub path: PathBuf,
    pub geometry: CanvasGeometry,
    /// Overlays applied, one per screenshot.
    pub layers: usize,
}

/// Outcome of one finished sweep.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SweepReport {
    pub key: String,
    pub canvas_path: PathBuf,
    pub final_path: PathBuf,
    pub canvas: Size,
    pub layers: usize,
}

/// Create the sweep canvas and overlay every screenshot left-to-right.
///
/// The canvas file is read and rewritten by every overlay, so calls go out strictly in step
/// order. A failing call aborts immediately and leaves the partial canvas on disk.
#[tracing::instrument(skip(cfg, sweep, raster), fields(key = %sweep.key))]
pub fn compose_sweep(
    cfg: &SweepConfig,
    sweep: &Sweep,
    raster: &mut dyn RasterOps,
) -> StripResult<ComposedCanvas> {
    let geometry = CanvasGeometry::for_sweep(cfg, sweep.len())?;
    let path = cfg.canvas_path(&sweep.key);

    raster.create_canvas(geometry.canvas, &path)?;
    tracing::debug!(size = %geometry.canvas, path = %path.display(), "canvas created");

    for (file, offset) in sweep.files.iter().zip(geometry.offsets()) {
        let src = cfg.source_path(file);
        raster.overlay(&src, &path, offset)?;
        tracing::debug!(src = %src.display(), x = offset.x, y = offset.y, "layer applied");
    }

    Ok(ComposedCanvas {
        key: sweep.key.clone(),
        path,
        geometry,
        layers: sweep.len(),
    })
}

/// Downsample a composed canvas onto white and write the publishable JPEG.
#[tracing::instrument(skip(cfg, canvas, raster), fields(key = %canvas.key))]
pub fn render_final(
    cfg: &SweepConfig,
    canvas: &ComposedCanvas,
    raster: &mut dyn RasterOps,
) -> StripResult<PathBuf> {
    let out = cfg.final_path(&canvas.key);
    raster.resize_flatten(&canvas.path, &out, cfg.output_width, WHITE)?;
    Ok(out)
}

pub fn run_sweep(
    cfg: &SweepConfig,
    sweep: &Sweep,
    raster: &mut dyn RasterOps,
) -> StripResult<SweepReport> {
    let canvas = compose_sweep(cfg, sweep, raster)?;
    let final_path = render_final(cfg, &canvas, raster)?;
    tracing::info!(
        key = %canvas.key,
        layers = canvas.layers,
        out = %final_path.display(),
        "sweep finished"
    );
    Ok(SweepReport {
        key: canvas.key,
        canvas_path: canvas.path,
        final_path,
        canvas: canvas.geometry.canvas,
        layers: canvas.layers,
    })
}

/// Fail on the first screenshot of any sweep that does not exist on disk.
pub fn preflight(cfg: &SweepConfig, sweeps: &[Sweep]) -> StripResult<()> {
    for sweep in sweeps {
        for file in &sweep.files {
            let path = cfg.source_path(file);
            if !path.is_file() {
                return Err(StripError::SourceImageMissing(path));
            }
        }
    }
    Ok(())
}

/// Build every sweep strip, dimension 0 first.
#[tracing::instrument(skip(cfg, raster), fields(backend = raster.name()))]
pub fn run(cfg: &SweepConfig, raster: &mut dyn RasterOps) -> StripResult<Vec<SweepReport>> {
    cfg.validate()?;
    let sweeps = enumerate_sweeps(cfg);

    if cfg.check_sources {
        preflight(cfg, &sweeps)?;
    }

    let mut reports = Vec::with_capacity(sweeps.len());
    for sweep in &sweeps {
        reports.push(run_sweep(cfg, sweep, raster)?);
    }
    Ok(reports)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
