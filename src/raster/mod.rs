//! Raster operations behind the pipeline.
//!
//! Every backend implements the same three-call contract, invoked strictly in order per sweep:
//! one `create_canvas`, one `overlay` per screenshot, one `resize_flatten`.

use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::error::StripResult,
    layout::{Offset, Size},
};

/// ImageMagick `convert`/`composite` backend.
pub mod magick;
/// In-process backend built on the `image` crate.
pub mod native;
/// Backend that records calls without touching the filesystem.
pub mod recording;

/// Opaque RGB background used when flattening.
pub type Rgb8 = [u8; 3];

/// Background of published strips.
pub const WHITE: Rgb8 = [255, 255, 255];

/// Raster capability used by the pipeline.
pub trait RasterOps {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// Create a fully transparent canvas of `size` at `out`, replacing any existing file.
    fn create_canvas(&mut self, size: Size, out: &Path) -> StripResult<()>;

    /// Composite `src` at full opacity onto `canvas` at `offset`, alpha-aware, writing back to
    /// `canvas`.
    fn overlay(&mut self, src: &Path, canvas: &Path, offset: Offset) -> StripResult<()>;

    /// Resize `src` to `output_width` (height keeps the aspect ratio), flatten onto
    /// `background` and write the opaque result to `dst`.
    fn resize_flatten(
        &mut self,
        src: &Path,
        dst: &Path,
        output_width: u32,
        background: Rgb8,
    ) -> StripResult<()>;
}

/// Raster backends selectable at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BackendKind {
    /// External ImageMagick tools.
    #[default]
    Magick,
    /// In-process `image` crate.
    Native,
}

pub fn create_raster(kind: BackendKind) -> Box<dyn RasterOps> {
    match kind {
        BackendKind::Magick => Box::new(magick::MagickRaster::default()),
        BackendKind::Native => Box::new(native::NativeRaster::default()),
    }
}

/// Whether `tool` can be launched and answers `-version` successfully.
pub fn is_tool_on_path(tool: &str) -> bool {
    std::process::Command::new(tool)
        .arg("-version")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

pub fn ensure_parent_dir(path: &Path) -> StripResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}
