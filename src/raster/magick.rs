use std::{
    ffi::OsString,
    io::ErrorKind,
    path::Path,
    process::{Command, Stdio},
};

use crate::{
    foundation::error::{StripError, StripResult},
    layout::{Offset, Size},
    raster::{RasterOps, Rgb8, ensure_parent_dir},
};

/// Shells out to ImageMagick 6 style `convert` and `composite` binaries.
#[derive(Clone, Debug)]
pub struct MagickRaster {
    pub convert_bin: String,
    pub composite_bin: String,
}

impl Default for MagickRaster {
    fn default() -> Self {
        Self {
            convert_bin: "convert".to_string(),
            composite_bin: "composite".to_string(),
        }
    }
}

impl MagickRaster {
    pub fn with_binaries(convert_bin: impl Into<String>, composite_bin: impl Into<String>) -> Self {
        Self {
            convert_bin: convert_bin.into(),
            composite_bin: composite_bin.into(),
        }
    }

    fn run(&self, tool: &str, args: Vec<OsString>) -> StripResult<()> {
        tracing::debug!(tool, ?args, "invoking imagemagick");

        let output = Command::new(tool)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => StripError::tool_not_found(tool),
                _ => StripError::Other(
                    anyhow::Error::new(e).context(format!("failed to spawn '{tool}'")),
                ),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(StripError::tool_failed(
                tool,
                output.status.code(),
                stderr.trim(),
            ));
        }
        Ok(())
    }
}

impl RasterOps for MagickRaster {
    fn name(&self) -> &'static str {
        "magick"
    }

    fn create_canvas(&mut self, size: Size, out: &Path) -> StripResult<()> {
        ensure_parent_dir(out)?;
        self.run(&self.convert_bin, canvas_args(size, out))
    }

    fn overlay(&mut self, src: &Path, canvas: &Path, offset: Offset) -> StripResult<()> {
        self.run(&self.composite_bin, overlay_args(src, canvas, offset))
    }

    fn resize_flatten(
        &mut self,
        src: &Path,
        dst: &Path,
        output_width: u32,
        background: Rgb8,
    ) -> StripResult<()> {
        ensure_parent_dir(dst)?;
        self.run(
            &self.convert_bin,
            resize_flatten_args(src, dst, output_width, background),
        )
    }
}

/// `WxH xc:none <out>`
pub fn canvas_args(size: Size, out: &Path) -> Vec<OsString> {
    vec![
        "-size".into(),
        size.to_string().into(),
        "xc:none".into(),
        out.into(),
    ]
}

/// Full-opacity dissolve of `src` onto `canvas`, written back in place.
pub fn overlay_args(src: &Path, canvas: &Path, offset: Offset) -> Vec<OsString> {
    vec![
        "-dissolve".into(),
        "100%".into(),
        src.into(),
        canvas.into(),
        "-geometry".into(),
        geometry(offset).into(),
        "-matte".into(),
        canvas.into(),
    ]
}

pub fn resize_flatten_args(
    src: &Path,
    dst: &Path,
    output_width: u32,
    background: Rgb8,
) -> Vec<OsString> {
    vec![
        "-resize".into(),
        format!("{output_width}x").into(),
        "-background".into(),
        color_spec(background).into(),
        "-flatten".into(),
        src.into(),
        dst.into(),
    ]
}

/// ImageMagick geometry offset, e.g. `+110+0` or `-5+3`.
pub fn geometry(offset: Offset) -> String {
    format!("{:+}{:+}", offset.x, offset.y)
}

pub fn color_spec(rgb: Rgb8) -> String {
    if rgb == crate::raster::WHITE {
        return "white".to_string();
    }
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

#[cfg(test)]
#[path = "../../tests/unit/raster/magick.rs"]
mod tests;
