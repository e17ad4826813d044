use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::foundation::error::{StripError, StripResult};

/// Inputs that fully determine a sweep-strip run.
///
/// Missing JSON fields fall back to [`SweepConfig::default`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SweepConfig {
    /// Number of independent parameter dimensions.
    pub num_parameters: u32,
    /// Samples per dimension, evenly spaced over `[0, 1]`.
    pub num_steps: u32,
    /// Width of every source screenshot in pixels.
    pub width: u32,
    /// Height of every source screenshot in pixels.
    pub height: u32,
    /// Horizontal gap between neighbouring screenshots on the canvas.
    pub margin: u32,
    /// Width of the published JPEG; height follows the canvas aspect ratio.
    pub output_width: u32,
    /// Directory holding the source screenshots.
    pub input_image_dir: PathBuf,
    /// Directory receiving `p<d>.png` canvases and `p<d>.jpg` finals.
    pub output_dir: PathBuf,
    /// Check that every source screenshot exists before any raster work.
    pub check_sources: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            num_parameters: 5,
            num_steps: 5,
            width: 960,
            height: 640,
            margin: 20,
            output_width: 1920,
            input_image_dir: PathBuf::from("/path/to/image/dir"),
            output_dir: PathBuf::from("."),
            check_sources: false,
        }
    }
}

impl SweepConfig {
    /// Load a config from a JSON file.
    pub fn from_json_file(path: &Path) -> StripResult<Self> {
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| StripError::serde(format!("parse config '{}': {e}", path.display())))?;
        Ok(cfg)
    }

    pub fn validate(&self) -> StripResult<()> {
        if self.num_parameters == 0 {
            return Err(StripError::validation("num_parameters must be non-zero"));
        }
        if self.num_steps == 0 {
            return Err(StripError::validation("num_steps must be non-zero"));
        }
        if self.width == 0 || self.height == 0 {
            return Err(StripError::validation(
                "source width/height must be non-zero",
            ));
        }
        if self.output_width == 0 {
            return Err(StripError::validation("output_width must be non-zero"));
        }
        Ok(())
    }

    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_image_dir = dir.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn source_path(&self, file_name: &str) -> PathBuf {
        self.input_image_dir.join(file_name)
    }

    pub fn canvas_path(&self, key: &str) -> PathBuf {
        self.output_dir.join(format!("{key}.png"))
    }

    pub fn final_path(&self, key: &str) -> PathBuf {
        self.output_dir.join(format!("{key}.jpg"))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
