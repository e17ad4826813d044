//! sweepstrip turns parameter-sweep screenshots into horizontal comparison strips.
//!
//! For every parameter dimension `d` the screenshots that vary `d` (all other parameters at
//! their midpoint) are laid side by side on a transparent canvas `p<d>.png`, which is then
//! downsampled onto white as `p<d>.jpg`.
//!
//! # Pipeline overview
//!
//! 1. **Name**: `(dim, step) -> filename` ([`generate_name`])
//! 2. **Enumerate**: `dim -> Sweep` ([`generate_key_and_files`])
//! 3. **Compose**: `Sweep -> ComposedCanvas` ([`compose_sweep`])
//! 4. **Render**: `ComposedCanvas -> JPEG` ([`render_final`])
//!
//! Raster work goes through [`RasterOps`]; the default backend shells out to ImageMagick.
#![forbid(unsafe_code)]

pub mod config;
mod foundation;
pub mod layout;
pub mod pipeline;
pub mod raster;
pub mod sweep;

pub use config::SweepConfig;
pub use foundation::error::{StripError, StripResult};
pub use layout::{CanvasGeometry, Offset, Size};
pub use pipeline::{
    ComposedCanvas, SweepReport, compose_sweep, preflight, render_final, run, run_sweep,
};
pub use raster::magick::MagickRaster;
pub use raster::native::NativeRaster;
pub use raster::recording::{RasterOp, RecordingRaster};
pub use raster::{BackendKind, RasterOps, Rgb8, WHITE, create_raster, is_tool_on_path};
pub use sweep::enumerate::{Sweep, enumerate_sweeps, generate_key_and_files};
pub use sweep::naming::{MIDPOINT_TOKEN, format_token, generate_name, step_value};
