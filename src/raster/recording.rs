use std::path::{Path, PathBuf};

use crate::{
    foundation::error::{StripError, StripResult},
    layout::{Offset, Size},
    raster::{RasterOps, Rgb8},
};

/// One raster call as seen by [`RecordingRaster`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RasterOp {
    CreateCanvas {
        size: Size,
        out: PathBuf,
    },
    Overlay {
        src: PathBuf,
        canvas: PathBuf,
        offset: Offset,
    },
    ResizeFlatten {
        src: PathBuf,
        dst: PathBuf,
        output_width: u32,
        background: Rgb8,
    },
}

/// In-memory backend for tests and dry runs.
///
/// Calls are captured in invocation order. With [`RecordingRaster::failing_at`] the n-th call
/// (0-based) fails like a tool exiting with status 1, after being recorded.
#[derive(Debug, Default)]
pub struct RecordingRaster {
    ops: Vec<RasterOp>,
    fail_at: Option<usize>,
}

impl RecordingRaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(call: usize) -> Self {
        Self {
            ops: Vec::new(),
            fail_at: Some(call),
        }
    }

    pub fn ops(&self) -> &[RasterOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<RasterOp> {
        self.ops
    }

    fn record(&mut self, op: RasterOp) -> StripResult<()> {
        let idx = self.ops.len();
        self.ops.push(op);
        if self.fail_at == Some(idx) {
            return Err(StripError::tool_failed(
                "recording",
                Some(1),
                format!("injected failure at call {idx}"),
            ));
        }
        Ok(())
    }
}

impl RasterOps for RecordingRaster {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn create_canvas(&mut self, size: Size, out: &Path) -> StripResult<()> {
        self.record(RasterOp::CreateCanvas {
            size,
            out: out.to_path_buf(),
        })
    }

    fn overlay(&mut self, src: &Path, canvas: &Path, offset: Offset) -> StripResult<()> {
        self.record(RasterOp::Overlay {
            src: src.to_path_buf(),
            canvas: canvas.to_path_buf(),
            offset,
        })
    }

    fn resize_flatten(
        &mut self,
        src: &Path,
        dst: &Path,
        output_width: u32,
        background: Rgb8,
    ) -> StripResult<()> {
        self.record(RasterOp::ResizeFlatten {
            src: src.to_path_buf(),
            dst: dst.to_path_buf(),
            output_width,
            background,
        })
    }
}
