use crate::{
    config::SweepConfig,
    foundation::error::{StripError, StripResult},
};

/// Pixel size of a raster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Signed placement of a layer relative to the canvas origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Offset {
    pub x: i64,
    pub y: i64,
}

/// Horizontal strip layout for one sweep: `count` cells of `cell` size separated by `margin`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasGeometry {
    pub cell: Size,
    pub margin: u32,
    pub count: u32,
    pub canvas: Size,
}

impl CanvasGeometry {
    pub fn new(cell: Size, margin: u32, count: u32) -> StripResult<Self> {
        if count == 0 {
            return Err(StripError::validation(
                "canvas layout needs at least one cell",
            ));
        }
        let width = cell
            .width
            .checked_mul(count)
            .and_then(|w| w.checked_add(margin.checked_mul(count - 1)?))
            .ok_or_else(|| {
                StripError::validation(format!(
                    "canvas width overflows u32 ({count} cells of {} px + {margin} px margins)",
                    cell.width
                ))
            })?;
        Ok(Self {
            cell,
            margin,
            count,
            canvas: Size {
                width,
                height: cell.height,
            },
        })
    }

    /// Layout for a sweep of `count` screenshots sized per `cfg`.
    pub fn for_sweep(cfg: &SweepConfig, count: usize) -> StripResult<Self> {
        let count = u32::try_from(count)
            .map_err(|_| StripError::validation(format!("too many cells: {count}")))?;
        Self::new(
            Size {
                width: cfg.width,
                height: cfg.height,
            },
            cfg.margin,
            count,
        )
    }

    pub fn offset(&self, index: u32) -> Offset {
        let stride = i64::from(self.cell.width) + i64::from(self.margin);
        Offset {
            x: i64::from(index) * stride,
            y: 0,
        }
    }

    pub fn offsets(&self) -> impl Iterator<Item = Offset> + '_ {
        (0..self.count).map(|i| self.offset(i))
    }
}

#[cfg(test)]
#[path = "../tests/unit/layout.rs"]
mod tests;
