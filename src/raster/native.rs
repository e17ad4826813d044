use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::Path,
};

use anyhow::Context as _;
use image::{ImageFormat, RgbImage, RgbaImage, codecs::jpeg::JpegEncoder, imageops::FilterType};

use crate::{
    foundation::error::{StripError, StripResult},
    layout::{Offset, Size},
    raster::{RasterOps, Rgb8, ensure_parent_dir},
};

/// JPEG quality ImageMagick uses when the input carries no quality hint.
pub const DEFAULT_JPEG_QUALITY: u8 = 92;

/// Performs the raster contract in-process: PNG canvases, source-over compositing, Lanczos3
/// downsampling and JPEG output.
#[derive(Clone, Debug)]
pub struct NativeRaster {
    pub jpeg_quality: u8,
}

impl Default for NativeRaster {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl RasterOps for NativeRaster {
    fn name(&self) -> &'static str {
        "native"
    }

    fn create_canvas(&mut self, size: Size, out: &Path) -> StripResult<()> {
        if size.width == 0 || size.height == 0 {
            return Err(StripError::validation(format!(
                "canvas size must be non-zero, got {size}"
            )));
        }
        ensure_parent_dir(out)?;
        RgbaImage::new(size.width, size.height)
            .save_with_format(out, ImageFormat::Png)
            .with_context(|| format!("write canvas '{}'", out.display()))?;
        Ok(())
    }

    fn overlay(&mut self, src: &Path, canvas: &Path, offset: Offset) -> StripResult<()> {
        let mut base = open_rgba8(canvas)?;
        let layer = open_rgba8(src)?;
        overlay_straight(&mut base, &layer, offset);
        base.save_with_format(canvas, ImageFormat::Png)
            .with_context(|| format!("write canvas '{}'", canvas.display()))?;
        Ok(())
    }

    fn resize_flatten(
        &mut self,
        src: &Path,
        dst: &Path,
        output_width: u32,
        background: Rgb8,
    ) -> StripResult<()> {
        if output_width == 0 {
            return Err(StripError::validation("output width must be non-zero"));
        }
        let mut img = open_rgba8(src)?;
        let out_height = scaled_height(img.width(), img.height(), output_width);

        premultiply_rgba8_in_place(&mut img);
        let resized = image::imageops::resize(&img, output_width, out_height, FilterType::Lanczos3);
        let flat = flatten_premul_onto(&resized, background);

        ensure_parent_dir(dst)?;
        let f = File::create(dst).with_context(|| format!("create '{}'", dst.display()))?;
        let mut w = BufWriter::new(f);
        JpegEncoder::new_with_quality(&mut w, self.jpeg_quality)
            .encode_image(&flat)
            .with_context(|| format!("encode jpeg '{}'", dst.display()))?;
        w.flush()
            .with_context(|| format!("flush '{}'", dst.display()))?;
        Ok(())
    }
}

fn open_rgba8(path: &Path) -> StripResult<RgbaImage> {
    let img = image::open(path).with_context(|| format!("open image '{}'", path.display()))?;
    Ok(img.to_rgba8())
}

/// Height that keeps `width:height` when the width becomes `target_width`, never below 1.
pub fn scaled_height(width: u32, height: u32, target_width: u32) -> u32 {
    if width == 0 {
        return height.max(1);
    }
    let h = (u64::from(height) * u64::from(target_width) + u64::from(width) / 2) / u64::from(width);
    u32::try_from(h).unwrap_or(u32::MAX).max(1)
}

/// Source-over `layer` onto `base` (both straight alpha) at `offset`, clipped to `base`.
pub fn overlay_straight(base: &mut RgbaImage, layer: &RgbaImage, offset: Offset) {
    let (bw, bh) = (i64::from(base.width()), i64::from(base.height()));
    for (lx, ly, px) in layer.enumerate_pixels() {
        let x = offset.x + i64::from(lx);
        let y = offset.y + i64::from(ly);
        if x < 0 || y < 0 || x >= bw || y >= bh {
            continue;
        }
        let dst = base.get_pixel_mut(x as u32, y as u32);
        dst.0 = over_straight(dst.0, px.0);
    }
}

pub fn over_straight(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    if src[3] == 255 {
        return src;
    }
    if src[3] == 0 {
        return dst;
    }
    unpremultiply(over_premul(premultiply(dst), premultiply(src)))
}

fn over_premul(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255(u16::from(dst[i]), inv));
    }
    out
}

fn premultiply(px: [u8; 4]) -> [u8; 4] {
    let a = u16::from(px[3]);
    [
        mul_div255(u16::from(px[0]), a),
        mul_div255(u16::from(px[1]), a),
        mul_div255(u16::from(px[2]), a),
        px[3],
    ]
}

fn unpremultiply(px: [u8; 4]) -> [u8; 4] {
    let a = u32::from(px[3]);
    if a == 0 {
        return [0, 0, 0, 0];
    }
    let un = |c: u8| ((u32::from(c) * 255 + a / 2) / a).min(255) as u8;
    [un(px[0]), un(px[1]), un(px[2]), px[3]]
}

fn premultiply_rgba8_in_place(img: &mut RgbaImage) {
    for px in img.pixels_mut() {
        px.0 = premultiply(px.0);
    }
}

/// Collapse premultiplied RGBA onto an opaque background.
pub fn flatten_premul_onto(img: &RgbaImage, bg: Rgb8) -> RgbImage {
    RgbImage::from_fn(img.width(), img.height(), |x, y| {
        let s = img.get_pixel(x, y).0;
        let inv = 255u16 - u16::from(s[3]);
        image::Rgb([
            s[0].saturating_add(mul_div255(u16::from(bg[0]), inv)),
            s[1].saturating_add(mul_div255(u16::from(bg[1]), inv)),
            s[2].saturating_add(mul_div255(u16::from(bg[2]), inv)),
        ])
    })
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/raster/native.rs"]
mod tests;
