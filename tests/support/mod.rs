use std::path::{Path, PathBuf};

use sweepstrip::{SweepConfig, enumerate_sweeps};

/// Fresh scratch directory under `target/`.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("it").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Write one solid-colored screenshot per `(dim, step)` pair named per the sweep scheme.
pub fn write_screenshots(cfg: &SweepConfig) {
    std::fs::create_dir_all(&cfg.input_image_dir).unwrap();
    for (dim, sweep) in enumerate_sweeps(cfg).iter().enumerate() {
        for (step, file) in sweep.files.iter().enumerate() {
            let shade = (40 * step as u32 + 60 * dim as u32).min(255) as u8;
            let img = image::RgbaImage::from_pixel(
                cfg.width,
                cfg.height,
                image::Rgba([shade, 255 - shade, 128, 255]),
            );
            img.save(cfg.input_image_dir.join(file)).unwrap();
        }
    }
}

pub fn small_config(root: &Path) -> SweepConfig {
    SweepConfig {
        num_parameters: 2,
        num_steps: 3,
        width: 100,
        height: 50,
        margin: 10,
        output_width: 300,
        input_image_dir: root.join("shots"),
        output_dir: root.join("out"),
        check_sources: false,
    }
}
