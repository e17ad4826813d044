use super::*;

#[test]
fn documentation_layout_width() {
    let cfg = SweepConfig::default();
    let geom = CanvasGeometry::for_sweep(&cfg, 5).unwrap();
    assert_eq!(geom.canvas, Size { width: 4880, height: 640 });
}

#[test]
fn offsets_step_by_width_plus_margin() {
    let geom = CanvasGeometry::new(Size { width: 100, height: 50 }, 10, 3).unwrap();
    assert_eq!(geom.canvas.to_string(), "320x50");
    let xs: Vec<i64> = geom.offsets().map(|o| o.x).collect();
    assert_eq!(xs, vec![0, 110, 220]);
    assert!(geom.offsets().all(|o| o.y == 0));
}

#[test]
fn single_cell_has_no_margin() {
    let geom = CanvasGeometry::new(Size { width: 64, height: 32 }, 20, 1).unwrap();
    assert_eq!(geom.canvas, Size { width: 64, height: 32 });
}

#[test]
fn empty_and_overflowing_layouts_are_rejected() {
    let cell = Size { width: 10, height: 10 };
    assert!(CanvasGeometry::new(cell, 0, 0).is_err());

    let huge = Size { width: u32::MAX, height: 1 };
    assert!(matches!(
        CanvasGeometry::new(huge, 0, 2),
        Err(StripError::Validation(_))
    ));
}
