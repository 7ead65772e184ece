//! Label map regression test
//!
//! ROI-relative indexing, bounds checks, label queries and the mask view.

use blobtrace_core::{Color, Rect};
use blobtrace_region::{LabelMap, RegionError};
use blobtrace_test::RegParams;

/// Two blobs on a 6x8 grid
fn blobs() -> LabelMap {
    LabelMap::from_rows(&[
        vec![0, 0, 0, 0, 0, 0, 0, 0],
        vec![0, 1, 1, 1, 0, 0, 0, 0],
        vec![0, 1, 1, 0, 0, 0, 2, 0],
        vec![0, 0, 0, 0, 0, 2, 2, 0],
        vec![0, 0, 0, 0, 0, 2, 2, 0],
        vec![0, 0, 0, 0, 0, 0, 0, 0],
    ])
    .expect("build label map")
}

#[test]
fn label_reg() {
    let mut rp = RegParams::new("label");

    // --- Test 1: ROI offsets indexing ---
    eprintln!("=== ROI indexing ===");
    let mut map = blobs();
    map.set_roi(Rect::new(2, 3, 4, 3).expect("roi"));
    rp.compare_values(6.0, map.rows() as f64, 0.0);
    rp.compare_values(8.0, map.cols() as f64, 0.0);
    for row in 0..3 {
        for col in 0..4 {
            let via_roi = map.get(row, col).expect("roi get");
            let raw = map.raw_get(row + 3, col + 2).expect("raw get");
            rp.compare_values(raw as f64, via_roi as f64, 0.0);
        }
    }
    map.set(0, 0, 9).expect("roi set");
    rp.compare_values(9.0, map.raw_get(3, 2).expect("raw get") as f64, 0.0);

    // --- Test 2: Out-of-grid access fails ---
    eprintln!("=== Bounds checks ===");
    let err = map.get(3, 0).unwrap_err();
    rp.compare_bool(true, matches!(err, RegionError::LabelOutOfBounds { row: 6, .. }));
    rp.compare_bool(true, map.get(0, 6).is_err());
    rp.compare_bool(true, map.raw_get(0, 8).is_err());
    rp.compare_bool(true, map.set(5, 5, 1).is_err());
    eprintln!("  {}", err);

    // --- Test 3: Clone independence ---
    eprintln!("=== Clone independence ===");
    let mut copy = map.clone();
    copy.raw_set(1, 1, 0).expect("raw set");
    copy.set_roi(Rect::new(0, 0, 8, 6).expect("roi"));
    rp.compare_values(1.0, map.raw_get(1, 1).expect("raw get") as f64, 0.0);
    rp.compare_bool(true, map.roi() == Rect::new_unchecked(2, 3, 4, 3));

    // --- Test 4: Label queries ---
    eprintln!("=== Label queries ===");
    let map = blobs();
    rp.compare_values(10.0, map.count_labeled() as f64, 0.0);
    let b1 = map.label_bounds(1).expect("label 1 bounds");
    let b2 = map.label_bounds(2).expect("label 2 bounds");
    rp.compare_bool(true, b1 == Rect::new_unchecked(1, 1, 3, 2));
    rp.compare_bool(true, b2 == Rect::new_unchecked(5, 2, 2, 3));
    rp.compare_bool(true, map.label_bounds(3).is_none());
    eprintln!("  label 1: {:?}", b1);
    eprintln!("  label 2: {:?}", b2);

    // --- Test 5: Mask view ---
    eprintln!("=== Mask view ===");
    let mask = map.render_mask(Color::WHITE).expect("render mask");
    rp.compare_values(8.0, mask.width() as f64, 0.0);
    rp.compare_values(6.0, mask.height() as f64, 0.0);
    rp.compare_bool(true, mask.get_rgb(6, 2) == Some(Color::WHITE));
    rp.compare_bool(true, mask.get_rgb(4, 1) == Some(Color::BLACK));
    rp.write_pix(&mask).expect("write mask");

    assert!(rp.cleanup(), "label regression test failed");
}
