//! Chain-code contour regression test
//!
//! Polygon conversion, perimeter and boundary rendering of Freeman-coded
//! contours, plus the geometry of the resulting polygons.

use blobtrace_core::{Color, Error, Pix, PixelDepth, Point};
use blobtrace_region::{ChainCodeContour, Direction, Polygon, RegionError};
use blobtrace_test::RegParams;
use std::f64::consts::SQRT_2;

use Direction::*;

fn contour(codes: &[Direction]) -> ChainCodeContour {
    ChainCodeContour::with_codes(Point::new(0, 0), codes.to_vec())
}

#[test]
fn chaincode_reg() {
    let mut rp = RegParams::new("chaincode");

    // --- Test 1: Run collapse ---
    eprintln!("=== Run collapse ===");
    let c = contour(&[East, East, South]);
    let poly = c.to_polygon();
    rp.compare_values(2.0, poly.len() as f64, 0.0);
    rp.compare_bool(true, poly.points() == [Point::new(0, 0), Point::new(2, 0)]);
    rp.compare_values(3.0, c.perimeter(), 1e-12);
    eprintln!("  [E, E, S] -> {:?}", poly.points());

    let c = contour(&[NorthEast]);
    rp.compare_bool(true, c.to_polygon().points() == [Point::new(0, 0)]);
    rp.compare_values(SQRT_2, c.perimeter(), 1e-12);

    let empty = contour(&[]);
    rp.compare_values(1.0, empty.to_polygon().len() as f64, 0.0);
    rp.compare_values(0.0, empty.perimeter(), 0.0);

    // --- Test 2: Alternating and uniform sequences ---
    eprintln!("=== Alternating and uniform sequences ===");
    let alternating = [East, South, West, South, East, North];
    rp.compare_values(
        alternating.len() as f64,
        contour(&alternating).to_polygon().len() as f64,
        0.0,
    );
    for dir in Direction::ALL {
        let run = contour(&[dir; 5]);
        rp.compare_values(1.0, run.to_polygon().len() as f64, 0.0);
        let expected = if dir.is_diagonal() { 5.0 * SQRT_2 } else { 5.0 };
        rp.compare_values(expected, run.perimeter(), 1e-9);
    }

    // --- Test 3: Closed square outline ---
    eprintln!("=== Closed square outline ===");
    let mut codes = Vec::new();
    for dir in [East, South, West, North] {
        codes.extend([dir; 4]);
    }
    let square = ChainCodeContour::with_codes(Point::new(2, 2), codes);
    rp.compare_bool(true, square.end_point() == square.start);
    let poly = square.to_polygon();
    rp.compare_values(4.0, poly.len() as f64, 0.0);
    rp.compare_values(16.0, poly.area(), 0.0);
    rp.compare_values(square.perimeter(), poly.perimeter(), 1e-9);
    eprintln!("  square polygon: {:?}", poly.points());

    // --- Test 4: Boundary rendering ---
    eprintln!("=== Boundary rendering ===");
    let mut pix = Pix::new_rgb(8, 8).expect("create pix");
    square.render_default(&mut pix).expect("render square");
    let mut marked = 0;
    for y in 0..8 {
        for x in 0..8 {
            if pix.get_rgb(x, y) == Some(Color::WHITE) {
                marked += 1;
            }
        }
    }
    rp.compare_values(16.0, marked as f64, 0.0);
    rp.compare_bool(true, pix.get_rgb(4, 4) == Some(Color::BLACK));
    rp.write_pix(&pix).expect("write square");

    let mut overlay = Pix::new_rgb(8, 8).expect("create pix");
    poly.render(&mut overlay, Color::RED).expect("render polygon");
    rp.compare_bool(true, overlay.get_rgb(2, 6) == Some(Color::RED));
    rp.write_pix(&overlay).expect("write polygon");

    // --- Test 5: Format checks leave the image untouched ---
    eprintln!("=== Format checks ===");
    let mut gray = Pix::new(8, 8, 1, PixelDepth::Bit8).expect("create gray");
    let before = gray.clone();
    let err = square.render_default(&mut gray).unwrap_err();
    rp.compare_bool(
        true,
        matches!(err, RegionError::Core(Error::UnsupportedFormat { .. })),
    );
    rp.compare_bool(true, gray == before);

    let mut deep = Pix::new(8, 8, 3, PixelDepth::Bit16).expect("create 16-bit");
    let before = deep.clone();
    let err = square.render_default(&mut deep).unwrap_err();
    rp.compare_bool(
        true,
        matches!(err, RegionError::Core(Error::UnsupportedFormat { .. })),
    );
    rp.compare_bool(true, deep == before);

    let mut small = Pix::new_rgb(4, 4).expect("create pix");
    let before = small.clone();
    rp.compare_bool(true, square.render_default(&mut small).is_err());
    rp.compare_bool(true, small == before);

    // --- Test 6: Points round trip ---
    eprintln!("=== Points round trip ===");
    let walked: Vec<Point> = square.walk().collect();
    rp.compare_values(17.0, walked.len() as f64, 0.0);
    let rebuilt = ChainCodeContour::from_points(&walked).expect("rebuild contour");
    rp.compare_bool(true, rebuilt == square);
    rp.compare_bool(
        true,
        ChainCodeContour::from_points(&[Point::new(0, 0), Point::new(2, 0)]).is_err(),
    );

    // --- Test 7: Polygon simplification and hull ---
    eprintln!("=== Polygon simplification and hull ===");
    let jagged = Polygon::from_points(vec![
        Point::new(0, 0),
        Point::new(3, 1),
        Point::new(6, 0),
        Point::new(6, 6),
        Point::new(3, 3),
        Point::new(0, 6),
    ]);
    let simple = jagged.simplify(1.5).expect("simplify");
    rp.compare_values(5.0, simple.len() as f64, 0.0);
    let hull = jagged.convex_hull();
    rp.compare_values(4.0, hull.len() as f64, 0.0);
    rp.compare_values(36.0, hull.area(), 0.0);
    eprintln!("  simplified: {:?}", simple.points());
    eprintln!("  hull: {:?}", hull.points());

    assert!(rp.cleanup(), "chaincode regression test failed");
}
