mod common;

use approx::assert_abs_diff_eq;
use ndarray::Array2;

use dropcontour_core::contour::analysis::{
    check_gradient, contour_intersect, find_darkest_point, split_contour_at_point,
};
use dropcontour_core::contour::{
    contour_child_finder, find_contours, get_centroid, BorderKind, ChainApproximation, Contour,
    Point, RetrievalMode,
};
use dropcontour_core::frame::Frame;

use common::bar_mask;

/// Square band between an outer square and a hollow of the given margin.
fn square_band(shape: (usize, usize), outer: (usize, usize), margin: usize) -> Array2<bool> {
    let (lo, hi) = outer;
    Array2::from_shape_fn(shape, |(r, c)| {
        let in_outer = (lo..hi).contains(&r) && (lo..hi).contains(&c);
        let in_inner = (lo + margin..hi - margin).contains(&r) && (lo + margin..hi - margin).contains(&c);
        in_outer && !in_inner
    })
}

// ---------------------------------------------------------------------------
// get_centroid
// ---------------------------------------------------------------------------

#[test]
fn test_centroid_of_single_point_is_that_point() {
    let contour = Contour::from_xy(&[(7, 3)]);
    assert_eq!(get_centroid(&contour), Some(Point::new(7, 3)));
}

#[test]
fn test_centroid_of_collinear_points_falls_back_to_first() {
    let contour = Contour::from_xy(&[(2, 2), (4, 2), (8, 2)]);
    assert_eq!(get_centroid(&contour), Some(Point::new(2, 2)));
}

#[test]
fn test_centroid_truncates_toward_zero() {
    // Rectangle centered at (2.5, 1.5).
    let contour = Contour::from_xy(&[(0, 0), (5, 0), (5, 3), (0, 3)]);
    assert_eq!(get_centroid(&contour), Some(Point::new(2, 1)));
}

#[test]
fn test_centroid_of_empty_contour() {
    assert_eq!(get_centroid(&Contour::from_xy(&[])), None);
}

// ---------------------------------------------------------------------------
// find_contours + contour_child_finder
// ---------------------------------------------------------------------------

#[test]
fn test_band_has_outer_border_with_one_hole_child() {
    let mask = square_band((30, 30), (5, 25), 4);
    let set = find_contours(&mask, RetrievalMode::Tree, ChainApproximation::Simple);

    assert_eq!(set.len(), 2);
    let outer = set
        .contours
        .iter()
        .position(|c| c.kind() == BorderKind::Outer)
        .unwrap();
    let (count, children) = contour_child_finder(outer, &set.hierarchy);
    assert_eq!(count, 1);
    assert_eq!(set.contours[children[0]].kind(), BorderKind::Hole);
}

#[test]
fn test_simple_approximation_keeps_rectangle_corners() {
    let mask = bar_mask((20, 20), 5..10, 3..15);
    let set = find_contours(&mask, RetrievalMode::Tree, ChainApproximation::Simple);
    assert_eq!(set.len(), 1);

    let mut pts = set.contours[0].points().to_vec();
    pts.sort_by_key(|p| (p.y, p.x));
    assert_eq!(
        pts,
        vec![
            Point::new(3, 5),
            Point::new(14, 5),
            Point::new(3, 9),
            Point::new(14, 9)
        ]
    );
    assert_abs_diff_eq!(set.contours[0].area(), 11.0 * 4.0);
}

#[test]
fn test_external_mode_drops_nested_contours() {
    let mut mask = square_band((40, 40), (2, 38), 4);
    let inner = bar_mask((40, 40), 15..25, 15..25);
    mask.zip_mut_with(&inner, |a, &b| *a |= b);

    let tree = find_contours(&mask, RetrievalMode::Tree, ChainApproximation::Simple);
    assert_eq!(tree.len(), 3);

    let external = find_contours(&mask, RetrievalMode::External, ChainApproximation::Simple);
    assert_eq!(external.len(), 1);
    assert_eq!(external.hierarchy.len(), 1);
    assert_eq!(contour_child_finder(0, &external.hierarchy).0, 0);
}

#[test]
fn test_child_finder_counts_two_holes() {
    let mut mask = bar_mask((30, 50), 5..25, 5..45);
    for ((r, c), v) in mask.indexed_iter_mut() {
        if (10..20).contains(&r) && ((10..20).contains(&c) || (30..40).contains(&c)) {
            *v = false;
        }
    }
    let set = find_contours(&mask, RetrievalMode::Tree, ChainApproximation::Simple);
    let outer = set
        .contours
        .iter()
        .position(|c| c.kind() == BorderKind::Outer)
        .unwrap();
    let (count, children) = contour_child_finder(outer, &set.hierarchy);
    assert_eq!(count, 2);
    assert_eq!(children.len(), 2);
}

// ---------------------------------------------------------------------------
// Contour utilities
// ---------------------------------------------------------------------------

#[test]
fn test_contour_intersect_edges_and_interior() {
    let reference = Contour::from_xy(&[(0, 0), (10, 0), (10, 10), (0, 10)]);
    let on_edge = Contour::from_xy(&[(10, 5), (20, 5)]);
    let inside = Contour::from_xy(&[(5, 5), (6, 6)]);
    let outside = Contour::from_xy(&[(15, 15), (20, 20)]);

    assert!(contour_intersect(&reference, &on_edge, true));
    assert!(!contour_intersect(&reference, &inside, true));
    assert!(contour_intersect(&reference, &inside, false));
    assert!(!contour_intersect(&reference, &outside, false));
}

#[test]
fn test_find_darkest_point_on_line() {
    let mut data = Array2::from_elem((10, 10), 1.0f32);
    data[[4, 6]] = 0.2;
    data[[4, 3]] = 0.5;
    let frame = Frame::new(data, 8);

    let darkest = find_darkest_point(&frame, Point::new(0, 4), Point::new(9, 4));
    assert_eq!(darkest, Some(Point::new(6, 4)));
}

#[test]
fn test_find_darkest_point_on_white_line() {
    let frame = Frame::new(Array2::from_elem((10, 10), 1.0f32), 8);
    assert_eq!(find_darkest_point(&frame, Point::new(0, 0), Point::new(9, 9)), None);
}

#[test]
fn test_split_contour_at_nearest_point() {
    let contour = Contour::from_xy(&[(0, 0), (5, 0), (10, 0), (10, 5), (10, 10)]);
    let (head, tail) = split_contour_at_point(&contour, Point::new(11, 4));
    assert_eq!(head.len(), 3);
    assert_eq!(tail.points()[0], Point::new(10, 5));
    assert_eq!(tail.len(), 2);
}

#[test]
fn test_check_gradient_dark_border() {
    let data = Array2::from_shape_fn((20, 20), |(r, c)| {
        if (5..15).contains(&r) && (5..15).contains(&c) {
            1.0f32
        } else {
            0.0
        }
    });
    let frame = Frame::new(data, 8);
    let around = Contour::from_xy(&[(3, 3), (16, 3), (16, 16), (3, 16)]);
    let within = Contour::from_xy(&[(6, 6), (13, 6), (13, 13), (6, 13)]);

    assert!(check_gradient(&frame, &around));
    assert!(!check_gradient(&frame, &within));
}
