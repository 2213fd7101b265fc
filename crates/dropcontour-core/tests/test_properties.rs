mod common;

use std::f64::consts::PI;

use approx::assert_abs_diff_eq;
use ndarray::Array2;

use dropcontour_core::contour::Contour;
use dropcontour_core::droplet::{
    measure_droplet_properties, split_contour, DropletPropertiesConfig, SplitConfig,
};

use common::{angle_difference, ellipse_ring_mask, paint_disc_with_hole};

// ---------------------------------------------------------------------------
// measure_droplet_properties
// ---------------------------------------------------------------------------

#[test]
fn test_single_outline_yields_one_ellipse() {
    let mask = ellipse_ring_mask((160, 200), (100.0, 80.0), 90.0, 54.0, 30.0, 3.0);
    let result = measure_droplet_properties(&mask, &DropletPropertiesConfig::default());

    assert_eq!(result.fit_attempts, 1);
    assert_eq!(result.ellipses.len(), 1);

    let e = result.ellipses[0];
    assert_abs_diff_eq!(e.center_x, 100.0, epsilon = 1.5);
    assert_abs_diff_eq!(e.center_y, 80.0, epsilon = 1.5);
    assert_abs_diff_eq!(e.major_axis, 90.0, epsilon = 3.0);
    assert_abs_diff_eq!(e.minor_axis, 54.0, epsilon = 3.0);
    assert!(angle_difference(e.angle, 30.0) < 3.0, "angle {}", e.angle);
}

#[test]
fn test_touching_discs_are_split_into_two_fits() {
    let radius = 30.0;
    let mut mask = Array2::from_elem((100, 140), false);
    paint_disc_with_hole(&mut mask, (40.0, 50.0), radius, 8.0);
    paint_disc_with_hole(&mut mask, (100.0, 50.0), radius, 8.0);

    let result = measure_droplet_properties(&mask, &DropletPropertiesConfig::default());

    assert_eq!(result.fit_attempts, 2);
    assert_eq!(result.ellipses.len(), 2);

    let disc_area = PI * radius * radius;
    for e in &result.ellipses {
        let ratio = e.area() / disc_area;
        assert!((ratio - 1.0).abs() < 0.2, "area ratio {ratio}");
    }

    let mut centers: Vec<f64> = result.ellipses.iter().map(|e| e.center_x).collect();
    centers.sort_by(f64::total_cmp);
    assert_abs_diff_eq!(centers[0], 40.0, epsilon = 2.0);
    assert_abs_diff_eq!(centers[1], 100.0, epsilon = 2.0);
}

#[test]
fn test_separate_outlines_each_fitted() {
    let mut mask = ellipse_ring_mask((120, 240), (60.0, 60.0), 70.0, 50.0, 0.0, 3.0);
    let right = ellipse_ring_mask((120, 240), (170.0, 60.0), 60.0, 60.0, 0.0, 3.0);
    mask.zip_mut_with(&right, |a, &b| *a |= b);

    let result = measure_droplet_properties(&mask, &DropletPropertiesConfig::default());
    assert_eq!(result.fit_attempts, 2);
    assert_eq!(result.ellipses.len(), 2);
    assert_eq!(result.contours.map(|set| set.len()), Some(4));
}

#[test]
fn test_blank_mask_has_nothing_to_fit() {
    let mask = Array2::from_elem((40, 40), false);
    let result = measure_droplet_properties(&mask, &DropletPropertiesConfig::default());
    assert!(result.contours.is_none());
    assert!(result.ellipses.is_empty());
    assert_eq!(result.fit_attempts, 0);
}

#[test]
fn test_tight_tolerance_rejects_everything() {
    let mask = ellipse_ring_mask((160, 200), (100.0, 80.0), 90.0, 54.0, 30.0, 3.0);
    let config = DropletPropertiesConfig {
        ratio_tolerance: 0.0,
        ..Default::default()
    };
    let result = measure_droplet_properties(&mask, &config);
    assert_eq!(result.fit_attempts, 1);
    assert!(result.ellipses.is_empty());
}

// ---------------------------------------------------------------------------
// split_contour
// ---------------------------------------------------------------------------

#[test]
fn test_split_separates_two_squares_joined_by_a_bridge() {
    // Two 30x30 squares joined by a 2-px wide bridge, traced as one outline.
    let outline = Contour::from_xy(&[
        (10, 10),
        (39, 10),
        (39, 24),
        (50, 24),
        (50, 10),
        (79, 10),
        (79, 39),
        (50, 39),
        (50, 25),
        (39, 25),
        (39, 39),
        (10, 39),
    ]);
    let parts = split_contour((50, 90), &outline, &SplitConfig::default());
    assert_eq!(parts.len(), 2);
}

#[test]
fn test_split_of_degenerate_contour_is_empty_or_single() {
    let line = Contour::from_xy(&[(5, 5), (5, 20)]);
    let parts = split_contour((30, 30), &line, &SplitConfig::default());
    assert!(parts.len() <= 1);
}
