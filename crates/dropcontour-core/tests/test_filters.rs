use ndarray::Array2;

use dropcontour_core::detection::{
    binarize, detect_droplet_boundary, dilate, distance_transform, normalize_to_levels,
};
use dropcontour_core::filters::clahe::clahe_levels;
use dropcontour_core::filters::{enhance_contrast, gaussian_blur, high_pass_filter};
use dropcontour_core::frame::Frame;

// ---------------------------------------------------------------------------
// enhance_contrast
// ---------------------------------------------------------------------------

#[test]
fn test_clahe_stretches_narrow_histogram() {
    // Levels 100..=110 only; equalization spreads them apart.
    let levels = Array2::from_shape_fn((64, 64), |(_, c)| 100 + (c / 6) as u8);
    let out = clahe_levels(&levels, 2.0, (1, 1));
    let spread_out = out[[0, 63]] as i32 - out[[0, 0]] as i32;
    assert!(spread_out > 20, "spread {spread_out}");
}

#[test]
fn test_clahe_keeps_order_of_levels() {
    let levels = Array2::from_shape_fn((32, 32), |(r, c)| ((r * 32 + c) / 4) as u8);
    let out = clahe_levels(&levels, 2.0, (1, 1));
    let flat = out.as_slice().unwrap();
    assert!(flat.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_clahe_ignores_grid_cells_past_the_image() {
    // 18 px over 8 tiles gives 3 px tiles, so only 6 tiles cover the image.
    let levels = Array2::from_elem((18, 18), 100u8);
    let out = clahe_levels(&levels, 2.0, (8, 8));
    let first = out[[0, 0]];
    assert_ne!(first, 100);
    assert!(out.iter().all(|&v| v == first), "edge pixels differ: {:?}", out.row(17));
}

#[test]
fn test_enhance_contrast_preserves_shape() {
    let frame = Frame::new(Array2::from_elem((17, 23), 0.3), 8);
    let out = enhance_contrast(&frame, 2.0, (8, 8));
    assert_eq!(out.data.dim(), (17, 23));
}

// ---------------------------------------------------------------------------
// Blur, edges, high-pass
// ---------------------------------------------------------------------------

#[test]
fn test_gaussian_blur_smooths_a_step() {
    let data = Array2::from_shape_fn((10, 10), |(_, c)| if c < 5 { 0.0 } else { 1.0 });
    let out = gaussian_blur(&Frame::new(data, 8), 5, 1.1);
    assert!(out.data[[5, 4]] > 0.0 && out.data[[5, 4]] < 0.5);
    assert!(out.data[[5, 5]] > 0.5 && out.data[[5, 5]] < 1.0);
}

#[test]
fn test_edges_follow_a_bright_square() {
    let data = Array2::from_shape_fn((40, 40), |(r, c)| {
        if (10..30).contains(&r) && (10..30).contains(&c) {
            1.0
        } else {
            0.0
        }
    });
    let edges = detect_droplet_boundary(&Frame::new(data, 8));
    assert!(edges.iter().any(|&v| v));
    assert!(!edges[[20, 20]]);
    assert!(!edges[[2, 2]]);
}

#[test]
fn test_high_pass_output_is_normalized() {
    let data = Array2::from_shape_fn((32, 32), |(r, c)| ((r + c) % 7) as f32 / 7.0);
    let out = high_pass_filter(&Frame::new(data, 8), 3);
    let max = out.data.iter().cloned().fold(f32::MIN, f32::max);
    let min = out.data.iter().cloned().fold(f32::MAX, f32::min);
    assert!((max - 1.0).abs() < 1e-6);
    assert!(min.abs() < 1e-6);
}

// ---------------------------------------------------------------------------
// Threshold, distance, dilation
// ---------------------------------------------------------------------------

#[test]
fn test_binarize_uses_strict_threshold() {
    let levels = Array2::from_shape_vec((1, 4), vec![0u8, 50, 51, 255]).unwrap();
    let mask = binarize(&Frame::from_levels(&levels), 50);
    assert_eq!(mask.as_slice().unwrap(), &[false, false, true, true]);
}

#[test]
fn test_distance_peaks_at_disc_center() {
    let mask = Array2::from_shape_fn((41, 41), |(r, c)| {
        let dr = r as f64 - 20.0;
        let dc = c as f64 - 20.0;
        dr * dr + dc * dc <= 225.0
    });
    let distance = distance_transform(&mask);
    let levels = normalize_to_levels(&distance);
    assert_eq!(levels[[20, 20]], 255);
    assert_eq!(levels[[0, 0]], 0);
    assert!(distance[[20, 20]] > 15.0 && distance[[20, 20]] < 17.0);
}

#[test]
fn test_dilate_grows_by_half_kernel() {
    let mut mask = Array2::from_elem((30, 30), false);
    for r in 10..20 {
        for c in 10..20 {
            mask[[r, c]] = true;
        }
    }
    let grown = dilate(&mask, 9);
    assert!(grown[[6, 6]] && grown[[23, 23]]);
    assert!(!grown[[5, 15]] && !grown[[24, 15]]);
}
