use dropcontour_core::droplet::ellipses_analysis;
use dropcontour_core::ellipse::EllipseFit;

fn ellipse_with_axes(major: f64, minor: f64, center_x: f64) -> EllipseFit {
    EllipseFit {
        center_x,
        center_y: 0.0,
        major_axis: major,
        minor_axis: minor,
        angle: 0.0,
    }
}

#[test]
fn test_sorted_by_axis_product_descending() {
    let fits = [
        ellipse_with_axes(5.0, 2.0, 1.0),
        ellipse_with_axes(10.0, 5.0, 2.0),
        ellipse_with_axes(6.0, 5.0, 3.0),
    ];
    let summary = ellipses_analysis(&fits);

    assert_eq!(summary.count, 3);
    let keys: Vec<f64> = summary.sorted.iter().map(|e| e.ranking_key()).collect();
    assert_eq!(keys, vec![50.0, 30.0, 10.0]);
    let centers: Vec<f64> = summary.properties.iter().map(|p| p.0).collect();
    assert_eq!(centers, vec![2.0, 3.0, 1.0]);
}

#[test]
fn test_equal_keys_keep_input_order() {
    let fits = [
        ellipse_with_axes(4.0, 4.0, 1.0),
        ellipse_with_axes(8.0, 2.0, 2.0),
        ellipse_with_axes(16.0, 1.0, 3.0),
    ];
    let summary = ellipses_analysis(&fits);
    let centers: Vec<f64> = summary.sorted.iter().map(|e| e.center_x).collect();
    assert_eq!(centers, vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_empty_input_returns_sentinel() {
    let summary = ellipses_analysis(&[]);
    assert_eq!(summary.count, 0);
    assert_eq!(summary.properties, vec![(0.0, 0.0, 0.0, 0.0, 0.0)]);
    assert!(summary.sorted.is_empty());
}

#[test]
fn test_properties_follow_tuple_layout() {
    let fit = EllipseFit {
        center_x: 1.0,
        center_y: 2.0,
        major_axis: 3.0,
        minor_axis: 4.0,
        angle: 5.0,
    };
    let summary = ellipses_analysis(&[fit]);
    assert_eq!(summary.properties, vec![(1.0, 2.0, 3.0, 4.0, 5.0)]);
}
