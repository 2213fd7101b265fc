use image::{Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;

use crate::contour::{Contour, Point};
use crate::ellipse::EllipseFit;
use crate::frame::Frame;
use crate::io::image_io::frame_to_rgb_image;

/// Outline colors, cycled per contour: green, blue, red, cyan, yellow, magenta.
pub const CONTOUR_PALETTE: [Rgb<u8>; 6] = [
    Rgb([0, 255, 0]),
    Rgb([0, 0, 255]),
    Rgb([255, 0, 0]),
    Rgb([0, 255, 255]),
    Rgb([255, 255, 0]),
    Rgb([255, 0, 255]),
];

const ELLIPSE_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
const ELLIPSE_SEGMENTS: usize = 180;

/// Draw every contour as a closed 2-px outline, each in the next palette color.
pub fn draw_contours_with_different_colors(frame: &Frame, contours: &[Contour]) -> RgbImage {
    let mut canvas = frame_to_rgb_image(frame);
    for (i, contour) in contours.iter().enumerate() {
        let color = CONTOUR_PALETTE[i % CONTOUR_PALETTE.len()];
        let pts: Vec<(f32, f32)> = contour
            .points()
            .iter()
            .map(|&Point { x, y }| (x as f32, y as f32))
            .collect();
        draw_closed_polyline(&mut canvas, &pts, color);
    }
    canvas
}

/// Draw fitted ellipses as 2-px outlines.
pub fn draw_ellipses(frame: &Frame, ellipses: &[EllipseFit]) -> RgbImage {
    let mut canvas = frame_to_rgb_image(frame);
    for ellipse in ellipses {
        let pts: Vec<(f32, f32)> = ellipse
            .sample_points(ELLIPSE_SEGMENTS)
            .into_iter()
            .map(|[x, y]| (x as f32, y as f32))
            .collect();
        draw_closed_polyline(&mut canvas, &pts, ELLIPSE_COLOR);
    }
    canvas
}

fn draw_closed_polyline(canvas: &mut RgbImage, pts: &[(f32, f32)], color: Rgb<u8>) {
    match pts.len() {
        0 => {}
        1 => {
            let (x, y) = pts[0];
            if x >= 0.0 && y >= 0.0 && (x as u32) < canvas.width() && (y as u32) < canvas.height() {
                canvas.put_pixel(x as u32, y as u32, color);
            }
        }
        n => {
            for i in 0..n {
                let start = pts[i];
                let end = pts[(i + 1) % n];
                // Second stroke one pixel down-right for a 2-px line.
                draw_line_segment_mut(canvas, start, end, color);
                draw_line_segment_mut(
                    canvas,
                    (start.0 + 1.0, start.1 + 1.0),
                    (end.0 + 1.0, end.1 + 1.0),
                    color,
                );
            }
        }
    }
}
