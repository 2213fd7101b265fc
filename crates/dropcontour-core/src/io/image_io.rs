use std::path::{Path, PathBuf};

use image::{GrayImage, ImageFormat, Luma, RgbImage};
use ndarray::Array2;
use tracing::info;

use crate::error::{DropletError, Result};
use crate::frame::{to_level, ColorFrame, Frame};

/// Save a frame as 8-bit grayscale PNG.
pub fn save_png(frame: &Frame, path: &Path) -> Result<()> {
    let img = frame_to_gray_image(frame);
    img.save_with_format(path, ImageFormat::Png)?;
    info!(path = %path.display(), "Grayscale image saved");
    Ok(())
}

/// Save a binary mask as an 8-bit PNG (true = 255).
pub fn save_mask_png(mask: &Array2<bool>, path: &Path) -> Result<()> {
    save_png(&Frame::from_mask(mask), path)
}

/// Save an RGB image, choosing format from file extension.
pub fn save_rgb(img: &RgbImage, path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("jpg" | "jpeg") => img.save_with_format(path, ImageFormat::Jpeg)?,
        _ => img.save_with_format(path, ImageFormat::Png)?,
    }
    info!(path = %path.display(), "Overlay image saved");
    Ok(())
}

/// Convert a frame to an 8-bit `GrayImage`.
pub fn frame_to_gray_image(frame: &Frame) -> GrayImage {
    let h = frame.height();
    let w = frame.width();

    let mut img = GrayImage::new(w as u32, h as u32);
    for row in 0..h {
        for col in 0..w {
            img.put_pixel(col as u32, row as u32, Luma([to_level(frame.data[[row, col]])]));
        }
    }
    img
}

/// Convert a binary mask to an 8-bit `GrayImage` (true = 255, false = 0).
pub fn mask_to_gray_image(mask: &Array2<bool>) -> GrayImage {
    let (h, w) = mask.dim();
    let mut img = GrayImage::new(w as u32, h as u32);
    for row in 0..h {
        for col in 0..w {
            if mask[[row, col]] {
                img.put_pixel(col as u32, row as u32, Luma([255]));
            }
        }
    }
    img
}

/// Convert a `GrayImage` back to a binary mask (non-zero = true).
pub fn gray_image_to_mask(img: &GrayImage) -> Array2<bool> {
    let (w, h) = img.dimensions();
    let mut mask = Array2::from_elem((h as usize, w as usize), false);
    for (x, y, pixel) in img.enumerate_pixels() {
        mask[[y as usize, x as usize]] = pixel.0[0] != 0;
    }
    mask
}

/// Replicate a gray frame into an RGB canvas for drawing overlays.
pub fn frame_to_rgb_image(frame: &Frame) -> RgbImage {
    let h = frame.height();
    let w = frame.width();
    let mut img = RgbImage::new(w as u32, h as u32);
    for row in 0..h {
        for col in 0..w {
            let v = to_level(frame.data[[row, col]]);
            img.put_pixel(col as u32, row as u32, image::Rgb([v, v, v]));
        }
    }
    img
}

/// Load a color image file into separate channel frames.
pub fn load_color_image(path: &Path) -> Result<ColorFrame> {
    let img = image::open(path)?;
    let rgb = img.to_rgb16();
    let (w, h) = rgb.dimensions();
    if w == 0 || h == 0 {
        return Err(DropletError::EmptyImage);
    }
    let mut red = Array2::<f32>::zeros((h as usize, w as usize));
    let mut green = Array2::<f32>::zeros((h as usize, w as usize));
    let mut blue = Array2::<f32>::zeros((h as usize, w as usize));

    for (x, y, pixel) in rgb.enumerate_pixels() {
        let (row, col) = (y as usize, x as usize);
        red[[row, col]] = pixel.0[0] as f32 / 65535.0;
        green[[row, col]] = pixel.0[1] as f32 / 65535.0;
        blue[[row, col]] = pixel.0[2] as f32 / 65535.0;
    }

    Ok(ColorFrame {
        red: Frame::new(red, 16),
        green: Frame::new(green, 16),
        blue: Frame::new(blue, 16),
    })
}

/// Load an image file as a grayscale frame (BT.601 luminance for color input).
pub fn load_image(path: &Path) -> Result<Frame> {
    Ok(load_color_image(path)?.luminance())
}

/// Derive an output path by appending `suffix` to the full input path string,
/// e.g. `drop.png` + `_contrast.png` → `drop.png_contrast.png`.
pub fn derived_path(source: &Path, suffix: &str) -> PathBuf {
    let mut s = source.as_os_str().to_os_string();
    s.push(suffix);
    PathBuf::from(s)
}
