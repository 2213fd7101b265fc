use ndarray::{s, Array2};

use crate::consts::{LEVEL_COUNT, MAX_LEVEL};
use crate::frame::Frame;

/// Contrast-limited adaptive histogram equalization on 8-bit levels.
///
/// The frame is split into `tile_grid = (columns, rows)` tiles. Each tile
/// gets an equalization curve from its histogram clipped at
/// `clip_limit × (tile pixels / 256)` with the excess spread evenly over all
/// bins. Pixels are mapped by bilinear interpolation between the curves of
/// the four nearest tile centers.
pub fn enhance_contrast(frame: &Frame, clip_limit: f32, tile_grid: (usize, usize)) -> Frame {
    let levels = frame.to_levels();
    Frame::from_levels(&clahe_levels(&levels, clip_limit, tile_grid))
}

/// CLAHE on an 8-bit level array. See [`enhance_contrast`].
pub fn clahe_levels(levels: &Array2<u8>, clip_limit: f32, tile_grid: (usize, usize)) -> Array2<u8> {
    let (h, w) = levels.dim();
    if h == 0 || w == 0 {
        return levels.clone();
    }

    let tile_w = w.div_ceil(tile_grid.0.clamp(1, w));
    let tile_h = h.div_ceil(tile_grid.1.clamp(1, h));
    // Rounding the tile size up can leave trailing grid cells empty; keep
    // only the tiles that cover pixels.
    let tiles_x = w.div_ceil(tile_w);
    let tiles_y = h.div_ceil(tile_h);

    // Equalization curve per tile, row-major over the tile grid.
    let mut luts = vec![[0u8; LEVEL_COUNT]; tiles_x * tiles_y];
    for ty in 0..tiles_y {
        for tx in 0..tiles_x {
            let (r0, r1) = (ty * tile_h, ((ty + 1) * tile_h).min(h));
            let (c0, c1) = (tx * tile_w, ((tx + 1) * tile_w).min(w));
            let tile = levels.slice(s![r0..r1, c0..c1]);
            let mut hist = [0u32; LEVEL_COUNT];
            for &v in tile.iter() {
                hist[v as usize] += 1;
            }
            luts[ty * tiles_x + tx] = tile_lut(&mut hist, tile.len(), clip_limit);
        }
    }

    let mut out = Array2::<u8>::zeros((h, w));
    let inv_tw = 1.0 / tile_w as f32;
    let inv_th = 1.0 / tile_h as f32;

    for row in 0..h {
        let tyf = row as f32 * inv_th - 0.5;
        let ty1 = tyf.floor();
        let ya = tyf - ty1;
        let ty1 = ty1 as isize;
        let ty2 = (ty1 + 1).min(tiles_y as isize - 1) as usize;
        let ty1 = ty1.max(0) as usize;

        for col in 0..w {
            let txf = col as f32 * inv_tw - 0.5;
            let tx1 = txf.floor();
            let xa = txf - tx1;
            let tx1 = tx1 as isize;
            let tx2 = (tx1 + 1).min(tiles_x as isize - 1) as usize;
            let tx1 = tx1.max(0) as usize;

            let v = levels[[row, col]] as usize;
            let lut = |ty: usize, tx: usize| luts[ty * tiles_x + tx][v] as f32;

            let top = lut(ty1, tx1) * (1.0 - xa) + lut(ty1, tx2) * xa;
            let bottom = lut(ty2, tx1) * (1.0 - xa) + lut(ty2, tx2) * xa;
            let value = top * (1.0 - ya) + bottom * ya;
            out[[row, col]] = value.round().clamp(0.0, MAX_LEVEL as f32) as u8;
        }
    }

    out
}

/// Clip a tile histogram, redistribute the excess, and integrate it into a
/// level mapping.
fn tile_lut(hist: &mut [u32; LEVEL_COUNT], tile_pixels: usize, clip_limit: f32) -> [u8; LEVEL_COUNT] {
    if clip_limit > 0.0 {
        let limit = ((clip_limit * tile_pixels as f32 / LEVEL_COUNT as f32) as u32).max(1);

        let mut excess = 0u32;
        for bin in hist.iter_mut() {
            if *bin > limit {
                excess += *bin - limit;
                *bin = limit;
            }
        }

        let batch = excess / LEVEL_COUNT as u32;
        let residual = excess as usize - batch as usize * LEVEL_COUNT;
        for bin in hist.iter_mut() {
            *bin += batch;
        }
        if residual > 0 {
            let step = (LEVEL_COUNT / residual).max(1);
            for bin in hist.iter_mut().step_by(step).take(residual) {
                *bin += 1;
            }
        }
    }

    let scale = MAX_LEVEL as f32 / tile_pixels as f32;
    let mut lut = [0u8; LEVEL_COUNT];
    let mut sum = 0u32;
    for (i, &count) in hist.iter().enumerate() {
        sum += count;
        lut[i] = (sum as f32 * scale).round().clamp(0.0, MAX_LEVEL as f32) as u8;
    }
    lut
}
