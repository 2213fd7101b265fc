use ndarray::Array2;

/// Binary dilation with a `kernel_size × kernel_size` square of ones,
/// anchored at its center: a pixel becomes true if ANY pixel in its
/// neighborhood is true. Out-of-bounds neighbors are ignored.
///
/// The square kernel is separable, so rows and columns are dilated in turn.
pub fn dilate(mask: &Array2<bool>, kernel_size: usize) -> Array2<bool> {
    if kernel_size <= 1 {
        return mask.clone();
    }
    let before = (kernel_size - 1) / 2;
    let after = kernel_size - 1 - before;

    let rows = dilate_1d(mask, before, after, true);
    dilate_1d(&rows, before, after, false)
}

fn dilate_1d(mask: &Array2<bool>, before: usize, after: usize, along_rows: bool) -> Array2<bool> {
    let (h, w) = mask.dim();
    let mut result = Array2::from_elem((h, w), false);

    for row in 0..h {
        for col in 0..w {
            let (pos, len) = if along_rows { (col, w) } else { (row, h) };
            // The output at `pos` sees inputs from pos − after ..= pos + before
            // (the kernel is reflected around its anchor).
            let lo = pos.saturating_sub(after);
            let hi = (pos + before).min(len - 1);
            result[[row, col]] = (lo..=hi).any(|i| {
                if along_rows {
                    mask[[row, i]]
                } else {
                    mask[[i, col]]
                }
            });
        }
    }

    result
}
