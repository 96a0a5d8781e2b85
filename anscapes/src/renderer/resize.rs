// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Nearest neighbour resize of row-major pixels from `src_width` x `src_height` into
/// `dst`, which is `dst_width` x `dst_height`.
///
/// Uses 16.16 fixed point steps. The step is rounded up by one unit, which keeps the
/// last destination pixel from landing just short of the last source pixel. Source
/// coordinates are clamped to the last row and column, so the step never reads out of
/// bounds.
///
/// `src` must hold `src_width * src_height` pixels and `dst` must hold
/// `dst_width * dst_height`. Any dimension of zero is a no-op.
pub fn resize_nearest(
    src: &[u32],
    src_width: usize,
    src_height: usize,
    dst: &mut [u32],
    dst_width: usize,
    dst_height: usize,
) {
    if src_width == 0 || src_height == 0 || dst_width == 0 || dst_height == 0 {
        return;
    }
    debug_assert_eq!(src.len(), src_width * src_height);
    debug_assert_eq!(dst.len(), dst_width * dst_height);

    let x_ratio = (src_width << 16) / dst_width + 1;
    let y_ratio = (src_height << 16) / dst_height + 1;

    for (y, dst_row) in dst.chunks_exact_mut(dst_width).enumerate().take(dst_height) {
        let src_y = ((y * y_ratio) >> 16).min(src_height - 1);
        let src_row = &src[src_y * src_width..(src_y + 1) * src_width];
        for (x, dst_pixel) in dst_row.iter_mut().enumerate() {
            let src_x = ((x * x_ratio) >> 16).min(src_width - 1);
            *dst_pixel = src_row[src_x];
        }
    }
}
