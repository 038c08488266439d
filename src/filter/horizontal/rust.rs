use std::num::NonZeroUsize;

use crate::{
    filter::{FILTER_BIAS_1D, FILTER_SHIFT_1D, FILTER_SUPPORT, tap_filter},
    params::block_width,
    util::clip_u8,
};

/// Rows handled per transposed tile.
const TILE_ROWS: usize = 4;
/// Output columns handled per transposed tile.
const TILE_COLS: usize = 4;
const TILE_WIDTH: NonZeroUsize = block_width::<TILE_COLS>();

pub(super) fn filter_h(
    dest: &mut [u8],
    dest_pitch: NonZeroUsize,
    src: &[u8],
    src_pitch: NonZeroUsize,
    width: NonZeroUsize,
    height: NonZeroUsize,
) {
    if width.get() == TILE_COLS {
        filter_h_w4_transposed(dest, dest_pitch, src, src_pitch, height);
    } else {
        filter_h_direct(dest, dest_pitch, src, src_pitch, width, height);
    }
}

pub(super) fn filter_h_direct(
    dest: &mut [u8],
    dest_pitch: NonZeroUsize,
    src: &[u8],
    src_pitch: NonZeroUsize,
    width: NonZeroUsize,
    height: NonZeroUsize,
) {
    let width = width.get();

    for y in 0..height.get() {
        let src_row = &src[y * src_pitch.get()..][..width + FILTER_SUPPORT];
        let dest_row = &mut dest[y * dest_pitch.get()..][..width];
        for (x, out) in dest_row.iter_mut().enumerate() {
            *out = clip_u8((tap_filter(&src_row[x..], 1) + FILTER_BIAS_1D) >> FILTER_SHIFT_1D);
        }
    }
}

/// 4-wide horizontal filter working on transposed 4x4 tiles.
///
/// Each group of four rows is transposed into a column-major scratch, so the
/// horizontal taps become a walk down the scratch, then the results are
/// transposed back. Rows after the last full group use the direct path.
pub(super) fn filter_h_w4_transposed(
    dest: &mut [u8],
    dest_pitch: NonZeroUsize,
    src: &[u8],
    src_pitch: NonZeroUsize,
    height: NonZeroUsize,
) {
    let src_pitch_usize = src_pitch.get();
    let dest_pitch_usize = dest_pitch.get();
    let groups = height.get() / TILE_ROWS;

    for g in 0..groups {
        let row0 = g * TILE_ROWS;

        // cols[c][r] = src[row0 + r][c], for the 4 + 5 columns the taps touch
        let mut cols = [[0i16; TILE_ROWS]; TILE_COLS + FILTER_SUPPORT];
        for r in 0..TILE_ROWS {
            let src_row = &src[(row0 + r) * src_pitch_usize..][..TILE_COLS + FILTER_SUPPORT];
            for (c, &s) in src_row.iter().enumerate() {
                cols[c][r] = i16::from(s);
            }
        }

        let mut out = [[0u8; TILE_ROWS]; TILE_COLS];
        for (i, out_col) in out.iter_mut().enumerate() {
            for r in 0..TILE_ROWS {
                let sum = i32::from(cols[i][r]) - 5 * i32::from(cols[i + 1][r])
                    + 20 * (i32::from(cols[i + 2][r]) + i32::from(cols[i + 3][r]))
                    - 5 * i32::from(cols[i + 4][r])
                    + i32::from(cols[i + 5][r]);
                out_col[r] = clip_u8((sum + FILTER_BIAS_1D) >> FILTER_SHIFT_1D);
            }
        }

        for r in 0..TILE_ROWS {
            let dest_row = &mut dest[(row0 + r) * dest_pitch_usize..][..TILE_COLS];
            for (c, d) in dest_row.iter_mut().enumerate() {
                *d = out[c][r];
            }
        }
    }

    let done = groups * TILE_ROWS;
    if let Some(rest) = NonZeroUsize::new(height.get() - done) {
        filter_h_direct(
            &mut dest[done * dest_pitch_usize..],
            dest_pitch,
            &src[done * src_pitch_usize..],
            src_pitch,
            TILE_WIDTH,
            rest,
        );
    }
}
