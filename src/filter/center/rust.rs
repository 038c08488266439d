use std::num::NonZeroUsize;

use crate::{
    filter::{FILTER_BIAS_2D, FILTER_SHIFT_2D, FILTER_SUPPORT, tap_filter, tap_filter_i16},
    params::MAX_BLOCK_WIDTH,
    util::clip_u8,
};

pub(super) fn filter_c(
    dest: &mut [u8],
    dest_pitch: NonZeroUsize,
    src: &[u8],
    src_pitch: NonZeroUsize,
    width: NonZeroUsize,
    height: NonZeroUsize,
) {
    let src_pitch = src_pitch.get();
    let width = width.get();
    // Vertical sums of one row, for the block columns plus the horizontal support.
    // They lie in [-2550, 10710], so i16 holds them.
    let mut taps = [0i16; MAX_BLOCK_WIDTH + FILTER_SUPPORT];

    for y in 0..height.get() {
        let src_rows = &src[y * src_pitch..];
        for (i, tap) in taps[..width + FILTER_SUPPORT].iter_mut().enumerate() {
            *tap = tap_filter(&src_rows[i..], src_pitch) as i16;
        }

        let dest_row = &mut dest[y * dest_pitch.get()..][..width];
        for (x, out) in dest_row.iter_mut().enumerate() {
            *out = clip_u8((tap_filter_i16(&taps[x..]) + FILTER_BIAS_2D) >> FILTER_SHIFT_2D);
        }
    }
}
