use std::num::NonZeroUsize;

use crate::{
    filter::{FILTER_BIAS_1D, FILTER_SHIFT_1D, tap_filter},
    util::clip_u8,
};

pub(super) fn filter_v(
    dest: &mut [u8],
    dest_pitch: NonZeroUsize,
    src: &[u8],
    src_pitch: NonZeroUsize,
    width: NonZeroUsize,
    height: NonZeroUsize,
) {
    let src_pitch = src_pitch.get();

    for y in 0..height.get() {
        let src_rows = &src[y * src_pitch..];
        let dest_row = &mut dest[y * dest_pitch.get()..][..width.get()];
        for (x, out) in dest_row.iter_mut().enumerate() {
            *out = clip_u8((tap_filter(&src_rows[x..], src_pitch) + FILTER_BIAS_1D) >> FILTER_SHIFT_1D);
        }
    }
}
