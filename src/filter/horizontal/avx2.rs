#![allow(clippy::undocumented_unsafe_blocks)]

use std::num::NonZeroUsize;

use crate::{
    filter::{FILTER_BIAS_1D, FILTER_SHIFT_1D, tap_filter},
    simd::{load_widen_8, load_widen_16, pack_store_8, pack_store_16, tap6_round_128, tap6_round_256},
    util::clip_u8,
};

#[target_feature(enable = "avx2")]
pub(super) fn filter_h(
    dest: &mut [u8],
    dest_pitch: NonZeroUsize,
    src: &[u8],
    src_pitch: NonZeroUsize,
    width: NonZeroUsize,
    height: NonZeroUsize,
) {
    unsafe {
        filter_h_u8(
            dest.as_mut_ptr(),
            dest_pitch,
            src.as_ptr(),
            src_pitch,
            width,
            height,
        );
    }
}

#[target_feature(enable = "avx2")]
unsafe fn filter_h_u8(
    dest: *mut u8,
    dest_pitch: NonZeroUsize,
    src: *const u8,
    src_pitch: NonZeroUsize,
    width: NonZeroUsize,
    height: NonZeroUsize,
) {
    let width = width.get();

    for y in 0..height.get() {
        let s = src.add(y * src_pitch.get());
        let d = dest.add(y * dest_pitch.get());
        let mut x = 0;

        while x + 16 <= width {
            let p = s.add(x);
            let v = tap6_round_256(
                load_widen_16(p),
                load_widen_16(p.add(1)),
                load_widen_16(p.add(2)),
                load_widen_16(p.add(3)),
                load_widen_16(p.add(4)),
                load_widen_16(p.add(5)),
            );
            pack_store_16(d.add(x), v);
            x += 16;
        }

        while x + 8 <= width {
            let p = s.add(x);
            let v = tap6_round_128(
                load_widen_8(p),
                load_widen_8(p.add(1)),
                load_widen_8(p.add(2)),
                load_widen_8(p.add(3)),
                load_widen_8(p.add(4)),
                load_widen_8(p.add(5)),
            );
            pack_store_8(d.add(x), v);
            x += 8;
        }

        while x < width {
            let sum = tap_filter(std::slice::from_raw_parts(s.add(x), 6), 1);
            *d.add(x) = clip_u8((sum + FILTER_BIAS_1D) >> FILTER_SHIFT_1D);
            x += 1;
        }
    }
}
