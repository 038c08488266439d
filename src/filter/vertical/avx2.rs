#![allow(clippy::undocumented_unsafe_blocks)]

use std::num::NonZeroUsize;

use crate::{
    filter::{FILTER_BIAS_1D, FILTER_SHIFT_1D},
    simd::{load_widen_8, load_widen_16, pack_store_8, pack_store_16, tap6_round_128, tap6_round_256},
    util::clip_u8,
};

#[target_feature(enable = "avx2")]
pub(super) fn filter_v(
    dest: &mut [u8],
    dest_pitch: NonZeroUsize,
    src: &[u8],
    src_pitch: NonZeroUsize,
    width: NonZeroUsize,
    height: NonZeroUsize,
) {
    unsafe {
        filter_v_u8(
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
unsafe fn filter_v_u8(
    dest: *mut u8,
    dest_pitch: NonZeroUsize,
    src: *const u8,
    src_pitch: NonZeroUsize,
    width: NonZeroUsize,
    height: NonZeroUsize,
) {
    let pitch = src_pitch.get();
    let width = width.get();

    for y in 0..height.get() {
        let s = src.add(y * pitch);
        let d = dest.add(y * dest_pitch.get());
        let mut x = 0;

        while x + 16 <= width {
            let p = s.add(x);
            let v = tap6_round_256(
                load_widen_16(p),
                load_widen_16(p.add(pitch)),
                load_widen_16(p.add(2 * pitch)),
                load_widen_16(p.add(3 * pitch)),
                load_widen_16(p.add(4 * pitch)),
                load_widen_16(p.add(5 * pitch)),
            );
            pack_store_16(d.add(x), v);
            x += 16;
        }

        while x + 8 <= width {
            let p = s.add(x);
            let v = tap6_round_128(
                load_widen_8(p),
                load_widen_8(p.add(pitch)),
                load_widen_8(p.add(2 * pitch)),
                load_widen_8(p.add(3 * pitch)),
                load_widen_8(p.add(4 * pitch)),
                load_widen_8(p.add(5 * pitch)),
            );
            pack_store_8(d.add(x), v);
            x += 8;
        }

        while x < width {
            let p = s.add(x);
            let mut taps = [0i32; 6];
            for (k, t) in taps.iter_mut().enumerate() {
                *t = i32::from(*p.add(k * pitch));
            }
            let sum = taps[0] - 5 * taps[1] + 20 * (taps[2] + taps[3]) - 5 * taps[4] + taps[5];
            *d.add(x) = clip_u8((sum + FILTER_BIAS_1D) >> FILTER_SHIFT_1D);
            x += 1;
        }
    }
}
