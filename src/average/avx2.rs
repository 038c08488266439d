#![allow(clippy::undocumented_unsafe_blocks)]

use std::{arch::x86_64::*, num::NonZeroUsize};

#[target_feature(enable = "avx2")]
pub(super) fn pixel_avg(
    dest: &mut [u8],
    dest_pitch: NonZeroUsize,
    src1: &[u8],
    src1_pitch: NonZeroUsize,
    src2: &[u8],
    src2_pitch: NonZeroUsize,
    width: NonZeroUsize,
    height: NonZeroUsize,
) {
    unsafe {
        pixel_avg_u8(
            dest.as_mut_ptr(),
            dest_pitch,
            src1.as_ptr(),
            src1_pitch,
            src2.as_ptr(),
            src2_pitch,
            width,
            height,
        );
    }
}

/// `_mm_avg_epu8` computes `(a + b + 1) >> 1`, which is the rounding we need.
#[target_feature(enable = "avx2")]
unsafe fn pixel_avg_u8(
    dest: *mut u8,
    dest_pitch: NonZeroUsize,
    src1: *const u8,
    src1_pitch: NonZeroUsize,
    src2: *const u8,
    src2_pitch: NonZeroUsize,
    width: NonZeroUsize,
    height: NonZeroUsize,
) {
    let width = width.get();

    for y in 0..height.get() {
        let a = src1.add(y * src1_pitch.get());
        let b = src2.add(y * src2_pitch.get());
        let d = dest.add(y * dest_pitch.get());
        let mut x = 0;

        while x + 16 <= width {
            let va = _mm_loadu_si128(a.add(x) as *const __m128i);
            let vb = _mm_loadu_si128(b.add(x) as *const __m128i);
            _mm_storeu_si128(d.add(x) as *mut __m128i, _mm_avg_epu8(va, vb));
            x += 16;
        }

        while x + 8 <= width {
            let va = _mm_loadl_epi64(a.add(x) as *const __m128i);
            let vb = _mm_loadl_epi64(b.add(x) as *const __m128i);
            _mm_storel_epi64(d.add(x) as *mut __m128i, _mm_avg_epu8(va, vb));
            x += 8;
        }

        while x < width {
            let sum = u16::from(*a.add(x)) + u16::from(*b.add(x));
            *d.add(x) = sum.div_ceil(2) as u8;
            x += 1;
        }
    }
}
