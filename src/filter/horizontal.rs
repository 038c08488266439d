#[cfg(target_arch = "x86_64")]
mod avx2;
mod rust;


use std::num::NonZeroUsize;

use cfg_if::cfg_if;

use super::FILTER_SUPPORT;

/// Horizontal half-pel interpolation.
///
/// Each output sample is the 6-tap filter over `s[x-2..=x+3]` of its own row,
/// rounded with `(sum + 16) >> 5` and saturated to `[0, 255]`. Rows are independent.
///
/// # Parameters
/// - `dest`: Destination, starting at the block origin
/// - `dest_pitch`: Samples per row in `dest`
/// - `src`: Source, starting two columns left of the block origin
/// - `src_pitch`: Samples per row in `src`
/// - `width`: Block width in samples
/// - `height`: Block height in rows
///
/// # Panics
/// If `dest` or a source is too short for the block and the filter support.
pub fn filter_h(
    dest: &mut [u8],
    dest_pitch: NonZeroUsize,
    src: &[u8],
    src_pitch: NonZeroUsize,
    width: NonZeroUsize,
    height: NonZeroUsize,
) {
    assert!(dest.len() >= (height.get() - 1) * dest_pitch.get() + width.get());
    assert!(src.len() >= (height.get() - 1) * src_pitch.get() + width.get() + FILTER_SUPPORT);

    cfg_if! {
        if #[cfg(all(target_arch = "x86_64", not(feature = "no_simd")))] {
            if crate::util::has_avx2() {
                // SAFETY: We check for AVX2 first
                unsafe {
                    avx2::filter_h(dest, dest_pitch, src, src_pitch, width, height);
                }
                return;
            }
        }
    }

    rust::filter_h(dest, dest_pitch, src, src_pitch, width, height);
}
