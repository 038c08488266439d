#[cfg(target_arch = "x86_64")]
mod avx2;
mod rust;


use std::num::NonZeroUsize;

use cfg_if::cfg_if;

/// Averages two blocks sample by sample, rounding halves up: `(a + b + 1) >> 1`.
///
/// Each of the three buffers has its own pitch, so either source may be a
/// plane view or a packed scratch block.
///
/// # Parameters
/// - `dest`: Destination buffer, starting at the block origin
/// - `dest_pitch`: Samples per row in `dest`
/// - `src1`: First source block
/// - `src1_pitch`: Samples per row in `src1`
/// - `src2`: Second source block
/// - `src2_pitch`: Samples per row in `src2`
/// - `width`: Width of the block in samples
/// - `height`: Height of the block in rows
///
/// # Panics
/// If any buffer is too short for the block.
pub fn pixel_avg(
    dest: &mut [u8],
    dest_pitch: NonZeroUsize,
    src1: &[u8],
    src1_pitch: NonZeroUsize,
    src2: &[u8],
    src2_pitch: NonZeroUsize,
    width: NonZeroUsize,
    height: NonZeroUsize,
) {
    let last_row = height.get() - 1;
    assert!(dest.len() >= last_row * dest_pitch.get() + width.get());
    assert!(src1.len() >= last_row * src1_pitch.get() + width.get());
    assert!(src2.len() >= last_row * src2_pitch.get() + width.get());

    cfg_if! {
        if #[cfg(all(target_arch = "x86_64", not(feature = "no_simd")))] {
            if crate::util::has_avx2() {
                // SAFETY: We check for AVX2 first
                unsafe {
                    avx2::pixel_avg(dest, dest_pitch, src1, src1_pitch, src2, src2_pitch, width, height);
                }
                return;
            }
        }
    }

    rust::pixel_avg(dest, dest_pitch, src1, src1_pitch, src2, src2_pitch, width, height);
}
