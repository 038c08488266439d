mod rust;

#[cfg(test)]
mod tests;

use std::num::NonZeroUsize;

use super::FILTER_SUPPORT;
use crate::params::MAX_BLOCK_WIDTH;

/// Center (half-pel in both directions) interpolation.
///
/// The vertical filter runs first over every column the horizontal pass needs,
/// keeping the unrounded sums. The horizontal filter then runs over those sums
/// and the result is rounded once with `(sum + 512) >> 10`.
///
/// # Parameters
/// - `dest`: Destination, starting at the block origin
/// - `dest_pitch`: Samples per row in `dest`
/// - `src`: Source, starting two rows above and two columns left of the block origin
/// - `src_pitch`: Samples per row in `src`
/// - `width`: Block width in samples, at most 16
/// - `height`: Block height in rows
pub fn filter_c(
    dest: &mut [u8],
    dest_pitch: NonZeroUsize,
    src: &[u8],
    src_pitch: NonZeroUsize,
    width: NonZeroUsize,
    height: NonZeroUsize,
) {
    assert!(width.get() <= MAX_BLOCK_WIDTH);
    debug_assert!(dest.len() >= (height.get() - 1) * dest_pitch.get() + width.get());
    debug_assert!(
        src.len()
            >= (height.get() + FILTER_SUPPORT - 1) * src_pitch.get() + width.get() + FILTER_SUPPORT
    );

    rust::filter_c(dest, dest_pitch, src, src_pitch, width, height);
}
