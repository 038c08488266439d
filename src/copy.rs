
use std::num::NonZeroUsize;

/// Copies a `width`x`height` block between buffers with independent pitches.
///
/// This is the full-pel prediction: the source is the reference block itself.
pub fn copy_block(
    dest: &mut [u8],
    dest_pitch: NonZeroUsize,
    src: &[u8],
    src_pitch: NonZeroUsize,
    width: NonZeroUsize,
    height: NonZeroUsize,
) {
    let height = height.get();
    let width = width.get();
    let src_pitch = src_pitch.get();
    let dest_pitch = dest_pitch.get();

    if src_pitch == dest_pitch && src_pitch == width {
        dest[..width * height].copy_from_slice(&src[..width * height]);
    } else {
        for y in 0..height {
            dest[y * dest_pitch..][..width].copy_from_slice(&src[y * src_pitch..][..width]);
        }
    }
}
