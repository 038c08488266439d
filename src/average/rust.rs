use std::num::NonZeroUsize;

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
    let width = width.get();

    for y in 0..height.get() {
        let a = &src1[y * src1_pitch.get()..][..width];
        let b = &src2[y * src2_pitch.get()..][..width];
        let d = &mut dest[y * dest_pitch.get()..][..width];
        for ((d, &a), &b) in d.iter_mut().zip(a).zip(b) {
            *d = (u16::from(a) + u16::from(b)).div_ceil(2) as u8;
        }
    }
}
