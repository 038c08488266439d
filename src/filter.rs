mod center;
mod horizontal;
mod vertical;


pub use center::filter_c;
pub use horizontal::filter_h;
pub use vertical::filter_v;

/// The luma half-pel kernel.
pub const FILTER_TAPS: [i32; 6] = [1, -5, 20, 20, -5, 1];
/// Rounding bias for one filter pass (taps sum to 32).
pub const FILTER_BIAS_1D: i32 = 16;
pub const FILTER_SHIFT_1D: i32 = 5;
/// Rounding bias for the two-pass center position (taps sum to 32 * 32).
pub const FILTER_BIAS_2D: i32 = 512;
pub const FILTER_SHIFT_2D: i32 = 10;

/// Extra samples a filter pass reads beyond the block width (two before, three after).
pub const FILTER_SUPPORT: usize = 5;

/// Unrounded 6-tap sum over `src[0], src[step], .., src[5 * step]`.
///
/// `src` starts two samples before the output position.
#[inline(always)]
#[must_use]
pub fn tap_filter(src: &[u8], step: usize) -> i32 {
    FILTER_TAPS
        .iter()
        .enumerate()
        .map(|(k, &tap)| tap * i32::from(src[k * step]))
        .sum()
}

/// Second pass of the center filter, over first-pass sums.
#[inline(always)]
#[must_use]
pub fn tap_filter_i16(taps: &[i16]) -> i32 {
    FILTER_TAPS
        .iter()
        .zip(taps)
        .map(|(&tap, &v)| tap * i32::from(v))
        .sum()
}
