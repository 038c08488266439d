#![allow(clippy::undocumented_unsafe_blocks)]

//! Lane helpers shared by the AVX2 backends.
//!
//! All 6-tap arithmetic runs in 16-bit lanes: for 8-bit input the one-dimensional
//! sum stays within `[-2550, 10710]`, so neither the multiply nor the bias can wrap.

use std::arch::x86_64::*;

use crate::filter::FILTER_BIAS_1D;

/// Widens 16 samples at `src` to 16-bit lanes.
#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn load_widen_16(src: *const u8) -> __m256i {
    _mm256_cvtepu8_epi16(_mm_loadu_si128(src as *const __m128i))
}

/// Widens 8 samples at `src` to 16-bit lanes.
#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn load_widen_8(src: *const u8) -> __m128i {
    _mm_cvtepu8_epi16(_mm_loadl_epi64(src as *const __m128i))
}

/// `(a - 5b + 20c + 20d - 5e + f + 16) >> 5` on sixteen lanes.
#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn tap6_round_256(
    a: __m256i,
    b: __m256i,
    c: __m256i,
    d: __m256i,
    e: __m256i,
    f: __m256i,
) -> __m256i {
    let outer = _mm256_add_epi16(a, f);
    let mid = _mm256_mullo_epi16(_mm256_add_epi16(b, e), _mm256_set1_epi16(5));
    let inner = _mm256_mullo_epi16(_mm256_add_epi16(c, d), _mm256_set1_epi16(20));
    let sum = _mm256_sub_epi16(_mm256_add_epi16(outer, inner), mid);
    let sum = _mm256_add_epi16(sum, _mm256_set1_epi16(FILTER_BIAS_1D as i16));
    _mm256_srai_epi16(sum, 5)
}

/// `(a - 5b + 20c + 20d - 5e + f + 16) >> 5` on eight lanes.
#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn tap6_round_128(
    a: __m128i,
    b: __m128i,
    c: __m128i,
    d: __m128i,
    e: __m128i,
    f: __m128i,
) -> __m128i {
    let outer = _mm_add_epi16(a, f);
    let mid = _mm_mullo_epi16(_mm_add_epi16(b, e), _mm_set1_epi16(5));
    let inner = _mm_mullo_epi16(_mm_add_epi16(c, d), _mm_set1_epi16(20));
    let sum = _mm_sub_epi16(_mm_add_epi16(outer, inner), mid);
    let sum = _mm_add_epi16(sum, _mm_set1_epi16(FILTER_BIAS_1D as i16));
    _mm_srai_epi16(sum, 5)
}

/// Saturates sixteen 16-bit lanes to bytes and stores them at `dest`.
#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn pack_store_16(dest: *mut u8, v: __m256i) {
    let lo = _mm256_castsi256_si128(v);
    let hi = _mm256_extracti128_si256(v, 1);
    _mm_storeu_si128(dest as *mut __m128i, _mm_packus_epi16(lo, hi));
}

/// Saturates eight 16-bit lanes to bytes and stores them at `dest`.
#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn pack_store_8(dest: *mut u8, v: __m128i) {
    _mm_storel_epi64(dest as *mut __m128i, _mm_packus_epi16(v, v));
}
