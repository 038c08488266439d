
#[cfg(target_arch = "x86_64")]
cpufeatures::new!(cpuid_avx2, "avx2");

#[cfg(target_arch = "x86_64")]
pub use cpuid_avx2::get as has_avx2;

/// Always false off x86-64; keeps call sites free of `cfg` noise.
#[cfg(not(target_arch = "x86_64"))]
#[must_use]
pub fn has_avx2() -> bool {
    false
}

/// Saturates an intermediate filter value to the 8-bit sample range.
#[inline(always)]
#[must_use]
pub fn clip_u8(value: i32) -> u8 {
    value.clamp(0, u8::MAX as i32) as u8
}

/// Name of the backend the runtime dispatch will pick, for diagnostics.
#[must_use]
pub fn backend_name() -> &'static str {
    if cfg!(all(target_arch = "x86_64", not(feature = "no_simd"))) && has_avx2() {
        "avx2"
    } else {
        "rust"
    }
}
