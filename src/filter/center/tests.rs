#![allow(clippy::unwrap_used, reason = "allow in test files")]

use super::*;
use crate::tests::{naive_c, nz, random_plane};

#[test]
fn test_filter_c_flat() {
    for width in [4, 8, 16] {
        let pitch = width + 5;
        let src = vec![99u8; pitch * 9];
        let mut dest = vec![0u8; width * 4];
        filter_c(&mut dest, nz(width), &src, nz(pitch), nz(width), nz(4));
        assert!(dest.iter().all(|&v| v == 99), "width {width}: {dest:?}");
    }
}

#[test]
fn test_filter_c_matches_naive() {
    let stride = 32;
    let data = random_plane(stride * 24, 6);
    for width in [4, 8, 16] {
        for height in 1..=16 {
            let mut dest = vec![0u8; 16 * 16];
            // block at (4, 3); the window starts at (2, 1)
            filter_c(
                &mut dest,
                nz(16),
                &data[stride + 2..],
                nz(stride),
                nz(width),
                nz(height),
            );
            for y in 0..height {
                for x in 0..width {
                    assert_eq!(
                        dest[y * 16 + x],
                        naive_c(&data, stride, 4 + x, 3 + y),
                        "{width}x{height} at ({x}, {y})"
                    );
                }
            }
        }
    }
}

#[test]
fn test_filter_c_keeps_first_pass_precision() {
    // Column sums are 5025, -595, 7755, 3630, 6920, 1745.
    // One rounding at the end gives 198; rounding each pass would give 195.
    #[rustfmt::skip]
    let src = [
        160, 40, 255, 0, 255, 90,
        255, 40, 0, 255, 255, 40,
        90, 0, 255, 0, 255, 0,
        255, 40, 160, 255, 160, 90,
        160, 255, 160, 90, 90, 40,
        40, 40, 0, 255, 90, 255,
    ];
    let mut dest = [0u8; 1];
    filter_c(&mut dest, nz(1), &src, nz(6), nz(1), nz(1));
    assert_eq!(dest[0], 198);
}

#[test]
fn test_filter_c_saturates() {
    // A bright 2x2 patch under all four 20 taps: (408000 + 512) >> 10 = 398
    let mut src = vec![0u8; 6 * 6];
    for i in [2, 3] {
        src[i * 6 + 2] = 255;
        src[i * 6 + 3] = 255;
    }
    let mut dest = [0u8; 1];
    filter_c(&mut dest, nz(1), &src, nz(6), nz(1), nz(1));
    assert_eq!(dest[0], 255);

    // rows 1 and 4 bright: every column sum is -2550
    let mut src = vec![0u8; 6 * 6];
    for i in 0..6 {
        src[6 + i] = 255;
        src[4 * 6 + i] = 255;
    }
    filter_c(&mut dest, nz(1), &src, nz(6), nz(1), nz(1));
    assert_eq!(dest[0], 0);
}

#[test]
#[should_panic]
fn test_filter_c_rejects_wide_blocks() {
    let src = vec![0u8; 22 * 6];
    let mut dest = vec![0u8; 17];
    filter_c(&mut dest, nz(17), &src, nz(22), nz(17), nz(1));
}
