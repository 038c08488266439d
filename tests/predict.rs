#![allow(clippy::unwrap_used, reason = "allow in test files")]

use std::{
    num::NonZeroUsize,
    panic::{AssertUnwindSafe, catch_unwind},
};

use lumamc::{McFunctions, MotionVector, PlaneMut, PlaneRef, SampleType, mc_init, predict_luma};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro128StarStar;

fn nz(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

fn noise(len: usize) -> Vec<u8> {
    let mut rng = Xoshiro128StarStar::from_seed(*b"deadbeeflolcakes");
    (0..len).map(|_| rng.random()).collect()
}

/// Half- and quarter-sample positions around one full sample, named the way
/// interpolation is usually described: `b` half right, `h` half down, `j` both.
struct Reference<'a> {
    plane: &'a [u8],
    stride: usize,
}

impl Reference<'_> {
    fn at(&self, x: isize, y: isize) -> i32 {
        i32::from(self.plane[(y * self.stride as isize + x) as usize])
    }

    fn six_tap(v: [i32; 6]) -> i32 {
        v[0] - 5 * v[1] + 20 * v[2] + 20 * v[3] - 5 * v[4] + v[5]
    }

    fn b1(&self, x: isize, y: isize) -> i32 {
        Self::six_tap(std::array::from_fn(|k| self.at(x + k as isize - 2, y)))
    }

    fn h1(&self, x: isize, y: isize) -> i32 {
        Self::six_tap(std::array::from_fn(|k| self.at(x, y + k as isize - 2)))
    }

    fn b(&self, x: isize, y: isize) -> i32 {
        ((self.b1(x, y) + 16) >> 5).clamp(0, 255)
    }

    fn h(&self, x: isize, y: isize) -> i32 {
        ((self.h1(x, y) + 16) >> 5).clamp(0, 255)
    }

    fn j(&self, x: isize, y: isize) -> i32 {
        let j1 = Self::six_tap(std::array::from_fn(|k| self.h1(x + k as isize - 2, y)));
        ((j1 + 512) >> 10).clamp(0, 255)
    }

    /// Sample at full position `(x, y)` offset by quarter phases `(qx, qy)`.
    fn quarter(&self, x: isize, y: isize, qx: i32, qy: i32) -> u8 {
        let avg = |a: i32, b: i32| (a + b + 1) >> 1;
        let g = |dx: isize, dy: isize| self.at(x + dx, y + dy);
        let value = match (qx, qy) {
            (0, 0) => g(0, 0),
            (1, 0) => avg(g(0, 0), self.b(x, y)),
            (2, 0) => self.b(x, y),
            (3, 0) => avg(self.b(x, y), g(1, 0)),
            (0, 1) => avg(g(0, 0), self.h(x, y)),
            (0, 2) => self.h(x, y),
            (0, 3) => avg(self.h(x, y), g(0, 1)),
            (1, 1) => avg(self.b(x, y), self.h(x, y)),
            (3, 1) => avg(self.b(x, y), self.h(x + 1, y)),
            (1, 3) => avg(self.h(x, y), self.b(x, y + 1)),
            (3, 3) => avg(self.h(x + 1, y), self.b(x, y + 1)),
            (2, 2) => self.j(x, y),
            (2, 1) => avg(self.b(x, y), self.j(x, y)),
            (2, 3) => avg(self.j(x, y), self.b(x, y + 1)),
            (1, 2) => avg(self.h(x, y), self.j(x, y)),
            (3, 2) => avg(self.j(x, y), self.h(x + 1, y)),
            _ => unreachable!(),
        };
        value as u8
    }
}

#[test]
fn flat_block_at_center_position() {
    let plane = vec![200u8; 16 * 16];
    let mut out = vec![0u8; 4 * 4];
    let src = PlaneRef::at(&plane, nz(16), 4, 4);
    let mut dst = PlaneMut::new(&mut out, 0, nz(4));

    // integer offset (1, 2), phase (2, 2)
    predict_luma(&src, &mut dst, MotionVector::new(6, 10), 4, 4).unwrap();
    assert!(out.iter().all(|&v| v == 200), "{out:?}");
}

#[test]
fn ramp_at_first_horizontal_quarter() {
    // every row is 0, 10, 20, ..., 150
    let plane: Vec<u8> = (0..10).flat_map(|_| (0..16u8).map(|c| c * 10)).collect();
    let mut out = vec![0u8; 8 * 4];
    let src = PlaneRef::at(&plane, nz(16), 4, 3);
    let mut dst = PlaneMut::new(&mut out, 0, nz(8));

    predict_luma(&src, &mut dst, MotionVector::new(1, 0), 8, 4).unwrap();

    // the half sample right of 40 is (1440 + 16) >> 5 = 45, and avg(40, 45) = 43
    let expected = [43u8, 53, 63, 73, 83, 93, 103, 113];
    for row in out.chunks(8) {
        assert_eq!(row, expected);
    }
}

#[test]
fn unsupported_width_is_an_error() {
    let plane = noise(32 * 32);
    let mut out = vec![0x11u8; 16 * 16];
    let src = PlaneRef::at(&plane, nz(32), 8, 8);
    let mut dst = PlaneMut::new(&mut out, 0, nz(16));

    let err = predict_luma(&src, &mut dst, MotionVector::new(2, 1), 5, 4).unwrap_err();
    assert_eq!(err.to_string(), "Invalid block width, must be 4, 8, or 16, got 5.");
    assert!(out.iter().all(|&v| v == 0x11));
}

#[test]
fn every_phase_and_width_matches_reference() {
    let stride = 64;
    let plane = noise(stride * 64);
    let reference = Reference {
        plane: &plane,
        stride,
    };
    let (bx, by) = (24isize, 20isize);

    for width in [4usize, 8, 16] {
        for height in [2usize, 4, 8, 16] {
            for qy in 0..4 {
                for qx in 0..4 {
                    let mv = MotionVector::new(-12 + qx, 8 + qy);
                    let mut out = vec![0u8; 16 * 16];
                    let src = PlaneRef::at(&plane, nz(stride), bx as usize, by as usize);
                    let mut dst = PlaneMut::new(&mut out, 0, nz(16));
                    predict_luma(&src, &mut dst, mv, width, height).unwrap();

                    let (x0, y0) = (bx - 3, by + 2);
                    for y in 0..height {
                        for x in 0..width {
                            assert_eq!(
                                out[y * 16 + x],
                                reference.quarter(x0 + x as isize, y0 + y as isize, qx, qy),
                                "{width}x{height} phase ({qx}, {qy}) at ({x}, {y})"
                            );
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn registered_function_predicts() {
    let mut pf = McFunctions::new();
    mc_init(&mut pf);
    let luma = pf.get(SampleType::Luma).unwrap();
    assert!(pf.get(SampleType::Chroma).is_none());

    let plane = noise(32 * 32);
    let mv = MotionVector::new(-3, 5);
    let mut a = vec![0u8; 8 * 8];
    let mut b = vec![0u8; 8 * 8];
    let src = PlaneRef::at(&plane, nz(32), 12, 12);
    luma(&src, &mut PlaneMut::new(&mut a, 0, nz(8)), mv, 8, 8).unwrap();
    predict_luma(&src, &mut PlaneMut::new(&mut b, 0, nz(8)), mv, 8, 8).unwrap();
    assert_eq!(a, b);
}

#[test]
fn destination_view_with_offset_and_stride() {
    let plane = noise(40 * 40);
    let mut framed = vec![0u8; 40 * 40];
    let src = PlaneRef::at(&plane, nz(40), 10, 10);
    let mut dst = PlaneMut::at(&mut framed, nz(40), 10, 10);
    predict_luma(&src, &mut dst, MotionVector::new(0, 0), 16, 16).unwrap();

    for y in 0..40 {
        for x in 0..40 {
            let inside = (10..26).contains(&x) && (10..26).contains(&y);
            let expected = if inside { plane[y * 40 + x] } else { 0 };
            assert_eq!(framed[y * 40 + x], expected, "({x}, {y})");
        }
    }
}

#[test]
fn unpadded_bottom_edge_panics_before_writing() {
    // the center filter needs rows 16 to 24 of a 24-row plane
    let plane = noise(24 * 24);
    let mut out = vec![0x33u8; 16 * 4];
    let result = catch_unwind(AssertUnwindSafe(|| {
        let src = PlaneRef::at(&plane, nz(24), 4, 18);
        let mut dst = PlaneMut::new(&mut out, 0, nz(16));
        predict_luma(&src, &mut dst, MotionVector::new(2, 2), 16, 4)
    }));
    assert!(result.is_err());
    assert!(out.iter().all(|&v| v == 0x33));
}
