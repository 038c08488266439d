/// A motion vector in quarter-pel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MotionVector {
    pub x: i32,
    pub y: i32,
}

impl MotionVector {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        MotionVector { x, y }
    }

    /// Full-pel displacement `(x, y)`. Arithmetic shift, so negative vectors round toward -inf.
    #[must_use]
    pub const fn integer_part(self) -> (isize, isize) {
        ((self.x >> 2) as isize, (self.y >> 2) as isize)
    }

    /// Fractional position `(hphase, vphase)`, each in `0..4`.
    #[must_use]
    pub const fn phase(self) -> (usize, usize) {
        ((self.x & 3) as usize, (self.y & 3) as usize)
    }
}
