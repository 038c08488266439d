
use std::num::NonZeroUsize;

/// Samples needed left of / above a block by the 6-tap filters.
pub const FILTER_PAD_BEFORE: usize = 2;
/// Samples needed right of / below a block by the 6-tap filters.
pub const FILTER_PAD_AFTER: usize = 3;

/// Read-only view of an 8-bit plane, anchored at a block origin.
///
/// The origin is an index into `data`; reads at negative offsets from it
/// (up to the filter padding) are valid as long as the caller padded the plane.
#[derive(Debug, Clone, Copy)]
pub struct PlaneRef<'a> {
    data: &'a [u8],
    origin: usize,
    stride: NonZeroUsize,
}

impl<'a> PlaneRef<'a> {
    #[must_use]
    pub fn new(data: &'a [u8], origin: usize, stride: NonZeroUsize) -> Self {
        PlaneRef {
            data,
            origin,
            stride,
        }
    }

    /// View anchored at column `x`, row `y` of `data`.
    #[must_use]
    pub fn at(data: &'a [u8], stride: NonZeroUsize, x: usize, y: usize) -> Self {
        Self::new(data, y * stride.get() + x, stride)
    }

    #[must_use]
    pub fn stride(&self) -> NonZeroUsize {
        self.stride
    }

    #[must_use]
    pub fn origin(&self) -> usize {
        self.origin
    }

    /// Moves the origin by `dx` columns and `dy` rows.
    ///
    /// # Panics
    /// If the new origin lies before the start of the plane.
    #[must_use]
    pub fn shifted(&self, dx: isize, dy: isize) -> Self {
        let delta = dy * self.stride.get() as isize + dx;
        let origin = self
            .origin
            .checked_add_signed(delta)
            .expect("block origin shifted before the start of the plane");
        Self::new(self.data, origin, self.stride)
    }

    /// Everything from `(dx, dy)` relative to the origin to the end of the plane.
    ///
    /// Kernels take their source this way, starting at the top-left of their support window.
    ///
    /// # Panics
    /// If the window start lies outside the plane.
    #[must_use]
    pub fn window(&self, dx: isize, dy: isize) -> &'a [u8] {
        let start = self.shifted(dx, dy).origin;
        &self.data[start..]
    }

    /// Whether a `width`x`height` block at the origin has the filter padding on every side.
    ///
    /// Columns are counted from the start of `data`, which must begin a row.
    #[must_use]
    pub fn has_filter_support(&self, width: usize, height: usize) -> bool {
        let stride = self.stride.get();
        let (x, y) = (self.origin % stride, self.origin / stride);
        if x < FILTER_PAD_BEFORE
            || y < FILTER_PAD_BEFORE
            || x + width + FILTER_PAD_AFTER > stride
        {
            return false;
        }
        // one past the last sample touched: row height+2, column width+2
        let end = self.origin + (height + FILTER_PAD_AFTER - 1) * stride + width + FILTER_PAD_AFTER;
        end <= self.data.len()
    }
}

/// Writable view of an 8-bit plane, anchored at a block origin.
#[derive(Debug)]
pub struct PlaneMut<'a> {
    data: &'a mut [u8],
    origin: usize,
    stride: NonZeroUsize,
}

impl<'a> PlaneMut<'a> {
    #[must_use]
    pub fn new(data: &'a mut [u8], origin: usize, stride: NonZeroUsize) -> Self {
        PlaneMut {
            data,
            origin,
            stride,
        }
    }

    /// View anchored at column `x`, row `y` of `data`.
    #[must_use]
    pub fn at(data: &'a mut [u8], stride: NonZeroUsize, x: usize, y: usize) -> Self {
        Self::new(data, y * stride.get() + x, stride)
    }

    #[must_use]
    pub fn stride(&self) -> NonZeroUsize {
        self.stride
    }

    #[must_use]
    pub fn origin(&self) -> usize {
        self.origin
    }

    /// The plane from the block origin onward, as handed to the kernels.
    pub fn block_mut(&mut self) -> &mut [u8] {
        &mut self.data[self.origin..]
    }

    /// Whether a `width`x`height` block fits below and right of the origin.
    #[must_use]
    pub fn fits(&self, width: usize, height: usize) -> bool {
        width <= self.stride.get()
            && (height == 0
                || self.origin + (height - 1) * self.stride.get() + width <= self.data.len())
    }
}
