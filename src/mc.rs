
use std::{fmt, num::NonZeroUsize};

use anyhow::Result;
use log::{debug, error, trace};

use crate::{
    average::pixel_avg,
    copy::copy_block,
    filter::{filter_c, filter_h, filter_v},
    mv::MotionVector,
    params::{
        BlockWidth, MAX_BLOCK_HEIGHT, MAX_BLOCK_WIDTH, SampleType, block_width,
        validate_block_height,
    },
    plane::{FILTER_PAD_BEFORE, PlaneMut, PlaneRef},
    util::backend_name,
};

/// A motion compensation entry point, as stored in [`McFunctions`].
pub type McFn = fn(&PlaneRef<'_>, &mut PlaneMut<'_>, MotionVector, usize, usize) -> Result<()>;

/// One phase routine: source at the integer-shifted origin, destination, height.
type LumaMcFn = fn(&PlaneRef<'_>, &mut PlaneMut<'_>, NonZeroUsize);

const SCRATCH_PITCH: NonZeroUsize = block_width::<MAX_BLOCK_WIDTH>();
const SCRATCH_LEN: usize = MAX_BLOCK_WIDTH * MAX_BLOCK_HEIGHT;

/// One of the four base predictors, offset from the block origin in full samples.
#[derive(Debug, Clone, Copy)]
enum Predictor {
    Full { dx: isize, dy: isize },
    Horizontal { dx: isize, dy: isize },
    Vertical { dx: isize, dy: isize },
    Center,
}

const I: Predictor = Predictor::Full { dx: 0, dy: 0 };
const I_RIGHT: Predictor = Predictor::Full { dx: 1, dy: 0 };
const I_DOWN: Predictor = Predictor::Full { dx: 0, dy: 1 };
const H: Predictor = Predictor::Horizontal { dx: 0, dy: 0 };
const H_DOWN: Predictor = Predictor::Horizontal { dx: 0, dy: 1 };
const V: Predictor = Predictor::Vertical { dx: 0, dy: 0 };
const V_RIGHT: Predictor = Predictor::Vertical { dx: 1, dy: 0 };
const C: Predictor = Predictor::Center;

/// Writes predictor `pred` for a `W`x`height` block into `dest`.
fn predict_into<const W: usize>(
    pred: Predictor,
    dest: &mut [u8],
    dest_pitch: NonZeroUsize,
    src: &PlaneRef<'_>,
    height: NonZeroUsize,
) {
    const PAD: isize = FILTER_PAD_BEFORE as isize;

    let width = block_width::<W>();
    let pitch = src.stride();
    match pred {
        Predictor::Full { dx, dy } => {
            copy_block(dest, dest_pitch, src.window(dx, dy), pitch, width, height);
        }
        Predictor::Horizontal { dx, dy } => {
            filter_h(dest, dest_pitch, src.window(dx - PAD, dy), pitch, width, height);
        }
        Predictor::Vertical { dx, dy } => {
            filter_v(dest, dest_pitch, src.window(dx, dy - PAD), pitch, width, height);
        }
        Predictor::Center => {
            filter_c(dest, dest_pitch, src.window(-PAD, -PAD), pitch, width, height);
        }
    }
}

/// A single predictor written straight into the destination.
fn predict_one<const W: usize>(
    pred: Predictor,
    src: &PlaneRef<'_>,
    dst: &mut PlaneMut<'_>,
    height: NonZeroUsize,
) {
    let dest_pitch = dst.stride();
    predict_into::<W>(pred, dst.block_mut(), dest_pitch, src, height);
}

/// The rounded average of two predictors, built in scratch blocks.
fn predict_avg<const W: usize>(
    a: Predictor,
    b: Predictor,
    src: &PlaneRef<'_>,
    dst: &mut PlaneMut<'_>,
    height: NonZeroUsize,
) {
    let mut tmp1 = [0u8; SCRATCH_LEN];
    let mut tmp2 = [0u8; SCRATCH_LEN];
    predict_into::<W>(a, &mut tmp1, SCRATCH_PITCH, src, height);
    predict_into::<W>(b, &mut tmp2, SCRATCH_PITCH, src, height);

    let dest_pitch = dst.stride();
    pixel_avg(
        dst.block_mut(),
        dest_pitch,
        &tmp1,
        SCRATCH_PITCH,
        &tmp2,
        SCRATCH_PITCH,
        block_width::<W>(),
        height,
    );
}

// mc_xyHV: H is the horizontal quarter phase, V the vertical one.

fn mc_xy00<const W: usize>(src: &PlaneRef<'_>, dst: &mut PlaneMut<'_>, h: NonZeroUsize) {
    predict_one::<W>(I, src, dst, h);
}

fn mc_xy10<const W: usize>(src: &PlaneRef<'_>, dst: &mut PlaneMut<'_>, h: NonZeroUsize) {
    predict_avg::<W>(I, H, src, dst, h);
}

fn mc_xy20<const W: usize>(src: &PlaneRef<'_>, dst: &mut PlaneMut<'_>, h: NonZeroUsize) {
    predict_one::<W>(H, src, dst, h);
}

fn mc_xy30<const W: usize>(src: &PlaneRef<'_>, dst: &mut PlaneMut<'_>, h: NonZeroUsize) {
    predict_avg::<W>(I_RIGHT, H, src, dst, h);
}

fn mc_xy01<const W: usize>(src: &PlaneRef<'_>, dst: &mut PlaneMut<'_>, h: NonZeroUsize) {
    predict_avg::<W>(I, V, src, dst, h);
}

fn mc_xy11<const W: usize>(src: &PlaneRef<'_>, dst: &mut PlaneMut<'_>, h: NonZeroUsize) {
    predict_avg::<W>(V, H, src, dst, h);
}

fn mc_xy21<const W: usize>(src: &PlaneRef<'_>, dst: &mut PlaneMut<'_>, h: NonZeroUsize) {
    predict_avg::<W>(C, H, src, dst, h);
}

fn mc_xy31<const W: usize>(src: &PlaneRef<'_>, dst: &mut PlaneMut<'_>, h: NonZeroUsize) {
    predict_avg::<W>(V_RIGHT, H, src, dst, h);
}

fn mc_xy02<const W: usize>(src: &PlaneRef<'_>, dst: &mut PlaneMut<'_>, h: NonZeroUsize) {
    predict_one::<W>(V, src, dst, h);
}

fn mc_xy12<const W: usize>(src: &PlaneRef<'_>, dst: &mut PlaneMut<'_>, h: NonZeroUsize) {
    predict_avg::<W>(C, V, src, dst, h);
}

fn mc_xy22<const W: usize>(src: &PlaneRef<'_>, dst: &mut PlaneMut<'_>, h: NonZeroUsize) {
    predict_one::<W>(C, src, dst, h);
}

fn mc_xy32<const W: usize>(src: &PlaneRef<'_>, dst: &mut PlaneMut<'_>, h: NonZeroUsize) {
    predict_avg::<W>(C, V_RIGHT, src, dst, h);
}

fn mc_xy03<const W: usize>(src: &PlaneRef<'_>, dst: &mut PlaneMut<'_>, h: NonZeroUsize) {
    predict_avg::<W>(I_DOWN, V, src, dst, h);
}

fn mc_xy13<const W: usize>(src: &PlaneRef<'_>, dst: &mut PlaneMut<'_>, h: NonZeroUsize) {
    predict_avg::<W>(V, H_DOWN, src, dst, h);
}

fn mc_xy23<const W: usize>(src: &PlaneRef<'_>, dst: &mut PlaneMut<'_>, h: NonZeroUsize) {
    predict_avg::<W>(C, H_DOWN, src, dst, h);
}

fn mc_xy33<const W: usize>(src: &PlaneRef<'_>, dst: &mut PlaneMut<'_>, h: NonZeroUsize) {
    predict_avg::<W>(V_RIGHT, H_DOWN, src, dst, h);
}

/// Rows are the vertical phase, columns the horizontal phase.
const fn phase_table<const W: usize>() -> [[LumaMcFn; 4]; 4] {
    [
        [mc_xy00::<W>, mc_xy10::<W>, mc_xy20::<W>, mc_xy30::<W>],
        [mc_xy01::<W>, mc_xy11::<W>, mc_xy21::<W>, mc_xy31::<W>],
        [mc_xy02::<W>, mc_xy12::<W>, mc_xy22::<W>, mc_xy32::<W>],
        [mc_xy03::<W>, mc_xy13::<W>, mc_xy23::<W>, mc_xy33::<W>],
    ]
}

/// Indexed by `[BlockWidth::table_index()][vphase][hphase]`.
static LUMA_MC: [[[LumaMcFn; 4]; 4]; 3] = [phase_table::<4>(), phase_table::<8>(), phase_table::<16>()];

/// Quarter-pel luma prediction of one block.
///
/// Moves the source origin by the integer part of `mv`, then runs the routine
/// for its quarter-sample phase, writing `height` rows of `width` samples at
/// the destination origin. A zero `height` writes nothing.
///
/// # Errors
/// If `width` is not 4, 8 or 16, or `height` exceeds 16. The destination is
/// left untouched.
///
/// # Panics
/// If the destination cannot hold the block, or the shifted source origin or
/// the samples its filters read fall outside the source plane. Nothing is
/// written in that case. Callers pad reference planes by two samples before and
/// three after each block in both directions.
pub fn predict_luma(
    src: &PlaneRef<'_>,
    dst: &mut PlaneMut<'_>,
    mv: MotionVector,
    width: usize,
    height: usize,
) -> Result<()> {
    let block_width = BlockWidth::try_from(width).inspect_err(|e| error!("{e}"))?;
    validate_block_height(height).inspect_err(|e| error!("{e}"))?;
    let Some(rows) = NonZeroUsize::new(height) else {
        return Ok(());
    };

    let (dx, dy) = mv.integer_part();
    let (hphase, vphase) = mv.phase();
    let src = src.shifted(dx, dy);
    assert!(dst.fits(width, height), "destination too small for a {width}x{height} block");
    assert!(
        (hphase, vphase) == (0, 0) || src.has_filter_support(width, height),
        "source plane lacks filter padding around a {width}x{height} block"
    );

    trace!("luma mc {width}x{height} mv {mv:?}: phase ({hphase}, {vphase})");
    LUMA_MC[block_width.table_index()][vphase][hphase](&src, dst, rows);
    Ok(())
}

/// Motion compensation entry points, one slot per sample type.
#[derive(Clone, Copy, Default)]
pub struct McFunctions {
    table: [Option<McFn>; SampleType::COUNT],
}

impl McFunctions {
    #[must_use]
    pub const fn new() -> Self {
        McFunctions {
            table: [None; SampleType::COUNT],
        }
    }

    #[must_use]
    pub fn get(&self, sample: SampleType) -> Option<McFn> {
        self.table[sample as usize]
    }

    pub fn register(&mut self, sample: SampleType, func: McFn) {
        self.table[sample as usize] = Some(func);
    }
}

impl fmt::Debug for McFunctions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("McFunctions")
            .field("luma", &self.get(SampleType::Luma).is_some())
            .field("chroma", &self.get(SampleType::Chroma).is_some())
            .finish()
    }
}

/// Installs [`predict_luma`] in the luma slot. Other slots are left as they are.
pub fn mc_init(pf: &mut McFunctions) {
    pf.register(SampleType::Luma, predict_luma);
    debug!("luma motion compensation registered, {} backend", backend_name());
}
