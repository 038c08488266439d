use std::num::NonZeroUsize;

use anyhow::{Result, bail};

/// Widest block handled by a single prediction call.
pub const MAX_BLOCK_WIDTH: usize = 16;
/// Tallest block handled by a single prediction call. Scratch buffers are sized for this.
pub const MAX_BLOCK_HEIGHT: usize = 16;

/// Block widths that have a dedicated entry in the phase table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BlockWidth {
    W4 = 4,
    W8 = 8,
    W16 = 16,
}

impl BlockWidth {
    /// Row of the per-width dispatch table.
    #[must_use]
    pub const fn table_index(self) -> usize {
        match self {
            Self::W4 => 0,
            Self::W8 => 1,
            Self::W16 => 2,
        }
    }
}

impl TryFrom<usize> for BlockWidth {
    type Error = anyhow::Error;

    fn try_from(val: usize) -> Result<Self> {
        Ok(match val {
            4 => Self::W4,
            8 => Self::W8,
            16 => Self::W16,
            _ => bail!("Invalid block width, must be 4, 8, or 16, got {val}."),
        })
    }
}

impl From<BlockWidth> for usize {
    fn from(value: BlockWidth) -> Self {
        match value {
            BlockWidth::W4 => 4,
            BlockWidth::W8 => 8,
            BlockWidth::W16 => 16,
        }
    }
}

/// Which kind of plane a motion compensation function handles.
/// Only luma is provided by this crate; the chroma slot is filled elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleType {
    Luma = 0,
    Chroma = 1,
}

impl SampleType {
    pub const COUNT: usize = 2;
}

/// `W` as a [`NonZeroUsize`], checked at compile time.
pub(crate) const fn block_width<const W: usize>() -> NonZeroUsize {
    match NonZeroUsize::new(W) {
        Some(w) => w,
        None => panic!("block width must be non-zero"),
    }
}

/// Checks that a block height fits the scratch buffers.
pub fn validate_block_height(height: usize) -> Result<()> {
    if height > MAX_BLOCK_HEIGHT {
        bail!("Invalid block height, must be at most {MAX_BLOCK_HEIGHT}, got {height}.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_width_valid() {
        assert_eq!(BlockWidth::try_from(4usize).unwrap(), BlockWidth::W4);
        assert_eq!(BlockWidth::try_from(8usize).unwrap(), BlockWidth::W8);
        assert_eq!(BlockWidth::try_from(16usize).unwrap(), BlockWidth::W16);
    }

    #[test]
    fn test_block_width_invalid() {
        for w in [0usize, 1, 2, 3, 5, 7, 12, 15, 17, 32] {
            let err = BlockWidth::try_from(w).unwrap_err();
            assert!(err.to_string().contains(&format!("got {w}")));
        }
    }

    #[test]
    fn test_block_width_conversions() {
        for bw in [BlockWidth::W4, BlockWidth::W8, BlockWidth::W16] {
            assert_eq!(BlockWidth::try_from(usize::from(bw)).unwrap(), bw);
        }
        assert_eq!(block_width::<8>().get(), 8);
        assert_eq!(BlockWidth::W4.table_index(), 0);
        assert_eq!(BlockWidth::W8.table_index(), 1);
        assert_eq!(BlockWidth::W16.table_index(), 2);
    }

    #[test]
    fn test_block_height_limit() {
        assert!(validate_block_height(0).is_ok());
        assert!(validate_block_height(16).is_ok());
        assert!(validate_block_height(17).is_err());
    }
}
