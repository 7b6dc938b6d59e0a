//!! @see: A2DP 4.3.2.3 Block Length

use serde::Serialize;

use crate::errors::{SbcCodecError, SbcCodecResult};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u32")]
pub enum BlockLength {
    B4 = 0x08,
    B8 = 0x04,
    B12 = 0x02,
    B16 = 0x01,
}

impl BlockLength {
    pub fn get_block_count(&self) -> u32 {
        match self {
            BlockLength::B4 => 4,
            BlockLength::B8 => 8,
            BlockLength::B12 => 12,
            BlockLength::B16 => 16,
        }
    }

    pub fn from_blocks(blocks: u32) -> SbcCodecResult<Self> {
        match blocks {
            4 => Ok(BlockLength::B4),
            8 => Ok(BlockLength::B8),
            12 => Ok(BlockLength::B12),
            16 => Ok(BlockLength::B16),
            _ => Err(SbcCodecError::UnsupportedBlockLength(blocks)),
        }
    }
}

impl From<BlockLength> for u8 {
    fn from(value: BlockLength) -> Self {
        value as u8
    }
}

impl From<BlockLength> for u32 {
    fn from(value: BlockLength) -> Self {
        value.get_block_count()
    }
}

impl TryFrom<u8> for BlockLength {
    type Error = SbcCodecError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x08 => Ok(BlockLength::B4),
            0x04 => Ok(BlockLength::B8),
            0x02 => Ok(BlockLength::B12),
            0x01 => Ok(BlockLength::B16),
            _ => Err(SbcCodecError::UnknownBlockLengthCode(value)),
        }
    }
}
