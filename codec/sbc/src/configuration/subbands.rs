//!! @see: A2DP 4.3.2.4 Subbands

use serde::Serialize;

use crate::errors::{SbcCodecError, SbcCodecResult};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u32")]
pub enum Subbands {
    S4 = 0x02,
    S8 = 0x01,
}

impl Subbands {
    pub fn get_subband_count(&self) -> u32 {
        match self {
            Subbands::S4 => 4,
            Subbands::S8 => 8,
        }
    }

    pub fn from_count(count: u32) -> SbcCodecResult<Self> {
        match count {
            4 => Ok(Subbands::S4),
            8 => Ok(Subbands::S8),
            _ => Err(SbcCodecError::UnsupportedSubbands(count)),
        }
    }
}

impl From<Subbands> for u8 {
    fn from(value: Subbands) -> Self {
        value as u8
    }
}

impl From<Subbands> for u32 {
    fn from(value: Subbands) -> Self {
        value.get_subband_count()
    }
}

impl TryFrom<u8> for Subbands {
    type Error = SbcCodecError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x02 => Ok(Subbands::S4),
            0x01 => Ok(Subbands::S8),
            _ => Err(SbcCodecError::UnknownSubbandsCode(value)),
        }
    }
}
