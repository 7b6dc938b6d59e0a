//!! @see: A2DP 4.3.2.5 Allocation Method

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::errors::SbcCodecError;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationMethod {
    Snr = 0x02,
    Loudness = 0x01,
}

impl fmt::Display for AllocationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocationMethod::Snr => f.write_str("SNR"),
            AllocationMethod::Loudness => f.write_str("Loudness"),
        }
    }
}

impl FromStr for AllocationMethod {
    type Err = SbcCodecError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "snr" => Ok(AllocationMethod::Snr),
            "loudness" => Ok(AllocationMethod::Loudness),
            _ => Err(SbcCodecError::UnknownAllocationMethod(s.to_owned())),
        }
    }
}

impl From<AllocationMethod> for u8 {
    fn from(value: AllocationMethod) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for AllocationMethod {
    type Error = SbcCodecError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x02 => Ok(AllocationMethod::Snr),
            0x01 => Ok(AllocationMethod::Loudness),
            _ => Err(SbcCodecError::UnknownAllocationMethodCode(value)),
        }
    }
}
