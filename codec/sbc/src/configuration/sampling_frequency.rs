//!! @see: A2DP 4.3.2.1 Sampling Frequency

use serde::Serialize;

use crate::errors::{SbcCodecError, SbcCodecResult};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u32")]
pub enum SamplingFrequency {
    F16000 = 0x08,
    F32000 = 0x04,
    F44100 = 0x02,
    F48000 = 0x01,
}

impl SamplingFrequency {
    pub fn get_sampling_frequency(&self) -> u32 {
        match self {
            SamplingFrequency::F16000 => 16000,
            SamplingFrequency::F32000 => 32000,
            SamplingFrequency::F44100 => 44100,
            SamplingFrequency::F48000 => 48000,
        }
    }

    pub fn from_hz(frequency: u32) -> SbcCodecResult<Self> {
        match frequency {
            16000 => Ok(SamplingFrequency::F16000),
            32000 => Ok(SamplingFrequency::F32000),
            44100 => Ok(SamplingFrequency::F44100),
            48000 => Ok(SamplingFrequency::F48000),
            _ => Err(SbcCodecError::UnsupportedSamplingFrequency(frequency)),
        }
    }
}

impl From<SamplingFrequency> for u8 {
    fn from(value: SamplingFrequency) -> Self {
        value as u8
    }
}

impl From<SamplingFrequency> for u32 {
    fn from(value: SamplingFrequency) -> Self {
        value.get_sampling_frequency()
    }
}

impl TryFrom<u8> for SamplingFrequency {
    type Error = SbcCodecError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x08 => Ok(SamplingFrequency::F16000),
            0x04 => Ok(SamplingFrequency::F32000),
            0x02 => Ok(SamplingFrequency::F44100),
            0x01 => Ok(SamplingFrequency::F48000),
            _ => Err(SbcCodecError::UnknownSamplingFrequencyCode(value)),
        }
    }
}
