use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SbcCodecError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("unknown sbc sampling frequency code: {0:#x}")]
    UnknownSamplingFrequencyCode(u8),
    #[error("unknown sbc channel mode code: {0:#x}")]
    UnknownChannelModeCode(u8),
    #[error("unknown sbc block length code: {0:#x}")]
    UnknownBlockLengthCode(u8),
    #[error("unknown sbc subbands code: {0:#x}")]
    UnknownSubbandsCode(u8),
    #[error("unknown sbc allocation method code: {0:#x}")]
    UnknownAllocationMethodCode(u8),
    #[error("unsupported sbc sampling frequency: {0} Hz")]
    UnsupportedSamplingFrequency(u32),
    #[error("unsupported sbc block length: {0}")]
    UnsupportedBlockLength(u32),
    #[error("unsupported sbc subbands count: {0}")]
    UnsupportedSubbands(u32),
    #[error("unknown sbc channel mode: {0}")]
    UnknownChannelMode(String),
    #[error("unknown sbc allocation method: {0}")]
    UnknownAllocationMethod(String),
}

pub type SbcCodecResult<T> = Result<T, SbcCodecError>;
