//!! @see: Advanced Audio Distribution Profile, 4.3.2 Codec Specific Information Elements
//!
//! The negotiated SBC configuration is four bytes:
//!
//! ```text
//! byte 0: sampling frequency (4) | channel mode (4)
//! byte 1: block length (4) | subbands (2) | allocation method (2)
//! byte 2: minimum bitpool
//! byte 3: maximum bitpool
//! ```

use allocation_method::AllocationMethod;
use block_length::BlockLength;
use channel_mode::ChannelMode;
use sampling_frequency::SamplingFrequency;
use serde::Serialize;
use subbands::Subbands;
use utils::traits::{fixed_packet::FixedPacket, reader::TryReadFromBytes};

pub mod allocation_method;
pub mod block_length;
pub mod channel_mode;
pub mod reader;
pub mod sampling_frequency;
pub mod subbands;
pub mod writer;

/// The codec element as it sits on the wire, codes not yet resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SbcCodecElement {
    pub sampling_frequency_code: u8, // 4 bits
    pub channel_mode_code: u8,       // 4 bits, byte boundary
    pub block_length_code: u8,       // 4 bits
    pub subbands_code: u8,           // 2 bits
    pub allocation_method_code: u8,  // 2 bits, byte boundary
    pub min_bitpool: u8,             // 8 bits
    pub max_bitpool: u8,             // 8 bits
}

impl FixedPacket for SbcCodecElement {
    fn bytes_count() -> usize {
        4
    }
}

impl SbcCodecElement {
    pub fn new(
        sampling_frequency: SamplingFrequency,
        channel_mode: ChannelMode,
        block_length: BlockLength,
        subbands: Subbands,
        allocation_method: AllocationMethod,
        min_bitpool: u8,
        max_bitpool: u8,
    ) -> Self {
        Self {
            sampling_frequency_code: sampling_frequency.into(),
            channel_mode_code: channel_mode.into(),
            block_length_code: block_length.into(),
            subbands_code: subbands.into(),
            allocation_method_code: allocation_method.into(),
            min_bitpool,
            max_bitpool,
        }
    }

    /// Some sources put the frequency code into the low nibble, so the low
    /// nibble is tried when the high one does not map.
    pub fn sampling_frequency(&self) -> Option<SamplingFrequency> {
        let resolved = SamplingFrequency::try_from(self.sampling_frequency_code)
            .or_else(|_| SamplingFrequency::try_from(self.channel_mode_code));
        if resolved.is_err() {
            tracing::debug!(
                "no sbc sampling frequency in byte 0 nibbles: high {:#x}, low {:#x}",
                self.sampling_frequency_code,
                self.channel_mode_code
            );
        }
        resolved.ok()
    }

    /// Mirror of [`Self::sampling_frequency`]: low nibble first, then high.
    pub fn channel_mode(&self) -> Option<ChannelMode> {
        let resolved = ChannelMode::try_from(self.channel_mode_code)
            .or_else(|_| ChannelMode::try_from(self.sampling_frequency_code));
        if resolved.is_err() {
            tracing::debug!(
                "no sbc channel mode in byte 0 nibbles: low {:#x}, high {:#x}",
                self.channel_mode_code,
                self.sampling_frequency_code
            );
        }
        resolved.ok()
    }

    pub fn block_length(&self) -> Option<BlockLength> {
        BlockLength::try_from(self.block_length_code)
            .inspect_err(|err| tracing::debug!("{}", err))
            .ok()
    }

    pub fn subbands(&self) -> Option<Subbands> {
        Subbands::try_from(self.subbands_code)
            .inspect_err(|err| tracing::debug!("{}", err))
            .ok()
    }

    pub fn allocation_method(&self) -> Option<AllocationMethod> {
        AllocationMethod::try_from(self.allocation_method_code)
            .inspect_err(|err| tracing::debug!("{}", err))
            .ok()
    }
}

/// Decoded snapshot of one negotiated SBC stream.
///
/// Built once by [`SbcConfiguration::decode`] and read-only afterwards.
/// Every enumerated field is resolved on its own, so an unknown code in one
/// of them leaves only that field empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SbcConfiguration {
    sample_rate: Option<SamplingFrequency>,
    channel_mode: Option<ChannelMode>,
    block_length: Option<BlockLength>,
    subbands: Option<Subbands>,
    allocation: Option<AllocationMethod>,
    min_bitpool: u8,
    max_bitpool: u8,
    transport_path: Option<String>,
    raw_bytes: Vec<u8>,
}

impl SbcConfiguration {
    /// Returns `None` when fewer than four bytes are given. Bytes past the
    /// fourth are kept in [`Self::raw_bytes`] but otherwise ignored.
    pub fn decode(raw_bytes: &[u8], transport_path: Option<&str>) -> Option<Self> {
        let element = match SbcCodecElement::try_read_from_bytes(raw_bytes) {
            Ok(Some(element)) => element,
            Ok(None) => {
                tracing::debug!(
                    "sbc configuration too short: {} bytes, need {}",
                    raw_bytes.len(),
                    SbcCodecElement::bytes_count()
                );
                return None;
            }
            Err(err) => {
                tracing::warn!("read sbc codec element failed: {}", err);
                return None;
            }
        };
        Some(Self::from_element(&element, raw_bytes, transport_path))
    }

    fn from_element(
        element: &SbcCodecElement,
        raw_bytes: &[u8],
        transport_path: Option<&str>,
    ) -> Self {
        Self {
            sample_rate: element.sampling_frequency(),
            channel_mode: element.channel_mode(),
            block_length: element.block_length(),
            subbands: element.subbands(),
            allocation: element.allocation_method(),
            min_bitpool: element.min_bitpool,
            max_bitpool: element.max_bitpool,
            transport_path: transport_path.map(str::to_owned),
            raw_bytes: raw_bytes.to_vec(),
        }
    }

    pub fn sample_rate(&self) -> Option<SamplingFrequency> {
        self.sample_rate
    }

    pub fn channel_mode(&self) -> Option<ChannelMode> {
        self.channel_mode
    }

    pub fn block_length(&self) -> Option<BlockLength> {
        self.block_length
    }

    pub fn subbands(&self) -> Option<Subbands> {
        self.subbands
    }

    pub fn allocation(&self) -> Option<AllocationMethod> {
        self.allocation
    }

    pub fn min_bitpool(&self) -> u8 {
        self.min_bitpool
    }

    pub fn max_bitpool(&self) -> u8 {
        self.max_bitpool
    }

    /// The bitpool used for bitrate estimates. Both bounds are always present
    /// once the record exists, so this is the maximum.
    pub fn effective_bitpool(&self) -> u8 {
        self.max_bitpool
    }

    pub fn transport_path(&self) -> Option<&str> {
        self.transport_path.as_deref()
    }

    pub fn raw_bytes(&self) -> &[u8] {
        &self.raw_bytes
    }
}
