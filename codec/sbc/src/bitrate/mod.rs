//!! @see: A2DP Appendix B, Technical Specification of SBC, 12.9 Calculation of Bit Rate and Frame Length

use serde::Serialize;

use crate::configuration::{SbcConfiguration, channel_mode::ChannelMode};

#[cfg(test)]
mod test;

pub const FRAME_HEADER_BYTES: u64 = 4;
pub const DEFAULT_BLOCK_LENGTH: u32 = 16;
pub const DEFAULT_SUBBANDS: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SbcBitrateParams {
    pub bitpool: u32,
    pub sample_rate: u32,
    pub channel_mode: ChannelMode,
    pub block_length: u32,
    pub subbands: u32,
}

/// Byte and sample geometry of one SBC frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SbcFrameLayout {
    pub channels: u64,
    pub payload_bits: u64,
    pub scale_factor_bytes: u64,
    pub frame_length: u64,
    pub samples_per_frame: u64,
}

impl SbcFrameLayout {
    /// `None` when any count is zero or the products overflow.
    pub fn new(params: &SbcBitrateParams) -> Option<Self> {
        if params.bitpool == 0
            || params.sample_rate == 0
            || params.block_length == 0
            || params.subbands == 0
        {
            return None;
        }
        let bitpool = u64::from(params.bitpool);
        let block_length = u64::from(params.block_length);
        let subbands = u64::from(params.subbands);
        let channels = u64::from(params.channel_mode.channels());

        let blocks_bits = block_length.checked_mul(bitpool)?;
        let payload_bits = match params.channel_mode {
            ChannelMode::DualChannel => blocks_bits.checked_mul(channels)?,
            // join bits; tiny bitpools keep the plain product
            ChannelMode::JointStereo => blocks_bits
                .checked_sub(subbands)
                .filter(|bits| *bits > 0)
                .unwrap_or(blocks_bits),
            // bit allocation is shared between channels
            ChannelMode::Mono | ChannelMode::Stereo => blocks_bits,
        };

        let scale_factor_bytes = subbands.checked_mul(4)?.checked_mul(channels)? / 8;
        let frame_length = FRAME_HEADER_BYTES
            .checked_add(scale_factor_bytes)?
            .checked_add(payload_bits.div_ceil(8))?;
        let samples_per_frame = block_length.checked_mul(subbands)?;

        Some(Self {
            channels,
            payload_bits,
            scale_factor_bytes,
            frame_length,
            samples_per_frame,
        })
    }

    /// Rounds half up.
    pub fn bitrate(&self, sample_rate: u32) -> Option<u64> {
        if self.samples_per_frame == 0 {
            return None;
        }
        let numerator = self
            .frame_length
            .checked_mul(8)?
            .checked_mul(u64::from(sample_rate))?;
        let denominator = self.samples_per_frame;
        let bitrate = numerator.checked_add(denominator / 2)? / denominator;
        (bitrate > 0).then_some(bitrate)
    }
}

/// Nominal SBC bitrate in bits per second.
pub fn calculate_bitrate(params: &SbcBitrateParams) -> Option<u64> {
    SbcFrameLayout::new(params)?.bitrate(params.sample_rate)
}

impl SbcConfiguration {
    /// Resolves calculator input from the decoded record. Missing block
    /// length and subbands take the SBC defaults of 16 and 8; a missing sample
    /// rate or channel mode leaves nothing to compute.
    pub fn bitrate_params(&self, bitpool_override: Option<u32>) -> Option<SbcBitrateParams> {
        let bitpool = bitpool_override.unwrap_or_else(|| u32::from(self.effective_bitpool()));
        let sample_rate = self.sample_rate()?.get_sampling_frequency();
        let channel_mode = self.channel_mode()?;
        let block_length = self
            .block_length()
            .map_or(DEFAULT_BLOCK_LENGTH, |v| v.get_block_count());
        let subbands = self
            .subbands()
            .map_or(DEFAULT_SUBBANDS, |v| v.get_subband_count());
        Some(SbcBitrateParams {
            bitpool,
            sample_rate,
            channel_mode,
            block_length,
            subbands,
        })
    }

    pub fn frame_layout(&self, bitpool_override: Option<u32>) -> Option<SbcFrameLayout> {
        SbcFrameLayout::new(&self.bitrate_params(bitpool_override)?)
    }

    pub fn bitrate(&self, bitpool_override: Option<u32>) -> Option<u64> {
        calculate_bitrate(&self.bitrate_params(bitpool_override)?)
    }
}
