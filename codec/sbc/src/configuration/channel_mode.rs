//!! @see: A2DP 4.3.2.2 Channel Mode

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::errors::SbcCodecError;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelMode {
    Mono = 0x08,
    DualChannel = 0x04,
    Stereo = 0x02,
    JointStereo = 0x01,
}

impl ChannelMode {
    pub const ALL: [ChannelMode; 4] = [
        ChannelMode::Mono,
        ChannelMode::DualChannel,
        ChannelMode::Stereo,
        ChannelMode::JointStereo,
    ];

    pub fn channels(&self) -> u32 {
        match self {
            ChannelMode::Mono => 1,
            ChannelMode::DualChannel | ChannelMode::Stereo | ChannelMode::JointStereo => 2,
        }
    }

    /// Snake-case name accepted by `FromStr`; matches the serialized form.
    pub fn identifier(&self) -> &'static str {
        match self {
            ChannelMode::Mono => "mono",
            ChannelMode::DualChannel => "dual_channel",
            ChannelMode::Stereo => "stereo",
            ChannelMode::JointStereo => "joint_stereo",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChannelMode::Mono => "Mono",
            ChannelMode::DualChannel => "Dual Channel",
            ChannelMode::Stereo => "Stereo",
            ChannelMode::JointStereo => "Joint Stereo",
        }
    }
}

impl fmt::Display for ChannelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ChannelMode {
    type Err = SbcCodecError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        ChannelMode::ALL
            .into_iter()
            .find(|mode| mode.identifier() == wanted)
            .ok_or_else(|| SbcCodecError::UnknownChannelMode(s.to_owned()))
    }
}

impl From<ChannelMode> for u8 {
    fn from(value: ChannelMode) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for ChannelMode {
    type Error = SbcCodecError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x08 => Ok(ChannelMode::Mono),
            0x04 => Ok(ChannelMode::DualChannel),
            0x02 => Ok(ChannelMode::Stereo),
            0x01 => Ok(ChannelMode::JointStereo),
            _ => Err(SbcCodecError::UnknownChannelModeCode(value)),
        }
    }
}
