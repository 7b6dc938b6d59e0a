use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use codec_sbc::configuration::{
    allocation_method::AllocationMethod, channel_mode::ChannelMode,
};

use crate::config::ReportFormat;

/// Decode negotiated A2DP SBC configurations and estimate their bitrate.
#[derive(Parser)]
#[command(version, about, long_about)]
pub(crate) struct AppCli {
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub(crate) config: Option<PathBuf>,
    #[arg(long, value_name = "LOG_LEVEL", global = true)]
    pub(crate) log_level: Option<String>,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Decode a configuration blob and report the stream it describes
    Decode(DecodeArgs),
    /// Compute the bitrate for explicit SBC parameters
    Calculate(CalculateArgs),
    /// Build a configuration blob from SBC parameters
    Encode(EncodeArgs),
}

#[derive(Args)]
pub(crate) struct DecodeArgs {
    /// Configuration bytes, either `0x21 0x15 2 53` or packed `21150235`
    #[arg(value_name = "BYTES", conflicts_with = "busctl", required_unless_present = "busctl")]
    pub(crate) bytes: Vec<String>,
    /// Output of `busctl get-property ... Configuration`, `-` reads stdin
    #[arg(long, value_name = "FILE")]
    pub(crate) busctl: Option<PathBuf>,
    /// Output of `busctl get-property ... State`
    #[arg(long, value_name = "FILE")]
    pub(crate) state_file: Option<PathBuf>,
    /// Media transport object path the blob belongs to
    #[arg(long, value_name = "PATH")]
    pub(crate) transport: Option<String>,
    /// Use this bitpool instead of the negotiated maximum
    #[arg(long, value_name = "BITPOOL")]
    pub(crate) bitpool: Option<u32>,
    #[arg(long, value_enum)]
    pub(crate) format: Option<ReportFormat>,
}

#[derive(Args)]
pub(crate) struct CalculateArgs {
    #[arg(long)]
    pub(crate) bitpool: u32,
    #[arg(long, default_value_t = 44100)]
    pub(crate) sample_rate: u32,
    /// mono, dual_channel, stereo or joint_stereo
    #[arg(long, default_value = "joint_stereo")]
    pub(crate) channel_mode: ChannelMode,
    #[arg(long, default_value_t = 16)]
    pub(crate) block_length: u32,
    #[arg(long, default_value_t = 8)]
    pub(crate) subbands: u32,
    #[arg(long, value_enum)]
    pub(crate) format: Option<ReportFormat>,
}

#[derive(Args)]
pub(crate) struct EncodeArgs {
    #[arg(long, default_value_t = 44100)]
    pub(crate) sample_rate: u32,
    #[arg(long, default_value = "joint_stereo")]
    pub(crate) channel_mode: ChannelMode,
    #[arg(long, default_value_t = 16)]
    pub(crate) block_length: u32,
    #[arg(long, default_value_t = 8)]
    pub(crate) subbands: u32,
    /// snr or loudness
    #[arg(long, default_value = "loudness")]
    pub(crate) allocation: AllocationMethod,
    #[arg(long, default_value_t = 2)]
    pub(crate) min_bitpool: u8,
    #[arg(long, default_value_t = 53)]
    pub(crate) max_bitpool: u8,
    #[arg(long, value_enum)]
    pub(crate) format: Option<ReportFormat>,
}

impl Command {
    pub(crate) fn format(&self) -> Option<ReportFormat> {
        match self {
            Command::Decode(args) => args.format,
            Command::Calculate(args) => args.format,
            Command::Encode(args) => args.format,
        }
    }
}
