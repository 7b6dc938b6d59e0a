use std::{
    fmt,
    io::{self, Write},
};

use codec_sbc::{
    bitrate::{SbcBitrateParams, SbcFrameLayout, calculate_bitrate},
    configuration::{SbcCodecElement, SbcConfiguration, channel_mode::ChannelMode},
};
use serde::Serialize;
use utils::bytes::{bytes_to_hex, bytes_to_spaced_hex};

use crate::{config::ReportFormat, errors::AppResult};

pub(crate) fn format_bitrate(bps: Option<u64>) -> String {
    match bps {
        Some(bps) => format!("{:.1} kbps", bps as f64 / 1000.0),
        None => "Unknown kbps".to_owned(),
    }
}

fn format_optional<T: fmt::Display>(value: Option<T>, unit: &str) -> String {
    match value {
        Some(value) => format!("{}{}", value, unit),
        None => "Unknown".to_owned(),
    }
}

pub(crate) trait Report: Serialize {
    fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()>;

    fn write<W: Write>(&self, out: &mut W, format: ReportFormat) -> AppResult<()> {
        match format {
            ReportFormat::Text => self.write_text(out)?,
            ReportFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, self)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct DecodeReport<'a> {
    #[serde(flatten)]
    configuration: &'a SbcConfiguration,
    transport_state: Option<String>,
    effective_bitpool: u8,
    bitpool_override: Option<u32>,
    frame_layout: Option<SbcFrameLayout>,
    bitrate_bps: Option<u64>,
}

impl<'a> DecodeReport<'a> {
    pub(crate) fn new(
        configuration: &'a SbcConfiguration,
        bitpool_override: Option<u32>,
        transport_state: Option<String>,
    ) -> Self {
        Self {
            configuration,
            transport_state,
            effective_bitpool: configuration.effective_bitpool(),
            bitpool_override,
            frame_layout: configuration.frame_layout(bitpool_override),
            bitrate_bps: configuration.bitrate(bitpool_override),
        }
    }

    fn frame_line(&self) -> Option<String> {
        let mut parts = vec![];
        if let Some(block_length) = self.configuration.block_length() {
            parts.push(format!("{} blocks", block_length.get_block_count()));
        }
        if let Some(subbands) = self.configuration.subbands() {
            parts.push(format!("{} subbands", subbands.get_subband_count()));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" / "))
        }
    }
}

impl Report for DecodeReport<'_> {
    fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let configuration = self.configuration;
        if let Some(path) = configuration.transport_path() {
            writeln!(out, "Transport: {}", path)?;
        }
        if let Some(state) = self.transport_state.as_ref() {
            writeln!(out, "State: {}", state)?;
        }
        writeln!(out, "Codec: SBC")?;
        writeln!(
            out,
            "Sample Rate: {}",
            format_optional(
                configuration.sample_rate().map(|v| v.get_sampling_frequency()),
                " Hz"
            )
        )?;
        writeln!(
            out,
            "Channel Mode: {}",
            format_optional(configuration.channel_mode(), "")
        )?;
        if let Some(frame) = self.frame_line() {
            writeln!(out, "SBC Frame: {}", frame)?;
        }
        writeln!(
            out,
            "Allocation: {}",
            format_optional(configuration.allocation(), "")
        )?;
        match self.bitpool_override {
            Some(bitpool) => writeln!(
                out,
                "Bitpool: {}..{} (override {})",
                configuration.min_bitpool(),
                configuration.max_bitpool(),
                bitpool
            )?,
            None => writeln!(
                out,
                "Bitpool: {}..{} (effective {})",
                configuration.min_bitpool(),
                configuration.max_bitpool(),
                self.effective_bitpool
            )?,
        }
        if let Some(layout) = self.frame_layout.as_ref() {
            writeln!(out, "Frame Length: {} bytes", layout.frame_length)?;
        }
        writeln!(out, "Bitrate: {}", format_bitrate(self.bitrate_bps))?;
        writeln!(out, "Raw: {}", bytes_to_spaced_hex(configuration.raw_bytes()))?;
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CalculateReport {
    bitpool: u32,
    sample_rate: u32,
    channel_mode: ChannelMode,
    block_length: u32,
    subbands: u32,
    frame_layout: Option<SbcFrameLayout>,
    bitrate_bps: Option<u64>,
}

impl CalculateReport {
    pub(crate) fn new(params: &SbcBitrateParams) -> Self {
        Self {
            bitpool: params.bitpool,
            sample_rate: params.sample_rate,
            channel_mode: params.channel_mode,
            block_length: params.block_length,
            subbands: params.subbands,
            frame_layout: SbcFrameLayout::new(params),
            bitrate_bps: calculate_bitrate(params),
        }
    }
}

impl Report for CalculateReport {
    fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "Parameters: bitpool {}, {} Hz, {}, {} blocks / {} subbands",
            self.bitpool, self.sample_rate, self.channel_mode, self.block_length, self.subbands
        )?;
        if let Some(layout) = self.frame_layout.as_ref() {
            writeln!(out, "Frame Length: {} bytes", layout.frame_length)?;
        }
        match self.bitrate_bps {
            Some(bps) => writeln!(out, "Bitrate: {} bps ({})", bps, format_bitrate(Some(bps)))?,
            None => writeln!(out, "Bitrate: {}", format_bitrate(None))?,
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct EncodeReport {
    bytes: Vec<u8>,
    hex: String,
}

impl EncodeReport {
    pub(crate) fn new(element: &SbcCodecElement) -> AppResult<Self> {
        let bytes = element.to_bytes()?;
        let hex = bytes_to_hex(&bytes);
        Ok(Self { bytes, hex })
    }
}

impl Report for EncodeReport {
    fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Configuration: {}", bytes_to_spaced_hex(&self.bytes))?;
        writeln!(out, "Packed: {}", self.hex)?;
        Ok(())
    }
}
