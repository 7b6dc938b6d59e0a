//! Byte sources for the configuration blob.
//!
//! The blob normally lives in the `Configuration` property of a BlueZ
//! `org.bluez.MediaTransport1` object. Fetching it from the bus is left to
//! the caller; these sources take what the caller already has, either bytes
//! typed on the command line or the text `busctl get-property` printed.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use utils::bytes::{hex_to_bytes, parse_int_auto_radix};

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawConfiguration {
    pub(crate) bytes: Vec<u8>,
    pub(crate) transport_path: Option<String>,
}

pub(crate) trait ConfigurationSource {
    fn describe(&self) -> String;
    /// `Ok(None)` when the source holds no configuration bytes.
    fn fetch(&self) -> AppResult<Option<RawConfiguration>>;
}

pub(crate) struct HexSource {
    tokens: Vec<String>,
    transport_path: Option<String>,
}

impl HexSource {
    pub(crate) fn new(tokens: Vec<String>, transport_path: Option<String>) -> Self {
        Self {
            tokens,
            transport_path,
        }
    }
}

impl ConfigurationSource for HexSource {
    fn describe(&self) -> String {
        format!("command line bytes {:?}", self.tokens)
    }

    fn fetch(&self) -> AppResult<Option<RawConfiguration>> {
        let bytes = parse_byte_tokens(&self.tokens)?;
        if bytes.is_empty() {
            return Ok(None);
        }
        Ok(Some(RawConfiguration {
            bytes,
            transport_path: self.transport_path.clone(),
        }))
    }
}

pub(crate) struct BusctlSource {
    path: PathBuf,
    transport_path: Option<String>,
}

impl BusctlSource {
    pub(crate) fn new(path: PathBuf, transport_path: Option<String>) -> Self {
        Self {
            path,
            transport_path,
        }
    }
}

impl ConfigurationSource for BusctlSource {
    fn describe(&self) -> String {
        format!("busctl output {}", self.path.display())
    }

    fn fetch(&self) -> AppResult<Option<RawConfiguration>> {
        let output = read_input(&self.path)?;
        Ok(
            parse_busctl_byte_array(&output).map(|bytes| RawConfiguration {
                bytes,
                transport_path: self.transport_path.clone(),
            }),
        )
    }
}

/// `-` reads stdin.
pub(crate) fn read_input(path: &Path) -> io::Result<String> {
    if path == Path::new("-") {
        io::read_to_string(io::stdin())
    } else {
        fs::read_to_string(path)
    }
}

fn normalize_byte(value: i64) -> u8 {
    let byte = (value & 0xff) as u8;
    if i64::from(byte) != value {
        tracing::debug!("byte value {} truncated to {:#04x}", value, byte);
    }
    byte
}

/// A lone token longer than one byte is read as packed hex (`21150235`),
/// otherwise every token is one byte in any radix `0x`/`0o`/`0b`/decimal.
pub(crate) fn parse_byte_tokens(tokens: &[String]) -> AppResult<Vec<u8>> {
    if let [token] = tokens {
        let digits = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token.as_str());
        if digits.len() > 2 {
            if let Some(bytes) = hex_to_bytes(digits) {
                return Ok(bytes);
            }
        }
    }
    tokens
        .iter()
        .flat_map(|token| token.split(|c: char| c == ',' || c.is_whitespace()))
        .filter(|token| !token.is_empty())
        .map(|token| {
            parse_int_auto_radix(token)
                .map(normalize_byte)
                .ok_or_else(|| AppError::InvalidByte(token.to_owned()))
        })
        .collect()
}

/// Parses the `ay` form printed by `busctl get-property`, e.g.
/// `ay 4 33 21 2 53`. The declared count limits how many values are taken;
/// when it is unreadable every remaining token is used, and a negative count
/// yields no blob. Values that do not parse are skipped.
pub(crate) fn parse_busctl_byte_array(output: &str) -> Option<Vec<u8>> {
    let tokens: Vec<&str> = output.split_whitespace().collect();
    let [signature, count, values @ ..] = tokens.as_slice() else {
        return None;
    };
    if *signature != "ay" || values.is_empty() {
        return None;
    }
    let count = match parse_int_auto_radix(count) {
        Some(count) if count < 0 => {
            tracing::debug!("busctl declared a negative byte count: {}", count);
            return None;
        }
        Some(count) => usize::try_from(count).unwrap_or(values.len()),
        None => values.len(),
    };
    let bytes: Vec<u8> = values
        .iter()
        .take(count)
        .filter_map(|token| {
            let value = parse_int_auto_radix(token);
            if value.is_none() {
                tracing::debug!("skip unexpected busctl byte token: {}", token);
            }
            value.map(normalize_byte)
        })
        .collect();
    if bytes.is_empty() { None } else { Some(bytes) }
}

/// Extracts the value from busctl string replies such as `s "active"`.
pub(crate) fn parse_busctl_string(output: &str) -> Option<String> {
    let text = output.trim();
    if text.is_empty() {
        return None;
    }
    let value = match text.split_once(' ') {
        Some((_, value)) => value,
        None => text,
    }
    .trim();
    let value = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value);
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}
