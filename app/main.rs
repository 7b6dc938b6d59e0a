use std::{io, process::ExitCode};

use clap::Parser;
use codec_sbc::{
    bitrate::SbcBitrateParams,
    configuration::{
        SbcCodecElement, SbcConfiguration, block_length::BlockLength,
        sampling_frequency::SamplingFrequency, subbands::Subbands,
    },
};

use crate::{
    cli::{AppCli, CalculateArgs, Command, DecodeArgs, EncodeArgs},
    config::AppConfig,
    errors::{AppError, AppResult},
    report::{CalculateReport, DecodeReport, EncodeReport, Report},
    source::{BusctlSource, ConfigurationSource, HexSource, parse_busctl_string, read_input},
    util::init_logger,
};

mod cli;
mod config;
mod errors;
mod report;
mod source;
mod util;

fn main() -> ExitCode {
    let cli_args = AppCli::parse();

    let mut config = match AppConfig::new(cli_args.config.clone()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("load config failed: {}", err);
            return ExitCode::FAILURE;
        }
    };
    config.apply(&cli_args);
    if let Err(err) = config.validate() {
        eprintln!("invalid config: {}", err);
        return ExitCode::FAILURE;
    }

    let _guard = match init_logger(&config.logger) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!("config: {:?}", config);

    match run(cli_args.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("sbc_bitrate failed: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, config: &AppConfig) -> AppResult<()> {
    let mut out = io::stdout().lock();
    match command {
        Command::Decode(args) => decode(args, config, &mut out),
        Command::Calculate(args) => calculate(args, config, &mut out),
        Command::Encode(args) => encode(args, config, &mut out),
    }
}

fn decode<W: io::Write>(args: DecodeArgs, config: &AppConfig, out: &mut W) -> AppResult<()> {
    let source: Box<dyn ConfigurationSource> = match args.busctl {
        Some(path) => Box::new(BusctlSource::new(path, args.transport)),
        None => Box::new(HexSource::new(args.bytes, args.transport)),
    };
    let raw = source
        .fetch()?
        .ok_or_else(|| AppError::NoConfiguration(format!("{} is empty", source.describe())))?;
    tracing::info!(
        "read {} configuration bytes from {}",
        raw.bytes.len(),
        source.describe()
    );

    let transport_state = match args.state_file.as_ref() {
        Some(path) => parse_busctl_string(&read_input(path)?),
        None => None,
    };

    let configuration = SbcConfiguration::decode(&raw.bytes, raw.transport_path.as_deref())
        .ok_or_else(|| {
            AppError::NoConfiguration(format!(
                "{} bytes is too short for an sbc configuration",
                raw.bytes.len()
            ))
        })?;
    let report = DecodeReport::new(
        &configuration,
        config.report.bitpool_override,
        transport_state,
    );
    report.write(out, config.report.format)
}

fn calculate<W: io::Write>(args: CalculateArgs, config: &AppConfig, out: &mut W) -> AppResult<()> {
    let params = SbcBitrateParams {
        bitpool: args.bitpool,
        sample_rate: args.sample_rate,
        channel_mode: args.channel_mode,
        block_length: args.block_length,
        subbands: args.subbands,
    };
    let report = CalculateReport::new(&params);
    report.write(out, config.report.format)
}

fn encode<W: io::Write>(args: EncodeArgs, config: &AppConfig, out: &mut W) -> AppResult<()> {
    let element = SbcCodecElement::new(
        SamplingFrequency::from_hz(args.sample_rate)?,
        args.channel_mode,
        BlockLength::from_blocks(args.block_length)?,
        Subbands::from_count(args.subbands)?,
        args.allocation,
        args.min_bitpool,
        args.max_bitpool,
    );
    if args.min_bitpool > args.max_bitpool {
        tracing::warn!(
            "min bitpool {} is above max bitpool {}",
            args.min_bitpool,
            args.max_bitpool
        );
    }
    let report = EncodeReport::new(&element)?;
    report.write(out, config.report.format)
}
