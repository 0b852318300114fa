//! rock32: pipe bytes through the base-32 codec.
//!
//! Selects one of the two alphabet handles and a direction, then copies
//! input to output through the matching streaming adapter. Any error goes
//! to stderr and the process exits nonzero; partial output written before
//! the failure point stands as-is.

mod config;

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use rock32_core::{StreamDecoder, StreamEncoder, LWR_ENCODING, STD_ENCODING};

use config::Config;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("rock32: {msg}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = run(&config) {
        eprintln!("rock32: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(config: &Config) -> io::Result<()> {
    let mut input = open_input(config.input.as_deref())?;
    let output = open_output(config.output.as_deref())?;

    let encoding = if config.lowercase {
        &LWR_ENCODING
    } else {
        &STD_ENCODING
    };

    if config.decode {
        let mut stream = StreamDecoder::new(encoding, &mut input);
        let mut output = output;
        io::copy(&mut stream, &mut output)?;
        output.flush()
    } else {
        let mut stream = StreamEncoder::new(encoding, output);
        io::copy(&mut input, &mut stream)?;
        stream.finish()?.flush()
    }
}

fn open_input(path: Option<&Path>) -> io::Result<Box<dyn Read>> {
    match path {
        None => Ok(Box::new(io::stdin().lock())),
        Some(p) if p.as_os_str() == "-" => Ok(Box::new(io::stdin().lock())),
        Some(p) => Ok(Box::new(File::open(p)?)),
    }
}

fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    match path {
        None => Ok(Box::new(io::stdout().lock())),
        Some(p) if p.as_os_str() == "-" => Ok(Box::new(io::stdout().lock())),
        // Always created/truncated for writing, existing file or not.
        Some(p) => Ok(Box::new(File::create(p)?)),
    }
}
