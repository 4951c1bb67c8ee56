//! cachewire Decode Tool
//!
//! Decodes a captured protocol buffer and prints the resulting records.

use std::io::Read;

use cachewire::{Decoder, DecoderConfig};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

/// cachewire decoder
#[derive(Parser, Debug)]
#[command(name = "cachewire-decode")]
#[command(about = "Decode captured cache protocol buffers")]
#[command(version)]
struct Args {
    /// Input file (reads stdin when omitted)
    #[arg(short, long)]
    input: Option<String>,

    /// Treat \r, \n and \t in the input as escape sequences
    #[arg(short, long)]
    escaped: bool,

    /// Minimum request buffer length in bytes
    #[arg(short = 'm', long, default_value = "6")]
    min_len: usize,

    #[command(subcommand)]
    kind: Kind,
}

#[derive(Subcommand, Debug)]
enum Kind {
    /// Decode one or more pipelined requests
    Request,

    /// Decode a single response
    Response,

    /// Decode a heartbeat request (placeholder)
    HeartbeatRequest,

    /// Decode a heartbeat response (placeholder)
    HeartbeatResponse,
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,cachewire=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut buffer = match read_input(args.input.as_deref()) {
        Ok(b) => b,
        Err(e) => {
            tracing::error!("Failed to read input: {}", e);
            std::process::exit(1);
        }
    };
    if args.escaped {
        buffer = unescape(&buffer);
    }

    let config = DecoderConfig::builder().min_request_len(args.min_len).build();
    let decoder = Decoder::new(config);

    let outcome = match args.kind {
        Kind::Request => decoder.decode_requests(&buffer).map(|requests| {
            for request in requests {
                println!("{:?}", request);
            }
        }),
        Kind::Response => decoder
            .decode_response(&buffer)
            .map(|response| println!("{:?}", response)),
        Kind::HeartbeatRequest => decoder
            .decode_heartbeat_request(&buffer)
            .map(|heartbeat| println!("{:?}", heartbeat)),
        Kind::HeartbeatResponse => decoder
            .decode_heartbeat_response(&buffer)
            .map(|heartbeat| println!("{:?}", heartbeat)),
    };

    if let Err(e) = outcome {
        tracing::error!("Decode failed: {}", e);
        std::process::exit(1);
    }
}

fn read_input(path: Option<&str>) -> std::io::Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path),
        None => {
            let mut buffer = Vec::new();
            std::io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Expand `\r`, `\n`, `\t` and `\\`; other bytes pass through
fn unescape(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len());
    let mut bytes = raw.iter().copied();
    while let Some(b) = bytes.next() {
        if b != b'\\' {
            out.push(b);
            continue;
        }
        match bytes.next() {
            Some(b'r') => out.push(b'\r'),
            Some(b'n') => out.push(b'\n'),
            Some(b't') => out.push(b'\t'),
            Some(b'\\') => out.push(b'\\'),
            Some(other) => out.extend_from_slice(&[b'\\', other]),
            None => out.push(b'\\'),
        }
    }
    // Shells append a newline that is not part of the buffer
    if raw.last() == Some(&b'\n') {
        out.pop();
    }
    out
}
