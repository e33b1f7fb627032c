//! Example CLI: frame sample messages behind a fixed header, write
//! them to a file, and read or measure them back.

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use wiregram::{Const, Lazy, TimePoint, decode, encode, try_measure};

wiregram::wire_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum MsgType: u32 {
        Unknown = 0,
        DataRequest = 1,
        DataSeries = 2,
    }
}

wiregram::wire_record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct FixedHeader {
        pub version: Const<u16, 0xf001>,
        pub msg_type: MsgType,
        pub length: u32,
    }
}

/// Wire size of a `FixedHeader`.
const HEADER_LEN: usize = 10;

wiregram::wire_record! {
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct DataRequest {
        pub symbol: String,
        pub depth: u16,
    }
}

wiregram::wire_record! {
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct DataSeries {
        pub data_points: Vec<f64>,
        pub time_points: Vec<TimePoint>,
    }
}

#[derive(clap::Parser, Debug)]
#[command(name = "wiregram-cli", version, about = "Example CLI for wiregram")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// write <path>: frame a sample request and series into <path>
    Write {
        /// Output file for the framed messages
        path: PathBuf,
        /// Symbol carried by the request message
        #[arg(long, default_value = "GOOGL")]
        symbol: String,
        /// Number of data points in the series message
        #[arg(long, default_value_t = 3)]
        points: u16,
    },
    /// read <path>: decode every framed message and print it
    Read {
        /// File produced by `write`
        path: PathBuf,
    },
    /// measure <path>: report each payload's wire size without decoding it
    Measure {
        /// File produced by `write`
        path: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.cmd {
        Cmd::Write {
            path,
            symbol,
            points,
        } => cmd_write(path, symbol, points)?,
        Cmd::Read { path } => cmd_read(path)?,
        Cmd::Measure { path } => cmd_measure(path)?,
    }

    Ok(())
}

/// Encode `payload` after a reserved header slot, then backfill the
/// header with the payload's length. Returns bytes used.
fn frame<T: wiregram::Encode>(
    buf: &mut [u8],
    msg_type: MsgType,
    payload: &T,
) -> Result<usize, wiregram::EncodeError> {
    let body_rest = encode(&mut buf[HEADER_LEN..], payload)?.len();
    let body_len = buf.len() - HEADER_LEN - body_rest;

    let header = FixedHeader {
        version: Const::new(),
        msg_type,
        length: body_len as u32,
    };
    encode(&mut buf[..HEADER_LEN], &header)?;
    Ok(HEADER_LEN + body_len)
}

fn cmd_write(path: PathBuf, symbol: String, points: u16) -> Result<(), Box<dyn std::error::Error>> {
    let request = DataRequest { symbol, depth: 1 };

    let now = TimePoint::now();
    let series = DataSeries {
        data_points: (0..points).map(|i| 2.5 * f64::from(i) - 56.789).collect(),
        time_points: (0..points)
            .map(|i| TimePoint::from_unix_micros(now.unix_micros() + i64::from(i) * 5_000_000))
            .collect(),
    };

    for (value, stamp) in series.data_points.iter().zip(&series.time_points) {
        println!("data value: {value}, time point: {} us", stamp.unix_micros());
    }

    let mut buf = [0u8; 4096];
    let first = frame(&mut buf, MsgType::DataRequest, &request)?;
    let second = frame(&mut buf[first..], MsgType::DataSeries, &series)?;
    let total = first + second;

    fs::write(&path, &buf[..total])?;
    println!("wrote {total} bytes to {}", path.display());
    Ok(())
}

fn cmd_read(path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = fs::read(&path)?;
    println!("read {} bytes from {}", bytes.len(), path.display());

    let mut rest: &[u8] = &bytes;
    while !rest.is_empty() {
        let (header, tail) = decode::<FixedHeader>(rest)?;
        rest = match header.msg_type {
            MsgType::DataRequest => {
                let (req, tail) = decode::<DataRequest>(tail)?;
                println!("symbol: {}, depth: {}", req.symbol, req.depth);
                tail
            }
            MsgType::DataSeries => {
                let (series, tail) = decode::<DataSeries>(tail)?;
                for (value, stamp) in series.data_points.iter().zip(&series.time_points) {
                    println!("data value: {value}, time point: {} us", stamp.unix_micros());
                }
                tail
            }
            MsgType::Unknown => {
                println!("unhandled message type, skipping {} bytes", header.length);
                &tail[header.length as usize..]
            }
        };
    }
    Ok(())
}

fn cmd_measure(path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = fs::read(&path)?;

    let mut rest: &[u8] = &bytes;
    while !rest.is_empty() {
        let (header, tail) = decode::<FixedHeader>(rest)?;
        let measured = match header.msg_type {
            MsgType::DataRequest => try_measure::<DataRequest>(tail)?,
            MsgType::DataSeries => {
                // a deferred view carves the payload without decoding it
                let lazy = Lazy::<DataSeries>::from_buffer(tail)?;
                lazy.buffer_size()
            }
            MsgType::Unknown => header.length as usize,
        };
        println!(
            "{:?}: header says {} bytes, sizer says {measured}",
            header.msg_type, header.length
        );
        rest = &tail[measured..];
    }
    Ok(())
}
