//! Host driver for the capture-game engine
//!
//! Reads one JSON request per line on stdin and writes one JSON response per
//! line on stdout. Logging goes to stderr (`RUST_LOG=debug` for details).

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use gobot::protocol::{Host, Request};

#[derive(Parser, Debug)]
#[command(author, version, about = "Go-style capture engine speaking JSON lines", long_about = None)]
struct Args {
    /// Start a game of this size before reading requests
    #[arg(long)]
    size: Option<usize>,

    /// Human color for the initial game: 'b'/'black' or 'w'/'white'
    #[arg(long, default_value = "black")]
    color: String,
}

fn parse_color(color_str: &str) -> Result<u8> {
    match color_str.to_lowercase().as_str() {
        "b" | "black" | "1" => Ok(1),
        "w" | "white" | "2" => Ok(2),
        _ => anyhow::bail!("Invalid color: use 'black' or 'white'"),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut host = Host::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(size) = args.size {
        let human_color = parse_color(&args.color)?;
        let response = host.handle(Request::StartGame { size, human_color })?;
        serde_json::to_writer(&mut out, &response)?;
        writeln!(out)?;
        out.flush()?;
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let response = host.handle_line(&line);
        serde_json::to_writer(&mut out, &response)?;
        writeln!(out)?;
        out.flush()?;
    }

    Ok(())
}
