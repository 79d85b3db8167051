use std::env;
use std::fs;
use std::io;
use std::process::ExitCode;

use rayon::prelude::*;
use tracing::info;

use phonecode_core::core::format;
use phonecode_core::NumberEncoder;

/// arg[1] - path to the dictionary file, one word per line.
/// arg[2] - path to the telephone-number file, one number per line.
/// Every encoding is printed to stdout as "<number>: <encoding>".
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("usage: phonecode <dictionary-file> <numbers-file>");
        return ExitCode::FAILURE;
    }

    let words = match read_lines(&args[1]) {
        Ok(words) => words,
        Err(err) => {
            eprintln!("{}: {}", args[1], err);
            return ExitCode::FAILURE;
        }
    };
    let numbers = match read_lines(&args[2]) {
        Ok(numbers) => numbers,
        Err(err) => {
            eprintln!("{}: {}", args[2], err);
            return ExitCode::FAILURE;
        }
    };
    info!(words = words.len(), numbers = numbers.len(), "inputs loaded");

    let encoder = NumberEncoder::new(words);

    // One task per number; blocks are reassembled in input order so the
    // output is deterministic regardless of scheduling.
    let blocks: Vec<Vec<String>> = numbers
        .par_iter()
        .map(|tn| {
            encoder
                .encode(tn)
                .into_iter()
                .map(|encoding| format::format_line(tn, &encoding))
                .collect()
        })
        .collect();

    let mut total = 0usize;
    for block in &blocks {
        for line in block {
            println!("{line}");
            total += 1;
        }
    }
    info!(lines = total, "done");

    ExitCode::SUCCESS
}

fn read_lines(path: &str) -> io::Result<Vec<String>> {
    Ok(fs::read_to_string(path)?
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
