//! Command-line driver for freqtop.
//!
//! Usage: freqtop <file> [k] [--stop-words <path>] [--stem] [--out <dir>]
//!
//! Reads one text file, prints the top-K report to stdout, and optionally
//! writes a rotated artifact into `--out` (keeping the 10 newest).

use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;

use freqtop::analyzer::{Analyzer, AnalyzerConfig};
use freqtop::sink::ReportSink;
use freqtop::text::{StopWords, SuffixTable};

const DEFAULT_K: usize = 25;
const KEEP_ARTIFACTS: usize = 10;

struct Args {
    file: String,
    k: usize,
    stop_words: Option<String>,
    stem: bool,
    out: Option<String>,
}

fn parse_args() -> Result<Args, String> {
    let mut file = None;
    let mut k = None;
    let mut stop_words = None;
    let mut stem = false;
    let mut out = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--stop-words" => {
                stop_words = Some(args.next().ok_or("--stop-words needs a path")?);
            }
            "--stem" => stem = true,
            "--out" => {
                out = Some(args.next().ok_or("--out needs a directory")?);
            }
            _ if file.is_none() => file = Some(arg),
            _ if k.is_none() => {
                k = Some(arg.parse::<usize>().map_err(|_| format!("bad k: {arg}"))?);
            }
            _ => return Err(format!("unexpected argument: {arg}")),
        }
    }

    Ok(Args {
        file: file.ok_or("usage: freqtop <file> [k] [--stop-words <path>] [--stem] [--out <dir>]")?,
        k: k.unwrap_or(DEFAULT_K),
        stop_words,
        stem,
        out,
    })
}

fn run(args: Args) -> Result<(), String> {
    let mut config = AnalyzerConfig::new(args.k);
    if let Some(path) = &args.stop_words {
        let reader = File::open(path)
            .map(BufReader::new)
            .map_err(|err| format!("{path}: {err}"))?;
        let stop_words =
            StopWords::from_reader(reader).map_err(|err| format!("{path}: {err}"))?;
        config = config.stop_words(stop_words);
    }
    if args.stem {
        config = config.stem_suffixes(SuffixTable::reference());
    }

    let reader = File::open(&args.file)
        .map(BufReader::new)
        .map_err(|err| format!("{}: {err}", args.file))?;
    let report = Analyzer::new(config)
        .analyze_reader(reader)
        .map_err(|err| format!("{}: {err}", args.file))?;

    print!("{report}");

    if let Some(dir) = &args.out {
        let sink = ReportSink::new(dir, KEEP_ARTIFACTS).map_err(|err| err.to_string())?;
        let path = sink.write(&report).map_err(|err| format!("{dir}: {err}"))?;
        eprintln!("wrote {}", path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(msg) = run(args) {
        eprintln!("{msg}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
