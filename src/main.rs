use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use context_markers::{
    dataset::{self, Dataset, Split},
    Detector, Error, ParseCache, Result, Stopwords,
};

/// Evaluate how well translation hypotheses (HYP) realise the gender,
/// number and formality markers of a test split
#[derive(Debug, Parser)]
#[command(version)]
struct Argv {
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// hypothesis file, one translation per line aligned with the split
    #[arg(value_name = "HYP")]
    hyp: PathBuf,
    /// data split to evaluate against
    #[arg(short, long, value_enum, default_value_t = Split::Test)]
    split: Split,
    /// directory holding the split files, the sanity sample and the stopwords
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,
    /// parsed sentences as JSON lines [default: <DATA_DIR>/parses.jsonl]
    #[arg(short, long)]
    parses: Option<PathBuf>,
    /// stopword list [default: <DATA_DIR>/stopwords]
    #[arg(long)]
    stopwords: Option<PathBuf>,
}

fn run(argv: Argv) -> Result<()> {
    let parses = argv.parses.unwrap_or_else(|| argv.data_dir.join("parses.jsonl"));
    let stopwords = argv.stopwords.unwrap_or_else(|| argv.data_dir.join("stopwords"));
    let detector = Detector::new(ParseCache::from_file(parses)?, Stopwords::from_file(stopwords)?);

    let samples = dataset::read_samples(argv.data_dir.join("detector_testing_sample.json"))?;
    detector.test_performance(&samples)?;
    log::info!("--- threshold reached, annotating the {} split", argv.split);

    let mut ds = Dataset::from_file(argv.data_dir.join(argv.split.file_name()))?;
    ds.read_hypotheses(&argv.hyp)?;
    let agreement = detector.calculate_type_agreement(&ds.hypotheses(), &ds.english(), &ds.markings())?;
    println!("{}", agreement);
    Ok(())
}

fn main() -> ExitCode {
    let argv = Argv::parse();
    env_logger::Builder::new()
        .filter_level(match argv.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        })
        .parse_default_env()
        .init();
    log::debug!("{:?}", argv);
    match run(argv) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ Error::ThresholdNotReached { .. }) => {
            log::error!("setup check failed: {e}");
            ExitCode::from(2)
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
