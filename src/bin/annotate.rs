use std::path::PathBuf;

use clap::Parser;
use context_markers::{dataset, Detector, Evaluation, ParseCache, Stopwords};

/// Label the Polish side of a detector sample file (FILE), one label per line
/// Report agreement with the manual labels as well (with -t option)
#[derive(Debug, Parser)]
struct Argv {
    /// parsed sentences as JSON lines (PARSES)
    #[arg(short, long, required = true, value_name = "PARSES")]
    parses: PathBuf,
    /// stopword list excluded from noun predicates
    #[arg(short, long)]
    stopwords: Option<PathBuf>,
    /// report the performance of the detector on the manual labels
    #[arg(short = 't', long = "test")]
    evaluate: bool,
    /// output the manual label next to the predicted one
    #[arg(short, long)]
    reference: bool,
    /// suppress labelling results (useful for test mode)
    #[arg(short, long)]
    quiet: bool,
    #[arg(value_name = "<FILE>")]
    datasets: Vec<PathBuf>,
}

fn main() {
    env_logger::init();
    let argv = Argv::parse();
    log::info!("{:?}", argv);
    let parser = ParseCache::from_file(&argv.parses).unwrap_or_else(|e| {
        log::error!("failed to load parses: {e}");
        std::process::exit(1);
    });
    let stopwords = match &argv.stopwords {
        Some(path) => Stopwords::from_file(path).unwrap_or_else(|e| {
            log::error!("failed to load stopwords: {e}");
            std::process::exit(1);
        }),
        None => Stopwords::default(),
    };
    let detector = Detector::new(parser, stopwords);
    let mut evaluation = Evaluation::default();
    for fpath in argv.datasets {
        let samples = match dataset::read_samples(&fpath) {
            Ok(samples) => samples,
            Err(e) => {
                log::warn!("skipping {}: {e}", fpath.display());
                continue;
            }
        };
        let labels = match detector.annotate(&samples) {
            Ok(labels) => labels,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        };
        for (label, sample) in labels.iter().zip(&samples) {
            if argv.evaluate {
                evaluation.accumulate(&sample.manually_labelled_context_csv, label);
            }
            if argv.quiet {
                continue;
            }
            if argv.reference {
                println!("{}\t{}", sample.manually_labelled_context_csv, label);
            } else {
                println!("{}", label);
            }
        }
    }
    if argv.evaluate {
        println!("{}", evaluation);
        println!("{}", evaluation.evaluate());
    }
}
