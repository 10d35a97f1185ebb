use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
};

use clap::Parser;
use context_markers::{rewrite::describe, AttributeSet};

/// Describe the conversation encoded by each label line of FILE in English
/// If the argument FILE is omitted or '-', labels are read from STDIN
#[derive(Debug, Parser)]
struct Argv {
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let argv = Argv::parse();
    let reader: Box<dyn BufRead> = match argv.input {
        Some(path) if path.as_os_str() != "-" => Box::new(BufReader::new(File::open(path)?)),
        _ => Box::new(io::stdin().lock()),
    };
    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        match line.trim().parse::<AttributeSet>() {
            Ok(labels) => println!("{}", describe(&labels)),
            Err(e) => {
                log::warn!("line {}: {e}", n + 1);
                println!();
            }
        }
    }
    Ok(())
}
