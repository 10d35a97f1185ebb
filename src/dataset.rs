use std::{
    fmt::{self, Display},
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Split {
    Dev,
    Test,
}

impl Split {
    pub fn file_name(self) -> &'static str {
        match self {
            Split::Dev => "dev.json",
            Split::Test => "test.json",
        }
    }
}

impl Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Split::Dev => f.write_str("dev"),
            Split::Test => f.write_str("test"),
        }
    }
}

/// One evaluation item: a source sentence, its reference translation and the
/// marker the translation is expected to realise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub english: String,
    pub polish: String,
    pub marking: String,
    /// System output for `english`, filled from a hypothesis file.
    #[serde(default)]
    pub hypothesis: String,
}

/// A manually labelled sentence pair used to sanity-check the detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectorSample {
    pub english: String,
    pub polish: String,
    pub manually_labelled_context_csv: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_context_csv: Option<String>,
}

#[derive(Debug, Default)]
pub struct Dataset {
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let records: Vec<Record> = serde_json::from_reader(reader)?;
        Ok(Self { records })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let f = File::open(path.as_ref())?;
        let ds = Self::from_reader(BufReader::new(f))?;
        log::info!("read {} records from {}", ds.len(), path.as_ref().display());
        Ok(ds)
    }

    /// Attach system outputs, one per record and in record order.
    pub fn set_hypotheses(&mut self, hypotheses: Vec<String>) -> Result<()> {
        if hypotheses.len() != self.records.len() {
            return Err(Error::Misaligned { expected: self.records.len(), found: hypotheses.len() });
        }
        for (record, hypothesis) in self.records.iter_mut().zip(hypotheses) {
            record.hypothesis = hypothesis;
        }
        Ok(())
    }

    pub fn read_hypotheses<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.set_hypotheses(read_lines(path)?)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn hypotheses(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.hypothesis.as_str()).collect()
    }

    pub fn english(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.english.as_str()).collect()
    }

    pub fn markings(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.marking.as_str()).collect()
    }
}

pub fn read_samples<P: AsRef<Path>>(path: P) -> Result<Vec<DetectorSample>> {
    let f = File::open(path.as_ref())?;
    let samples: Vec<DetectorSample> = serde_json::from_reader(BufReader::new(f))?;
    log::debug!("read {} detector samples from {}", samples.len(), path.as_ref().display());
    Ok(samples)
}

pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let f = File::open(path)?;
    let lines = BufReader::new(f).lines().collect::<std::io::Result<Vec<_>>>()?;
    Ok(lines)
}
