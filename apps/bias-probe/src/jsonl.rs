//! Line-delimited JSON I/O — the only interchange format between stages.
//!
//! One JSON object per line, UTF-8. Blank lines are skipped on read.
//! A line that fails to parse aborts the read with its 1-based line number.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::errors::AppError;

/// Reads every record from a `.jsonl` file.
pub fn read_jsonl<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, AppError> {
    let file = File::open(path).map_err(|e| AppError::io(path, e))?;
    parse_lines(BufReader::new(file), path)
}

fn parse_lines<T: DeserializeOwned, R: BufRead>(reader: R, path: &Path) -> Result<Vec<T>, AppError> {
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| AppError::io(path, e))?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line).map_err(|source| AppError::MalformedLine {
            path: path.to_path_buf(),
            line: idx + 1,
            source,
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Writes records to `path`, replacing any existing file.
pub fn write_jsonl<T: Serialize>(path: &Path, records: &[T]) -> Result<(), AppError> {
    let mut writer = JsonlWriter::create(path)?;
    for record in records {
        writer.append(record)?;
    }
    Ok(())
}

/// Incremental writer used by the runner. Each record is flushed as soon as it
/// is appended, so an aborted run keeps everything written before the failure.
pub struct JsonlWriter<W: Write> {
    inner: W,
    path: PathBuf,
    written: usize,
}

impl JsonlWriter<BufWriter<File>> {
    pub fn create(path: &Path) -> Result<Self, AppError> {
        let file = File::create(path).map_err(|e| AppError::io(path, e))?;
        Ok(Self::new(BufWriter::new(file), path))
    }
}

impl<W: Write> JsonlWriter<W> {
    pub fn new(inner: W, path: impl Into<PathBuf>) -> Self {
        Self {
            inner,
            path: path.into(),
            written: 0,
        }
    }

    pub fn append<T: Serialize>(&mut self, record: &T) -> Result<(), AppError> {
        let line = serde_json::to_string(record)?;
        writeln!(self.inner, "{line}").map_err(|e| AppError::io(&self.path, e))?;
        self.inner.flush().map_err(|e| AppError::io(&self.path, e))?;
        self.written += 1;
        Ok(())
    }

    pub fn written(&self) -> usize {
        self.written
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.inner
    }
}
