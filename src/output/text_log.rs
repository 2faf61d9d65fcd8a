//! Line-oriented page log
//!
//! One UTF-8 line per visited page, `<url> <title>\n`, flushed after every
//! write.

use crate::output::traits::{OutputError, OutputHandler, OutputResult, PageRecord};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Page log backed by a text file
pub struct TextLog {
    path: PathBuf,
    writer: BufWriter<File>,
    written: u64,
}

impl TextLog {
    /// Opens the log file
    ///
    /// # Arguments
    ///
    /// * `path` - Location of the log file; created if missing
    /// * `append` - Keep existing content instead of truncating it
    pub fn open(path: &Path, append: bool) -> OutputResult<Self> {
        let mut options = OpenOptions::new();
        options.create(true);
        if append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }

        let file = options.open(path)?;
        tracing::debug!("Opened page log {} (append: {})", path.display(), append);

        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
            written: 0,
        })
    }

    /// Path of the underlying file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputHandler for TextLog {
    fn record_page(&mut self, record: &PageRecord) -> OutputResult<()> {
        let is_break = |c: char| c == '\n' || c == '\r';
        if record.url.contains(is_break) || record.title.contains(is_break) {
            return Err(OutputError::Write(format!(
                "Record for {:?} spans multiple lines",
                record.url
            )));
        }

        writeln!(self.writer, "{}", record)?;
        self.writer.flush()?;
        self.written += 1;
        Ok(())
    }

    fn records_written(&self) -> u64 {
        self.written
    }

    fn finalize(&mut self) -> OutputResult<()> {
        self.writer.flush()?;
        self.writer.get_ref().sync_all()?;
        Ok(())
    }
}
