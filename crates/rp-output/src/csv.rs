//! CSV output backend.
//!
//! Two unnamed columns per row, `date` then `reading`, CRLF-terminated:
//!
//! ```text
//! 01/01/2022,Genesis 1-4
//! 01/02/2022,Genesis 5-7
//! ```

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{Terminator, Writer, WriterBuilder};
use rp_plan::Plan;

use crate::writer::{PlanWriter, write_plan};
use crate::{DayRow, OutputError, OutputResult};

/// Writes plan days as CSV to any `Write` sink.
pub struct CsvWriter<W: Write> {
    writer:   Writer<W>,
    finished: bool,
}

impl CsvWriter<File> {
    /// Create (or truncate) the file at `path`.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Ok(Self::from_writer(File::create(path)?))
    }
}

impl<W: Write> CsvWriter<W> {
    pub fn from_writer(sink: W) -> Self {
        let writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::CRLF)
            .from_writer(sink);
        Self { writer, finished: false }
    }

    /// Flush and hand back the sink.
    pub fn into_inner(self) -> OutputResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| OutputError::Io(e.into_error()))
    }
}

impl<W: Write> PlanWriter for CsvWriter<W> {
    fn write_days(&mut self, rows: &[DayRow]) -> OutputResult<()> {
        for row in rows {
            self.writer.write_record([row.date.as_str(), row.reading.as_str()])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }
}

/// Render `plan` as CSV text in memory.
pub fn plan_to_csv_string(plan: &Plan) -> OutputResult<String> {
    let mut writer = CsvWriter::from_writer(Vec::new());
    write_plan(&mut writer, plan)?;
    Ok(String::from_utf8(writer.into_inner()?)?)
}
