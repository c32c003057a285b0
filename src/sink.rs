use std::{
    fs::{File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

/// Somewhere report blocks are appended to, one block per call.
pub trait ReportSink {
    fn append(&mut self, block: &str) -> io::Result<()>;
}

/// Appends to a file, opening and closing it for every block so that blocks already
/// written survive a later failure.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Empties the file, creating it if needed.
    pub fn truncate(&self) -> io::Result<()> {
        File::create(&self.path).map(|_| ())
    }
}

impl ReportSink for FileSink {
    fn append(&mut self, block: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(block.as_bytes())?;
        file.flush()
    }
}

/// Writes blocks to any writer, flushing after each one.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for WriterSink<W> {
    fn append(&mut self, block: &str) -> io::Result<()> {
        self.writer.write_all(block.as_bytes())?;
        self.writer.flush()
    }
}

impl ReportSink for String {
    fn append(&mut self, block: &str) -> io::Result<()> {
        self.push_str(block);
        Ok(())
    }
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn append(&mut self, block: &str) -> io::Result<()> {
        (**self).append(block)
    }
}

impl<S: ReportSink + ?Sized> ReportSink for Box<S> {
    fn append(&mut self, block: &str) -> io::Result<()> {
        (**self).append(block)
    }
}
