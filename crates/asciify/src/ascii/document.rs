use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use log::debug;

use crate::AsciiError;

/// Line-oriented text rendition of an image, one line per pixel row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AsciiDocument {
    lines: Vec<String>,
}

impl AsciiDocument {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Parses persisted text. `\r\n` endings are accepted and a trailing newline does not
    /// produce an extra empty line.
    pub fn parse(text: &str) -> Self {
        let lines = text.lines().map(str::to_owned).collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn push_line(&mut self, line: String) {
        self.lines.push(line);
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines.
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Length in characters of the longest line.
    pub fn width(&self) -> usize {
        self.lines.iter().map(|line| line.chars().count()).max().unwrap_or(0)
    }

    /// True when every line has the same character count.
    pub fn is_rectangular(&self) -> bool {
        let mut lengths = self.lines.iter().map(|line| line.chars().count());
        match lengths.next() {
            Some(first) => lengths.all(|len| len == first),
            None => true,
        }
    }

    /// Serialized form: every line terminated by `\n`.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AsciiDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

pub fn read_document<P: AsRef<Path>>(path: P) -> Result<AsciiDocument, AsciiError> {
    let path = path.as_ref();
    let mut file = File::open(path)
        .map_err(|source| AsciiError::SourceOpen { path: path.to_path_buf(), source })?;

    let mut text = String::new();
    file.read_to_string(&mut text)
        .map_err(|source| AsciiError::Read { path: path.to_path_buf(), source })?;

    let document = AsciiDocument::parse(&text);
    debug!("read {} lines from {}", document.height(), path.display());
    Ok(document)
}

pub fn write_document<P: AsRef<Path>>(path: P, document: &AsciiDocument) -> Result<(), AsciiError> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|source| AsciiError::SinkCreate { path: path.to_path_buf(), source })?;

    let mut writer = BufWriter::new(file);
    let write_err = |source: std::io::Error| AsciiError::Write { path: path.to_path_buf(), source };
    for line in document.lines() {
        writeln!(writer, "{line}").map_err(write_err)?;
    }
    writer.flush().map_err(write_err)?;

    debug!("wrote {} lines to {}", document.height(), path.display());
    Ok(())
}
