//! Reader for `hash_list.txt`
//!
//! One record per line: `<hex hash><whitespace><relative path>`. Leading
//! and trailing whitespace is ignored, blank lines are skipped, and there
//! is no header or comment syntax. Lines end in `\n`, `\r\n` or a lone `\r`.

use crate::error::{DataCheckError, IoResultExt, Result};
use std::path::{Path, PathBuf};

/// A single record of the hash list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Recorded hex digest, compared verbatim
    pub expected_hash: String,
    /// Path relative to the data directory
    pub path: String,
    /// 1-based line number in the manifest
    pub line: usize,
}

impl ManifestEntry {
    /// Parse one trimmed, non-empty manifest line
    pub fn parse_line(line_no: usize, line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace();

        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(hash), Some(path), None) => Ok(Self {
                expected_hash: hash.to_string(),
                path: path.to_string(),
                line: line_no,
            }),
            _ => Err(DataCheckError::ManifestFormat {
                line: line_no,
                content: line.to_string(),
            }),
        }
    }

    /// Relative path as a PathBuf
    pub fn to_path(&self) -> PathBuf {
        PathBuf::from(&self.path)
    }
}

/// Ordered contents of a hash list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HashList {
    entries: Vec<ManifestEntry>,
}

impl HashList {
    /// Parse manifest text, keeping file order
    pub fn parse(text: &str) -> Result<Self> {
        let entries = split_lines(text)
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty())
            .map(|(line_no, line)| ManifestEntry::parse_line(line_no, line))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { entries })
    }

    /// Load and parse a manifest file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).with_path(path)?;
        Self::parse(&text)
    }

    /// Entries in manifest order
    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    /// Iterate entries in manifest order
    pub fn iter(&self) -> std::slice::Iter<'_, ManifestEntry> {
        self.entries.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the manifest lists no files
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Split on `\r\n`, `\n` or a lone `\r`
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let text = text.strip_suffix('\n').unwrap_or(text);
    let text = text.strip_suffix('\r').unwrap_or(text);
    let mut rest = Some(text).filter(|t| !t.is_empty());

    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(['\n', '\r']) {
            Some(i) => {
                let skip = if current[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&current[i + skip..]);
                Some(&current[..i])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}

impl<'a> IntoIterator for &'a HashList {
    type Item = &'a ManifestEntry;
    type IntoIter = std::slice::Iter<'a, ManifestEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
