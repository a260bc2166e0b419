//! Keyword-index pass: scan the alphabetical index pages, merge adjacent
//! entries sharing a keyword, and serialize the index document.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{Error, Result};
use crate::javadoc::{self, patterns};

use super::{Stage, templates};

/// Entries whose href or keyword reaches this length are dropped outright;
/// the help compiler crashes on them.
pub const ENTRY_MAX: usize = 1024;

/// Keywords longer than this are truncated for display with an ellipsis
/// marker; the compiler warns that 488 characters is the keyword maximum.
pub const KEYWORD_DISPLAY_MAX: usize = 488;

/// One reference under a keyword; `owner` is the fully qualified name
/// derived from the href.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub href: String,
    pub owner: String,
}

/// One or more consecutive index entries sharing a display keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexGroup {
    pub keyword: String,
    pub entries: Vec<IndexEntry>,
}

/// Counters from one index scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    pub entries: usize,
    pub skipped_oversize: usize,
    pub truncated_keywords: usize,
}

/// Scan the combined index page, or every page under the index directory
/// when no combined page exists.
///
/// Grouping merges *adjacent* entries only: index pages are alphabetically
/// pre-sorted, so identical keywords arrive consecutively. Group state
/// resets at every file boundary.
pub fn scan(
    root: &Path,
    progress: &mut dyn FnMut(Stage, &Path),
) -> Result<(Vec<IndexGroup>, IndexStats)> {
    let mut groups = Vec::new();
    let mut stats = IndexStats::default();

    let index_all = root.join(javadoc::INDEX_ALL);
    if index_all.is_file() {
        scan_file(&index_all, &mut groups, &mut stats, progress)?;
    } else {
        let dir = root.join(javadoc::INDEX_DIR);
        if !dir.is_dir() {
            return Err(Error::MissingInput(dir.display().to_string()));
        }
        let mut files: Vec<PathBuf> = fs::read_dir(&dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        files.sort();
        for file in &files {
            scan_file(file, &mut groups, &mut stats, progress)?;
        }
    }

    Ok((groups, stats))
}

fn scan_file(
    path: &Path,
    groups: &mut Vec<IndexGroup>,
    stats: &mut IndexStats,
    progress: &mut dyn FnMut(Stage, &Path),
) -> Result<()> {
    progress(Stage::Index, path);
    let data = fs::read_to_string(path)?;
    let mut current: Option<IndexGroup> = None;

    for row in patterns::index_rows(&data) {
        let href = patterns::strip_parent_prefix(row.href);
        if href.chars().count() >= ENTRY_MAX || row.keyword.chars().count() >= ENTRY_MAX {
            stats.skipped_oversize += 1;
            debug!(keyword_len = row.keyword.len(), "oversize index entry skipped");
            continue;
        }
        let mut keyword = row.keyword.to_string();
        if keyword.chars().count() > KEYWORD_DISPLAY_MAX {
            keyword = keyword.chars().take(KEYWORD_DISPLAY_MAX).collect();
            keyword.push_str("...");
            stats.truncated_keywords += 1;
        }
        let entry = IndexEntry {
            href: href.to_string(),
            owner: owner_of(href),
        };
        stats.entries += 1;

        match current.as_mut() {
            Some(group) if group.keyword == keyword => group.entries.push(entry),
            _ => {
                if let Some(done) = current.take() {
                    groups.push(done);
                }
                current = Some(IndexGroup {
                    keyword,
                    entries: vec![entry],
                });
            }
        }
    }

    if let Some(done) = current.take() {
        groups.push(done);
    }
    Ok(())
}

/// Derive a fully qualified owner name from an href: everything up to the
/// last `.html`, with path separators replaced by dots. Empty when the href
/// is not an HTML page link.
fn owner_of(href: &str) -> String {
    match href.rfind(".html") {
        Some(pos) => href[..pos].replace('/', "."),
        None => String::new(),
    }
}

/// Serialize the groups: single-entry groups as flat items, larger groups
/// as a keyword header with one "in {owner}" sub-item per entry.
pub fn write_index<W: Write>(out: &mut W, groups: &[IndexGroup], date: NaiveDate) -> Result<()> {
    let header = templates::index_header(&date.format("%B-%d-%Y").to_string());
    out.write_all(header.as_bytes())?;
    out.write_all(templates::UL_OPEN.as_bytes())?;
    for group in groups {
        if let [entry] = group.entries.as_slice() {
            out.write_all(templates::sitemap_item(&group.keyword, &entry.href).as_bytes())?;
        } else {
            out.write_all(templates::keyword_item(&group.keyword).as_bytes())?;
            out.write_all(templates::UL_OPEN.as_bytes())?;
            for entry in &group.entries {
                let label = format!("in {}", entry.owner);
                out.write_all(templates::sitemap_item(&label, &entry.href).as_bytes())?;
            }
            out.write_all(templates::UL_CLOSE.as_bytes())?;
        }
    }
    out.write_all(templates::SITEMAP_FOOTER.as_bytes())?;
    Ok(())
}
