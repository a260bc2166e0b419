//! Staging: copy the Javadoc tree to a writable working directory and
//! percent-encode malformed method-signature URLs.
//!
//! Javadoc leaves raw spaces inside member anchors with more than one
//! parameter (`Foo.html#bar(int a, int b)`); the help compiler rejects
//! them, so staging rewrites every affected link and bookmark before the
//! generation passes run.

use std::fs;
use std::path::{Path, PathBuf};

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::Result;
use crate::javadoc::patterns;

/// Characters left verbatim when re-encoding a link target: the unreserved
/// set plus `()/,#`, which Javadoc uses inside member anchors.
const METHOD_URL_KEEP: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'(')
    .remove(b')')
    .remove(b'/')
    .remove(b',')
    .remove(b'#');

/// Copy the source tree into a per-project working directory under the
/// system temp dir, replacing any previous copy, and clean up malformed
/// URLs in place. Returns the working directory.
pub fn prepare(source: &Path, project: &str) -> Result<PathBuf> {
    let work = std::env::temp_dir().join("jdchm").join(project);
    if work.exists() {
        info!("removing previous working directory {}", work.display());
        fs::remove_dir_all(&work)?;
    }
    info!("copying Javadoc tree to {}", work.display());
    copy_tree(source, &work)?;
    let modified = clean_html_files(&work)?;
    if modified > 0 {
        info!("{modified} lines with malformed URLs rewritten");
    }
    Ok(work)
}

fn copy_tree(source: &Path, dest: &Path) -> Result<()> {
    for entry in WalkDir::new(source) {
        let entry = entry?;
        let rel = entry.path().strip_prefix(source).unwrap_or(entry.path());
        let target = dest.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else if entry.file_type().is_file() {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Rewrite method links and bookmark anchors whose target is a method
/// signature containing a space. Returns the number of lines modified
/// across the tree.
pub fn clean_html_files(root: &Path) -> Result<usize> {
    let mut total = 0;
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file()
            || entry.path().extension().is_none_or(|ext| ext != "html")
        {
            continue;
        }
        let Ok(data) = fs::read_to_string(entry.path()) else {
            // Non-UTF-8 page; leave it untouched.
            debug!("skipping non-UTF-8 file {}", entry.path().display());
            continue;
        };
        let mut modified = 0;
        let mut lines = Vec::new();
        for line in data.lines() {
            // A link and an anchor never share a line; first rewrite wins.
            if let Some(rewritten) = quote_url(patterns::method_link_target(line), line) {
                modified += 1;
                lines.push(rewritten);
                continue;
            }
            if let Some(rewritten) = quote_url(patterns::bookmark_target(line), line) {
                modified += 1;
                lines.push(rewritten);
                continue;
            }
            lines.push(line.to_string());
        }
        if modified > 0 {
            debug!("{}: {modified} lines modified", entry.path().display());
            let mut output = lines.join("\n");
            if data.ends_with('\n') {
                output.push('\n');
            }
            fs::write(entry.path(), output)?;
            total += modified;
        }
    }
    Ok(total)
}

/// Re-encode a captured link target when it is a method signature (ends
/// with `)`) containing a raw space. Returns the rewritten line, or `None`
/// when nothing needs fixing.
fn quote_url(target: Option<&str>, line: &str) -> Option<String> {
    let target = target?;
    if target.ends_with(')') && target.contains(' ') {
        let encoded = utf8_percent_encode(target, METHOD_URL_KEEP).to_string();
        Some(line.replace(target, &encoded))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_url_encodes_spaces_only_in_signatures() {
        let line = r#"<td><code><b><a href="Foo.html#bar(int a, int b)">bar</a>"#;
        let target = patterns::method_link_target(line);
        let rewritten = quote_url(target, line).unwrap();
        assert!(rewritten.contains("Foo.html#bar(int%20a,%20int%20b)"));

        // A field link has no trailing parenthesis and stays untouched.
        let line = r#"<td><code><b><a href="Foo.html#some field">f</a>"#;
        assert_eq!(quote_url(patterns::method_link_target(line), line), None);
    }
}
