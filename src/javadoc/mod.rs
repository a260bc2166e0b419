//! Javadoc tree layout: well-known file names, frame-set resolution, and
//! title/name derivation from the root page.

pub mod patterns;

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// The frame-set root page of a generated Javadoc tree.
pub const INDEX_HTML: &str = "index.html";
/// Package list shown in the navigation pane of a multi-package Javadoc.
pub const OVERVIEW_FRAME: &str = "overview-frame.html";
/// Flat class list used by single-package documentation.
pub const ALLCLASSES_FRAME: &str = "allclasses-frame.html";
/// Frameless flat class list; target of the "All Classes" book entry.
pub const ALLCLASSES_NOFRAME: &str = "allclasses-noframe.html";
/// Global class hierarchy page.
pub const OVERVIEW_TREE: &str = "overview-tree.html";
/// Per-package class listing page.
pub const PACKAGE_FRAME: &str = "package-frame.html";
/// Per-package overview page.
pub const PACKAGE_SUMMARY: &str = "package-summary.html";
/// Per-package hierarchy page.
pub const PACKAGE_TREE: &str = "package-tree.html";
/// Per-package "uses" page.
pub const PACKAGE_USE: &str = "package-use.html";
/// Combined alphabetical index (small documentation sets).
pub const INDEX_ALL: &str = "index-all.html";
/// Directory of split alphabetical index pages (large documentation sets).
pub const INDEX_DIR: &str = "index-files";

/// The content and default pages declared by the frame-set root.
///
/// A multi-package Javadoc declares the package list as content and the
/// overview summary as default; a single-package Javadoc declares the flat
/// class list as content. Resolution fails softly: when no frame tag
/// matches, both fields stay `None` and callers fall back to
/// single-package mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameSet {
    pub content_page: Option<String>,
    pub default_page: Option<String>,
}

impl FrameSet {
    /// Parse the frame-set root page under `root`.
    ///
    /// The first frame source becomes the content page, the first
    /// subsequent *distinct* source becomes the default page, and any
    /// further frames are ignored.
    pub fn resolve(root: &Path) -> Result<FrameSet> {
        let index = root.join(INDEX_HTML);
        if !index.is_file() {
            return Err(Error::MissingInput(index.display().to_string()));
        }
        let data = fs::read_to_string(&index)?;
        let mut frames = FrameSet::default();
        for line in data.lines() {
            let Some(src) = patterns::frame_src(line) else {
                continue;
            };
            match (&frames.content_page, &frames.default_page) {
                (None, _) => frames.content_page = Some(src.to_string()),
                (Some(content), None) if content != src => {
                    frames.default_page = Some(src.to_string());
                }
                _ => {}
            }
        }
        Ok(frames)
    }

    /// True when the content page is the multi-package overview frame.
    pub fn is_multi_package(&self) -> bool {
        self.content_page.as_deref() == Some(OVERVIEW_FRAME)
    }
}

/// Read the document title from the root page, falling back to a generic
/// placeholder when the page has no `<title>` element.
pub fn doc_title(index_html: &Path) -> Result<String> {
    let data = fs::read_to_string(index_html)?;
    Ok(patterns::page_title(&data)
        .unwrap_or("Javadoc Title")
        .to_string())
}

/// Derive a default project name from a document title: lowercased, spaces
/// become `_`, dots become `-` (dots would collide with the generated file
/// extensions).
pub fn default_project_name(title: &str) -> String {
    title.to_lowercase().replace(' ', "_").replace('.', "-")
}
