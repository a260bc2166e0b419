//! Help-project model and orchestration.
//!
//! A conversion run resolves the frame set once, then makes three
//! independent passes over the working tree: the project manifest, the
//! table of contents, and the keyword index. Each pass owns its output file
//! exclusively for its duration and the passes never run concurrently.

pub mod index;
pub mod manifest;
pub mod templates;
pub mod toc;

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::Result;
use crate::javadoc::FrameSet;

pub use index::{IndexEntry, IndexGroup, IndexStats};
pub use manifest::ManifestStats;
pub use toc::TocStats;

/// Which pass is currently scanning; reported through the progress callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Manifest,
    Contents,
    Index,
}

/// A node of the table-of-contents tree, in document order of the scanned
/// listing pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentNode {
    /// A package (or the synthetic "All Classes" grouping).
    Book {
        title: String,
        href: String,
        children: Vec<ContentNode>,
    },
    /// A class or interface; `members` holds inner classes and members.
    Class {
        title: String,
        href: String,
        is_interface: bool,
        members: Vec<ContentNode>,
    },
    /// A method or field entry.
    Member(MemberEntry),
    /// A plain link (overview, hierarchy, uses pages).
    Leaf { title: String, href: String },
}

/// One method or field entry. `parameters` is `None` for fields (the source
/// row has no argument list at all) and `Some` for methods, so a
/// zero-argument method still renders as `name ()` while a field keeps its
/// bare name. Overloads stay distinct entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberEntry {
    pub name: String,
    pub href: String,
    pub parameters: Option<Vec<String>>,
}

impl MemberEntry {
    /// Display label: `name (a, b)` for methods, bare `name` for fields.
    pub fn label(&self) -> String {
        match &self.parameters {
            Some(params) => format!("{} ({})", self.name, params.join(", ")),
            None => self.name.clone(),
        }
    }
}

/// A conversion target: the project identity plus the working tree the
/// three documents are generated into.
#[derive(Debug, Clone)]
pub struct Project {
    /// Base name of the generated files (`{name}.hhp/.hhc/.hhk/.chm`).
    pub name: String,
    /// Title shown by the compiled help window.
    pub title: String,
    /// Working directory holding the staged Javadoc tree.
    pub root: PathBuf,
}

/// Statistics from a full conversion run. Skipped and truncated entries are
/// dropped silently from the output by design, but their counts surface
/// here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub frames: FrameSet,
    pub manifest: ManifestStats,
    pub toc: TocStats,
    pub index: IndexStats,
}

impl Project {
    pub fn new(name: impl Into<String>, title: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Project {
            name: name.into(),
            title: title.into(),
            root: root.into(),
        }
    }

    /// Generate the three project documents into the working tree.
    ///
    /// `date` parameterizes the timestamped document headers so output is
    /// reproducible under a fixed clock. `progress` is invoked once per
    /// file each pass visits.
    pub fn generate(
        &self,
        date: NaiveDate,
        progress: &mut dyn FnMut(Stage, &Path),
    ) -> Result<Report> {
        let frames = FrameSet::resolve(&self.root)?;
        debug!(
            content = frames.content_page.as_deref(),
            default = frames.default_page.as_deref(),
            "resolved frame set"
        );

        info!("creating help project manifest");
        let default_topic = frames.default_page.clone().unwrap_or_default();
        let manifest = manifest::generate(self, &default_topic, progress)?;

        info!("creating table of contents");
        let (nodes, toc) = toc::scan(&self.root, &frames, progress)?;
        let mut out = BufWriter::new(fs::File::create(self.document_path("hhc"))?);
        toc::write_toc(&mut out, &nodes, date)?;
        out.flush()?;

        info!("creating keyword index");
        let (groups, index) = index::scan(&self.root, progress)?;
        let mut out = BufWriter::new(fs::File::create(self.document_path("hhk"))?);
        index::write_index(&mut out, &groups, date)?;
        out.flush()?;

        Ok(Report {
            frames,
            manifest,
            toc,
            index,
        })
    }

    /// Path of a generated document with the given extension.
    pub fn document_path(&self, extension: &str) -> PathBuf {
        self.root.join(format!("{}.{extension}", self.name))
    }
}
