//! # jdchm
//!
//! Convert a generated Javadoc HTML tree into the three source documents of
//! a compiled HTML Help (CHM) project: the project manifest (`.hhp`), the
//! hierarchical table of contents (`.hhc`), and the alphabetical keyword
//! index (`.hhk`).
//!
//! ## Features
//!
//! - Resolves the frame layout to find the content and default pages
//! - Rebuilds the package → class → member hierarchy from the listing pages
//! - Groups adjacent index entries per keyword with per-owner sub-entries
//! - Best-effort extraction: unparseable fragments are skipped and counted,
//!   never fatal
//!
//! ## Quick Start
//!
//! ```no_run
//! use jdchm::Project;
//!
//! let work = jdchm::stage::prepare("docs/api".as_ref(), "mylib")?;
//! let project = Project::new("mylib", "MyLib 1.0 API", work);
//! let report = project.generate(chrono::Local::now().date_naive(), &mut |_, _| {})?;
//! println!(
//!     "{} classes, {} members, {} index entries",
//!     report.toc.classes, report.toc.members, report.index.entries
//! );
//! # Ok::<(), jdchm::Error>(())
//! ```
//!
//! The extraction is pattern-based over raw HTML lines; there is no
//! structured API to query in a Javadoc tree, and the patterns tolerate the
//! attribute-order and markup variations different Javadoc releases emit.

pub mod compiler;
pub mod error;
pub mod help;
pub mod javadoc;
pub mod stage;

pub use error::{Error, Result};
pub use help::{
    ContentNode, IndexEntry, IndexGroup, MemberEntry, Project, Report, Stage,
};
pub use javadoc::FrameSet;
