//! Project-manifest pass: the header block plus one line per HTML file in
//! the working tree.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;
use walkdir::WalkDir;

use crate::error::Result;
use crate::javadoc;

use super::{Project, Stage, templates};

/// Counters from one manifest pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManifestStats {
    pub files: usize,
}

/// Write `{name}.hhp` into the project root: the parameterized header, then
/// every `.html` file in depth-first, name-sorted order.
///
/// The index directory never joins the manifest (its pages are only input
/// for the keyword index); skipping it is logged. Paths are emitted
/// relative to the root with `/` separators and no leading `./`.
pub fn generate(
    project: &Project,
    default_topic: &str,
    progress: &mut dyn FnMut(Stage, &Path),
) -> Result<ManifestStats> {
    let mut out = BufWriter::new(fs::File::create(project.document_path("hhp"))?);
    out.write_all(
        templates::project_header(&project.name, &project.title, default_topic).as_bytes(),
    )?;

    let mut stats = ManifestStats::default();
    let root = project.root.as_path();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            let skip = entry.depth() == 1
                && entry.file_type().is_dir()
                && entry.file_name() == javadoc::INDEX_DIR;
            if skip {
                info!("skipping {}", entry.path().display());
            }
            !skip
        });

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        progress(Stage::Manifest, entry.path());
        if entry.path().extension().is_none_or(|ext| ext != "html") {
            continue;
        }
        let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let line: String = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
        stats.files += 1;
    }

    out.flush()?;
    Ok(stats)
}
