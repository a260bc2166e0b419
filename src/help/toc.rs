//! Table-of-contents pass: package, class, and member walkers plus
//! sitemap serialization.

use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{Error, Result};
use crate::javadoc::{self, FrameSet, patterns};

use super::{ContentNode, MemberEntry, Stage, templates};

/// Counters from one TOC scan. `skipped_rows` counts rows dropped by the
/// de-duplication policy (package-summary links, inner classes surfaced
/// through their owner's page).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TocStats {
    pub books: usize,
    pub classes: usize,
    pub members: usize,
    pub skipped_rows: usize,
}

/// Walk the tree under `root` and build the TOC in document order.
///
/// With a multi-package content page every package book is scanned; without
/// one the flat all-classes listing is wrapped in a synthetic "All Classes"
/// book. A missing per-class page downgrades that entry to a leaf, but a
/// missing content page fails the pass.
pub fn scan(
    root: &Path,
    frames: &FrameSet,
    progress: &mut dyn FnMut(Stage, &Path),
) -> Result<(Vec<ContentNode>, TocStats)> {
    let mut scanner = Scanner {
        root,
        stats: TocStats::default(),
        progress,
    };
    let mut nodes = Vec::new();

    if let Some(default_page) = &frames.default_page
        && root.join(default_page).is_file()
    {
        nodes.push(ContentNode::Leaf {
            title: "Overview".to_string(),
            href: default_page.clone(),
        });
    }
    if root.join(javadoc::OVERVIEW_TREE).is_file() {
        nodes.push(ContentNode::Leaf {
            title: "Hierarchy For All Packages".to_string(),
            href: javadoc::OVERVIEW_TREE.to_string(),
        });
    }

    if frames.is_multi_package() {
        scanner.scan_packages(javadoc::OVERVIEW_FRAME, &mut nodes)?;
    } else {
        let mut children = Vec::new();
        if root.join(javadoc::ALLCLASSES_FRAME).is_file() {
            children = scanner.scan_classes("", javadoc::ALLCLASSES_FRAME, "All Classes")?;
        }
        scanner.stats.books += 1;
        nodes.push(ContentNode::Book {
            title: "All Classes".to_string(),
            href: javadoc::ALLCLASSES_NOFRAME.to_string(),
            children,
        });
    }

    Ok((nodes, scanner.stats))
}

struct Scanner<'a> {
    root: &'a Path,
    stats: TocStats,
    progress: &'a mut dyn FnMut(Stage, &Path),
}

impl Scanner<'_> {
    /// Walk the multi-package content page, one book per package row.
    /// A book whose listing page is absent is skipped entirely.
    fn scan_packages(&mut self, content: &str, nodes: &mut Vec<ContentNode>) -> Result<()> {
        let path = self.root.join(content);
        if !path.is_file() {
            return Err(Error::MissingInput(path.display().to_string()));
        }
        (self.progress)(Stage::Contents, &path);
        let data = fs::read_to_string(&path)?;
        for line in data.lines() {
            let Some(row) = patterns::book_row(line) else {
                continue;
            };
            let (prefix, summary, listing) = if row.title == "All Classes" {
                // The flat list, not a real package: point the book at the
                // frameless listing and scan the frame listing at the root.
                (
                    String::new(),
                    javadoc::ALLCLASSES_NOFRAME.to_string(),
                    javadoc::ALLCLASSES_FRAME.to_string(),
                )
            } else {
                let path = row.title.replace('.', "/");
                (
                    path.clone(),
                    format!("{path}/{}", javadoc::PACKAGE_SUMMARY),
                    format!("{path}/{}", javadoc::PACKAGE_FRAME),
                )
            };
            if !self.root.join(&listing).is_file() {
                debug!(book = row.title, %listing, "listing page missing, book skipped");
                continue;
            }
            let children = self.scan_classes(&prefix, &listing, row.title)?;
            self.stats.books += 1;
            nodes.push(ContentNode::Book {
                title: row.title.to_string(),
                href: summary,
                children,
            });
        }
        Ok(())
    }

    /// Walk one package listing page: hierarchy/uses leaves first, then one
    /// class node per matching row.
    fn scan_classes(
        &mut self,
        prefix: &str,
        listing: &str,
        package_name: &str,
    ) -> Result<Vec<ContentNode>> {
        let mut nodes = Vec::new();

        let tree_href = qualify(prefix, javadoc::PACKAGE_TREE);
        if self.root.join(&tree_href).is_file() {
            nodes.push(ContentNode::Leaf {
                title: format!("Hierarchy For Package {package_name}"),
                href: tree_href,
            });
        }
        let use_href = qualify(prefix, javadoc::PACKAGE_USE);
        if self.root.join(&use_href).is_file() {
            nodes.push(ContentNode::Leaf {
                title: format!("Uses of Package {package_name}"),
                href: use_href,
            });
        }

        let listing_path = self.root.join(listing);
        (self.progress)(Stage::Contents, &listing_path);
        let data = fs::read_to_string(&listing_path)?;
        for line in data.lines() {
            let Some(row) = patterns::class_row(line) else {
                continue;
            };
            // The package-summary link is caught by the class pattern; the
            // book header already covers it.
            if row
                .href
                .find(javadoc::PACKAGE_SUMMARY)
                .is_some_and(|pos| pos > 0)
            {
                self.stats.skipped_rows += 1;
                continue;
            }
            let mut title = row.title.to_string();
            if row.is_interface {
                title = format!("{title} (Interface)");
            }
            // Inner classes are reachable through their owner's page.
            if title.contains('.') {
                self.stats.skipped_rows += 1;
                debug!(%title, "inner class row skipped at package level");
                continue;
            }
            let href = qualify(prefix, patterns::strip_parent_prefix(row.href));
            let page = self.root.join(&href);
            let members = if page.is_file() {
                let mut members = self.scan_inners(&page)?;
                members.extend(self.scan_methods(&page)?);
                members
            } else {
                Vec::new()
            };
            self.stats.classes += 1;
            nodes.push(ContentNode::Class {
                title,
                href,
                is_interface: row.is_interface,
                members,
            });
        }
        Ok(nodes)
    }

    /// Inner-class pass over a class page. Titles without exactly one dot
    /// are plain members and belong to the method pass. The child keeps
    /// only the inner simple name and recurses for its own methods when its
    /// page exists.
    fn scan_inners(&mut self, page: &Path) -> Result<Vec<ContentNode>> {
        (self.progress)(Stage::Contents, page);
        let data = fs::read_to_string(page)?;
        let mut nodes = Vec::new();
        for row in patterns::inner_rows(&data) {
            let parts: Vec<&str> = row.title.split('.').collect();
            let &[_, inner] = parts.as_slice() else {
                continue;
            };
            let href = patterns::strip_parent_prefix(row.href).to_string();
            let inner_page = self.root.join(&href);
            let members = if inner_page.is_file() {
                self.scan_methods(&inner_page)?
            } else {
                Vec::new()
            };
            self.stats.classes += 1;
            nodes.push(ContentNode::Class {
                title: inner.to_string(),
                href,
                is_interface: false,
                members,
            });
        }
        Ok(nodes)
    }

    /// Method/field pass over a class page. Dotted names were already
    /// surfaced by the inner-class pass and are skipped here.
    fn scan_methods(&mut self, page: &Path) -> Result<Vec<ContentNode>> {
        let data = fs::read_to_string(page)?;
        let mut nodes = Vec::new();
        for row in patterns::method_rows(&data) {
            if row.name.find('.').is_some_and(|pos| pos > 0) {
                self.stats.skipped_rows += 1;
                continue;
            }
            let href = patterns::strip_parent_prefix(row.href).to_string();
            let parameters = row.args.map(|args| {
                args[1..args.len() - 1]
                    .split(',')
                    .map(|arg| {
                        let arg = arg.trim();
                        patterns::collapse_linked_arg(arg).unwrap_or_else(|| arg.to_string())
                    })
                    .collect()
            });
            self.stats.members += 1;
            nodes.push(ContentNode::Member(MemberEntry {
                name: row.name.to_string(),
                href,
                parameters,
            }));
        }
        Ok(nodes)
    }
}

fn qualify(prefix: &str, href: &str) -> String {
    if prefix.is_empty() {
        href.to_string()
    } else {
        format!("{prefix}/{href}")
    }
}

/// Serialize a TOC tree as a sitemap document with a dated header.
pub fn write_toc<W: Write>(out: &mut W, nodes: &[ContentNode], date: NaiveDate) -> Result<()> {
    let header = templates::contents_header(&date.format("%B-%d-%Y").to_string());
    out.write_all(header.as_bytes())?;
    out.write_all(templates::UL_OPEN.as_bytes())?;
    write_nodes(out, nodes)?;
    out.write_all(templates::SITEMAP_FOOTER.as_bytes())?;
    Ok(())
}

fn write_nodes<W: Write>(out: &mut W, nodes: &[ContentNode]) -> Result<()> {
    for node in nodes {
        match node {
            ContentNode::Book {
                title,
                href,
                children,
            } => {
                out.write_all(templates::sitemap_item(title, href).as_bytes())?;
                write_children(out, children)?;
            }
            ContentNode::Class {
                title,
                href,
                members,
                ..
            } => {
                out.write_all(templates::sitemap_item(title, href).as_bytes())?;
                write_children(out, members)?;
            }
            ContentNode::Member(entry) => {
                out.write_all(templates::sitemap_item(&entry.label(), &entry.href).as_bytes())?;
            }
            ContentNode::Leaf { title, href } => {
                out.write_all(templates::sitemap_item(title, href).as_bytes())?;
            }
        }
    }
    Ok(())
}

fn write_children<W: Write>(out: &mut W, children: &[ContentNode]) -> Result<()> {
    if children.is_empty() {
        return Ok(());
    }
    out.write_all(templates::UL_OPEN.as_bytes())?;
    write_nodes(out, children)?;
    out.write_all(templates::UL_CLOSE.as_bytes())?;
    Ok(())
}
