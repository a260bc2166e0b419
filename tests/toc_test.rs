//! TOC construction against synthetic Javadoc trees.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use jdchm::help::toc;
use jdchm::{ContentNode, Error, FrameSet};
use tempfile::TempDir;

fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

fn no_progress() -> impl FnMut(jdchm::Stage, &Path) {
    |_, _| {}
}

/// Build the multi-package fixture: one real package plus an "All Classes"
/// book whose listing page is deliberately absent.
fn multi_package_tree(root: &Path) {
    write_file(
        root,
        "index.html",
        concat!(
            "<frame src=\"overview-frame.html\" name=\"packageListFrame\">\n",
            "<frame src=\"overview-summary.html\" name=\"classFrame\">\n",
        ),
    );
    write_file(root, "overview-summary.html", "<html></html>\n");
    write_file(root, "overview-tree.html", "<html></html>\n");
    write_file(
        root,
        "overview-frame.html",
        concat!(
            "<li><a href=\"allclasses-frame.html\" target=\"packageFrame\">All Classes</a></li>\n",
            "<li><a href=\"com/example/package-frame.html\" target=\"packageFrame\">com.example</a></li>\n",
        ),
    );
    write_file(root, "com/example/package-tree.html", "<html></html>\n");
    write_file(
        root,
        "com/example/package-frame.html",
        concat!(
            "<li><a href=\"Widget.html\" title=\"class in com.example\">Widget</a></li>\n",
            "<li><a href=\"Shape.html\" title=\"interface in com.example\"><span class=\"interfaceName\">Shape</span></a></li>\n",
            "<li><a href=\"Widget.Handle.html\" title=\"class in com.example\">Widget.Handle</a></li>\n",
            "<li><a href=\"../com/example/package-summary.html\" target=\"classFrame\">com.example</a></li>\n",
        ),
    );
    write_file(
        root,
        "com/example/Widget.html",
        concat!(
            "<td><code><b><a href=\"../../com/example/Widget.Handle.html\" title=\"class in com.example\">Widget.Handle</a></b></code></td>\n",
            "<td><code><b><a href=\"../../com/example/Widget.html#size()\">size</a></b>()</code></td>\n",
            "<td><code><b><a href=\"../../com/example/Widget.html#resize(int, int)\">resize</a></b>(int&nbsp;width, int&nbsp;height)</code></td>\n",
            "<td><code><b><a href=\"../../com/example/Widget.html#fill(java.awt.Color)\">fill</a></b>(<a href=\"../../java/awt/Color.html\" title=\"class in java.awt\">Color</a>&nbsp;c)</code></td>\n",
            "<td><code><b><a href=\"../../com/example/Widget.html#DEFAULT_SIZE\">DEFAULT_SIZE</a></b></code></td>\n",
        ),
    );
    write_file(
        root,
        "com/example/Widget.Handle.html",
        concat!(
            "<td><code><b><a href=\"../../com/example/Widget.Handle.html#grab()\">grab</a></b>()</code></td>\n",
            "<td><code><b><a href=\"../../com/example/Widget.Handle.html\">Widget.Handle</a></b></code></td>\n",
        ),
    );
}

#[test]
fn single_package_toc_nesting() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write_file(
        root,
        "index.html",
        concat!(
            "<frame src=\"allclasses-frame.html\">\n",
            "<frame src=\"com/example/package-summary.html\">\n",
        ),
    );
    write_file(
        root,
        "allclasses-frame.html",
        "<li><a href=\"Foo.html\" title=\"class in com.example\">Foo</a></li>\n",
    );
    write_file(
        root,
        "Foo.html",
        "<td><code><b><a href=\"Foo.html#bar()\">bar</a></b>()</code></td>\n",
    );

    let frames = FrameSet::resolve(root).unwrap();
    let (nodes, stats) = toc::scan(root, &frames, &mut no_progress()).unwrap();

    // The default page does not exist on disk, so no Overview leaf: the
    // synthetic "All Classes" book is the only root node.
    assert_eq!(nodes.len(), 1);
    let ContentNode::Book {
        title, children, ..
    } = &nodes[0]
    else {
        panic!("expected a book, got {:?}", nodes[0]);
    };
    assert_eq!(title, "All Classes");
    assert_eq!(children.len(), 1);
    let ContentNode::Class { title, members, .. } = &children[0] else {
        panic!("expected a class, got {:?}", children[0]);
    };
    assert_eq!(title, "Foo");
    assert_eq!(members.len(), 1);
    let ContentNode::Member(entry) = &members[0] else {
        panic!("expected a member, got {:?}", members[0]);
    };
    assert_eq!(entry.label(), "bar ()");
    assert_eq!(entry.href, "Foo.html#bar()");

    assert_eq!(stats.books, 1);
    assert_eq!(stats.classes, 1);
    assert_eq!(stats.members, 1);
}

#[test]
fn multi_package_books_and_members() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    multi_package_tree(root);

    let frames = FrameSet::resolve(root).unwrap();
    let (nodes, stats) = toc::scan(root, &frames, &mut no_progress()).unwrap();

    // Overview leaf, global hierarchy leaf, then the one surviving book
    // (the "All Classes" book is skipped: its listing page is absent).
    assert_eq!(nodes.len(), 3);
    assert_eq!(
        nodes[0],
        ContentNode::Leaf {
            title: "Overview".to_string(),
            href: "overview-summary.html".to_string(),
        }
    );
    assert_eq!(
        nodes[1],
        ContentNode::Leaf {
            title: "Hierarchy For All Packages".to_string(),
            href: "overview-tree.html".to_string(),
        }
    );
    let ContentNode::Book {
        title,
        href,
        children,
    } = &nodes[2]
    else {
        panic!("expected a book, got {:?}", nodes[2]);
    };
    assert_eq!(title, "com.example");
    assert_eq!(href, "com/example/package-summary.html");

    // Hierarchy leaf, Widget, Shape. The Widget.Handle package row and the
    // package-summary row are both skipped.
    assert_eq!(children.len(), 3);
    assert_eq!(
        children[0],
        ContentNode::Leaf {
            title: "Hierarchy For Package com.example".to_string(),
            href: "com/example/package-tree.html".to_string(),
        }
    );

    let ContentNode::Class {
        title,
        href,
        is_interface,
        members,
    } = &children[1]
    else {
        panic!("expected a class, got {:?}", children[1]);
    };
    assert_eq!(title, "Widget");
    assert_eq!(href, "com/example/Widget.html");
    assert!(!is_interface);

    // Inner-class pass first, then members in file order.
    assert_eq!(members.len(), 5);
    let ContentNode::Class {
        title,
        href,
        members: inner_members,
        ..
    } = &members[0]
    else {
        panic!("expected the inner class, got {:?}", members[0]);
    };
    assert_eq!(title, "Handle");
    assert_eq!(href, "com/example/Widget.Handle.html");
    assert_eq!(inner_members.len(), 1);
    let ContentNode::Member(grab) = &inner_members[0] else {
        panic!("expected a member, got {:?}", inner_members[0]);
    };
    assert_eq!(grab.label(), "grab ()");

    let labels: Vec<String> = members[1..]
        .iter()
        .map(|node| match node {
            ContentNode::Member(entry) => entry.label(),
            other => panic!("expected members, got {other:?}"),
        })
        .collect();
    assert_eq!(
        labels,
        vec![
            "size ()",
            "resize (int&nbsp;width, int&nbsp;height)",
            "fill (Color&nbsp;c)",
            "DEFAULT_SIZE",
        ]
    );

    let ContentNode::Class {
        title, members, ..
    } = &children[2]
    else {
        panic!("expected an interface, got {:?}", children[2]);
    };
    assert_eq!(title, "Shape (Interface)");
    // Shape.html does not exist: leaf entry, no members.
    assert!(members.is_empty());

    assert_eq!(stats.books, 1);
    assert_eq!(stats.classes, 3);
    assert_eq!(stats.members, 5);
    // package-summary row + inner row at package level + dotted member row.
    assert_eq!(stats.skipped_rows, 3);
}

#[test]
fn inner_class_listed_exactly_once() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    multi_package_tree(root);

    let frames = FrameSet::resolve(root).unwrap();
    let (nodes, _) = toc::scan(root, &frames, &mut no_progress()).unwrap();

    fn count_title(nodes: &[ContentNode], wanted: &str) -> usize {
        nodes
            .iter()
            .map(|node| match node {
                ContentNode::Book {
                    title, children, ..
                } => (title == wanted) as usize + count_title(children, wanted),
                ContentNode::Class { title, members, .. } => {
                    (title == wanted) as usize + count_title(members, wanted)
                }
                ContentNode::Member(entry) => (entry.name == wanted) as usize,
                ContentNode::Leaf { title, .. } => (title == wanted) as usize,
            })
            .sum()
    }

    // Only the nested "Handle" node; never a top-level "Widget.Handle".
    assert_eq!(count_title(&nodes, "Handle"), 1);
    assert_eq!(count_title(&nodes, "Widget.Handle"), 0);
}

#[test]
fn serialization_order_and_idempotence() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    multi_package_tree(root);

    let frames = FrameSet::resolve(root).unwrap();
    let (nodes, _) = toc::scan(root, &frames, &mut no_progress()).unwrap();
    let mut first = Vec::new();
    toc::write_toc(&mut first, &nodes, fixed_date()).unwrap();
    let document = String::from_utf8(first.clone()).unwrap();

    assert!(document.contains("March-01-2024"));
    assert!(document.ends_with("</ul>\n</body>\n</html>\n"));

    let expected_order = [
        "value=\"Overview\"",
        "value=\"Hierarchy For All Packages\"",
        "value=\"com.example\"",
        "value=\"Hierarchy For Package com.example\"",
        "value=\"Widget\"",
        "value=\"Handle\"",
        "value=\"grab ()\"",
        "value=\"size ()\"",
        "value=\"resize (int&nbsp;width, int&nbsp;height)\"",
        "value=\"fill (Color&nbsp;c)\"",
        "value=\"DEFAULT_SIZE\"",
        "value=\"Shape (Interface)\"",
    ];
    let mut last = 0;
    for needle in expected_order {
        let pos = document[last..]
            .find(needle)
            .unwrap_or_else(|| panic!("{needle} missing or out of order"));
        last += pos + needle.len();
    }

    // A second scan of the unchanged tree serializes byte-identically.
    let (nodes, _) = toc::scan(root, &frames, &mut no_progress()).unwrap();
    let mut second = Vec::new();
    toc::write_toc(&mut second, &nodes, fixed_date()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_content_page_is_fatal() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write_file(
        root,
        "index.html",
        "<frame src=\"overview-frame.html\">\n<frame src=\"overview-summary.html\">\n",
    );
    let frames = FrameSet::resolve(root).unwrap();
    match toc::scan(root, &frames, &mut no_progress()) {
        Err(Error::MissingInput(path)) => assert!(path.ends_with("overview-frame.html")),
        other => panic!("expected MissingInput, got {other:?}"),
    }
}
