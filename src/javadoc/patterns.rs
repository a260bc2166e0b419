//! Cached regex patterns for Javadoc page scanning.
//!
//! Uses LazyLock to compile each pattern once on first use. Each entry kind
//! (frame row, book row, class row, inner-class row, method row, index row)
//! gets a typed extraction function so callers never touch capture indices.
//!
//! The expressions are deliberately permissive: Javadoc output varies across
//! releases (attribute order, optional interface markers, italic wrappers)
//! and any line that does not match is decorative markup, not a data row.

use regex::Regex;
use std::sync::LazyLock;

/// Matches <frame src="..."> declarations on the frame-set root page.
static FRAME_SRC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^<frame src="(?P<src>[^"]*)""#).unwrap());

/// Matches a package (book) row on the overview frame.
static BOOK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)^<li><a\shref="(?P<href>[^"]*)".*>(?P<title>.*)</a></li>"#).unwrap()
});

/// Matches a class/interface row on a package listing page. The optional
/// middle group captures the interface marker span when present.
static CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)^<li><a\shref="(?P<href>[^"]*)"[^<]*>(?P<iface>[^>]*>)?(?P<title>[^>]*)(?:</span>)?</a></li>"#,
    )
    .unwrap()
});

/// Matches an inner-class summary row on a class page.
static INNER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<td>.*<a\s+href="(?P<href>[^"]*)"[^>]*>(?P<title>[^<]*)</a></b></code>"#)
        .unwrap()
});

/// Matches a method or field summary row on a class page. The trailing group
/// captures the parenthesized argument list; fields have none.
static METHOD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<td><code><b><a\s+href="(?P<href>[^"]*)">(?P<name>[^<]*)</a></b>(?P<args>\([^)]*\))?</code>"#,
    )
    .unwrap()
});

/// Matches an anchored parameter: a linked type followed by the rest of the
/// declaration (the `;` comes from the `&nbsp;` between type and name).
static ARG_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<a\s+href=[^>]*>(?P<ty>[^<]*)</a>(?P<rest>.*;.*)"#).unwrap()
});

/// Matches one entry on an alphabetical index page.
static INDEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<dt><span class=".*"><a href="(?P<href>.*)">(?P<kw>.*)</a></span>"#).unwrap()
});

/// Matches the <title> element of the root page.
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<title>\s*(?P<title>[^<]*)\s*</title>"#).unwrap());

/// Matches a method summary link, used by the staging URL cleanup.
static METHOD_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<td><code><b><a\s+href="(?P<href>[^"]*)">"#).unwrap());

/// Matches a bookmark anchor, used by the staging URL cleanup.
static BOOKMARK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<a name="(?P<name>[^"]*)">"#).unwrap());

/// A package row on the overview frame.
#[derive(Debug, PartialEq, Eq)]
pub struct BookRow<'a> {
    pub href: &'a str,
    pub title: &'a str,
}

/// A class or interface row on a package listing page.
#[derive(Debug, PartialEq, Eq)]
pub struct ClassRow<'a> {
    pub href: &'a str,
    pub title: &'a str,
    pub is_interface: bool,
}

/// An inner-class summary row; `title` is the dotted `Owner.Inner` form.
#[derive(Debug, PartialEq, Eq)]
pub struct InnerRow<'a> {
    pub href: &'a str,
    pub title: &'a str,
}

/// A member summary row; `args` keeps the parentheses when present.
#[derive(Debug, PartialEq, Eq)]
pub struct MethodRow<'a> {
    pub href: &'a str,
    pub name: &'a str,
    pub args: Option<&'a str>,
}

/// One keyword entry on an index page.
#[derive(Debug, PartialEq, Eq)]
pub struct IndexRow<'a> {
    pub href: &'a str,
    pub keyword: &'a str,
}

/// Extract the `src` of a frame declaration. Case-sensitive: modern Javadoc
/// emits lowercase frame tags and the uppercase legacy form is not handled.
pub fn frame_src(line: &str) -> Option<&str> {
    FRAME_SRC_RE
        .captures(line)
        .map(|c| c.name("src").unwrap().as_str())
}

/// Extract a package row from one overview-frame line.
pub fn book_row(line: &str) -> Option<BookRow<'_>> {
    BOOK_RE.captures(line).map(|c| BookRow {
        href: c.name("href").unwrap().as_str(),
        title: c.name("title").unwrap().as_str(),
    })
}

/// Extract a class/interface row from one package-frame line.
pub fn class_row(line: &str) -> Option<ClassRow<'_>> {
    CLASS_RE.captures(line).map(|c| ClassRow {
        href: c.name("href").unwrap().as_str(),
        title: c.name("title").unwrap().as_str(),
        is_interface: c.name("iface").is_some(),
    })
}

/// Iterate over the inner-class summary rows of a class page.
pub fn inner_rows(data: &str) -> impl Iterator<Item = InnerRow<'_>> {
    INNER_RE.captures_iter(data).map(|c| InnerRow {
        href: c.name("href").unwrap().as_str(),
        title: c.name("title").unwrap().as_str(),
    })
}

/// Iterate over the member summary rows of a class page.
pub fn method_rows(data: &str) -> impl Iterator<Item = MethodRow<'_>> {
    METHOD_RE.captures_iter(data).map(|c| MethodRow {
        href: c.name("href").unwrap().as_str(),
        name: c.name("name").unwrap().as_str(),
        args: c.name("args").map(|m| m.as_str()),
    })
}

/// Iterate over the entries of an index page.
pub fn index_rows(data: &str) -> impl Iterator<Item = IndexRow<'_>> {
    INDEX_RE.captures_iter(data).map(|c| IndexRow {
        href: c.name("href").unwrap().as_str(),
        keyword: c.name("kw").unwrap().as_str(),
    })
}

/// Collapse an anchored parameter to `{linked type}{trailing declaration}`,
/// stripping the hyperlink markup but keeping everything else verbatim.
/// Returns `None` when the parameter carries no embedded link.
pub fn collapse_linked_arg(arg: &str) -> Option<String> {
    ARG_LINK_RE.captures(arg).map(|c| {
        format!(
            "{}{}",
            c.name("ty").unwrap().as_str(),
            c.name("rest").unwrap().as_str()
        )
    })
}

/// Extract the trimmed document title from raw page data.
pub fn page_title(data: &str) -> Option<&str> {
    TITLE_RE
        .captures(data)
        .map(|c| c.name("title").unwrap().as_str().trim())
}

/// Extract the target of a method summary link (staging cleanup).
pub fn method_link_target(line: &str) -> Option<&str> {
    METHOD_LINK_RE
        .captures(line)
        .map(|c| c.name("href").unwrap().as_str())
}

/// Extract the target of a bookmark anchor (staging cleanup).
pub fn bookmark_target(line: &str) -> Option<&str> {
    BOOKMARK_RE
        .captures(line)
        .map(|c| c.name("name").unwrap().as_str())
}

/// Strip any `(../)*` prefix from a Javadoc href, leaving a root-relative
/// path.
pub fn strip_parent_prefix(href: &str) -> &str {
    let mut rest = href;
    while let Some(stripped) = rest.strip_prefix("../") {
        rest = stripped;
    }
    rest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_src_extracts_first_attribute() {
        let line = r#"<frame src="overview-frame.html" name="packageListFrame" title="All Packages">"#;
        assert_eq!(frame_src(line), Some("overview-frame.html"));
    }

    #[test]
    fn frame_src_is_case_sensitive() {
        // Legacy uppercase frame tags are intentionally not matched.
        assert_eq!(frame_src(r#"<FRAME SRC="overview-frame.html">"#), None);
    }

    #[test]
    fn book_row_skips_target_attribute() {
        let line = r#"<li><a href="com/example/package-frame.html" target="packageFrame">com.example</a></li>"#;
        let row = book_row(line).unwrap();
        assert_eq!(row.href, "com/example/package-frame.html");
        assert_eq!(row.title, "com.example");
    }

    #[test]
    fn class_row_plain_class() {
        let line = r#"<li><a href="Widget.html" title="class in com.example">Widget</a></li>"#;
        let row = class_row(line).unwrap();
        assert_eq!(row.href, "Widget.html");
        assert_eq!(row.title, "Widget");
        assert!(!row.is_interface);
    }

    #[test]
    fn class_row_interface_marker() {
        let line = r#"<li><a href="Shape.html" title="interface in com.example"><span class="interfaceName">Shape</span></a></li>"#;
        let row = class_row(line).unwrap();
        assert_eq!(row.title, "Shape");
        assert!(row.is_interface);
    }

    #[test]
    fn class_row_rejects_decorative_markup() {
        assert!(class_row(r#"<h1 class="bar">com.example</h1>"#).is_none());
        assert!(class_row(r#"<li>Interfaces</li>"#).is_none());
    }

    #[test]
    fn method_row_with_and_without_args() {
        let data = concat!(
            r#"<td><code><b><a href="Foo.html#bar()">bar</a></b>()</code>"#,
            "\n",
            r#"<td><code><b><a href="Foo.html#SIZE">SIZE</a></b></code>"#,
            "\n",
        );
        let rows: Vec<_> = method_rows(data).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "bar");
        assert_eq!(rows[0].args, Some("()"));
        assert_eq!(rows[1].name, "SIZE");
        assert_eq!(rows[1].args, None);
    }

    #[test]
    fn inner_row_captures_dotted_title() {
        let data = r#"<td><code><b><a href="../../com/example/Widget.Handle.html" title="class in com.example">Widget.Handle</a></b></code>"#;
        let rows: Vec<_> = inner_rows(data).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Widget.Handle");
    }

    #[test]
    fn index_row_greedy_href() {
        let line = r#"<dt><span class="memberNameLink"><a href="../com/example/Foo.html#bar()">bar</a></span> - method in class com.example.Foo</dt>"#;
        let rows: Vec<_> = index_rows(line).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].href, "../com/example/Foo.html#bar()");
        assert_eq!(rows[0].keyword, "bar");
    }

    #[test]
    fn collapse_linked_arg_keeps_trailing_declaration() {
        let arg = r#"<a href="../../java/awt/Color.html" title="class in java.awt">Color</a>&nbsp;c"#;
        assert_eq!(collapse_linked_arg(arg).as_deref(), Some("Color&nbsp;c"));
        // No semicolon after the link means no match.
        assert_eq!(collapse_linked_arg(r#"<a href="X.html">X</a>"#), None);
        assert_eq!(collapse_linked_arg("int&nbsp;x"), None);
    }

    #[test]
    fn strip_parent_prefix_removes_all_leading_updirs() {
        assert_eq!(
            strip_parent_prefix("../../com/example/Foo.html"),
            "com/example/Foo.html"
        );
        assert_eq!(strip_parent_prefix("Foo.html"), "Foo.html");
        // Only a leading run is stripped.
        assert_eq!(strip_parent_prefix("a/../b.html"), "a/../b.html");
    }

    #[test]
    fn page_title_trims_whitespace() {
        assert_eq!(
            page_title("<html><title> MyLib 1.0 API </title></html>"),
            Some("MyLib 1.0 API")
        );
        assert_eq!(page_title("<html></html>"), None);
    }

    #[test]
    fn staging_targets() {
        assert_eq!(
            method_link_target(r#"<td><code><b><a href="Foo.html#bar(int a, int b)">bar</a>"#),
            Some("Foo.html#bar(int a, int b)")
        );
        assert_eq!(
            bookmark_target(r#"<a name="bar(int a, int b)"><!-- --></a>"#),
            Some("bar(int a, int b)")
        );
    }
}
