//! Literal templates for the three help-project documents.
//!
//! The sitemap blocks follow the HTML Help Workshop "Sitemap 1.0" format:
//! an `<object type="text/sitemap">` per entry with `Name`/`Local`
//! parameters, nested with plain `<ul>` blocks. Captured titles and hrefs
//! are written verbatim; the source HTML is generator-escaped already and
//! re-escaping would double-escape entities.

/// Project file header, up to and including the `[FILES]` section marker.
/// The manifest walk appends one line per HTML file after it.
pub fn project_header(name: &str, title: &str, default_topic: &str) -> String {
    format!(
        "[OPTIONS]\n\
         Auto Index=Yes\n\
         Binary TOC=Yes\n\
         Compatibility=1.1 or later\n\
         Compiled file={name}.chm\n\
         Contents file={name}.hhc\n\
         Default Window=main\n\
         Default topic={default_topic}\n\
         Display compile progress=No\n\
         Full-text search=Yes\n\
         Index file={name}.hhk\n\
         Language=0x409 English (United States)\n\
         Title={title}\n\
         \n\
         [WINDOWS]\n\
         main=\"{title}\",\"{name}.hhc\",\"{name}.hhk\",\"{default_topic}\",\"{default_topic}\",,,,,0x63520,,0x384e,[0,0,760,500],0xb0000,,,,,,,0\n\
         \n\
         [FILES]\n"
    )
}

/// Contents document header; the site-properties block makes books render
/// with folder icons.
pub fn contents_header(date: &str) -> String {
    format!(
        "<!DOCTYPE HTML PUBLIC \"-//IETF//DTD HTML//EN\">\n\
         <html>\n\
         <head>\n\
         <meta name=\"GENERATOR\" content=\"jdchm\">\n\
         <!-- Sitemap 1.0 -->\n\
         <!-- Generated on {date} -->\n\
         </head>\n\
         <body>\n\
         <object type=\"text/site properties\">\n\
         <param name=\"ImageType\" value=\"Folder\">\n\
         </object>\n"
    )
}

/// Index document header.
pub fn index_header(date: &str) -> String {
    format!(
        "<!DOCTYPE HTML PUBLIC \"-//IETF//DTD HTML//EN\">\n\
         <html>\n\
         <head>\n\
         <meta name=\"GENERATOR\" content=\"jdchm\">\n\
         <!-- Sitemap 1.0 -->\n\
         <!-- Generated on {date} -->\n\
         </head>\n\
         <body>\n"
    )
}

/// One sitemap entry with a title and a target page.
pub fn sitemap_item(title: &str, href: &str) -> String {
    format!(
        "<li><object type=\"text/sitemap\">\n\
         <param name=\"Name\" value=\"{title}\">\n\
         <param name=\"Local\" value=\"{href}\">\n\
         </object></li>\n"
    )
}

/// A keyword header grouping several index sub-entries; carries no target
/// of its own.
pub fn keyword_item(keyword: &str) -> String {
    format!(
        "<li><object type=\"text/sitemap\">\n\
         <param name=\"Name\" value=\"{keyword}\">\n\
         </object></li>\n"
    )
}

pub const UL_OPEN: &str = "<ul>\n";
pub const UL_CLOSE: &str = "</ul>\n";
/// Closes the outer list and the document.
pub const SITEMAP_FOOTER: &str = "</ul>\n</body>\n</html>\n";
