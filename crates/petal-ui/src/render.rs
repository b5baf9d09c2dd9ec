//! Server-side rendering of the showcase page to HTML.

use dioxus::prelude::*;

use crate::page::ShowcasePage;
use crate::theme::GLOBAL_STYLES;

/// Title used for the exported document.
pub const DOCUMENT_TITLE: &str = "Petal Showcase";

/// Renders the page body to an HTML fragment.
pub fn render_page() -> String {
    let mut dom = VirtualDom::new(ShowcasePage);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);
    tracing::debug!(bytes = html.len(), "Rendered showcase page");
    html
}

/// Renders a standalone HTML5 document with the stylesheet inlined.
pub fn render_document() -> String {
    let body = render_page();
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{DOCUMENT_TITLE}</title>\n\
         <style>{GLOBAL_STYLES}</style>\n\
         </head>\n\
         <body>\n{body}\n</body>\n\
         </html>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_wraps_page() {
        let doc = render_document();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains(&render_page()));
        assert!(doc.contains("<title>Petal Showcase</title>"));
    }

    #[test]
    fn document_inlines_stylesheet() {
        let doc = render_document();
        assert!(doc.contains("<style>"));
        assert!(doc.contains(GLOBAL_STYLES));
    }
}
