use leptos::prelude::*;
use pulldown_cmark::{html, Event, Options, Parser};

/// Renders report markdown (GFM tables, strikethrough, task lists) to HTML.
/// Raw HTML in the source is escaped rather than passed through.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_FOOTNOTES);

    let events = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut output = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut output, events);
    output
}

#[component]
pub fn MarkdownContent(#[prop(into)] source: String) -> impl IntoView {
    let html = render_markdown(&source);

    view! {
        <div class="markdown-content" inner_html=html></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_and_tables() {
        let html = render_markdown("# Report\n\n| Ticker | P/E |\n|---|---|\n| AAPL | 29.4 |\n");
        assert!(html.contains("<h1>Report</h1>"));
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>AAPL</td>"));
    }

    #[test]
    fn renders_strikethrough() {
        assert!(render_markdown("~~priced in~~").contains("<del>priced in</del>"));
    }

    #[test]
    fn escapes_raw_html() {
        let html = render_markdown("<script>alert(1)</script>\n\nText with <b>inline</b> tag");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<b>"));
    }
}
