use pulldown_cmark::{html, Options, Parser};

/// Converts Markdown to HTML, best effort.
///
/// Accepts arbitrary text: malformed or unsupported syntax degrades to
/// literal output, and rendering never fails. Strikethrough and tables
/// are enabled on top of CommonMark.
pub fn to_html(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(text, options);
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_and_emphasis() {
        let html = to_html("# Hello World\n\nsome *body* text");
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("<em>body</em>"));
    }

    #[test]
    fn malformed_markdown_degrades_to_literal_text() {
        let html = to_html("**unclosed [link(nowhere ~~");
        assert!(html.contains("unclosed"));
    }

    #[test]
    fn empty_input_renders_to_empty_output() {
        assert_eq!(to_html(""), "");
    }
}
