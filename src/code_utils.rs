use egui_code_editor::Syntax;

/// Número de líneas del editor, igual que `split("\n").length` en JS.
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

/// Entradas del gutter: "1".."n", una por línea del editor.
pub fn gutter_lines(text: &str) -> Vec<String> {
    (1..=line_count(text)).map(|n| n.to_string()).collect()
}

pub fn html_syntax() -> Syntax {
    Syntax::new("html")
        .with_case_sensitive(false)
        .with_comment_multiline(["<!--", "-->"])
        .with_keywords([
            "html", "head", "body", "title", "meta", "link", "style", "script", "div", "span",
            "p", "a", "img", "ul", "ol", "li", "table", "tr", "td", "th", "form", "input",
            "button", "label", "section", "article", "header", "footer", "nav", "main", "h1",
            "h2", "h3", "h4", "h5", "h6", "pre", "code", "br", "hr", "canvas", "svg", "video",
            "audio", "iframe",
        ])
        .with_types([
            "href", "src", "alt", "class", "id", "style", "type", "name", "value", "lang",
            "charset", "rel", "target", "width", "height",
        ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gutter_follows_line_count() {
        assert_eq!(gutter_lines("<h1>Hi</h1>\nok"), vec!["1", "2"]);
        assert_eq!(gutter_lines(""), vec!["1"]);
        assert_eq!(gutter_lines("a\n"), vec!["1", "2"]);
        assert_eq!(line_count("\n\n\n"), 4);
    }
}
