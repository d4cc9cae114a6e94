//! Notes Markdown Renderer
//!
//! Renders task/section notes to HTML with pulldown-cmark, with fenced
//! code blocks highlighted through syntect.

use pulldown_cmark::{html::push_html, CodeBlockKind, Event, Options, Parser, Tag, TagEnd};
use std::sync::OnceLock;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

/// Syntax highlighter resources (lazy loaded)
static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

fn get_syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn get_theme() -> &'static Theme {
    &THEME_SET.get_or_init(ThemeSet::load_defaults).themes["InspiredGitHub"]
}

fn get_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn highlight_code(code: &str, lang: &str) -> String {
    let syntax_set = get_syntax_set();
    let syntax = syntax_set
        .find_syntax_by_token(lang)
        .unwrap_or_else(|| syntax_set.find_syntax_plain_text());
    highlighted_html_for_string(code, syntax_set, syntax, get_theme())
        .unwrap_or_else(|_| format!("<pre><code>{}</code></pre>", escape_html(code)))
}

/// Render notes markdown to HTML
pub fn render_notes(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());

    let mut events: Vec<Event> = Vec::new();
    let mut code_lang: Option<String> = None;
    let mut code_buf = String::new();

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                code_lang = Some(match kind {
                    CodeBlockKind::Fenced(lang) => lang.to_string(),
                    CodeBlockKind::Indented => String::new(),
                });
                code_buf.clear();
            }
            Event::Text(text) if code_lang.is_some() => {
                code_buf.push_str(&text);
            }
            Event::End(TagEnd::CodeBlock) => {
                let lang = code_lang.take().unwrap_or_default();
                events.push(Event::Html(highlight_code(&code_buf, &lang).into()));
            }
            other => events.push(other),
        }
    }

    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_basic_markdown() {
        let html = render_notes("# Heading\n\nSome *notes*.");
        assert!(html.contains("<h1>Heading</h1>"));
        assert!(html.contains("<em>notes</em>"));
    }

    #[test]
    fn test_empty_notes_render_empty() {
        assert_eq!(render_notes(""), "");
    }

    #[test]
    fn test_fenced_code_is_highlighted() {
        let html = render_notes("```rust\nlet x = 1;\n```");
        // syntect emits inline-styled <pre> markup
        assert!(html.contains("<pre"));
        assert!(html.contains("style="));
    }

    #[test]
    fn test_unknown_language_falls_back_to_plain() {
        let html = render_notes("```nosuchlang\n<tag>\n```");
        assert!(html.contains("<pre"));
        assert!(!html.contains("<tag>"));
    }

    #[test]
    fn test_task_list_checkboxes() {
        let html = render_notes("- [x] done\n- [ ] todo");
        assert!(html.contains("checkbox"));
    }
}
