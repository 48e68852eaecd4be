//! Markdown viewer
//!
//! Converts the markdown subset used in document content into HTML.
//! All text goes through [`html_escape`], so raw HTML in the source is shown as text.

use leptos::prelude::*;

#[component]
pub fn MarkdownViewer(
    /// Raw markdown
    #[prop(into)]
    content: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="markdown-body" inner_html=move || render_markdown(&content.get())></div>
    }
}

/// Глубже этого уровня цитата выводится как текст
const MAX_QUOTE_DEPTH: usize = 8;

#[derive(Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

/// Накопитель блоков при построчном разборе
#[derive(Default)]
struct Blocks {
    depth: usize,
    out: Vec<String>,
    paragraph: Vec<String>,
    quote: Vec<String>,
    list: Option<(ListKind, Vec<String>)>,
}

impl Blocks {
    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let text = self.paragraph.join("\n");
        self.paragraph.clear();
        self.out.push(format!("<p>{}</p>", render_inline(&text)));
    }

    fn flush_quote(&mut self) {
        if self.quote.is_empty() {
            return;
        }
        let text = self.quote.join("\n");
        self.quote.clear();
        let inner = if self.depth + 1 < MAX_QUOTE_DEPTH {
            render_blocks(&text, self.depth + 1)
        } else if text.trim().is_empty() {
            String::new()
        } else {
            format!("<p>{}</p>", render_inline(&text))
        };
        self.out.push(format!("<blockquote>{}</blockquote>", inner));
    }

    fn flush_list(&mut self) {
        if let Some((kind, items)) = self.list.take() {
            let tag = match kind {
                ListKind::Unordered => "ul",
                ListKind::Ordered => "ol",
            };
            let items: String = items
                .iter()
                .map(|item| format!("<li>{}</li>", render_inline(item)))
                .collect();
            self.out.push(format!("<{tag}>{items}</{tag}>"));
        }
    }

    fn flush_all(&mut self) {
        self.flush_paragraph();
        self.flush_quote();
        self.flush_list();
    }

    fn push_list_item(&mut self, kind: ListKind, item: &str) {
        self.flush_paragraph();
        self.flush_quote();
        if matches!(&self.list, Some((current, _)) if *current != kind) {
            self.flush_list();
        }
        self.list
            .get_or_insert_with(|| (kind, Vec::new()))
            .1
            .push(item.to_string());
    }
}

/// Render markdown into HTML. Pure function of `content`.
pub fn render_markdown(content: &str) -> String {
    render_blocks(content, 0)
}

fn render_blocks(content: &str, depth: usize) -> String {
    let mut blocks = Blocks {
        depth,
        ..Blocks::default()
    };
    // (language, lines) открытого блока кода
    let mut code: Option<(String, Vec<&str>)> = None;

    for line in content.lines() {
        let trimmed = line.trim();

        if let Some((lang, lines)) = code.as_mut() {
            if trimmed.starts_with("```") {
                let html = code_block(lang, lines);
                blocks.out.push(html);
                code = None;
            } else {
                lines.push(line);
            }
            continue;
        }

        if let Some(lang) = trimmed.strip_prefix("```") {
            blocks.flush_all();
            code = Some((lang.trim().to_string(), Vec::new()));
            continue;
        }

        if trimmed.is_empty() {
            blocks.flush_all();
            continue;
        }

        if let Some((level, text)) = heading(trimmed) {
            blocks.flush_all();
            blocks
                .out
                .push(format!("<h{level}>{}</h{level}>", render_inline(text)));
            continue;
        }

        if is_rule(trimmed) {
            blocks.flush_all();
            blocks.out.push("<hr/>".to_string());
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix('>') {
            blocks.flush_paragraph();
            blocks.flush_list();
            blocks
                .quote
                .push(rest.strip_prefix(' ').unwrap_or(rest).to_string());
            continue;
        }

        if let Some(item) = unordered_item(trimmed) {
            blocks.push_list_item(ListKind::Unordered, item);
            continue;
        }

        if let Some(item) = ordered_item(trimmed) {
            blocks.push_list_item(ListKind::Ordered, item);
            continue;
        }

        // продолжение пункта списка с отступом
        if line.starts_with(char::is_whitespace) {
            if let Some((_, items)) = blocks.list.as_mut() {
                if let Some(last) = items.last_mut() {
                    last.push(' ');
                    last.push_str(trimmed);
                    continue;
                }
            }
        }

        blocks.flush_quote();
        blocks.flush_list();
        blocks.paragraph.push(trimmed.to_string());
    }

    // незакрытый блок кода выводится как есть
    if let Some((lang, lines)) = code.take() {
        blocks.out.push(code_block(&lang, &lines));
    }
    blocks.flush_all();

    blocks.out.join("\n")
}

fn code_block(lang: &str, lines: &[&str]) -> String {
    let body = html_escape(&lines.join("\n"));
    if lang.is_empty() {
        format!("<pre><code>{}</code></pre>", body)
    } else {
        format!(
            "<pre><code class=\"language-{}\">{}</code></pre>",
            html_escape(lang),
            body
        )
    }
}

fn heading(line: &str) -> Option<(usize, &str)> {
    let level = line.chars().take_while(|c| *c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let rest = &line[level..];
    if rest.is_empty() {
        return Some((level, ""));
    }
    if !rest.starts_with(' ') {
        return None;
    }
    Some((level, rest.trim().trim_end_matches('#').trim_end()))
}

fn is_rule(line: &str) -> bool {
    let compact: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
    compact.len() >= 3
        && matches!(compact[0], '-' | '*' | '_')
        && compact.iter().all(|c| *c == compact[0])
}

fn unordered_item(line: &str) -> Option<&str> {
    ["- ", "* ", "+ "]
        .iter()
        .find_map(|marker| line.strip_prefix(marker))
        .map(str::trim)
}

fn ordered_item(line: &str) -> Option<&str> {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 || digits > 9 {
        return None;
    }
    line[digits..].strip_prefix(". ").map(str::trim)
}

/// Inline markup: `code`, **strong**, *em*, [links](url)
fn render_inline(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let closers = Closers::new(&chars);
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let parsed = match chars[i] {
            '`' => code_span(&chars, i),
            '*' => emphasis(&chars, i),
            '[' => link(&chars, i, &closers),
            _ => None,
        };

        match parsed {
            Some((html, next)) => {
                out.push_str(&html);
                i = next;
            }
            None => {
                push_escaped(&mut out, chars[i]);
                i += 1;
            }
        }
    }

    out
}

fn find_char(chars: &[char], from: usize, needle: char) -> Option<usize> {
    chars
        .get(from..)?
        .iter()
        .position(|c| *c == needle)
        .map(|p| p + from)
}

/// Позиции ближайших `]` и `)` для каждого индекса строки
struct Closers {
    bracket: Vec<Option<usize>>,
    paren: Vec<Option<usize>>,
}

impl Closers {
    fn new(chars: &[char]) -> Self {
        if !chars.contains(&'[') {
            return Self {
                bracket: Vec::new(),
                paren: Vec::new(),
            };
        }
        Self {
            bracket: next_positions(chars, ']'),
            paren: next_positions(chars, ')'),
        }
    }

    fn bracket_from(&self, from: usize) -> Option<usize> {
        self.bracket.get(from).copied().flatten()
    }

    fn paren_from(&self, from: usize) -> Option<usize> {
        self.paren.get(from).copied().flatten()
    }
}

fn next_positions(chars: &[char], needle: char) -> Vec<Option<usize>> {
    let mut next = vec![None; chars.len() + 1];
    for i in (0..chars.len()).rev() {
        next[i] = if chars[i] == needle { Some(i) } else { next[i + 1] };
    }
    next
}

fn collect(chars: &[char]) -> String {
    chars.iter().collect()
}

fn code_span(chars: &[char], start: usize) -> Option<(String, usize)> {
    let end = find_char(chars, start + 1, '`')?;
    if end == start + 1 {
        return None;
    }
    let inner = collect(&chars[start + 1..end]);
    Some((format!("<code>{}</code>", html_escape(&inner)), end + 1))
}

fn emphasis(chars: &[char], start: usize) -> Option<(String, usize)> {
    if chars.get(start + 1) == Some(&'*') {
        let mut from = start + 2;
        while let Some(end) = find_char(chars, from, '*') {
            if chars.get(end + 1) == Some(&'*') {
                if end == start + 2 {
                    return None;
                }
                let inner = collect(&chars[start + 2..end]);
                return Some((
                    format!("<strong>{}</strong>", render_inline(&inner)),
                    end + 2,
                ));
            }
            from = end + 1;
        }
        return None;
    }

    let first = chars.get(start + 1)?;
    if first.is_whitespace() {
        return None;
    }
    let end = find_char(chars, start + 1, '*')?;
    let inner = collect(&chars[start + 1..end]);
    Some((format!("<em>{}</em>", render_inline(&inner)), end + 1))
}

fn link(chars: &[char], start: usize, closers: &Closers) -> Option<(String, usize)> {
    let close = closers.bracket_from(start + 1)?;
    if chars.get(close + 1) != Some(&'(') {
        return None;
    }
    let end = closers.paren_from(close + 2)?;
    let label = render_inline(&collect(&chars[start + 1..close]));
    let url = collect(&chars[close + 2..end]);
    let url = url.trim();

    if is_safe_url(url) {
        Some((
            format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                html_escape(url),
                label
            ),
            end + 1,
        ))
    } else {
        Some((label, end + 1))
    }
}

/// Относительные ссылки и http(s)/mailto
fn is_safe_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }
    let scheme_end = url.find(|c| matches!(c, ':' | '/' | '?' | '#'));
    match scheme_end {
        Some(pos) if url[pos..].starts_with(':') => {
            let scheme = url[..pos].to_ascii_lowercase();
            matches!(scheme.as_str(), "http" | "https" | "mailto")
        }
        _ => true,
    }
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        _ => out.push(c),
    }
}

pub fn html_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        push_escaped(&mut out, c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_raw_html() {
        assert_eq!(
            render_markdown("<script>alert(1)</script>"),
            "<p>&lt;script&gt;alert(1)&lt;/script&gt;</p>"
        );
    }

    #[test]
    fn test_headings() {
        assert_eq!(render_markdown("# Title"), "<h1>Title</h1>");
        assert_eq!(render_markdown("### Sub ###"), "<h3>Sub</h3>");
        assert_eq!(render_markdown("####### deep"), "<p>####### deep</p>");
        assert_eq!(render_markdown("#hashtag"), "<p>#hashtag</p>");
    }

    #[test]
    fn test_paragraphs() {
        assert_eq!(
            render_markdown("first line\nsecond line\n\nnext"),
            "<p>first line\nsecond line</p>\n<p>next</p>"
        );
    }

    #[test]
    fn test_lists() {
        assert_eq!(
            render_markdown("- a\n- b"),
            "<ul><li>a</li><li>b</li></ul>"
        );
        assert_eq!(
            render_markdown("1. one\n2. two\n   continued"),
            "<ol><li>one</li><li>two continued</li></ol>"
        );
        assert_eq!(
            render_markdown("- a\n1. b"),
            "<ul><li>a</li></ul>\n<ol><li>b</li></ol>"
        );
    }

    #[test]
    fn test_code_block() {
        assert_eq!(
            render_markdown("```rust\nlet a = 1 < 2;\n  *not em*\n```"),
            "<pre><code class=\"language-rust\">let a = 1 &lt; 2;\n  *not em*</code></pre>"
        );
        assert_eq!(
            render_markdown("```\nopen"),
            "<pre><code>open</code></pre>"
        );
    }

    #[test]
    fn test_inline() {
        assert_eq!(
            render_markdown("**bold** and *it* and `x<y`"),
            "<p><strong>bold</strong> and <em>it</em> and <code>x&lt;y</code></p>"
        );
        assert_eq!(render_markdown("a * b"), "<p>a * b</p>");
        assert_eq!(render_markdown("SERPER_API_KEY"), "<p>SERPER_API_KEY</p>");
    }

    #[test]
    fn test_links() {
        assert_eq!(
            render_markdown("[serper.dev](https://serper.dev)"),
            "<p><a href=\"https://serper.dev\" target=\"_blank\" rel=\"noopener noreferrer\">serper.dev</a></p>"
        );
        assert_eq!(
            render_markdown("[docs](/docs/connectors)"),
            "<p><a href=\"/docs/connectors\" target=\"_blank\" rel=\"noopener noreferrer\">docs</a></p>"
        );

        let html = render_markdown("[click](javascript:alert(1))");
        assert!(!html.contains("href"));
        assert!(!html.contains("javascript"));
        assert!(html.starts_with("<p>click"));
    }

    #[test]
    fn test_quote_and_rule() {
        assert_eq!(
            render_markdown("> quoted\n> **text**"),
            "<blockquote><p>quoted\n<strong>text</strong></p></blockquote>"
        );
        assert_eq!(render_markdown("a\n\n---\n\nb"), "<p>a</p>\n<hr/>\n<p>b</p>");
    }

    #[test]
    fn test_deep_quote_nesting_is_capped() {
        let html = render_markdown(&">".repeat(10_000));
        assert_eq!(html.matches("<blockquote>").count(), MAX_QUOTE_DEPTH);
        assert_eq!(html.matches("</blockquote>").count(), MAX_QUOTE_DEPTH);
        assert!(html.contains("<p>&gt;&gt;&gt;"));

        let html = render_markdown("> outer\n>> inner");
        assert_eq!(
            html,
            "<blockquote><p>outer</p>\n<blockquote><p>inner</p></blockquote></blockquote>"
        );
    }

    #[test]
    fn test_unclosed_links_render_in_linear_time() {
        use std::time::{Duration, Instant};

        let inputs = [
            "[".repeat(100_000),
            "[a](".repeat(25_000),
            format!("{}]", "[".repeat(100_000)),
        ];
        let started = Instant::now();
        for input in &inputs {
            let html = render_markdown(input);
            assert!(!html.contains("<a "));
            assert!(html.starts_with("<p>["));
        }
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn test_render_is_pure() {
        let content = String::from("# Doc\n\nSome *content* with <tags>.\n\n- item");
        let before = content.clone();
        let first = render_markdown(&content);
        let second = render_markdown(&content);
        assert_eq!(first, second);
        assert_eq!(content, before);
    }
}
