//! The highlighter
//!
//! Combines the ordered rule list, the word classifier, the style table
//! and the surface profile. Holds no per-invocation state, so one
//! highlighter can serve any number of callers at once.

use super::classifier::Classifier;
use super::javascript::javascript_rules;
use super::render::{markup, Highlighted, Segment};
use super::rules::{Matcher, Rule};
use super::style::{StyleProfile, StyleTable};
use super::tokens::{Token, TokenKind};

/// JavaScript syntax highlighter
pub struct Highlighter {
    /// Rules in priority order; the first match wins
    rules: Vec<Rule>,
    classifier: Classifier,
    styles: StyleTable,
    profile: StyleProfile,
}

impl Highlighter {
    /// Create a highlighter with the default rules, colors and profile
    pub fn new() -> Self {
        Self {
            rules: javascript_rules(),
            classifier: Classifier::default(),
            styles: StyleTable::default(),
            profile: StyleProfile::default(),
        }
    }

    /// Builder: replace the style table
    pub fn with_styles(mut self, styles: StyleTable) -> Self {
        self.styles = styles;
        self
    }

    /// Builder: replace the surface profile
    pub fn with_profile(mut self, profile: StyleProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    pub fn profile(&self) -> &StyleProfile {
        &self.profile
    }

    /// Match the next token at `pos`
    ///
    /// Always consumes at least one character when `pos` is inside `text`.
    pub fn next_token(&self, text: &str, pos: usize) -> Option<Token> {
        let ch = text.get(pos..)?.chars().next()?;

        for rule in &self.rules {
            if let Some(end) = rule.try_at(text, pos).filter(|&end| end > pos) {
                let kind = if rule.is_word() {
                    self.classifier.classify(&text[pos..end])
                } else {
                    rule.kind()
                };
                return Some(Token::new(pos, end, kind));
            }
        }

        Some(Token::new(pos, pos + ch.len_utf8(), TokenKind::PlainText))
    }

    /// Iterate over the tokens of `text`
    pub fn tokens<'h, 't>(&'h self, text: &'t str) -> Tokens<'h, 't> {
        Tokens {
            highlighter: self,
            text,
            pos: 0,
        }
    }

    /// Render `text` into segments, one per token
    pub fn segments(&self, text: &str) -> Vec<Segment> {
        self.tokens(text)
            .map(|token| Segment::from_token(&token, text, &self.styles))
            .collect()
    }

    /// Highlight `text` into a markup string
    pub fn highlight(&self, text: &str) -> String {
        let segments = self.segments(text);
        log::trace!("highlighted {} bytes into {} segments", text.len(), segments.len());
        markup(&segments)
    }

    /// Highlight `text` and pair the markup with the surface profile
    pub fn render(&self, text: &str) -> Highlighted {
        Highlighted {
            markup: self.highlight(text),
            profile: self.profile.clone(),
        }
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Token iterator over one source text
///
/// Owns the read cursor for a single invocation.
pub struct Tokens<'h, 't> {
    highlighter: &'h Highlighter,
    text: &'t str,
    pos: usize,
}

impl<'h, 't> Tokens<'h, 't> {
    /// Current cursor position
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<'h, 't> Iterator for Tokens<'h, 't> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.highlighter.next_token(self.text, self.pos)?;
        self.pos = token.end;
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::render::escape_html;
    use crate::syntax::style::Color;

    fn kinds(text: &str) -> Vec<(String, TokenKind)> {
        let highlighter = Highlighter::new();
        highlighter
            .tokens(text)
            .map(|t| (t.text(text).to_string(), t.kind))
            .collect()
    }

    fn unescape(text: &str) -> String {
        text.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#039;", "'")
            .replace("&amp;", "&")
    }

    #[test]
    fn test_keyword_statement() {
        let expected = [
            ("const", TokenKind::Keyword),
            (" ", TokenKind::PlainText),
            ("x", TokenKind::PlainText),
            (" ", TokenKind::PlainText),
            ("=", TokenKind::Operator),
            (" ", TokenKind::PlainText),
            ("1", TokenKind::Number),
            (";", TokenKind::Punctuation),
        ];
        let expected: Vec<(String, TokenKind)> =
            expected.into_iter().map(|(s, k)| (s.to_string(), k)).collect();
        assert_eq!(kinds("const x = 1;"), expected);
    }

    #[test]
    fn test_string_with_escaped_quote() {
        let text = r#""a\"b""#;
        assert_eq!(kinds(text), vec![(text.to_string(), TokenKind::String)]);
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(kinds("\"abc"), vec![("\"abc".to_string(), TokenKind::String)]);
    }

    #[test]
    fn test_hex_and_float() {
        let tokens: Vec<_> = kinds("0x1F + 3.14e2")
            .into_iter()
            .filter(|(_, k)| *k != TokenKind::PlainText)
            .collect();
        assert_eq!(
            tokens,
            vec![
                ("0x1F".to_string(), TokenKind::Number),
                ("+".to_string(), TokenKind::Operator),
                ("3.14e2".to_string(), TokenKind::Number),
            ]
        );
    }

    #[test]
    fn test_fallback_on_unknown_character() {
        assert_eq!(kinds("€"), vec![("€".to_string(), TokenKind::PlainText)]);
        assert_eq!(Highlighter::new().highlight("€"), "€");
        assert_eq!(kinds("#~"), vec![
            ("#".to_string(), TokenKind::PlainText),
            ("~".to_string(), TokenKind::PlainText),
        ]);
    }

    #[test]
    fn test_empty_input() {
        let highlighter = Highlighter::new();
        assert_eq!(highlighter.tokens("").count(), 0);
        assert!(highlighter.segments("").is_empty());
        assert_eq!(highlighter.highlight(""), "");
    }

    #[test]
    fn test_comment_priority() {
        assert_eq!(
            kinds("a // b \"c\"\nd"),
            vec![
                ("a".to_string(), TokenKind::PlainText),
                (" ".to_string(), TokenKind::PlainText),
                ("// b \"c\"".to_string(), TokenKind::Comment),
                ("\n".to_string(), TokenKind::PlainText),
                ("d".to_string(), TokenKind::PlainText),
            ]
        );
        assert_eq!(kinds("x /* open"), vec![
            ("x".to_string(), TokenKind::PlainText),
            (" ".to_string(), TokenKind::PlainText),
            ("/* open".to_string(), TokenKind::Comment),
        ]);
    }

    #[test]
    fn test_division_is_operator() {
        assert_eq!(kinds("a/b")[1], ("/".to_string(), TokenKind::Operator));
    }

    #[test]
    fn test_leading_dot_number_and_member_access() {
        assert_eq!(kinds(".5")[0], (".5".to_string(), TokenKind::Number));
        assert_eq!(
            kinds("console.log"),
            vec![
                ("console".to_string(), TokenKind::Builtin),
                (".".to_string(), TokenKind::Punctuation),
                ("log".to_string(), TokenKind::PlainText),
            ]
        );
    }

    #[test]
    fn test_dotted_number_leaves_remainder() {
        assert_eq!(
            kinds("1.2.3"),
            vec![
                ("1.2".to_string(), TokenKind::Number),
                (".3".to_string(), TokenKind::Number),
            ]
        );
    }

    #[test]
    fn test_booleans_and_builtins() {
        assert_eq!(kinds("true")[0].1, TokenKind::Boolean);
        assert_eq!(kinds("Promise")[0].1, TokenKind::Builtin);
        assert_eq!(kinds("await")[0].1, TokenKind::Keyword);
    }

    #[test]
    fn test_escaping_in_output() {
        let markup = Highlighter::new().highlight(r#"a < b && "x&y""#);
        assert!(markup.contains("&lt;"));
        assert!(markup.contains("&amp;&amp;"));
        assert!(markup.contains("&quot;x&amp;y&quot;"));
        // only the markup's own attributes may contain raw quotes
        let text_only = markup
            .replace("<span style=\"color: #f59e0b\">", "")
            .replace("<span style=\"color: #059669\">", "")
            .replace("</span>", "");
        assert!(!text_only.contains('<'));
        assert!(!text_only.contains('"'));
        assert!(!text_only.replace("&amp;", "").replace("&lt;", "").replace("&quot;", "").contains('&'));
    }

    #[test]
    fn test_exact_markup() {
        assert_eq!(
            Highlighter::new().highlight("let s = 'hi';"),
            "<span style=\"color: #7c3aed\">let</span> s \
             <span style=\"color: #f59e0b\">=</span> \
             <span style=\"color: #059669\">&#039;hi&#039;</span>\
             <span style=\"color: #6b7280\">;</span>"
        );
    }

    #[test]
    fn test_lossless_and_progress() {
        let samples = [
            "",
            "   \t\n",
            "const x = 1;",
            "async function f() { await fetch(`/api/${id}`); }",
            "/* unterminated",
            "'unterminated \\",
            "x = a ?? b?.c || !d;",
            "let é = '€'; // ünïcödé ✓",
            "0x 0xZZ 1e+ .e5 1..2",
            "\r\n\u{2028}\u{2029}\0",
            "@#~\\",
        ];
        let highlighter = Highlighter::new();
        for text in samples {
            let mut rebuilt = String::new();
            let mut last = 0;
            for token in highlighter.tokens(text) {
                assert!(token.len() >= 1, "empty token in {:?}", text);
                assert_eq!(token.start, last, "gap in {:?}", text);
                last = token.end;
                rebuilt.push_str(token.text(text));
            }
            assert_eq!(rebuilt, text);

            let unescaped: String = highlighter
                .segments(text)
                .iter()
                .map(|s| unescape(&s.text))
                .collect();
            assert_eq!(unescaped, text);
        }
    }

    #[test]
    fn test_idempotent() {
        let highlighter = Highlighter::new();
        let text = "if (window.x) { return Math.max(1, 2); }";
        let first = highlighter.highlight(text);
        assert_eq!(highlighter.highlight(text), first);
        assert_eq!(Highlighter::new().highlight(text), first);
    }

    #[test]
    fn test_custom_styles() {
        let styles = StyleTable::empty().with(TokenKind::PlainText, Color::rgb(1, 2, 3));
        let highlighter = Highlighter::new().with_styles(styles);
        assert_eq!(
            highlighter.highlight("x;"),
            "<span style=\"color: #010203\">x</span>;"
        );
    }

    #[test]
    fn test_render_carries_profile() {
        let highlighter = Highlighter::new();
        let rendered = highlighter.render("1");
        assert_eq!(rendered.markup, highlighter.highlight("1"));
        assert_eq!(&rendered.profile, highlighter.profile());
    }

    #[test]
    fn test_segment_text_is_escaped() {
        let highlighter = Highlighter::new();
        for segment in highlighter.segments("a<b") {
            assert_eq!(segment.text, escape_html(&unescape(&segment.text)));
        }
    }

    #[test]
    fn test_tokens_cursor() {
        let highlighter = Highlighter::new();
        let mut tokens = highlighter.tokens("ab cd");
        assert_eq!(tokens.position(), 0);
        tokens.next();
        assert_eq!(tokens.position(), 2);
        assert_eq!(tokens.count(), 2);
    }

    #[test]
    fn test_highlighter_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Highlighter>();

        let highlighter = Highlighter::new();
        let expected = highlighter.highlight("let a = [1, 2];");
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| assert_eq!(highlighter.highlight("let a = [1, 2];"), expected));
            }
        });
    }
}
