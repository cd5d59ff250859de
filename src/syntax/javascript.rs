//! JavaScript rule set
//!
//! The ordered rule list and the word tables used by the classifier.

use super::rules::{CommentRule, PatternRule, Rule, StringRule};

/// Reserved words
pub const KEYWORDS: &[&str] = &[
    "await", "async", "class", "const", "let", "var", "function", "if", "else", "for", "while",
    "return", "new", "this", "try", "catch", "throw", "finally", "switch", "case", "break",
    "continue", "typeof", "instanceof", "import", "export", "from",
];

/// Boolean literals
pub const BOOLEANS: &[&str] = &["true", "false"];

/// Well-known globals.
///
/// Only `document` is anchored; the other names match anywhere in a word.
/// `async` and `await` are already claimed by [`KEYWORDS`].
pub const BUILTIN_PATTERN: &str = "^document|window|console|Math|Array|Object|String|Number|JSON|Date|RegExp|Map|Set|Promise|async|await";

/// Characters that open a string literal
pub const QUOTES: &[char] = &['\'', '"', '`'];

const WORD: &str = r"[A-Za-z_$][A-Za-z0-9_$]*";
const NUMBER: &str = r"0x[0-9a-fA-F]+|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+\-]?[0-9]+)?";
const OPERATOR: &str = r"[\-+*/%<>=\&|\^!?]+";
const PUNCTUATION: &str = r"[{}\[\];(),.:]+";

/// Build the rule list in priority order
pub fn javascript_rules() -> Vec<Rule> {
    let mut rules = vec![
        Rule::Comment(CommentRule),
        Rule::String(StringRule::new(QUOTES, '\\')),
    ];

    if let Some(rule) = PatternRule::new("word", WORD) {
        rules.push(Rule::Word(rule));
    }
    if let Some(rule) = PatternRule::new("number", NUMBER) {
        rules.push(Rule::Number(rule));
    }
    if let Some(rule) = PatternRule::new("operator", OPERATOR) {
        rules.push(Rule::Operator(rule));
    }
    if let Some(rule) = PatternRule::new("punctuation", PUNCTUATION) {
        rules.push(Rule::Punctuation(rule));
    }

    rules
}
