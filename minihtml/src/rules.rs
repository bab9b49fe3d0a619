//! Ordered text substitutions applied to a single page buffer.
//!
//! The pipeline is a fold over [`RULES`]: each rule replaces every
//! non-overlapping match in the output of all rules before it. The asset
//! suffix rules run first so the whitespace passes see rewritten references,
//! and `>\s+<` runs before the one-sided whitespace passes.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

/// A global (pattern, replacement) substitution.
#[derive(Debug)]
pub struct Rule {
    name: &'static str,
    regex: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        let regex = match Regex::new(pattern) {
            Ok(regex) => regex,
            Err(err) => panic!("Invalid substitution rule '{name}': {err}"),
        };
        Self {
            name,
            regex,
            replacement,
        }
    }

    /// Short identifier, used in trace logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The regular expression source of this rule.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Replacement template; `${1}` refers to the captured quote.
    #[must_use]
    pub fn replacement(&self) -> &'static str {
        self.replacement
    }

    /// Replace every match in `text`. Borrows when nothing matched.
    #[must_use]
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.regex.replace_all(text, self.replacement)
    }
}

/// The six page rules, in application order.
pub static RULES: LazyLock<[Rule; 6]> = LazyLock::new(|| {
    [
        // x.js" -> x.js-min"
        Rule::new("js-suffix", r#"\.js(["'])"#, ".js-min${1}"),
        // x.css' -> x.css-min'
        Rule::new("css-suffix", r#"\.css(["'])"#, ".css-min${1}"),
        // page.htm" -> page.html"; page.html" has no quote right after "htm"
        Rule::new("htm-to-html", r#"\.htm(["'])"#, ".html${1}"),
        Rule::new("inter-tag-space", r">\s+<", "><"),
        Rule::new("space-after-tag", r">\s+", ">"),
        Rule::new("space-before-tag", r"\s+<", "<"),
    ]
});

/// Run `rules` in order over `text`, each rule seeing the previous output.
#[must_use]
pub fn apply_rules(text: &str, rules: &[Rule]) -> String {
    let mut buffer = text.to_owned();
    for rule in rules {
        let next = match rule.apply(&buffer) {
            Cow::Borrowed(_) => continue,
            Cow::Owned(next) => next,
        };
        trace!(
            rule = rule.name(),
            before = buffer.len(),
            after = next.len(),
            "rule rewrote buffer"
        );
        buffer = next;
    }
    buffer
}

/// Minify one page's text with the full rule set.
#[must_use]
pub fn minify_html(text: &str) -> String {
    apply_rules(text, RULES.as_slice())
}
