//! Locator normalization: raw selectors/XPaths to structural templates.
//!
//! A template erases instance-specific indices, numeric id/class suffixes,
//! and build hashes so that elements differing only in position or identity
//! collapse onto one pattern. Normalization is a pure string function: same
//! input, same output, and every rewrite rule is idempotent.

use regex::{Captures, Regex};
use std::sync::OnceLock;

struct LocatorPatterns {
    /// Positional pseudo-classes, removed entirely
    positional: Regex,
    /// An id/class token; rewritten token-wise by [`normalize_token`]
    css_token: Regex,
    /// Pure-integer positional predicate on a path segment
    xpath_index: Regex,
    /// Numeric-literal attribute predicate, reduced to the bare attribute
    xpath_numeric_attr: Regex,
}

fn patterns() -> &'static LocatorPatterns {
    static PATTERNS: OnceLock<LocatorPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| LocatorPatterns {
        positional: Regex::new(r":(?:nth-child|nth-of-type)\(\d+\)|:first-child|:last-child")
            .expect("positional pattern compiles"),
        css_token: Regex::new(r"[#.][A-Za-z_][\w-]*\*?").expect("token pattern compiles"),
        xpath_index: Regex::new(r"\[\d+\]").expect("xpath index pattern compiles"),
        xpath_numeric_attr: Regex::new(r#"\[@([\w-]+)\s*=\s*(?:'\d+'|"\d+"|\d+)\]"#)
            .expect("xpath attribute pattern compiles"),
    })
}

/// Normalize a CSS-selector-like locator into its structural template.
///
/// Empty input yields an empty string, never an error. Rules are applied in
/// order: positional pseudo-classes are stripped, then numeric id/class
/// suffixes and hash-like class suffixes collapse to `*` with their
/// separator preserved. Tokens with no such suffix are left untouched, which
/// keeps distinct static selectors from collapsing together.
pub fn normalize_selector(selector: &str) -> String {
    let trimmed = selector.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let p = patterns();
    let stripped = p.positional.replace_all(trimmed, "");
    let collapsed = p
        .css_token
        .replace_all(&stripped, |caps: &Captures| normalize_token(&caps[0]));

    collapsed.trim().to_string()
}

/// Rewrite one `#id` or `.class` token.
fn normalize_token(token: &str) -> String {
    // Already normalized tokens are inert; keeps the pipeline idempotent.
    if token.ends_with('*') {
        return token.to_string();
    }

    // Trailing numeric suffix: digits collapse to `*`, separator kept.
    let without_digits = token.trim_end_matches(|c: char| c.is_ascii_digit());
    if without_digits.len() < token.len() && without_digits.len() > 1 {
        return format!("{}*", without_digits);
    }

    // Hash-like final segment: >=6 alphanumeric chars mixing letters and
    // digits after the last -/_ separator, typically a build hash.
    if let Some(sep) = token.rfind(['-', '_']) {
        let tail = &token[sep + 1..];
        let hash_like = tail.len() >= 6
            && tail.chars().all(|c| c.is_ascii_alphanumeric())
            && tail.chars().any(|c| c.is_ascii_alphabetic())
            && tail.chars().any(|c| c.is_ascii_digit());
        if hash_like {
            return format!("{}*", &token[..=sep]);
        }
    }

    token.to_string()
}

/// Normalize an XPath-like locator into its structural template.
///
/// Pure-integer positional predicates (`[3]`) are stripped from each path
/// segment; numeric-literal attribute predicates (`[@id='42']`) reduce to
/// the bare attribute (`[@id]`). Non-numeric predicates are preserved as-is.
pub fn normalize_xpath(xpath: &str) -> String {
    let trimmed = xpath.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let p = patterns();
    let stripped = p.xpath_index.replace_all(trimmed, "");
    let reduced = p.xpath_numeric_attr.replace_all(&stripped, "[@${1}]");

    reduced.into_owned()
}
