//! Term classification and name ordering shared by lookup and table sorting

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Whether `term` coerces to a number the way a browser's `Number()` would
///
/// Accepts decimal and exponent literals, `0x`/`0o`/`0b` integers and
/// `Infinity`. Everything else is treated as a name search.
pub fn is_numeric_term(term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }

    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        if let Some(digits) = strip_prefix_ignore_case(term, prefix) {
            return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
        }
    }

    let unsigned = term.strip_prefix(['+', '-']).unwrap_or(term);
    if unsigned == "Infinity" {
        return true;
    }

    // f64::from_str also takes "inf" and "nan", which Number() rejects
    let starts_like_number = unsigned
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '.');
    starts_like_number && unsigned.parse::<f64>().is_ok()
}

fn strip_prefix_ignore_case<'a>(term: &'a str, prefix: &str) -> Option<&'a str> {
    let head = term.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &term[prefix.len()..])
}

/// Accent- and case-folded form of a name, the primary collation key
fn base_letters(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Locale-style name comparison
///
/// Compares base letters first so "Émile" sorts beside "Emile" rather than
/// after "Zoe", then breaks ties on case-folded and finally raw text.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}
