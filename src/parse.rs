//! Stream-style parsing helpers backing the vector `FromStr` impls.

use crate::error::Error;

/// Splits one leading float off `s`: leading whitespace is skipped, then the
/// longest numeric-looking prefix is taken and parsed.
pub(crate) fn component(s: &str) -> Result<(f32, &str), Error> {
    let s = s.trim_start();
    let end = s
        .find(|c: char| !matches!(c, '0'..='9' | '+' | '-' | '.' | 'e' | 'E'))
        .unwrap_or(s.len());
    let (token, rest) = s.split_at(end);
    let value = token
        .parse::<f32>()
        .map_err(|_| Error::ParseVector(s.to_owned()))?;

    Ok((value, rest))
}

/// Skips exactly one separator character, whatever it is.
pub(crate) fn skip_separator(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next();
    chars.as_str()
}

/// Strips one pair of surrounding parentheses, if present.
pub(crate) fn strip_parens(s: &str) -> &str {
    let s = s.trim();
    s.strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .unwrap_or(s)
}
