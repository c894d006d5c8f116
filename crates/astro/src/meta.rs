//! Code-fence `meta` micro-format parsing.
//!
//! A fence like ````` ```python file=app.py highlight=2-3 ````` carries a
//! trailing metadata string of space-separated `key=value` tokens. The
//! code-block rewriter passes that string through raw; the renderer parses
//! it here when binding `CodeBlock` props.

/// Parses a `meta` string into ordered `(key, value)` pairs.
///
/// Tokens are split on spaces, each on the first `=`. Malformed tokens
/// (missing `=`, or missing either side of it) are silently dropped;
/// a bad token never fails the whole string.
pub fn parse_meta(meta: &str) -> Vec<(String, String)> {
    meta.split(' ')
        .filter_map(|token| {
            let (key, value) = token.split_once('=')?;
            if key.is_empty() || value.is_empty() {
                return None;
            }
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

/// Looks up the first value for `key` among parsed meta pairs.
pub fn meta_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}
