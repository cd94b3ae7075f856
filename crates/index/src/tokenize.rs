/// Splits text into lowercase alphanumeric terms.
///
/// Anything that is not alphanumeric separates terms, so `"Server-side"` yields `server` and
/// `side`. Empty terms are dropped.
pub fn tokenize(text: &str) -> impl '_ + Iterator<Item = String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|m| !m.is_empty())
        .map(|m| m.to_lowercase())
}
