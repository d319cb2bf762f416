/*!
 * Front matter splitting and fixed-layout encoding.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::DocumentError;

use super::model::Header;

// Opening marker on the first line, lazily matched YAML block, closing marker
// on its own line. Whitespace-only lines after the closing marker belong to
// neither part.
static FRONT_MATTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)\A\x{FEFF}?---[ \t]*\r?\n((?s:.*?))^(?:---|\.\.\.)\s*$\r?\n?").unwrap()
});

/// Split raw content into its YAML block and its body
pub fn split_front_matter(raw: &str) -> Result<(&str, &str), DocumentError> {
    if !raw.trim_start_matches('\u{feff}').starts_with("---") {
        return Err(DocumentError::malformed("content does not start with '---'"));
    }

    let captures = FRONT_MATTER
        .captures(raw)
        .ok_or_else(|| DocumentError::malformed("closing '---' marker not found"))?;

    // Group 0 and 1 always participate when the pattern matches
    let whole = captures.get(0).map_or(0, |m| m.end());
    let yaml = captures.get(1).map_or("", |m| m.as_str());

    Ok((yaml, &raw[whole..]))
}

/// Render a header and body in the fixed front matter layout
pub fn encode(header: &Header, body: &str) -> String {
    let front_matter = [
        format!("title: {}", header.title),
        format!("slug: {}", header.slug),
        "l10n:".to_string(),
        format!("  sourceCommit: {}", header.source_commit),
    ]
    .join("\n");

    format!("---\n{}\n---\n\n{}", front_matter, body)
}
