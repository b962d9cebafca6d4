//! Accept-Language header parsing.
//!
//! Parses an RFC-4647-style `Accept-Language` value into an ordered list of
//! (tag, quality) pairs. Parsing is total: malformed entries are skipped
//! rather than failing the whole header, since detection sits on a request
//! hot path and must never reject input.

/// A single parsed entry from an `Accept-Language` header.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptLanguageEntry {
    /// The full language tag as sent by the client (e.g., "fr-FR")
    pub tag: String,

    /// Quality value in [0, 1]; defaults to 1.0 when `;q=` is absent
    pub quality: f64,
}

/// Parse an `Accept-Language` header value.
///
/// Entries are comma-separated `tag[;q=value]` tokens
/// (e.g., `"fr-FR,fr;q=0.9,en;q=0.8"`).
///
/// - A missing quality parameter defaults to 1.0.
/// - Quality values are clamped to [0, 1].
/// - Entries with an empty tag or a non-numeric quality are skipped.
/// - The result is sorted by descending quality; the sort is stable, so
///   header order is preserved among equal qualities.
///
/// # Returns
/// The parsed entries, highest quality first. An empty or all-malformed
/// header yields an empty vector.
pub fn parse_accept_language(header: &str) -> Vec<AcceptLanguageEntry> {
    let mut entries: Vec<AcceptLanguageEntry> = header
        .split(',')
        .filter_map(parse_entry)
        .collect();

    entries.sort_by(|a, b| b.quality.total_cmp(&a.quality));
    entries
}

/// Parse one `tag[;q=value]` token, or `None` if it is malformed.
fn parse_entry(token: &str) -> Option<AcceptLanguageEntry> {
    let mut parts = token.split(';');

    let tag = parts.next()?.trim();
    if tag.is_empty() {
        return None;
    }

    let mut quality = 1.0;
    for param in parts {
        let (key, value) = param.split_once('=')?;
        if key.trim().eq_ignore_ascii_case("q") {
            let parsed: f64 = value.trim().parse().ok()?;
            if !parsed.is_finite() {
                return None;
            }
            quality = parsed.clamp(0.0, 1.0);
        }
    }

    Some(AcceptLanguageEntry {
        tag: tag.to_string(),
        quality,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Basic Parsing Tests ====================

    #[test]
    fn test_parse_single_tag_defaults_to_full_quality() {
        let entries = parse_accept_language("fr");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].tag, "fr");
        assert_eq!(entries[0].quality, 1.0);
    }

    #[test]
    fn test_parse_typical_browser_header() {
        let entries = parse_accept_language("fr-FR,fr;q=0.9,en;q=0.8");
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].tag, "fr-FR");
        assert_eq!(entries[0].quality, 1.0);
        assert_eq!(entries[1].tag, "fr");
        assert_eq!(entries[1].quality, 0.9);
        assert_eq!(entries[2].tag, "en");
        assert_eq!(entries[2].quality, 0.8);
    }

    #[test]
    fn test_parse_handles_whitespace() {
        let entries = parse_accept_language(" en-US , fr ; q=0.5 ");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].tag, "en-US");
        assert_eq!(entries[1].tag, "fr");
        assert_eq!(entries[1].quality, 0.5);
    }

    #[test]
    fn test_parse_empty_header() {
        assert!(parse_accept_language("").is_empty());
    }

    // ==================== Ordering Tests ====================

    #[test]
    fn test_sorted_by_descending_quality() {
        // Tag order in the header must not override quality
        let entries = parse_accept_language("fr;q=0.3,en;q=0.8");
        assert_eq!(entries[0].tag, "en");
        assert_eq!(entries[1].tag, "fr");
    }

    #[test]
    fn test_stable_sort_preserves_header_order_on_ties() {
        let entries = parse_accept_language("de;q=0.5,it;q=0.5,pt;q=0.5");
        let tags: Vec<&str> = entries.iter().map(|e| e.tag.as_str()).collect();
        assert_eq!(tags, vec!["de", "it", "pt"]);
    }

    // ==================== Malformed Input Tests ====================

    #[test]
    fn test_skips_empty_tags() {
        let entries = parse_accept_language(",,en,,");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].tag, "en");
    }

    #[test]
    fn test_skips_non_numeric_quality() {
        let entries = parse_accept_language("fr;q=abc,en;q=0.8");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].tag, "en");
    }

    #[test]
    fn test_skips_nan_quality() {
        let entries = parse_accept_language("fr;q=NaN,en");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].tag, "en");
    }

    #[test]
    fn test_skips_param_without_equals() {
        let entries = parse_accept_language("fr;q,en");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].tag, "en");
    }

    #[test]
    fn test_clamps_out_of_range_quality() {
        let entries = parse_accept_language("fr;q=1.5,en;q=-0.2");
        assert_eq!(entries[0].tag, "fr");
        assert_eq!(entries[0].quality, 1.0);
        assert_eq!(entries[1].tag, "en");
        assert_eq!(entries[1].quality, 0.0);
    }

    #[test]
    fn test_garbage_header_yields_empty() {
        assert!(parse_accept_language(";;;,;q=,  ,").is_empty());
    }

    #[test]
    fn test_unknown_params_are_ignored() {
        let entries = parse_accept_language("en;level=1;q=0.6");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].quality, 0.6);
    }

    #[test]
    fn test_uppercase_q_parameter() {
        let entries = parse_accept_language("en;Q=0.4");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].quality, 0.4);
    }

    #[test]
    fn test_wildcard_tag_is_kept() {
        // The parser keeps `*`; resolution decides what to do with it
        let entries = parse_accept_language("*;q=0.1,en");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].tag, "en");
        assert_eq!(entries[1].tag, "*");
    }
}
