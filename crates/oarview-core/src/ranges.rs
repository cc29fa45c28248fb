//! Compression of raw "host/core" resource tokens into compact range
//! notation, e.g. `dahu-3[0-7,12], dahu-4[0-3]`.

use crate::errors::{CoreError, Result};

/// Parse a raw resource token into (short host name, core index).
///
/// Tokens look like `dahu-3.grenoble.grid5000.fr/12`; everything before the
/// first dot is the short host name, everything after the slash must be a
/// non-negative integer. Anything else is a [`CoreError::MalformedToken`],
/// which callers are expected to log and skip rather than abort the render.
pub fn parse_token(token: &str) -> Result<(String, u32)> {
    let (host_part, core_part) = token
        .split_once('/')
        .ok_or_else(|| CoreError::MalformedToken(token.to_string()))?;

    let host = host_part.split('.').next().unwrap_or("");
    if host.is_empty() {
        return Err(CoreError::MalformedToken(token.to_string()));
    }

    let core = core_part
        .parse::<u32>()
        .map_err(|_| CoreError::MalformedToken(token.to_string()))?;

    Ok((host.to_string(), core))
}

/// Compress (host, core) pairs into one display string, truncated to
/// `max_width` characters.
///
/// Hosts appear sorted by name; each host's cores are sorted, de-duplicated
/// and collapsed into maximal runs of consecutive indices. The expression
/// covers the input set exactly: no index is added, dropped or repeated.
pub fn compress_pairs(mut pairs: Vec<(String, u32)>, max_width: usize) -> String {
    // Sorting the pairs first makes grouping independent of input order;
    // groups are then built in first-seen order over the sorted list.
    pairs.sort();

    let mut groups: Vec<(String, Vec<u32>)> = Vec::new();
    for (host, core) in pairs {
        match groups.last_mut() {
            Some((name, cores)) if *name == host => cores.push(core),
            _ => groups.push((host, vec![core])),
        }
    }

    let mut parts = Vec::with_capacity(groups.len());
    for (host, mut cores) in groups {
        cores.sort_unstable();
        cores.dedup();
        parts.push(format!("{}[{}]", host, format_runs(&cores)));
    }

    truncate_text(&parts.join(", "), max_width)
}

/// Collapse sorted, unique core indices into comma-joined runs.
fn format_runs(cores: &[u32]) -> String {
    let mut iter = cores.iter().copied();
    let first = match iter.next() {
        Some(c) => c,
        None => return String::new(),
    };

    let mut runs = Vec::new();
    let mut start = first;
    let mut prev = first;
    for core in iter {
        if core != prev + 1 {
            runs.push(close_run(start, prev));
            start = core;
        }
        prev = core;
    }
    runs.push(close_run(start, prev));

    runs.join(",")
}

fn close_run(start: u32, end: u32) -> String {
    if start == end {
        start.to_string()
    } else {
        format!("{}-{}", start, end)
    }
}

/// Truncate `text` to at most `max_width` characters, appending "..." when
/// something was cut.
///
/// Counts characters, not bytes, so a multi-byte character is never split.
/// Widths of 3 or less leave no room for an ellipsis; those return the
/// first `max_width` characters as-is.
pub fn truncate_text(text: &str, max_width: usize) -> String {
    if text.chars().count() <= max_width {
        return text.to_string();
    }

    if max_width <= 3 {
        return text.chars().take(max_width).collect();
    }

    let mut out: String = text.chars().take(max_width - 3).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDE: usize = 200;

    fn pairs(tokens: &[&str]) -> Vec<(String, u32)> {
        tokens.iter().map(|t| parse_token(t).unwrap()).collect()
    }

    #[test]
    fn test_parse_token() {
        assert_eq!(
            parse_token("dahu-3.grenoble.grid5000.fr/12").unwrap(),
            ("dahu-3".to_string(), 12)
        );
        // A bare host name without a domain is accepted too.
        assert_eq!(parse_token("a/0").unwrap(), ("a".to_string(), 0));
    }

    #[test]
    fn test_parse_token_malformed() {
        for bad in ["dahu-3.grenoble", "dahu-3/x", "/4", "dahu-3/", "dahu-3/-1"] {
            assert!(
                matches!(parse_token(bad), Err(CoreError::MalformedToken(_))),
                "expected rejection of {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_consecutive_cores_become_range() {
        let p = vec![
            ("host".to_string(), 0),
            ("host".to_string(), 1),
            ("host".to_string(), 2),
            ("host".to_string(), 3),
        ];
        assert_eq!(compress_pairs(p, WIDE), "host[0-3]");
    }

    #[test]
    fn test_sparse_cores_stay_singletons() {
        let p = vec![
            ("host".to_string(), 0),
            ("host".to_string(), 2),
            ("host".to_string(), 4),
        ];
        assert_eq!(compress_pairs(p, WIDE), "host[0,2,4]");
    }

    #[test]
    fn test_single_core_no_dash() {
        assert_eq!(compress_pairs(vec![("host".to_string(), 5)], WIDE), "host[5]");
    }

    #[test]
    fn test_mixed_runs() {
        let p = pairs(&["n.site/1", "n.site/2", "n.site/3", "n.site/7", "n.site/9", "n.site/10"]);
        assert_eq!(compress_pairs(p, WIDE), "n[1-3,7,9-10]");
    }

    #[test]
    fn test_two_hosts_sorted_by_name() {
        let p = pairs(&["b.site/3", "a.site/1", "a.site/0"]);
        assert_eq!(compress_pairs(p, WIDE), "a[0-1], b[3]");
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let forward = pairs(&["a/0", "a/1", "a/2", "b/5"]);
        let shuffled = pairs(&["b/5", "a/2", "a/0", "a/1"]);
        assert_eq!(compress_pairs(forward, WIDE), compress_pairs(shuffled, WIDE));
    }

    #[test]
    fn test_duplicate_cores_collapse() {
        let p = pairs(&["a/1", "a/1", "a/2"]);
        assert_eq!(compress_pairs(p, WIDE), "a[1-2]");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(compress_pairs(Vec::new(), WIDE), "");
    }

    #[test]
    fn test_round_trip_recovers_core_set() {
        let cores = vec![0u32, 1, 2, 5, 7, 8, 9, 20];
        let p: Vec<_> = cores.iter().map(|&c| ("node".to_string(), c)).collect();
        let compressed = compress_pairs(p, WIDE);

        let inner = compressed
            .strip_prefix("node[")
            .and_then(|s| s.strip_suffix(']'))
            .unwrap();
        let mut expanded = Vec::new();
        for part in inner.split(',') {
            match part.split_once('-') {
                Some((lo, hi)) => {
                    let (lo, hi): (u32, u32) = (lo.parse().unwrap(), hi.parse().unwrap());
                    expanded.extend(lo..=hi);
                }
                None => expanded.push(part.parse().unwrap()),
            }
        }
        assert_eq!(expanded, cores);
    }

    #[test]
    fn test_truncation_exact_width_with_ellipsis() {
        let p = pairs(&["longhostname/0", "longhostname/2", "longhostname/4"]);
        let out = compress_pairs(p, 10);
        assert_eq!(out.chars().count(), 10);
        assert!(out.ends_with("..."));
        assert_eq!(out, "longhos...");
    }

    #[test]
    fn test_truncate_text_short_input_untouched() {
        assert_eq!(truncate_text("abc", 10), "abc");
        assert_eq!(truncate_text("abcdefghij", 10), "abcdefghij");
    }

    #[test]
    fn test_truncate_text_tiny_width_no_ellipsis() {
        assert_eq!(truncate_text("abcdef", 3), "abc");
        assert_eq!(truncate_text("abcdef", 1), "a");
        assert_eq!(truncate_text("abcdef", 0), "");
    }

    #[test]
    fn test_truncate_text_multibyte_safe() {
        // 6 characters, each 2 bytes; cutting must happen between chars.
        let s = "éééééé";
        let out = truncate_text(s, 5);
        assert_eq!(out, "éé...");
        assert_eq!(out.chars().count(), 5);
    }
}
