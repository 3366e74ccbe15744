//! Positional defaulting for the colon-separated fields of one input line.

/// Merge the fields given on an input line over a fixed set of defaults.
///
/// Fields are positional. An empty given field takes the default at its
/// position, and when fewer fields are given than there are defaults the
/// remaining defaults are appended. Extra given fields beyond the defaults
/// are ignored. The result always has the same length as `defaults`.
pub fn overlay<'a>(given: &[&'a str], defaults: &[Option<&'a str>]) -> Vec<Option<&'a str>> {
    let l1 = given.len();
    let l2 = defaults.len();
    let rem = l2.saturating_sub(l1);
    let mut resolved = Vec::with_capacity(l2);
    for i in 0..l1.min(l2) {
        if given[i].is_empty() {
            resolved.push(defaults[i]);
        } else {
            resolved.push(Some(given[i]));
        }
    }
    if l1 < l2 {
        resolved.extend_from_slice(&defaults[l2 - rem..]);
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULTS: &[Option<&str>] = &[None, None, Some("86400"), Some("0"), None];

    #[test]
    fn test_empty_given_yields_defaults() {
        assert_eq!(overlay(&[], DEFAULTS), DEFAULTS.to_vec());
    }

    #[test]
    fn test_full_given_wins() {
        let given = ["example.com", "192.0.2.1", "300", "ff", "US"];
        let resolved = overlay(&given, DEFAULTS);
        assert_eq!(resolved, given.map(Some).to_vec());
    }

    #[test]
    fn test_empty_fields_take_defaults() {
        let resolved = overlay(&["example.com", "192.0.2.1", "", "ff"], DEFAULTS);
        assert_eq!(
            resolved,
            vec![
                Some("example.com"),
                Some("192.0.2.1"),
                Some("86400"),
                Some("ff"),
                None
            ]
        );
    }

    #[test]
    fn test_extra_given_ignored() {
        let given = ["a", "b", "c", "d", "e", "f", "g"];
        let resolved = overlay(&given, DEFAULTS);
        assert_eq!(resolved, given[..5].iter().map(|s| Some(*s)).collect::<Vec<_>>());
    }

    #[test]
    fn test_length_always_matches_defaults() {
        let given = ["a", "b", "c", "d", "e", "f", "g"];
        for n in 0..=given.len() {
            assert_eq!(overlay(&given[..n], DEFAULTS).len(), DEFAULTS.len());
        }
    }

    // The tail starts at `l2 - (l2 - l1)`, which must reduce to plain
    // `defaults[l1..]` for every short input.
    #[test]
    fn test_tail_slice_arithmetic() {
        for l1 in 0..DEFAULTS.len() {
            let given = vec!["x"; l1];
            let resolved = overlay(&given, DEFAULTS);
            assert_eq!(&resolved[l1..], &DEFAULTS[l1..]);
            assert_eq!(&resolved[..l1], &vec![Some("x"); l1][..]);
        }
    }
}
