//! Global component ID construction
//!
//! A GCID identifies a component across sources. It doubles as the relative
//! path of the component's media directory, so the first segments split the
//! id into short prefixes.

use std::collections::HashSet;
use std::sync::LazyLock;

const UNKNOWN_CHECKSUM: &str = "last";

static KNOWN_TLDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    include_str!("tld-list.txt")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
});

/// Whether `part` is a top-level domain we split reverse-DNS ids on
pub fn is_tld(part: &str) -> bool {
    KNOWN_TLDS.contains(part.to_lowercase().as_str())
}

/// Build the global ID for `cid` from its content checksum.
///
/// Returns `None` for ids that are empty or too short to split.
pub fn build_component_global_id(cid: &str, checksum: Option<&str>) -> Option<String> {
    if cid.chars().count() <= 2 {
        return None;
    }
    let checksum = checksum.filter(|c| !c.is_empty()).unwrap_or(UNKNOWN_CHECKSUM);

    let parts: Vec<&str> = cid.splitn(3, '.').collect();
    if let [tld, domain, rest] = parts.as_slice() {
        if is_tld(tld) {
            return Some(format!(
                "{}/{}/{rest}/{checksum}",
                tld.to_lowercase(),
                domain.to_lowercase()
            ));
        }
    }

    let cid_low = cid.to_lowercase();
    let first: String = cid_low.chars().take(1).collect();
    let second: String = cid_low.chars().take(2).collect();
    Some(format!("{first}/{second}/{cid_low}/{checksum}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_split() {
        assert_eq!(
            build_component_global_id("foobar.desktop", Some("DEADBEEF")).unwrap(),
            "f/fo/foobar.desktop/DEADBEEF"
        );
        assert_eq!(
            build_component_global_id("noto-cjk.font", Some("0000")).unwrap(),
            "n/no/noto-cjk.font/0000"
        );
    }

    #[test]
    fn test_reverse_dns_split() {
        assert_eq!(
            build_component_global_id("org.gnome.yelp.desktop", Some("DEADBEEF")).unwrap(),
            "org/gnome/yelp.desktop/DEADBEEF"
        );
        assert_eq!(
            build_component_global_id("ORG.GNOME.Yelp", Some("x")).unwrap(),
            "org/gnome/Yelp/x"
        );
    }

    #[test]
    fn test_missing_checksum() {
        assert_eq!(
            build_component_global_id("io.sample.awesomeapp.sdk", None).unwrap(),
            "io/sample/awesomeapp.sdk/last"
        );
        assert_eq!(
            build_component_global_id("io.sample.awesomeapp.sdk", Some("")).unwrap(),
            "io/sample/awesomeapp.sdk/last"
        );
    }

    #[test]
    fn test_unknown_tld_uses_simple_split() {
        assert_eq!(
            build_component_global_id("Mozilla.Firefox.Nightly", Some("c")).unwrap(),
            "m/mo/mozilla.firefox.nightly/c"
        );
    }

    #[test]
    fn test_country_and_generic_tlds() {
        assert_eq!(
            build_component_global_id("tv.kodi.Kodi", Some("c")).unwrap(),
            "tv/kodi/Kodi/c"
        );
        assert_eq!(
            build_component_global_id("ai.foo.Bar", Some("c")).unwrap(),
            "ai/foo/Bar/c"
        );
        assert!(is_tld("IO"));
        assert!(is_tld("arpa"));
        assert!(!is_tld("desktop"));
        assert!(!is_tld("#"));
    }

    #[test]
    fn test_empty_or_short_id() {
        assert!(build_component_global_id("", Some("c")).is_none());
        assert!(build_component_global_id("ab", Some("c")).is_none());
    }
}
