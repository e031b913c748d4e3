use regex::Regex;
use semver::Version;
use std::sync::OnceLock;
use tracing::debug;

/// Matches `vX.Y.Z` where X, Y and Z are plain numbers.
fn regular_version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^v[0-9]+\.[0-9]+\.[0-9]+$").expect("valid regex"))
}

/// Parses a version token, ignoring a single leading `v`.
///
/// Returns `None` if the remainder is not a valid semantic version
/// (`major.minor.patch[-prerelease][+build]`).
pub fn parse_version_token(token: &str) -> Option<Version> {
    let clean = token.strip_prefix('v').unwrap_or(token);
    Version::parse(clean).ok()
}

/// Sorts version tokens by semantic version precedence.
///
/// Each item may carry a leading `v`. Items that fail to parse are returned
/// separately, sorted byte-wise. The original strings are returned in both
/// lists, so a `v` prefix survives sorting.
///
/// # Returns
/// `(malformed, sorted)` where every input item appears in exactly one list.
/// Two items that parse to versions of equal precedence may come out in
/// either order.
///
/// # Example
/// ```
/// use tool_util::version::sort_semantic_versions;
///
/// let items = ["v1.2.0", "v1.10.0", "not-a-version", "v1.2.0-alpha"];
/// let (malformed, sorted) = sort_semantic_versions(&items);
/// assert_eq!(malformed, vec!["not-a-version"]);
/// assert_eq!(sorted, vec!["v1.2.0-alpha", "v1.2.0", "v1.10.0"]);
/// ```
pub fn sort_semantic_versions<S: AsRef<str>>(items: &[S]) -> (Vec<String>, Vec<String>) {
    let mut parsed: Vec<(Version, &str)> = Vec::with_capacity(items.len());
    let mut malformed: Vec<String> = Vec::new();

    for item in items {
        let item = item.as_ref();
        match parse_version_token(item) {
            Some(version) => parsed.push((version, item)),
            None => {
                debug!(item, "malformed semantic version");
                malformed.push(item.to_string());
            }
        }
    }

    parsed.sort_unstable_by(|a, b| a.0.cmp(&b.0));
    malformed.sort_unstable();

    let sorted = parsed
        .into_iter()
        .map(|(_, item)| item.to_string())
        .collect();
    (malformed, sorted)
}

/// Reports whether `s` is a regular release version of the form `vX.Y.Z`.
///
/// Prerelease and build suffixes, a missing `v` prefix, or an uppercase `V`
/// all make the version irregular.
pub fn is_regular_version(s: &str) -> bool {
    regular_version_regex().is_match(s)
}
