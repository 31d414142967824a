/// Substrings that mark an attribute value as a fetchable web address
const ABSOLUTE_MARKERS: [&str; 2] = ["http", "www"];

/// Loose absolute-URL check used to keep or drop extracted attribute values.
///
/// A value passes when it contains `http` or `www` anywhere. Relative paths
/// such as `/img/a.png` fail. The check is intentionally a substring match and
/// not a URL parse, so values like `wwwhatever` are accepted too.
pub fn looks_absolute(value: &str) -> bool {
    ABSOLUTE_MARKERS.iter().any(|marker| value.contains(marker))
}
