//! Prefix merging.
//!
//! A group prefix and a route path are joined with exactly one separator,
//! however many slashes either side carried at its edges. Internal slashes
//! are left alone.

/// The root prefix. A group with this prefix adds nothing to its paths.
pub const ROOT: &str = "/";

const SEPARATOR: char = '/';

/// Strips every leading and trailing `/` from `path`.
///
/// Idempotent: `normalize(normalize(p)) == normalize(p)`.
///
/// ```rust
/// use route_groups::path::normalize;
///
/// assert_eq!(normalize("//admin/users/"), "admin/users");
/// assert_eq!(normalize("/"), "");
/// ```
pub fn normalize(path: &str) -> &str {
    path.trim_matches(SEPARATOR)
}

/// Joins `prefix` and `path` as `normalize(prefix) + "/" + normalize(path)`.
///
/// An empty half keeps its side of the separator: `merge("admin", "/")` is
/// `"admin/"` and `merge("//", "users")` is `"/users"`. Two empty halves give
/// the root, `"/"`, never `"//"`.
pub fn merge(prefix: &str, path: &str) -> String {
    match (normalize(prefix), normalize(path)) {
        ("", "") => ROOT.to_owned(),
        (prefix, path) => format!("{prefix}{SEPARATOR}{path}"),
    }
}
