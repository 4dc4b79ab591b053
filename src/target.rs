//! Target identifier rewriting.
//!
//! Bazel `//external:` aliases do not carry the jar-scanner aspect; the
//! scan must run against the backing external repository's `jar` target
//! instead. This module rewrites such aliases into that canonical label
//! and leaves every other identifier untouched.

/// Prefix marking an external-workspace alias target.
pub const EXTERNAL_PREFIX: &str = "//external:";

/// Rewrite an external alias into its canonical dependency label.
///
/// `//external:name` becomes `@name//:jar`; any other identifier is
/// returned unchanged. The transform is idempotent: an already-canonical
/// label never matches the prefix.
///
/// # Examples
/// ```
/// use batchscan::target::canonicalize;
/// assert_eq!(canonicalize("//external:guava"), "@guava//:jar");
/// assert_eq!(canonicalize("//server/lib:core"), "//server/lib:core");
/// ```
#[must_use]
pub fn canonicalize(target: &str) -> String {
    target.strip_prefix(EXTERNAL_PREFIX).map_or_else(
        || target.to_owned(),
        |name| format!("@{name}//:jar"),
    )
}
