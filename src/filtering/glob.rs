// src/filtering/glob.rs

use globset::GlobBuilder;

/// A compiled path-matching predicate for one glob pattern.
///
/// * `**` matches any number of whole path segments, including none.
/// * `*` matches within a single segment and never crosses `/`.
/// * `{a,b,c}` matches if any alternative matches.
/// * A pattern without wildcards only matches the identical path.
/// * The empty pattern matches nothing.
///
/// Negation is not handled here: callers strip a leading `!` and decide what
/// the pattern slot means.
///
/// # Examples
///
/// ```
/// use filesift::filtering::GlobMatcher;
///
/// let matcher = GlobMatcher::compile("src/**/*.{ts,tsx}").unwrap();
/// assert!(matcher.test("src/app.ts"));
/// assert!(matcher.test("src/ui/button.tsx"));
/// assert!(!matcher.test("lib/app.ts"));
/// ```
#[derive(Debug, Clone)]
pub struct GlobMatcher {
    pattern: String,
    inner: Option<globset::GlobMatcher>,
}

impl GlobMatcher {
    /// Compiles `pattern`.
    ///
    /// # Errors
    /// Returns the `globset::Error` for malformed patterns, such as an
    /// unclosed `{` group or a `**` that is not a whole path segment.
    pub fn compile(pattern: &str) -> Result<Self, globset::Error> {
        if pattern.is_empty() {
            return Ok(Self {
                pattern: String::new(),
                inner: None,
            });
        }
        let glob = GlobBuilder::new(pattern).literal_separator(true).build()?;
        Ok(Self {
            pattern: pattern.to_string(),
            inner: Some(glob.compile_matcher()),
        })
    }

    /// Returns true if `path` matches the whole pattern.
    #[inline]
    pub fn test(&self, path: &str) -> bool {
        self.inner.as_ref().is_some_and(|m| m.is_match(path))
    }

    /// The pattern this matcher was compiled from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(pattern: &str) -> GlobMatcher {
        GlobMatcher::compile(pattern).unwrap()
    }

    #[test]
    fn test_recursive_prefix_matches_root_and_nested() {
        let matcher = m("**/*.ts");
        assert!(matcher.test("a.ts"));
        assert!(matcher.test("src/a.ts"));
        assert!(matcher.test("src/deep/er/a.ts"));
        assert!(!matcher.test("src/a.tsx"));
    }

    #[test]
    fn test_recursive_directory_segment() {
        let matcher = m("**/node_modules/**");
        assert!(matcher.test("node_modules/x/a.ts"));
        assert!(matcher.test("packages/p/node_modules/y/index.js"));
        assert!(!matcher.test("src/node_modules_backup/a.ts"));
    }

    #[test]
    fn test_single_star_stays_in_segment() {
        let matcher = m("src/*.rs");
        assert!(matcher.test("src/main.rs"));
        assert!(!matcher.test("src/bin/main.rs"));
    }

    #[test]
    fn test_brace_alternation() {
        let matcher = m("*.{md,txt}");
        assert!(matcher.test("README.md"));
        assert!(matcher.test("notes.txt"));
        assert!(!matcher.test("main.rs"));
    }

    #[test]
    fn test_exact_pattern_requires_equality() {
        let matcher = m("src/lib.rs");
        assert!(matcher.test("src/lib.rs"));
        assert!(!matcher.test("src/lib.rs.bak"));
        assert!(!matcher.test("other/src/lib.rs"));
    }

    #[test]
    fn test_empty_pattern_matches_nothing() {
        let matcher = m("");
        assert!(!matcher.test(""));
        assert!(!matcher.test("a"));
        assert_eq!(matcher.pattern(), "");
    }

    #[test]
    fn test_unclosed_brace_is_an_error() {
        assert!(GlobMatcher::compile("src/{a,b").is_err());
    }
}
