//! Lazily compiled regular expressions.

/// Compile a pattern once and hand out a `&'static Regex` on every call.
///
/// Patterns are literals checked by the test-suite, so a bad pattern panics.
macro_rules! regex {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static REGEX: OnceLock<::regex::Regex> = OnceLock::new();
        REGEX.get_or_init(|| ::regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{}", e)))
    }};
}

pub(crate) use regex;
