//! What `xperm --version` reports, stamped in by `build.rs`.

/// Short commit hash, or `unknown` outside a git checkout.
pub const GIT_HASH: &str = env!("SOUNDEX_GIT_HASH");

pub const BUILD_PROFILE: &str = env!("SOUNDEX_BUILD_PROFILE");

/// Unix seconds at compile time; logged with the `xperm starting` event.
pub const BUILD_TIMESTAMP: &str = env!("SOUNDEX_BUILD_TIMESTAMP");

/// `xperm --version` text, e.g. `0.1.0 (abc1234, release)`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SOUNDEX_GIT_HASH"),
    ", ",
    env!("SOUNDEX_BUILD_PROFILE"),
    ")"
);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_long_version_layout() {
        assert_eq!(
            LONG_VERSION,
            format!(
                "{} ({GIT_HASH}, {BUILD_PROFILE})",
                env!("CARGO_PKG_VERSION")
            )
        );
    }

    #[test]
    fn test_git_hash_has_no_whitespace() {
        assert!(!GIT_HASH.is_empty());
        assert!(!GIT_HASH.contains(char::is_whitespace));
    }

    #[test]
    fn test_build_timestamp_is_numeric() {
        assert!(BUILD_TIMESTAMP.parse::<u64>().is_ok());
    }
}
