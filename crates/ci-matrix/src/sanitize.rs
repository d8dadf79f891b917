use std::sync::LazyLock;

use regex::Regex;

static GITHUB_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"gh[ps]_[A-Za-z0-9]{36}").expect("token pattern is valid"));

static BEARER_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(bearer\s+)[A-Za-z0-9\-._~+/]+=*").expect("bearer pattern is valid")
});

/// Masks GitHub tokens and bearer credentials before text reaches the CI log.
pub(crate) fn sanitize(message: &str) -> String {
    let masked = GITHUB_TOKEN.replace_all(message, "***");
    BEARER_TOKEN.replace_all(&masked, "${1}***").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_personal_access_token() {
        let token = format!("ghp_{}", "a".repeat(36));

        let sanitized = sanitize(&format!("clone failed with {token}"));

        assert_eq!(sanitized, "clone failed with ***");
    }

    #[test]
    fn masks_server_token() {
        let token = format!("ghs_{}", "B1".repeat(18));

        assert!(!sanitize(&token).contains("ghs_"));
    }

    #[test]
    fn masks_bearer_credentials_keeping_scheme() {
        let sanitized = sanitize("Authorization: Bearer abc.def-123");

        assert_eq!(sanitized, "Authorization: Bearer ***");
    }

    #[test]
    fn leaves_short_prefixes_alone() {
        assert_eq!(sanitize("ghp_short"), "ghp_short");
    }

    #[test]
    fn plain_messages_are_unchanged() {
        let message = "failed to detect changes between 'origin/main' and 'HEAD'";

        assert_eq!(sanitize(message), message);
    }
}
