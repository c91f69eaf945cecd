//! URL classification: which host a page belongs to and which pull request
//! it names

use crate::config::Settings;
use memchr::memchr;

/// Fixed public-host string the classifier matches against
pub const PUBLIC_HOST: &str = "https://github.com";

/// API prefix for the public host, trailing slash included
pub const PUBLIC_API_PREFIX: &str = "https://api.github.com/";

/// Which flavor of host a URL belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostKind {
    /// Public SaaS (github.com)
    Public,
    /// Self-hosted enterprise instance
    Enterprise,
}

impl HostKind {
    /// API prefix for this host; `None` when the enterprise prefix is not
    /// configured. Endpoints are built by direct concatenation, so the
    /// prefix carries its own trailing slash.
    pub fn api_prefix<'a>(&self, settings: &'a Settings) -> Option<&'a str> {
        match self {
            Self::Public => Some(PUBLIC_API_PREFIX),
            Self::Enterprise => settings.ghe_api_prefix(),
        }
    }
}

/// A pull request located on a classified host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRef {
    /// Host the pull request lives on
    pub host: HostKind,
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Pull request number (the issues API addresses it by this)
    pub issue: u64,
}

/// Extract the leading `scheme://host` segment of a URL.
///
/// The scheme must be http or https, the host must contain a dot, and the
/// host must be terminated by a `/` (a bare `https://github.com` with no
/// path does not classify).
fn heading(url: &str) -> Option<&str> {
    let scheme_len = if url.starts_with("https://") {
        8
    } else if url.starts_with("http://") {
        7
    } else {
        return None;
    };

    let rest = url[scheme_len..].as_bytes();
    let slash = memchr(b'/', rest)?;
    let host = &rest[..slash];
    if memchr(b'.', host).is_none() {
        return None;
    }
    Some(&url[..scheme_len + slash])
}

/// Classify which host a page URL belongs to.
///
/// NOTE: the containment test runs in the surprising direction: the page's
/// `scheme://host` heading is tested as a *prefix of* the configured host
/// string, not the other way around. `https://github.c/...` therefore
/// classifies as Public. Suspected bug; preserved pending product-owner
/// confirmation.
pub fn classify_host(url: &str, settings: &Settings) -> Option<HostKind> {
    let heading = heading(url)?;
    if PUBLIC_HOST.starts_with(heading) {
        return Some(HostKind::Public);
    }
    if let Some(prefix) = settings.ghe_api_prefix() {
        if prefix.starts_with(heading) {
            return Some(HostKind::Enterprise);
        }
    }
    None
}

/// Parse a page URL into a [`PullRequestRef`].
///
/// The path must contain `/{owner}/{repo}/pull/{digits}`; trailing path
/// segments after the digits (e.g. `/files`) are tolerated. Returns `None`
/// when the host cannot be classified.
pub fn parse_ref(url: &str, settings: &Settings) -> Option<PullRequestRef> {
    let host = classify_host(url, settings)?;

    let pos = url.rfind("/pull/")?;
    let digits: &str = {
        let tail = &url[pos + "/pull/".len()..];
        let end = tail
            .as_bytes()
            .iter()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(tail.len());
        &tail[..end]
    };
    if digits.is_empty() {
        return None;
    }
    let issue: u64 = digits.parse().ok()?;

    let head = &url[..pos];
    let (rest, repo) = head.rsplit_once('/')?;
    let (rest, owner) = rest.rsplit_once('/')?;
    if owner.is_empty() || repo.is_empty() || rest.is_empty() {
        return None;
    }

    Some(PullRequestRef {
        host,
        owner: owner.to_string(),
        repo: repo.to_string(),
        issue,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ghe_settings() -> Settings {
        Settings {
            ghe_api_prefix: Some("https://ghe.example.com/api/v3/".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_classify_public() {
        let settings = Settings::default();
        assert_eq!(
            classify_host("https://github.com/acme/widgets/pull/42", &settings),
            Some(HostKind::Public)
        );
    }

    #[test]
    fn test_classify_enterprise() {
        assert_eq!(
            classify_host("https://ghe.example.com/acme/widgets/pull/1", &ghe_settings()),
            Some(HostKind::Enterprise)
        );
    }

    #[test]
    fn test_classify_unknown_host() {
        assert_eq!(
            classify_host("https://gitlab.com/acme/widgets/pull/1", &ghe_settings()),
            None
        );
    }

    #[test]
    fn test_classify_requires_scheme_and_dot() {
        let settings = Settings::default();
        assert_eq!(classify_host("ftp://github.com/x/y/pull/1", &settings), None);
        assert_eq!(classify_host("https://localhost/x/y/pull/1", &settings), None);
        // No path separator after the host
        assert_eq!(classify_host("https://github.com", &settings), None);
    }

    #[test]
    fn test_classify_prefix_containment_quirk() {
        // Preserved as-is: a truncated host classifies as Public because the
        // heading is a prefix of the configured host string.
        let settings = Settings::default();
        assert_eq!(
            classify_host("https://github.c/acme/widgets/pull/1", &settings),
            Some(HostKind::Public)
        );
    }

    #[test]
    fn test_parse_ref() {
        let settings = Settings::default();
        let r = parse_ref("https://github.com/acme/widgets/pull/42", &settings).unwrap();
        assert_eq!(r.host, HostKind::Public);
        assert_eq!(r.owner, "acme");
        assert_eq!(r.repo, "widgets");
        assert_eq!(r.issue, 42);
    }

    #[test]
    fn test_parse_ref_tolerates_trailing_segments() {
        let settings = Settings::default();
        let r = parse_ref("https://github.com/acme/widgets/pull/42/files", &settings).unwrap();
        assert_eq!(r.issue, 42);
    }

    #[test]
    fn test_parse_ref_rejects_non_pull_paths() {
        let settings = Settings::default();
        assert!(parse_ref("https://github.com/acme/widgets/issues/42", &settings).is_none());
        assert!(parse_ref("https://github.com/acme/widgets/pull/", &settings).is_none());
        assert!(parse_ref("https://github.com/acme/widgets/pull/abc", &settings).is_none());
    }

    #[test]
    fn test_parse_ref_requires_classified_host() {
        assert!(parse_ref("https://gitlab.com/acme/widgets/pull/42", &ghe_settings()).is_none());
    }

    #[test]
    fn test_parse_ref_roundtrip() {
        let settings = Settings::default();
        for (owner, repo, issue) in [("a", "b", 1u64), ("acme-inc", "widgets_2", 9999)] {
            let url = format!("https://github.com/{}/{}/pull/{}", owner, repo, issue);
            let r = parse_ref(&url, &settings).unwrap();
            assert_eq!((r.owner.as_str(), r.repo.as_str(), r.issue), (owner, repo, issue));
        }
    }

    #[test]
    fn test_api_prefix_selection() {
        let settings = ghe_settings();
        assert_eq!(
            HostKind::Public.api_prefix(&settings),
            Some("https://api.github.com/")
        );
        assert_eq!(
            HostKind::Enterprise.api_prefix(&settings),
            Some("https://ghe.example.com/api/v3/")
        );
        assert_eq!(HostKind::Enterprise.api_prefix(&Settings::default()), None);
    }
}
