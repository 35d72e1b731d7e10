//! Remote image allow-list.
//!
//! Hosts are fixed when the policy is built from configuration; an image on
//! any other host is never requested.

use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemotePattern {
    pub protocol: String,
    pub hostname: String,
}

impl RemotePattern {
    pub fn new(protocol: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            hostname: hostname.into(),
        }
    }
}

pub fn default_image_hosts() -> Vec<RemotePattern> {
    vec![RemotePattern::new("https", "placehold.co")]
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageConfigError {
    #[error("unsupported image protocol `{0}`")]
    UnsupportedProtocol(String),
    #[error("invalid image hostname `{0}`")]
    InvalidHostname(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    #[error("image url `{0}` is not absolute")]
    InvalidUrl(String),
    #[error("image host `{0}` is not allow-listed")]
    HostNotAllowed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePolicy {
    patterns: Vec<RemotePattern>,
}

impl Default for ImagePolicy {
    fn default() -> Self {
        Self {
            patterns: default_image_hosts(),
        }
    }
}

impl ImagePolicy {
    pub fn new(patterns: Vec<RemotePattern>) -> Result<Self, ImageConfigError> {
        let patterns = patterns
            .into_iter()
            .map(validate_pattern)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn patterns(&self) -> &[RemotePattern] {
        &self.patterns
    }

    pub fn resolve(&self, raw: &str) -> Result<Url, ImageError> {
        let url = Url::parse(raw).map_err(|_| ImageError::InvalidUrl(raw.to_string()))?;
        let host = url
            .host_str()
            .ok_or_else(|| ImageError::InvalidUrl(raw.to_string()))?
            .to_ascii_lowercase();
        let allowed = self
            .patterns
            .iter()
            .any(|p| p.protocol == url.scheme() && p.hostname == host);
        if allowed {
            Ok(url)
        } else {
            Err(ImageError::HostNotAllowed(host))
        }
    }
}

fn validate_pattern(pattern: RemotePattern) -> Result<RemotePattern, ImageConfigError> {
    let protocol = pattern.protocol.trim().to_ascii_lowercase();
    if protocol != "http" && protocol != "https" {
        return Err(ImageConfigError::UnsupportedProtocol(pattern.protocol));
    }
    let hostname = pattern.hostname.trim().to_ascii_lowercase();
    let well_formed = !hostname.is_empty()
        && hostname
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.');
    if !well_formed {
        return Err(ImageConfigError::InvalidHostname(pattern.hostname));
    }
    Ok(RemotePattern { protocol, hostname })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_allows_placeholder_images() {
        let policy = ImagePolicy::default();
        let url = policy.resolve("https://placehold.co/600x400").unwrap();
        assert_eq!(url.host_str(), Some("placehold.co"));
    }

    #[test]
    fn hosts_outside_allow_list_are_rejected() {
        let policy = ImagePolicy::default();
        assert_eq!(
            policy.resolve("https://evil.example/cat.png"),
            Err(ImageError::HostNotAllowed("evil.example".into()))
        );
    }

    #[test]
    fn protocol_must_match_pattern() {
        let policy = ImagePolicy::default();
        assert!(matches!(
            policy.resolve("http://placehold.co/600x400"),
            Err(ImageError::HostNotAllowed(_))
        ));
    }

    #[test]
    fn relative_urls_are_invalid() {
        let policy = ImagePolicy::default();
        assert!(matches!(
            policy.resolve("/images/mug.png"),
            Err(ImageError::InvalidUrl(_))
        ));
    }

    #[test]
    fn invalid_patterns_fail_at_configuration_time() {
        assert_eq!(
            ImagePolicy::new(vec![RemotePattern::new("ftp", "files.example")]),
            Err(ImageConfigError::UnsupportedProtocol("ftp".into()))
        );
        assert_eq!(
            ImagePolicy::new(vec![RemotePattern::new("https", "https://cdn.example/")]),
            Err(ImageConfigError::InvalidHostname("https://cdn.example/".into()))
        );
        assert!(ImagePolicy::new(vec![RemotePattern::new("https", "")]).is_err());
    }

    #[test]
    fn patterns_are_normalized() {
        let policy = ImagePolicy::new(vec![RemotePattern::new("HTTPS", " CDN.Example ")]).unwrap();
        assert_eq!(policy.patterns()[0], RemotePattern::new("https", "cdn.example"));
        assert!(policy.resolve("https://cdn.example/a.png").is_ok());
    }
}
