//! Validated server configuration.

use std::time::Duration;

use crate::chunking::ChunkLimits;
use crate::cli::parser::ServeArgs;
use crate::core::DEFAULT_BANNED_WORDS;
use crate::error::{Error, Result};
use crate::upstream::UpstreamConfig;

/// Everything the server needs, after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Interface to bind.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Upstream connection settings.
    pub upstream: UpstreamConfig,
    /// Chunk limits.
    pub limits: ChunkLimits,
    /// Username that selects the reserved persona.
    pub reserved_username: String,
    /// Banned terms for the content filter.
    pub banned_words: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            upstream: UpstreamConfig::default(),
            limits: ChunkLimits::default(),
            reserved_username: crate::core::DEFAULT_RESERVED_USERNAME.to_string(),
            banned_words: default_banned_words(),
        }
    }
}

impl TryFrom<ServeArgs> for Config {
    type Error = Error;

    fn try_from(args: ServeArgs) -> Result<Self> {
        let limits = ChunkLimits::checked(args.limits.max_length, args.limits.max_lines)?;
        if args.timeout_secs == 0 {
            return Err(Error::config("upstream timeout must be > 0"));
        }

        let api_key = args.api_key.filter(|k| !k.trim().is_empty());
        let banned_words = if args.banned_words.is_empty() {
            default_banned_words()
        } else {
            args.banned_words
        };

        Ok(Self {
            host: args.host,
            port: args.port,
            upstream: UpstreamConfig {
                api_url: args.api_url,
                api_key,
                model: args.model,
                referer: args.referer,
                title: args.title,
                timeout: Duration::from_secs(args.timeout_secs),
            },
            limits,
            reserved_username: args.reserved_username,
            banned_words,
        })
    }
}

fn default_banned_words() -> Vec<String> {
    DEFAULT_BANNED_WORDS.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parser::LimitArgs;

    fn serve_args() -> ServeArgs {
        ServeArgs {
            host: "127.0.0.1".to_string(),
            port: 8080,
            api_url: "http://localhost/v1/chat/completions".to_string(),
            api_key: Some("sk-test".to_string()),
            model: "test/model".to_string(),
            referer: "https://example.test".to_string(),
            title: "Test".to_string(),
            timeout_secs: 5,
            limits: LimitArgs {
                max_length: 500,
                max_lines: 3,
            },
            reserved_username: "cem".to_string(),
            banned_words: Vec::new(),
        }
    }

    #[test]
    fn test_from_serve_args() {
        let config = Config::try_from(serve_args()).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.upstream.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.upstream.timeout, Duration::from_secs(5));
        assert_eq!(config.limits, ChunkLimits::new(500, 3));
        assert_eq!(config.banned_words, default_banned_words());
    }

    #[test]
    fn test_blank_api_key_is_absent() {
        let mut args = serve_args();
        args.api_key = Some("  ".to_string());
        let config = Config::try_from(args).unwrap();
        assert!(config.upstream.api_key.is_none());
    }

    #[test]
    fn test_zero_limits_rejected() {
        let mut args = serve_args();
        args.limits.max_lines = 0;
        assert!(matches!(
            Config::try_from(args),
            Err(Error::Config { .. })
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut args = serve_args();
        args.timeout_secs = 0;
        assert!(Config::try_from(args).is_err());
    }

    #[test]
    fn test_custom_banned_words_kept() {
        let mut args = serve_args();
        args.banned_words = vec!["spam".to_string()];
        let config = Config::try_from(args).unwrap();
        assert_eq!(config.banned_words, vec!["spam"]);
    }
}
