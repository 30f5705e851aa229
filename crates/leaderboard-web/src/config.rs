use std::{net::SocketAddr, path::PathBuf};

use url::Url;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3030";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Environment variable {name} is not set")]
    EnvVarNotSet { name: &'static str },

    #[error("Environment variable {name} has an invalid value {value:?}")]
    Invalid { name: &'static str, value: String },

    #[error("BUCKET_DOMAIN is required when BUCKET_DIR is set")]
    MissingBucketDomain,
}

/// Where the media bucket lives and how its files are addressed publicly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketConfig {
    pub dir: PathBuf,
    pub domain: Url,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: SocketAddr,
    pub bucket: Option<BucketConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let env_var = |name: &'static str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let database_url = env_var("DATABASE_URL").ok_or(Error::EnvVarNotSet {
            name: "DATABASE_URL",
        })?;

        let listen_addr = env_var("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr: SocketAddr = listen_addr.parse().map_err(|_| Error::Invalid {
            name: "LISTEN_ADDR",
            value: listen_addr.clone(),
        })?;

        let bucket = match env_var("BUCKET_DIR") {
            Some(dir) => {
                let domain = env_var("BUCKET_DOMAIN").ok_or(Error::MissingBucketDomain)?;
                let domain = Url::parse(&domain).map_err(|_| Error::Invalid {
                    name: "BUCKET_DOMAIN",
                    value: domain.clone(),
                })?;

                Some(BucketConfig {
                    dir: PathBuf::from(dir),
                    domain,
                })
            }
            None => None,
        };

        Ok(Self {
            database_url,
            listen_addr,
            bucket,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config, Error> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[("DATABASE_URL", "sqlite::memory:")]).unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.listen_addr, "0.0.0.0:3030".parse().unwrap());
        assert_eq!(config.bucket, None);
    }

    #[test]
    fn database_url_is_required() {
        let err = config(&[("LISTEN_ADDR", "127.0.0.1:8080")]).unwrap_err();

        assert!(matches!(err, Error::EnvVarNotSet { name: "DATABASE_URL" }));
    }

    #[test]
    fn listen_addr_must_parse() {
        let err = config(&[("DATABASE_URL", "sqlite::memory:"), ("LISTEN_ADDR", "port 80")])
            .unwrap_err();

        assert!(matches!(err, Error::Invalid { name: "LISTEN_ADDR", .. }));
    }

    #[test]
    fn bucket_needs_a_domain() {
        let err = config(&[("DATABASE_URL", "sqlite::memory:"), ("BUCKET_DIR", "/srv/media")])
            .unwrap_err();

        assert!(matches!(err, Error::MissingBucketDomain));
    }

    #[test]
    fn bucket_with_domain() {
        let config = config(&[
            ("DATABASE_URL", "postgres://localhost/nautico"),
            ("BUCKET_DIR", "/srv/media"),
            ("BUCKET_DOMAIN", "https://media.example.com"),
        ])
        .unwrap();

        let bucket = config.bucket.unwrap();
        assert_eq!(bucket.dir, PathBuf::from("/srv/media"));
        assert_eq!(bucket.domain.as_str(), "https://media.example.com/");
    }
}
