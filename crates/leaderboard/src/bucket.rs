use std::{
    fs::File,
    io::{self, BufReader},
    path::{Component, Path, PathBuf},
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use sha2::{Digest, Sha256};
use walkdir::WalkDir;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not list files under {prefix:?}")]
    List {
        prefix: String,
        #[source]
        source: io::Error,
    },

    #[error("Prefix {0:?} leaves the bucket")]
    Prefix(String),

    #[error("Listing task failed")]
    Task(#[from] tokio::task::JoinError),
}

/// Metadata of one stored object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Object {
    pub key: String,
    pub size: u64,
    pub etag: String,
    pub version: Option<String>,
    pub uploaded: DateTime<Utc>,
}

/// Read access to the object storage backing file groups.
#[async_trait]
pub trait Bucket: Send + Sync {
    /// Every object whose key starts with `prefix`, sorted by key.
    async fn list(&self, prefix: &str) -> Result<Vec<Object>, Error>;

    /// Public URL of the object stored under `key`.
    fn url(&self, key: &str) -> String;
}

pub fn public_url(domain: &str, key: &str) -> String {
    format!("{}/{}", domain.trim_end_matches('/'), key.trim_start_matches('/'))
}

/// A directory tree served as a bucket. Keys are paths relative to the root,
/// separated by `/`.
#[derive(Debug, Clone)]
pub struct LocalBucket {
    root: PathBuf,
    domain: String,
}

impl LocalBucket {
    pub fn new(root: impl Into<PathBuf>, domain: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            domain: domain.into(),
        }
    }

    /// The deepest directory that can hold keys starting with `prefix`.
    fn directory(&self, prefix: &str) -> Result<PathBuf, Error> {
        let parent = prefix.rsplit_once('/').map_or("", |(parent, _)| parent);
        let relative = Path::new(parent);

        if relative
            .components()
            .any(|component| !matches!(component, Component::Normal(_)))
        {
            return Err(Error::Prefix(prefix.to_string()));
        }

        Ok(self.root.join(relative))
    }
}

fn key(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Option<Vec<&str>> = relative
        .components()
        .map(|component| component.as_os_str().to_str())
        .collect();

    parts.map(|parts| parts.join("/"))
}

fn object(path: &Path, key: String) -> io::Result<Object> {
    let metadata = std::fs::metadata(path)?;

    let mut hasher = Sha256::new();
    io::copy(&mut BufReader::new(File::open(path)?), &mut hasher)?;

    Ok(Object {
        key,
        size: metadata.len(),
        etag: hex::encode(hasher.finalize()),
        version: None,
        uploaded: metadata.modified()?.into(),
    })
}

fn walk(root: &Path, directory: &Path, prefix: &str) -> io::Result<Vec<Object>> {
    let mut objects = Vec::new();

    for entry in WalkDir::new(directory) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(key) = key(root, entry.path()) else {
            debug!("Skipping non UTF-8 path {}", entry.path().display());
            continue;
        };

        if key.starts_with(prefix) {
            objects.push(object(entry.path(), key)?);
        }
    }

    objects.sort_by(|a, b| a.key.cmp(&b.key));
    Ok(objects)
}

#[async_trait]
impl Bucket for LocalBucket {
    async fn list(&self, prefix: &str) -> Result<Vec<Object>, Error> {
        let prefix = prefix.trim_start_matches('/').to_string();
        let directory = self.directory(&prefix)?;

        debug!("Listing {prefix:?} under {}", directory.display());

        if !tokio::fs::try_exists(&directory).await.unwrap_or(false) {
            return Ok(Vec::new());
        }

        let root = self.root.clone();
        let listed = {
            let prefix = prefix.clone();
            tokio::task::spawn_blocking(move || walk(&root, &directory, &prefix)).await?
        };

        listed.map_err(|source| Error::List { prefix, source })
    }

    fn url(&self, key: &str) -> String {
        public_url(&self.domain, key)
    }
}

/// Used when no storage is configured. Every group is empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBucket;

#[async_trait]
impl Bucket for NoBucket {
    async fn list(&self, _prefix: &str) -> Result<Vec<Object>, Error> {
        Ok(Vec::new())
    }

    fn url(&self, key: &str) -> String {
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use test_case::test_case;

    use super::*;

    fn bucket_with_files() -> (tempfile::TempDir, LocalBucket) {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("torneo-2024/dia-1")).unwrap();
        fs::write(dir.path().join("torneo-2024/dia-1/dorado.jpg"), b"dorado").unwrap();
        fs::write(dir.path().join("torneo-2024/salida.jpg"), b"salida").unwrap();
        fs::write(dir.path().join("otro.jpg"), b"otro").unwrap();

        let bucket = LocalBucket::new(dir.path(), "https://media.example.com/");
        (dir, bucket)
    }

    #[tokio::test]
    async fn lists_nested_files_sorted_by_key() {
        let (_dir, bucket) = bucket_with_files();

        let objects = bucket.list("torneo-2024").await.unwrap();

        let keys: Vec<_> = objects.iter().map(|object| object.key.as_str()).collect();
        assert_eq!(keys, vec!["torneo-2024/dia-1/dorado.jpg", "torneo-2024/salida.jpg"]);
        assert_eq!(objects[0].size, 6);
        assert_eq!(objects[0].version, None);
    }

    #[tokio::test]
    async fn etag_is_the_sha256_of_the_contents() {
        let (_dir, bucket) = bucket_with_files();

        let objects = bucket.list("torneo-2024/dia-1/").await.unwrap();

        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].etag, hex::encode(Sha256::digest(b"dorado")));
        assert_eq!(objects[0].etag.len(), 64);
    }

    #[tokio::test]
    async fn prefix_matches_partial_names() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("torneo-2024")).unwrap();
        fs::write(dir.path().join("torneo-2024/a.jpg"), b"a").unwrap();
        fs::write(dir.path().join("torneo-2024.jpg"), b"portada").unwrap();
        fs::write(dir.path().join("regata.jpg"), b"regata").unwrap();
        let bucket = LocalBucket::new(dir.path(), "https://media.example.com");

        let keys = |objects: Vec<Object>| -> Vec<String> {
            objects.into_iter().map(|object| object.key).collect()
        };

        assert_eq!(
            keys(bucket.list("torneo").await.unwrap()),
            vec!["torneo-2024.jpg", "torneo-2024/a.jpg"]
        );
        assert_eq!(
            keys(bucket.list("torneo-2024/a").await.unwrap()),
            vec!["torneo-2024/a.jpg"]
        );
        assert_eq!(keys(bucket.list("").await.unwrap()).len(), 3);
    }

    #[tokio::test]
    async fn large_files_hash_like_their_contents() {
        let dir = tempfile::tempdir().unwrap();
        let contents: Vec<u8> = (0..100_000u32).map(|i| (i % 251) as u8).collect();
        fs::write(dir.path().join("video.mp4"), &contents).unwrap();
        let bucket = LocalBucket::new(dir.path(), "https://media.example.com");

        let objects = bucket.list("video").await.unwrap();

        assert_eq!(objects[0].size, 100_000);
        assert_eq!(objects[0].etag, hex::encode(Sha256::digest(&contents)));
    }

    #[tokio::test]
    async fn missing_prefix_is_empty() {
        let (_dir, bucket) = bucket_with_files();

        assert!(bucket.list("no-such-group").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn prefix_cannot_escape_the_root() {
        let (_dir, bucket) = bucket_with_files();

        let err = bucket.list("../etc").await.unwrap_err();

        assert!(matches!(err, Error::Prefix(_)));
    }

    #[test_case("https://media.example.com", "a/b.jpg", "https://media.example.com/a/b.jpg" ; "plain domain")]
    #[test_case("https://media.example.com/", "a/b.jpg", "https://media.example.com/a/b.jpg" ; "trailing slash")]
    #[test_case("https://media.example.com/", "/a.jpg", "https://media.example.com/a.jpg" ; "leading slash on key")]
    fn urls_join_domain_and_key(domain: &str, key: &str, expected: &str) {
        assert_eq!(public_url(domain, key), expected);
    }

    #[tokio::test]
    async fn no_bucket_has_no_files() {
        assert!(NoBucket.list("anything").await.unwrap().is_empty());
    }
}
