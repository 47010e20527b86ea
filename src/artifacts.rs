use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use sha2::{Digest, Sha256};
use tokio::sync::Mutex;

pub const MODEL_FILE: &str = "model.onnx";
pub const LABELS_FILE: &str = "labels.json";
pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("Artifact not found: {0}")]
    Missing(PathBuf),
    #[error("No manifest found at {0}")]
    MissingManifest(PathBuf),
    #[error("Download error: {0}")]
    Download(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed manifest: {0}")]
    Manifest(#[from] serde_json::Error),
    #[error("Hash mismatch: expected {expected}, got {actual} for {file} file")]
    HashMismatch {
        file: String,
        expected: String,
        actual: String,
    },
}

/// Integrity hashes for one artifact set, shipped as `manifest.json` next to
/// the artifacts themselves.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub model_sha256: String,
    pub labels_sha256: String,
}

/// Locates, verifies and (optionally) fetches the model artifact set: the
/// ONNX classifier, the label list, and the integrity manifest.
#[derive(Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
    download_lock: Arc<Mutex<()>>,
}

impl ArtifactStore {
    /// Creates an ArtifactStore rooted at the default models directory
    pub fn new_default() -> io::Result<Self> {
        Self::new(Self::default_dir())
    }

    /// Returns the default models directory path
    pub fn default_dir() -> PathBuf {
        // 1. Check environment variable
        if let Ok(path) = env::var("TRIAGE_CACHE") {
            return PathBuf::from(path).join("models");
        }

        // 2. Use platform-specific cache directory
        if let Some(cache_dir) = dirs::cache_dir() {
            return cache_dir.join("triage").join("models");
        }

        // 3. Fallback to user's home directory
        if let Some(home_dir) = dirs::home_dir() {
            return home_dir.join(".cache").join("triage").join("models");
        }

        // 4. If all else fails, use system temp directory (platform agnostic)
        env::temp_dir().join("triage").join("models")
    }

    pub fn new<P: AsRef<Path>>(dir: P) -> io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            download_lock: Arc::new(Mutex::new(())),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn model_path(&self) -> PathBuf {
        self.dir.join(MODEL_FILE)
    }

    pub fn labels_path(&self) -> PathBuf {
        self.dir.join(LABELS_FILE)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.dir.join(MANIFEST_FILE)
    }

    /// Whether both model and labels files exist on disk.
    pub fn is_present(&self) -> bool {
        self.model_path().exists() && self.labels_path().exists()
    }

    fn read_manifest(&self) -> Result<Manifest, ArtifactError> {
        let path = self.manifest_path();
        if !path.exists() {
            return Err(ArtifactError::MissingManifest(path));
        }
        let bytes = fs::read(&path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn file_sha256(path: &Path) -> Result<String, ArtifactError> {
        let bytes = fs::read(path)?;
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        Ok(format!("{:x}", hasher.finalize()))
    }

    fn verify_file(&self, path: &Path, expected_hash: &str) -> Result<bool, ArtifactError> {
        let hash = Self::file_sha256(path)?;
        if hash != expected_hash {
            log::warn!(
                "Hash mismatch for {:?}: expected {}, got {}",
                path,
                expected_hash,
                hash
            );
        }
        Ok(hash == expected_hash)
    }

    /// Verifies the on-disk artifacts against the manifest.
    ///
    /// Returns `Ok(false)` when a file is absent or its hash does not match.
    ///
    /// # Errors
    /// `MissingManifest` when no manifest ships with the artifacts; operators
    /// running unmanifested artifacts skip verification instead.
    pub fn verify(&self) -> Result<bool, ArtifactError> {
        let manifest = self.read_manifest()?;

        let model_path = self.model_path();
        let labels_path = self.labels_path();
        if !model_path.exists() || !labels_path.exists() {
            log::info!("One or both artifact files do not exist");
            return Ok(false);
        }

        let model_ok = self.verify_file(&model_path, &manifest.model_sha256)?;
        let labels_ok = self.verify_file(&labels_path, &manifest.labels_sha256)?;
        Ok(model_ok && labels_ok)
    }

    /// Downloads the artifact set from `base_url`.
    ///
    /// The manifest is fetched first and each artifact is verified against
    /// it before being kept; a failed download removes any partial state.
    pub async fn fetch(&self, base_url: &str) -> Result<(), ArtifactError> {
        let _lock = self.download_lock.lock().await;
        fs::create_dir_all(&self.dir)?;

        let base = base_url.trim_end_matches('/');
        log::info!("Fetching artifact manifest from {}/{}", base, MANIFEST_FILE);
        let manifest_bytes = reqwest::get(format!("{}/{}", base, MANIFEST_FILE))
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        let manifest: Manifest = serde_json::from_slice(&manifest_bytes)?;

        let result = async {
            self.download_and_verify(
                &format!("{}/{}", base, MODEL_FILE),
                &self.model_path(),
                &manifest.model_sha256,
                "model",
            )
            .await?;
            self.download_and_verify(
                &format!("{}/{}", base, LABELS_FILE),
                &self.labels_path(),
                &manifest.labels_sha256,
                "labels",
            )
            .await?;
            fs::write(self.manifest_path(), &manifest_bytes)?;
            Ok(())
        }
        .await;

        if result.is_err() {
            let _ = self.remove();
        }
        result
    }

    async fn download_and_verify(
        &self,
        url: &str,
        path: &Path,
        expected_hash: &str,
        file_type: &str,
    ) -> Result<(), ArtifactError> {
        log::info!("Downloading {} file from {} to {:?}", file_type, url, path);
        let response = reqwest::get(url).await?.error_for_status()?;
        let bytes = response.bytes().await?;
        log::info!("Downloaded {} bytes", bytes.len());

        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let hash = format!("{:x}", hasher.finalize());
        if hash != expected_hash {
            log::error!(
                "{} hash mismatch: expected {}, got {}",
                file_type,
                expected_hash,
                hash
            );
            return Err(ArtifactError::HashMismatch {
                file: file_type.to_string(),
                expected: expected_hash.to_string(),
                actual: hash,
            });
        }

        fs::write(path, &bytes)?;
        if !self.verify_file(path, expected_hash)? {
            return Err(ArtifactError::HashMismatch {
                file: file_type.to_string(),
                expected: expected_hash.to_string(),
                actual: Self::file_sha256(path)?,
            });
        }

        log::info!("{} file downloaded and verified successfully", file_type);
        Ok(())
    }

    /// Removes all artifact files from the store.
    pub fn remove(&self) -> Result<(), ArtifactError> {
        for path in [self.model_path(), self.labels_path(), self.manifest_path()] {
            if path.exists() {
                fs::remove_file(&path)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sha256_hex(bytes: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        format!("{:x}", hasher.finalize())
    }

    fn store_with_artifacts(name: &str, model: &[u8], labels: &[u8]) -> ArtifactStore {
        let dir = env::temp_dir().join("triage-tests").join(name);
        let _ = fs::remove_dir_all(&dir);
        let store = ArtifactStore::new(&dir).unwrap();
        fs::write(store.model_path(), model).unwrap();
        fs::write(store.labels_path(), labels).unwrap();
        let manifest = format!(
            "{{\"model_sha256\": \"{}\", \"labels_sha256\": \"{}\"}}",
            sha256_hex(model),
            sha256_hex(labels)
        );
        fs::write(store.manifest_path(), manifest).unwrap();
        store
    }

    #[test]
    fn test_verify_matching_artifacts() {
        let store = store_with_artifacts("verify-ok", b"model-bytes", b"[\"Allergy\"]");
        assert!(store.is_present());
        assert!(store.verify().unwrap());
    }

    #[test]
    fn test_verify_detects_corruption() {
        let store = store_with_artifacts("verify-corrupt", b"model-bytes", b"[\"Allergy\"]");
        fs::write(store.model_path(), b"corrupted data").unwrap();
        assert!(!store.verify().unwrap());
    }

    #[test]
    fn test_verify_without_manifest() {
        let store = store_with_artifacts("verify-no-manifest", b"model-bytes", b"[]");
        fs::remove_file(store.manifest_path()).unwrap();
        assert!(matches!(
            store.verify(),
            Err(ArtifactError::MissingManifest(_))
        ));
    }

    #[test]
    fn test_remove() {
        let store = store_with_artifacts("remove", b"model-bytes", b"[]");
        store.remove().unwrap();
        assert!(!store.is_present());
        assert!(!store.manifest_path().exists());
    }

    #[test]
    fn test_default_dir() {
        // Test with environment variable
        env::set_var("TRIAGE_CACHE", "/tmp/triage-test-cache");
        let path = ArtifactStore::default_dir();
        assert!(path.to_str().unwrap().contains("/tmp/triage-test-cache/models"));
        env::remove_var("TRIAGE_CACHE");

        // Test without environment variable
        let path = ArtifactStore::default_dir();
        assert!(path.to_str().unwrap().contains("triage"));
    }
}
