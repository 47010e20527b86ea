use sha2::{Digest, Sha256};
use std::env;
use std::fs;
use triage::{ArtifactError, ArtifactStore};

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

fn fresh_store(name: &str) -> ArtifactStore {
    let dir = env::temp_dir().join("triage-integration").join(name);
    let _ = fs::remove_dir_all(&dir);
    ArtifactStore::new(dir).unwrap()
}

#[test]
fn test_store_lifecycle() {
    let store = fresh_store("lifecycle");
    assert!(!store.is_present());

    let model = b"onnx bytes";
    let labels = br#"["Fungal infection", "Allergy"]"#;
    fs::write(store.model_path(), model).unwrap();
    fs::write(store.labels_path(), labels).unwrap();
    assert!(store.is_present());

    // Without a manifest the artifacts are present but unverifiable.
    assert!(matches!(
        store.verify(),
        Err(ArtifactError::MissingManifest(_))
    ));

    fs::write(
        store.manifest_path(),
        format!(
            r#"{{"model_sha256": "{}", "labels_sha256": "{}"}}"#,
            sha256_hex(model),
            sha256_hex(labels)
        ),
    )
    .unwrap();
    assert!(store.verify().unwrap());

    fs::write(store.labels_path(), b"tampered").unwrap();
    assert!(!store.verify().unwrap());

    store.remove().unwrap();
    assert!(!store.is_present());
}

#[test]
fn test_malformed_manifest_is_an_error() {
    let store = fresh_store("bad-manifest");
    fs::write(store.model_path(), b"m").unwrap();
    fs::write(store.labels_path(), b"l").unwrap();
    fs::write(store.manifest_path(), b"not json at all").unwrap();
    assert!(matches!(store.verify(), Err(ArtifactError::Manifest(_))));
}
