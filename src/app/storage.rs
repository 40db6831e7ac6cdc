// src/app/storage.rs
// The narrow asynchronous boundary to the externally-owned files: raw load/save/store operations plus typed wrappers for the configuration and data documents.

use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use crate::app::model::Idea;

/// The configuration document is owned by an external collaborator; the
/// app treats it as an opaque JSON object.
pub type ConfigDoc = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("the {0} path is not configured")]
    PathNotConfigured(&'static str),
    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("'{}' is not a regular file", .0.display())]
    NotAFile(PathBuf),
    #[error("invalid JSON in '{}': {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

// --- Raw Operations ---

/// Loads raw file content. `Ok(None)` signals an empty file; a missing or
/// unreadable path is an error.
pub async fn load(path: &Path) -> Result<Option<String>, StorageError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| StorageError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    if content.is_empty() {
        Ok(None)
    } else {
        Ok(Some(content))
    }
}

/// Copies `source_path` into `dest_dir` under `file_name`, creating the
/// destination directory if needed. Overwrites an existing file of the
/// same name.
pub async fn save(dest_dir: &Path, file_name: &str, source_path: &Path) -> Result<(), StorageError> {
    let metadata = tokio::fs::metadata(source_path)
        .await
        .map_err(|source| StorageError::Read {
            path: source_path.to_path_buf(),
            source,
        })?;
    if !metadata.is_file() {
        return Err(StorageError::NotAFile(source_path.to_path_buf()));
    }
    tokio::fs::create_dir_all(dest_dir)
        .await
        .map_err(|source| StorageError::Write {
            path: dest_dir.to_path_buf(),
            source,
        })?;
    let dest = dest_dir.join(file_name);
    tokio::fs::copy(source_path, &dest)
        .await
        .map_err(|source| StorageError::Write {
            path: dest.clone(),
            source,
        })?;
    debug!("Saved '{}' to '{}'.", source_path.display(), dest.display());
    Ok(())
}

/// Writes a serialized document wholesale, replacing any previous content.
pub async fn store(path: &Path, contents: &str) -> Result<(), StorageError> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|source| StorageError::Write {
            path: path.to_path_buf(),
            source,
        })
}

// --- Typed Wrappers ---

/// Loads and parses the configuration document. Empty or absent content
/// yields the empty object; an unset path, a read failure, or a parse
/// failure is an error the caller reduces to the error slot.
pub async fn load_config_doc(path: &str) -> Result<ConfigDoc, StorageError> {
    if path.is_empty() {
        return Err(StorageError::PathNotConfigured("configuration file"));
    }
    let path = Path::new(path);
    match load(path).await? {
        None => Ok(ConfigDoc::new()),
        Some(text) => serde_json::from_str(&text).map_err(|source| StorageError::Json {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Loads and parses the ideas data document, defaulting to an empty
/// collection when the file has no content.
pub async fn load_ideas(path: &str) -> Result<Vec<Idea>, StorageError> {
    if path.is_empty() {
        return Err(StorageError::PathNotConfigured("ideas data file"));
    }
    let path = Path::new(path);
    match load(path).await? {
        None => Ok(Vec::new()),
        Some(text) => serde_json::from_str(&text).map_err(|source| StorageError::Json {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Appends one idea to the persisted data document: load, push, write the
/// whole document back. A data file that does not exist yet starts a new
/// collection.
pub async fn append_idea(path: &str, idea: Idea) -> Result<(), StorageError> {
    if path.is_empty() {
        return Err(StorageError::PathNotConfigured("ideas data file"));
    }
    let path = Path::new(path);
    let mut ideas: Vec<Idea> = match load(path).await {
        Ok(None) => Vec::new(),
        Ok(Some(text)) => serde_json::from_str(&text).map_err(|source| StorageError::Json {
            path: path.to_path_buf(),
            source,
        })?,
        Err(StorageError::Read { source, .. })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            Vec::new()
        }
        Err(err) => return Err(err),
    };
    ideas.push(idea);
    let contents = serde_json::to_string_pretty(&ideas).map_err(|source| StorageError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    store(path, &contents).await
}

/// Copies a user-selected photo into the photos directory, keeping its
/// file name. Returns the file name on success.
pub async fn save_photo(photos_dir: &str, source_path: &Path) -> Result<String, StorageError> {
    if photos_dir.is_empty() {
        return Err(StorageError::PathNotConfigured("photos directory"));
    }
    let file_name = source_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| StorageError::NotAFile(source_path.to_path_buf()))?;
    save(Path::new(photos_dir), file_name, source_path).await?;
    Ok(file_name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAR_DOC: &str = r#"[{"name":"Star","cutter":"Metal star","ideaImage":"star.png","cutterImage":"cutter.png","tags":["holiday"]}]"#;

    #[tokio::test]
    async fn load_of_a_missing_path_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nope.json");
        let err = load(&missing).await.expect_err("missing file must error");
        assert!(matches!(err, StorageError::Read { .. }));
        assert!(!err.to_string().is_empty());
    }

    #[tokio::test]
    async fn load_distinguishes_empty_from_content() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("doc.json");
        std::fs::write(&path, "").expect("write");
        assert!(load(&path).await.expect("empty file loads").is_none());
        std::fs::write(&path, "{}").expect("write");
        assert_eq!(load(&path).await.expect("file loads").as_deref(), Some("{}"));
    }

    #[tokio::test]
    async fn save_copies_into_a_created_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let source = dir.path().join("photo.png");
        std::fs::write(&source, b"not really a png").expect("write");
        let dest_dir = dir.path().join("photos");

        save(&dest_dir, "photo.png", &source).await.expect("save");
        let copied = std::fs::read(dest_dir.join("photo.png")).expect("copied file readable");
        assert_eq!(copied, b"not really a png");
    }

    #[tokio::test]
    async fn save_rejects_a_directory_source() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = save(dir.path(), "photo.png", dir.path())
            .await
            .expect_err("directory source must be rejected");
        assert!(matches!(err, StorageError::NotAFile(_)));
    }

    #[tokio::test]
    async fn config_doc_requires_a_configured_path() {
        let err = load_config_doc("").await.expect_err("unset path must error");
        assert!(matches!(err, StorageError::PathNotConfigured(_)));
        assert!(!err.to_string().is_empty());
    }

    #[tokio::test]
    async fn config_doc_defaults_to_empty_and_parses_objects() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");

        std::fs::write(&path, "").expect("write");
        let doc = load_config_doc(path.to_str().expect("utf-8 path"))
            .await
            .expect("empty config loads");
        assert!(doc.is_empty());

        std::fs::write(&path, r#"{"theme":"dark"}"#).expect("write");
        let doc = load_config_doc(path.to_str().expect("utf-8 path"))
            .await
            .expect("config loads");
        assert_eq!(doc.len(), 1);
    }

    #[tokio::test]
    async fn config_doc_parse_failure_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").expect("write");
        let err = load_config_doc(path.to_str().expect("utf-8 path"))
            .await
            .expect_err("garbage must not parse");
        assert!(matches!(err, StorageError::Json { .. }));
    }

    #[tokio::test]
    async fn ideas_document_parses_and_defaults_to_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("ideas.json");

        std::fs::write(&path, "").expect("write");
        let ideas = load_ideas(path.to_str().expect("utf-8 path"))
            .await
            .expect("empty data loads");
        assert!(ideas.is_empty());

        std::fs::write(&path, STAR_DOC).expect("write");
        let ideas = load_ideas(path.to_str().expect("utf-8 path"))
            .await
            .expect("data loads");
        assert_eq!(ideas.len(), 1);
        assert_eq!(ideas[0].name, "Star");
        assert_eq!(ideas[0].tags, vec!["holiday"]);
    }

    #[tokio::test]
    async fn append_starts_a_new_document_and_preserves_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("ideas.json");
        let path_str = path.to_str().expect("utf-8 path");

        let star = Idea {
            name: "Star".to_string(),
            cutter: "Metal star".to_string(),
            idea_image: "star.png".to_string(),
            cutter_image: "cutter.png".to_string(),
            tags: vec!["holiday".to_string()],
        };
        let tree = Idea {
            name: "Tree".to_string(),
            cutter: String::new(),
            idea_image: String::new(),
            cutter_image: String::new(),
            tags: Vec::new(),
        };

        append_idea(path_str, star).await.expect("first append");
        append_idea(path_str, tree).await.expect("second append");

        let names: Vec<String> = load_ideas(path_str)
            .await
            .expect("document loads back")
            .into_iter()
            .map(|idea| idea.name)
            .collect();
        assert_eq!(names, vec!["Star", "Tree"]);
    }

    #[tokio::test]
    async fn save_photo_keeps_the_file_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        let source = dir.path().join("holiday.png");
        std::fs::write(&source, b"pixels").expect("write");
        let photos_dir = dir.path().join("photos");

        let name = save_photo(photos_dir.to_str().expect("utf-8 path"), &source)
            .await
            .expect("photo saves");
        assert_eq!(name, "holiday.png");
        assert!(photos_dir.join("holiday.png").exists());

        let err = save_photo("", &source)
            .await
            .expect_err("unset photos dir must error");
        assert!(matches!(err, StorageError::PathNotConfigured(_)));
    }
}
