use std::{
    io::Write,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};
use tempfile::NamedTempFile;

/// A rendered artifact waiting to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    path: PathBuf,
    content: String,
}

impl Artifact {
    /// Create a new artifact with the given destination path and content.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the destination path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the rendered content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Persist this artifact on its own.
    pub fn write(&self) -> Result<()> {
        persist_all(std::slice::from_ref(self))
    }
}

/// Persist every artifact atomically.
///
/// All contents are staged into temporary files next to their destinations
/// before any of them is renamed into place, so a failure while staging
/// leaves every destination untouched.
pub fn persist_all(artifacts: &[Artifact]) -> Result<()> {
    let staged = artifacts
        .iter()
        .map(|artifact| stage(artifact).map(|tmp| (tmp, artifact.path())))
        .collect::<Result<Vec<_>>>()?;

    for (tmp, path) in staged {
        tmp.persist(path)
            .map_err(|e| e.error)
            .wrap_err_with(|| format!("failed to persist '{}'", path.display()))?;
        tracing::debug!(path = %path.display(), "artifact persisted");
    }

    Ok(())
}

fn stage(artifact: &Artifact) -> Result<NamedTempFile> {
    let path = artifact.path();
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)
        .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;

    let mut tmp = NamedTempFile::new_in(parent)
        .wrap_err_with(|| format!("failed to stage '{}'", path.display()))?;
    tmp.write_all(artifact.content().as_bytes())
        .and_then(|()| tmp.flush())
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;

    Ok(tmp)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Foo.h");

        Artifact::new(&path, "#pragma once\n").write().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "#pragma once\n");
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("Foo.cpp");

        Artifact::new(&path, "nested").write().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Foo.h");

        Artifact::new(&path, "first").write().unwrap();
        Artifact::new(&path, "second").write().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_persist_all_writes_every_artifact() {
        let temp = TempDir::new().unwrap();
        let header = temp.path().join("Foo.h");
        let source = temp.path().join("Foo.cpp");

        persist_all(&[
            Artifact::new(&header, "decl"),
            Artifact::new(&source, "def"),
        ])
        .unwrap();

        assert_eq!(fs::read_to_string(&header).unwrap(), "decl");
        assert_eq!(fs::read_to_string(&source).unwrap(), "def");
    }

    #[test]
    fn test_persist_all_leaves_no_temp_files() {
        let temp = TempDir::new().unwrap();
        let header = temp.path().join("Foo.h");

        persist_all(&[Artifact::new(&header, "decl")]).unwrap();

        let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().flatten().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_persist_into_missing_root_fails_cleanly() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "file, not a directory").unwrap();

        let header = blocker.join("Foo.h");
        let source = temp.path().join("Foo.cpp");
        let result = persist_all(&[
            Artifact::new(&source, "def"),
            Artifact::new(&header, "decl"),
        ]);

        assert!(result.is_err());
        assert!(!source.exists());
    }

    #[test]
    fn test_artifact_accessors() {
        let artifact = Artifact::new("out/Foo.h", "content");
        assert_eq!(artifact.path(), Path::new("out/Foo.h"));
        assert_eq!(artifact.content(), "content");
    }
}
