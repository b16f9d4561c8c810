//! Granted directory access
//!
//! `ls` and `cat` only ever see the folder the user granted at startup.
//! The [`Directory`] trait is that capability: list the direct children
//! and read one child file as text. Nothing here writes or walks outside
//! the granted folder.

use std::collections::BTreeMap;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::error::{Error, Result};

/// A direct child of the granted directory
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DirEntry {
    pub name: String,
    pub is_directory: bool,
}

impl DirEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_directory: false,
        }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_directory: true,
        }
    }
}

/// Failures reported by a [`Directory`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// No child with that name
    #[error("{name}: No such file")]
    NotFound { name: String },

    /// The child exists but is a folder
    #[error("{name}: Is a directory")]
    IsDirectory { name: String },

    /// The child could not be read as text
    #[error("{name}: {reason}")]
    Read { name: String, reason: String },

    /// The directory itself could not be listed
    #[error("cannot list directory: {reason}")]
    List { reason: String },
}

/// Capability over a user-granted folder
#[async_trait]
pub trait Directory: Send + Sync {
    /// Display name of the folder
    fn name(&self) -> String;

    /// List direct children
    async fn list_entries(&self) -> std::result::Result<Vec<DirEntry>, DirectoryError>;

    /// Read a direct child file as UTF-8 text
    async fn read_to_string(&self, name: &str) -> std::result::Result<String, DirectoryError>;
}

/// A folder on the local filesystem
#[derive(Debug, Clone)]
pub struct LocalDirectory {
    root: PathBuf,
}

impl LocalDirectory {
    /// Grant access to `root`, which must be an existing directory
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(Error::NotADirectory { path: root });
        }
        Ok(Self { root })
    }

    /// Path of the granted folder
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a child name, refusing anything that is not a plain child
    fn child_path(&self, name: &str) -> Option<PathBuf> {
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(part)), None) => Some(self.root.join(part)),
            _ => None,
        }
    }
}

#[async_trait]
impl Directory for LocalDirectory {
    fn name(&self) -> String {
        self.root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.root.display().to_string())
    }

    async fn list_entries(&self) -> std::result::Result<Vec<DirEntry>, DirectoryError> {
        let list_err = |e: io::Error| DirectoryError::List {
            reason: e.to_string(),
        };

        let mut reader = tokio::fs::read_dir(&self.root).await.map_err(list_err)?;
        let mut entries = Vec::new();

        while let Some(entry) = reader.next_entry().await.map_err(list_err)? {
            let is_directory = entry
                .file_type()
                .await
                .map(|file_type| file_type.is_dir())
                .unwrap_or(false);
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_directory,
            });
        }

        entries.sort();
        debug!("Listed {} entries in {}", entries.len(), self.root.display());
        Ok(entries)
    }

    async fn read_to_string(&self, name: &str) -> std::result::Result<String, DirectoryError> {
        let path = self
            .child_path(name)
            .ok_or_else(|| DirectoryError::NotFound {
                name: name.to_string(),
            })?;

        let metadata = tokio::fs::metadata(&path).await.map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DirectoryError::NotFound {
                name: name.to_string(),
            },
            _ => DirectoryError::Read {
                name: name.to_string(),
                reason: e.to_string(),
            },
        })?;

        if metadata.is_dir() {
            return Err(DirectoryError::IsDirectory {
                name: name.to_string(),
            });
        }

        let bytes = tokio::fs::read(&path).await.map_err(|e| DirectoryError::Read {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

        String::from_utf8(bytes).map_err(|_| DirectoryError::Read {
            name: name.to_string(),
            reason: "not a text file".to_string(),
        })
    }
}

/// An in-memory folder, for demos and tests
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    name: String,
    files: BTreeMap<String, String>,
    folders: Vec<String>,
    fail_listing: Option<String>,
    calls: AtomicUsize,
}

impl MemoryDirectory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a text file
    pub fn with_file(mut self, name: impl Into<String>, contents: impl Into<String>) -> Self {
        self.files.insert(name.into(), contents.into());
        self
    }

    /// Add an empty sub-folder
    pub fn with_folder(mut self, name: impl Into<String>) -> Self {
        self.folders.push(name.into());
        self
    }

    /// Make every listing fail with `reason`
    pub fn failing_listing(mut self, reason: impl Into<String>) -> Self {
        self.fail_listing = Some(reason.into());
        self
    }

    /// Number of calls made through the [`Directory`] trait
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Directory for MemoryDirectory {
    fn name(&self) -> String {
        self.name.clone()
    }

    async fn list_entries(&self) -> std::result::Result<Vec<DirEntry>, DirectoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(reason) = &self.fail_listing {
            return Err(DirectoryError::List {
                reason: reason.clone(),
            });
        }

        let mut entries: Vec<DirEntry> = self
            .folders
            .iter()
            .map(DirEntry::directory)
            .chain(self.files.keys().map(DirEntry::file))
            .collect();
        entries.sort();
        Ok(entries)
    }

    async fn read_to_string(&self, name: &str) -> std::result::Result<String, DirectoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.folders.iter().any(|folder| folder == name) {
            return Err(DirectoryError::IsDirectory {
                name: name.to_string(),
            });
        }

        self.files
            .get(name)
            .cloned()
            .ok_or_else(|| DirectoryError::NotFound {
                name: name.to_string(),
            })
    }
}
