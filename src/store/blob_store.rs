//! Flat-directory blob store for uploaded images
//!
//! Files live directly under one managed root; the filename stem is the
//! logical id and doubles as the deletion key. No index is kept on the side:
//! removal rediscovers its target by listing the directory.

use crate::model::{BlobId, RemoveReceipt, ResourceKind, StoreOptions, StoredBlob};
use crate::store::payload::{is_inline_payload, InlinePayload};
use crate::{Error, Result, DEFAULT_EXTENSION, URL_PREFIX};
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// How [`BlobStore::remove`] matches stored file names against an id
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Legacy behavior: delete the first file whose name starts with the id.
    /// An id that is itself a prefix of another id (`user1` vs `user10`) can
    /// select the wrong file.
    #[default]
    Prefix,
    /// Delete only a file whose name stem equals the id.
    Exact,
}

/// Local blob store emulating a hosted image-upload service
///
/// Two divergent ingestion paths feed one flat directory: inline `data:`
/// payloads are decoded and written, file-path references are copied
/// byte-for-byte. Concurrent callers are not coordinated; the last write to
/// a given name wins.
pub struct BlobStore {
    root: PathBuf,
    match_mode: MatchMode,
}

impl BlobStore {
    /// Create a store rooted at `root`, creating the directory if absent
    ///
    /// Creation is an idempotent ensure-exists, safe to repeat or race.
    pub fn new(root: PathBuf) -> Result<Self> {
        fs::create_dir_all(&root).map_err(|e| {
            tracing::error!(root = %root.display(), error = %e, "failed to create managed root");
            Error::from(e)
        })?;

        tracing::info!(root = %root.display(), "blob store opened");

        Ok(BlobStore {
            root,
            match_mode: MatchMode::default(),
        })
    }

    /// Set how `remove` matches file names (default: [`MatchMode::Prefix`])
    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// Default managed root: `uploads/` three directory levels above the
    /// running executable, so a debug build resolves to `<crate root>/uploads`
    ///
    /// Falls back to `./uploads` when the executable path is unavailable.
    pub fn default_root() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.ancestors().nth(3).map(Path::to_path_buf))
            .map(|dir| dir.join("uploads"))
            .unwrap_or_else(|| PathBuf::from("uploads"))
    }

    /// The managed root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persist an image and return its descriptor
    ///
    /// `input` is either an inline `data:<media-type>;base64,<payload>`
    /// string or a path to an existing file. Inline payloads are decoded and
    /// written; path references are copied, keeping the source extension
    /// (`.jpg` when the source has none). The inline branch always stores
    /// under `.jpg` whatever media type the payload declares; callers relying
    /// on the declared type must convert upstream.
    ///
    /// Storing under an id that already has a file is a silent full
    /// overwrite.
    pub fn store(&self, input: &str, options: &StoreOptions) -> Result<StoredBlob> {
        let id = options.id.clone().unwrap_or_else(BlobId::generate);

        let file_name = if is_inline_payload(input) {
            self.store_inline(input, &id)?
        } else {
            self.store_from_path(input, &id)?
        };

        Ok(StoredBlob {
            url: format!("{URL_PREFIX}/{file_name}"),
            id,
            resource_kind: ResourceKind::Image,
        })
    }

    /// Remove the stored file matching `id`
    ///
    /// The root is listed and the first entry matching under the configured
    /// [`MatchMode`] is unlinked. A missing target is a successful no-op, so
    /// the receipt is always `{"result":"ok"}`.
    pub fn remove(&self, id: &str) -> Result<RemoveReceipt> {
        match self.find_match(id)? {
            Some(file_name) => {
                let path = self.root.join(&file_name);
                fs::remove_file(&path).map_err(|e| self.io_failure("delete blob", &path, e))?;
                tracing::info!(id, file = %file_name, "blob deleted");
            }
            None => {
                tracing::debug!(id, "no blob matched, nothing to delete");
            }
        }

        Ok(RemoveReceipt::ok())
    }

    /// List the file names currently stored under the root, in directory order
    pub fn list(&self) -> Result<Vec<String>> {
        let entries =
            fs::read_dir(&self.root).map_err(|e| self.io_failure("list root", &self.root, e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| self.io_failure("list root", &self.root, e))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    /// Decode an inline payload and write it under `<id>.jpg`
    fn store_inline(&self, input: &str, id: &BlobId) -> Result<String> {
        let payload = InlinePayload::parse(input)?;

        // Fixed destination extension, regardless of the declared media type
        let file_name = id.file_name(DEFAULT_EXTENSION);
        let dest = self.root.join(&file_name);

        fs::write(&dest, &payload.bytes)
            .map_err(|e| self.io_failure("write decoded payload", &dest, e))?;

        tracing::info!(
            id = id.as_str(),
            media_type = %payload.media_type,
            bytes = payload.bytes.len(),
            dest = %dest.display(),
            "stored inline image"
        );

        Ok(file_name)
    }

    /// Copy an existing file under `<id><source extension>`
    fn store_from_path(&self, input: &str, id: &BlobId) -> Result<String> {
        let source = Path::new(input);
        let extension = source
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

        let file_name = id.file_name(&extension);
        let dest = self.root.join(&file_name);

        let bytes = fs::copy(source, &dest).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::NotFound(input.to_string()),
            _ => self.io_failure("copy source file", &dest, e),
        })?;

        tracing::info!(
            id = id.as_str(),
            source = input,
            bytes,
            dest = %dest.display(),
            "copied image file"
        );

        Ok(file_name)
    }

    /// First stored file name matching `id` under the configured mode
    fn find_match(&self, id: &str) -> Result<Option<String>> {
        let names = self.list()?;
        Ok(names.into_iter().find(|name| match self.match_mode {
            MatchMode::Prefix => name.starts_with(id),
            MatchMode::Exact => Path::new(name.as_str()).file_stem() == Some(OsStr::new(id)),
        }))
    }

    fn io_failure(&self, action: &str, path: &Path, source: io::Error) -> Error {
        tracing::error!(action, path = %path.display(), error = %source, "blob store IO failure");
        Error::Io(source)
    }
}
