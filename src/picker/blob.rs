//! Selected-file handle
//!
//! A `FileBlob` is the local stand-in for a browser `File`: it knows its name,
//! sniffed MIME type and size up front, and reads its bytes only when someone
//! (the preview store) asks for them.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use infer::Infer;

use crate::error::{AppError, Result};

/// Number of leading bytes inspected for MIME detection
const SNIFF_BYTES: usize = 8192;

pub const OCTET_STREAM: &str = "application/octet-stream";

#[derive(Clone)]
enum BlobSource {
    Path(PathBuf),
    Memory(Arc<[u8]>),
}

/// A file picked by the user (browse or drop)
#[derive(Clone)]
pub struct FileBlob {
    name: String,
    mime: String,
    size: u64,
    source: BlobSource,
}

impl FileBlob {
    /// Open a file on disk, sniffing its MIME type from the leading bytes
    pub fn open(path: &Path) -> Result<Self> {
        let open_err = |source: io::Error| AppError::OpenFile {
            path: path.display().to_string(),
            source,
        };

        let file = File::open(path).map_err(open_err)?;
        let metadata = file.metadata().map_err(open_err)?;
        if metadata.is_dir() {
            return Err(open_err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "is a directory",
            )));
        }

        let mut head = Vec::with_capacity(SNIFF_BYTES);
        file.take(SNIFF_BYTES as u64)
            .read_to_end(&mut head)
            .map_err(open_err)?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            mime: sniff_mime(&head, path),
            name,
            size: metadata.len(),
            source: BlobSource::Path(path.to_path_buf()),
        })
    }

    /// Build a blob from bytes already in memory with an explicit MIME type
    pub fn from_bytes(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        let bytes: Arc<[u8]> = bytes.into();
        Self {
            name: name.into(),
            mime: mime.into(),
            size: bytes.len() as u64,
            source: BlobSource::Memory(bytes),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// Size in bytes
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Path on disk, when the blob came from a file
    pub fn path(&self) -> Option<&Path> {
        match &self.source {
            BlobSource::Path(path) => Some(path),
            BlobSource::Memory(_) => None,
        }
    }

    /// Read the full contents
    pub fn read_bytes(&self) -> io::Result<Arc<[u8]>> {
        match &self.source {
            BlobSource::Memory(bytes) => Ok(Arc::clone(bytes)),
            BlobSource::Path(path) => Ok(std::fs::read(path)?.into()),
        }
    }
}

impl fmt::Debug for FileBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileBlob")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("size", &self.size)
            .finish()
    }
}

impl PartialEq for FileBlob {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.mime == other.mime
            && self.size == other.size
            && match (&self.source, &other.source) {
                (BlobSource::Path(a), BlobSource::Path(b)) => a == b,
                (BlobSource::Memory(a), BlobSource::Memory(b)) => a == b,
                _ => false,
            }
    }
}

impl Eq for FileBlob {}

/// Detect a MIME type from content, falling back to the extension for
/// text-based formats that carry no magic number
pub fn sniff_mime(head: &[u8], path: &Path) -> String {
    if let Some(kind) = Infer::new().get(head) {
        return kind.mime_type().to_string();
    }

    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase());
    match ext.as_deref() {
        Some("svg") => "image/svg+xml".to_string(),
        _ => OCTET_STREAM.to_string(),
    }
}
