//! Revocable preview handles for picked images
//!
//! `PreviewStore` plays the role of the browser's object-URL registry: it turns
//! a `FileBlob` into a short-lived `PreviewUrl` backed by the decoded bytes,
//! and frees those bytes when the handle is revoked. A `PreviewUrl` has a
//! single owner; revoking consumes it and dropping an unrevoked handle revokes
//! it, so each handle is released exactly once.

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::sync::Arc;

use image::imageops::FilterType;
use parking_lot::Mutex;
use uuid::Uuid;

use super::blob::FileBlob;

/// Thumbnail width in terminal cells
pub const THUMBNAIL_WIDTH: u32 = 16;
/// Thumbnail height in terminal cells (cells are roughly twice as tall as wide)
pub const THUMBNAIL_HEIGHT: u32 = 8;

/// A tiny RGB rendition of the picked image for terminal display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    pixels: Vec<[u8; 3]>,
}

impl Thumbnail {
    /// Decode image bytes and scale them to the thumbnail grid
    ///
    /// Returns `None` for formats the decoder does not understand (SVG, for
    /// instance); the preview is still valid, it just has nothing to draw.
    pub fn decode(bytes: &[u8]) -> Option<Self> {
        let img = image::load_from_memory(bytes).ok()?;
        let small = img
            .resize_exact(THUMBNAIL_WIDTH, THUMBNAIL_HEIGHT, FilterType::Triangle)
            .to_rgb8();
        Some(Self {
            width: small.width(),
            height: small.height(),
            pixels: small.pixels().map(|p| p.0).collect(),
        })
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }

    /// Rows of pixels, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[[u8; 3]]> {
        self.pixels.chunks(self.width.max(1) as usize)
    }
}

struct PreviewEntry {
    bytes: Arc<[u8]>,
    thumbnail: Option<Thumbnail>,
}

#[derive(Default)]
struct StoreInner {
    live: HashMap<Uuid, PreviewEntry>,
    created: u64,
    revoked: u64,
    peak_live: usize,
}

/// Registry of live preview handles
#[derive(Clone, Default)]
pub struct PreviewStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl PreviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the blob and register a new preview for it
    pub fn create(&self, blob: &FileBlob) -> io::Result<PreviewUrl> {
        let bytes = blob.read_bytes()?;
        let thumbnail = Thumbnail::decode(&bytes);
        let id = Uuid::new_v4();

        let mut inner = self.inner.lock();
        inner.live.insert(id, PreviewEntry { bytes, thumbnail });
        inner.created += 1;
        inner.peak_live = inner.peak_live.max(inner.live.len());
        tracing::debug!("created preview {id} for {}", blob.name());

        Ok(PreviewUrl {
            id,
            store: self.clone(),
            revoked: false,
        })
    }

    /// Release a preview handle
    pub fn revoke(&self, url: PreviewUrl) {
        url.revoke();
    }

    fn revoke_id(&self, id: Uuid) {
        let mut inner = self.inner.lock();
        if inner.live.remove(&id).is_some() {
            inner.revoked += 1;
            tracing::debug!("revoked preview {id}");
        } else {
            tracing::warn!("preview {id} revoked twice");
        }
    }

    pub fn is_live(&self, url: &PreviewUrl) -> bool {
        self.inner.lock().live.contains_key(&url.id)
    }

    pub fn thumbnail(&self, url: &PreviewUrl) -> Option<Thumbnail> {
        self.inner
            .lock()
            .live
            .get(&url.id)
            .and_then(|entry| entry.thumbnail.clone())
    }

    /// Number of previews currently holding decoded bytes
    pub fn live_count(&self) -> usize {
        self.inner.lock().live.len()
    }

    /// Bytes held by live previews
    pub fn live_bytes(&self) -> usize {
        self.inner.lock().live.values().map(|e| e.bytes.len()).sum()
    }

    /// Most previews ever live at the same time
    pub fn peak_live_count(&self) -> usize {
        self.inner.lock().peak_live
    }

    /// Total previews ever created
    pub fn created_count(&self) -> u64 {
        self.inner.lock().created
    }

    /// Total previews ever revoked
    pub fn revoked_count(&self) -> u64 {
        self.inner.lock().revoked
    }
}

impl fmt::Debug for PreviewStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("PreviewStore")
            .field("live", &inner.live.len())
            .field("created", &inner.created)
            .field("revoked", &inner.revoked)
            .finish()
    }
}

/// A single-owner handle to a registered preview
pub struct PreviewUrl {
    id: Uuid,
    store: PreviewStore,
    revoked: bool,
}

impl PreviewUrl {
    /// The handle's address, in the shape of a browser object URL
    pub fn url(&self) -> String {
        format!("blob:conf-ticket/{}", self.id)
    }

    pub fn thumbnail(&self) -> Option<Thumbnail> {
        self.store.thumbnail(self)
    }

    /// Release the preview's bytes
    pub fn revoke(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if !self.revoked {
            self.revoked = true;
            self.store.revoke_id(self.id);
        }
    }
}

impl Drop for PreviewUrl {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for PreviewUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PreviewUrl").field(&self.url()).finish()
    }
}
