//! Directory browser used as the file chooser
//!
//! Pure state over a directory listing: the TUI renders it and feeds it key
//! presses, and gets back either a navigation or a chosen file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EntryKind {
    Parent,
    Dir,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Result of activating the selected entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseOutcome {
    /// Moved into another directory
    Navigated,
    /// A file was picked
    Chosen(PathBuf),
    /// Nothing to activate
    Nothing,
}

#[derive(Debug, Clone)]
pub struct FileBrowser {
    dir: PathBuf,
    entries: Vec<BrowserEntry>,
    selected: usize,
}

impl FileBrowser {
    /// List `dir`
    pub fn open(dir: &Path) -> Result<Self> {
        let dir = dir.canonicalize()?;
        let entries = list_dir(&dir)?;
        Ok(Self {
            dir,
            entries,
            selected: 0,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn entries(&self) -> &[BrowserEntry] {
        &self.entries
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&BrowserEntry> {
        self.entries.get(self.selected)
    }

    pub fn move_down(&mut self) {
        if !self.entries.is_empty() {
            self.selected = (self.selected + 1).min(self.entries.len() - 1);
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Enter the selected directory or choose the selected file
    pub fn activate(&mut self) -> Result<BrowseOutcome> {
        let Some(entry) = self.selected().cloned() else {
            return Ok(BrowseOutcome::Nothing);
        };
        match entry.kind {
            EntryKind::File => Ok(BrowseOutcome::Chosen(entry.path)),
            EntryKind::Dir | EntryKind::Parent => {
                self.navigate(&entry.path)?;
                Ok(BrowseOutcome::Navigated)
            }
        }
    }

    /// Go up one directory; stays put at the filesystem root
    pub fn parent(&mut self) -> Result<BrowseOutcome> {
        match self.dir.parent().map(Path::to_path_buf) {
            Some(parent) => {
                self.navigate(&parent)?;
                Ok(BrowseOutcome::Navigated)
            }
            None => Ok(BrowseOutcome::Nothing),
        }
    }

    fn navigate(&mut self, dir: &Path) -> Result<()> {
        let dir = dir.canonicalize()?;
        self.entries = list_dir(&dir)?;
        self.dir = dir;
        self.selected = 0;
        Ok(())
    }
}

fn list_dir(dir: &Path) -> Result<Vec<BrowserEntry>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        // Follow symlinks so linked directories can be entered
        let is_dir = fs::metadata(entry.path())
            .map(|m| m.is_dir())
            .unwrap_or(false);
        entries.push(BrowserEntry {
            name,
            path: entry.path(),
            kind: if is_dir { EntryKind::Dir } else { EntryKind::File },
        });
    }

    entries.sort_by(|a, b| {
        a.kind
            .cmp(&b.kind)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });

    if let Some(parent) = dir.parent() {
        entries.insert(
            0,
            BrowserEntry {
                name: "..".to_string(),
                path: parent.to_path_buf(),
                kind: EntryKind::Parent,
            },
        );
    }

    Ok(entries)
}
