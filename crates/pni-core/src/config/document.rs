//! Idempotent section-based config file patching
//!
//! A [`ConfigDocument`] is read once, mutated in memory through an ordered
//! sequence of [`Section`] applications, and written back at most once. Each
//! section names a `signature` substring whose presence means the section is
//! already applied; every signature must be contained in the text its own
//! insertion splices in, which is what makes a second patch pass a no-op.
//!
//! Patching is best-effort by design: when no anchor matches (heavily
//! customized file), the section is skipped and the file is left intact.
//! Corrupting a working config is worse than an incomplete patch.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Where a fragment lands relative to its anchor substring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    After,
    Before,
}

/// One candidate splice point for a section
#[derive(Debug, Clone)]
pub struct Insertion {
    pub placement: Placement,
    pub anchor: String,
    pub fragment: String,
}

impl Insertion {
    pub fn after(anchor: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            placement: Placement::After,
            anchor: anchor.into(),
            fragment: fragment.into(),
        }
    }

    pub fn before(anchor: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            placement: Placement::Before,
            anchor: anchor.into(),
            fragment: fragment.into(),
        }
    }
}

/// A named, independently insertable fragment of a config file.
///
/// Insertions are anchor fallbacks tried in order; the first anchor found in
/// the document wins. Each insertion's fragment must contain the section
/// signature, otherwise a second pass would insert the fragment again.
#[derive(Debug, Clone)]
pub struct Section {
    pub name: &'static str,
    pub signature: String,
    pub insertions: Vec<Insertion>,
}

impl Section {
    pub fn new(name: &'static str, signature: impl Into<String>, insertions: Vec<Insertion>) -> Self {
        let section = Self {
            name,
            signature: signature.into(),
            insertions,
        };
        debug_assert!(
            section
                .insertions
                .iter()
                .all(|ins| ins.fragment.contains(&section.signature)),
            "section `{}`: every fragment must contain the signature",
            section.name
        );
        section
    }
}

/// Result of applying one section to a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// Signature found; nothing to do
    AlreadyPresent,
    /// Fragment spliced in at an anchor
    Inserted,
    /// No anchor matched; section skipped, file untouched
    AnchorMissing,
}

/// An in-memory config file being created or patched
#[derive(Debug, Clone)]
pub struct ConfigDocument {
    path: PathBuf,
    original: Option<String>,
    content: String,
}

impl ConfigDocument {
    /// Read the file at `path`, or start an absent document
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let original = match std::fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read config: {}", path.display()))
            }
        };
        let content = original.clone().unwrap_or_default();
        Ok(Self {
            path,
            original,
            content,
        })
    }

    /// Start a document from existing text read elsewhere (extension migration)
    pub fn from_existing(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            original: None,
            content: content.into(),
        }
    }

    pub fn exists(&self) -> bool {
        self.original.is_some()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the whole document body (CREATE path)
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Apply one section: skip when present, splice at the first matching
    /// anchor, otherwise report the miss and leave the text unchanged.
    pub fn apply(&mut self, section: &Section) -> PatchOutcome {
        if self.content.contains(&section.signature) {
            return PatchOutcome::AlreadyPresent;
        }

        for insertion in &section.insertions {
            if let Some(start) = self.content.find(&insertion.anchor) {
                let at = match insertion.placement {
                    Placement::After => start + insertion.anchor.len(),
                    Placement::Before => start,
                };
                self.content.insert_str(at, &insertion.fragment);
                return PatchOutcome::Inserted;
            }
        }

        PatchOutcome::AnchorMissing
    }

    /// Whether the working copy differs from what was read
    pub fn is_dirty(&self) -> bool {
        match &self.original {
            Some(original) => *original != self.content,
            None => true,
        }
    }

    /// Write the document back, but only when something changed.
    ///
    /// Returns `true` when a write happened.
    pub fn write_if_changed(&self) -> Result<bool> {
        if !self.is_dirty() {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        std::fs::write(&self.path, &self.content)
            .with_context(|| format!("Failed to write config: {}", self.path.display()))?;
        Ok(true)
    }
}
