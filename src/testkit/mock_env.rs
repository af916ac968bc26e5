use crate::errors::ComplexityError;
use crate::io::FileSystem;
use crate::prompt::Confirmer;
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, RwLock};

/// In-memory file system. Directories exist implicitly for every stored file
/// and can be added explicitly with [`MemoryFileSystem::with_dir`] (for
/// markers such as `.git`).
///
/// Clones share state, so a test can keep a handle and inspect writes made
/// by a command.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    files: Arc<RwLock<BTreeMap<PathBuf, String>>>,
    dirs: Arc<RwLock<BTreeSet<PathBuf>>>,
    writes: Arc<Mutex<usize>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files
            .write()
            .expect("Lock poisoned")
            .insert(path.into(), content.into());
        self
    }

    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        self.dirs.write().expect("Lock poisoned").insert(path.into());
        self
    }

    /// Current content of `path`, if stored.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .read()
            .expect("Lock poisoned")
            .get(path.as_ref())
            .cloned()
    }

    /// Number of successful [`FileSystem::write`] calls so far.
    pub fn write_count(&self) -> usize {
        *self.writes.lock().expect("Lock poisoned")
    }

    fn is_implicit_dir(&self, path: &Path) -> bool {
        self.files
            .read()
            .expect("Lock poisoned")
            .keys()
            .any(|file| file.starts_with(path) && file != path)
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, ComplexityError> {
        self.contents(path).ok_or_else(|| ComplexityError::Io {
            message: format!("Failed to read file: {} does not exist", path.display()),
            path: Some(path.to_path_buf()),
            source: None,
        })
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), ComplexityError> {
        self.files
            .write()
            .expect("Lock poisoned")
            .insert(path.to_path_buf(), content.to_string());
        *self.writes.lock().expect("Lock poisoned") += 1;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.is_file(path)
            || self.dirs.read().expect("Lock poisoned").contains(path)
            || self.is_implicit_dir(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.read().expect("Lock poisoned").contains_key(path)
    }
}

/// Confirmer that replays answers in order. Running out of answers declines.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConfirmer {
    answers: Arc<Mutex<VecDeque<bool>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedConfirmer {
    pub fn answering(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: Arc::new(Mutex::new(answers.into_iter().collect())),
            prompts: Arc::default(),
        }
    }

    /// Confirmer with no answers: every question is declined.
    pub fn declining() -> Self {
        Self::default()
    }

    /// Questions asked so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("Lock poisoned").clone()
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&self, message: &str) -> Result<bool, ComplexityError> {
        self.prompts
            .lock()
            .expect("Lock poisoned")
            .push(message.to_string());
        Ok(self
            .answers
            .lock()
            .expect("Lock poisoned")
            .pop_front()
            .unwrap_or(false))
    }
}
