use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::session::SessionState;

/// Where session state lives between runs.
pub trait SessionStore {
    /// Load saved state. `Ok(None)` means nothing has been saved yet.
    fn load(&self) -> Result<Option<SessionState>>;

    /// Persist state, replacing whatever was saved before.
    fn save(&mut self, state: &SessionState) -> Result<()>;
}

/// JSON file store.
///
/// Writes go to a sibling temp file that is then renamed over the target,
/// so a crash mid-write never leaves a truncated state file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SessionStore for FileStore {
    fn load(&self) -> Result<Option<SessionState>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no saved session");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        let state = serde_json::from_str(&content)?;
        tracing::debug!(path = %self.path.display(), "session loaded");
        Ok(Some(state))
    }

    fn save(&mut self, state: &SessionState) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(state)?;
        let temp = self.temp_path();
        std::fs::write(&temp, json)?;
        if let Err(err) = std::fs::rename(&temp, &self.path) {
            let _ = std::fs::remove_file(&temp);
            return Err(err.into());
        }

        tracing::info!(path = %self.path.display(), "session saved");
        Ok(())
    }
}

/// In-memory store, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Option<SessionState>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from previously saved state.
    pub fn with_state(state: SessionState) -> Self {
        Self {
            state: Some(state),
            saves: 0,
        }
    }

    pub fn state(&self) -> Option<&SessionState> {
        self.state.as_ref()
    }

    /// Number of successful saves.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<SessionState>> {
        Ok(self.state.clone())
    }

    fn save(&mut self, state: &SessionState) -> Result<()> {
        self.state = Some(state.clone());
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SessionError;

    fn make_temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "relcode-session-{tag}-{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = make_temp_dir("missing");
        let store = FileStore::new(dir.join("profile.json"));
        assert!(store.load().unwrap().is_none());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn file_store_round_trips_state() {
        let dir = make_temp_dir("round-trip");
        let mut store = FileStore::new(dir.join("nested").join("profile.json"));

        let mut state = SessionState::default();
        state.archives.insert("me".to_string(), "🌏".to_string());
        store.save(&state).unwrap();

        assert_eq!(store.load().unwrap(), Some(state));
        assert!(!store.temp_path().exists());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn failed_rename_removes_temp_file() {
        let dir = make_temp_dir("failed-rename");
        let path = dir.join("profile.json");
        // A non-empty directory at the target makes the rename fail.
        std::fs::create_dir_all(path.join("occupied")).unwrap();

        let mut store = FileStore::new(&path);
        assert!(matches!(
            store.save(&SessionState::default()),
            Err(SessionError::Io(_))
        ));
        assert!(!store.temp_path().exists());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = make_temp_dir("corrupt");
        let path = dir.join("profile.json");
        std::fs::write(&path, "{ nope").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.load(), Err(SessionError::Json(_))));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn memory_store_counts_saves() {
        let mut store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());
        store.save(&SessionState::default()).unwrap();
        store.save(&SessionState::default()).unwrap();
        assert_eq!(store.saves(), 2);
        assert!(store.state().is_some());
    }
}
