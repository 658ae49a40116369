use std::collections::BTreeMap;

use relcode_catalog::{Answers, Catalog};
use relcode_codec::{Avatar, Codec};
use serde::{Deserialize, Serialize};

use crate::attitude::Attitude;
use crate::config::SessionConfig;
use crate::error::{Result, SessionError};
use crate::store::SessionStore;

/// Format version written into saved state.
pub const STATE_VERSION: u32 = 1;

/// Modules enabled in a fresh session.
pub const DEFAULT_MODULES: &[&str] = &["core"];

/// Everything a session persists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub version: u32,
    #[serde(default)]
    pub avatar: Avatar,
    #[serde(default)]
    pub answers: BTreeMap<String, Vec<Attitude>>,
    #[serde(default = "default_modules")]
    pub enabled_modules: Vec<String>,
    /// Saved codes keyed by archive name.
    #[serde(default)]
    pub archives: BTreeMap<String, String>,
}

fn default_modules() -> Vec<String> {
    DEFAULT_MODULES.iter().map(|id| id.to_string()).collect()
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            version: STATE_VERSION,
            avatar: Avatar::DEFAULT,
            answers: BTreeMap::new(),
            enabled_modules: default_modules(),
            archives: BTreeMap::new(),
        }
    }
}

/// One person's questionnaire state, bound to a catalog and a store.
///
/// Mutations only change memory; call [`Session::save`] to persist.
pub struct Session<'c, S> {
    codec: Codec<'c>,
    config: SessionConfig,
    store: S,
    state: SessionState,
}

impl<'c, S: SessionStore> Session<'c, S> {
    /// Load state from the store, or start fresh if nothing is saved.
    pub fn load(store: S, catalog: &'c Catalog, config: SessionConfig) -> Result<Self> {
        let state = match store.load()? {
            Some(state) if state.version != STATE_VERSION => {
                return Err(SessionError::UnsupportedVersion(state.version));
            }
            Some(state) => state,
            None => SessionState::default(),
        };

        tracing::debug!(
            questions = state.answers.len(),
            archives = state.archives.len(),
            "session ready"
        );

        Ok(Self {
            codec: Codec::new(catalog),
            config,
            store,
            state,
        })
    }

    /// Persist the current state.
    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.state)
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.codec.catalog()
    }

    pub fn avatar(&self) -> Avatar {
        self.state.avatar
    }

    pub fn set_avatar(&mut self, avatar: Avatar) {
        self.state.avatar = avatar;
    }

    /// Set one option's attitude.
    ///
    /// With `single_core` enabled, a new `Core` demotes the question's other
    /// `Core` options to `Accept`.
    pub fn set_option_attitude(
        &mut self,
        question_id: &str,
        option_index: usize,
        attitude: Attitude,
    ) -> Result<()> {
        let count = self.option_count(question_id)?;
        if option_index >= count {
            return Err(SessionError::OptionOutOfRange {
                question: question_id.to_string(),
                index: option_index,
                count,
            });
        }

        let states = self
            .state
            .answers
            .entry(question_id.to_string())
            .or_default();
        if states.len() < count {
            states.resize(count, Attitude::Unanswered);
        }

        if attitude == Attitude::Core && self.config.single_core {
            for state in states.iter_mut().filter(|state| **state == Attitude::Core) {
                *state = Attitude::Accept;
            }
        }
        states[option_index] = attitude;

        if states.iter().all(|state| !state.is_answered()) {
            self.state.answers.remove(question_id);
        }
        Ok(())
    }

    /// Attitudes for every option of a question, unanswered ones included.
    pub fn question_state(&self, question_id: &str) -> Result<Vec<Attitude>> {
        let count = self.option_count(question_id)?;
        let stored = self
            .state
            .answers
            .get(question_id)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        Ok((0..count)
            .map(|index| stored.get(index).copied().unwrap_or_default())
            .collect())
    }

    /// Answers in codec form.
    pub fn answers(&self) -> Answers {
        self.state
            .answers
            .iter()
            .map(|(id, states)| (id.clone(), states.iter().map(|state| state.code()).collect()))
            .collect()
    }

    /// Flip a module on or off. Returns whether it is now enabled.
    pub fn toggle_module(&mut self, module_id: &str) -> Result<bool> {
        if self.catalog().module(module_id).is_none() {
            return Err(SessionError::UnknownModule(module_id.to_string()));
        }

        let modules = &mut self.state.enabled_modules;
        if let Some(position) = modules.iter().position(|id| id == module_id) {
            modules.remove(position);
            Ok(false)
        } else {
            modules.push(module_id.to_string());
            Ok(true)
        }
    }

    pub fn is_module_enabled(&self, module_id: &str) -> bool {
        self.state.enabled_modules.iter().any(|id| id == module_id)
    }

    pub fn enabled_modules(&self) -> &[String] {
        &self.state.enabled_modules
    }

    /// Clear answers and restore default modules and avatar. Archives stay.
    pub fn reset_all(&mut self) {
        let archives = std::mem::take(&mut self.state.archives);
        self.state = SessionState {
            archives,
            ..SessionState::default()
        };
    }

    /// Encode the current answers and avatar.
    pub fn export_code(&self) -> String {
        self.codec.encode(&self.answers(), self.state.avatar)
    }

    /// Replace answers and avatar with the contents of a code.
    ///
    /// Values past [`Attitude::Core`] (the reserved encoding levels) are read
    /// as unanswered. On any error the session is left unchanged.
    pub fn import_code(&mut self, code: &str) -> Result<()> {
        let decoded = self.codec.decode(code)?;

        let mut answers = BTreeMap::new();
        for (question_id, values) in decoded.answers {
            let states: Vec<Attitude> = values
                .into_iter()
                .map(|value| Attitude::try_from(value).unwrap_or_default())
                .collect();
            if states.iter().any(|state| state.is_answered()) {
                answers.insert(question_id, states);
            }
        }

        tracing::debug!(questions = answers.len(), "imported code");
        self.state.answers = answers;
        self.state.avatar = decoded.avatar;
        Ok(())
    }

    /// Store the current code under a name, replacing any previous archive.
    pub fn archive(&mut self, name: &str) -> String {
        let code = self.export_code();
        self.state.archives.insert(name.to_string(), code.clone());
        code
    }

    pub fn archives(&self) -> &BTreeMap<String, String> {
        &self.state.archives
    }

    /// Load a named archive into the current answers.
    pub fn restore_archive(&mut self, name: &str) -> Result<()> {
        let code = self
            .state
            .archives
            .get(name)
            .cloned()
            .ok_or_else(|| SessionError::UnknownArchive(name.to_string()))?;
        self.import_code(&code)
    }

    /// Delete a named archive, returning its code.
    pub fn remove_archive(&mut self, name: &str) -> Result<String> {
        self.state
            .archives
            .remove(name)
            .ok_or_else(|| SessionError::UnknownArchive(name.to_string()))
    }

    fn option_count(&self, question_id: &str) -> Result<usize> {
        self.catalog()
            .slot_range(question_id)
            .map(|range| range.len)
            .ok_or_else(|| SessionError::UnknownQuestion(question_id.to_string()))
    }
}
