use std::collections::{BTreeMap, HashMap, HashSet};
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;
use serde_json::Value;

use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::model::{CatalogMeta, Module, Question};
use crate::validator::validate_document;

/// The built-in question catalog.
pub const EMBEDDED_CATALOG: &str = include_str!("../data/questions.json");

/// Per-question attitude values, keyed by question id.
///
/// Values are raw 3-bit attitude codes in option order. A question that is
/// absent, or shorter than its option count, reads as zeros.
pub type Answers = BTreeMap<String, Vec<u8>>;

/// Position of one question's options inside the flat answer vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRange {
    pub offset: usize,
    pub len: usize,
}

impl SlotRange {
    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

#[derive(Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    meta: CatalogMeta,
    modules: Vec<Module>,
}

/// Validated, immutable question catalog with its canonical slot layout.
#[derive(Debug, Clone)]
pub struct Catalog {
    meta: CatalogMeta,
    modules: Vec<Module>,
    slots: HashMap<String, SlotRange>,
    total_slots: usize,
}

impl Catalog {
    /// Parse and validate a catalog from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Validate and build a catalog from a parsed JSON document.
    pub fn from_value(value: Value) -> Result<Self> {
        validate_document(&value)?;
        let document: CatalogDocument = serde_json::from_value(value)?;
        Self::from_parts(document.meta, document.modules)
    }

    /// Build a catalog from already-constructed modules.
    pub fn from_parts(meta: CatalogMeta, modules: Vec<Module>) -> Result<Self> {
        let mut module_ids = HashSet::new();
        let mut slots = HashMap::new();
        let mut offset = 0usize;

        for module in &modules {
            if !module_ids.insert(module.id.as_str()) {
                return Err(CatalogError::DuplicateModule(module.id.clone()));
            }
            for question in &module.questions {
                if question.options.is_empty() {
                    return Err(CatalogError::EmptyOptions(question.id.clone()));
                }
                let range = SlotRange {
                    offset,
                    len: question.option_count(),
                };
                if slots.insert(question.id.clone(), range).is_some() {
                    return Err(CatalogError::DuplicateQuestion(question.id.clone()));
                }
                offset += range.len;
            }
        }

        let catalog = Self {
            meta,
            modules,
            slots,
            total_slots: offset,
        };

        if let Some(declared) = catalog.meta.total_questions {
            if declared != catalog.question_count() {
                tracing::warn!(
                    declared,
                    actual = catalog.question_count(),
                    "catalog meta.total_questions does not match question count"
                );
            }
        }

        tracing::debug!(
            version = %catalog.meta.version,
            modules = catalog.modules.len(),
            questions = catalog.question_count(),
            slots = catalog.total_slots,
            "catalog loaded"
        );

        Ok(catalog)
    }

    /// Load a catalog file.
    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_path_with_config(path, CatalogConfig::default())
    }

    /// Load a catalog file with explicit config.
    pub fn from_path_with_config(path: &Path, config: CatalogConfig) -> Result<Self> {
        let path_metadata = std::fs::symlink_metadata(path)
            .map_err(|err| CatalogError::LoadFailed(format!("{}: {err}", path.display())))?;

        if path_metadata.file_type().is_symlink() && !config.allow_symlinks {
            return Err(CatalogError::LoadFailed(format!(
                "refusing to load catalog symlink: {}",
                path.display()
            )));
        }

        let file = std::fs::File::open(path).map_err(|err| {
            CatalogError::LoadFailed(format!("failed opening catalog {}: {err}", path.display()))
        })?;
        let opened_metadata = file
            .metadata()
            .map_err(|err| CatalogError::LoadFailed(err.to_string()))?;

        if !opened_metadata.is_file() {
            return Err(CatalogError::LoadFailed(format!(
                "catalog is not a regular file: {}",
                path.display()
            )));
        }

        if opened_metadata.len() > config.max_file_size as u64 {
            return Err(CatalogError::LoadFailed(format!(
                "catalog file too large ({} bytes): {}",
                opened_metadata.len(),
                path.display()
            )));
        }

        let read_limit = u64::try_from(config.max_file_size.saturating_add(1)).unwrap_or(u64::MAX);
        let mut content = String::new();
        file.take(read_limit)
            .read_to_string(&mut content)
            .map_err(|err| {
                CatalogError::LoadFailed(format!("failed reading catalog {}: {err}", path.display()))
            })?;
        if content.len() > config.max_file_size {
            return Err(CatalogError::LoadFailed(format!(
                "catalog file too large while reading: {}",
                path.display()
            )));
        }

        Self::from_json_str(&content)
    }

    /// The catalog compiled into this crate, parsed once.
    pub fn embedded() -> &'static Catalog {
        static EMBEDDED: OnceLock<Catalog> = OnceLock::new();
        EMBEDDED.get_or_init(|| {
            Catalog::from_json_str(EMBEDDED_CATALOG).expect("embedded catalog must be valid")
        })
    }

    pub fn meta(&self) -> &CatalogMeta {
        &self.meta
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn module(&self, id: &str) -> Option<&Module> {
        self.modules.iter().find(|module| module.id == id)
    }

    /// Iterate all questions in canonical order.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.modules.iter().flat_map(|module| module.questions.iter())
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions().find(|question| question.id == id)
    }

    pub fn question_count(&self) -> usize {
        self.slots.len()
    }

    /// Length of the flat answer vector.
    pub fn total_slots(&self) -> usize {
        self.total_slots
    }

    pub fn slot_range(&self, question_id: &str) -> Option<SlotRange> {
        self.slots.get(question_id).copied()
    }

    /// Flatten answers into canonical slot order.
    ///
    /// Missing questions and missing option entries become 0. Unknown
    /// question ids in `answers` are ignored. Values are copied unchanged.
    pub fn flatten(&self, answers: &Answers) -> Vec<u8> {
        let mut flat = Vec::with_capacity(self.total_slots);
        for question in self.questions() {
            let states = answers.get(&question.id).map(Vec::as_slice).unwrap_or(&[]);
            for index in 0..question.option_count() {
                flat.push(states.get(index).copied().unwrap_or(0));
            }
        }
        flat
    }

    /// Regroup a flat vector into per-question answers.
    ///
    /// Input shorter than [`Catalog::total_slots`] is zero-filled; extra
    /// values are ignored. Questions whose values are all zero are omitted.
    pub fn unflatten(&self, flat: &[u8]) -> Answers {
        let mut answers = Answers::new();
        let mut cursor = 0usize;

        for question in self.questions() {
            let states: Vec<u8> = (0..question.option_count())
                .map(|index| flat.get(cursor + index).copied().unwrap_or(0))
                .collect();
            cursor += question.option_count();

            if states.iter().any(|&value| value != 0) {
                answers.insert(question.id.clone(), states);
            }
        }

        answers
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;

    const SMALL: &str = r#"{
        "meta": {"version": "t1", "total_questions": 2},
        "modules": [
            {"id": "a", "name": "A", "questions": [
                {"id": "q1", "title": "Q1", "options": ["x", "y", "z"]}
            ]},
            {"id": "b", "name": "B", "questions": [
                {"id": "q2", "title": "Q2", "options": ["x", {"short": "y"}]}
            ]}
        ]
    }"#;

    #[test]
    fn layout_follows_catalog_order() {
        let catalog = Catalog::from_json_str(SMALL).unwrap();

        assert_eq!(catalog.total_slots(), 5);
        assert_eq!(catalog.question_count(), 2);
        assert_eq!(catalog.slot_range("q1"), Some(SlotRange { offset: 0, len: 3 }));
        assert_eq!(catalog.slot_range("q2"), Some(SlotRange { offset: 3, len: 2 }));
        assert_eq!(catalog.slot_range("missing"), None);
        assert_eq!(catalog.meta().version, "t1");
    }

    #[test]
    fn flatten_fills_missing_with_zero() {
        let catalog = Catalog::from_json_str(SMALL).unwrap();
        let mut answers = Answers::new();
        answers.insert("q2".to_string(), vec![3]);
        answers.insert("unknown".to_string(), vec![4, 4]);

        assert_eq!(catalog.flatten(&answers), vec![0, 0, 0, 3, 0]);
    }

    #[test]
    fn flatten_ignores_extra_option_values() {
        let catalog = Catalog::from_json_str(SMALL).unwrap();
        let mut answers = Answers::new();
        answers.insert("q1".to_string(), vec![1, 2, 3, 4, 4]);

        assert_eq!(catalog.flatten(&answers), vec![1, 2, 3, 0, 0]);
    }

    #[test]
    fn unflatten_omits_all_zero_questions() {
        let catalog = Catalog::from_json_str(SMALL).unwrap();
        let answers = catalog.unflatten(&[0, 0, 0, 0, 2]);

        let mut expected = Answers::new();
        expected.insert("q2".to_string(), vec![0, 2]);
        assert_eq!(answers, expected);
    }

    #[test]
    fn unflatten_zero_fills_short_input() {
        let catalog = Catalog::from_json_str(SMALL).unwrap();
        let answers = catalog.unflatten(&[1]);

        let mut expected = Answers::new();
        expected.insert("q1".to_string(), vec![1, 0, 0]);
        assert_eq!(answers, expected);
    }

    #[test]
    fn duplicate_question_ids_rejected() {
        let json = r#"{"modules": [
            {"id": "a", "name": "A", "questions": [{"id": "q", "title": "Q", "options": ["x"]}]},
            {"id": "b", "name": "B", "questions": [{"id": "q", "title": "Q", "options": ["x"]}]}
        ]}"#;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(CatalogError::DuplicateQuestion(id)) if id == "q"
        ));
    }

    #[test]
    fn duplicate_module_ids_rejected() {
        let json = r#"{"modules": [
            {"id": "a", "name": "A", "questions": []},
            {"id": "a", "name": "A2", "questions": []}
        ]}"#;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(CatalogError::DuplicateModule(id)) if id == "a"
        ));
    }

    #[test]
    fn empty_options_rejected() {
        let json = r#"{"modules": [
            {"id": "a", "name": "A", "questions": [{"id": "q", "title": "Q", "options": []}]}
        ]}"#;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(CatalogError::EmptyOptions(id)) if id == "q"
        ));
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(matches!(
            Catalog::from_json_str("{not json"),
            Err(CatalogError::InvalidJson(_))
        ));
    }

    #[test]
    fn question_count_mismatch_is_not_fatal() {
        let json = r#"{"meta": {"version": "x", "total_questions": 99}, "modules": [
            {"id": "a", "name": "A", "questions": [{"id": "q", "title": "Q", "options": ["x"]}]}
        ]}"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.question_count(), 1);
    }

    #[test]
    fn embedded_catalog_is_valid() {
        let catalog = Catalog::embedded();
        assert_eq!(catalog.modules()[0].id, "core");
        assert_eq!(catalog.question_count(), 20);
        assert_eq!(catalog.total_slots(), 85);
        assert_eq!(
            catalog.modules().iter().map(Module::slot_count).sum::<usize>(),
            catalog.total_slots()
        );
    }

    #[test]
    fn from_path_loads_file() {
        let dir = make_temp_dir("from-path");
        let path = dir.join("questions.json");
        std::fs::write(&path, SMALL).unwrap();

        let catalog = Catalog::from_path(&path).unwrap();
        assert_eq!(catalog.total_slots(), 5);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn from_path_rejects_oversized_file() {
        let dir = make_temp_dir("oversized");
        let path = dir.join("questions.json");
        std::fs::write(&path, SMALL).unwrap();

        let config = CatalogConfig {
            max_file_size: 16,
            ..CatalogConfig::default()
        };
        assert!(matches!(
            Catalog::from_path_with_config(&path, config),
            Err(CatalogError::LoadFailed(message)) if message.contains("too large")
        ));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn from_path_reports_missing_file() {
        let dir = make_temp_dir("missing");
        assert!(matches!(
            Catalog::from_path(&dir.join("nope.json")),
            Err(CatalogError::LoadFailed(_))
        ));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[cfg(unix)]
    #[test]
    fn from_path_rejects_symlink_by_default() {
        let dir = make_temp_dir("symlink");
        let target = dir.join("real.json");
        let link = dir.join("link.json");
        std::fs::write(&target, SMALL).unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        assert!(matches!(
            Catalog::from_path(&link),
            Err(CatalogError::LoadFailed(message)) if message.contains("symlink")
        ));

        let config = CatalogConfig {
            allow_symlinks: true,
            ..CatalogConfig::default()
        };
        assert!(Catalog::from_path_with_config(&link, config).is_ok());

        let _ = std::fs::remove_dir_all(&dir);
    }

    fn make_temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "relcode-catalog-{tag}-{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }
}
