use serde::{Deserialize, Serialize};

/// Catalog-level metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogMeta {
    /// Human-maintained catalog version string.
    pub version: String,
    /// Declared question count. Checked against the actual count on load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_questions: Option<usize>,
}

impl Default for CatalogMeta {
    fn default() -> Self {
        Self {
            version: "unversioned".to_string(),
            total_questions: None,
        }
    }
}

/// A themed group of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub questions: Vec<Question>,
}

impl Module {
    /// Number of attitude slots this module contributes.
    pub fn slot_count(&self) -> usize {
        self.questions.iter().map(Question::option_count).sum()
    }
}

/// A single question. Each option becomes one attitude slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub title: String,
    pub options: Vec<OptionLabel>,
}

impl Question {
    pub fn option_count(&self) -> usize {
        self.options.len()
    }
}

/// Option text: either a bare label or a long/short pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionLabel {
    Plain(String),
    Pair {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        long: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        short: Option<String>,
    },
}

impl OptionLabel {
    /// Full label, falling back to the short form.
    pub fn text(&self) -> &str {
        match self {
            OptionLabel::Plain(text) => text,
            OptionLabel::Pair { long: Some(long), .. } => long,
            OptionLabel::Pair { short: Some(short), .. } => short,
            OptionLabel::Pair { .. } => "unknown option",
        }
    }

    /// Compact label, falling back to the full form.
    pub fn short_text(&self) -> &str {
        match self {
            OptionLabel::Pair { short: Some(short), .. } => short,
            other => other.text(),
        }
    }
}
