use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel the data files use for "no dataset attached".
pub const DATASET_ABSENT: &str = "NULL";

/// Problem statement category. Unknown values are kept verbatim so they can
/// still be filtered on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Software,
    Hardware,
    Other(String),
}

impl Category {
    /// Categories offered by the category dropdown.
    pub const KNOWN: [Category; 2] = [Category::Software, Category::Hardware];

    pub fn parse(value: &str) -> Self {
        match value {
            "Software" => Category::Software,
            "Hardware" => Category::Hardware,
            other => Category::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::Software => "Software",
            Category::Hardware => "Hardware",
            Category::Other(value) => value,
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Category::parse(&value)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A problem statement as shown in the catalogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemStatement {
    /// Statement id, e.g. "SIH1524"; unique across the catalogue
    pub id: String,
    pub title: String,
    pub category: Category,
    pub theme: String,
    pub description: String,
    pub department: String,
    pub organisation: String,
    /// Dataset file name; `None` when the source said "NULL" or nothing at all
    pub dataset_file: Option<String>,
}

impl ProblemStatement {
    /// Case-insensitive substring match over title, description and id.
    /// `needle` must already be lowercase.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.id.to_lowercase().contains(needle)
    }

    /// Normalises a raw dataset value, mapping empty and the "NULL" sentinel to `None`.
    pub fn dataset_from_raw(raw: Option<String>) -> Option<String> {
        raw.filter(|value| !value.is_empty() && value != DATASET_ABSENT)
    }

    /// Records shown when the catalogue cannot be loaded.
    pub fn fallback() -> Vec<Self> {
        vec![
            Self {
                id: "SIH1524".to_string(),
                title: "Smart Resource Conservation in Home Appliances".to_string(),
                category: Category::Hardware,
                theme: "Smart Resource Conservation".to_string(),
                description: "Innovating for Sustainability: Driving Smart Resource Conservation (Energy & Water) in Home Appliances".to_string(),
                department: "Godrej Appliances".to_string(),
                organisation: "Godrej Appliances".to_string(),
                dataset_file: None,
            },
            Self {
                id: "SIH1525".to_string(),
                title: "Smart Education Platform".to_string(),
                category: Category::Software,
                theme: "Smart Education".to_string(),
                description: "Smart Education, a Concept that Describes learning in digital age".to_string(),
                department: "AICTE".to_string(),
                organisation: "AICTE, MIC-Student Innovation".to_string(),
                dataset_file: None,
            },
        ]
    }
}
