//! Skills section: an insertion-ordered, duplicate-free set of tool names.

use serde::{Deserialize, Serialize};

/// Insertion-ordered set of skill strings.
///
/// Serialized as a plain JSON array. Insertion rejects empty/whitespace-only
/// values and exact duplicates of an existing entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet(Vec<String>);

impl SkillSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build a set from raw values, applying the same insertion rules.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for value in values {
            set.add(value.as_ref());
        }
        set
    }

    /// Add a skill if it is non-blank and not already present.
    ///
    /// The value is trimmed before both checks. Returns whether the set
    /// changed.
    pub fn add(&mut self, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() || self.0.iter().any(|s| s == value) {
            return false;
        }
        self.0.push(value.to_string());
        true
    }

    /// Remove a skill by exact value. Returns whether the set changed.
    pub fn remove(&mut self, value: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|s| s != value);
        self.0.len() != before
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|s| s == value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl Default for SkillSet {
    /// First-run seed skills.
    fn default() -> Self {
        Self::from_values([
            "React",
            "JavaScript",
            "Node.js",
            "Python",
            "Git",
            "Docker",
            "Figma",
            "Adobe XD",
            "VS Code",
            "MongoDB",
            "PostgreSQL",
        ])
    }
}
