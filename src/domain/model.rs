use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A string's characters sorted by Unicode scalar value. Two strings share a
/// key iff they are anagrams of each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    pub fn of(word: &str) -> Self {
        let mut chars: Vec<char> = word.chars().collect();
        chars.sort_unstable();
        Self(chars.into_iter().collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnagramGroup {
    pub key: CanonicalKey,
    pub members: Vec<String>,
}

impl AnagramGroup {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupOrder {
    /// Groups appear in the order their first member was seen.
    #[default]
    FirstSeen,
    /// Groups sorted by canonical key.
    Key,
    /// Largest groups first; equal sizes keep first-seen order.
    Size,
}

impl FromStr for GroupOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first-seen" | "first_seen" | "firstseen" => Ok(GroupOrder::FirstSeen),
            "key" => Ok(GroupOrder::Key),
            "size" => Ok(GroupOrder::Size),
            other => Err(format!(
                "Unsupported group order: {}. Valid orders: first-seen, key, size",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
    Tsv,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
        }
    }

    pub fn file_name(&self) -> String {
        format!("groups.{}", self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            other => Err(format!(
                "Unsupported format: {}. Valid formats: text, json, csv, tsv",
                other
            )),
        }
    }
}

/// Output of the transform stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupingResult {
    pub groups: Vec<AnagramGroup>,
    pub total_words: usize,
}

impl GroupingResult {
    pub fn largest_group(&self) -> usize {
        self.groups.iter().map(AnagramGroup::len).max().unwrap_or(0)
    }

    /// Plain `Vec<Vec<String>>` view, dropping the keys.
    pub fn into_lists(self) -> Vec<Vec<String>> {
        self.groups.into_iter().map(|g| g.members).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupingReport {
    pub generated_at: DateTime<Utc>,
    pub total_words: usize,
    pub group_count: usize,
    pub largest_group: usize,
    pub groups: Vec<AnagramGroup>,
}

impl From<&GroupingResult> for GroupingReport {
    fn from(result: &GroupingResult) -> Self {
        Self {
            generated_at: Utc::now(),
            total_words: result.total_words,
            group_count: result.groups.len(),
            largest_group: result.largest_group(),
            groups: result.groups.clone(),
        }
    }
}
