use serde::Serialize;
use std::collections::BTreeMap;

pub type FilePath = String;
pub type Prefix = String;

// --- Enums ---

/// Which rule produced a suggested prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrefixOrigin {
    Partition,
    History,
    BaseName,
}

impl std::fmt::Display for PrefixOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrefixOrigin::Partition => write!(f, "partition"),
            PrefixOrigin::History => write!(f, "history"),
            PrefixOrigin::BaseName => write!(f, "basename"),
        }
    }
}

// --- Prefix History ---

/// Remembered `path -> prefix` choices. Never mutated in place: every change
/// produces a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PrefixHistory {
    entries: BTreeMap<FilePath, Prefix>,
}

impl PrefixHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(path, prefix)| (path.as_str(), prefix.as_str()))
    }

    pub fn with_entry(&self, path: impl Into<FilePath>, prefix: impl Into<Prefix>) -> Self {
        let mut entries = self.entries.clone();
        entries.insert(path.into(), prefix.into());
        Self { entries }
    }

    pub fn without<'a>(&self, paths: impl IntoIterator<Item = &'a str>) -> Self {
        let mut entries = self.entries.clone();
        for path in paths {
            entries.remove(path);
        }
        Self { entries }
    }
}

impl<P: Into<FilePath>, X: Into<Prefix>> FromIterator<(P, X)> for PrefixHistory {
    /// Later duplicates of a path win.
    fn from_iter<I: IntoIterator<Item = (P, X)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(path, prefix)| (path.into(), prefix.into()))
                .collect(),
        }
    }
}

// --- Batch Resolution ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrefixAssignment {
    pub path: FilePath,
    pub prefix: Prefix,
}

/// One prefix per file, in the order the files were supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BatchResolution {
    rows: Vec<PrefixAssignment>,
}

impl BatchResolution {
    pub fn new(rows: Vec<PrefixAssignment>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PrefixAssignment> {
        self.rows.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.path.as_str())
    }

    /// Prefix of the first row for `path`.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.path == path)
            .map(|row| row.prefix.as_str())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.rows.iter().any(|row| row.path == path)
    }

    /// Copy of this batch with every row for `path` carrying `prefix`.
    pub fn with_override(&self, path: &str, prefix: &str) -> Self {
        Self {
            rows: self
                .rows
                .iter()
                .map(|row| PrefixAssignment {
                    path: row.path.clone(),
                    prefix: if row.path == path {
                        prefix.to_string()
                    } else {
                        row.prefix.clone()
                    },
                })
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BatchResolution {
    type Item = &'a PrefixAssignment;
    type IntoIter = std::slice::Iter<'a, PrefixAssignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl<P: Into<FilePath>, X: Into<Prefix>> FromIterator<(P, X)> for BatchResolution {
    fn from_iter<I: IntoIterator<Item = (P, X)>>(iter: I) -> Self {
        Self {
            rows: iter
                .into_iter()
                .map(|(path, prefix)| PrefixAssignment {
                    path: path.into(),
                    prefix: prefix.into(),
                })
                .collect(),
        }
    }
}

// --- Merge Result ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeOutcome {
    pub final_mapping: BTreeMap<FilePath, Prefix>,
    pub updated_history: PrefixHistory,
}
