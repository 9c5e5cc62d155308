// Documentation maps produced by the parser and scanner
//
// Both maps keep insertion order: definitions in declaration order, files in
// scan order. They serialize as JSON objects in that same order.

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

/// Top-level definition name -> documentation string, for one source file
///
/// Only definitions that carried a non-empty documentation string are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentationMap {
    entries: Vec<(String, String)>,
}

impl DocumentationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a documented definition.
    ///
    /// A name that is already present keeps its position and gets the new
    /// text; the previous text is returned.
    pub fn insert(&mut self, name: impl Into<String>, doc: impl Into<String>) -> Option<String> {
        let name = name.into();
        let doc = doc.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, doc)),
            None => {
                self.entries.push((name, doc));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, doc)| doc.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(name, doc)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, d)| (n.as_str(), d.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }
}

impl Serialize for DocumentationMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, doc) in &self.entries {
            map.serialize_entry(name, doc)?;
        }
        map.end()
    }
}

/// A file the scanner left out because it failed to parse
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub file_name: String,
    pub reason: String,
}

/// What the scanner recorded for one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Documented(DocumentationMap),
    Skipped(String),
}

/// One scanned file, in scan order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    pub file_name: String,
    pub outcome: FileOutcome,
}

/// File name -> documentation map, for a whole directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDocumentationMap {
    files: Vec<ScannedFile>,
}

impl ProjectDocumentationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the documentation extracted from a file
    pub fn insert(&mut self, file_name: impl Into<String>, docs: DocumentationMap) {
        self.record(file_name.into(), FileOutcome::Documented(docs));
    }

    /// Record a file that was left out, with the reason
    pub fn skip(&mut self, file_name: impl Into<String>, reason: impl Into<String>) {
        self.record(file_name.into(), FileOutcome::Skipped(reason.into()));
    }

    fn record(&mut self, file_name: String, outcome: FileOutcome) {
        match self.files.iter_mut().find(|f| f.file_name == file_name) {
            Some(existing) => existing.outcome = outcome,
            None => self.files.push(ScannedFile { file_name, outcome }),
        }
    }

    pub fn get(&self, file_name: &str) -> Option<&DocumentationMap> {
        self.documented().find(|(n, _)| *n == file_name).map(|(_, d)| d)
    }

    /// Every scanned file, documented or skipped, in scan order
    pub fn entries(&self) -> impl Iterator<Item = &ScannedFile> {
        self.files.iter()
    }

    /// Documented files in scan order
    pub fn documented(&self) -> impl Iterator<Item = (&str, &DocumentationMap)> {
        self.files.iter().filter_map(|f| match &f.outcome {
            FileOutcome::Documented(docs) => Some((f.file_name.as_str(), docs)),
            FileOutcome::Skipped(_) => None,
        })
    }

    /// Skipped files in scan order
    pub fn skipped(&self) -> Vec<SkippedFile> {
        self.files
            .iter()
            .filter_map(|f| match &f.outcome {
                FileOutcome::Skipped(reason) => Some(SkippedFile {
                    file_name: f.file_name.clone(),
                    reason: reason.clone(),
                }),
                FileOutcome::Documented(_) => None,
            })
            .collect()
    }

    /// Number of files recorded, skipped ones included
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Total documented definitions across all files
    pub fn definition_count(&self) -> usize {
        self.documented().map(|(_, docs)| docs.len()).sum()
    }
}

struct DocumentedFiles<'a>(&'a ProjectDocumentationMap);

impl Serialize for DocumentedFiles<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (file_name, docs) in self.0.documented() {
            map.serialize_entry(file_name, docs)?;
        }
        map.end()
    }
}

impl Serialize for ProjectDocumentationMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let skipped = self.skipped();
        let fields = if skipped.is_empty() { 1 } else { 2 };
        let mut state = serializer.serialize_struct("ProjectDocumentationMap", fields)?;
        state.serialize_field("files", &DocumentedFiles(self))?;
        if skipped.is_empty() {
            state.skip_field("skipped")?;
        } else {
            state.serialize_field("skipped", &skipped)?;
        }
        state.end()
    }
}
