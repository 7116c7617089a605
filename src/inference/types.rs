//! Data types shared by the classifier, accumulators and engine

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Inferable column type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    /// Base-10 integer literal
    Integer,
    /// Exact decimal literal (integers included)
    Decimal,
    /// Member of the boolean vocabulary
    Boolean,
    /// Any non-empty text
    String,
}

impl TypeTag {
    /// All tags, in counter-array order
    pub const ALL: [TypeTag; 4] = [
        TypeTag::Integer,
        TypeTag::Decimal,
        TypeTag::Boolean,
        TypeTag::String,
    ];

    const fn index(self) -> usize {
        match self {
            TypeTag::Integer => 0,
            TypeTag::Decimal => 1,
            TypeTag::Boolean => 2,
            TypeTag::String => 3,
        }
    }

    /// Lowercase type name used in reports
    pub fn type_name(&self) -> &'static str {
        match self {
            TypeTag::Integer => "integer",
            TypeTag::Decimal => "decimal",
            TypeTag::Boolean => "boolean",
            TypeTag::String => "string",
        }
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Set of type tags a single value is compatible with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TypeSet(u8);

impl TypeSet {
    /// The empty set
    pub const EMPTY: TypeSet = TypeSet(0);

    /// Add a tag to the set
    pub fn insert(&mut self, tag: TypeTag) {
        self.0 |= 1 << tag.index();
    }

    /// Whether the set holds `tag`
    pub fn contains(&self, tag: TypeTag) -> bool {
        self.0 & (1 << tag.index()) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate the tags in the set
    pub fn iter(&self) -> impl Iterator<Item = TypeTag> + '_ {
        TypeTag::ALL.into_iter().filter(|t| self.contains(*t))
    }
}

impl FromIterator<TypeTag> for TypeSet {
    fn from_iter<I: IntoIterator<Item = TypeTag>>(iter: I) -> Self {
        let mut set = TypeSet::EMPTY;
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

/// Per-tag observation counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TypeCounts([usize; 4]);

impl TypeCounts {
    /// Count one observation for every tag in `set`
    pub fn add(&mut self, set: TypeSet) {
        for tag in set.iter() {
            self.0[tag.index()] += 1;
        }
    }

    /// Number of observations compatible with `tag`
    pub fn get(&self, tag: TypeTag) -> usize {
        self.0[tag.index()]
    }

    /// Iterate `(tag, count)` pairs in tag order
    pub fn iter(&self) -> impl Iterator<Item = (TypeTag, usize)> + '_ {
        TypeTag::ALL.into_iter().map(|t| (t, self.get(t)))
    }
}

impl Serialize for TypeCounts {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for TypeCounts {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = BTreeMap::<TypeTag, usize>::deserialize(deserializer)?;
        let mut counts = TypeCounts::default();
        for (tag, count) in map {
            counts.0[tag.index()] = count;
        }
        Ok(counts)
    }
}

/// One row of delimited input: column name to raw value, in header order
///
/// Each column name appears once; pushing a name again replaces its value
/// in place. A value is `None` when the row was shorter than the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, Option<String>)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing the value of an existing column
    pub fn push(&mut self, column: impl Into<String>, value: Option<String>) {
        let column = column.into();
        match self.fields.iter_mut().find(|(c, _)| *c == column) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((column, value)),
        }
    }

    /// Iterate `(column, value)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields
            .iter()
            .map(|(c, v)| (c.as_str(), v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (column, value) in iter {
            record.push(column, Some(value.into()));
        }
        record
    }
}

/// Final type guess for one column, with the evidence behind it
///
/// A guess is an independent snapshot; it never aliases accumulator state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeGuess {
    guessed_type: TypeTag,
    observations: usize,
    types: TypeCounts,
    values: BTreeMap<String, usize>,
}

impl TypeGuess {
    pub(crate) fn new(
        guessed_type: TypeTag,
        observations: usize,
        types: TypeCounts,
        values: BTreeMap<String, usize>,
    ) -> Self {
        Self {
            guessed_type,
            observations,
            types,
            values,
        }
    }

    /// The inferred type
    pub fn guessed_type(&self) -> TypeTag {
        self.guessed_type
    }

    /// Number of non-null values examined
    pub fn observations(&self) -> usize {
        self.observations
    }

    /// Per-tag compatibility counts
    pub fn types(&self) -> &TypeCounts {
        &self.types
    }

    /// Raw value frequencies
    pub fn values(&self) -> &BTreeMap<String, usize> {
        &self.values
    }

    /// How many times `value` was observed
    pub fn value_count(&self, value: &str) -> usize {
        self.values.get(value).copied().unwrap_or(0)
    }
}

/// Type guesses for every column seen, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnGuesses {
    columns: Vec<(String, TypeGuess)>,
}

impl ColumnGuesses {
    pub(crate) fn from_columns(columns: Vec<(String, TypeGuess)>) -> Self {
        Self { columns }
    }

    /// Guess for a named column
    pub fn get(&self, column: &str) -> Option<&TypeGuess> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, guess)| guess)
    }

    /// Iterate `(column, guess)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeGuess)> {
        self.columns.iter().map(|(n, g)| (n.as_str(), g))
    }

    /// Column names in first-seen order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl std::ops::Index<&str> for ColumnGuesses {
    type Output = TypeGuess;

    /// Panics if no guess exists for `column`
    fn index(&self, column: &str) -> &TypeGuess {
        self.get(column)
            .unwrap_or_else(|| panic!("no column named '{}'", column))
    }
}

impl IntoIterator for ColumnGuesses {
    type Item = (String, TypeGuess);
    type IntoIter = std::vec::IntoIter<(String, TypeGuess)>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.into_iter()
    }
}
