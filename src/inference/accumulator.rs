//! Per-column running statistics

use std::collections::{BTreeMap, HashMap};

use super::classify::{BOOLEAN_STRINGS, classify};
use super::types::{TypeCounts, TypeGuess, TypeTag};

/// Accumulates type compatibility and value frequencies for one column
///
/// Invariants: every per-tag count is at most `observations`, and the
/// value frequencies sum to `observations`.
#[derive(Debug, Clone, Default)]
pub struct ColumnAccumulator {
    observations: usize,
    types: TypeCounts,
    values: HashMap<String, usize>,
}

impl ColumnAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one non-null value
    pub fn update(&mut self, value: &str) {
        self.observations += 1;
        match self.values.get_mut(value) {
            Some(count) => *count += 1,
            None => {
                self.values.insert(value.to_string(), 1);
            }
        }
        self.types.add(classify(value));
    }

    /// Number of values recorded
    pub fn observations(&self) -> usize {
        self.observations
    }

    /// Number of distinct raw values recorded
    pub fn distinct_values(&self) -> usize {
        self.values.len()
    }

    /// Independent copy of the value frequency table
    pub fn values(&self) -> BTreeMap<String, usize> {
        self.values
            .iter()
            .map(|(v, c)| (v.clone(), *c))
            .collect()
    }

    /// Reduce the statistics to a type guess
    ///
    /// Precedence, first match wins:
    /// 1. every value is in the boolean vocabulary: Boolean, except that a
    ///    column holding only `"0"` or only `"1"` is an Integer flag
    /// 2. every value is an integer: Integer
    /// 3. every value is a decimal: Decimal
    /// 4. String
    ///
    /// A column with no observations reduces to String.
    pub fn reduce(&self) -> TypeGuess {
        let guessed = if self.observations > 0 && self.all_boolean() {
            if self.is_single_flag() {
                TypeTag::Integer
            } else {
                TypeTag::Boolean
            }
        } else if self.observations > 0 && self.all(TypeTag::Integer) {
            TypeTag::Integer
        } else if self.observations > 0 && self.all(TypeTag::Decimal) {
            TypeTag::Decimal
        } else {
            TypeTag::String
        };

        TypeGuess::new(guessed, self.observations, self.types, self.values())
    }

    fn all(&self, tag: TypeTag) -> bool {
        self.types.get(tag) == self.observations
    }

    // Vocabulary membership is checked on the lowercase text, which is the
    // same canonical form the classifier uses.
    fn all_boolean(&self) -> bool {
        self.all(TypeTag::Boolean)
            && self
                .values
                .keys()
                .all(|v| BOOLEAN_STRINGS.contains(&v.to_lowercase().as_str()))
    }

    fn is_single_flag(&self) -> bool {
        self.values.len() == 1 && self.values.keys().all(|v| v == "0" || v == "1")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accumulate(values: &[&str]) -> ColumnAccumulator {
        let mut acc = ColumnAccumulator::new();
        for v in values {
            acc.update(v);
        }
        acc
    }

    #[test]
    fn test_integer_column() {
        let guess = accumulate(&["1", "2", "3"]).reduce();
        assert_eq!(guess.guessed_type(), TypeTag::Integer);
        assert_eq!(guess.observations(), 3);
    }

    #[test]
    fn test_boolean_column() {
        let guess = accumulate(&["yes", "no", "true", "false", "t", "f"]).reduce();
        assert_eq!(guess.guessed_type(), TypeTag::Boolean);
        assert_eq!(guess.observations(), 6);
    }

    #[test]
    fn test_mixed_case_booleans() {
        let guess = accumulate(&["TRUE", "False", "true"]).reduce();
        assert_eq!(guess.guessed_type(), TypeTag::Boolean);
    }

    #[test]
    fn test_zero_one_column_is_boolean() {
        let guess = accumulate(&["0", "1", "1", "0"]).reduce();
        assert_eq!(guess.guessed_type(), TypeTag::Boolean);
    }

    #[test]
    fn test_constant_flag_is_integer() {
        assert_eq!(
            accumulate(&["1", "1", "1"]).reduce().guessed_type(),
            TypeTag::Integer
        );
        assert_eq!(
            accumulate(&["0"]).reduce().guessed_type(),
            TypeTag::Integer
        );
    }

    #[test]
    fn test_constant_minus_one_is_boolean() {
        assert_eq!(
            accumulate(&["-1", "-1"]).reduce().guessed_type(),
            TypeTag::Boolean
        );
    }

    #[test]
    fn test_decimal_column() {
        let guess = accumulate(&["1.5", "2", "-0.25"]).reduce();
        assert_eq!(guess.guessed_type(), TypeTag::Decimal);
    }

    #[test]
    fn test_string_column() {
        let guess = accumulate(&["1", "two", "3"]).reduce();
        assert_eq!(guess.guessed_type(), TypeTag::String);
        assert_eq!(guess.types().get(TypeTag::Integer), 2);
        assert_eq!(guess.types().get(TypeTag::String), 3);
    }

    #[test]
    fn test_empty_values_fall_back_to_string() {
        let guess = accumulate(&["", "", "1"]).reduce();
        assert_eq!(guess.guessed_type(), TypeTag::String);
        assert_eq!(guess.observations(), 3);
        assert_eq!(guess.value_count(""), 2);
    }

    #[test]
    fn test_no_observations_is_string() {
        let guess = ColumnAccumulator::new().reduce();
        assert_eq!(guess.guessed_type(), TypeTag::String);
        assert_eq!(guess.observations(), 0);
    }

    #[test]
    fn test_invariants_hold() {
        let acc = accumulate(&["a", "1", "1", "", "2.5", "yes"]);
        let guess = acc.reduce();

        for (_, count) in guess.types().iter() {
            assert!(count <= guess.observations());
        }
        assert_eq!(guess.values().values().sum::<usize>(), acc.observations());
        assert_eq!(acc.distinct_values(), 5);
    }

    #[test]
    fn test_reduce_is_idempotent() {
        let acc = accumulate(&["1", "x", "2"]);
        assert_eq!(acc.reduce(), acc.reduce());
    }

    #[test]
    fn test_guess_is_independent_snapshot() {
        let mut acc = accumulate(&["1", "2"]);
        let guess = acc.reduce();

        acc.update("three");
        acc.update("1");

        assert_eq!(guess.guessed_type(), TypeTag::Integer);
        assert_eq!(guess.observations(), 2);
        assert_eq!(guess.value_count("1"), 1);
        assert_eq!(guess.value_count("three"), 0);
    }
}
