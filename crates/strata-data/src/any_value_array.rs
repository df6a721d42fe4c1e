//! Ordered dynamic value container

use crate::accessors::typed_accessors;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use strata_convert::{ArrayConverter, StringConverter, TypeCode, TypeConverter, Value};
use strata_reflect::{ObjectWriter, MAX_INDEX_GAP};

/// Ordered list of [`Value`]s with typed accessors by index
///
/// Reads past the end return `Null`.
///
/// # Example
/// ```rust
/// use strata_data::AnyValueArray;
///
/// let array = AnyValueArray::from_string("a,b,a", ",", true);
/// assert_eq!(array.to_string(), "a,b");
/// assert_eq!(array.get_as_string(1), "b");
/// assert_eq!(array.get_as_nullable_string(5), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnyValueArray {
    values: Vec<Value>,
}

impl AnyValueArray {
    /// Create an empty array
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap existing values
    #[must_use]
    pub fn from_values(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Convert any value; scalars become a single element
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self::from_values(ArrayConverter::to_array(value))
    }

    /// Split a delimited string, optionally keeping only first occurrences
    #[must_use]
    pub fn from_string(text: &str, separator: &str, remove_duplicates: bool) -> Self {
        let mut result = Self::new();
        if text.is_empty() || separator.is_empty() {
            if !text.is_empty() {
                result.values.push(Value::from(text));
            }
            return result;
        }
        for item in text.split(separator) {
            let item = Value::from(item);
            if remove_duplicates && result.values.contains(&item) {
                continue;
            }
            result.values.push(item);
        }
        result
    }

    fn get_raw(&self, index: usize) -> Value {
        self.get(index)
    }

    /// Element at `index`, or `Null`
    #[must_use]
    pub fn get(&self, index: usize) -> Value {
        self.values.get(index).cloned().unwrap_or_default()
    }

    /// Set element at `index`, padding with `Null` past the end
    ///
    /// Returns `false` when `index` lies more than [`MAX_INDEX_GAP`] past the
    /// end; the array is then left unchanged.
    pub fn put(&mut self, index: usize, value: impl Into<Value>) -> bool {
        ObjectWriter::set_element(&mut self.values, index, value.into())
    }

    /// Remove and return the element at `index`
    pub fn remove(&mut self, index: usize) -> Option<Value> {
        (index < self.values.len()).then(|| self.values.remove(index))
    }

    /// Insert at `index`, appending when past the end
    pub fn insert(&mut self, index: usize, value: impl Into<Value>) {
        let index = index.min(self.values.len());
        self.values.insert(index, value.into());
    }

    /// Append several values
    pub fn append(&mut self, values: impl IntoIterator<Item = Value>) {
        self.values.extend(values);
    }

    /// Append one value
    pub fn push(&mut self, value: impl Into<Value>) {
        self.values.push(value.into());
    }

    /// Remove every element
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// All elements as a [`Value::Array`]
    #[must_use]
    pub fn get_as_object(&self) -> Value {
        Value::Array(self.values.clone())
    }

    /// Replace all elements with the array form of `value`
    pub fn set_as_object(&mut self, value: &Value) {
        self.values = ArrayConverter::to_array(value);
    }

    typed_accessors!(index: usize);

    /// Check for an element with the same string form
    #[must_use]
    pub fn contains(&self, value: &Value) -> bool {
        let wanted = StringConverter::to_nullable_string(value);
        self.values
            .iter()
            .any(|item| StringConverter::to_nullable_string(item) == wanted)
    }

    /// Check for an element equal after converting both sides to `type_code`
    #[must_use]
    pub fn contains_as_type(&self, type_code: TypeCode, value: &Value) -> bool {
        let wanted = TypeConverter::to_nullable_type(type_code, value);
        self.values
            .iter()
            .any(|item| TypeConverter::to_nullable_type(type_code, item) == wanted)
    }

    /// Number of elements
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check for no elements
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the elements
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    /// Borrow the elements
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }
}

impl Display for AnyValueArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let text = self
            .values
            .iter()
            .map(StringConverter::to_string)
            .collect::<Vec<_>>()
            .join(",");
        f.write_str(&text)
    }
}

impl From<Vec<Value>> for AnyValueArray {
    fn from(values: Vec<Value>) -> Self {
        Self::from_values(values)
    }
}

impl From<AnyValueArray> for Value {
    fn from(array: AnyValueArray) -> Self {
        Value::Array(array.values)
    }
}

impl FromIterator<Value> for AnyValueArray {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::from_values(iter.into_iter().collect())
    }
}

impl IntoIterator for AnyValueArray {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a AnyValueArray {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
