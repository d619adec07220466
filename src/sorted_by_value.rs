//! A sequence of key-value pairs sorted by value.

use crate::iter::{IntoIter, Iter, Keys, Values};
use crate::json::{self, Style};
use crate::pair::{self, Pair};
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Index;

/// A sequence of key-value pairs sorted by value, in ascending or descending order.
///
/// The sequence is built from a map in one step and has no incremental insertion. An ascending
/// sort is stable, so pairs with equal values keep their original relative order. A descending
/// sort is the ascending sort followed by reversing the whole sequence, so pairs with equal values
/// end up in the opposite of their original relative order.
///
/// Values must be totally ordered. Wrap `f32` or `f64` values in `TotalOrd` to sort by them.
///
/// # Examples
///
/// ```
/// use sortedmap::SortedByValue;
///
/// let counts = vec![("x", 5), ("y", 3), ("z", 5)];
///
/// let ascending = SortedByValue::from_map(counts.clone(), true);
/// assert_eq!(ascending.keys().collect::<Vec<_>>(), [&"y", &"x", &"z"]);
///
/// let descending = SortedByValue::from_map(counts, false);
/// assert_eq!(descending.keys().collect::<Vec<_>>(), [&"z", &"x", &"y"]);
/// assert_eq!(descending.to_json().unwrap(), r#"{"z":5,"x":5,"y":3}"#);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SortedByValue<K, V> {
    pairs: Vec<Pair<K, V>>,
}

impl<K, V> SortedByValue<K, V>
where
    V: Ord,
{
    /// Constructs a `SortedByValue<K, V>` from every entry of `map` and sorts it by value.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortedmap::SortedByValue;
    /// use std::collections::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.insert("a", "e");
    /// map.insert("c", "c");
    /// map.insert("e", "a");
    ///
    /// let sorted = SortedByValue::from_map(map, true);
    /// assert_eq!(sorted.values().collect::<Vec<_>>(), [&"a", &"c", &"e"]);
    /// assert_eq!(sorted.keys().collect::<Vec<_>>(), [&"e", &"c", &"a"]);
    /// ```
    pub fn from_map<M>(map: M, ascending: bool) -> Self
    where
        M: IntoIterator<Item = (K, V)>,
    {
        let mut ret = SortedByValue {
            pairs: map.into_iter().map(Pair::from).collect(),
        };
        trace!("snapshotted {} pairs", ret.len());
        ret.sort(ascending);
        ret
    }

    /// Sorts the sequence in place by value.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortedmap::SortedByValue;
    ///
    /// let mut sorted = SortedByValue::from_map(vec![("a", 1), ("b", 2), ("c", 1)], true);
    /// assert_eq!(sorted.keys().collect::<Vec<_>>(), [&"a", &"c", &"b"]);
    ///
    /// sorted.sort(false);
    /// assert_eq!(sorted.keys().collect::<Vec<_>>(), [&"b", &"c", &"a"]);
    /// ```
    pub fn sort(&mut self, ascending: bool) {
        trace!(
            "sorting {} pairs by value ({})",
            self.pairs.len(),
            if ascending { "ascending" } else { "descending" }
        );
        // stable ascending first, then a full reversal for descending
        self.pairs.sort_by(|a, b| a.value.cmp(&b.value));
        if !ascending {
            self.pairs.reverse();
        }
    }
}

impl<K, V> SortedByValue<K, V> {
    /// Returns the number of pairs in the sequence.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if the sequence contains no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns an iterator over the pairs of the sequence in their current order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.pairs.iter(),
        }
    }

    /// Returns an iterator over the keys of the sequence in their current order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys {
            inner: self.pairs.iter(),
        }
    }

    /// Returns an iterator over the values of the sequence in their current order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values {
            inner: self.pairs.iter(),
        }
    }

    /// Returns the pairs of the sequence as a slice in their current order.
    pub fn as_slice(&self) -> &[Pair<K, V>] {
        &self.pairs
    }

    /// Consumes the sequence and returns its pairs in their current order.
    pub fn into_pairs(self) -> Vec<Pair<K, V>> {
        self.pairs
    }
}

impl<K, V> SortedByValue<K, V>
where
    K: Serialize,
    V: Serialize,
{
    /// Encodes the sequence as a compact JSON object with members in the current order.
    pub fn to_json(&self) -> json::Result<String> {
        json::to_string(self)
    }

    /// Encodes the sequence as a JSON object indented by two spaces.
    pub fn to_json_pretty(&self) -> json::Result<String> {
        json::to_string_pretty(self)
    }

    /// Encodes the sequence as a JSON object laid out according to `style`.
    pub fn to_json_with(&self, style: Style) -> json::Result<String> {
        json::to_string_with(self, style)
    }
}

impl<K, V> Serialize for SortedByValue<K, V>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        json::serialize_pairs(&self.pairs, serializer)
    }
}

impl<K, V> fmt::Display for SortedByValue<K, V>
where
    K: fmt::Debug,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        pair::fmt_pairs(&self.pairs, f)
    }
}

impl<K, V> Index<usize> for SortedByValue<K, V> {
    type Output = Pair<K, V>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.pairs[index]
    }
}

impl<K, V> IntoIterator for SortedByValue<K, V> {
    type IntoIter = IntoIter<K, V>;
    type Item = (K, V);

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.pairs.into_iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a SortedByValue<K, V>
where
    K: 'a,
    V: 'a,
{
    type IntoIter = Iter<'a, K, V>;
    type Item = &'a Pair<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
