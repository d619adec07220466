//! A sequence of key-value pairs sorted by key.

use crate::iter::{IntoIter, Iter, Keys, Values};
use crate::json::{self, Style};
use crate::pair::{self, Pair};
use serde::{Serialize, Serializer};
use std::fmt;
use std::iter::FromIterator;
use std::ops::Index;

/// A sequence of key-value pairs that can be sorted by key.
///
/// Pairs are kept in insertion order until `sort` is called, after which they are in ascending
/// key order. The sort is stable, so pairs with equal keys keep their relative order. The map
/// never deduplicates keys and never reorders itself implicitly: the current order is the order
/// that is iterated, displayed and encoded as JSON.
///
/// # Examples
///
/// ```
/// use sortedmap::SortedMap;
///
/// let mut map = SortedMap::new()
///     .add("e", 5)
///     .add("d", 4)
///     .add("a", 1);
/// assert_eq!(map.to_json().unwrap(), r#"{"e":5,"d":4,"a":1}"#);
///
/// map.sort();
/// assert_eq!(map.keys().collect::<Vec<_>>(), [&"a", &"d", &"e"]);
/// assert_eq!(map.values().collect::<Vec<_>>(), [&1, &4, &5]);
/// assert_eq!(map.to_json().unwrap(), r#"{"a":1,"d":4,"e":5}"#);
/// assert_eq!(map.to_string(), r#"["a": 1 "d": 4 "e": 5]"#);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SortedMap<K, V> {
    pairs: Vec<Pair<K, V>>,
}

impl<K, V> SortedMap<K, V> {
    /// Constructs a new, empty `SortedMap<K, V>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortedmap::SortedMap;
    ///
    /// let map: SortedMap<String, u32> = SortedMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> Self {
        SortedMap { pairs: Vec::new() }
    }

    /// Constructs a new, empty `SortedMap<K, V>` with room for `capacity` pairs.
    pub fn with_capacity(capacity: usize) -> Self {
        SortedMap {
            pairs: Vec::with_capacity(capacity),
        }
    }

    /// Appends a pair to the end of the map and returns the map. The map is not sorted and
    /// duplicate keys are not checked, so call `sort` once all pairs are added.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortedmap::SortedMap;
    ///
    /// let mut map = SortedMap::new();
    /// map = map.add("b", 2);
    /// map = map.add("a", 1).add("a", 0);
    /// assert_eq!(map.keys().collect::<Vec<_>>(), [&"b", &"a", &"a"]);
    /// ```
    pub fn add(mut self, key: K, value: V) -> Self {
        self.pairs.push(Pair { key, value });
        self
    }

    /// Returns the number of pairs in the map.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if the map contains no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns an iterator over the pairs of the map in their current order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortedmap::{Pair, SortedMap};
    ///
    /// let map = SortedMap::new().add(2, "b").add(1, "a");
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some(&Pair::new(2, "b")));
    /// assert_eq!(iterator.next(), Some(&Pair::new(1, "a")));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.pairs.iter(),
        }
    }

    /// Returns an iterator over the keys of the map in their current order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys {
            inner: self.pairs.iter(),
        }
    }

    /// Returns an iterator over the values of the map in their current order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values {
            inner: self.pairs.iter(),
        }
    }

    /// Returns the pairs of the map as a slice in their current order.
    pub fn as_slice(&self) -> &[Pair<K, V>] {
        &self.pairs
    }

    /// Consumes the map and returns its pairs in their current order.
    pub fn into_pairs(self) -> Vec<Pair<K, V>> {
        self.pairs
    }
}

impl<K, V> SortedMap<K, V>
where
    K: Ord,
{
    /// Constructs a `SortedMap<K, V>` from every entry of `map` and sorts it by key.
    ///
    /// Any collection of key-value tuples is accepted, such as a `HashMap` or a `BTreeMap`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortedmap::SortedMap;
    /// use std::collections::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.insert(5, "a");
    /// map.insert(1, "e");
    /// map.insert(3, "c");
    ///
    /// let sorted = SortedMap::from_map(map);
    /// assert_eq!(sorted.keys().collect::<Vec<_>>(), [&1, &3, &5]);
    /// ```
    pub fn from_map<M>(map: M) -> Self
    where
        M: IntoIterator<Item = (K, V)>,
    {
        let mut ret: Self = map.into_iter().collect();
        trace!("snapshotted {} pairs", ret.len());
        ret.sort();
        ret
    }

    /// Sorts the map in place by ascending key. Pairs with equal keys keep their relative order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortedmap::SortedMap;
    ///
    /// let mut map = SortedMap::new().add("b", 1).add("a", 2).add("b", 0);
    /// map.sort();
    /// assert_eq!(map.values().collect::<Vec<_>>(), [&2, &1, &0]);
    /// ```
    pub fn sort(&mut self) {
        trace!("sorting {} pairs by key", self.pairs.len());
        self.pairs.sort_by(|a, b| a.key.cmp(&b.key));
    }
}

impl<K, V> SortedMap<K, V>
where
    K: Serialize,
    V: Serialize,
{
    /// Encodes the map as a compact JSON object with members in the map's current order.
    pub fn to_json(&self) -> json::Result<String> {
        json::to_string(self)
    }

    /// Encodes the map as a JSON object indented by two spaces.
    pub fn to_json_pretty(&self) -> json::Result<String> {
        json::to_string_pretty(self)
    }

    /// Encodes the map as a JSON object laid out according to `style`.
    pub fn to_json_with(&self, style: Style) -> json::Result<String> {
        json::to_string_with(self, style)
    }
}

impl<K, V> Default for SortedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Serialize for SortedMap<K, V>
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

impl<K, V> fmt::Display for SortedMap<K, V>
where
    K: fmt::Debug,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        pair::fmt_pairs(&self.pairs, f)
    }
}

impl<K, V> FromIterator<(K, V)> for SortedMap<K, V> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        SortedMap {
            pairs: iter.into_iter().map(Pair::from).collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for SortedMap<K, V> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.pairs.extend(iter.into_iter().map(Pair::from));
    }
}

impl<K, V> Index<usize> for SortedMap<K, V> {
    type Output = Pair<K, V>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.pairs[index]
    }
}

impl<K, V> IntoIterator for SortedMap<K, V> {
    type IntoIter = IntoIter<K, V>;
    type Item = (K, V);

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.pairs.into_iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a SortedMap<K, V>
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

#[cfg(test)]
mod tests {
    use super::SortedMap;
    use crate::Pair;
    use serde_json::{json, Value};
    use serde_test::{assert_ser_tokens, Token};
    use std::collections::{BTreeMap, HashMap};

    fn get_mixed_map() -> HashMap<&'static str, Value> {
        let mut map = HashMap::new();
        map.insert("a", json!(1));
        map.insert("b", json!(2.0));
        map.insert("c", json!(true));
        map.insert("d", json!("four"));
        map.insert("e", Value::Null);
        map
    }

    #[test]
    fn test_len_empty() {
        let map: SortedMap<u32, u32> = SortedMap::new();
        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
        assert_eq!(map.keys().next(), None);
        assert_eq!(map.values().next(), None);
    }

    #[test]
    fn test_from_map() {
        let map = SortedMap::from_map(get_mixed_map());
        assert_eq!(map.len(), 5);
        assert_eq!(map.keys().collect::<Vec<_>>(), [&"a", &"b", &"c", &"d", &"e"]);
    }

    #[test]
    fn test_from_map_integer_keys() {
        let mut map = HashMap::new();
        for (key, value) in vec![(5, "a"), (4, "b"), (3, "c"), (2, "d"), (1, "e")] {
            map.insert(key, value);
        }
        let map = SortedMap::from_map(map);
        assert_eq!(map.keys().cloned().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
        assert_eq!(map.values().cloned().collect::<Vec<_>>(), ["e", "d", "c", "b", "a"]);
    }

    #[test]
    fn test_from_map_numeric_order() {
        let map = SortedMap::from_map(vec![(10, ()), (9, ()), (100, ())]);
        assert_eq!(map.keys().cloned().collect::<Vec<_>>(), [9, 10, 100]);
    }

    #[test]
    fn test_from_map_lexicographic_order() {
        let map = SortedMap::from_map(vec![("10", ()), ("9", ()), ("100", ())]);
        assert_eq!(map.keys().cloned().collect::<Vec<_>>(), ["10", "100", "9"]);
    }

    #[test]
    fn test_add_then_sort() {
        let mut map = SortedMap::new()
            .add("e", Value::Null)
            .add("d", json!("four"))
            .add("c", json!(true))
            .add("b", json!(2.0))
            .add("a", json!(1));
        assert_eq!(map.keys().collect::<Vec<_>>(), [&"e", &"d", &"c", &"b", &"a"]);

        map.sort();
        assert_eq!(map.keys().collect::<Vec<_>>(), [&"a", &"b", &"c", &"d", &"e"]);
        assert_eq!(map, SortedMap::from_map(get_mixed_map()));
    }

    #[test]
    fn test_sort_duplicate_keys_is_stable() {
        let mut map = SortedMap::new()
            .add("k", 1)
            .add("a", 0)
            .add("k", 2)
            .add("b", 0)
            .add("k", 3);
        map.sort();
        assert_eq!(
            map.into_pairs(),
            vec![
                Pair::new("a", 0),
                Pair::new("b", 0),
                Pair::new("k", 1),
                Pair::new("k", 2),
                Pair::new("k", 3),
            ],
        );
    }

    #[test]
    fn test_sort_idempotent() {
        let mut map = SortedMap::new().add(3, 'c').add(1, 'a').add(3, 'd').add(2, 'b');
        map.sort();
        let sorted = map.clone();
        map.sort();
        assert_eq!(map, sorted);
    }

    #[test]
    fn test_extend_and_collect() {
        let mut map: SortedMap<_, _> = vec![("b", 2), ("a", 1)].into_iter().collect();
        map.extend(vec![("c", 3), ("a", 0)]);
        assert_eq!(map.keys().collect::<Vec<_>>(), [&"b", &"a", &"c", &"a"]);
        assert_eq!(map[2], Pair::new("c", 3));
    }

    #[test]
    fn test_into_iter() {
        let map = SortedMap::from_map(vec![(2, "b"), (1, "a")]);
        assert_eq!(map.clone().into_iter().collect::<Vec<_>>(), [(1, "a"), (2, "b")]);
        assert_eq!(
            (&map).into_iter().map(|pair| pair.key).collect::<Vec<_>>(),
            [1, 2],
        );
        assert_eq!(map.iter().rev().map(|pair| pair.value).collect::<Vec<_>>(), ["b", "a"]);
    }

    #[test]
    fn test_to_json() {
        let map = SortedMap::new()
            .add("a", json!(1))
            .add("b", json!(2))
            .add("c", json!(true))
            .add("d", json!("four"))
            .add("e", Value::Null);
        assert_eq!(
            map.to_json().unwrap(),
            r#"{"a":1,"b":2,"c":true,"d":"four","e":null}"#,
        );
    }

    #[test]
    fn test_to_json_map_of_maps() {
        let inner = SortedMap::from_map(vec![("b", 2), ("a", 1)]);
        let mut outer = HashMap::new();
        outer.insert("Z", Some(inner));
        outer.insert("A", None);

        let outer = SortedMap::from_map(outer);
        assert_eq!(outer.to_json().unwrap(), r#"{"A":null,"Z":{"a":1,"b":2}}"#);
        assert_eq!(
            outer.to_json_pretty().unwrap(),
            "{\n  \"A\": null,\n  \"Z\": {\n    \"a\": 1,\n    \"b\": 2\n  }\n}",
        );
    }

    #[test]
    fn test_to_json_ignores_native_map_order() {
        let mut btree = BTreeMap::new();
        btree.insert("a", 1);
        btree.insert("b", 2);
        let map: SortedMap<_, _> = btree.into_iter().rev().collect();
        assert_eq!(map.to_json().unwrap(), r#"{"b":2,"a":1}"#);
    }

    #[test]
    fn test_ser_tokens() {
        let map = SortedMap::new().add("b", 2).add("a", 1);
        assert_ser_tokens(
            &map,
            &[
                Token::Map { len: Some(2) },
                Token::Str("b"),
                Token::I32(2),
                Token::Str("a"),
                Token::I32(1),
                Token::MapEnd,
            ],
        );
    }

    #[test]
    fn test_ser_tokens_integer_keys() {
        let map = SortedMap::new().add(10u8, ()).add(2u8, ());
        assert_ser_tokens(
            &map,
            &[
                Token::Map { len: Some(2) },
                Token::Str("10"),
                Token::Unit,
                Token::Str("2"),
                Token::Unit,
                Token::MapEnd,
            ],
        );
    }

    #[test]
    fn test_display() {
        let map = SortedMap::from_map(vec![(2, "two"), (1, "one")]);
        assert_eq!(map.to_string(), "[1: one 2: two]");

        let map = SortedMap::from_map(get_mixed_map());
        assert_eq!(
            map.to_string(),
            r#"["a": 1 "b": 2.0 "c": true "d": "four" "e": null]"#,
        );

        let map: SortedMap<u32, u32> = SortedMap::new();
        assert_eq!(map.to_string(), "[]");
    }
}
