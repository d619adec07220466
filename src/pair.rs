use std::fmt;

/// A single key-value entry of a sorted sequence.
///
/// Pairs are compared structurally. The sequences never reorder pairs through this type's own
/// ordering: a `SortedMap` compares keys and a `SortedByValue` compares values.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Serialize)]
pub struct Pair<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Pair<K, V> {
    /// Constructs a new `Pair<K, V>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortedmap::Pair;
    ///
    /// let pair = Pair::new("a", 1);
    /// assert_eq!(pair.key, "a");
    /// assert_eq!(pair.value, 1);
    /// ```
    pub fn new(key: K, value: V) -> Self {
        Pair { key, value }
    }

    /// Converts the pair into a `(key, value)` tuple.
    pub fn into_tuple(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Pair<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Pair { key, value }
    }
}

/// Text keys are quoted and other keys are printed as is, so `"a": 1` and `1: a`.
///
/// Values are printed with their own `Display`. A `serde_json::Value` displays as JSON, so a
/// string value keeps its quotes and a float keeps its fraction: `"d": "four"` and `"b": 2.0`.
impl<K, V> fmt::Display for Pair<K, V>
where
    K: fmt::Debug,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}: {}", self.key, self.value)
    }
}

/// Writes pairs as `[pair pair ...]`, the format shared by both sequence types.
pub(crate) fn fmt_pairs<K, V>(pairs: &[Pair<K, V>], f: &mut fmt::Formatter) -> fmt::Result
where
    K: fmt::Debug,
    V: fmt::Display,
{
    write!(f, "[")?;
    for (index, pair) in pairs.iter().enumerate() {
        if index > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", pair)?;
    }
    write!(f, "]")
}
