//! A total order for floating point values.

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// A floating point value ordered by `total_cmp`, so that it can be used as the value of a
/// `SortedByValue` or the key of a `SortedMap`.
///
/// Negative NaN sorts before every other value and positive NaN after, `-0.0` sorts before `0.0`,
/// and two values are equal only if they have the same bits. The wrapper serializes and displays
/// as the inner float.
///
/// # Examples
///
/// ```
/// use sortedmap::{SortedByValue, TotalOrd};
///
/// let scores = vec![("a", 0.5), ("b", 2.0), ("c", 0.5)];
/// let sorted = SortedByValue::from_map(
///     scores.into_iter().map(|(key, score)| (key, TotalOrd(score))),
///     false,
/// );
/// assert_eq!(sorted.keys().collect::<Vec<_>>(), [&"b", &"c", &"a"]);
/// assert_eq!(sorted.to_json().unwrap(), r#"{"b":2.0,"c":0.5,"a":0.5}"#);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct TotalOrd<F>(pub F);

macro_rules! impl_total_ord {
    ($($float:ty,)*) => {
        $(
            impl PartialEq for TotalOrd<$float> {
                fn eq(&self, other: &Self) -> bool {
                    self.cmp(other) == Ordering::Equal
                }
            }

            impl Eq for TotalOrd<$float> {}

            impl PartialOrd for TotalOrd<$float> {
                fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                    Some(self.cmp(other))
                }
            }

            impl Ord for TotalOrd<$float> {
                fn cmp(&self, other: &Self) -> Ordering {
                    self.0.total_cmp(&other.0)
                }
            }
        )*
    }
}

impl_total_ord!(f32, f64,);

impl<F> Serialize for TotalOrd<F>
where
    F: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<F> fmt::Display for TotalOrd<F>
where
    F: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
