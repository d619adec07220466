//! Order-preserving JSON object encoding.
//!
//! Both sequence types implement `Serialize` by writing a map whose entries appear in container
//! order, so they can be encoded by any serde data format and nested inside other serializable
//! values. The functions in this module produce JSON text through `serde_json`.
//!
//! JSON object keys are always strings. Keys that serialize to a number or a boolean are written
//! in their JSON text form (`1` becomes `"1"`), and keys without a scalar form are rejected.

use crate::pair::Pair;
use serde::ser::{self, Impossible, Serialize, SerializeMap, Serializer};
use serde_json::ser::PrettyFormatter;
use serde_json::Number;
use std::error;
use std::fmt;
use std::result;

#[derive(Debug)]
pub enum Error {
    SerdeError(serde_json::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::SerdeError(err)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::SerdeError(error) => Some(error),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::SerdeError(error) => write!(f, "{}", error),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

/// The layout of encoded JSON text. Member order is the same for every style.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Style {
    /// No whitespace between tokens.
    Compact,
    /// One member per line, nested levels indented by `indent` spaces.
    Pretty { indent: usize },
}

impl Style {
    /// Pretty output with an indent of two spaces.
    pub fn pretty() -> Self {
        Style::Pretty { indent: 2 }
    }
}

impl Default for Style {
    fn default() -> Self {
        Style::Compact
    }
}

/// Serializes a key as a JSON object key.
struct ObjectKey<'a, K>(&'a K);

impl<'a, K> Serialize for ObjectKey<'a, K>
where
    K: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let key = self
            .0
            .serialize(KeySerializer)
            .map_err(<S::Error as ser::Error>::custom)?;
        serializer.serialize_str(&key)
    }
}

fn unsupported_key<T>(which: &str) -> result::Result<T, serde_json::Error> {
    Err(ser::Error::custom(format!("object key must not be {}", which)))
}

/// Converts a scalar key into the text of its JSON object key.
struct KeySerializer;

impl Serializer for KeySerializer {
    type Ok = String;
    type Error = serde_json::Error;
    type SerializeSeq = Impossible<String, serde_json::Error>;
    type SerializeTuple = Impossible<String, serde_json::Error>;
    type SerializeTupleStruct = Impossible<String, serde_json::Error>;
    type SerializeTupleVariant = Impossible<String, serde_json::Error>;
    type SerializeMap = Impossible<String, serde_json::Error>;
    type SerializeStruct = Impossible<String, serde_json::Error>;
    type SerializeStructVariant = Impossible<String, serde_json::Error>;

    fn serialize_bool(self, v: bool) -> result::Result<String, serde_json::Error> {
        Ok(String::from(if v { "true" } else { "false" }))
    }

    fn serialize_i8(self, v: i8) -> result::Result<String, serde_json::Error> {
        Ok(v.to_string())
    }

    fn serialize_i16(self, v: i16) -> result::Result<String, serde_json::Error> {
        Ok(v.to_string())
    }

    fn serialize_i32(self, v: i32) -> result::Result<String, serde_json::Error> {
        Ok(v.to_string())
    }

    fn serialize_i64(self, v: i64) -> result::Result<String, serde_json::Error> {
        Ok(v.to_string())
    }

    fn serialize_i128(self, v: i128) -> result::Result<String, serde_json::Error> {
        Ok(v.to_string())
    }

    fn serialize_u8(self, v: u8) -> result::Result<String, serde_json::Error> {
        Ok(v.to_string())
    }

    fn serialize_u16(self, v: u16) -> result::Result<String, serde_json::Error> {
        Ok(v.to_string())
    }

    fn serialize_u32(self, v: u32) -> result::Result<String, serde_json::Error> {
        Ok(v.to_string())
    }

    fn serialize_u64(self, v: u64) -> result::Result<String, serde_json::Error> {
        Ok(v.to_string())
    }

    fn serialize_u128(self, v: u128) -> result::Result<String, serde_json::Error> {
        Ok(v.to_string())
    }

    fn serialize_f32(self, v: f32) -> result::Result<String, serde_json::Error> {
        self.serialize_f64(f64::from(v))
    }

    // same text as a JSON number, so `2.0` stays `2.0`
    fn serialize_f64(self, v: f64) -> result::Result<String, serde_json::Error> {
        match Number::from_f64(v) {
            Some(number) => Ok(number.to_string()),
            None => unsupported_key("a non-finite float"),
        }
    }

    fn serialize_char(self, v: char) -> result::Result<String, serde_json::Error> {
        Ok(v.to_string())
    }

    fn serialize_str(self, v: &str) -> result::Result<String, serde_json::Error> {
        Ok(String::from(v))
    }

    fn serialize_bytes(self, _v: &[u8]) -> result::Result<String, serde_json::Error> {
        unsupported_key("bytes")
    }

    fn serialize_none(self) -> result::Result<String, serde_json::Error> {
        unsupported_key("null")
    }

    fn serialize_some<T>(self, value: &T) -> result::Result<String, serde_json::Error>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> result::Result<String, serde_json::Error> {
        unsupported_key("null")
    }

    fn serialize_unit_struct(
        self,
        _name: &'static str,
    ) -> result::Result<String, serde_json::Error> {
        unsupported_key("null")
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> result::Result<String, serde_json::Error> {
        Ok(String::from(variant))
    }

    fn serialize_newtype_struct<T>(
        self,
        _name: &'static str,
        value: &T,
    ) -> result::Result<String, serde_json::Error>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> result::Result<String, serde_json::Error>
    where
        T: ?Sized + Serialize,
    {
        unsupported_key("an object")
    }

    fn serialize_seq(
        self,
        _len: Option<usize>,
    ) -> result::Result<Self::SerializeSeq, serde_json::Error> {
        unsupported_key("an array")
    }

    fn serialize_tuple(
        self,
        _len: usize,
    ) -> result::Result<Self::SerializeTuple, serde_json::Error> {
        unsupported_key("an array")
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> result::Result<Self::SerializeTupleStruct, serde_json::Error> {
        unsupported_key("an array")
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> result::Result<Self::SerializeTupleVariant, serde_json::Error> {
        unsupported_key("an object")
    }

    fn serialize_map(
        self,
        _len: Option<usize>,
    ) -> result::Result<Self::SerializeMap, serde_json::Error> {
        unsupported_key("an object")
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> result::Result<Self::SerializeStruct, serde_json::Error> {
        unsupported_key("an object")
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> result::Result<Self::SerializeStructVariant, serde_json::Error> {
        unsupported_key("an object")
    }
}

/// Writes `pairs` as a map in slice order.
pub(crate) fn serialize_pairs<K, V, S>(
    pairs: &[Pair<K, V>],
    serializer: S,
) -> result::Result<S::Ok, S::Error>
where
    K: Serialize,
    V: Serialize,
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(pairs.len()))?;
    for pair in pairs {
        map.serialize_entry(&ObjectKey(&pair.key), &pair.value)?;
    }
    map.end()
}

/// Encodes `value` as JSON bytes laid out according to `style`.
///
/// Nothing is returned on failure; a partially written buffer is discarded.
///
/// # Examples
///
/// ```
/// use sortedmap::json::{self, Style};
/// use sortedmap::SortedMap;
///
/// let map = SortedMap::new().add("b", 2).add("a", 1);
/// assert_eq!(json::to_vec_with(&map, Style::Compact).unwrap(), br#"{"b":2,"a":1}"#.to_vec());
/// ```
pub fn to_vec_with<T>(value: &T, style: Style) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    let mut bytes = Vec::with_capacity(128);
    let res = match style {
        Style::Compact => value.serialize(&mut serde_json::Serializer::new(&mut bytes)),
        Style::Pretty { indent } => {
            let indent = vec![b' '; indent];
            let formatter = PrettyFormatter::with_indent(&indent);
            let mut serializer = serde_json::Serializer::with_formatter(&mut bytes, formatter);
            value.serialize(&mut serializer)
        },
    };

    match res {
        Ok(()) => Ok(bytes),
        Err(err) => {
            debug!("failed to encode json object: {}", err);
            Err(Error::from(err))
        },
    }
}

/// Encodes `value` as a JSON string laid out according to `style`.
///
/// # Examples
///
/// ```
/// use sortedmap::json::{self, Style};
/// use sortedmap::SortedMap;
///
/// let map = SortedMap::new().add("a", 1).add("b", 2);
/// assert_eq!(
///     json::to_string_with(&map, Style::Pretty { indent: 4 }).unwrap(),
///     "{\n    \"a\": 1,\n    \"b\": 2\n}",
/// );
/// ```
pub fn to_string_with<T>(value: &T, style: Style) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let bytes = to_vec_with(value, style)?;
    String::from_utf8(bytes)
        .map_err(|err| Error::from(<serde_json::Error as ser::Error>::custom(err)))
}

/// Encodes `value` as compact JSON text.
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with(value, Style::Compact)
}

/// Encodes `value` as JSON text indented by two spaces.
pub fn to_string_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with(value, Style::pretty())
}
