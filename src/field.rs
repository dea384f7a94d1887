//! Typed field accessors over generic JSON nodes.
//!
//! Every entity parser is assembled from the helpers in this module. They
//! share one contract: an absent key is silently `None`, a present key with a
//! bad value records a [Problem] and is `None`, anything else is `Some`.
//!
//! Accessors take the diagnostic `path` of the field rather than the bare key.
//! The key looked up is the last `/` separated segment, so `"isoSpeed"` and
//! `"frequency/num"` both work.

use num_traits::FromPrimitive;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::{Diagnostics, Problem};

/// JSON object node.
pub type Object = Map<String, Value>;

/// `urn:uuid:` followed by a lowercase 8-4-4-4-12 hex UUID.
pub static URN_UUID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^urn:uuid:[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$").unwrap()
});

/// Three dot separated decimal components.
pub static SEMVER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+$").unwrap());

/// Six colon separated uppercase hex octets.
pub static MAC_ADDRESS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-F0-9]{2}:){5}[A-F0-9]{2}$").unwrap());

/// A scalar that can be extracted from a JSON node.
pub trait FieldType: Sized {
    /// Type name used in diagnostics.
    const NAME: &'static str;

    fn from_value(value: &Value) -> Option<Self>;
}

impl FieldType for String {
    const NAME: &'static str = "string";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl FieldType for bool {
    const NAME: &'static str = "boolean";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FieldType for f64 {
    const NAME: &'static str = "double";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

macro_rules! impl_integer {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl FieldType for $ty {
                const NAME: &'static str = $name;

                // Only integral JSON numbers are accepted, floats like 3.0 are not.
                fn from_value(value: &Value) -> Option<Self> {
                    let Value::Number(number) = value else {
                        return None;
                    };

                    match number.as_u64() {
                        Some(unsigned) => <$ty>::from_u64(unsigned),
                        None => number.as_i64().and_then(<$ty>::from_i64),
                    }
                }
            }
        )*
    };
}

impl_integer!(
    u8 => "uint8",
    u16 => "uint16",
    u32 => "uint32",
    u64 => "uint64",
    i64 => "int64",
);

/// How [collect_array] treats an element that fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayPolicy {
    /// One bad element invalidates the whole array.
    Abort,
    /// Bad elements are reported and dropped, the rest is kept.
    Skip,
}

#[inline]
fn key(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Decode a single node as `T`, without any diagnostics.
#[inline]
pub fn element<T: FieldType>(value: &Value) -> Result<T, Problem> {
    T::from_value(value).ok_or(Problem::Type(T::NAME))
}

/// Extract an optional scalar field.
pub fn get<T: FieldType>(object: &Object, path: &str, diags: &mut Diagnostics) -> Option<T> {
    let value = object.get(key(path))?;

    match T::from_value(value) {
        Some(value) => Some(value),
        None => {
            diags.push(path, Problem::Type(T::NAME));
            None
        }
    }
}

/// Extract an optional string field that must fully match `pattern`.
///
/// A mismatching string is reported and dropped, never returned.
pub fn get_matching(object: &Object, path: &str, pattern: &Regex, diags: &mut Diagnostics) -> Option<String> {
    let value = get::<String>(object, path, diags)?;

    if pattern.is_match(&value) {
        Some(value)
    } else {
        diags.push(path, Problem::Pattern);
        None
    }
}

/// Extract an optional homogeneous array field, a single bad element drops it.
pub fn get_array<T: FieldType>(object: &Object, path: &str, diags: &mut Diagnostics) -> Option<Vec<T>> {
    let value = object.get(key(path))?;

    let Some(array) = value.as_array() else {
        diags.push(path, Problem::Type("array"));
        return None;
    };

    collect_array(array, path, ArrayPolicy::Abort, diags, element::<T>)
}

/// Extract an optional field with a dedicated value parser.
pub fn get_with<T, F>(object: &Object, path: &str, diags: &mut Diagnostics, parse: F) -> Option<T>
where
    F: FnOnce(&Value, &str, &mut Diagnostics) -> Option<T>,
{
    let value = object.get(key(path))?;
    parse(value, path, diags)
}

/// Check that every key in `keys` is present, reporting one aggregate problem otherwise.
pub fn require(object: &Object, path: &str, keys: &[&str], diags: &mut Diagnostics) -> bool {
    let complete = keys.iter().all(|key| object.contains_key(*key));
    if !complete {
        diags.push(path, Problem::MissingFields);
    }
    complete
}

/// Extract an optional nested object.
pub fn get_object<'a>(object: &'a Object, path: &str, diags: &mut Diagnostics) -> Option<&'a Object> {
    let value = object.get(key(path))?;
    as_object(value, path, diags)
}

/// Require `value` to be an object, reporting it otherwise.
pub fn as_object<'a>(value: &'a Value, path: &str, diags: &mut Diagnostics) -> Option<&'a Object> {
    let object = value.as_object();
    if object.is_none() {
        diags.push(path, Problem::Type("object"));
    }
    object
}

/// Decode each array element with `decode`, applying `policy` to failures.
///
/// Element problems are reported at `<path>/element`. With
/// [ArrayPolicy::Abort] only the first failure is reported.
pub fn collect_array<T, F>(
    array: &[Value],
    path: &str,
    policy: ArrayPolicy,
    diags: &mut Diagnostics,
    mut decode: F,
) -> Option<Vec<T>>
where
    F: FnMut(&Value) -> Result<T, Problem>,
{
    let mut items = Vec::with_capacity(array.len());

    for value in array {
        match decode(value) {
            Ok(item) => items.push(item),
            Err(problem) => {
                diags.push(format!("{path}/element"), problem);
                if policy == ArrayPolicy::Abort {
                    return None;
                }
            }
        }
    }

    Some(items)
}
