use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::group::Group;

/// Flat numeric array interpreted as consecutive tuples of a fixed width.
///
/// A width of 3 holds points, a width of 4 holds angle+axis rotations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tuple<T> {
    values: Arc<[T]>,
    tuple_size: usize,
}

impl<T: Copy> Tuple<T> {
    /// Wraps `values` as tuples of `tuple_size` elements. A width of zero is
    /// treated as one.
    pub fn new(values: Vec<T>, tuple_size: usize) -> Self {
        Self {
            values: values.into(),
            tuple_size: tuple_size.max(1),
        }
    }

    /// All values, flattened.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn tuple_size(&self) -> usize {
        self.tuple_size
    }

    /// Number of scalar values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of complete tuples. A trailing partial tuple is not counted.
    pub fn tuple_count(&self) -> usize {
        self.values.len() / self.tuple_size
    }

    /// Iterates over complete tuples.
    pub fn tuples(&self) -> impl Iterator<Item = &[T]> {
        self.values.chunks_exact(self.tuple_size)
    }

    /// First scalar value, if any.
    pub fn first(&self) -> Option<T> {
        self.values.first().copied()
    }
}

/// Represents a typed attribute value.
///
/// Every variant is immutable. Cloning shares the underlying storage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    Int(Tuple<i64>),
    Float(Tuple<f32>),
    Double(Tuple<f64>),
    String(Arc<str>),
    Group(Group),
}

impl Value {
    /// Single integer.
    pub fn int(value: i64) -> Self {
        Value::Int(Tuple::new(vec![value], 1))
    }

    /// Single double.
    pub fn double(value: f64) -> Self {
        Value::Double(Tuple::new(vec![value], 1))
    }

    pub fn string(value: impl Into<Arc<str>>) -> Self {
        Value::String(value.into())
    }

    pub fn ints(values: Vec<i64>, tuple_size: usize) -> Self {
        Value::Int(Tuple::new(values, tuple_size))
    }

    pub fn floats(values: Vec<f32>, tuple_size: usize) -> Self {
        Value::Float(Tuple::new(values, tuple_size))
    }

    pub fn doubles(values: Vec<f64>, tuple_size: usize) -> Self {
        Value::Double(Tuple::new(values, tuple_size))
    }

    /// Short name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Double(_) => "double",
            Value::String(_) => "string",
            Value::Group(_) => "group",
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Value::Group(group) => Some(group),
            _ => None,
        }
    }

    pub fn as_ints(&self) -> Option<&Tuple<i64>> {
        match self {
            Value::Int(tuple) => Some(tuple),
            _ => None,
        }
    }

    pub fn as_floats(&self) -> Option<&Tuple<f32>> {
        match self {
            Value::Float(tuple) => Some(tuple),
            _ => None,
        }
    }

    pub fn as_doubles(&self) -> Option<&Tuple<f64>> {
        match self {
            Value::Double(tuple) => Some(tuple),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::double(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<Group> for Value {
    fn from(group: Group) -> Self {
        Value::Group(group)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, values: &[T]) -> fmt::Result {
            write!(f, "[")?;
            for (i, item) in values.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", item)?;
            }
            write!(f, "]")
        }

        match self {
            Value::Int(t) => list(f, t.values()),
            Value::Float(t) => list(f, t.values()),
            Value::Double(t) => list(f, t.values()),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Group(g) => write!(f, "{{{} children}}", g.len()),
        }
    }
}

/// Conversion used by typed reads.
///
/// Numeric conversions take the first scalar of a tuple of the matching type.
/// There is no coercion between numeric types: reading a double from an int
/// attribute yields `None`.
pub trait FromValue: Sized {
    /// Name of the expected type, used in error messages.
    const TYPE_NAME: &'static str;

    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for i64 {
    const TYPE_NAME: &'static str = "int";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_ints().and_then(Tuple::first)
    }
}

impl FromValue for f32 {
    const TYPE_NAME: &'static str = "float";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_floats().and_then(Tuple::first)
    }
}

impl FromValue for f64 {
    const TYPE_NAME: &'static str = "double";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_doubles().and_then(Tuple::first)
    }
}

impl FromValue for String {
    const TYPE_NAME: &'static str = "string";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl FromValue for Group {
    const TYPE_NAME: &'static str = "group";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_group().cloned()
    }
}

// =============================================================================
// TESTS
// =============================================================================
