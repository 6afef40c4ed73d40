//! Field-wise and element-wise specs.

use std::rc::Rc;

use rand::Rng;
use serde_json::{Map, Value};

use super::{IntoSpec, Kind, Spec};
use crate::error_tree::{ErrorTree, PathSegment};
use crate::print::render_value;
use crate::sequence::Sequence;
use crate::MAX_GENERATED_LEN;

/// A spec for objects whose fields each satisfy their own spec.
///
/// Fields missing from the value are checked as `null`, so optional fields
/// must accept `null` explicitly. Extra fields are ignored. Examples exist
/// when every field spec has them; each example generates every field
/// independently.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use specimen::predicate::{is_integer, is_null, is_string};
/// use specimen::{object_of, spec};
///
/// let user = object_of([
///     ("id", spec(is_integer)),
///     ("nickname", spec(is_string).or(is_null)),
/// ]);
///
/// assert!(user.is_valid(&json!({ "id": 1 })));
///
/// let entries = user.explain(&json!({ "id": "a", "nickname": 3 })).unwrap();
/// assert_eq!(entries[0].path_string(), "id");
/// assert_eq!(entries[1].path_string(), "nickname");
///
/// assert_eq!(
///     user.explain(&json!([1])).unwrap()[0].message,
///     "[1] is not an object"
/// );
/// ```
pub fn object_of<I, K, S>(fields: I) -> Spec
where
    I: IntoIterator<Item = (K, S)>,
    K: Into<String>,
    S: IntoSpec,
{
    let fields: Rc<[(String, Spec)]> = fields
        .into_iter()
        .map(|(key, spec)| (key.into(), spec.into_spec()))
        .collect();

    let keys: Vec<&str> = fields.iter().map(|(key, _)| key.as_str()).collect();
    let name = format!("object_of({{ {} }})", keys.join(", "));

    let source = if fields.iter().all(|(_, spec)| spec.has_examples()) {
        object_source(Rc::clone(&fields))
    } else {
        Sequence::empty()
    };

    Spec::from_parts(name, Kind::Object(fields), source)
}

/// A spec for arrays whose elements all satisfy `element`.
///
/// Errors are keyed by element index. Generated arrays have a random length
/// below [`MAX_GENERATED_LEN`].
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use specimen::predicate::is_integer;
/// use specimen::{array_of, PathSegment};
///
/// let integers = array_of(is_integer);
/// assert_eq!(integers.name(), "array_of(is_integer)");
///
/// let paths: Vec<_> = integers
///     .explain(&json!([1, "a", 3, false]))
///     .unwrap()
///     .into_iter()
///     .map(|entry| entry.path)
///     .collect();
/// assert_eq!(paths, vec![vec![PathSegment::Index(1)], vec![PathSegment::Index(3)]]);
/// ```
pub fn array_of(element: impl IntoSpec) -> Spec {
    let element = element.into_spec();
    let name = format!("array_of({})", element.name());
    let source = if element.has_examples() {
        array_source(&element)
    } else {
        Sequence::empty()
    };
    Spec::from_parts(name, Kind::Array(element), source)
}

fn object_source(fields: Rc<[(String, Spec)]>) -> Sequence<Value> {
    Sequence::try_from_fn(move || {
        let mut object = Map::with_capacity(fields.len());
        for (key, spec) in fields.iter() {
            object.insert(key.clone(), spec.generate()?);
        }
        Ok(Value::Object(object))
    })
}

fn array_source(element: &Spec) -> Sequence<Value> {
    // Sampling keeps a finite source from being replayed in the same order.
    let elements = if element.example_source().is_finite() {
        element.example_source().random()
    } else {
        element.example_source().clone()
    };
    let mut rng = rand::rng();
    Sequence::try_from_fn(move || {
        let len = rng.random_range(0..MAX_GENERATED_LEN);
        Ok(Value::Array(elements.take(len).to_vec()?))
    })
}

static MISSING: Value = Value::Null;

fn field_value<'a>(object: &'a Map<String, Value>, key: &str) -> &'a Value {
    object.get(key).unwrap_or(&MISSING)
}

pub(super) fn object_is_valid(fields: &[(String, Spec)], value: &Value) -> bool {
    match value {
        Value::Object(object) => fields
            .iter()
            .all(|(key, spec)| spec.is_valid(field_value(object, key))),
        _ => false,
    }
}

pub(super) fn object_errors(fields: &[(String, Spec)], value: &Value) -> ErrorTree {
    let Value::Object(object) = value else {
        return ErrorTree::message(format!("{} is not an object", render_value(value)));
    };
    ErrorTree::nested(
        fields
            .iter()
            .map(|(key, spec)| {
                (
                    PathSegment::from(key.as_str()),
                    spec.errors(field_value(object, key)),
                )
            })
            .collect(),
    )
}

pub(super) fn array_is_valid(element: &Spec, value: &Value) -> bool {
    match value {
        Value::Array(items) => items.iter().all(|item| element.is_valid(item)),
        _ => false,
    }
}

pub(super) fn array_errors(element: &Spec, value: &Value) -> ErrorTree {
    let Value::Array(items) = value else {
        return ErrorTree::message(format!("{} is not an array", render_value(value)));
    };
    ErrorTree::nested(
        items
            .iter()
            .enumerate()
            .map(|(idx, item)| (PathSegment::Index(idx), element.errors(item)))
            .collect(),
    )
}
