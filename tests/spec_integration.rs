//! End-to-end tests composing specs the way an application would.

use serde_json::json;
use specimen::predicate::{is_boolean, is_integer, is_null, is_string};
use specimen::prelude::*;
use specimen::{assert_generates, assert_invalid, assert_valid};

fn has_length(length: usize) -> Spec {
    let matches = move |v: &Value| match v {
        Value::Array(items) => items.len() == length,
        Value::String(s) => s.chars().count() == length,
        _ => false,
    };
    Spec::named(matches, format!("has_length({})", length))
}

fn longer_than_five(value: &Value) -> bool {
    value.as_str().is_some_and(|s| s.chars().count() > 5)
}

fn document() -> Spec {
    let integer = spec(is_integer)
        .examples([-5, -42, 0, 3, 42, 46, 102981, -97263])
        .unwrap();
    let boolean = spec(is_boolean)
        .generator(|| json!(rand::random_bool(0.5)))
        .unwrap();
    let string = spec(is_string)
        .examples(["hello", "hi", "hehe", "have a nice day", "abc1234"])
        .unwrap();
    let absent = spec(is_null).examples([Value::Null]).unwrap();

    let array_of_three_integers = array_of(&integer).and(has_length(3));
    let maybe_string = string.or(&absent);
    let string_longer_than_five = string
        .and(longer_than_five)
        .examples(["asd78tk", "asft97giug", "97agsf97at"])
        .unwrap();

    object_of([
        ("baz", array_of_three_integers),
        ("xxx", maybe_string),
        ("bool", boolean),
        ("foo", object_of([("bar", string_longer_than_five)])),
    ])
}

#[test]
fn test_document_accepts_complete_value() {
    let document = document();
    assert_valid!(
        document,
        json!({
            "baz": [1, 2, 3],
            "xxx": null,
            "bool": false,
            "foo": { "bar": "efghilm" }
        })
    );
}

#[test]
fn test_document_reports_every_failure_by_path() {
    let document = document();
    assert_invalid!(
        document,
        json!({
            "baz": [1, 2, 3],
            "xxx": null,
            "foo": { "bar": "efg" }
        }),
        [
            "bool: null does not satisfy specification is_boolean",
            "foo.bar: \"efg\" does not satisfy specification longer_than_five",
        ]
    );
}

#[test]
fn test_document_generates_valid_values() {
    let document = document();
    assert!(document.has_examples());
    assert_generates!(document, 20);
}

#[test]
fn test_validation_failure_display() {
    let document = document();
    let err = document
        .validate(&json!({ "baz": [1, "2"], "xxx": 3, "bool": true, "foo": {} }))
        .unwrap_err();
    let rendered = err.to_string();
    let mut lines = rendered.lines();
    assert_eq!(lines.next(), Some("specification not satisfied:"));
    let rest: Vec<&str> = lines.collect();
    assert_eq!(
        rest,
        vec![
            "baz.1: \"2\" does not satisfy specification is_integer",
            "baz: [1, \"2\"] does not satisfy specification has_length(3)",
            "xxx: 3 does not satisfy specification is_string or is_null",
            "foo.bar: null does not satisfy specification is_string",
            "foo.bar: null does not satisfy specification longer_than_five",
        ]
    );
}

#[test]
fn test_conjunction_of_structural_specs_flattens_nested_paths() {
    let with_id = object_of([("id", spec(is_integer))]);
    let with_tags = object_of([("tags", array_of(is_string))]);
    let both = with_id.and(&with_tags);

    let entries = both
        .explain(&json!({ "id": "x", "tags": ["a", 2] }))
        .unwrap();
    let paths: Vec<String> = entries.iter().map(|e| e.path_string()).collect();
    assert_eq!(paths, vec!["id", "tags.1"]);
}

#[test]
fn test_conform_across_several_values() {
    let integer = spec(is_integer);
    let checked: Vec<_> = [json!(1), json!("2"), json!(3)]
        .into_iter()
        .map(|v| integer.conform(v))
        .collect();
    assert_eq!(checked[0], Validation::Success(json!(1)));
    assert!(checked[1].is_failure());
    assert_eq!(checked[2], Validation::Success(json!(3)));
}

#[test]
fn test_generation_errors_are_not_validation_errors() {
    let integer = spec(is_integer).examples([-1, -2]).unwrap();
    let impossible = integer.and(|v: &Value| v.as_i64().is_some_and(|n| n > 0));
    let err = impossible.generate().unwrap_err();
    assert!(matches!(err, GenerateError::NoSuitableExample { attempts: 200, .. }));
    assert!(err.to_string().contains("provide explicit examples"));
}

#[test]
fn test_fresh_instance_generates_independently() {
    let integer = spec(is_integer).examples([1, 2, 3]).unwrap();
    let elsewhere = integer.fresh();
    for _ in 0..5 {
        assert!(integer.is_valid(&integer.generate().unwrap()));
        assert!(elsewhere.is_valid(&elsewhere.generate().unwrap()));
    }
}
