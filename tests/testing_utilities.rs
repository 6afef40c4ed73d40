//! Patterns for testing application data with specs.

use serde_json::json;
use specimen::predicate::{is_integer, is_string};
use specimen::prelude::*;
use specimen::{assert_generates, assert_invalid, assert_valid};

fn adult(value: &Value) -> bool {
    value.as_i64().is_some_and(|age| age >= 18)
}

fn email(value: &Value) -> bool {
    value.as_str().is_some_and(|s| s.contains('@'))
}

fn user() -> Spec {
    object_of([
        (
            "email",
            spec(is_string)
                .and(email)
                .examples(["ada@example.com", "grace@example.com"])
                .unwrap(),
        ),
        (
            "age",
            spec(is_integer)
                .generator(|| json!(rand::random_range(18..100)))
                .unwrap()
                .and(adult),
        ),
    ])
}

#[test]
fn test_valid_user() {
    assert_valid!(user(), json!({ "email": "ada@example.com", "age": 36 }));
}

#[test]
fn test_invalid_user_reports_each_field() {
    assert_invalid!(
        user(),
        json!({ "email": "nobody", "age": 12 }),
        [
            "email: \"nobody\" does not satisfy specification email",
            "age: 12 does not satisfy specification adult",
        ]
    );
}

#[test]
fn test_user_generation() {
    let user = user();
    assert_generates!(user, 50);
}

#[test]
fn test_generated_users_feed_other_checks() {
    let user = user();
    let users: Vec<Value> = (0..5).map(|_| user.generate().unwrap()).collect();
    assert!(users.into_iter().all(|u| user.conform(u).is_success()));
}

#[cfg(feature = "proptest")]
mod with_proptest {
    use super::*;
    use proptest::prelude::*;
    use specimen::testing::examples_of;

    proptest! {
        #[test]
        fn prop_generated_users_are_adults(u in examples_of(&user())) {
            prop_assert!(u["age"].as_i64().is_some_and(|age| age >= 18));
            prop_assert!(u["email"].as_str().is_some_and(|s| s.contains('@')));
        }
    }
}
