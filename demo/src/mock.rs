use serde::Serialize;
use thiserror::Error;

use safeval_core::{Optional, Outcome};

/// Divides `x` by `y`, panicking with `"cannot divide with zero"` when `y` is zero.
pub fn divide(x: f64, y: f64) -> f64 {
  if y == 0.0 {
    panic!("cannot divide with zero");
  }
  x / y
}

/// Divides `x` by `y`, failing with `"y cannot be zero"` when `y` is zero.
pub fn divide_result(x: f64, y: f64) -> Outcome<f64, &'static str> {
  if y == 0.0 {
    return Outcome::err("y cannot be zero");
  }
  Outcome::ok(x / y)
}


#[derive(Clone, PartialEq, Debug)]
pub struct Person {
  pub name: String,
  pub age: i32,
}
impl Person {
  pub fn new(name: impl Into<String>, age: i32) -> Self {
    Self { name: name.into(), age }
  }

  /// Returns the first problem with this person, or an absent value when it is valid.
  pub fn validate(&self) -> Optional<PersonError> {
    if self.name.is_empty() || !self.name.chars().all(|c| c.is_ascii_alphabetic()) {
      return Optional::some(PersonError::NameInvalid {
        reason: "person name must only contain english letters".to_string(),
      });
    }
    if self.age < 0 {
      return Optional::some(PersonError::AgeInvalid {
        reason: RangeError::new("person age cannot be a negative number"),
      });
    }
    Optional::none()
  }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum PersonErrorKind {
  NameInvalid,
  AgeInvalid,
}

#[derive(Clone, PartialEq, Debug, Error, Serialize)]
#[serde(tag = "kind")]
pub enum PersonError {
  #[error("{reason}")]
  #[serde(rename = "PERSON_NAME_INVALID")]
  NameInvalid { reason: String },
  #[error("{reason}")]
  #[serde(rename = "PERSON_AGE_INVALID")]
  AgeInvalid { reason: RangeError },
}
impl PersonError {
  pub fn kind(&self) -> PersonErrorKind {
    match self {
      PersonError::NameInvalid { .. } => PersonErrorKind::NameInvalid,
      PersonError::AgeInvalid { .. } => PersonErrorKind::AgeInvalid,
    }
  }
}

/// A value outside of its allowed range.
#[derive(Clone, PartialEq, Debug, Error, Serialize)]
#[error("{message}")]
pub struct RangeError {
  message: String,
}
impl RangeError {
  pub fn new(message: impl Into<String>) -> Self {
    Self { message: message.into() }
  }
}


#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use super::*;

  #[test]
  fn divide_result_fails_on_zero() {
    assert_eq!(divide_result(10.0, 0.0), Outcome::err("y cannot be zero"));
    assert_eq!(divide_result(10.0, 2.0), Outcome::ok(5.0));
  }

  #[test]
  fn capturing_divide_by_zero() {
    let outcome = Outcome::of(|| divide(4.0, 0.0));
    let message = outcome.map_error(|thrown| thrown.message().map(str::to_string)).failure();
    assert_eq!(message.get(), Some(Some("cannot divide with zero".to_string())));
    assert_eq!(Outcome::of(|| divide(12.0, 4.0)).get(), 3.0);
  }

  #[test]
  fn chaining_divisions() {
    let chained = divide_result(100.0, 5.0).flat_map(|v| divide_result(v, 2.0));
    assert_eq!(chained, Outcome::ok(10.0));
    let failed = divide_result(100.0, 0.0).flat_map(|v| divide_result(v, 2.0));
    assert_eq!(failed, Outcome::err("y cannot be zero"));
  }

  #[test]
  fn invalid_name_is_reported() {
    let error = Person::new("J0hn", 45).validate();
    assert!(error.has_value());
    let error = error.get().unwrap();
    assert_eq!(error.kind(), PersonErrorKind::NameInvalid);
    assert_eq!(error.to_string(), "person name must only contain english letters");
  }

  #[test]
  fn negative_age_is_reported() {
    let error = Person::new("John", -1).validate().get().unwrap();
    assert_eq!(error.kind(), PersonErrorKind::AgeInvalid);
    match error {
      PersonError::AgeInvalid { reason } => assert_eq!(reason.to_string(), "person age cannot be a negative number"),
      e => panic!("unexpected error {:?}", e),
    }
  }

  #[test]
  fn valid_person_has_no_error() {
    assert!(!Person::new("John", 34).validate().has_value());
  }

  #[test]
  fn person_error_as_failure_matches_on_kind() {
    let failure = Person::new("J0hn", 45).validate().get().unwrap();
    let matched = Cell::new(false);
    Outcome::<Person, PersonError>::err(failure).match_with(
      |person| panic!("should not match on ok case, got {:?}", person),
      |failure| match failure {
        PersonError::NameInvalid { reason } => {
          assert_eq!(reason, "person name must only contain english letters");
          matched.set(true);
        }
        PersonError::AgeInvalid { .. } => panic!("failure kind is not the expected one"),
      },
    );
    assert!(matched.get());
  }

  #[test]
  fn mapping_string_failure_into_person_error() {
    let mapped = Outcome::<Person, &str>::err("some reason")
      .map_error(|reason| PersonError::NameInvalid { reason: reason.to_string() });
    assert_eq!(mapped, Outcome::err(PersonError::NameInvalid { reason: "some reason".to_string() }));
  }

  #[test]
  fn person_error_serializes_with_kind() {
    let error = Person::new("J0hn", 45).validate();
    let json = serde_json::to_value(&error).unwrap();
    assert_eq!(json, serde_json::json!({
      "kind": "PERSON_NAME_INVALID",
      "reason": "person name must only contain english letters",
    }));
  }
}
