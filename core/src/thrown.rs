use std::any::Any;
use std::fmt::{self, Debug, Formatter};

use thiserror::Error;

/// A panic payload captured by [`Outcome::of`](crate::outcome::Outcome::of).
///
/// The payload keeps whatever type it was raised with, so its shape cannot be known statically. Narrow it with
/// [`downcast_ref`](Self::downcast_ref) or [`downcast`](Self::downcast), or read it as text with
/// [`message`](Self::message) when it was raised with `panic!`.
#[derive(Error)]
#[error("{}", message_of(.payload).unwrap_or("operation panicked with a non-text payload"))]
pub struct Thrown {
  payload: Box<dyn Any + Send>,
}

impl Thrown {
  #[inline]
  pub fn new(payload: Box<dyn Any + Send>) -> Self {
    Self { payload }
  }

  /// Returns the payload as text if it was raised as a `&'static str` or a `String`, which is what `panic!` produces.
  #[inline]
  pub fn message(&self) -> Option<&str> {
    message_of(&self.payload)
  }

  #[inline]
  pub fn is<E: Any>(&self) -> bool {
    self.payload.is::<E>()
  }

  #[inline]
  pub fn downcast_ref<E: Any>(&self) -> Option<&E> {
    self.payload.downcast_ref::<E>()
  }

  /// Takes the payload out as an `E`, or gives back `self` unchanged when the payload is of another type.
  pub fn downcast<E: Any>(self) -> Result<E, Self> {
    match self.payload.downcast::<E>() {
      Ok(payload) => Ok(*payload),
      Err(payload) => Err(Self { payload }),
    }
  }

  /// Returns the original payload box, as it was received from the unwinding panic.
  #[inline]
  pub fn into_payload(self) -> Box<dyn Any + Send> {
    self.payload
  }
}

impl From<Box<dyn Any + Send>> for Thrown {
  #[inline]
  fn from(payload: Box<dyn Any + Send>) -> Self { Self::new(payload) }
}

impl Debug for Thrown {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.debug_struct("Thrown")
      .field("message", &self.message())
      .finish_non_exhaustive()
  }
}

/// Reads a panic payload as text if it was raised as a `&'static str` or a `String`.
pub fn payload_message(payload: &(dyn Any + Send)) -> Option<&str> {
  if let Some(message) = payload.downcast_ref::<&'static str>() {
    Some(*message)
  } else {
    payload.downcast_ref::<String>().map(String::as_str)
  }
}

#[allow(clippy::borrowed_box)]
fn message_of(payload: &Box<dyn Any + Send>) -> Option<&str> {
  payload_message(&**payload)
}


#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Debug, PartialEq)]
  struct Code(u32);

  #[test]
  fn reads_text_payloads() {
    let literal = Thrown::new(Box::new("cannot divide with zero"));
    assert_eq!(literal.message(), Some("cannot divide with zero"));
    assert_eq!(literal.to_string(), "cannot divide with zero");

    let formatted = Thrown::new(Box::new(format!("bad input {}", 3)));
    assert_eq!(formatted.message(), Some("bad input 3"));
  }

  #[test]
  fn narrows_structured_payloads() {
    let thrown = Thrown::new(Box::new(Code(42)));
    assert_eq!(thrown.message(), None);
    assert_eq!(thrown.to_string(), "operation panicked with a non-text payload");
    assert!(thrown.is::<Code>());
    assert_eq!(thrown.downcast_ref::<Code>(), Some(&Code(42)));

    let thrown = match thrown.downcast::<String>() {
      Ok(_) => panic!("payload is not a string"),
      Err(thrown) => thrown,
    };
    assert_eq!(thrown.downcast::<Code>().ok(), Some(Code(42)));
  }
}
