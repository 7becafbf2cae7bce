use std::any::Any;
use std::fmt::{self, Debug, Formatter};
use std::panic::{self, AssertUnwindSafe};

use crate::optional::Optional;
use crate::thrown::Thrown;

#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(tag = "kind"))]
enum Repr<T, F> {
  #[cfg_attr(feature = "serde", serde(rename = "OK"))]
  Ok { value: T },
  #[cfg_attr(feature = "serde", serde(rename = "FAILURE"))]
  Failure { failure: F },
}

/// Outcome of a fallible operation: either a success with a value of type `T`, or a failure with a payload of type
/// `F`.
///
/// The variant is fixed at construction through [`ok`](Self::ok), [`err`](Self::err) or [`of`](Self::of), and never
/// changes. All combinators are total and encode their result in the returned `Outcome`; only [`get`](Self::get)
/// raises.
///
/// `F` is opaque: no shape is imposed on failure payloads.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct Outcome<T, F> {
  repr: Repr<T, F>,
}

impl<T, F> Outcome<T, F> {
  #[inline]
  pub const fn ok(value: T) -> Self {
    Self { repr: Repr::Ok { value } }
  }

  #[inline]
  pub const fn err(failure: F) -> Self {
    Self { repr: Repr::Failure { failure } }
  }


  #[inline]
  pub fn is_ok(&self) -> bool {
    matches!(self.repr, Repr::Ok { .. })
  }

  #[inline]
  pub fn is_err(&self) -> bool {
    !self.is_ok()
  }

  #[inline]
  pub fn as_ref(&self) -> Outcome<&T, &F> {
    match &self.repr {
      Repr::Ok { value } => Outcome::ok(value),
      Repr::Failure { failure } => Outcome::err(failure),
    }
  }


  /// Transforms the success value with `f`. Failures pass through unchanged without calling `f`.
  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, F> {
    match self.repr {
      Repr::Ok { value } => Outcome::ok(f(value)),
      Repr::Failure { failure } => Outcome::err(failure),
    }
  }

  /// Transforms the failure payload with `f`. Successes pass through unchanged without calling `f`.
  #[inline]
  pub fn map_error<E>(self, f: impl FnOnce(F) -> E) -> Outcome<T, E> {
    match self.repr {
      Repr::Ok { value } => Outcome::ok(value),
      Repr::Failure { failure } => Outcome::err(f(failure)),
    }
  }

  /// Chains a dependent fallible step sharing the same failure type. On failure, `f` is not called and the original
  /// failure is propagated.
  #[inline]
  pub fn flat_map<U>(self, f: impl FnOnce(T) -> Outcome<U, F>) -> Outcome<U, F> {
    match self.repr {
      Repr::Ok { value } => f(value),
      Repr::Failure { failure } => Outcome::err(failure),
    }
  }

  /// Attempts to recover from a failure with `f`, possibly into a different failure type. On success, `f` is not
  /// called and the original value is propagated.
  #[inline]
  pub fn flat_map_error<E>(self, f: impl FnOnce(F) -> Outcome<T, E>) -> Outcome<T, E> {
    match self.repr {
      Repr::Ok { value } => Outcome::ok(value),
      Repr::Failure { failure } => f(failure),
    }
  }


  /// Calls `f` with the success value, if any, then returns `self` unchanged.
  #[inline]
  pub fn apply(self, f: impl FnOnce(&T)) -> Self {
    if let Repr::Ok { value } = &self.repr {
      f(value);
    }
    self
  }

  /// Calls `f` with the failure payload, if any, then returns `self` unchanged.
  #[inline]
  pub fn apply_error(self, f: impl FnOnce(&F)) -> Self {
    if let Repr::Failure { failure } = &self.repr {
      f(failure);
    }
    self
  }

  /// Calls exactly one of `ok` or `err` depending on the variant, then returns `self` unchanged.
  #[inline]
  pub fn match_with(self, ok: impl FnOnce(&T), err: impl FnOnce(&F)) -> Self {
    match &self.repr {
      Repr::Ok { value } => ok(value),
      Repr::Failure { failure } => err(failure),
    }
    self
  }


  /// Returns the success value, or the result of `f` applied to the failure payload. `f` is only called on failure.
  #[inline]
  pub fn get_or_else(self, f: impl FnOnce(F) -> T) -> T {
    match self.repr {
      Repr::Ok { value } => value,
      Repr::Failure { failure } => f(failure),
    }
  }

  #[inline]
  pub fn into_result(self) -> Result<T, F> {
    match self.repr {
      Repr::Ok { value } => Ok(value),
      Repr::Failure { failure } => Err(failure),
    }
  }

  /// Returns the success value as an [`Optional`], absent on failure.
  #[inline]
  pub fn value(self) -> Optional<T> {
    Optional::of(self.into_result().ok())
  }

  /// Returns the failure payload as an [`Optional`], absent on success.
  #[inline]
  pub fn failure(self) -> Optional<F> {
    Optional::of(self.into_result().err())
  }
}

impl<T, F: Send + 'static> Outcome<T, F> {
  /// Returns the success value, or raises the failure payload as a panic.
  ///
  /// The payload is raised with [`resume_unwind`](panic::resume_unwind) and is not wrapped, so a caller catching the
  /// unwind can downcast it back to `F`. A [`Thrown`] failure is raised with its original payload, the very value
  /// captured by [`of`](Self::of).
  pub fn get(self) -> T {
    match self.repr {
      Repr::Ok { value } => value,
      Repr::Failure { failure } => raise(failure),
    }
  }
}

fn raise<F: Send + 'static>(failure: F) -> ! {
  let payload: Box<dyn Any + Send> = Box::new(failure);
  match payload.downcast::<Thrown>() {
    Ok(thrown) => {
      let thrown = *thrown;
      panic::resume_unwind(thrown.into_payload())
    }
    Err(payload) => panic::resume_unwind(payload),
  }
}

impl<T> Outcome<T, Thrown> {
  /// Runs `op`, capturing a panic as a failure.
  ///
  /// A normal return gives a success. A panic gives a failure holding the panic payload unchanged, whatever its type.
  /// The payload shape cannot be known statically; narrow it through [`Thrown`]. Note that the panic hook still runs
  /// when `op` panics.
  ///
  /// State captured by `op` may be observed after it panicked midway.
  pub fn of(op: impl FnOnce() -> T) -> Self {
    match panic::catch_unwind(AssertUnwindSafe(op)) {
      Ok(value) => Self::ok(value),
      Err(payload) => Self::err(Thrown::new(payload)),
    }
  }
}

impl<T, F> Outcome<Outcome<T, F>, F> {
  #[inline]
  pub fn flatten(self) -> Outcome<T, F> {
    self.flat_map(|inner| inner)
  }
}

impl<T, F> Outcome<Optional<T>, F> {
  /// Swaps the nesting: a successful absent value becomes absent, and other cases keep their variant.
  #[inline]
  pub fn transpose(self) -> Optional<Outcome<T, F>> {
    match self.repr {
      Repr::Ok { value } => value.map(Outcome::ok),
      Repr::Failure { failure } => Optional::some(Outcome::err(failure)),
    }
  }
}

impl<T, F> From<Result<T, F>> for Outcome<T, F> {
  #[inline]
  fn from(result: Result<T, F>) -> Self {
    match result {
      Ok(value) => Self::ok(value),
      Err(failure) => Self::err(failure),
    }
  }
}
impl<T, F> From<Outcome<T, F>> for Result<T, F> {
  #[inline]
  fn from(outcome: Outcome<T, F>) -> Self { outcome.into_result() }
}

impl<T: Debug, F: Debug> Debug for Outcome<T, F> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match &self.repr {
      Repr::Ok { value } => f.debug_tuple("Ok").field(value).finish(),
      Repr::Failure { failure } => f.debug_tuple("Err").field(failure).finish(),
    }
  }
}
