use crate::outcome::Outcome;

/// A value that may be absent.
///
/// An `Optional` is either present (wrapping a `T`) or absent. Absence is canonical: however the missing value came
/// to be, it ends up in the same absent state. Instances are never mutated; every combinator consumes `self` and
/// returns a new instance.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct Optional<T> {
  value: Option<T>,
}

impl<T> Default for Optional<T> {
  #[inline]
  fn default() -> Self { Self::none() }
}

impl<T> Optional<T> {
  /// Creates an absent `Optional`.
  #[inline]
  pub const fn none() -> Self {
    Self { value: None }
  }

  /// Creates a present `Optional` wrapping `value`. Zero, empty strings and `false` are values like any other.
  #[inline]
  pub const fn some(value: T) -> Self {
    Self { value: Some(value) }
  }

  /// Creates an `Optional` from a value coming from an uncertain source: `None` gives an absent `Optional`, `Some`
  /// gives a present one.
  #[inline]
  pub fn of(value: Option<T>) -> Self {
    Self { value }
  }

  /// Creates an `Optional` from a value that can be missing (outer `None`) or explicitly null (inner `None`). Both
  /// markers collapse into the same absent state.
  #[inline]
  pub fn of_nullable(value: Option<Option<T>>) -> Self {
    Self::of(value.flatten())
  }


  /// Returns the wrapped value, or `None` when absent. Never panics.
  #[inline]
  pub fn get(self) -> Option<T> {
    self.value
  }

  /// Returns the wrapped value, or the result of `f` when absent. `f` is only called when absent.
  #[inline]
  pub fn get_or_else(self, f: impl FnOnce() -> T) -> T {
    match self.value {
      Some(value) => value,
      None => f(),
    }
  }

  #[inline]
  pub fn has_value(&self) -> bool {
    self.value.is_some()
  }

  #[inline]
  pub fn as_ref(&self) -> Optional<&T> {
    Optional { value: self.value.as_ref() }
  }


  /// Transforms the wrapped value with `f`. Absent values short-circuit: `f` is not called.
  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Optional<U> {
    match self.value {
      Some(value) => Optional::some(f(value)),
      None => Optional::none(),
    }
  }

  /// Transforms the wrapped value into a new `Optional` with `f`, returning that `Optional` directly. Absent values
  /// short-circuit: `f` is not called.
  #[inline]
  pub fn flat_map<U>(self, f: impl FnOnce(T) -> Optional<U>) -> Optional<U> {
    match self.value {
      Some(value) => f(value),
      None => Optional::none(),
    }
  }

  /// Keeps the wrapped value if `predicate` holds for it, otherwise returns an absent `Optional`. `predicate` is not
  /// called when absent.
  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
    let keep = match &self.value {
      Some(value) => predicate(value),
      None => true,
    };
    if keep { self } else { Self::none() }
  }

  /// Calls `f` with the wrapped value if present, then returns `self` unchanged.
  #[inline]
  pub fn apply(self, f: impl FnOnce(&T)) -> Self {
    if let Some(value) = &self.value {
      f(value);
    }
    self
  }

  /// Returns `self` if present, otherwise the `Optional` produced by `f`.
  #[inline]
  pub fn or_else(self, f: impl FnOnce() -> Self) -> Self {
    if self.has_value() { self } else { f() }
  }


  /// Converts into an [`Outcome`], using `failure` when absent.
  #[inline]
  pub fn ok_or<F>(self, failure: F) -> Outcome<T, F> {
    self.ok_or_else(|| failure)
  }

  /// Converts into an [`Outcome`], lazily creating the failure with `f` when absent.
  #[inline]
  pub fn ok_or_else<F>(self, f: impl FnOnce() -> F) -> Outcome<T, F> {
    match self.value {
      Some(value) => Outcome::ok(value),
      None => Outcome::err(f()),
    }
  }
}

impl<T> Optional<Optional<T>> {
  #[inline]
  pub fn flatten(self) -> Optional<T> {
    self.flat_map(|inner| inner)
  }
}

impl<T, F> Optional<Outcome<T, F>> {
  /// Swaps the nesting: an absent value becomes a successful absent value, and a present outcome keeps its variant.
  #[inline]
  pub fn transpose(self) -> Outcome<Optional<T>, F> {
    match self.value {
      Some(outcome) => outcome.map(Optional::some),
      None => Outcome::ok(Optional::none()),
    }
  }
}

impl<T> From<Option<T>> for Optional<T> {
  #[inline]
  fn from(value: Option<T>) -> Self { Self::of(value) }
}
impl<T> From<Optional<T>> for Option<T> {
  #[inline]
  fn from(optional: Optional<T>) -> Self { optional.get() }
}

impl<T> IntoIterator for Optional<T> {
  type Item = T;
  type IntoIter = std::option::IntoIter<T>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.value.into_iter()
  }
}
