use std::env;

/// Loads variables from a `.env` file in the current directory or its parents into the process environment.
/// Variables already set in the environment are not overridden.
pub fn load_dotenv_into_env() {
  let _ = dotenvy::dotenv(); // Ignore error ok: .env file is not required.
}

/// Gets the environment variable `key`, or `default` when it is unset or not valid unicode.
pub fn var_or(key: &str, default: &str) -> String {
  env::var(key).unwrap_or_else(|_| default.to_string())
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn falls_back_to_default() {
    assert_eq!(var_or("SAFEVAL_SURELY_UNSET_VARIABLE", "pretty"), "pretty");
  }
}
