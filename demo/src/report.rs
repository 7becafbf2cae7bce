use std::io::Write;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use safeval_core::{Optional, Outcome};

use crate::mock::{divide, divide_result, Person};

#[derive(Debug, Error)]
pub enum ReportError {
  #[error("unknown report format '{0}'; expected 'pretty' or 'json'")]
  UnknownFormat(String),
  #[error("failed to serialize report entry")]
  Serialize(#[from] serde_json::Error),
  #[error("failed to write report")]
  Write(#[from] std::io::Error),
}

#[derive(Default, Copy, Clone, Eq, PartialEq, Debug)]
pub enum ReportFormat {
  #[default]
  Pretty,
  Json,
}
impl FromStr for ReportFormat {
  type Err = ReportError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "pretty" => Ok(Self::Pretty),
      "json" => Ok(Self::Json),
      _ => Err(ReportError::UnknownFormat(s.to_string())),
    }
  }
}

#[derive(Serialize, Debug)]
pub struct Entry {
  pub scenario: &'static str,
  pub result: Value,
}

#[derive(Serialize, Default, Debug)]
pub struct Report {
  pub entries: Vec<Entry>,
}
impl Report {
  fn push(&mut self, scenario: &'static str, result: impl Serialize) -> Result<(), ReportError> {
    let result = serde_json::to_value(result)?;
    debug!(scenario, %result, "recorded scenario");
    self.entries.push(Entry { scenario, result });
    Ok(())
  }

  pub fn write(&self, format: ReportFormat, mut writer: impl Write) -> Result<(), ReportError> {
    match format {
      ReportFormat::Pretty => {
        for Entry { scenario, result } in &self.entries {
          writeln!(writer, "{}: {}", scenario, result)?;
        }
      }
      ReportFormat::Json => {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
      }
    }
    Ok(())
  }
}

/// Runs every scenario, logging through the inspecting combinators, and collects their results.
pub fn run() -> Result<Report, ReportError> {
  let mut report = Report::default();

  let quotient = divide_result(10.0, 2.0)
    .apply(|value| info!(value, "divided 10 by 2"));
  report.push("divide_result(10, 2)", quotient)?;

  let by_zero = divide_result(10.0, 0.0)
    .apply_error(|failure| warn!(failure, "could not divide 10 by 0"));
  report.push("divide_result(10, 0)", by_zero)?;

  let captured = Outcome::of(|| divide(4.0, 0.0))
    .map_error(|thrown| thrown.message().unwrap_or("non-text panic payload").to_string())
    .match_with(
      |value| info!(value, "captured division succeeded"),
      |failure| warn!(failure = failure.as_str(), "captured division panicked"),
    );
  report.push("Outcome::of(divide(4, 0))", captured)?;

  let chained = divide_result(100.0, 5.0)
    .flat_map(|value| divide_result(value, 2.0));
  report.push("divide_result(100, 5) then / 2", chained)?;

  let recovered = divide_result(1.0, 0.0)
    .flat_map_error(|failure| {
      debug!(failure, "recovering with zero");
      Outcome::<f64, ()>::ok(0.0)
    });
  report.push("divide_result(1, 0) recovered", recovered)?;

  for person in [Person::new("J0hn", 45), Person::new("Jane", -3), Person::new("John", 34)] {
    let problem = person.validate()
      .apply(|error| warn!(name = person.name.as_str(), kind = ?error.kind(), %error, "invalid person"));
    report.push("Person::validate", problem)?;
  }

  let nested = Optional::some(Optional::some(5)).flatten()
    .filter(|value| value % 5 == 0)
    .map(|value| value * 2);
  report.push("Optional::some(Optional::some(5)).flatten()", nested)?;

  let parsed: Outcome<Optional<i32>, String> = Optional::of_nullable(Some(Some("42")))
    .map(|text| Outcome::from(text.parse::<i32>()).map_error(|e| e.to_string()))
    .transpose();
  report.push("Optional<&str> parsed and transposed", parsed)?;

  Ok(report)
}


#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn parses_formats() {
    assert_eq!("pretty".parse::<ReportFormat>().unwrap(), ReportFormat::Pretty);
    assert_eq!(" JSON ".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
    assert!(matches!("yaml".parse::<ReportFormat>(), Err(ReportError::UnknownFormat(_))));
  }

  #[test]
  fn run_records_every_scenario() {
    let report = run().unwrap();
    let results: Vec<&Value> = report.entries.iter().map(|e| &e.result).collect();
    assert_eq!(results.len(), 10);
    assert_eq!(results[0], &json!({ "kind": "OK", "value": 5.0 }));
    assert_eq!(results[1], &json!({ "kind": "FAILURE", "failure": "y cannot be zero" }));
    assert_eq!(results[2], &json!({ "kind": "FAILURE", "failure": "cannot divide with zero" }));
    assert_eq!(results[3], &json!({ "kind": "OK", "value": 10.0 }));
    assert_eq!(results[4], &json!({ "kind": "OK", "value": 0.0 }));
    assert_eq!(results[5]["kind"], json!("PERSON_NAME_INVALID"));
    assert_eq!(results[6]["kind"], json!("PERSON_AGE_INVALID"));
    assert_eq!(results[7], &Value::Null);
    assert_eq!(results[8], &json!(10));
    assert_eq!(results[9], &json!({ "kind": "OK", "value": 42 }));
  }

  #[test]
  fn writes_pretty_lines() {
    let mut report = Report::default();
    report.push("answer", Optional::some(42)).unwrap();
    let mut out = Vec::new();
    report.write(ReportFormat::Pretty, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "answer: 42\n");
  }
}
