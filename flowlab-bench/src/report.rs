use std::io::{self, Write};

use serde::Serialize;

use crate::config::Format;

/// Outcome of the measured computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    FlowValue(serde_json::Value),
    IsTree(bool),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub scenario: String,
    pub algorithm: &'static str,
    pub repeats: usize,
    pub seconds: f64,
    pub outcome: Outcome,
}

/// Writes measurements to the output in the chosen format.
pub struct Reporter<W> {
    out: W,
    format: Format,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, format: Format) -> Self {
        Self { out, format }
    }

    /// Starts a group of measurements. Only visible in the text format, JSON
    /// records carry the scenario name instead.
    pub fn section(&mut self, title: &str) -> io::Result<()> {
        match self.format {
            Format::Text => writeln!(self.out, "{title}"),
            Format::Json => Ok(()),
        }
    }

    pub fn record(&mut self, measurement: &Measurement) -> io::Result<()> {
        match self.format {
            Format::Text => writeln!(
                self.out,
                "{}: {}",
                measurement.algorithm, measurement.seconds
            ),
            Format::Json => {
                serde_json::to_writer(&mut self.out, measurement)?;
                writeln!(self.out)
            }
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement() -> Measurement {
        Measurement {
            scenario: "random density=0.1".to_owned(),
            algorithm: "Edmonds Karp",
            repeats: 3,
            seconds: 0.25,
            outcome: Outcome::FlowValue(serde_json::json!(1234)),
        }
    }

    #[test]
    fn text_format() {
        let mut reporter = Reporter::new(Vec::new(), Format::Text);
        reporter.section("random density=0.1").unwrap();
        reporter.record(&measurement()).unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(output, "random density=0.1\nEdmonds Karp: 0.25\n");
    }

    #[test]
    fn json_format() {
        let mut reporter = Reporter::new(Vec::new(), Format::Json);
        reporter.section("ignored").unwrap();
        reporter.record(&measurement()).unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        let value: serde_json::Value = serde_json::from_str(output.trim_end()).unwrap();

        assert_eq!(output.lines().count(), 1);
        assert_eq!(value["algorithm"], "Edmonds Karp");
        assert_eq!(value["repeats"], 3);
        assert_eq!(value["seconds"], 0.25);
        assert_eq!(value["outcome"]["flow_value"], 1234);
    }

    #[test]
    fn tree_outcome() {
        let outcome = serde_json::to_value(Outcome::IsTree(true)).unwrap();
        assert_eq!(outcome, serde_json::json!({ "is_tree": true }));
    }
}
