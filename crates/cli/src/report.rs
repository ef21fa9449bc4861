use crate::error::Error;
use config::{Output, OutputFormat};
use kernel::Evaluation;
use serde::Serialize;
use std::io::Write;

/// Summary printed at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Report {
    pub accuracy: f64,
    pub accurate: usize,
    pub total: usize,
}

impl From<&Evaluation> for Report {
    fn from(evaluation: &Evaluation) -> Self {
        Self {
            accuracy: evaluation.accuracy(),
            accurate: evaluation.accurate(),
            total: evaluation.total(),
        }
    }
}

impl Report {
    pub fn write(&self, out: &mut impl Write, output: &Output) -> Result<(), Error> {
        match output.format {
            OutputFormat::Text => {
                writeln!(out, "Accuracy = {:.*}", output.precision, self.accuracy)?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, self)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn render(report: Report, output: Output) -> String {
        let mut buf = Vec::new();
        report.write(&mut buf, &output).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_is_rounded() {
        let report = Report {
            accuracy: 2.0 / 3.0,
            accurate: 2,
            total: 3,
        };
        assert_eq!(render(report, Output::default()), "Accuracy = 0.667\n");

        let output = Output {
            precision: 1,
            ..Output::default()
        };
        assert_eq!(render(report, output), "Accuracy = 0.7\n");
    }

    #[test]
    fn json_has_counts() {
        let report = Report {
            accuracy: 0.5,
            accurate: 1,
            total: 2,
        };
        let output = Output {
            format: OutputFormat::Json,
            ..Output::default()
        };
        assert_eq!(
            render(report, output),
            "{\"accuracy\":0.5,\"accurate\":1,\"total\":2}\n"
        );
    }

    proptest! {
        #[test]
        fn text_keeps_requested_precision(accuracy in 0.0f64..=1.0, precision in 0usize..8) {
            let report = Report { accuracy, accurate: 0, total: 1 };
            let output = Output { precision, ..Output::default() };
            let text = render(report, output);

            let value = text
                .strip_prefix("Accuracy = ")
                .and_then(|rest| rest.strip_suffix('\n'))
                .unwrap();
            let decimals = value.split_once('.').map_or(0, |(_, frac)| frac.len());
            prop_assert_eq!(decimals, precision);
            let parsed: f64 = value.parse().unwrap();
            prop_assert!((parsed - accuracy).abs() <= 0.5 * 10f64.powi(-(precision as i32)) + 1e-12);
        }
    }
}
