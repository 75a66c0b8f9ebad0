//! Interactive text session.
//!
//! [`InputCollector`] reads the six pricing inputs from any [`BufRead`],
//! converting days to years and percentages to fractions, and re-prompts a
//! field until it gets a usable value. [`run_session`] loops collection and
//! summary rendering until the operator declines to continue.
//!
//! Typing `q` at any prompt, or closing the input, ends the session normally.

use std::io::{BufRead, Write};

use crate::config::ScenarioConfig;
use crate::engine::PricingEngine;
use crate::error::Result;
use crate::report::render_summary;
use crate::spec::OptionSpec;
use crate::types::OptionKind;
use crate::validate::validate_positive;

/// Field-level acceptance rule; returns the complaint for a rejected value.
type Check = fn(f64) -> Option<&'static str>;

fn positive(v: f64) -> Option<&'static str> {
    (!(v.is_finite() && v > 0.0)).then_some("value must be greater than zero")
}

fn non_negative(v: f64) -> Option<&'static str> {
    (!(v.is_finite() && v >= 0.0)).then_some("value must not be negative")
}

fn finite(v: f64) -> Option<&'static str> {
    (!v.is_finite()).then_some("value must be a finite number")
}

/// Prompts for and validates pricing inputs.
#[derive(Debug)]
pub struct InputCollector<R, W> {
    reader: R,
    writer: W,
    day_count: f64,
}

impl<R: BufRead, W: Write> InputCollector<R, W> {
    /// Collector that converts days with a 365-day year.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            day_count: ScenarioConfig::default().day_count,
        }
    }

    /// Override the days-per-year used for the days unit.
    ///
    /// # Errors
    /// Returns [`GreeksError::InvalidInput`](crate::GreeksError::InvalidInput)
    /// unless `day_count` is positive and finite.
    pub fn with_day_count(mut self, day_count: f64) -> Result<Self> {
        self.day_count = validate_positive(day_count, "day_count")?;
        Ok(self)
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Gather one option's inputs. `Ok(None)` means the operator quit.
    ///
    /// A combination the spec constructor refuses is reported and the whole
    /// form is asked again.
    ///
    /// # Errors
    /// Returns [`GreeksError::Io`](crate::GreeksError::Io) if the terminal fails.
    pub fn collect(&mut self) -> Result<Option<OptionSpec>> {
        loop {
            match self.read_form()? {
                None => return Ok(None),
                Some(Ok(spec)) => return Ok(Some(spec)),
                Some(Err(e)) => {
                    #[cfg(feature = "logging")]
                    tracing::debug!(error = %e, "collected inputs rejected");
                    writeln!(self.writer, "Invalid input! {e}. Please re-enter the option.")?;
                }
            }
        }
    }

    /// One pass over every prompt; the inner result is the spec validation.
    fn read_form(&mut self) -> Result<Option<Result<OptionSpec>>> {
        let rule = "=".repeat(70);
        writeln!(self.writer, "\n{rule}")?;
        writeln!(self.writer, "INTERACTIVE BLACK-SCHOLES OPTIONS PRICING CALCULATOR")?;
        writeln!(self.writer, "{rule}")?;
        writeln!(self.writer, "Please enter the following parameters for your option:")?;
        writeln!(self.writer, "(Enter 'q' at any time to quit)")?;

        let Some(spot) = self.number("\n1. Current Stock Price (S): $", positive)? else {
            return Ok(None);
        };
        let Some(strike) = self.number("2. Strike Price (K): $", positive)? else {
            return Ok(None);
        };

        writeln!(self.writer, "\n3. Time to Expiration:")?;
        writeln!(self.writer, "   You can enter this in:")?;
        writeln!(self.writer, "   - Years (e.g., 0.25 for 3 months)")?;
        writeln!(self.writer, "   - Days (we'll convert to years)")?;
        let Some(time) = self.number("   Enter time value: ", non_negative)? else {
            return Ok(None);
        };
        let Some(unit) = self.line("   Is this in (d)ays or (y)ears? [d/y]: ")? else {
            return Ok(None);
        };
        let years = if unit.eq_ignore_ascii_case("d") {
            time / self.day_count
        } else {
            time
        };

        let Some(rate) = self.number("\n4. Risk-free Interest Rate (as %): ", finite)? else {
            return Ok(None);
        };
        let Some(vol) = self.number("5. Volatility (as %): ", non_negative)? else {
            return Ok(None);
        };
        let Some(dividend) = self.optional_number("6. Dividend Yield (as %, press Enter for 0): ")?
        else {
            return Ok(None);
        };

        let Some(kind) = self.line("\n7. Option Type - (c)all or (p)ut? [c/p]: ")? else {
            return Ok(None);
        };
        let kind = match kind.to_ascii_lowercase().as_str() {
            "p" | "put" => OptionKind::Put,
            _ => OptionKind::Call,
        };

        Ok(Some(OptionSpec::new(
            spot,
            strike,
            years,
            rate / 100.0,
            vol / 100.0,
            dividend / 100.0,
            kind,
        )))
    }

    /// Yes/no question; anything but `y` / `yes` is a no, as is end of input.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(self
            .line(prompt)?
            .is_some_and(|answer| matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes")))
    }

    /// Read one trimmed line. `None` on end of input or a quit command.
    fn line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let answer = buf.trim();
        if answer.eq_ignore_ascii_case("q") || answer.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }
        Ok(Some(answer.to_string()))
    }

    /// Prompt until a number passing `check` is entered.
    fn number(&mut self, prompt: &str, check: Check) -> Result<Option<f64>> {
        loop {
            let Some(text) = self.line(prompt)? else {
                return Ok(None);
            };
            match text.parse::<f64>() {
                Ok(v) => match check(v) {
                    None => return Ok(Some(v)),
                    Some(reason) => writeln!(self.writer, "Invalid input! {reason}.")?,
                },
                Err(_) => writeln!(self.writer, "Invalid input! Please enter a numeric value.")?,
            }
        }
    }

    /// Like [`Self::number`] with `finite`, but an empty answer means zero.
    fn optional_number(&mut self, prompt: &str) -> Result<Option<f64>> {
        loop {
            let Some(text) = self.line(prompt)? else {
                return Ok(None);
            };
            if text.is_empty() {
                return Ok(Some(0.0));
            }
            match text.parse::<f64>() {
                Ok(v) if v.is_finite() => return Ok(Some(v)),
                _ => writeln!(self.writer, "Invalid input! Please enter a numeric value.")?,
            }
        }
    }
}

/// Outcome counts of one interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    /// Reports rendered.
    pub evaluations: usize,
    /// Inputs the engine refused (e.g., zero volatility before expiry).
    pub rejected: usize,
}

/// Run the collect → price → render loop until the operator stops.
///
/// # Errors
/// An invalid `config` is refused up front with
/// [`GreeksError::Config`](crate::GreeksError::Config). After that only
/// terminal I/O failures are errors; bad inputs and engine rejections
/// are reported to the operator and the session continues.
pub fn run_session<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    config: &ScenarioConfig,
) -> Result<SessionSummary> {
    config.validate()?;
    let mut collector = InputCollector::new(reader, writer).with_day_count(config.day_count)?;
    let mut summary = SessionSummary::default();

    #[cfg(feature = "logging")]
    tracing::debug!(day_count = config.day_count, "interactive session started");

    while let Some(spec) = collector.collect()? {
        match PricingEngine::new(spec) {
            Ok(engine) => {
                write!(collector.writer_mut(), "{}", render_summary(&engine))?;
                summary.evaluations += 1;
            }
            Err(e) => {
                writeln!(collector.writer_mut(), "Cannot price this option: {e}")?;
                summary.rejected += 1;
            }
        }
        if !collector.confirm("\nWould you like to calculate another option? (y/n): ")? {
            break;
        }
    }

    writeln!(
        collector.writer_mut(),
        "\nThank you for using the Black-Scholes Calculator!"
    )?;

    #[cfg(feature = "logging")]
    tracing::debug!(
        evaluations = summary.evaluations,
        rejected = summary.rejected,
        "interactive session finished"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect(input: &str) -> (Option<OptionSpec>, String) {
        let mut c = InputCollector::new(Cursor::new(input.to_string()), Vec::new());
        let spec = c.collect().unwrap();
        let (_, out) = c.into_inner();
        (spec, String::from_utf8(out).unwrap())
    }

    #[test]
    fn collects_and_converts_units() {
        let (spec, _) = collect("150\n155\n45\nd\n4.5\n25\n\nc\n");
        let spec = spec.unwrap();
        assert_eq!(spec.spot(), 150.0);
        assert_eq!(spec.strike(), 155.0);
        assert_eq!(spec.time_to_expiry(), 45.0 / 365.0);
        assert_eq!(spec.risk_free_rate(), 0.045);
        assert_eq!(spec.volatility(), 0.25);
        assert_eq!(spec.dividend_yield(), 0.0);
        assert_eq!(spec.kind(), OptionKind::Call);
    }

    #[test]
    fn years_unit_and_put() {
        let (spec, _) = collect("45\n50\n0.25\ny\n3.5\n15\n4\np\n");
        let spec = spec.unwrap();
        assert_eq!(spec.time_to_expiry(), 0.25);
        assert_eq!(spec.dividend_yield(), 0.04);
        assert_eq!(spec.kind(), OptionKind::Put);
    }

    #[test]
    fn unknown_kind_defaults_to_call() {
        let (spec, _) = collect("100\n100\n1\ny\n5\n20\n\nx\n");
        assert_eq!(spec.unwrap().kind(), OptionKind::Call);
    }

    #[test]
    fn reprompts_on_garbage_and_negative() {
        let (spec, out) = collect("abc\n-5\n100\n100\n1\ny\n5\n20\n\nc\n");
        assert_eq!(spec.unwrap().spot(), 100.0);
        assert!(out.contains("Please enter a numeric value"));
        assert!(out.contains("greater than zero"));
    }

    #[test]
    fn rejects_nan_text() {
        let (spec, out) = collect("100\nNaN\n100\n1\ny\n5\n20\n\nc\n");
        assert_eq!(spec.unwrap().strike(), 100.0);
        assert!(out.contains("greater than zero"));
    }

    #[test]
    fn quit_mid_prompt() {
        let (spec, _) = collect("100\nq\n");
        assert!(spec.is_none());
    }

    #[test]
    fn end_of_input_is_quit() {
        let (spec, _) = collect("100\n100\n");
        assert!(spec.is_none());
    }

    #[test]
    fn custom_day_count() {
        let mut c = InputCollector::new(Cursor::new("100\n100\n126\nd\n5\n20\n\nc\n"), Vec::new())
            .with_day_count(252.0)
            .unwrap();
        let spec = c.collect().unwrap().unwrap();
        assert_eq!(spec.time_to_expiry(), 0.5);
    }

    #[test]
    fn session_renders_then_stops() {
        let input = "100\n100\n1\ny\n5\n20\n\nc\nn\n";
        let mut out = Vec::new();
        let summary = run_session(Cursor::new(input), &mut out, &ScenarioConfig::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(summary.evaluations, 1);
        assert_eq!(summary.rejected, 0);
        assert!(text.contains("Price: $10.4506"));
        assert!(text.contains("Thank you for using the Black-Scholes Calculator!"));
    }

    #[test]
    fn session_reports_degenerate_and_continues() {
        // zero vol with a year left, then a valid put
        let input = "100\n100\n1\ny\n5\n0\n\nc\ny\n100\n100\n1\ny\n5\n20\n\np\nn\n";
        let mut out = Vec::new();
        let summary = run_session(Cursor::new(input), &mut out, &ScenarioConfig::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.evaluations, 1);
        assert!(text.contains("Cannot price this option: degenerate math"));
        assert!(text.contains("Option Type: PUT"));
    }

    #[test]
    fn session_on_empty_input() {
        let mut out = Vec::new();
        let summary = run_session(Cursor::new(""), &mut out, &ScenarioConfig::default()).unwrap();
        assert_eq!(summary, SessionSummary::default());
    }

    #[test]
    fn rejects_bad_day_count() {
        for day_count in [0.0, -365.0, f64::NAN] {
            let r = InputCollector::new(Cursor::new(""), Vec::new()).with_day_count(day_count);
            assert!(matches!(r, Err(crate::GreeksError::InvalidInput { .. })));
        }
    }

    #[test]
    fn session_refuses_invalid_config() {
        let config = ScenarioConfig {
            day_count: 0.0,
            ..ScenarioConfig::default()
        };
        let mut out = Vec::new();
        let r = run_session(Cursor::new("100\n100\n0\nd\n5\n20\n\nc\nn\n"), &mut out, &config);
        assert!(matches!(r, Err(crate::GreeksError::Config { .. })));
        assert!(out.is_empty());
    }

    #[test]
    fn refused_spec_reprompts_whole_form() {
        // a zero day count turns "0 d" into NaN years
        let mut c = InputCollector {
            reader: Cursor::new("100\n100\n0\nd\n5\n20\n\nc\n100\n100\n1\ny\n5\n20\n\nc\n"),
            writer: Vec::new(),
            day_count: 0.0,
        };
        let spec = c.collect().unwrap().unwrap();
        assert_eq!(spec.time_to_expiry(), 1.0);
        let (_, out) = c.into_inner();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Invalid input! invalid input: time_to_expiry"));
        assert_eq!(text.matches("INTERACTIVE BLACK-SCHOLES OPTIONS PRICING CALCULATOR").count(), 2);
    }

    #[test]
    fn refused_spec_then_quit() {
        let mut c = InputCollector {
            reader: Cursor::new("100\n100\n0\nd\n5\n20\n\nc\nq\n"),
            writer: Vec::new(),
            day_count: 0.0,
        };
        assert!(c.collect().unwrap().is_none());
    }
}
