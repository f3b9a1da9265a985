use std::io::{self, Stdout, Write};

use tracing::debug;

use crate::config::{AssertConfig, Verbosity};
use crate::diagnostic::truncate;
use crate::error::Result;

const PASS_MARK: char = '.';
const FAIL_MARK: char = 'F';
const IGNORED_MARK: char = 'I';

/// Running counts of assertion outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub passed: u32,
    pub failed: u32,
    pub ignored: u32,
}

impl Tally {
    pub fn total(&self) -> u32 {
        self.passed + self.failed + self.ignored
    }

    /// No assertion failed (ignored failures don't count).
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Result of a single assertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertOutcome {
    pub passed: bool,
    /// The assertion failed but the context was configured to ignore failures.
    pub ignored: bool,
    /// Diagnostic for a failure, shaped by the configured verbosity.
    pub message: Option<String>,
}

/// Explicit state shared by a run of assertions.
///
/// Owns the configuration, the writer progress characters and failure
/// messages go to, and the running [`Tally`].
pub struct AssertContext<W: Write = Stdout> {
    config: AssertConfig,
    out: W,
    tally: Tally,
}

impl AssertContext<Stdout> {
    pub fn new(config: AssertConfig) -> Self {
        Self::with_writer(config, io::stdout())
    }
}

impl Default for AssertContext<Stdout> {
    fn default() -> Self {
        Self::new(AssertConfig::default())
    }
}

impl<W: Write> AssertContext<W> {
    pub fn with_writer(config: AssertConfig, out: W) -> Self {
        Self {
            config,
            out,
            tally: Tally::default(),
        }
    }

    pub fn config(&self) -> &AssertConfig {
        &self.config
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    /// Record an assertion verdict.
    ///
    /// On failure the message is built from `summary` and, at
    /// [`Verbosity::Detailed`], the text returned by `detail`; `detail` is
    /// not called otherwise. Writes the progress character, followed by the
    /// message on its own lines when there is one.
    pub fn record<F>(
        &mut self,
        name: &str,
        passed: bool,
        summary: &str,
        detail: F,
    ) -> Result<AssertOutcome>
    where
        F: FnOnce() -> Result<String>,
    {
        let message = if passed {
            None
        } else {
            match self.config.verbosity {
                Verbosity::Quiet => None,
                Verbosity::Normal => Some(summary.to_string()),
                Verbosity::Detailed => Some(format!("{summary}\n{}", detail()?)),
            }
        }
        .map(|message| truncate(&message, self.config.max_message_chars));

        let ignored = !passed && self.config.ignore_failures;
        let mark = if passed {
            self.tally.passed += 1;
            PASS_MARK
        } else if ignored {
            self.tally.ignored += 1;
            IGNORED_MARK
        } else {
            self.tally.failed += 1;
            FAIL_MARK
        };

        write!(self.out, "{mark}")?;
        if let Some(message) = &message {
            writeln!(self.out)?;
            writeln!(self.out, "{name}: {}", message.trim_end())?;
        }
        self.out.flush()?;

        debug!(name, passed, ignored, "assertion recorded");
        Ok(AssertOutcome {
            passed,
            ignored,
            message,
        })
    }

    /// Write a one-line summary of the tally.
    pub fn write_summary(&mut self) -> Result<()> {
        let Tally {
            passed,
            failed,
            ignored,
        } = self.tally;
        writeln!(self.out)?;
        writeln!(self.out, "{passed} passed, {failed} failed, {ignored} ignored")?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(config: AssertConfig) -> AssertContext<Vec<u8>> {
        AssertContext::with_writer(config, Vec::new())
    }

    fn output(ctx: AssertContext<Vec<u8>>) -> String {
        String::from_utf8(ctx.into_writer()).unwrap()
    }

    #[test]
    fn test_progress_marks_and_tally() {
        let mut ctx = context(AssertConfig {
            verbosity: Verbosity::Quiet,
            ..Default::default()
        });
        ctx.record("a", true, "", || Ok(String::new())).unwrap();
        ctx.record("b", false, "boom", || Ok(String::new())).unwrap();
        ctx.record("c", true, "", || Ok(String::new())).unwrap();
        assert_eq!(
            ctx.tally(),
            Tally {
                passed: 2,
                failed: 1,
                ignored: 0
            }
        );
        assert!(!ctx.tally().all_passed());
        assert_eq!(output(ctx), ".F.");
    }

    #[test]
    fn test_detail_only_rendered_when_detailed() {
        let mut ctx = context(AssertConfig::default());
        let outcome = ctx
            .record("check", false, "summary", || -> Result<String> {
                panic!("detail must not be rendered")
            })
            .unwrap();
        assert_eq!(outcome.message.as_deref(), Some("summary"));
        assert_eq!(output(ctx), "F\ncheck: summary\n");
    }

    #[test]
    fn test_ignored_failures() {
        let mut ctx = context(AssertConfig {
            ignore_failures: true,
            ..AssertConfig::detailed()
        });
        let outcome = ctx
            .record("check", false, "summary", || Ok("detail".to_string()))
            .unwrap();
        assert!(outcome.ignored);
        assert_eq!(outcome.message.as_deref(), Some("summary\ndetail"));
        assert!(ctx.tally().all_passed());
        assert_eq!(ctx.tally().total(), 1);
    }

    #[test]
    fn test_summary_line() {
        let mut ctx = context(AssertConfig::default());
        ctx.record("ok", true, "", || Ok(String::new())).unwrap();
        ctx.write_summary().unwrap();
        assert_eq!(output(ctx), ".\n1 passed, 0 failed, 0 ignored\n");
    }
}
