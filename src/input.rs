//! Typed console input with prompt/retry semantics.
//!
//! Every operation prints a descriptive prompt, reads one line, and trims
//! whitespace. An empty trimmed line (or end of input) is "absence" and comes
//! back as `None`; callers decide whether absence is acceptable. Parse
//! failures for numeric and date input are reported to the user and retried
//! until the line parses or the user gives up with an empty line; they are
//! never surfaced as errors.
//!
//! The reader owns its line source and prompt sink, so tests drive it with
//! in-memory buffers and concurrent sessions would each hold their own
//! reader. Nothing here is process-global.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use chrono::NaiveDate;

/// Alert printed when integer input fails to parse.
const INTEGER_ALERT: &str = "ALERT: Number expected!";
/// Alert printed when decimal input fails to parse.
const DECIMAL_ALERT: &str = "ALERT: Decimal number expected!";
/// Alert printed when date input fails to parse.
const DATE_ALERT: &str = "ALERT: Date expected (YYYY-MM-DD)!";

/// The closed set of input kinds the front-end knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Char,
    Integer,
    Decimal,
    Date,
}

/// A parsed value tagged with its kind, produced by [`InputReader::read_typed`].
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    Text(String),
    Char(char),
    Integer(i64),
    Decimal(f64),
    Date(NaiveDate),
}

/// Blocking line-oriented reader over an input source and a prompt sink.
#[derive(Debug)]
pub struct InputReader<R, W> {
    source: R,
    prompts: W,
}

impl InputReader<StdinLock<'static>, Stdout> {
    /// Reader bound to the process stdin/stdout pair.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> InputReader<R, W> {
    pub fn new(source: R, prompts: W) -> Self {
        Self { source, prompts }
    }

    /// Read a non-empty trimmed line. `None` when the user enters nothing.
    pub fn read_string(&mut self, prompt: &str) -> io::Result<Option<String>> {
        Ok(self.prompt_line(prompt)?.filter(|line| !line.is_empty()))
    }

    /// Read the first character of a non-empty trimmed line.
    pub fn read_char(&mut self, prompt: &str) -> io::Result<Option<char>> {
        Ok(self
            .prompt_line(prompt)?
            .and_then(|line| line.chars().next()))
    }

    /// Read a base-10 integer, re-prompting on parse failure.
    ///
    /// Retries indefinitely on malformed input; only an empty line (or end of
    /// input) ends the loop without a value.
    pub fn read_integer(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        self.read_retrying(prompt, INTEGER_ALERT, |line| line.parse::<i64>().ok())
    }

    /// Read a decimal number, re-prompting on parse failure.
    pub fn read_decimal(&mut self, prompt: &str) -> io::Result<Option<f64>> {
        self.read_retrying(prompt, DECIMAL_ALERT, |line| line.parse::<f64>().ok())
    }

    /// Read an ISO `YYYY-MM-DD` date, re-prompting on parse failure.
    pub fn read_date(&mut self, prompt: &str) -> io::Result<Option<NaiveDate>> {
        self.read_retrying(prompt, DATE_ALERT, |line| {
            NaiveDate::parse_from_str(line, "%Y-%m-%d").ok()
        })
    }

    /// Read a value of the requested kind.
    ///
    /// The kind set is a closed enum, so there is no "unsupported kind" path:
    /// every kind dispatches to a dedicated validated reader.
    pub fn read_typed(&mut self, prompt: &str, kind: InputKind) -> io::Result<Option<TypedValue>> {
        Ok(match kind {
            InputKind::Text => self.read_string(prompt)?.map(TypedValue::Text),
            InputKind::Char => self.read_char(prompt)?.map(TypedValue::Char),
            InputKind::Integer => self.read_integer(prompt)?.map(TypedValue::Integer),
            InputKind::Decimal => self.read_decimal(prompt)?.map(TypedValue::Decimal),
            InputKind::Date => self.read_date(prompt)?.map(TypedValue::Date),
        })
    }

    /// Prompt once and read one trimmed line. `None` only at end of input.
    fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.prompts, "{prompt}: ")?;
        self.prompts.flush()?;
        let mut line = String::new();
        let read = self.source.read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Shared prompt/parse/alert loop for the validating readers.
    fn read_retrying<T>(
        &mut self,
        prompt: &str,
        alert: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            if line.is_empty() {
                return Ok(None);
            }
            match parse(&line) {
                Some(value) => return Ok(Some(value)),
                None => writeln!(self.prompts, "{alert}")?,
            }
        }
    }
}
