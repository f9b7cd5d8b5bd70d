use ariadne::Source;
use deriv_error::Error as ParseError;
use rustyline::error::ReadlineError;
use std::{fmt, io};

/// Utility enum to package errors that can occur while running the driver.
#[derive(Debug)]
pub enum Error {
    /// The input could not be parsed.
    Parse(ParseError),

    /// The line editor failed.
    Readline(ReadlineError),

    /// Standard input could not be read.
    Io(io::Error),
}

impl Error {
    /// Report this error to stderr.
    ///
    /// Parse errors are rendered as a report pointing into the given `input`.
    pub fn report_to_stderr(&self, input: &str) {
        match self {
            Self::Parse(err) => {
                let report = err.build_report("input");
                if let Err(err) = report.eprint(("input", Source::from(input))) {
                    eprintln!("failed to print error report: {}", err);
                }
            },
            err => eprintln!("{}", err),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "could not parse input: {:?}", err.kind),
            Self::Readline(err) => write!(f, "line editor error: {}", err),
            Self::Io(err) => write!(f, "could not read input: {}", err),
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<ReadlineError> for Error {
    fn from(err: ReadlineError) -> Self {
        Self::Readline(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
