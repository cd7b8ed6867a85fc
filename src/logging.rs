use std::fmt::Debug;
use std::sync::{Mutex, RwLock};

use colored::{ColoredString, Colorize};
use serde::Serialize;
use thiserror::Error;

static LOG: RwLock<Output> = RwLock::new(Output::new(false, Verbosity::Normal));

pub fn init(stdout_json: bool, verbosity: Verbosity) {
    if let Ok(mut log) = LOG.write() {
        *log = Output::new(stdout_json, verbosity);
    }
}

pub fn get_verbosity() -> Verbosity {
    LOG.read().map(|l| l.verbosity).unwrap_or(Verbosity::Normal)
}

fn output_as_json() -> bool {
    LOG.read().map(|l| l.stdout_json).unwrap_or(false)
}

macro_rules! warning {
    ($($arg:tt)*) => {{
        let out = format!("WARN:\t{}", format_args!($($arg)*));
        $crate::logging::warn_str(&out)
    }};
}
pub(crate) use warning;

pub fn warn_str(str: &str) {
    if Verbosity::Quiet != get_verbosity() {
        eprintln!("{}", str.dimmed())
    }
}

macro_rules! info {
    ($($arg:tt)*) => {{
        let out = format!("INFO:\t{}", format_args!($($arg)*));
        $crate::logging::info_str(&out)
    }};
}
pub(crate) use info;

pub fn info_str(str: &str) {
    match get_verbosity() {
        Verbosity::Info | Verbosity::Debug | Verbosity::Trace => {
            eprintln!("{}", str.dimmed())
        }
        _ => {}
    }
}

macro_rules! debug {
    ($($arg:tt)*) => {{
        let out = format!("DEBUG:\t{}", format_args!($($arg)*));
        $crate::logging::debug_str(&out)
    }};
}
pub(crate) use debug;

pub fn debug_str(str: &str) {
    match get_verbosity() {
        Verbosity::Debug | Verbosity::Trace => {
            eprintln!("{}", str.dimmed())
        }
        _ => {}
    }
}

macro_rules! trace {
    ($($arg:tt)*) => {{
        let out = format!("TRACE:\t{}", format_args!($($arg)*));
        $crate::logging::trace_str(&out)
    }};
}
pub(crate) use trace;

pub fn trace_str(str: &str) {
    if get_verbosity() == Verbosity::Trace {
        eprintln!("{}", str.dimmed())
    }
}

#[derive(Debug, Error)]
pub enum StdoutError {
    #[error("Couldn't serialize stdout: {source}")]
    JSONConversionException { source: serde_json::Error },
}

pub fn stdoutln<T: Stdout>(out: T) -> Result<(), StdoutError> {
    if output_as_json() {
        let out_str = serde_json::to_string(&out)
            .map_err(|source| StdoutError::JSONConversionException { source })?;
        println!("{}", out_str);
    } else {
        println!("{}", out.standard(get_verbosity()));
    }
    Ok(())
}

pub fn println_stderr(msg: &str) {
    eprintln!("{}", msg);
}

pub fn err(err: anyhow::Error) {
    match get_verbosity() {
        Verbosity::Quiet | Verbosity::Normal => {
            eprintln!("{}", err);
        }
        Verbosity::Info | Verbosity::Debug | Verbosity::Trace => {
            eprintln!("{:?}", err);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verbosity {
    Normal,
    Quiet,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn new(verbosity: u8, quiet: bool) -> Self {
        if quiet {
            return Verbosity::Quiet;
        }
        match verbosity {
            0 => Verbosity::Normal,
            1 => Verbosity::Info,
            2 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }
}

#[derive(Clone)]
struct Output {
    verbosity: Verbosity,
    stdout_json: bool,
}

impl Output {
    const fn new(stdout_json: bool, verbosity: Verbosity) -> Self {
        Output {
            stdout_json,
            verbosity,
        }
    }
}

pub trait Message {
    fn standard(&self, verbosity: Verbosity) -> ColoredString;
}

pub trait Stdout: Serialize + Message {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Warn,
    Info,
    Debug,
    Trace,
}

/// Sink for the diagnostics emitted while fetching and aggregating prices.
///
/// Kept separate from the global stderr logger so the price pipeline can be
/// observed in tests without capturing the process output.
pub trait Diagnostics: Send + Sync {
    fn record(&self, level: Level, message: &str);
}

/// Forwards every diagnostic to the stderr logger, filtered by the current verbosity.
pub struct ConsoleDiagnostics;

impl Diagnostics for ConsoleDiagnostics {
    fn record(&self, level: Level, message: &str) {
        match level {
            Level::Warn => warn_str(&format!("WARN:\t{}", message)),
            Level::Info => info_str(&format!("INFO:\t{}", message)),
            Level::Debug => debug_str(&format!("DEBUG:\t{}", message)),
            Level::Trace => trace_str(&format!("TRACE:\t{}", message)),
        }
    }
}

/// Keeps diagnostics in memory, in emission order.
#[derive(Default)]
pub struct RecordedDiagnostics {
    entries: Mutex<Vec<(Level, String)>>,
}

impl RecordedDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries
            .lock()
            .map(|e| e.clone())
            .unwrap_or_default()
    }

    pub fn messages(&self, level: Level) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }
}

impl Diagnostics for RecordedDiagnostics {
    fn record(&self, level: Level, message: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((level, message.to_string()));
        }
    }
}
