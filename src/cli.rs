use std::{io::IsTerminal, path::PathBuf};

use clap::{Parser, ValueEnum, error::ErrorKind};

/// One-line usage printed for any argument error.
pub const USAGE: &str = "Usage: flowtag <flow_log_file> <lookup_file> <output_file>";

#[derive(Parser, Debug)]
#[command(rename_all = "kebab-case", version, about)]
pub struct Opts {
    /// Flow log to classify. One record per line, whitespace separated,
    /// with the destination port at index 6 and the protocol number at index 7.
    pub flow_log_file: PathBuf,

    /// Lookup table in CSV form. The first row is a header; each following
    /// row is `dstport,protocol,tag`.
    pub lookup_file: PathBuf,

    /// Where the report is written. Created or truncated.
    pub output_file: PathBuf,

    /// Enable more detailed internal logging. Repeat to increase level. Overridden by `--quiet`.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Reduce detail of internal logging. Repeat to reduce further. Overrides `--verbose`.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Set the logging format
    #[arg(long, default_value = "text", env = "FLOWTAG_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Control when ANSI terminal formatting is used.
    ///
    /// `auto` enables it only when the output is a terminal.
    #[arg(long, default_value = "auto", env = "FLOWTAG_COLOR")]
    pub color: Color,
}

impl Opts {
    /// Parses the process arguments.
    ///
    /// Help and version requests exit through clap as usual. Every other
    /// argument problem prints the usage line to stdout and is returned as
    /// an exit code.
    pub fn get_matches() -> Result<Self, exitcode::ExitCode> {
        Self::parse_from_args(std::env::args_os())
    }

    pub fn parse_from_args<I, T>(args: I) -> Result<Self, exitcode::ExitCode>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(opts) => Ok(opts),
            Err(error)
                if matches!(
                    error.kind(),
                    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
                ) =>
            {
                error.exit()
            }
            Err(_) => {
                #[allow(clippy::print_stdout)]
                {
                    println!("{USAGE}");
                }
                Err(1)
            }
        }
    }

    pub const fn log_level(&self) -> &'static str {
        match self.quiet {
            0 => match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                3..=255 => "trace",
            },
            1 => "error",
            2..=255 => "off",
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Auto,
    Always,
    Never,
}

impl Color {
    /// Whether diagnostics printed on stdout are coloured.
    pub fn use_color(&self) -> bool {
        self.enabled_for(std::io::stdout().is_terminal())
    }

    /// Whether internal logs, which go to stderr, are coloured.
    pub fn use_log_color(&self) -> bool {
        self.enabled_for(std::io::stderr().is_terminal())
    }

    const fn enabled_for(&self, is_terminal: bool) -> bool {
        match self {
            Color::Auto => is_terminal,
            Color::Always => true,
            Color::Never => false,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}
