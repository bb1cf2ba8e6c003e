use std::path::Path;

use colored::Colorize;
use snafu::Snafu;

use crate::{
    aggregate::{FlowLogError, aggregate},
    cli::{LogFormat, Opts},
    enrichment_tables::{LookupTableError, load_lookup_table},
    internal_events::PipelineFailed,
    report::{ReportError, write_report},
    trace,
};

/// Every failure exits with the same status.
pub const EXIT_FAILURE: exitcode::ExitCode = 1;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(transparent)]
    LookupTable { source: LookupTableError },
    #[snafu(transparent)]
    FlowLog { source: FlowLogError },
    #[snafu(transparent)]
    Report { source: ReportError },
}

pub struct Application {
    opts: Opts,
}

impl Application {
    pub fn prepare() -> Result<Self, exitcode::ExitCode> {
        let opts = Opts::get_matches()?;
        Ok(Self::prepare_from_opts(opts))
    }

    pub fn prepare_from_opts(opts: Opts) -> Self {
        let level = std::env::var("FLOWTAG_LOG").unwrap_or_else(|_| match opts.log_level() {
            "off" => "off".to_owned(),
            level => format!("flowtag={level}"),
        });

        let color = opts.color.use_color();
        colored::control::set_override(color);

        let json = match opts.log_format {
            LogFormat::Text => false,
            LogFormat::Json => true,
        };

        trace::init(opts.color.use_log_color(), json, &level);

        Self { opts }
    }

    pub fn run(self) -> exitcode::ExitCode {
        let output = &self.opts.output_file;

        match process(&self.opts.flow_log_file, &self.opts.lookup_file, output) {
            Ok(()) => {
                #[allow(clippy::print_stdout)]
                {
                    println!("Processing complete. Results saved to {}", output.display());
                }
                exitcode::OK
            }
            Err(error) => {
                emit!(PipelineFailed { error: &error });
                #[allow(clippy::print_stdout)]
                {
                    println!("{}", error.to_string().red());
                }
                EXIT_FAILURE
            }
        }
    }
}

/// Loads the lookup table, classifies the flow log and writes the report.
/// Each file is closed before the next phase starts.
pub fn process(flow_log: &Path, lookup: &Path, output: &Path) -> Result<(), Error> {
    let table = load_lookup_table(lookup)?;
    let counts = aggregate(flow_log, &table)?;
    write_report(counts, output)?;
    Ok(())
}
