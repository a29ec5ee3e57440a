use std::{ffi::OsString, io::Write};

use clap::{Parser, error::ErrorKind};
use metaweather_core::{Failure, Transport, WeatherClient};
use tracing::debug;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "metaweather", version, about = "Print current weather for a place name")]
pub struct Cli {
    /// Place name to search for, e.g. "London".
    #[arg(allow_hyphen_values = true)]
    pub location: String,
}

impl Cli {
    /// Parse process arguments.
    ///
    /// Exactly one argument after the program name is accepted; `--` counts
    /// as an argument. `Ok(None)` means clap already printed help or version
    /// text. Any other argument problem is [`Failure::InvalidInput`].
    pub fn try_from_args<I, A>(args: I) -> Result<Option<Self>, Failure>
    where
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if args.len() != 2 {
            debug!(count = args.len().saturating_sub(1), "expected exactly one argument");
            return Err(Failure::InvalidInput);
        }

        match Self::try_parse_from(args) {
            Ok(cli) => Ok(Some(cli)),
            Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                err.print().map_err(|e| Failure::Internal(e.to_string()))?;
                Ok(None)
            }
            Err(err) => {
                debug!(kind = ?err.kind(), "rejected command-line arguments");
                Err(Failure::InvalidInput)
            }
        }
    }

    /// Look up the weather and write the report line to `out`.
    pub async fn run<T, W>(self, client: &WeatherClient<T>, out: &mut W) -> Result<(), Failure>
    where
        T: Transport,
        W: Write,
    {
        let report = client.report_for(&self.location).await?;

        writeln!(out, "{report}")
            .map_err(|e| Failure::Internal(format!("failed to write report: {e}")))?;

        Ok(())
    }
}

/// Parse `args` and, when they name a place, print its weather to `out`.
///
/// `connect` is only called once the arguments are known to be valid.
pub async fn execute<I, A, F, T, W>(args: I, connect: F, out: &mut W) -> Result<(), Failure>
where
    I: IntoIterator<Item = A>,
    A: Into<OsString>,
    F: FnOnce() -> Result<WeatherClient<T>, Failure>,
    T: Transport,
    W: Write,
{
    let Some(cli) = Cli::try_from_args(args)? else {
        return Ok(());
    };

    let client = connect()?;
    cli.run(&client, out).await
}
