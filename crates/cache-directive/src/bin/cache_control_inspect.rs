//! Inspector CLI that prints a parsed `Cache-Control` value as JSON.
//!
//! This binary delegates to `cache_directive::inspect_cli` for argument
//! parsing and rendering. Set `RUST_LOG=cache_directive=debug` to see why a
//! value was rejected.

use std::io::{self, Write};
use std::process::ExitCode;

use cache_directive::inspect_cli::{CliError, ParseOutcome, parse_args, render};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    match parse_args(std::env::args().skip(1))? {
        ParseOutcome::Help => {
            print_usage(io::stdout().lock());
            Ok(())
        }
        ParseOutcome::Options(options) => {
            let rendered = render(&options)?;
            write_output(&rendered);
            Ok(())
        }
    }
}

fn print_usage(mut out: impl Write) {
    let usage = concat!(
        "Usage: cache-control-inspect --value <header-value> [options]\n",
        "\n",
        "Options:\n",
        "  --value <v>     Cache-Control header value to parse\n",
        "  --request       Apply request directive rules\n",
        "  --response      Apply response directive rules (default)\n",
        "  --pretty        Pretty-print the JSON output\n",
        "  -h, --help      Print this help output\n",
    );
    if let Err(err) = out.write_all(usage.as_bytes()) {
        drop(err);
    }
}

fn write_output(rendered: &str) {
    if let Err(err) = writeln!(io::stdout().lock(), "{rendered}") {
        drop(err);
    }
}
