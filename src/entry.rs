//! Process entry: argument parsing, config application, runtime setup.
use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::CliArgs;
use crate::config::{apply_config, load_config};
use crate::dispatch::{self, DispatchTarget};
use crate::error::AppResult;
use crate::logger;

/// Parses arguments, applies any config file, and runs the dispatch.
///
/// # Errors
///
/// Returns an error when the config file is invalid, the runtime cannot
/// be built, or the dispatch itself fails to start. Per-request failures
/// are counted, not returned, so a run with failures still exits 0.
pub fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;
    logger::init_logging(args.verbose, args.no_color);

    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, &matches, config)?;
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(&args))
}

fn parse_args() -> AppResult<(CliArgs, ArgMatches)> {
    let matches = CliArgs::command().get_matches();
    let args = CliArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

async fn run_async(args: &CliArgs) -> AppResult<()> {
    let target = DispatchTarget {
        host: args.host.clone(),
        port: args.port,
        path: args.path.clone(),
    };
    let summary = dispatch::run(&target, args.count, args.timeout).await?;
    tracing::debug!(
        "run complete: total={}, succeeded={}, failed={}",
        summary.total,
        summary.succeeded,
        summary.failed
    );
    Ok(())
}
