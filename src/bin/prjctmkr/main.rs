//! prjctmkr CLI - compiles .c files in nested folders

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod help;

use cli::Cli;
use prjctmkr::builder::{BuildContext, ProcessCompiler};
use prjctmkr::core::Request;
use prjctmkr::ops::run_operation;
use prjctmkr::util::Config;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("prjctmkr=debug")
    } else {
        EnvFilter::new("prjctmkr=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.operation.unwrap_or(Request::Help) {
        Request::Help => print!("{}", help::help_text()),
        Request::Structure => print!("{}", help::structure_text()),
        Request::Operation(operation) => {
            let config = Config::load(cli.compiler.as_deref())?;
            let ctx = BuildContext::from_cwd(config, cli.shell())?;
            tracing::debug!("project root: {}", ctx.root().display());

            let mut compiler = ProcessCompiler::new();
            run_operation(&ctx, &mut compiler, operation, cli.files)?;
        }
    }

    Ok(())
}
