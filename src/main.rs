mod cli;
mod commands;
mod installers;
mod libs;
mod logger;
mod schemas;

use clap::Parser;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Wire up the diagnostic channel first so every later component can use
    // the log_* macros, including debug tracing when --debug is passed.
    logger::init(cli.debug);

    // The installer never aborts on a per-tool failure; an error surfacing
    // here means the run itself could not proceed (e.g. the audit log is
    // unwritable or a prompt could not be displayed).
    if let Err(err) = commands::install::run(cli) {
        log_error!("Installer run failed: {err:#}");
        std::process::exit(1);
    }
}
