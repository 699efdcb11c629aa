// Command-line surface of `setup-devops`.
//
// There is a single mode of operation (the interactive install walk), so the
// CLI is a flat flag struct rather than subcommands.

use std::path::PathBuf;

use clap::Parser;

use crate::schemas::catalog::TargetOs;

#[derive(Parser)]
#[command(name = "setup-devops")]
#[command(about = "Interactive installer for a curated DevOps toolchain", long_about = None)]
pub struct Cli {
    /// Target OS; when given, the interactive OS prompt is skipped
    #[arg(long, value_enum)]
    pub os: Option<TargetOs>,

    /// Log every command instead of executing it
    #[arg(long)]
    pub dry_run: bool,

    /// Path of the append-only audit log
    #[arg(long, default_value = "installer.log")]
    pub log_file: PathBuf,

    /// Turn debugging information on
    #[arg(short, long)]
    pub debug: bool,
}
