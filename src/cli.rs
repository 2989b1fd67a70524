use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "dirtree",
    version,
    about = "Print an indented directory tree",
    after_help = "Directories named .git, __pycache__, node_modules, .venv and venv are skipped.\n\
                  Set RUST_LOG=debug to see what was skipped."
)]
pub struct Args {
    /// Directory to print (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}
