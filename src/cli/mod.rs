//! Command-line mode.

mod args;
mod context;
pub mod prompts;
pub mod quiet;

use std::ffi::OsString;

use clap::Parser;

pub use args::Args;
pub use context::Context;

use crate::error::Result;
use crate::logging;

/// Parse `argv` and run. Usage errors, `--help` and `--version` exit inside clap.
pub fn run(argv: Vec<OsString>) -> Result<()> {
    let bare = argv.len() <= 1;
    let args = Args::parse_from(argv);

    let interactive = args.interactive || (bare && quiet::stdout_is_tty());
    // Log lines would tear the interactive screen.
    let default_directive = match (interactive, args.quiet) {
        (true, _) => "off",
        (false, true) => "error",
        (false, false) => "warn",
    };
    logging::init(default_directive);

    Context::new(args, interactive).run()
}
