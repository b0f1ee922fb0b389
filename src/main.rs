use std::env;

use passgen::{cli, exits};

fn main() {
    exits::install_handlers();

    if let Err(e) = cli::run(env::args_os().collect()) {
        cli::prompts::error(&e.to_string());
        std::process::exit(e.exit_code());
    }
}
