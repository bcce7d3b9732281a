use std::process;

use room_token::cli;
use room_token::helpers::{print_error, print_output, Layout};
use room_token::TokenError;

fn run() -> Result<(), TokenError> {
    let matches = cli::quick_app().get_matches();
    let format = matches.value_of("format").unwrap_or("text");

    // Checked before any configuration so a bare invocation never signs.
    let participant = cli::participant_from_matches(&matches)?;
    let config = cli::config_from_matches(&matches)?;
    let output = cli::run_single(&config, &participant, matches.value_of("name"))?;
    print_output(format, Layout::Single, &output)
}

fn main() {
    room_token::init_tracing();

    if let Err(e) = run() {
        print_error(&e);
        process::exit(1);
    }
}
