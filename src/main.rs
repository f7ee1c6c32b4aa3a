use clap::Parser;
use dotenv::dotenv;
use std::process::exit;

use sectioned_rolodex::prelude::{Cli, init_logger, run_app};

fn main() {
    dotenv().ok();

    let cli = Cli::parse();
    init_logger(&cli.log_level);

    if let Err(e) = run_app(cli) {
        eprintln!("Error: {e}");
        exit(1);
    }
}
