use clap::Parser;
use elixdl_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Logging starts only once there is work to do, so usage touches nothing on disk.
    if let Err(err) = cli.run(logging::init) {
        eprintln!("elixdl error: {:#}", err);
        std::process::exit(1);
    }
}
