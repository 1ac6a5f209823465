use clap::Parser;
use redditwc::cli::{self, Config, Runner};

#[tokio::main]
async fn main() {
    let config = Config::parse();

    env_logger::Builder::new()
        .filter_level(config.verbosity().log_level_filter())
        .init();

    match Runner::new(config) {
        Ok(runner) => runner.run().await,
        Err(err) => cli::die(1, &err.to_string()),
    }
}
