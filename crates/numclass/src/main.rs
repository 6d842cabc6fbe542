use crate::prelude::*;
use clap::Parser;

mod error;
mod prelude;
mod server;
mod trivia;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Classify integers over HTTP and attach a trivia fact to each one"
)]
pub struct App {
    #[clap(flatten)]
    pub serve: crate::server::ServeOptions,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to log every classification served.
    #[clap(long, env = "NUMCLASS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    color_eyre::install()?;

    let app = App::parse();

    crate::server::run(app.serve, app.global).await
}
