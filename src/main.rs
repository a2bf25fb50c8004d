use env_logger::Env;

mod cli;
mod config;
mod gateways;
mod shell;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    cli::run()
}
