use buildsift_cli::structs::cli::Cli;
use buildsift_cli::workers::command_runner::CommandRunner;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    CommandRunner::new().run(cli).await?;
    Ok(())
}
