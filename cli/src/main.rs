mod commands;
mod terminal;

use commands::request::{Request, execute};
use commands::{CommandLine, Commands, seed};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init_logging(cfg.quiet);

    match commands.command {
        Commands::Seed { force } => {
            print::header("seeding catalog", cfg.quiet);
            seed::seed(&cfg, force).await
        }
        command => {
            let request = Request::try_from(command)?;
            print::header(&request.to_string(), cfg.quiet);
            let response = execute(&request, &cfg).await?;
            print::response(&response, &cfg);
            if !response.is_success() {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
