use anyhow::Result;
use clap::Parser;

mod commands;
use commands::{execute_list_command, execute_serve_command, ServeArgs};

#[derive(Parser)]
#[command(name = "snake-server")]
#[command(about = "Battlesnake adapter server - exposes a snake over HTTP")]
#[command(version)]
pub struct Cli {
    /// Snake to serve: a registered name, or a path whose file name is one
    #[arg(required_unless_present = "list")]
    pub snake: Option<String>,
    /// Port to listen on (all interfaces)
    #[arg(
        required_unless_present = "list",
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub port: Option<u16>,
    /// List the registered snakes and exit
    #[arg(long)]
    pub list: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list {
        return execute_list_command();
    }

    match (cli.snake, cli.port) {
        (Some(snake), Some(port)) => execute_serve_command(ServeArgs { snake, port }).await,
        _ => anyhow::bail!("both <SNAKE> and <PORT> are required"),
    }
}
