//! See <https://github.com/matklad/cargo-xtask/>
//!
//! This binary defines auxiliary infrastructure commands which are not
//! expressible with just `cargo`.

use clap::Parser;

mod dynamodb;
mod prelude;

/// Development tasks for the viewfinder repository
#[derive(Debug, Parser)]
#[command(name = "xtask")]
#[command(about = "Development tasks for viewfinder", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: Global,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Silence the command output
    #[clap(long, global = true)]
    pub silent: bool,
}

impl Global {
    pub fn is_silent(&self) -> bool {
        self.silent
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Manage DynamoDB infrastructure
    Dynamodb(dynamodb::DynamodbCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Dynamodb(command) => dynamodb::run(command, cli.global).await?,
    }

    Ok(())
}
