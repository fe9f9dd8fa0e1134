use clap::{Parser, Subcommand};
use dialoguer::Confirm;
use dotenvy::dotenv;
use unilink_db::{MIGRATOR, PgAccountStore, init_db_pool};

#[derive(Parser)]
#[command(name = "unilink-cli")]
#[command(about = "Unilink CLI - Administrative tools for Unilink", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Grant or revoke the admin flag on an account
    SetAdmin {
        /// Email address of the account
        #[arg(short = 'e', long)]
        email: String,

        /// Revoke admin instead of granting it
        #[arg(long)]
        revoke: bool,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("\n❌ {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;
    let pool = init_db_pool(&database_url).await?;

    match cli.command {
        Commands::Migrate => {
            MIGRATOR.run(&pool).await?;
            println!("✅ Migrations applied");
        }
        Commands::SetAdmin { email, revoke, yes } => {
            let action = if revoke { "Revoke admin from" } else { "Grant admin to" };
            if !yes
                && !Confirm::new()
                    .with_prompt(format!("{action} {email}?"))
                    .default(false)
                    .interact()?
            {
                println!("Aborted");
                return Ok(());
            }

            let store = PgAccountStore::new(pool);
            let user = unilink_cli::set_admin(&store, &email, !revoke).await?;
            println!("\n✅ {} is {}an admin", user.email, if user.admin { "" } else { "no longer " });
        }
    }

    Ok(())
}
