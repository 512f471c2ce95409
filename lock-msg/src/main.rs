use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Path to npm project
    #[arg(long, short, default_value = ".")]
    dir: PathBuf,

    /// Commit message prefix
    #[arg(long, short, default_value = "chore", env = "LOCK_MSG_PREFIX")]
    prefix: String,

    /// Show git errors while fetching the HEAD lockfile
    #[arg(long, short, action)]
    errors: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_filter = if args.errors { "warn" } else { "error" };
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let (previous, current) = tokio::join!(
        lockdiff::load_previous(&args.dir),
        lockdiff::load_current(&args.dir),
    );
    let previous = previous?;
    let current = current?;

    let changes = lockdiff::diff(&previous, &current);
    print!("{}", lockdiff::commit_message(&args.prefix, &changes));

    Ok(())
}
