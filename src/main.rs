use std::io;

use anyhow::Result;
use tracing::info;

use plateau_cli::Shell;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("plateau starting");

    let mut shell = Shell::new(io::stdout().lock())?;
    shell.run(io::stdin().lock())?;
    Ok(())
}
