use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mount_links::{router, ScriptName};

#[derive(Debug, Parser)]
#[command(name = "mount-links")]
#[command(about = "Demo page for mount-aware links", long_about = None)]
struct Cli {
    /// Address to listen on.
    #[arg(long, env = "MOUNT_LINKS_BIND", default_value = "127.0.0.1:3000")]
    bind: String,

    /// Entry script path the app is served from, e.g. /centre/public/index.php.
    #[arg(long, env = "SCRIPT_NAME")]
    script_name: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mount_links=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    tracing::info!(
        bind = %cli.bind,
        script_name = cli.script_name.as_deref().unwrap_or(""),
        "configuration loaded"
    );

    let app = router(cli.script_name.map(ScriptName::new));

    let listener = tokio::net::TcpListener::bind(&cli.bind)
        .await
        .with_context(|| format!("binding {}", cli.bind))?;
    tracing::info!(address = %listener.local_addr()?, "listening");

    axum::serve(listener, app).await?;
    Ok(())
}
