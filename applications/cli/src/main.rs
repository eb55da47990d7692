/// Playlister - interactive playlist editor
use anyhow::Context;
use clap::{Parser, Subcommand};
use playlister_cli::{demo, repl, CliConfig};
use playlister_client::StoreClient;
use playlister_core::{ActingUser, PlaylistId, PlaylistService};
use playlister_edit::PlaylistEditor;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "playlister")]
#[command(about = "Edit Playlister playlists with undo and redo", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./playlister.toml)
    #[arg(short, long, global = true, env = "PLAYLISTER_CONFIG")]
    config: Option<PathBuf>,

    /// Use a seeded in-memory store instead of the remote one
    #[arg(long, global = true)]
    demo: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a playlist in the interactive editor
    Edit {
        /// Playlist id (optional with --demo)
        playlist_id: Option<String>,
    },
    /// List the configured user's playlists
    Playlists,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref())?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let (service, user, demo_playlist) = connect(&config, cli.demo)?;

    match cli.command {
        Commands::Edit { playlist_id } => {
            let playlist = match (playlist_id, demo_playlist) {
                (Some(id), _) => PlaylistId::new(id),
                (None, Some(id)) => id,
                (None, None) => anyhow::bail!("A playlist id is required"),
            };
            edit(service, user, playlist).await?;
        }
        Commands::Playlists => {
            list_playlists(service.as_ref(), &user).await?;
        }
    }

    Ok(())
}

/// Pick the store to talk to and the user acting on it
fn connect(
    config: &CliConfig,
    demo: bool,
) -> anyhow::Result<(Arc<dyn PlaylistService>, ActingUser, Option<PlaylistId>)> {
    if demo {
        let user = if config.user.email.trim().is_empty() {
            ActingUser::new("demo", "demo@playlister.local")
        } else {
            config.acting_user()
        };
        let (store, playlist) = demo::seed(&user);
        tracing::info!("Using in-memory demo store");
        let service: Arc<dyn PlaylistService> = store;
        return Ok((service, user, Some(playlist)));
    }

    config.validate()?;
    let client = StoreClient::new(config.store_config())
        .with_context(|| format!("Cannot use store at {}", config.service.url))?;
    tracing::info!(url = %config.service.url, "Using remote store");

    let service: Arc<dyn PlaylistService> = Arc::new(client);
    Ok((service, config.acting_user(), None))
}

async fn edit(
    service: Arc<dyn PlaylistService>,
    user: ActingUser,
    playlist: PlaylistId,
) -> anyhow::Result<()> {
    let mut editor = PlaylistEditor::open(service, user, playlist.clone())
        .await
        .with_context(|| format!("Cannot open playlist {}", playlist))?;

    println!("Editing playlist {} (type 'help' for commands)", playlist);

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    repl::run(&mut editor, stdin, &mut stdout).await?;

    editor.close();
    Ok(())
}

async fn list_playlists(service: &dyn PlaylistService, user: &ActingUser) -> anyhow::Result<()> {
    let playlists = service.list_playlists_owned_by(&user.email).await?;

    if playlists.is_empty() {
        println!("No playlists for {}", user.email);
        return Ok(());
    }

    println!("Playlists of {}:", user.email);
    for playlist in playlists {
        println!("  {} - {}", playlist.id, playlist.name);
    }

    Ok(())
}
