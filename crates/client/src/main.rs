//! `watchlist` -- terminal front end for the movie watchlist API.
//!
//! # Environment variables
//!
//! | Variable            | Default                                  |
//! |---------------------|------------------------------------------|
//! | `WATCHLIST_API_URL` | `http://localhost:5000/records`          |
//! | `RUST_LOG`          | `watchlist_client=warn`                  |

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use watchlist_client::api::WatchlistApi;
use watchlist_client::filter::Filter;
use watchlist_client::form::FormField;
use watchlist_client::render::render_view;
use watchlist_client::session::WatchlistSession;

const DEFAULT_API_URL: &str = "http://localhost:5000/records";

#[derive(Debug, Parser)]
#[command(name = "watchlist", version, about = "Track a personal movie watchlist")]
struct Cli {
    /// Records collection URL of the watchlist server.
    #[arg(long, env = "WATCHLIST_API_URL", default_value = DEFAULT_API_URL, global = true)]
    api_url: String,

    /// Which records to show: all, watched or toWatch.
    #[arg(long, short, default_value = "all", global = true)]
    filter: Filter,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the watchlist (default).
    List,
    /// Add a movie.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        genre: String,
        #[arg(long)]
        year: String,
        /// Mark as already watched.
        #[arg(long)]
        watched: bool,
    },
    /// Edit a movie; omitted fields keep their current value.
    Edit {
        id: Uuid,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        genre: Option<String>,
        #[arg(long)]
        year: Option<String>,
        #[arg(long)]
        watched: Option<bool>,
    },
    /// Delete a movie.
    Delete { id: Uuid },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "watchlist_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut session = WatchlistSession::new(WatchlistApi::new(cli.api_url));
    session.set_filter(cli.filter);
    session.load().await?;

    match cli.command.unwrap_or(Command::List) {
        Command::List => {}
        Command::Add {
            title,
            genre,
            year,
            watched,
        } => {
            session.change_field(FormField::Title(title));
            session.change_field(FormField::Genre(genre));
            session.change_field(FormField::Year(year));
            session.change_field(FormField::Watched(watched));
            let saved = session.submit().await?;
            println!("Added {} ({})", saved.title, saved.id);
        }
        Command::Edit {
            id,
            title,
            genre,
            year,
            watched,
        } => {
            session.select(id)?;
            let fields = [
                title.map(FormField::Title),
                genre.map(FormField::Genre),
                year.map(FormField::Year),
                watched.map(FormField::Watched),
            ];
            for field in fields.into_iter().flatten() {
                session.change_field(field);
            }
            let saved = session.submit().await?;
            println!("Updated {} ({})", saved.title, saved.id);
        }
        Command::Delete { id } => {
            session.delete(id).await?;
            println!("Deleted {id}");
        }
    }

    print!("{}", render_view(session.state()));
    Ok(())
}
