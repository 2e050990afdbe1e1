//! GameShelf CLI: a thin terminal front end over the session controller.
//!
//! Every run bootstraps from the session file, so `login` once and the
//! other commands reuse the stored token until `logout`.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use gameshelf::prelude::*;
use gameshelf::Session;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "gameshelf")]
#[command(author, version, about = "Track your board game collection", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Service base URL (overrides GAMESHELF_API_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and remember the session
    Login {
        email: String,
        #[arg(short, long)]
        password: String,
    },

    /// Create an account and sign in
    Register {
        email: String,
        #[arg(short, long)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Collection, wishlist and play counts
    Stats,

    /// Search BoardGameGeek by title
    Search { query: String },

    /// Show one game by BGG id
    Game { bgg_id: i64 },

    /// Look up a game by barcode
    Barcode {
        code: String,
        /// Associate the barcode with this BGG id instead of looking it up
        #[arg(long)]
        associate: Option<i64>,
    },

    /// Manage your collection
    Collection {
        #[command(subcommand)]
        action: CollectionAction,
    },

    /// Manage your wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },

    /// Log and list plays
    Plays {
        #[command(subcommand)]
        action: PlayAction,
    },

    /// Browse another user's public shelves
    Public {
        #[command(subcommand)]
        action: PublicAction,
    },
}

#[derive(Subcommand)]
enum CollectionAction {
    /// List your collection
    List,
    /// Add a game by BGG id
    Add {
        bgg_id: i64,
        #[arg(long)]
        notes: Option<String>,
        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,
    },
    /// Update an entry
    Update {
        id: i64,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        tags: Option<String>,
        /// Flag the copy for sale or trade
        #[arg(long)]
        for_sale: Option<bool>,
        #[arg(long)]
        sale_notes: Option<String>,
    },
    /// Remove an entry
    Remove { id: i64 },
}

#[derive(Subcommand)]
enum WishlistAction {
    /// List your wishlist
    List,
    /// Add a game by BGG id
    Add {
        bgg_id: i64,
        #[arg(long)]
        priority: Option<i32>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Update an entry
    Update {
        id: i64,
        #[arg(long)]
        priority: Option<i32>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Remove an entry
    Remove { id: i64 },
}

#[derive(Subcommand)]
enum PlayAction {
    /// Record a play of a game by BGG id
    Log {
        bgg_id: i64,
        /// YYYY-MM-DD, defaults to today
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        rating: Option<i32>,
        #[arg(long)]
        players: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// List plays, or plays of one game by its internal id
    List {
        #[arg(long)]
        game_id: Option<i64>,
        #[arg(long)]
        skip: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
}

#[derive(Subcommand)]
enum PublicAction {
    /// Someone's collection
    Collection { username: String },
    /// Someone's wishlist
    Wishlist { username: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    gameshelf::init_logging_with("warn");
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), GameshelfError> {
    let mut builder = GameshelfBuilder::from_env()?;
    if let Some(url) = cli.base_url {
        builder = builder.base_url(url);
    }
    let session = builder.build()?;
    let out = Output(cli.format);

    // Account creation and public shelves don't depend on a prior session.
    if !matches!(cli.command, Commands::Register { .. } | Commands::Public { .. }) {
        session.bootstrap().await;
    }
    dispatch(&session, cli.command, out).await
}

async fn dispatch(session: &Session, command: Commands, out: Output) -> Result<(), GameshelfError> {
    let api = session.client();

    match command {
        Commands::Login { email, password } => {
            session.login(&email, &password).await?;
            whoami(session, out)?;
        }
        Commands::Register { email, password } => {
            session.register(&email, &password).await?;
            whoami(session, out)?;
        }
        Commands::Logout => {
            session.logout().await;
            out.line("signed out");
        }
        Commands::Whoami => whoami(session, out)?,
        Commands::Stats => {
            let stats = api.stats().await?;
            out.value(&stats, || {
                println!(
                    "{} in collection, {} wishlisted, {} plays",
                    stats.collection_count, stats.wishlist_count, stats.plays_count
                )
            })?;
        }
        Commands::Search { query } => {
            let results = api.search_games(&query).await?;
            out.value(&results, || {
                for r in &results {
                    let year = r.year_published.map(|y| format!(" ({y})")).unwrap_or_default();
                    println!("{:>8}  {}{year}", r.bgg_id, r.title);
                }
            })?;
        }
        Commands::Game { bgg_id } => {
            let game = api.game_details(BggId(bgg_id)).await?;
            out.value(&game, || {
                println!("{} [{}]", game.title, game.bgg_id);
                if let (Some(min), Some(max)) = (game.min_players, game.max_players) {
                    println!("players: {min}-{max}");
                }
                if let Some(publisher) = &game.publisher {
                    println!("publisher: {publisher}");
                }
            })?;
        }
        Commands::Barcode { code, associate } => {
            let value = match associate {
                Some(bgg_id) => api.associate_barcode(&code, BggId(bgg_id)).await?,
                None => api.barcode_lookup(&code).await?,
            };
            out.json(&value)?;
        }
        Commands::Collection { action } => match action {
            CollectionAction::List => out.collection(&api.collection().await?)?,
            CollectionAction::Add { bgg_id, notes, tags } => {
                let entry = api
                    .add_to_collection(&NewCollectionEntry {
                        game_id: BggId(bgg_id),
                        personal_notes: notes,
                        custom_tags: tags,
                    })
                    .await?;
                out.collection(std::slice::from_ref(&entry))?;
            }
            CollectionAction::Update {
                id,
                notes,
                tags,
                for_sale,
                sale_notes,
            } => {
                let update = CollectionUpdate {
                    personal_notes: notes,
                    custom_tags: tags,
                    for_sale_trade: for_sale,
                    sale_trade_notes: sale_notes,
                };
                let entry = api.update_collection_entry(EntryId(id), &update).await?;
                out.collection(std::slice::from_ref(&entry))?;
            }
            CollectionAction::Remove { id } => {
                api.delete_collection_entry(EntryId(id)).await?;
                out.line("removed");
            }
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::List => out.wishlist(&api.wishlist().await?)?,
            WishlistAction::Add {
                bgg_id,
                priority,
                notes,
            } => {
                let entry = api
                    .add_to_wishlist(&NewWishlistEntry {
                        game_id: BggId(bgg_id),
                        priority,
                        notes,
                    })
                    .await?;
                out.wishlist(std::slice::from_ref(&entry))?;
            }
            WishlistAction::Update { id, priority, notes } => {
                let entry = api
                    .update_wishlist_entry(EntryId(id), &WishlistUpdate { priority, notes })
                    .await?;
                out.wishlist(std::slice::from_ref(&entry))?;
            }
            WishlistAction::Remove { id } => {
                api.delete_wishlist_entry(EntryId(id)).await?;
                out.line("removed");
            }
        },
        Commands::Plays { action } => match action {
            PlayAction::Log {
                bgg_id,
                date,
                rating,
                players,
                notes,
            } => {
                let play = PlayData {
                    date,
                    rating,
                    players,
                    notes,
                    ..PlayData::default()
                };
                let logged = api.log_play(BggId(bgg_id), play).await?;
                out.value(&logged, || println!("logged play {} on {}", logged.id, logged.date))?;
            }
            PlayAction::List {
                game_id: Some(game_id),
                ..
            } => {
                let plays = api.plays_for_game(GameId(game_id)).await?;
                out.value(&plays, || {
                    for p in &plays {
                        println!("{}  {}", p.date, p.notes.as_deref().unwrap_or(""));
                    }
                })?;
            }
            PlayAction::List { skip, limit, .. } => {
                let plays = api.plays(Paging { skip, limit }).await?;
                out.value(&plays, || {
                    for p in &plays {
                        println!("{}  {}", p.session.date, p.game.title);
                    }
                })?;
            }
        },
        Commands::Public { action } => match action {
            PublicAction::Collection { username } => {
                out.collection(&api.public_collection(&username).await?)?
            }
            PublicAction::Wishlist { username } => {
                out.wishlist(&api.public_wishlist(&username).await?)?
            }
        },
    }
    Ok(())
}

fn whoami(session: &Session, out: Output) -> Result<(), GameshelfError> {
    let snapshot = session.snapshot();
    match snapshot.state.profile() {
        Some(profile) => out.value(profile, || println!("signed in as {}", profile.email)),
        None => {
            out.line("not signed in");
            Ok(())
        }
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

#[derive(Clone, Copy)]
struct Output(OutputFormat);

impl Output {
    /// Prints `value` as JSON, or runs `text` in text mode.
    fn value<T: Serialize>(self, value: &T, text: impl FnOnce()) -> Result<(), GameshelfError> {
        match self.0 {
            OutputFormat::Json => self.json(value),
            OutputFormat::Text => {
                text();
                Ok(())
            }
        }
    }

    fn json<T: Serialize>(self, value: &T) -> Result<(), GameshelfError> {
        let text = serde_json::to_string_pretty(value)
            .map_err(|e| GameshelfError::Config(format!("cannot render output: {e}")))?;
        println!("{text}");
        Ok(())
    }

    fn line(self, message: &str) {
        match self.0 {
            OutputFormat::Json => println!("{}", serde_json::json!({ "status": message })),
            OutputFormat::Text => println!("{message}"),
        }
    }

    fn collection(self, entries: &[CollectionEntry]) -> Result<(), GameshelfError> {
        self.value(&entries, || {
            for e in entries {
                let tags = e.tags().join(", ");
                let sale = if e.is_for_sale() { "  [for sale/trade]" } else { "" };
                println!("{:>6}  {}  {tags}{sale}", e.id, e.game.title);
            }
        })
    }

    fn wishlist(self, entries: &[WishlistEntry]) -> Result<(), GameshelfError> {
        self.value(&entries, || {
            for e in entries {
                let priority = e.priority.map(|p| format!("p{p}")).unwrap_or_default();
                println!("{:>6}  {}  {priority}", e.id, e.game.title);
            }
        })
    }
}
