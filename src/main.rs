use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use tastemix::{
    cli::{self, GenerateMode, PreferenceEdit},
    config, error,
    preferences::PopularityRange,
    types::PkceToken,
    utils,
};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Search the catalog for artists or tracks
    Search(SearchOptions),

    /// Show or edit taste preferences
    Prefs(PrefsOptions),

    /// List the available genres
    Genres(GenresOptions),

    /// Generate a new playlist from the preferences
    Generate,

    /// Generate again, replacing the current playlist
    Refresh,

    /// Generate again and append tracks not yet in the playlist
    More,

    /// Show the current playlist
    Show,

    /// Search a track and add it to the current playlist
    Add(PickOptions),

    /// Remove a track from the current playlist
    Remove(TrackIdOption),

    /// Toggle a track in the favorites
    Favorite(TrackIdOption),

    /// List favorite tracks
    Favorites,

    /// Save the current playlist to Spotify
    Save(SaveOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    #[command(subcommand)]
    pub command: SearchSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum SearchSubcommand {
    /// Search artists by name (10 results)
    Artists { query: String },
    /// Search tracks (5 results)
    Tracks { query: String },
}

#[derive(Parser, Debug, Clone)]
pub struct PrefsOptions {
    /// Defaults to `show`
    #[command(subcommand)]
    pub command: Option<PrefsSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum PrefsSubcommand {
    /// Show the current preferences
    Show,
    /// Reset all preferences to their defaults
    Clear,
    /// Select or deselect artists
    #[command(subcommand)]
    Artist(PickedFacet),
    /// Select or deselect genres
    #[command(subcommand)]
    Genre(ValueFacet),
    /// Select or deselect decades (e.g. 1990)
    #[command(subcommand)]
    Decade(ValueFacet),
    /// Select or deselect seed tracks
    #[command(subcommand)]
    Track(PickedFacet),
    /// Set the popularity range as MIN-MAX or viral, hits, niche, all
    Popularity {
        #[clap(value_parser = utils::parse_popularity_range)]
        range: PopularityRange,
    },
    /// Toggle a mood preset: happy, sad, energetic, calm, party, focus
    Mood {
        #[clap(required_unless_present = "clear")]
        preset: Option<String>,
        /// Remove the mood filter
        #[clap(long, conflicts_with = "preset")]
        clear: bool,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum PickedFacet {
    /// Search and select a result
    Add(PickOptions),
    /// Deselect by id or name
    Remove { key: String },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ValueFacet {
    Add { value: String },
    Remove { value: String },
}

#[derive(Parser, Debug, Clone)]
pub struct PickOptions {
    /// Search query
    pub query: String,
    /// Which search result to take (1-based)
    #[clap(long, default_value_t = 1)]
    pub pick: usize,
}

#[derive(Parser, Debug, Clone)]
pub struct GenresOptions {
    /// Only genres containing this text
    #[clap(long)]
    pub filter: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct TrackIdOption {
    /// Spotify track id
    pub track_id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct SaveOptions {
    /// Playlist name
    #[clap(long)]
    pub name: Option<String>,
    /// Make the playlist public (private by default)
    #[clap(long)]
    pub public: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Search(opt) => match opt.command {
            SearchSubcommand::Artists { query } => cli::search_artists(query).await,
            SearchSubcommand::Tracks { query } => cli::search_tracks(query).await,
        },
        Command::Prefs(opt) => match opt.command.unwrap_or(PrefsSubcommand::Show) {
            PrefsSubcommand::Show => cli::show_preferences().await,
            PrefsSubcommand::Clear => cli::clear_preferences().await,
            PrefsSubcommand::Artist(facet) => cli::edit_preferences(match facet {
                PickedFacet::Add(p) => PreferenceEdit::AddArtist {
                    query: p.query,
                    pick: p.pick,
                },
                PickedFacet::Remove { key } => PreferenceEdit::RemoveArtist(key),
            })
            .await,
            PrefsSubcommand::Genre(facet) => cli::edit_preferences(match facet {
                ValueFacet::Add { value } => PreferenceEdit::AddGenre(value),
                ValueFacet::Remove { value } => PreferenceEdit::RemoveGenre(value),
            })
            .await,
            PrefsSubcommand::Decade(facet) => cli::edit_preferences(match facet {
                ValueFacet::Add { value } => PreferenceEdit::AddDecade(value),
                ValueFacet::Remove { value } => PreferenceEdit::RemoveDecade(value),
            })
            .await,
            PrefsSubcommand::Track(facet) => cli::edit_preferences(match facet {
                PickedFacet::Add(p) => PreferenceEdit::AddTrack {
                    query: p.query,
                    pick: p.pick,
                },
                PickedFacet::Remove { key } => PreferenceEdit::RemoveTrack(key),
            })
            .await,
            PrefsSubcommand::Popularity { range } => {
                cli::edit_preferences(PreferenceEdit::Popularity(range)).await
            }
            PrefsSubcommand::Mood { preset, clear } => {
                let preset = if clear { None } else { preset };
                cli::edit_preferences(PreferenceEdit::Mood(preset)).await
            }
        },
        Command::Genres(opt) => cli::list_genres(opt.filter),
        Command::Generate | Command::Refresh => cli::generate(GenerateMode::Replace).await,
        Command::More => cli::generate(GenerateMode::More).await,
        Command::Show => cli::show().await,
        Command::Add(opt) => cli::add_track(opt.query, opt.pick).await,
        Command::Remove(opt) => cli::remove_track(opt.track_id).await,
        Command::Favorite(opt) => cli::favorite(opt.track_id).await,
        Command::Favorites => cli::list_favorites().await,
        Command::Save(opt) => cli::save(opt.name, opt.public).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
