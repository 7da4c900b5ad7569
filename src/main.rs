//! Command-line entry point.
//!
//! A thin shim over the library: it parses arguments, wires configuration,
//! logging, the favorites store and the fetch worker together, and maps
//! terminal input to library [`Event`]s.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  main task (current thread)  │
//! │  ┌────────────────────────┐  │
//! │  │ AppState + event loop  │  │  ← stdin lines, debounce timer
//! │  └────────────────────────┘  │
//! │          │  ▲                │
//! │   mpsc   ▼  │  mpsc          │
//! │  ┌────────────────────────┐  │
//! │  │ FetchWorker task       │  │  ← owns the SpaceX client
//! │  └────────────────────────┘  │
//! └──────────────────────────────┘
//! ```
//!
//! # Interactive commands (`browse`)
//!
//! One command per line:
//!
//! - `/text`: search (applied after the debounce delay), `/` alone clears it
//! - `y <year|all>`: year filter
//! - `s` / `f`: toggle successful-only / favorites-only
//! - `j` / `k`: move the selection
//! - `*`: toggle favorite
//! - `o` or an empty line: open details, `b`: back to the list
//! - `r`: refresh, `q`: quit

#![allow(clippy::multiple_crate_versions)]

use anyhow::{bail, Context};
use chrono::{Datelike, Utc};
use clap::{Parser, Subcommand};
use crossterm::cursor::MoveTo;
use crossterm::terminal::{self, Clear, ClearType};
use spacex_explorer::app::filter::{available_years, FIRST_LAUNCH_YEAR};
use spacex_explorer::app::YearFilter;
use spacex_explorer::infrastructure::expand_tilde;
use spacex_explorer::observability::init_tracing;
use spacex_explorer::source::{LaunchSource, SpacexClient};
use spacex_explorer::storage::KeyValueStore;
use spacex_explorer::ui::{render, render_plain};
use spacex_explorer::worker::{FetchWorker, WorkerHandle};
use spacex_explorer::{handle_event, initialize, open_store, Action, AppState, Config, Event, LoadState};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::Instant;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

const DEFAULT_ROWS: usize = 24;
const DEFAULT_COLS: usize = 100;

#[derive(Debug, Parser)]
#[command(name = "spacex-explorer", version, about = "Browse SpaceX launches from the terminal")]
struct Cli {
    /// Configuration file (default: the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory for favorites and logs
    #[arg(long, global = true, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Keep favorites in memory only
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Log filter, e.g. `debug` or `spacex_explorer=trace`
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the filtered launch list
    List {
        /// Case-insensitive text matched against mission names
        #[arg(long)]
        search: Option<String>,

        /// Launch year, or `all`
        #[arg(long, default_value = "all")]
        year: String,

        /// Only successful launches
        #[arg(long)]
        successful: bool,

        /// Only favorite launches
        #[arg(long)]
        favorites: bool,
    },

    /// Show one launch with its rocket
    Show { launch_id: String },

    /// Toggle a launch in the favorites
    Favorite { launch_id: String },

    /// List favorite launch ids
    Favorites,

    /// Interactive browser (default)
    Browse,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(expand_tilde(dir));
    }
    if let Some(level) = cli.log_level {
        config.trace_level = Some(level);
    }

    if let Some(log_file) = init_tracing(&config) {
        tracing::debug!(log_file = %log_file.display(), "tracing initialized");
    }

    let store = open_store(&config, cli.ephemeral).context("failed to open favorites")?;
    let mut state = initialize(&config, store);
    let (_, cols) = terminal_size();

    match cli.command.unwrap_or(Command::Browse) {
        Command::Favorite { launch_id } => {
            let now_favorite = state.favorites.toggle(&launch_id)?;
            if now_favorite {
                println!("★ {launch_id} added to favorites");
            } else {
                println!("  {launch_id} removed from favorites");
            }
        }
        Command::Favorites => {
            let ids = state.favorites.ids();
            if ids.is_empty() {
                println!("You haven't favorited any missions yet.");
            }
            for id in ids {
                println!("{id}");
            }
        }
        Command::List {
            search,
            year,
            successful,
            favorites,
        } => {
            let year = YearFilter::parse(&year);
            if let YearFilter::Year(y) = &year {
                if !available_years(Utc::now().year()).contains(y) {
                    bail!("year must be `all` or between {FIRST_LAUNCH_YEAR} and this year, got {y}");
                }
            }

            let worker = FetchWorker::new(SpacexClient::from_config(&config)?);
            load(&mut state, &worker).await?;

            let mut events = vec![Event::SetYear(year)];
            if successful {
                events.push(Event::ToggleSuccessfulOnly);
            }
            if favorites {
                events.push(Event::ToggleFavoritesOnly);
            }
            if let Some(search) = search {
                events.push(Event::SearchSubmit(search));
            }
            for event in events {
                settle(&mut state, &worker, event).await?;
            }
            print!("{}", render_plain(&state, cols));
        }
        Command::Show { launch_id } => {
            let worker = FetchWorker::new(SpacexClient::from_config(&config)?);
            load(&mut state, &worker).await?;

            if !state.select_launch(&launch_id) {
                bail!("no launch with id {launch_id}");
            }
            settle(&mut state, &worker, Event::OpenDetails).await?;
            print!("{}", render_plain(&state, cols));
        }
        Command::Browse => {
            let worker = FetchWorker::new(SpacexClient::from_config(&config)?);
            browse(state, worker.spawn()).await?;
        }
    }

    Ok(())
}

/// Feeds `first` through the handler, answering worker requests inline until
/// no actions remain. Used by the one-shot commands.
async fn settle<L, S>(state: &mut AppState<S>, worker: &FetchWorker<L>, first: Event) -> anyhow::Result<()>
where
    L: LaunchSource,
    S: KeyValueStore,
{
    let mut queue = VecDeque::from([first]);
    while let Some(event) = queue.pop_front() {
        let (_, actions) = handle_event(state, &event)?;
        for action in actions {
            if let Action::PostToWorker(message) = action {
                queue.push_back(Event::WorkerResponse(worker.handle_message(message).await));
            }
        }
    }
    Ok(())
}

async fn load<L, S>(state: &mut AppState<S>, worker: &FetchWorker<L>) -> anyhow::Result<()>
where
    L: LaunchSource,
    S: KeyValueStore,
{
    settle(state, worker, Event::Load).await?;
    if let LoadState::Failed(reason) = &state.load_state {
        bail!("failed to load SpaceX launches: {reason}");
    }
    Ok(())
}

/// Interactive loop: one event at a time from stdin, the debounce timer or
/// the worker.
async fn browse<S: KeyValueStore>(mut state: AppState<S>, mut worker: WorkerHandle) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let mut next = Some(Event::Load);
    draw(&state).await?;

    loop {
        let event = match next.take() {
            Some(event) => event,
            None => {
                let deadline = state.search_deadline();
                tokio::select! {
                    line = lines.next_line() => match line.context("failed to read input")? {
                        Some(line) => match parse_command(&line, Instant::now()) {
                            Some(event) => event,
                            None => continue,
                        },
                        None => Event::Quit,
                    },
                    Some(response) = worker.recv() => Event::WorkerResponse(response),
                    () = debounce_elapsed(deadline) => Event::Tick(Instant::now()),
                }
            }
        };

        let (should_render, actions) = handle_event(&mut state, &event)?;
        tracing::debug!(action_count = actions.len(), should_render, "event handled");

        for action in actions {
            match action {
                Action::PostToWorker(message) => worker.post(message)?,
                Action::Quit => {
                    worker.shutdown();
                    return Ok(());
                }
            }
        }
        if should_render {
            draw(&state).await?;
        }
    }
}

async fn debounce_elapsed(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}

/// Clears the screen and draws one frame sized to the current terminal.
async fn draw<S: KeyValueStore>(state: &AppState<S>) -> anyhow::Result<()> {
    let (rows, cols) = terminal_size();
    let mut buf = Vec::new();
    crossterm::queue!(buf, Clear(ClearType::All), MoveTo(0, 0))?;
    buf.extend_from_slice(render(state, rows, cols).as_bytes());

    let mut stdout = tokio::io::stdout();
    stdout.write_all(&buf).await?;
    stdout.flush().await?;
    Ok(())
}

/// Maps one input line to an event. Unknown commands are ignored.
fn parse_command(line: &str, now: Instant) -> Option<Event> {
    if let Some(query) = line.strip_prefix('/') {
        return Some(if query.is_empty() {
            Event::ClearSearch
        } else {
            Event::SearchInput {
                query: query.to_string(),
                at: now,
            }
        });
    }

    let line = line.trim();
    let (command, arg) = line.split_once(' ').unwrap_or((line, ""));
    Some(match command {
        "" | "o" => Event::OpenDetails,
        "b" => Event::CloseDetails,
        "j" => Event::KeyDown,
        "k" => Event::KeyUp,
        "*" => Event::ToggleFavorite,
        "s" => Event::ToggleSuccessfulOnly,
        "f" => Event::ToggleFavoritesOnly,
        "y" => Event::SetYear(YearFilter::parse(arg)),
        "r" => Event::Refresh,
        "q" => Event::Quit,
        _ => {
            tracing::debug!(command = %command, "unknown command");
            return None;
        }
    })
}

/// `(rows, cols)` of the controlling terminal, 24x100 when there is none.
fn terminal_size() -> (usize, usize) {
    match terminal::size() {
        Ok((cols, rows)) if cols > 0 && rows > 0 => (usize::from(rows), usize::from(cols)),
        Ok(_) => (DEFAULT_ROWS, DEFAULT_COLS),
        Err(e) => {
            tracing::debug!(error = %e, "terminal size unavailable, using default");
            (DEFAULT_ROWS, DEFAULT_COLS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_input_lines_to_events() {
        let now = Instant::now();
        assert_eq!(
            parse_command("/Starlink 4", now),
            Some(Event::SearchInput {
                query: "Starlink 4".to_string(),
                at: now
            })
        );
        assert_eq!(parse_command("/", now), Some(Event::ClearSearch));
        assert_eq!(parse_command("y 2020", now), Some(Event::SetYear(YearFilter::parse("2020"))));
        assert_eq!(parse_command("y", now), Some(Event::SetYear(YearFilter::All)));
        assert_eq!(parse_command("", now), Some(Event::OpenDetails));
        assert_eq!(parse_command(" q ", now), Some(Event::Quit));
        assert_eq!(parse_command("launch", now), None);
    }

    #[test]
    fn terminal_size_is_never_zero() {
        let (rows, cols) = terminal_size();
        assert!(rows > 0);
        assert!(cols > 0);
    }

    #[test]
    fn cli_parses_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["spacex-explorer", "list", "--year", "2021", "--ephemeral"]);
        assert!(cli.ephemeral);
        assert!(matches!(cli.command, Some(Command::List { ref year, .. }) if year == "2021"));
    }
}
