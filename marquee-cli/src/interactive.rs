//! Line-oriented session: plain text is a search keystroke, `:`-prefixed
//! lines are commands.

use anyhow::Context;
use marquee_core::{LoadOutcome, PreferenceStore, ViewController};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;

use crate::render::{self, TextRenderer};

pub const HELP: &str = "\
commands:
  <text>            search (debounced)
  :browse           back to popular movies (clears the search)
  :more             load the next page
  :filter G Y S     genre (name, id or all), year (YYYY or all), sort (popularity|rating|year|title)
  :clear            reset filters
  :detail ID        show one movie
  :theme            toggle light/dark
  :help             this text
  :quit             leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Search(String),
    Browse,
    More,
    Filter {
        genre: String,
        year: String,
        sort: String,
    },
    Clear,
    Detail(u64),
    Theme,
    Help,
    Quit,
}

impl SessionCommand {
    /// `None` for blank lines.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let Some(command) = line.strip_prefix(':') else {
            return Ok(Some(SessionCommand::Search(line.to_string())));
        };

        let mut parts = command.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        let parsed = match (name, args.as_slice()) {
            ("browse", []) => SessionCommand::Browse,
            ("more", []) => SessionCommand::More,
            ("clear", []) => SessionCommand::Clear,
            ("theme", []) => SessionCommand::Theme,
            ("help", []) => SessionCommand::Help,
            ("quit" | "q", []) => SessionCommand::Quit,
            ("filter", args) if args.len() <= 3 => {
                let arg = |i: usize| args.get(i).copied().unwrap_or("all").to_string();
                SessionCommand::Filter {
                    genre: arg(0),
                    year: arg(1),
                    sort: args.get(2).copied().unwrap_or("popularity").to_string(),
                }
            }
            ("detail", [id]) => SessionCommand::Detail(
                id.parse().map_err(|_| format!("not a movie id: {id}"))?,
            ),
            _ => return Err(format!("unrecognized command: {line}")),
        };
        Ok(Some(parsed))
    }
}

pub async fn run(
    controller: ViewController,
    renderer: TextRenderer,
    preferences: PreferenceStore,
) -> anyhow::Result<()> {
    // Repaint whenever a load settles, including debounced searches.
    let grid_task = tokio::spawn({
        let mut snapshots = controller.subscribe();
        let renderer = renderer.clone();
        async move {
            while snapshots.changed().await.is_ok() {
                let snapshot = snapshots.borrow_and_update().clone();
                if !snapshot.loading {
                    print!("{}", renderer.grid(&snapshot));
                }
            }
        }
    });
    let notice_task = tokio::spawn({
        let mut notices = controller.notices();
        async move {
            loop {
                match notices.recv().await {
                    Ok(notice) => eprintln!("{}", render::notice(&notice)),
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::debug!(skipped, "notice receiver lagged");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        }
    });

    println!("{HELP}");
    controller.load_movies(1).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        let command = match SessionCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                eprintln!("{message}");
                continue;
            }
        };

        match command {
            SessionCommand::Search(term) => controller.search(term),
            // An empty term is the discovery listing
            SessionCommand::Browse => controller.search(String::new()),
            SessionCommand::More => {
                if controller.load_more().await == LoadOutcome::Exhausted {
                    eprintln!("no more pages");
                }
            }
            SessionCommand::Filter { genre, year, sort } => {
                if let Err(e) = controller.apply_filter_controls(&genre, &year, &sort) {
                    eprintln!("{e}");
                }
            }
            SessionCommand::Clear => controller.clear_filters(),
            SessionCommand::Detail(id) => {
                // Failures are reported through the notice channel
                if let Ok(detail) = controller.show_detail(id).await {
                    print!("{}", renderer.detail(&detail));
                }
            }
            SessionCommand::Theme => match preferences.toggle_theme().await {
                Ok(theme) => println!("theme: {theme}"),
                Err(e) => eprintln!("{e}"),
            },
            SessionCommand::Help => println!("{HELP}"),
            SessionCommand::Quit => break,
        }
    }

    grid_task.abort();
    notice_task.abort();
    Ok(())
}
