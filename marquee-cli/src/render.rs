//! Plain-text sink for snapshots, detail records and notices.

use std::fmt::Write;

use marquee_core::{Notice, ViewSnapshot};
use marquee_model::{
    ImageUrls, Item, ItemDetail, overview_text, rating_label, runtime_label, year_label,
};

#[derive(Debug, Clone)]
pub struct TextRenderer {
    images: ImageUrls,
    show_posters: bool,
}

impl TextRenderer {
    pub fn new(images: ImageUrls, show_posters: bool) -> Self {
        Self {
            images,
            show_posters,
        }
    }

    pub fn grid(&self, snapshot: &ViewSnapshot) -> String {
        let mut out = String::new();

        // A failed page load replaces the grid until the next load starts.
        match (&snapshot.banner, snapshot.empty_state) {
            (Some(banner), _) => {
                let _ = writeln!(out, "! {banner}");
            }
            (None, Some(empty)) => {
                let _ = writeln!(out, "{empty}");
            }
            (None, None) => {
                for item in &snapshot.display {
                    self.grid_row(&mut out, item);
                }
            }
        }

        let _ = write!(out, "{} movies", snapshot.item_count);
        if !snapshot.selection.is_default() {
            let _ = write!(out, " | {}", snapshot.selection);
        }
        if let Some(label) = snapshot.pagination.load_more_label() {
            let _ = write!(out, " | {label}");
        }
        out.push('\n');
        out
    }

    fn grid_row(&self, out: &mut String, item: &Item) {
        let _ = writeln!(
            out,
            "{:>9}  {} ({})  * {}",
            item.id,
            item.title,
            year_label(item.release_year()),
            rating_label(item.vote_average),
        );
        if self.show_posters {
            let _ = writeln!(out, "           {}", self.images.poster(item));
        }
    }

    pub fn detail(&self, detail: &ItemDetail) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", detail.title);
        let _ = writeln!(
            out,
            "{} | {} | * {}",
            year_label(detail.release_year()),
            runtime_label(detail.runtime),
            rating_label(detail.vote_average),
        );
        let genres: Vec<&str> = detail.genre_names().collect();
        if !genres.is_empty() {
            let _ = writeln!(out, "{}", genres.join(", "));
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", overview_text(detail.overview.as_deref()));
        if self.show_posters {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", self.images.detail_poster(detail));
        }
        out
    }
}

pub fn notice(notice: &Notice) -> String {
    match notice {
        Notice::PageLoadFailed { page, .. } => format!("{notice} (page {page})"),
        Notice::DetailLoadFailed { item_id, .. } => format!("{notice} (id {item_id})"),
    }
}
