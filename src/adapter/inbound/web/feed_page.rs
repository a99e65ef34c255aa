//! The deal feed page.
//!
//! Renders one [`FeedState`]: the error line when the load failed, one table
//! row per deal in response order, or the empty-state row.

use maud::{html, Markup};

use super::page::Page;
use crate::domain::{format, Deal, FeedState};

pub const TITLE: &str = "JTB – Occasioni Carte Pokémon";
pub const INTRO: &str =
    "Feed delle occasioni sotto baseline. Aggiorna automaticamente quando i dati sono disponibili.";
pub const EMPTY_ROW: &str = "Nessun deal ancora disponibile.";
pub const ERROR_PREFIX: &str = "Errore: ";
pub const LINK_TEXT: &str = "Apri";

const COLUMNS: [(&str, &str); 6] = [
    ("Carta", "left"),
    ("Prezzo", "right"),
    ("Baseline", "right"),
    ("Sconto", "right"),
    ("Marketplace", "left"),
    ("Link", "left"),
];

pub struct FeedPage {
    state: FeedState,
}

impl FeedPage {
    #[must_use]
    pub fn new(state: FeedState) -> Self {
        Self { state }
    }

    fn row(deal: &Deal) -> Markup {
        html! {
            tr data-deal-id=(deal.deal_id) {
                td style="padding:6px 4px" { (format::card_label(deal)) }
                td style="text-align:right" { (format::price(deal.price_eur)) }
                td style="text-align:right" { (format::price(deal.baseline_eur)) }
                td style="text-align:right" { (format::percent(deal.discount_pct)) }
                td { (deal.marketplace) }
                td {
                    a href=(deal.url) target="_blank" rel="noreferrer" { (LINK_TEXT) }
                }
            }
        }
    }
}

impl Page for FeedPage {
    fn title(&self) -> String {
        TITLE.to_string()
    }

    fn description(&self) -> Option<String> {
        Some(INTRO.to_string())
    }

    fn draw_body(&self) -> Markup {
        html! {
            main style="font-family:system-ui, Arial; padding:20px; max-width:900px; margin:0 auto" {
                h1 { (TITLE) }
                p { (INTRO) }
                @if let Some(error) = self.state.error() {
                    p class="error" style="color:crimson" { (ERROR_PREFIX) (error) }
                }
                table style="width:100%; border-collapse:collapse" {
                    thead {
                        tr {
                            @for (label, align) in COLUMNS {
                                th style={ "text-align:" (align) "; border-bottom:1px solid #ccc" } { (label) }
                            }
                        }
                    }
                    tbody {
                        @for deal in self.state.deals() {
                            (Self::row(deal))
                        }
                        @if self.state.is_empty() {
                            tr class="empty" {
                                td colspan="6" style="padding:12px" { (EMPTY_ROW) }
                            }
                        }
                    }
                }
            }
        }
    }
}
