//! Handler for `dealfeed list`.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::ListArgs;
use crate::adapter::inbound::cli::{feed, output};
use crate::adapter::inbound::web::feed_page::EMPTY_ROW;
use crate::domain::{format, Deal};
use crate::error::Result;
use crate::infrastructure::bootstrap;

#[derive(Tabled)]
struct DealRow {
    #[tabled(rename = "Carta")]
    card: String,
    #[tabled(rename = "Prezzo")]
    price: String,
    #[tabled(rename = "Baseline")]
    baseline: String,
    #[tabled(rename = "Sconto")]
    discount: String,
    #[tabled(rename = "Marketplace")]
    marketplace: String,
    #[tabled(rename = "Link")]
    url: String,
}

impl From<&Deal> for DealRow {
    fn from(deal: &Deal) -> Self {
        Self {
            card: format::card_label(deal),
            price: format::price(deal.price_eur),
            baseline: format::price(deal.baseline_eur),
            discount: format::percent(deal.discount_pct),
            marketplace: deal.marketplace.clone(),
            url: deal.url.clone(),
        }
    }
}

/// Build the terminal table for a list of deals, in the given order.
#[must_use]
pub fn deals_table(deals: &[Deal]) -> String {
    Table::new(deals.iter().map(DealRow::from)).to_string()
}

/// Execute `list`.
pub async fn execute(args: &ListArgs) -> Result<()> {
    let config = feed::resolve_config(&args.feed)?;
    let viewer = bootstrap::build_viewer(&config);

    let pb = output::spinner("Loading deals...");
    let snapshot = match viewer.fetch().await {
        Ok(snapshot) => {
            output::spinner_success(&pb, "Deals loaded");
            snapshot
        }
        Err(e) => {
            output::spinner_fail(&pb, "Deal feed unavailable");
            return Err(e.into());
        }
    };

    if output::is_json() {
        output::json_output(json!({
            "command": "list",
            "fetched_at": snapshot.fetched_at.to_rfc3339(),
            "deals": snapshot.deals,
        }));
        return Ok(());
    }

    if snapshot.deals.is_empty() {
        output::note(EMPTY_ROW);
        return Ok(());
    }

    output::lines(&deals_table(&snapshot.deals));
    output::field("Deals", snapshot.deals.len());
    if output::verbosity() > 0 {
        output::field("Fetched", snapshot.fetched_at.to_rfc3339());
        output::field("Source", config.api.deals_url());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::{charizard, deal, priced_deal};
    use rust_decimal_macros::dec;

    #[test]
    fn table_shows_formatted_fields() {
        let table = deals_table(&[deal(1)]);
        assert!(table.contains("Carta"));
        assert!(table.contains("Pikachu (25) – Base"));
        assert!(table.contains("5.00 €"));
        assert!(table.contains("10.00 €"));
        assert!(table.contains("50%"));
        assert!(table.contains("http://x"));
    }

    #[test]
    fn table_keeps_order() {
        let table = deals_table(&[charizard(2), deal(1)]);
        let charizard_at = table.find("Charizard").unwrap();
        let pikachu_at = table.find("Pikachu").unwrap();
        assert!(charizard_at < pikachu_at);
    }

    #[test]
    fn table_rounds_derived_discounts() {
        let table = deals_table(&[priced_deal(3, dec!(7.499), dec!(10))]);
        assert!(table.contains("7.50 €"));
        assert!(table.contains("25%"));
    }
}
