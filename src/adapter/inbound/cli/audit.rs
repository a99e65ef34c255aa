//! Handler for `dealfeed audit`.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::FeedArgs;
use crate::adapter::inbound::cli::{feed, output};
use crate::domain::audit::{self, RecordAudit};
use crate::error::Result;
use crate::infrastructure::bootstrap;

#[derive(Tabled)]
struct FindingRow {
    #[tabled(rename = "Deal")]
    deal_id: i64,
    #[tabled(rename = "Finding")]
    finding: String,
}

fn findings_table(report: &[RecordAudit]) -> String {
    let rows = report.iter().flat_map(|record| {
        record.findings.iter().map(|finding| FindingRow {
            deal_id: record.deal_id,
            finding: finding.to_string(),
        })
    });
    Table::new(rows).to_string()
}

/// Execute `audit`.
pub async fn execute(args: &FeedArgs) -> Result<()> {
    let config = feed::resolve_config(args)?;
    let rules = config.audit.rules();
    let viewer = bootstrap::build_viewer(&config);

    let snapshot = viewer.fetch().await?;
    let report = audit::audit(&snapshot.deals, &rules);

    if output::is_json() {
        output::json_output(json!({
            "command": "audit",
            "checked": snapshot.deals.len(),
            "records": report,
        }));
        return Ok(());
    }

    output::section("Deal Audit");
    output::field("Checked", snapshot.deals.len());
    output::field("Tolerance", rules.tolerance);
    output::field(
        "Threshold",
        rules
            .min_discount
            .map_or_else(|| "off".to_string(), |t| t.to_string()),
    );

    if report.is_empty() {
        output::success("All records follow the deal convention");
        return Ok(());
    }

    output::lines(&findings_table(&report));
    output::warning(&format!("{} record(s) with findings", report.len()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AuditRules;
    use crate::testkit::domain::deal;
    use rust_decimal_macros::dec;

    #[test]
    fn table_lists_one_row_per_finding() {
        let mut bad = deal(4);
        bad.price_eur = dec!(12);
        let report = audit::audit(&[bad], &AuditRules::default());
        let table = findings_table(&report);
        assert!(table.contains("price 12 exceeds baseline 10"));
        assert!(table.contains("differs from implied"));
    }
}
