//! Handler for `dealfeed render`.

use std::fs;
use std::path::Path;

use maud::Render;

use crate::adapter::inbound::cli::command::RenderArgs;
use crate::adapter::inbound::cli::{feed, output};
use crate::adapter::inbound::web::{FeedPage, RenderPage};
use crate::domain::FeedState;
use crate::error::Result;
use crate::infrastructure::bootstrap;

/// Render a feed state into a complete HTML document.
#[must_use]
pub fn render_document(state: FeedState) -> String {
    RenderPage(FeedPage::new(state)).render().into_string()
}

/// Execute `render`: one load, one page.
///
/// A failed load still produces a page (showing the error) and succeeds.
pub async fn execute(args: &RenderArgs) -> Result<()> {
    let config = feed::resolve_config(&args.feed)?;
    let viewer = bootstrap::build_viewer(&config);

    let state = viewer.load().await;
    let rows = state.deals().len();
    let failed = state.error().map(str::to_string);
    let document = render_document(state);

    match &args.output {
        Some(path) => write_page(path, &document, rows, failed.as_deref()),
        None => {
            output::raw(&document);
            Ok(())
        }
    }
}

fn write_page(path: &Path, document: &str, rows: usize, failed: Option<&str>) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, document)?;

    output::section("Page Rendered");
    output::field("Path", path.display());
    output::field("Rows", rows);
    match failed {
        Some(message) => output::warning(message),
        None => output::success("Feed loaded"),
    }
    Ok(())
}
