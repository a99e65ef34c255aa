//! HTML surface of the deal feed: page templates and the viewer server.

pub mod feed_page;
pub mod page;
pub mod server;

pub use feed_page::FeedPage;
pub use page::{Page, RenderPage};
