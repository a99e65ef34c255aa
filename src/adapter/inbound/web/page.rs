use axum::response::{Html, IntoResponse};
use maud::{html, Markup, Render, DOCTYPE};

/// A full HTML page: head metadata plus a body.
pub trait Page {
    fn title(&self) -> String;
    fn description(&self) -> Option<String> {
        None
    }
    fn draw_body(&self) -> Markup;
}

/// Wraps a [`Page`] into a complete document.
pub struct RenderPage<T: Page>(pub T);

impl<T> Render for RenderPage<T>
where
    T: Page,
{
    fn render(&self) -> Markup {
        let page = &self.0;
        html! {
            (DOCTYPE)
            html lang="it" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (page.title()) }
                    @if let Some(description) = page.description() {
                        meta name="description" content=(description);
                    }
                }
                body {
                    (page.draw_body())
                }
            }
        }
    }
}

impl<T> IntoResponse for RenderPage<T>
where
    T: Page,
{
    fn into_response(self) -> axum::response::Response {
        Html(self.render().into_string()).into_response()
    }
}
