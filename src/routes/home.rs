use axum::response::Html;

/// GET / - the trip submission form
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
