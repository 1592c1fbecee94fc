use axum::response::{IntoResponse, Redirect};
use axum_extra::extract::cookie::CookieJar;

use crate::models::DarkMode;

/// Flip the dark-mode cookie and send the browser back to the form.
pub async fn toggle_dark_mode(jar: CookieJar) -> impl IntoResponse {
    let next = DarkMode::from_jar(&jar).toggled();
    tracing::debug!(dark_mode = next.is_on(), "Dark mode toggled");

    (jar.add(next.cookie()), Redirect::to("/"))
}
