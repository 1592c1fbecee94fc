use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

/// Cookie holding the dark-mode preference as `"true"` or `"false"`.
pub const DARK_MODE_COOKIE: &str = "darkMode";

/// Whether the page renders with the dark palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DarkMode(pub bool);

impl DarkMode {
    /// Only the literal `"true"` turns dark mode on.
    pub fn from_jar(jar: &CookieJar) -> Self {
        Self(
            jar.get(DARK_MODE_COOKIE)
                .map(|cookie| cookie.value() == "true")
                .unwrap_or(false),
        )
    }

    pub fn toggled(self) -> Self {
        Self(!self.0)
    }

    pub fn is_on(self) -> bool {
        self.0
    }

    pub fn cookie(self) -> Cookie<'static> {
        Cookie::build((DARK_MODE_COOKIE, self.0.to_string()))
            .path("/")
            .same_site(SameSite::Lax)
            .max_age(time::Duration::days(365))
            .build()
    }
}
