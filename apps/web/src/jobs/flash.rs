//! One-shot flash alerts carried across a redirect in a cookie.

use axum_extra::extract::cookie::{Cookie, CookieJar};

const FLASH_COOKIE: &str = "flash_alert";

/// Shown when the recommendation API cannot produce a usable answer.
pub const FETCH_ERROR_ALERT: &str = "Error fetching job recommendations.";

fn flash_cookie(value: String) -> Cookie<'static> {
    Cookie::build((FLASH_COOKIE, value))
        .path("/")
        .http_only(true)
        .build()
}

/// Queues an alert for the next rendered page.
pub fn set_alert(jar: CookieJar, message: &str) -> CookieJar {
    jar.add(flash_cookie(message.to_string()))
}

/// Reads the pending alert, if any, and clears it so it is shown once.
pub fn take_alert(jar: CookieJar) -> (CookieJar, Option<String>) {
    let Some(message) = jar.get(FLASH_COOKIE).map(|c| c.value().to_string()) else {
        return (jar, None);
    };

    (jar.remove(flash_cookie(String::new())), Some(message))
}
