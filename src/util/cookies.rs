//! Best-effort cleanup of locally-scoped auth cookies.
//!
//! TRADE-OFFS
//! ==========
//! HTTP-only session cookies cannot be touched from script; this only
//! expires stray client-visible cookies matching the auth naming convention
//! (older deployments set them). Failures are swallowed so cleanup can never
//! break a logout.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

/// Name fragments that mark a cookie as ours to expire.
#[cfg(any(test, feature = "hydrate"))]
const AUTH_COOKIE_MARKERS: [&str; 2] = ["accessToken", "boltchat"];

/// Whether a cookie name matches the auth naming convention.
#[cfg(any(test, feature = "hydrate"))]
fn is_auth_cookie(name: &str) -> bool {
    AUTH_COOKIE_MARKERS.iter().any(|marker| name.contains(marker))
}

/// Cookie names present in a `document.cookie` string, in order.
#[cfg(any(test, feature = "hydrate"))]
fn cookie_names(cookie_header: &str) -> Vec<String> {
    cookie_header
        .split(';')
        .filter_map(|pair| {
            let name = pair.split('=').next().unwrap_or("").trim();
            (!name.is_empty()).then(|| name.to_owned())
        })
        .collect()
}

/// A `document.cookie` assignment that expires `name` immediately.
#[cfg(any(test, feature = "hydrate"))]
fn expired_cookie(name: &str, domain: Option<&str>) -> String {
    match domain {
        Some(domain) => {
            format!("{name}=;expires=Thu, 01 Jan 1970 00:00:00 GMT;path=/;domain={domain}")
        }
        None => format!("{name}=;expires=Thu, 01 Jan 1970 00:00:00 GMT;path=/"),
    }
}

/// Expire every client-visible auth cookie, with and without the current
/// hostname as the domain. Best-effort; never fails the caller.
pub fn clear_auth_cookies() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(document) = document.dyn_into::<web_sys::HtmlDocument>() else {
            return;
        };
        let Ok(cookies) = document.cookie() else {
            return;
        };
        let hostname = web_sys::window().and_then(|w| w.location().hostname().ok());
        for name in cookie_names(&cookies) {
            if !is_auth_cookie(&name) {
                continue;
            }
            let _ = document.set_cookie(&expired_cookie(&name, hostname.as_deref()));
            let _ = document.set_cookie(&expired_cookie(&name, None));
        }
    }
}
