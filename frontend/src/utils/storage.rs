use chrono::{Duration, Utc};
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlDocument, Storage};

use crate::errors::LandingError;

fn local_storage() -> Result<Storage, LandingError> {
    window()
        .ok_or_else(|| LandingError::Storage("no window".into()))?
        .local_storage()?
        .ok_or_else(|| LandingError::Storage("localStorage disabled".into()))
}

fn html_document() -> Result<HtmlDocument, LandingError> {
    crate::utils::dom::document()
        .and_then(|doc| doc.dyn_into::<HtmlDocument>().ok())
        .ok_or_else(|| LandingError::Storage("no html document".into()))
}

pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let result = serde_json::to_string(value)
        .map_err(LandingError::from)
        .and_then(|raw| Ok(local_storage()?.set_item(key, &raw)?));
    if let Err(e) = result {
        warn!("localStorage not available: {}", e);
    }
}

pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let result = local_storage()
        .and_then(|storage| Ok(storage.get_item(key)?))
        .and_then(|raw| match raw {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        });
    match result {
        Ok(value) => value,
        Err(e) => {
            warn!("localStorage not available: {}", e);
            None
        }
    }
}

/// `name=value; expires=...; path=/` with the value percent-encoded.
pub fn cookie_assignment(name: &str, value: &str, days: i64) -> String {
    let expires = Utc::now() + Duration::days(days);
    format!(
        "{}={};expires={};path=/",
        name,
        urlencoding::encode(value),
        expires.format("%a, %d %b %Y %H:%M:%S GMT")
    )
}

/// Finds `name` in a `document.cookie` string.
pub fn find_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim_start)
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
        .map(|raw| {
            urlencoding::decode(raw)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| raw.to_string())
        })
}

pub fn set_cookie(name: &str, value: &str, days: i64) {
    let result = html_document().and_then(|doc| Ok(doc.set_cookie(&cookie_assignment(name, value, days))?));
    if let Err(e) = result {
        warn!("Cookie not written: {}", e);
    }
}

pub fn get_cookie(name: &str) -> Option<String> {
    match html_document().and_then(|doc| Ok(doc.cookie()?)) {
        Ok(cookies) => find_cookie(&cookies, name),
        Err(e) => {
            warn!("Cookie not readable: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_cookie_among_others() {
        let jar = "theme=dark; preferred_role=partner; _ga=GA1.1";
        assert_eq!(find_cookie(jar, "preferred_role").as_deref(), Some("partner"));
        assert_eq!(find_cookie(jar, "theme").as_deref(), Some("dark"));
        assert_eq!(find_cookie(jar, "missing"), None);
    }

    #[test]
    fn prefix_names_do_not_match() {
        assert_eq!(find_cookie("rolex=1; role=artist", "role").as_deref(), Some("artist"));
    }

    #[test]
    fn values_are_percent_decoded() {
        assert_eq!(find_cookie("note=a%20b%3Bc", "note").as_deref(), Some("a b;c"));
    }

    #[test]
    fn assignment_encodes_and_scopes_to_root() {
        let cookie = cookie_assignment("note", "a b", 30);
        assert!(cookie.starts_with("note=a%20b;expires="));
        assert!(cookie.ends_with("GMT;path=/"));
    }
}
