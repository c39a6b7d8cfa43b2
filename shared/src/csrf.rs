pub const CSRF_COOKIE_NAME: &str = "csrftoken";
pub const CSRF_FIELD_NAME: &str = "csrfmiddlewaretoken";

/// Extracts a cookie value from a `document.cookie` style string
/// (`name=value; other=value`). Empty values count as missing.
pub fn token_from_cookies(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
