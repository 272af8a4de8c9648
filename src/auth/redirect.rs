//! Redirect-origin selection after an auth code exchange.

/// Picks the origin to redirect to, evaluating a fixed priority list:
/// the configured public site URL, then the `x-forwarded-host` header
/// (the original origin in front of a load balancer, always `https`),
/// then the request's own origin. Trailing slashes are stripped so the
/// caller can append a path directly.
#[must_use]
pub fn select_redirect_origin(
    site_url: Option<&str>,
    forwarded_host: Option<&str>,
    request_origin: &str,
) -> String {
    if let Some(site) = site_url.filter(|s| !s.is_empty()) {
        return site.trim_end_matches('/').to_string();
    }
    if let Some(host) = forwarded_host.filter(|h| !h.is_empty()) {
        return format!("https://{host}");
    }
    request_origin.trim_end_matches('/').to_string()
}
