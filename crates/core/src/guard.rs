//! Route guard decisions for the admin area and the login page.
//!
//! Pure function of the request path, the `redirect` query parameter and
//! whether a session is present; the HTTP layer performs the redirect.

/// Root of the protected admin area.
pub const ADMIN_PATH: &str = "/admin";

/// Login page.
pub const LOGIN_PATH: &str = "/auth/login";

/// Outcome of [`decide`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Redirect to this local URL.
    Redirect(String),
}

/// `true` for `/admin` and anything below it.
pub fn is_admin_path(path: &str) -> bool {
    path == ADMIN_PATH
        || path
            .strip_prefix(ADMIN_PATH)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Only same-origin absolute paths may be used as a post-login target.
///
/// Browsers drop tabs and newlines from URLs, so `/\t/host` would become
/// `//host`. Only visible ASCII is accepted, which also keeps the target a
/// valid `Location` header value.
pub fn is_safe_redirect(target: &str) -> bool {
    target.starts_with('/')
        && !target.starts_with("//")
        && !target.contains('\\')
        && target.chars().all(|c| c.is_ascii_graphic())
}

/// Decide whether a request may proceed.
///
/// - Admin paths without a session go to the login page, carrying the
///   requested path as `redirect`.
/// - The login page with a session goes to `redirect` when it is a safe local
///   path, otherwise to the admin root.
/// - Everything else is allowed.
pub fn decide(path: &str, redirect_param: Option<&str>, has_session: bool) -> GuardDecision {
    if is_admin_path(path) && !has_session {
        return GuardDecision::Redirect(format!(
            "{LOGIN_PATH}?redirect={}",
            encode_query_value(path)
        ));
    }

    if path == LOGIN_PATH && has_session {
        let target = redirect_param
            .filter(|t| is_safe_redirect(t))
            .unwrap_or(ADMIN_PATH);
        return GuardDecision::Redirect(target.to_string());
    }

    GuardDecision::Allow
}

/// Percent-encode the characters that would break a query value.
fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '%' => out.push_str("%25"),
            '&' => out.push_str("%26"),
            '+' => out.push_str("%2B"),
            '=' => out.push_str("%3D"),
            '#' => out.push_str("%23"),
            '?' => out.push_str("%3F"),
            ' ' => out.push_str("%20"),
            _ => out.push(c),
        }
    }
    out
}
