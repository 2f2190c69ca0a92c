//! Redirect helpers for form-style handlers.

use actix_web::HttpResponse;
use actix_web::http::header;
use url::form_urlencoded;

/// Default landing page after a successful login.
pub const DEFAULT_AFTER_LOGIN: &str = "/dashboard";

/// `303 See Other` to `location`, so browsers follow with a `GET`.
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Login URL carrying the originally requested path in `next`.
///
/// # Examples
/// ```
/// use wedelivery::inbound::http::redirect::login_url_for;
///
/// assert_eq!(login_url_for("/admin/dashboard"), "/login?next=%2Fadmin%2Fdashboard");
/// ```
pub fn login_url_for(original: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("next", original)
        .finish();
    format!("/login?{query}")
}

/// Accept `next` only when it is a same-site absolute path.
///
/// Rejects scheme-relative (`//host`) and backslash tricks that browsers
/// normalise into off-site URLs.
pub fn safe_next(next: Option<&str>) -> &str {
    match next {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && !path.chars().any(char::is_control) =>
        {
            path
        }
        _ => DEFAULT_AFTER_LOGIN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rstest_bdd_macros::{given, then, when};

    #[given("a requested next target")]
    fn requested_target(raw: String) -> Option<String> {
        Some(raw)
    }

    #[when("the login redirect is chosen")]
    fn redirect_chosen(next: Option<String>) -> String {
        safe_next(next.as_deref()).to_owned()
    }

    #[then("the user stays on this site")]
    fn stays_on_site(target: String) {
        assert!(target.starts_with('/') && !target.starts_with("//"));
    }

    #[rstest]
    #[case("/admin/dashboard", "/admin/dashboard")]
    #[case("/dashboard?tab=1", "/dashboard?tab=1")]
    #[case("https://evil.example/", DEFAULT_AFTER_LOGIN)]
    #[case("//evil.example/", DEFAULT_AFTER_LOGIN)]
    #[case("/\\evil.example", DEFAULT_AFTER_LOGIN)]
    #[case("dashboard", DEFAULT_AFTER_LOGIN)]
    fn next_targets_are_restricted(#[case] raw: &str, #[case] expected: &str) {
        let target = redirect_chosen(requested_target(raw.to_owned()));
        assert_eq!(target, expected);
        stays_on_site(target);
    }

    #[rstest]
    fn missing_next_defaults_to_dashboard() {
        assert_eq!(safe_next(None), DEFAULT_AFTER_LOGIN);
    }

    #[rstest]
    fn see_other_sets_location() {
        let res = see_other("/login");
        assert_eq!(res.status(), actix_web::http::StatusCode::SEE_OTHER);
        assert_eq!(
            res.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
            Some("/login")
        );
    }
}
