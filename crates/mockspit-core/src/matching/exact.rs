//! Full URL equality matching.

use url::Url;

/// Check whether `url` is exactly `expected`.
///
/// Scheme, host, port, path, query and fragment are all significant. Both
/// sides are compared in their parsed (normalized) form, so `HTTP://X/y` and
/// `http://x/y` are equal while `http://x/y?a=1` and `http://x/y` are not.
pub fn url_equals(expected: Option<&Url>, url: &Url) -> bool {
    expected.is_some_and(|expected| expected == url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn url(s: &str) -> Url {
        Url::parse(s).expect("valid URL")
    }

    #[rstest]
    #[case("http://x/y", "http://x/y", true)]
    #[case("HTTP://X/y", "http://x/y", true)]
    #[case("http://x:80/y", "http://x/y", true)]
    #[case("http://x/y", "mock://x/y", false)]
    #[case("http://x/y", "http://z/y", false)]
    #[case("http://x/y", "http://x/y/", false)]
    #[case("http://x/y?a=1", "http://x/y", false)]
    #[case("http://x/y?a=1&b=2", "http://x/y?b=2&a=1", false)]
    #[case("mock://x/Y", "mock://x/y", false)]
    fn test_url_equals(#[case] expected: &str, #[case] actual: &str, #[case] matched: bool) {
        assert_eq!(url_equals(Some(&url(expected)), &url(actual)), matched);
    }

    #[rstest]
    fn test_url_equals_without_expectation() {
        assert!(!url_equals(None, &url("mock://x/y")));
    }
}
