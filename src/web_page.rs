use crate::constants::WEB_SCHEMES;
use url::Url;

/// A candidate home page: the text as the user or a source supplied it,
/// together with its parsed absolute URL.
#[derive(Clone, Debug, PartialEq)]
pub struct WebPage {
    raw: String,
    url: Url,
}

impl WebPage {
    /// Parses trimmed `candidate` as an absolute URL. Relative and blank
    /// input yields `None`, as does text with inner whitespace or control
    /// characters, which the URL parser would otherwise strip or encode.
    pub fn parse(candidate: &str) -> Option<Self> {
        let trimmed = candidate.trim();
        if trimmed.is_empty()
            || trimmed
                .chars()
                .any(|c| c.is_whitespace() || c.is_control())
        {
            return None;
        }
        Url::parse(trimmed).ok().map(|url| Self {
            raw: trimmed.to_string(),
            url,
        })
    }

    /// The trimmed text, unchanged by URL normalization.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn is_web_page(&self) -> bool {
        WEB_SCHEMES.contains(&self.url.scheme())
    }
}

pub fn is_valid_web_url(candidate: Option<&str>) -> bool {
    candidate
        .and_then(WebPage::parse)
        .is_some_and(|page| page.is_web_page())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(is_valid_web_url(Some("https://example.com")));
        assert!(is_valid_web_url(Some("http://example.com/path?q=1")));
        assert!(is_valid_web_url(Some("  https://www.rust-lang.org  ")));
        assert!(is_valid_web_url(Some("HTTPS://EXAMPLE.COM")));
    }

    #[test]
    fn test_rejects_missing_and_blank() {
        assert!(!is_valid_web_url(None));
        assert!(!is_valid_web_url(Some("")));
        assert!(!is_valid_web_url(Some("   ")));
    }

    #[test]
    fn test_rejects_non_web_schemes() {
        assert!(!is_valid_web_url(Some("javascript:alert(1)")));
        assert!(!is_valid_web_url(Some("ftp://example.com/file")));
        assert!(!is_valid_web_url(Some("file:///etc/passwd")));
        assert!(!is_valid_web_url(Some("about:blank")));
        assert!(!is_valid_web_url(Some("data:text/html,hi")));
    }

    #[test]
    fn test_rejects_bare_text_and_relative() {
        assert!(!is_valid_web_url(Some("not a url")));
        assert!(!is_valid_web_url(Some("example.com")));
        assert!(!is_valid_web_url(Some("/index.html")));
        assert!(!is_valid_web_url(Some("http://")));
    }

    #[test]
    fn test_rejects_inner_whitespace_and_control() {
        assert!(WebPage::parse("https://exa\nmple.com").is_none());
        assert!(WebPage::parse("https://example.com/a b").is_none());
        assert!(WebPage::parse("https://exa\tmple.com").is_none());
        assert!(WebPage::parse("https://example.com/\u{7f}").is_none());
        assert!(!is_valid_web_url(Some("https://exa\r\nmple.com")));
    }

    #[test]
    fn test_keeps_text_as_entered() {
        let page = WebPage::parse(" https://example.com ").unwrap();
        assert_eq!(page.as_str(), "https://example.com");
        assert_eq!(page.url().as_str(), "https://example.com/");
    }

    #[test]
    fn test_parse_without_web_scheme() {
        let page = WebPage::parse("ftp://example.com").unwrap();
        assert!(!page.is_web_page());
    }
}
