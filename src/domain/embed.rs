// Embedded visualization domain model
use serde::Serialize;

use super::error::DashboardError;

/// Height of an embed container relative to its width (16:10).
pub const EMBED_ASPECT_RATIO: f64 = 0.625;

/// Accessibility label used when an embed has no title of its own.
pub const DEFAULT_EMBED_TITLE: &str = "Flourish embed";

/// Permissions granted to every embedded document. Identical for all embeds.
pub const EMBED_SANDBOX: &str = "allow-same-origin allow-forms allow-scripts allow-downloads \
     allow-popups allow-popups-to-escape-sandbox allow-top-navigation-by-user-activation";

pub const EMBED_ALLOW: &str = "fullscreen; clipboard-read; clipboard-write";

/// One externally hosted chart.
///
/// The url is checked once for syntax and then kept exactly as configured; the
/// rendered `src` attribute is never normalized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualizationEmbed {
    url: String,
    title: Option<String>,
}

impl VisualizationEmbed {
    pub fn new(url: String, title: Option<String>) -> Result<Self, DashboardError> {
        if url.trim() != url {
            return Err(DashboardError::UntrimmedEmbedUrl(url));
        }
        let scheme = match url::Url::parse(&url) {
            Ok(parsed) => parsed.scheme().to_string(),
            Err(source) => return Err(DashboardError::InvalidEmbedUrl { url, source }),
        };
        if scheme != "http" && scheme != "https" {
            return Err(DashboardError::UnsupportedEmbedScheme { url, scheme });
        }
        Ok(Self { url, title })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_EMBED_TITLE)
    }
}

/// CSS `padding-top` that reserves the embed's aspect ratio at any width.
pub fn aspect_padding() -> String {
    format!("{}%", EMBED_ASPECT_RATIO * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_kept_verbatim() {
        let embed =
            VisualizationEmbed::new("https://flo.uri.sh/visualisation/24962948/embed".into(), None)
                .unwrap();
        assert_eq!(embed.url(), "https://flo.uri.sh/visualisation/24962948/embed");
        assert_eq!(embed.title(), DEFAULT_EMBED_TITLE);
    }

    #[test]
    fn test_rejects_relative_url() {
        let err = VisualizationEmbed::new("visualisation/1/embed".into(), None).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidEmbedUrl { .. }));
    }

    #[test]
    fn test_rejects_non_http_schemes() {
        for url in ["javascript:alert(1)", "data:text/html,<p>hi</p>", "ftp://flo.uri.sh/x"] {
            let err = VisualizationEmbed::new(url.into(), None).unwrap_err();
            assert!(
                matches!(err, DashboardError::UnsupportedEmbedScheme { .. }),
                "{url}"
            );
        }
        assert!(VisualizationEmbed::new("http://flo.uri.sh/visualisation/1/embed".into(), None).is_ok());
    }

    #[test]
    fn test_rejects_whitespace() {
        let err = VisualizationEmbed::new(" https://flo.uri.sh/x ".into(), None).unwrap_err();
        assert!(matches!(err, DashboardError::UntrimmedEmbedUrl(_)));
    }

    #[test]
    fn test_aspect_padding() {
        assert_eq!(aspect_padding(), "62.5%");
    }
}
