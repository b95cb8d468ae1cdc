use maud::{html, Markup};

pub const LOGO_SIZE: u32 = 80;

/// Title, subtitle and logo. Without a logo a placeholder block of the same
/// size is shown instead.
pub fn page_header(title: &str, subtitle: &str, logo: Option<&str>) -> Markup {
    html! {
        header.page-header {
            div.page-header__inner {
                @if let Some(src) = logo {
                    img.logo src=(src) alt="School logo" width=(LOGO_SIZE) height=(LOGO_SIZE);
                } @else {
                    div.logo.logo--placeholder {}
                }
                div {
                    h1.page-header__title { (title) }
                    p.page-header__subtitle { (subtitle) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_logo() {
        let html = page_header("Read-a-Thon", "Live stats", Some("/static/logo.svg")).into_string();
        assert!(html.contains(r#"src="/static/logo.svg""#));
        assert!(html.contains(r#"width="80" height="80""#));
        assert!(!html.contains("logo--placeholder"));
        assert!(html.contains("<h1 class=\"page-header__title\">Read-a-Thon</h1>"));
    }

    #[test]
    fn test_placeholder() {
        let html = page_header("Read-a-Thon", "Live stats", None).into_string();
        assert!(html.contains(r#"<div class="logo logo--placeholder"></div>"#));
        assert!(!html.contains("<img"));
    }
}
