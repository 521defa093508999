//! Settings page markup.
//!
//! Presentation only: values come from a [`Configuration`], submissions go
//! back through the save use case.

use std::fmt::Write;

use post_stats_domain::{
    config::{Configuration, Location, SettingKey},
    model::Notice,
    render::escape_html,
};

pub const PAGE_TITLE: &str = "Word Count Settings";
pub const MENU_TITLE: &str = "Word Count";
pub const PAGE_SLUG: &str = "word-count-settings-page";

/// Renders the settings form for the host's admin area.
#[derive(Debug, Clone)]
pub struct AdminPage {
    action: String,
}

impl Default for AdminPage {
    fn default() -> Self {
        Self::new("options.php")
    }
}

impl AdminPage {
    /// `action` is the URL the form posts to.
    pub fn new(action: impl Into<String>) -> Self {
        Self { action: action.into() }
    }

    pub fn render(&self, config: &Configuration, notices: &[Notice]) -> String {
        let mut html = String::with_capacity(1024);
        html.push_str("<div class=\"wrap\">\n");
        let _ = writeln!(html, "<h1>{PAGE_TITLE}</h1>");

        for notice in notices {
            let _ = writeln!(
                html,
                "<div id=\"setting-error-{code}\" class=\"notice notice-error\"><p><strong>{message}</strong></p></div>",
                code = escape_html(&notice.code),
                message = escape_html(&notice.message),
            );
        }

        let _ = writeln!(html, "<form action=\"{}\" method=\"POST\">", escape_html(&self.action));
        let _ = writeln!(html, "<input type=\"hidden\" name=\"option_page\" value=\"{PAGE_SLUG}\">");
        html.push_str("<table class=\"form-table\" role=\"presentation\">\n");
        for key in SettingKey::ALL {
            let _ = writeln!(
                html,
                "<tr><th scope=\"row\">{}</th><td>{}</td></tr>",
                key.label(),
                field_control(key, config)
            );
        }
        html.push_str("</table>\n");
        html.push_str("<p class=\"submit\"><input type=\"submit\" name=\"submit\" class=\"button button-primary\" value=\"Save Changes\"></p>\n");
        html.push_str("</form>\n</div>\n");
        html
    }
}

fn field_control(key: SettingKey, config: &Configuration) -> String {
    match key {
        SettingKey::Location => location_select(config.location),
        SettingKey::Headline => format!(
            "<input type=\"text\" name=\"{}\" value=\"{}\">",
            key.as_str(),
            escape_html(config.headline.as_str())
        ),
        SettingKey::ShowWordCount => checkbox(key, config.show_word_count),
        SettingKey::ShowCharCount => checkbox(key, config.show_char_count),
        SettingKey::ShowReadTime => checkbox(key, config.show_read_time),
    }
}

fn location_select(current: Location) -> String {
    let mut html = format!("<select name=\"{}\">", SettingKey::Location.as_str());
    for location in Location::ALL {
        let selected = if location == current { " selected=\"selected\"" } else { "" };
        let _ = write!(html, "<option value=\"{location}\"{selected}>{}</option>", location.label());
    }
    html.push_str("</select>");
    html
}

fn checkbox(key: SettingKey, checked: bool) -> String {
    let checked = if checked { " checked=\"checked\"" } else { "" };
    format!("<input type=\"checkbox\" name=\"{}\" value=\"1\"{checked}>", key.as_str())
}

#[cfg(test)]
mod tests {
    use post_stats_domain::{
        config::Headline,
        validation::{LOCATION_ERROR_CODE, LOCATION_ERROR_MESSAGE},
    };

    use super::*;

    #[test]
    fn default_form_has_every_control() {
        let html = AdminPage::default().render(&Configuration::default(), &[]);
        assert!(html.contains("<h1>Word Count Settings</h1>"));
        assert!(html.contains("<form action=\"options.php\" method=\"POST\">"));
        assert!(html.contains("<option value=\"begin\" selected=\"selected\">Beginning of post</option>"));
        assert!(html.contains("<option value=\"end\">End of post</option>"));
        assert!(html.contains("<input type=\"text\" name=\"headline\" value=\"Post Statistics\">"));
        for name in ["showWordCount", "showCharCount", "showReadTime"] {
            assert!(html.contains(&format!("name=\"{name}\" value=\"1\" checked=\"checked\"")));
        }
        assert!(!html.contains("notice-error"));
    }

    #[test]
    fn reflects_configuration_and_escapes_headline() {
        let config = Configuration {
            location: Location::End,
            headline: Headline::new("\"Stats\" <now>"),
            show_char_count: false,
            ..Configuration::default()
        };
        let html = AdminPage::new("/save?a=1&b=2").render(&config, &[]);
        assert!(html.contains("<option value=\"end\" selected=\"selected\">"));
        assert!(html.contains("value=\"&quot;Stats&quot; &lt;now&gt;\""));
        assert!(html.contains("<input type=\"checkbox\" name=\"showCharCount\" value=\"1\">"));
        assert!(html.contains("action=\"/save?a=1&amp;b=2\""));
    }

    #[test]
    fn renders_pending_notices_above_form() {
        let notice = Notice::error(SettingKey::Location, LOCATION_ERROR_CODE, LOCATION_ERROR_MESSAGE);
        let html = AdminPage::default().render(&Configuration::default(), &[notice]);
        let notice_at = html.find("notice notice-error").expect("notice rendered");
        assert!(notice_at < html.find("<form").unwrap());
        assert!(html.contains(LOCATION_ERROR_MESSAGE));
    }
}
