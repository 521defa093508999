//! Settings-form input rules.

use crate::{
    analysis::sanitize_text_field,
    config::{Headline, Location, SettingKey},
    model::Notice,
};

pub const LOCATION_ERROR_CODE: &str = "location_error";
pub const LOCATION_ERROR_MESSAGE: &str = "Display location must be either beginning or end.";

/// Accepts exactly `begin` or `end`.
///
/// On rejection the caller gets the notice to show; keeping the previously
/// stored value is up to the caller.
pub fn validate_location(candidate: &str) -> Result<Location, Notice> {
    candidate
        .parse()
        .map_err(|_| Notice::error(SettingKey::Location, LOCATION_ERROR_CODE, LOCATION_ERROR_MESSAGE))
}

pub fn sanitize_headline(raw: &str) -> Headline {
    Headline::new(sanitize_text_field(raw))
}

/// Checkbox semantics: unchecked boxes are simply absent from a form post.
pub fn parse_checkbox(raw: Option<&str>) -> bool {
    raw.map(str::trim).is_some_and(|value| matches!(value, "1" | "on" | "true"))
}
