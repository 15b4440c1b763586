use crate::utils::error::{QuoteError, Result};
use url::Url;

/// Link into the embedded booking widget. The phone number is the only
/// thing passed along; the widget uses it to find the contact.
pub fn booking_link(widget_url: &str, phone: &str) -> Result<Url> {
    let mut url = Url::parse(widget_url).map_err(|e| QuoteError::InvalidConfigValueError {
        field: "booking.widget_url".to_string(),
        value: widget_url.to_string(),
        reason: format!("Invalid URL format: {}", e),
    })?;

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != "phone")
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair("phone", phone);

    Ok(url)
}
