//! Outbound link builders (messaging deep links, phone, email)

const WHATSAPP_BASE_URL: &str = "https://wa.me/";

/// Prefilled text for the gallery page's "Schedule a Visit" link
pub const VISIT_REQUEST_TEXT: &str = "Hi, I would like to schedule a visit to City Hostel";

/// WhatsApp deep link; non-digits are stripped from the number
pub fn whatsapp_link(number: &str, text: Option<&str>) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    match text {
        Some(text) if !text.is_empty() => format!(
            "{}{}?text={}",
            WHATSAPP_BASE_URL,
            digits,
            urlencoding::encode(text)
        ),
        _ => format!("{}{}", WHATSAPP_BASE_URL, digits),
    }
}

/// `tel:` link keeping only a leading `+` and digits
pub fn tel_link(phone: &str) -> String {
    let number: String = phone
        .chars()
        .enumerate()
        .filter(|(i, c)| c.is_ascii_digit() || (*i == 0 && *c == '+'))
        .map(|(_, c)| c)
        .collect();
    format!("tel:{}", number)
}

pub fn mailto_link(email: &str) -> String {
    format!("mailto:{}", email.trim())
}
