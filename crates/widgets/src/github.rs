//! GitHub contribution chart.

use folio_theme::ColorSet;

const CHART_BASE_URL: &str = "https://ghchart.rshah.org";

/// Contribution chart image tinted with the theme's primary color.
pub fn chart_url(user: &str, colors: &ColorSet) -> String {
    format!("{}/{}/{}", CHART_BASE_URL, chart_tint(colors), user.trim())
}

/// Profile page for `user`.
pub fn profile_url(user: &str) -> String {
    format!("https://github.com/{}", user.trim())
}

// The chart service only takes six hex digits.
fn chart_tint(colors: &ColorSet) -> String {
    let digits = colors.primary.hex_digits();
    if digits.len() == 6 {
        return digits.to_string();
    }
    let rgba = colors.primary.rgba();
    format!("{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}
