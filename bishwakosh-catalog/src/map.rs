//! Map embed links

/// Read-only map view centred on `country_name`.
pub fn map_embed_url(country_name: &str) -> String {
    format!(
        "https://maps.google.com/maps?q={}&t=&z=5&ie=UTF8&iwloc=&output=embed",
        urlencoding::encode(country_name)
    )
}
