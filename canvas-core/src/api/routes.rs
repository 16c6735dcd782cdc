macro_rules! api_path {
    ($path:literal) => {
        concat!("/api", $path)
    };
}

pub const ROOT: &str = "/";
pub const HEALTH: &str = "/health";

/// Painting routes. Gallery, artist, year, title and color filters live under
/// the singular `/api/painting` prefix next to the id lookup.
pub mod paintings {
    pub const COLLECTION: &str = api_path!("/paintings");
    pub const ITEM: &str = api_path!("/painting/{id}");
    pub const BY_GALLERY: &str = api_path!("/painting/gallery/{id}");
    pub const BY_ARTIST: &str = api_path!("/painting/artist/{id}");
    pub const BY_YEARS: &str = api_path!("/painting/year/{min}/{max}");
    pub const BY_TITLE: &str = api_path!("/painting/title/{text}");
    pub const BY_COLOR: &str = api_path!("/painting/color/{name}");
}

pub mod artists {
    pub const COLLECTION: &str = api_path!("/artists");
    pub const BY_COUNTRY: &str = api_path!("/artists/{country}");
}

pub mod galleries {
    pub const COLLECTION: &str = api_path!("/galleries");
    pub const BY_COUNTRY: &str = api_path!("/galleries/{country}");
}

/// Substitute `{param}` placeholders in a route template, in order.
///
/// Values are inserted verbatim; callers percent-encode them when needed.
pub fn fill(template: &str, values: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut values = values.iter();
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        out.push_str(&rest[..start]);
        match values.next() {
            Some(value) => out.push_str(value),
            None => out.push_str(&rest[start..=start + len]),
        }
        rest = &rest[start + len + 1..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_replaces_placeholders_in_order() {
        assert_eq!(fill(paintings::ITEM, &["7"]), "/api/painting/7");
        assert_eq!(
            fill(paintings::BY_YEARS, &["1900", "1920"]),
            "/api/painting/year/1900/1920"
        );
        assert_eq!(fill(artists::COLLECTION, &[]), "/api/artists");
    }

    #[test]
    fn fill_leaves_unmatched_placeholders() {
        assert_eq!(
            fill(paintings::BY_YEARS, &["1900"]),
            "/api/painting/year/1900/{max}"
        );
    }
}
