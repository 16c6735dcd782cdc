//! Single-record predicates behind the catalog queries.
//!
//! Every predicate answers `false` when the field it inspects is absent.

use canvas_model::{Artist, Gallery, Painting};

use super::{CaseFolded, YearRange};

pub fn has_painting_id(painting: &Painting, id: &str) -> bool {
    painting
        .painting_id()
        .is_some_and(|stored| stored.loosely_eq(id))
}

pub fn has_gallery_id(painting: &Painting, id: &str) -> bool {
    painting
        .gallery_id()
        .is_some_and(|stored| stored.loosely_eq(id))
}

pub fn has_artist_id(painting: &Painting, id: &str) -> bool {
    painting
        .artist_id()
        .is_some_and(|stored| stored.loosely_eq(id))
}

pub fn painted_within(painting: &Painting, range: &YearRange) -> bool {
    painting.year().is_some_and(|year| range.contains(year))
}

pub fn title_contains(painting: &Painting, text: &CaseFolded) -> bool {
    painting
        .title_text()
        .is_some_and(|title| text.is_contained_in(title))
}

/// Any one dominant color whose name contains `name` qualifies the painting.
pub fn has_color_named(painting: &Painting, name: &CaseFolded) -> bool {
    painting
        .dominant_colors()
        .filter_map(|color| color.name_text())
        .any(|color_name| name.is_contained_in(color_name))
}

pub fn artist_from(artist: &Artist, country: &CaseFolded) -> bool {
    artist
        .nationality_text()
        .is_some_and(|nationality| country.matches_exactly(nationality))
}

pub fn gallery_in(gallery: &Gallery, country: &CaseFolded) -> bool {
    gallery
        .country_text()
        .is_some_and(|gallery_country| country.matches_exactly(gallery_country))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn painting(value: serde_json::Value) -> Painting {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn id_predicates_compare_loosely() {
        let p = painting(json!({
            "paintingID": 7,
            "gallery": { "galleryID": "3" },
            "artist": { "artistID": 12 }
        }));

        assert!(has_painting_id(&p, "7"));
        assert!(has_gallery_id(&p, "3"));
        assert!(!has_gallery_id(&p, "03"));
        assert!(has_artist_id(&p, "12"));
        assert!(!has_artist_id(&p, "13"));
    }

    #[test]
    fn absent_references_never_match() {
        let p = painting(json!({ "paintingID": 7, "gallery": {} }));

        assert!(!has_gallery_id(&p, "7"));
        assert!(!has_artist_id(&p, "7"));
        assert!(!painted_within(&p, &YearRange::new(i64::MIN, i64::MAX)));
        assert!(!title_contains(&p, &CaseFolded::new("")));
        assert!(!has_color_named(&p, &CaseFolded::new("")));
    }

    #[test]
    fn text_years_are_compared_numerically() {
        let p = painting(json!({ "yearOfWork": "1919" }));
        assert!(painted_within(&p, &YearRange::new(1900, 1920)));

        let undated = painting(json!({ "yearOfWork": "circa 1919" }));
        assert!(!painted_within(&undated, &YearRange::new(1900, 1920)));
    }

    #[test]
    fn one_matching_color_is_enough() {
        let p = painting(json!({
            "details": { "annotation": { "dominantColors": [
                { "name": "Ivory" },
                { "web": "#000000" },
                { "name": "Dark Slate Gray" }
            ]}}
        }));

        assert!(has_color_named(&p, &CaseFolded::new("slate")));
        assert!(has_color_named(&p, &CaseFolded::new("IVORY")));
        assert!(!has_color_named(&p, &CaseFolded::new("crimson")));
    }

    #[test]
    fn countries_require_the_whole_name() {
        let artist: Artist =
            serde_json::from_value(json!({ "Nationality": "France" })).unwrap();
        let gallery: Gallery =
            serde_json::from_value(json!({ "GalleryCountry": "French Polynesia" }))
                .unwrap();

        assert!(artist_from(&artist, &CaseFolded::new("france")));
        assert!(!gallery_in(&gallery, &CaseFolded::new("France")));
        assert!(gallery_in(&gallery, &CaseFolded::new("french polynesia")));
    }
}
