use serde::{Deserialize, Serialize};

use crate::{
    Attributes,
    lenient::{Lenient, valid},
    scalar::Scalar,
    text::non_empty,
};

/// A painting record as stored in the nested paintings document.
///
/// Gallery and artist data are denormalized into each painting when the
/// document is produced, so lookups by gallery or artist id never touch the
/// other collections. Only the attributes that queries read are modeled;
/// everything else lives in `attributes` and is echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Painting {
    #[serde(
        rename = "paintingID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub painting_id: Option<Lenient<Scalar>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Lenient<String>>,
    #[serde(
        rename = "yearOfWork",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub year_of_work: Option<Lenient<Scalar>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Lenient<GalleryRef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<Lenient<ArtistRef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Lenient<PaintingDetails>>,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl Painting {
    pub fn painting_id(&self) -> Option<&Scalar> {
        valid(&self.painting_id)
    }

    pub fn gallery_id(&self) -> Option<&Scalar> {
        valid(&valid(&self.gallery)?.gallery_id)
    }

    pub fn artist_id(&self) -> Option<&Scalar> {
        valid(&valid(&self.artist)?.artist_id)
    }

    /// Year of work as a number, when present and numeric.
    pub fn year(&self) -> Option<f64> {
        valid(&self.year_of_work)?.as_number()
    }

    /// Title text; an empty title counts as no title.
    pub fn title_text(&self) -> Option<&str> {
        non_empty(valid(&self.title))
    }

    /// Dominant colors from `details.annotation.dominantColors`.
    ///
    /// A missing or ill-shaped link anywhere along that path yields no
    /// colors; an ill-shaped entry in the list is skipped.
    pub fn dominant_colors(&self) -> impl Iterator<Item = &DominantColor> {
        valid(&self.details)
            .and_then(|details| valid(&details.annotation))
            .and_then(|annotation| valid(&annotation.dominant_colors))
            .into_iter()
            .flatten()
            .filter_map(Lenient::valid)
    }
}

/// Gallery reference embedded in a painting.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GalleryRef {
    #[serde(
        rename = "galleryID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub gallery_id: Option<Lenient<Scalar>>,
    #[serde(flatten)]
    pub attributes: Attributes,
}

/// Artist reference embedded in a painting.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArtistRef {
    #[serde(
        rename = "artistID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub artist_id: Option<Lenient<Scalar>>,
    #[serde(flatten)]
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PaintingDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<Lenient<Annotation>>,
    #[serde(flatten)]
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(
        rename = "dominantColors",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub dominant_colors: Option<Lenient<Vec<Lenient<DominantColor>>>>,
    #[serde(flatten)]
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DominantColor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Lenient<String>>,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl DominantColor {
    pub fn name_text(&self) -> Option<&str> {
        non_empty(valid(&self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn water_lilies() -> serde_json::Value {
        json!({
            "paintingID": 7,
            "title": "Water Lilies",
            "yearOfWork": 1919,
            "medium": "Oil on canvas",
            "gallery": { "galleryID": 3, "galleryName": "Musée de l'Orangerie" },
            "artist": { "artistID": "12", "lastName": "Monet" },
            "details": {
                "annotation": {
                    "dominantColors": [
                        { "name": "Pewter", "web": "#8e9294" },
                        { "name": "" },
                        { "web": "#203030" }
                    ],
                    "palette": "cool"
                },
                "width": 200
            }
        })
    }

    #[test]
    fn modeled_fields_are_reachable_through_accessors() {
        let painting: Painting = serde_json::from_value(water_lilies()).unwrap();

        assert_eq!(painting.painting_id(), Some(&Scalar::Integer(7)));
        assert_eq!(painting.gallery_id(), Some(&Scalar::Integer(3)));
        assert_eq!(painting.artist_id(), Some(&Scalar::Text("12".into())));
        assert_eq!(painting.year(), Some(1919.0));
        assert_eq!(painting.title_text(), Some("Water Lilies"));

        let names: Vec<_> = painting
            .dominant_colors()
            .map(DominantColor::name_text)
            .collect();
        assert_eq!(names, vec![Some("Pewter"), None, None]);
    }

    #[test]
    fn unmodeled_attributes_survive_a_round_trip() {
        let source = water_lilies();
        let painting: Painting = serde_json::from_value(source.clone()).unwrap();

        assert_eq!(serde_json::to_value(&painting).unwrap(), source);
    }

    #[test]
    fn missing_paths_read_as_absent() {
        let painting: Painting =
            serde_json::from_value(json!({ "paintingID": 1, "details": {} }))
                .unwrap();

        assert_eq!(painting.gallery_id(), None);
        assert_eq!(painting.artist_id(), None);
        assert_eq!(painting.year(), None);
        assert_eq!(painting.title_text(), None);
        assert!(painting.dominant_colors().next().is_none());
    }

    #[test]
    fn ill_shaped_fields_read_as_absent_and_are_echoed() {
        let source = json!({
            "paintingID": true,
            "title": 1919,
            "yearOfWork": { "circa": 1900 },
            "gallery": "Orangerie",
            "artist": { "artistID": [12] },
            "details": {
                "annotation": {
                    "dominantColors": ["green", { "name": 5 }, { "name": "Pewter" }]
                }
            }
        });
        let painting: Painting = serde_json::from_value(source.clone()).unwrap();

        assert_eq!(painting.painting_id(), None);
        assert_eq!(painting.title_text(), None);
        assert_eq!(painting.year(), None);
        assert_eq!(painting.gallery_id(), None);
        assert_eq!(painting.artist_id(), None);

        let names: Vec<_> = painting
            .dominant_colors()
            .map(DominantColor::name_text)
            .collect();
        assert_eq!(names, vec![None, Some("Pewter")]);

        assert_eq!(serde_json::to_value(&painting).unwrap(), source);
    }
}
