use serde::{Deserialize, Serialize};

use crate::{
    Attributes,
    lenient::{Lenient, valid},
    text::non_empty,
};

/// A gallery record. Only `GalleryCountry` is read by queries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Gallery {
    #[serde(
        rename = "GalleryCountry",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub country: Option<Lenient<String>>,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl Gallery {
    pub fn country_text(&self) -> Option<&str> {
        non_empty(valid(&self.country))
    }
}
