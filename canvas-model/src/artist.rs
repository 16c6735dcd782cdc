use serde::{Deserialize, Serialize};

use crate::{
    Attributes,
    lenient::{Lenient, valid},
    text::non_empty,
};

/// An artist record. Only `Nationality` is read by queries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Artist {
    #[serde(
        rename = "Nationality",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub nationality: Option<Lenient<String>>,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl Artist {
    pub fn nationality_text(&self) -> Option<&str> {
        non_empty(valid(&self.nationality))
    }
}
