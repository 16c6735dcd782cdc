//! Messages returned in place of data when a query matches nothing.
//!
//! These are sent with a success status; clients tell a miss apart from a
//! result by the `message` key.

pub const PAINTING_NOT_FOUND: &str = "Painting Not Found";
pub const NO_PAINTINGS_FOR_GALLERY: &str = "No Paintings Found For This Gallery";
pub const NO_PAINTINGS_FOR_ARTIST: &str = "No Paintings Found For This Artist";
pub const NO_PAINTINGS_IN_YEARS: &str = "No Paintings Found In This Year Range";
pub const NO_PAINTINGS_WITH_TITLE: &str =
    "No Paintings Found With This Title Text";
pub const NO_PAINTINGS_WITH_COLOR: &str = "No Paintings Found With This Color";
pub const NO_ARTISTS_FOR_COUNTRY: &str = "No Artists Found For This Country";
pub const NO_GALLERIES_FOR_COUNTRY: &str = "No Galleries Found For This Country";
