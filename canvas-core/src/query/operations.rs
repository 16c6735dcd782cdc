use canvas_model::{Artist, Gallery, Painting};
use tracing::debug;

use super::{CaseFolded, QueryOutcome, YearRange, predicates, select};
use crate::Catalog;

impl Catalog {
    /// First painting whose `paintingID` loosely equals `id`.
    pub fn painting_by_id(&self, id: &str) -> QueryOutcome<&Painting> {
        self.paintings()
            .iter()
            .find(|painting| predicates::has_painting_id(painting, id))
            .into()
    }

    pub fn paintings_by_gallery(&self, id: &str) -> QueryOutcome<Vec<&Painting>> {
        select(self.paintings(), |painting| {
            predicates::has_gallery_id(painting, id)
        })
    }

    pub fn paintings_by_artist(&self, id: &str) -> QueryOutcome<Vec<&Painting>> {
        select(self.paintings(), |painting| {
            predicates::has_artist_id(painting, id)
        })
    }

    /// Paintings dated within `[min, max]`, bounds given as raw path tokens.
    ///
    /// A bound that does not parse leaves nothing to match.
    pub fn paintings_in_years(
        &self,
        min: &str,
        max: &str,
    ) -> QueryOutcome<Vec<&Painting>> {
        match YearRange::parse(min, max) {
            Some(range) => self.paintings_between(range),
            None => {
                debug!(min, max, "year bounds did not parse");
                QueryOutcome::Empty
            }
        }
    }

    pub fn paintings_between(
        &self,
        range: YearRange,
    ) -> QueryOutcome<Vec<&Painting>> {
        select(self.paintings(), |painting| {
            predicates::painted_within(painting, &range)
        })
    }

    pub fn paintings_with_title(
        &self,
        text: &str,
    ) -> QueryOutcome<Vec<&Painting>> {
        let text = CaseFolded::new(text);
        select(self.paintings(), |painting| {
            predicates::title_contains(painting, &text)
        })
    }

    pub fn paintings_with_color(
        &self,
        name: &str,
    ) -> QueryOutcome<Vec<&Painting>> {
        let name = CaseFolded::new(name);
        select(self.paintings(), |painting| {
            predicates::has_color_named(painting, &name)
        })
    }

    pub fn artists_from_country(
        &self,
        country: &str,
    ) -> QueryOutcome<Vec<&Artist>> {
        let country = CaseFolded::new(country);
        select(self.artists(), |artist| {
            predicates::artist_from(artist, &country)
        })
    }

    pub fn galleries_from_country(
        &self,
        country: &str,
    ) -> QueryOutcome<Vec<&Gallery>> {
        let country = CaseFolded::new(country);
        select(self.galleries(), |gallery| {
            predicates::gallery_in(gallery, &country)
        })
    }
}
