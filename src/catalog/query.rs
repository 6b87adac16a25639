//! Query facade over the catalog.
//!
//! Every query is one pass over one collection. Results keep file order.
//! Text comparisons fold both sides to lowercase.

use crate::catalog::model::{Artist, Gallery, Painting};
use crate::catalog::store::Catalog;

impl Catalog {
    pub fn paintings(&self) -> &[Painting] {
        &self.paintings
    }

    /// First painting with the given id.
    pub fn painting_by_id(&self, id: i64) -> Option<&Painting> {
        self.paintings.iter().find(|p| p.painting_id == id)
    }

    pub fn paintings_by_gallery_id(&self, gallery_id: i64) -> Vec<&Painting> {
        self.paintings
            .iter()
            .filter(|p| p.gallery.gallery_id == gallery_id)
            .collect()
    }

    pub fn paintings_by_artist_id(&self, artist_id: i64) -> Vec<&Painting> {
        self.paintings
            .iter()
            .filter(|p| p.artist.artist_id == artist_id)
            .collect()
    }

    /// Paintings with `min <= yearOfWork <= max`. An inverted range is empty.
    pub fn paintings_by_year_range(&self, min: i64, max: i64) -> Vec<&Painting> {
        self.paintings
            .iter()
            .filter(|p| (min..=max).contains(&p.year_of_work))
            .collect()
    }

    /// Paintings whose title contains `text`, ignoring case.
    pub fn paintings_by_title(&self, text: &str) -> Vec<&Painting> {
        let needle = text.to_lowercase();
        self.paintings
            .iter()
            .filter(|p| p.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Paintings with a dominant color named exactly `name`, ignoring case.
    pub fn paintings_by_color_name(&self, name: &str) -> Vec<&Painting> {
        let name = name.to_lowercase();
        self.paintings
            .iter()
            .filter(|p| p.dominant_color_names().any(|c| c.to_lowercase() == name))
            .collect()
    }

    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub fn artists_by_country(&self, country: &str) -> Vec<&Artist> {
        let country = country.to_lowercase();
        self.artists
            .iter()
            .filter(|a| a.nationality.to_lowercase() == country)
            .collect()
    }

    pub fn galleries(&self) -> &[Gallery] {
        &self.galleries
    }

    pub fn galleries_by_country(&self, country: &str) -> Vec<&Gallery> {
        let country = country.to_lowercase();
        self.galleries
            .iter()
            .filter(|g| g.country.to_lowercase() == country)
            .collect()
    }
}
