//! Catalog record types.
//!
//! Only the fields the queries look at are typed. Every other field of a
//! source record lands in `extra` and is written back out unchanged, so a
//! response carries the whole record as it appears in the data file.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A painting with its nested artist, gallery and annotation records.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Painting {
    #[serde(rename = "paintingID")]
    pub painting_id: i64,

    pub title: String,

    #[serde(rename = "yearOfWork")]
    pub year_of_work: i64,

    pub artist: PaintingArtist,

    pub gallery: PaintingGallery,

    #[serde(default)]
    pub details: PaintingDetails,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Painting {
    /// Names of the dominant colors, in annotation order.
    pub fn dominant_color_names(&self) -> impl Iterator<Item = &str> {
        self.details
            .annotation
            .dominant_colors
            .iter()
            .map(|c| c.name.as_str())
    }
}

/// Artist summary embedded in a painting.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PaintingArtist {
    #[serde(rename = "artistID")]
    pub artist_id: i64,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Gallery summary embedded in a painting.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PaintingGallery {
    #[serde(rename = "galleryID")]
    pub gallery_id: i64,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct PaintingDetails {
    #[serde(default)]
    pub annotation: Annotation,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Image annotation; holds the dominant colors used by the color query.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Annotation {
    #[serde(rename = "dominantColors", default)]
    pub dominant_colors: Vec<DominantColor>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DominantColor {
    pub name: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An entry of the artists collection.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Artist {
    #[serde(rename = "ArtistID")]
    pub artist_id: i64,

    #[serde(rename = "Nationality")]
    pub nationality: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An entry of the galleries collection.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Gallery {
    #[serde(rename = "GalleryID")]
    pub gallery_id: i64,

    #[serde(rename = "GalleryCountry")]
    pub country: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
