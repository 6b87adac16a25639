//! Loading of the static catalog collections.

use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::model::{Artist, Gallery, Painting};
use crate::config::DataConfig;

/// Error type for catalog loading. Any of these is fatal at startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The three read-only collections, in source file order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(crate) paintings: Vec<Painting>,
    pub(crate) artists: Vec<Artist>,
    pub(crate) galleries: Vec<Gallery>,
}

impl Catalog {
    /// Build a catalog from already parsed records.
    pub fn from_parts(paintings: Vec<Painting>, artists: Vec<Artist>, galleries: Vec<Gallery>) -> Self {
        Self {
            paintings,
            artists,
            galleries,
        }
    }

    /// Load all three collections from the configured data directory.
    pub fn load(config: &DataConfig) -> Result<Self, CatalogError> {
        let paintings: Vec<Painting> = read_collection(&config.paintings_path())?;
        let artists: Vec<Artist> = read_collection(&config.artists_path())?;
        let galleries: Vec<Gallery> = read_collection(&config.galleries_path())?;

        tracing::info!(
            data_dir = %config.dir.display(),
            paintings = paintings.len(),
            artists = artists.len(),
            galleries = galleries.len(),
            "Catalog loaded"
        );

        Ok(Self::from_parts(paintings, artists, galleries))
    }

    pub fn painting_count(&self) -> usize {
        self.paintings.len()
    }

    pub fn artist_count(&self) -> usize {
        self.artists.len()
    }

    pub fn gallery_count(&self) -> usize {
        self.galleries.len()
    }
}

fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
