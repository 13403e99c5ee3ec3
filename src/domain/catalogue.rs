//! The immutable destination seed set.

use std::collections::HashSet;

use thiserror::Error;

use super::entities::{Destination, DestinationId};

pub const MAX_RATING: f32 = 5.0;

#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error("failed to parse catalogue: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read catalogue file: {0}")]
    Io(#[from] std::io::Error),
    #[error("bundled catalogue asset {0} is missing")]
    MissingAsset(&'static str),
    #[error("destination id {0} appears more than once")]
    DuplicateId(DestinationId),
    #[error("destination {id} has rating {rating}, expected 0 to 5")]
    RatingOutOfRange { id: DestinationId, rating: f32 },
    #[error("destination {0} has no name")]
    MissingName(DestinationId),
}

/// Read-only list of destinations in load order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalogue {
    destinations: Vec<Destination>,
}

impl Catalogue {
    pub fn new(destinations: Vec<Destination>) -> Result<Self, CatalogueError> {
        let mut seen = HashSet::with_capacity(destinations.len());
        for destination in &destinations {
            if !seen.insert(destination.id) {
                return Err(CatalogueError::DuplicateId(destination.id));
            }
            if !destination.rating.is_finite()
                || destination.rating < 0.0
                || destination.rating > MAX_RATING
            {
                return Err(CatalogueError::RatingOutOfRange {
                    id: destination.id,
                    rating: destination.rating,
                });
            }
            if destination.name.trim().is_empty() {
                return Err(CatalogueError::MissingName(destination.id));
            }
        }
        Ok(Self { destinations })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogueError> {
        let destinations: Vec<Destination> = serde_json::from_str(json)?;
        Self::new(destinations)
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn get(&self, id: DestinationId) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}
