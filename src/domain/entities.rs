use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for destinations in the seed catalogue.
pub type DestinationId = u32;

/// Shared behaviour of the two categorical destination attributes.
pub trait Category: Copy + Eq + fmt::Debug + 'static {
    /// Attribute name used in error messages.
    const KIND: &'static str;
    const ALL: [Self; 3];

    /// Machine value used in the catalogue JSON and in select options.
    fn value(&self) -> &'static str;

    /// Human-facing option label.
    fn label(&self) -> &'static str;

    fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.value() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    Low,
    Medium,
    High,
}

impl Category for Budget {
    const KIND: &'static str = "budget";
    const ALL: [Self; 3] = [Budget::Low, Budget::Medium, Budget::High];

    fn value(&self) -> &'static str {
        match self {
            Budget::Low => "low",
            Budget::Medium => "medium",
            Budget::High => "high",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Budget::Low => "Budget Friendly",
            Budget::Medium => "Moderate",
            Budget::High => "Luxury",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Security {
    Low,
    Medium,
    High,
}

impl Category for Security {
    const KIND: &'static str = "security";
    // Select order runs from safest to least safe.
    const ALL: [Self; 3] = [Security::High, Security::Medium, Security::Low];

    fn value(&self) -> &'static str {
        match self {
            Security::Low => "low",
            Security::Medium => "medium",
            Security::High => "high",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Security::Low => "Basic Security",
            Security::Medium => "Medium Security",
            Security::High => "High Security",
        }
    }
}

/// How many highlights a card shows before the rest move to the detail panel.
pub const CARD_HIGHLIGHTS: usize = 3;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: DestinationId,
    pub name: String,
    #[serde(alias = "location")]
    pub region: String,
    pub rating: f32,
    pub reviews: u32,
    pub budget: Budget,
    pub security: Security,
    pub description: String,
    #[serde(alias = "priceRange")]
    pub price_range: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl Destination {
    pub fn card_highlights(&self) -> &[String] {
        let end = self.highlights.len().min(CARD_HIGHLIGHTS);
        &self.highlights[..end]
    }

    /// Shortest form of the stored rating: `5` stays `5`, `4.8` stays `4.8`.
    pub fn rating_display(&self) -> String {
        self.rating.to_string()
    }

    pub fn reviews_display(&self) -> String {
        format!("{} reviews", self.reviews)
    }
}

#[cfg(test)]
pub(crate) fn sample(
    id: DestinationId,
    name: &str,
    region: &str,
    rating: f32,
    reviews: u32,
    budget: Budget,
    security: Security,
) -> Destination {
    Destination {
        id,
        name: name.to_string(),
        region: region.to_string(),
        rating,
        reviews,
        budget,
        security,
        description: format!("{name} description"),
        price_range: "PKR 1,000 - 2,000".to_string(),
        highlights: vec!["One".into(), "Two".into(), "Three".into(), "Four".into()],
    }
}
