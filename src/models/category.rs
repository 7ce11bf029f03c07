use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use utoipa::ToSchema;

/// Catalog categories shared by materials and inventory items.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumString,
    EnumIter,
    ToSchema,
)]
#[strum(ascii_case_insensitive)]
pub enum MaterialCategory {
    #[serde(rename = "Pipes & Fittings")]
    #[strum(serialize = "Pipes & Fittings")]
    PipesAndFittings,
    #[serde(rename = "Masonry")]
    #[strum(serialize = "Masonry")]
    Masonry,
    #[serde(rename = "Tiles & Flooring")]
    #[strum(serialize = "Tiles & Flooring")]
    TilesAndFlooring,
    #[serde(rename = "Electrical")]
    #[strum(serialize = "Electrical")]
    Electrical,
    #[serde(rename = "Hardware")]
    #[strum(serialize = "Hardware")]
    Hardware,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn display_matches_catalog_labels() {
        assert_eq!(MaterialCategory::PipesAndFittings.to_string(), "Pipes & Fittings");
        assert_eq!(MaterialCategory::TilesAndFlooring.to_string(), "Tiles & Flooring");
        assert_eq!(MaterialCategory::Masonry.as_ref(), "Masonry");
    }

    #[test]
    fn parses_labels_ignoring_ascii_case() {
        assert_eq!(
            MaterialCategory::from_str("pipes & fittings").unwrap(),
            MaterialCategory::PipesAndFittings
        );
        assert!(MaterialCategory::from_str("Lumber").is_err());
    }

    #[test]
    fn iteration_follows_declaration_order() {
        let labels: Vec<String> = MaterialCategory::iter().map(|c| c.to_string()).collect();
        assert_eq!(
            labels,
            vec![
                "Pipes & Fittings",
                "Masonry",
                "Tiles & Flooring",
                "Electrical",
                "Hardware"
            ]
        );
    }
}
