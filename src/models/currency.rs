use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

/// Display currency for prices and stock values.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    ToSchema,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Cad,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd | Currency::Cad => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
        }
    }
}
