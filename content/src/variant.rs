use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::theme::{INDIGO, SLATE, Theme};

// how the modules grid renders each module
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModuleLayout {
    // icon, name and headline as a clickable card
    Compact,
    // the full record with an alternating background
    Detailed,
}

// the landing page ships in two variants, each pairing a token set with a grid layout
//
// the variant is chosen once when the page is composed and never changes afterwards
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageVariant {
    #[default]
    Showcase,
    Catalog,
}

impl PageVariant {
    pub const ALL: [Self; 2] = [Self::Showcase, Self::Catalog];

    pub fn theme(self) -> &'static Theme {
        match self {
            Self::Showcase => &INDIGO,
            Self::Catalog => &SLATE,
        }
    }

    pub fn module_layout(self) -> ModuleLayout {
        match self {
            Self::Showcase => ModuleLayout::Detailed,
            Self::Catalog => ModuleLayout::Compact,
        }
    }
}

impl fmt::Display for PageVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Showcase => "Showcase",
            Self::Catalog => "Catalog",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for PageVariant {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Showcase" | "showcase" => Ok(Self::Showcase),
            "Catalog" | "catalog" => Ok(Self::Catalog),
            other => Err(format!("unknown page variant {other}, expected Showcase or Catalog")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_pair_theme_and_layout() {
        assert_eq!(PageVariant::Showcase.theme().name, "indigo");
        assert_eq!(PageVariant::Showcase.module_layout(), ModuleLayout::Detailed);
        assert_eq!(PageVariant::Catalog.theme().name, "slate");
        assert_eq!(PageVariant::Catalog.module_layout(), ModuleLayout::Compact);
    }

    #[test]
    fn variant_names_round_trip_through_strings() {
        for variant in PageVariant::ALL {
            assert_eq!(variant.to_string().parse::<PageVariant>(), Ok(variant));
        }
        assert_eq!("catalog".parse::<PageVariant>(), Ok(PageVariant::Catalog));
        assert!("unknown".parse::<PageVariant>().is_err());
    }

    #[test]
    fn serialized_names_match_display_names() {
        for variant in PageVariant::ALL {
            let json = serde_json::to_string(&variant).expect("serializable");
            assert_eq!(json, format!("\"{variant}\""));

            let parsed: PageVariant = serde_json::from_str(&json).expect("deserializable");
            assert_eq!(parsed, variant);
        }
        assert!(serde_json::from_str::<PageVariant>("\"Tartan\"").is_err());
    }

    #[test]
    fn layouts_serialize_by_name() {
        let json = serde_json::to_value(PageVariant::Catalog.module_layout()).expect("serializable");
        assert_eq!(json, serde_json::json!("Compact"));
    }
}
