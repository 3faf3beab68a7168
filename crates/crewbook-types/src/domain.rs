use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Sentinel id for "nothing selected" in a company/crew/worker picker.
///
/// Any id `<= 0` is treated the same way; real rows start at 1.
pub const NONE_SELECTED: i64 = -1;

/// Returns the id when it refers to an actual selection.
pub fn selected(id: i64) -> Option<i64> {
    (id > 0).then_some(id)
}

/// Glove sizes offered when logging a glove movement.
pub const GLOVE_SIZES: &[&str] = &["8.5", "9", "9.5", "10", "10.5", "11", "11.5", "12"];

macro_rules! text_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            const NAMES: &'static [&'static str] = &[$($text),+];

            /// Stored (and displayed) spelling.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_ascii_lowercase();
                match normalized.as_str() {
                    $($text => Ok($name::$variant),)+
                    _ => Err(Error::UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                        expected: $name::NAMES,
                    }),
                }
            }
        }
    };
}

text_enum! {
    /// Disciplinary warning category
    WarningType, "warning type" {
        NoSafetyGlasses => "no_safety_glasses",
        LowProduction => "low_production",
        Other => "other",
    }
}

text_enum! {
    /// Protective equipment tracked per worker
    PpeItem, "PPE item" {
        Gloves => "gloves",
        Sleeves => "sleeves",
    }
}

text_enum! {
    /// Direction of a PPE movement
    PpeAction, "PPE action" {
        Issue => "issue",
        Return => "return",
    }
}

text_enum! {
    /// Which workers the crew roster shows.
    ///
    /// `Active` ignores the date range, `Inactive` requires the
    /// termination date to fall inside it, `All` applies neither.
    #[derive(Default)]
    RosterStatus, "roster status" {
        #[default]
        Active => "active",
        Inactive => "inactive",
        All => "all",
    }
}

impl PpeItem {
    /// Only gloves carry a size.
    pub fn is_sized(&self) -> bool {
        matches!(self, PpeItem::Gloves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_treats_non_positive_as_none() {
        assert_eq!(selected(NONE_SELECTED), None);
        assert_eq!(selected(0), None);
        assert_eq!(selected(7), Some(7));
    }

    #[test]
    fn test_warning_type_parse_and_display() {
        assert_eq!(
            "no_safety_glasses".parse::<WarningType>().unwrap(),
            WarningType::NoSafetyGlasses
        );
        assert_eq!(" Other ".parse::<WarningType>().unwrap(), WarningType::Other);
        assert_eq!(WarningType::LowProduction.to_string(), "low_production");
    }

    #[test]
    fn test_unknown_variant_lists_expected_values() {
        let err = "boots".parse::<PpeItem>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("PPE item"));
        assert!(msg.contains("gloves, sleeves"));
    }

    #[test]
    fn test_serde_uses_stored_spelling() {
        let json = serde_json::to_string(&PpeAction::Return).unwrap();
        assert_eq!(json, "\"return\"");
        let back: RosterStatus = serde_json::from_str("\"inactive\"").unwrap();
        assert_eq!(back, RosterStatus::Inactive);
    }

    #[test]
    fn test_only_gloves_are_sized() {
        assert!(PpeItem::Gloves.is_sized());
        assert!(!PpeItem::Sleeves.is_sized());
    }
}
