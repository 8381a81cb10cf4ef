//! Fixed option sets for the store form's choice fields

use serde::{Deserialize, Serialize};

/// A closed set of options a choice field cycles through
pub trait ChoiceOption: Copy + PartialEq + Sized + 'static {
    /// All options in display order
    const ALL: &'static [Self];

    /// Value sent to the store service and shown in the form
    fn label(&self) -> &'static str;

    fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|o| o == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|o| o == self).unwrap_or(0);
        if idx == 0 {
            Self::ALL[Self::ALL.len() - 1]
        } else {
            Self::ALL[idx - 1]
        }
    }
}

/// Where the store is located
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Country {
    #[default]
    Bangladesh,
    #[serde(rename = "USA")]
    Usa,
}

impl ChoiceOption for Country {
    const ALL: &'static [Self] = &[Self::Bangladesh, Self::Usa];

    fn label(&self) -> &'static str {
        match self {
            Self::Bangladesh => "Bangladesh",
            Self::Usa => "USA",
        }
    }
}

/// Store category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Fashion,
    Electronics,
    Food,
}

impl ChoiceOption for Category {
    const ALL: &'static [Self] = &[Self::Fashion, Self::Electronics, Self::Food];

    fn label(&self) -> &'static str {
        match self {
            Self::Fashion => "Fashion",
            Self::Electronics => "Electronics",
            Self::Food => "Food",
        }
    }
}

/// Store currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "BDT")]
    Bdt,
    #[serde(rename = "USD")]
    Usd,
}

impl ChoiceOption for Currency {
    const ALL: &'static [Self] = &[Self::Bdt, Self::Usd];

    fn label(&self) -> &'static str {
        match self {
            Self::Bdt => "BDT",
            Self::Usd => "USD",
        }
    }
}
