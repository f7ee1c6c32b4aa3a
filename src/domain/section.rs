use super::*;

/// Fixed partition of the contact list. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Ceo,
    Peasants,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Ceo, Section::Peasants];

    /// Header label shown above the section's rows.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Ceo => "CEO",
            Section::Peasants => "Peasant",
        }
    }

    /// Label used by the add-contact form's section picker.
    pub fn choice_label(&self) -> &'static str {
        match self {
            Section::Ceo => "CEO",
            Section::Peasants => "Peasants",
        }
    }

    pub fn from_choice(input: &str) -> Result<Self, AppError> {
        match input.trim().to_lowercase().as_str() {
            "1" | "ceo" => Ok(Section::Ceo),
            "2" | "peasant" | "peasants" => Ok(Section::Peasants),
            other => Err(AppError::InvalidInput(format!(
                "'{}' is not a section, choose 1 (CEO) or 2 (Peasants)",
                other
            ))),
        }
    }
}
