use serde::{Deserialize, Serialize};

/// Unified piece type definition shared across the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PieceType {
    Story,
    Poem,
}

impl PieceType {
    /// Label for display in UI
    pub fn label(&self) -> &str {
        match self {
            Self::Story => "Story",
            Self::Poem => "Poem",
        }
    }

    /// Identifier embedded in prompts and serialized JSON
    pub fn id(&self) -> &str {
        self.label()
    }

    /// UI icon
    pub fn icon(&self) -> &str {
        match self {
            Self::Story => "📖",
            Self::Poem => "✒",
        }
    }

    /// All selectable piece types
    pub fn all() -> [PieceType; 2] {
        [Self::Story, Self::Poem]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Genre {
    Fantasy,
    Romance,
    Mystery,
    Motivational,
    #[serde(rename = "Sci-Fi")]
    SciFi,
}

impl Genre {
    pub fn label(&self) -> &str {
        match self {
            Self::Fantasy => "Fantasy",
            Self::Romance => "Romance",
            Self::Mystery => "Mystery",
            Self::Motivational => "Motivational",
            Self::SciFi => "Sci-Fi",
        }
    }

    pub fn id(&self) -> &str {
        self.label()
    }

    pub fn icon(&self) -> &str {
        match self {
            Self::Fantasy => "🏰",
            Self::Romance => "💘",
            Self::Mystery => "🔍",
            Self::Motivational => "🌄",
            Self::SciFi => "🚀",
        }
    }

    pub fn all() -> [Genre; 5] {
        [
            Self::Fantasy,
            Self::Romance,
            Self::Mystery,
            Self::Motivational,
            Self::SciFi,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Dark,
    Humorous,
    Inspirational,
    Tragic,
    Suspenseful,
}

impl Tone {
    pub fn label(&self) -> &str {
        match self {
            Self::Dark => "Dark",
            Self::Humorous => "Humorous",
            Self::Inspirational => "Inspirational",
            Self::Tragic => "Tragic",
            Self::Suspenseful => "Suspenseful",
        }
    }

    /// Lowercase identifier embedded in prompts and serialized JSON
    pub fn id(&self) -> &str {
        match self {
            Self::Dark => "dark",
            Self::Humorous => "humorous",
            Self::Inspirational => "inspirational",
            Self::Tragic => "tragic",
            Self::Suspenseful => "suspenseful",
        }
    }

    pub fn all() -> [Tone; 5] {
        [
            Self::Dark,
            Self::Humorous,
            Self::Inspirational,
            Self::Tragic,
            Self::Suspenseful,
        ]
    }
}

/// Requested size category, distinct from an actual word count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    Short,
    Medium,
    Long,
}

impl Length {
    /// Label for the length selector
    pub fn label(&self) -> &str {
        match self {
            Self::Short => "Short (<150 words)",
            Self::Medium => "Medium (150-400 words)",
            Self::Long => "Long (>400 words)",
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }

    /// Word-count gloss embedded in the generation prompt
    pub fn gloss(&self) -> &str {
        match self {
            Self::Short => "around 150 words",
            Self::Medium => "between 150 and 400 words",
            Self::Long => "more than 400 words",
        }
    }

    pub fn all() -> [Length; 3] {
        [Self::Short, Self::Medium, Self::Long]
    }
}

/// The user's request configuration. The four enum fields must be set
/// before a generation request may be issued; the free-text fields are
/// optional (empty means absent).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParams {
    #[serde(rename = "type")]
    pub piece_type: Option<PieceType>,
    pub genre: Option<Genre>,
    pub tone: Option<Tone>,
    pub length: Option<Length>,
    #[serde(default)]
    pub custom_title: String,
    #[serde(default)]
    pub custom_prompt: String,
}

impl GenerationParams {
    pub fn is_complete(&self) -> bool {
        self.piece_type.is_some()
            && self.genre.is_some()
            && self.tone.is_some()
            && self.length.is_some()
    }
}

/// The required form fields, used as keys for per-field validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Type,
    Genre,
    Tone,
    Length,
}

impl Field {
    pub fn label(&self) -> &str {
        match self {
            Self::Type => "Type",
            Self::Genre => "Genre",
            Self::Tone => "Tone",
            Self::Length => "Length",
        }
    }
}

/// A single-field mutation of the parameter record.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamChange {
    Type(PieceType),
    Genre(Genre),
    Tone(Tone),
    Length(Length),
    Title(String),
    Prompt(String),
}

impl ParamChange {
    /// The required field this change touches, if any. Free-text changes
    /// have no validation error to clear.
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::Type(_) => Some(Field::Type),
            Self::Genre(_) => Some(Field::Genre),
            Self::Tone(_) => Some(Field::Tone),
            Self::Length(_) => Some(Field::Length),
            Self::Title(_) | Self::Prompt(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids() {
        assert_eq!(PieceType::Story.id(), "Story");
        assert_eq!(Genre::SciFi.id(), "Sci-Fi");
        assert_eq!(Tone::Humorous.id(), "humorous");
        assert_eq!(Length::Short.id(), "short");
    }

    #[test]
    fn test_length_gloss() {
        assert_eq!(Length::Short.gloss(), "around 150 words");
        assert_eq!(Length::Medium.gloss(), "between 150 and 400 words");
        assert_eq!(Length::Long.gloss(), "more than 400 words");
    }

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(PieceType::all().len(), 2);
        assert_eq!(Genre::all().len(), 5);
        assert_eq!(Tone::all().len(), 5);
        assert_eq!(Length::all().len(), 3);
    }

    #[test]
    fn test_params_completeness() {
        let mut params = GenerationParams::default();
        assert!(!params.is_complete());

        params.piece_type = Some(PieceType::Story);
        params.genre = Some(Genre::Fantasy);
        params.tone = Some(Tone::Humorous);
        assert!(!params.is_complete());

        params.length = Some(Length::Short);
        assert!(params.is_complete());
    }

    #[test]
    fn test_params_json_field_names() {
        let params = GenerationParams {
            piece_type: Some(PieceType::Story),
            genre: Some(Genre::SciFi),
            tone: Some(Tone::Dark),
            length: Some(Length::Medium),
            custom_title: "Last Light".into(),
            custom_prompt: String::new(),
        };

        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["type"], "Story");
        assert_eq!(json["genre"], "Sci-Fi");
        assert_eq!(json["tone"], "dark");
        assert_eq!(json["length"], "medium");
        assert_eq!(json["customTitle"], "Last Light");
    }
}
