use serde::{Deserialize, Serialize};

use crate::params::{GenerationParams, Genre, Length, PieceType, Tone};

/// A completed or sample creative output. Replaced wholesale on every new
/// generation or sample selection, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub id: String,
    pub title: String,
    pub content: String,
    pub summary: String,
    pub metadata: ResultMetadata,
}

/// Generation metadata. `params` echoes exactly the parameters that
/// produced this result; the live form is compared against it to decide
/// whether a resubmit is a variation of the same base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultMetadata {
    pub params: GenerationParams,
    #[serde(rename = "type")]
    pub piece_type: PieceType,
    pub genre: Genre,
    pub tone: Tone,
    /// The requested length bucket, not an actual word count.
    pub word_count: Length,
    #[serde(with = "token_usage")]
    pub token_usage: Option<u64>,
    /// Wall-clock seconds, rounded to two decimals.
    pub generation_time: f64,
}

/// Serializes token usage as a number when known and as the literal
/// string "N/A" when the service did not report it.
mod token_usage {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(count) => serializer.serialize_u64(*count),
            None => serializer.serialize_str("N/A"),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Count(u64),
            Sentinel(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Count(count) => Some(count),
            Raw::Sentinel(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(token_usage: Option<u64>) -> GenerationResult {
        let params = GenerationParams {
            piece_type: Some(PieceType::Poem),
            genre: Some(Genre::Romance),
            tone: Some(Tone::Inspirational),
            length: Some(Length::Short),
            ..Default::default()
        };
        GenerationResult {
            id: "gen-1".into(),
            title: "Tide Lines".into(),
            content: "The sea writes\nand rewrites the shore.".into(),
            summary: "A short poem about persistence.".into(),
            metadata: ResultMetadata {
                params,
                piece_type: PieceType::Poem,
                genre: Genre::Romance,
                tone: Tone::Inspirational,
                word_count: Length::Short,
                token_usage,
                generation_time: 3.42,
            },
        }
    }

    #[test]
    fn test_token_usage_serializes_count_as_number() {
        let json = serde_json::to_value(result(Some(512))).unwrap();
        assert_eq!(json["metadata"]["tokenUsage"], 512);
    }

    #[test]
    fn test_token_usage_serializes_missing_as_sentinel() {
        let json = serde_json::to_value(result(None)).unwrap();
        assert_eq!(json["metadata"]["tokenUsage"], "N/A");
    }

    #[test]
    fn test_result_round_trips() {
        let original = result(Some(512));
        let json = serde_json::to_string(&original).unwrap();
        let back: GenerationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_metadata_field_names_match_export_shape() {
        let json = serde_json::to_value(result(None)).unwrap();
        let metadata = &json["metadata"];
        assert_eq!(metadata["type"], "Poem");
        assert_eq!(metadata["wordCount"], "short");
        assert_eq!(metadata["generationTime"], 3.42);
        assert_eq!(metadata["params"]["type"], "Poem");
    }
}
