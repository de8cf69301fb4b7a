use serde::{Deserialize, Serialize};

/// Caption-like description of an image, plus tags suitable for search.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ClipAnalysis {
    pub reconstructed_text: String,
    pub top_tags: Vec<String>,
}

/// One detected face with demographic attributes.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct FaceRecord {
    pub face_id: i64,
    pub gender: String,
    pub race: String,
    pub age_range: String,
}

// This top-level struct is assembled manually from the two analysis steps.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub clip_analysis: ClipAnalysis,
    pub fairface_analysis: Vec<FaceRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_result_json_round_trip() -> color_eyre::Result<()> {
        let analysis = AnalysisResult {
            clip_analysis: crate::get_caption_data(&[]),
            fairface_analysis: crate::get_face_demographics(std::path::Path::new("unused.jpg")),
        };

        let json = serde_json::to_string(&analysis)?;
        let parsed: AnalysisResult = serde_json::from_str(&json)?;
        assert_eq!(parsed, analysis);
        Ok(())
    }

    #[test]
    fn test_json_field_names() -> color_eyre::Result<()> {
        let analysis = AnalysisResult {
            clip_analysis: crate::get_caption_data(&[]),
            fairface_analysis: crate::get_face_demographics(std::path::Path::new("unused.jpg")),
        };

        let value: serde_json::Value = serde_json::to_value(&analysis)?;
        assert!(value.get("clip_analysis").is_some());
        assert!(value.get("fairface_analysis").is_some());
        assert_eq!(
            value["fairface_analysis"][0]["age_range"],
            serde_json::json!("30-39")
        );
        Ok(())
    }
}
