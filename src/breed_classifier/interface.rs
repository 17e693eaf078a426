use serde::Deserialize;

/// The structured report returned by the prediction endpoint. Field names on
/// the wire are camelCase; fields the endpoint omits fall back to blank
/// rather than failing deserialization, and surface as blank in the UI.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BreedReport {
    pub breed: String,
    pub confidence: f32,
    pub dairy_level: String,
    pub purpose: String,
    pub usability_score: f32,
    pub evidence: Vec<String>,
}

/// One image in, one report out. The state machine only distinguishes
/// "succeeded with a report" from "failed for any reason", so implementations
/// fold every failure mode into the error side.
pub trait BreedClassifier: Send + Sync {
    fn classify(
        &self,
        image: &[u8],
    ) -> Result<BreedReport, Box<dyn std::error::Error + Send + Sync>>;
}
