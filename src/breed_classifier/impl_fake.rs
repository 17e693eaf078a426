use crate::breed_classifier::interface::{BreedClassifier, BreedReport};
use crate::library::logger::interface::Logger;
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;

struct BreedProfile {
    breed: &'static str,
    dairy_level: &'static str,
    purpose: &'static str,
}

const BREEDS: [BreedProfile; 8] = [
    BreedProfile {
        breed: "Holstein Friesian",
        dairy_level: "High",
        purpose: "Dairy",
    },
    BreedProfile {
        breed: "Gir",
        dairy_level: "High",
        purpose: "Dairy",
    },
    BreedProfile {
        breed: "Sahiwal",
        dairy_level: "High",
        purpose: "Dairy",
    },
    BreedProfile {
        breed: "Red Sindhi",
        dairy_level: "Medium",
        purpose: "Dairy",
    },
    BreedProfile {
        breed: "Tharparkar",
        dairy_level: "Medium",
        purpose: "Dual Purpose",
    },
    BreedProfile {
        breed: "Kankrej",
        dairy_level: "Medium",
        purpose: "Dual Purpose",
    },
    BreedProfile {
        breed: "Ongole",
        dairy_level: "Low",
        purpose: "Draught",
    },
    BreedProfile {
        breed: "Hallikar",
        dairy_level: "Low",
        purpose: "Draught",
    },
];

/// Offline stand-in for the prediction endpoint: picks a random breed
/// profile and synthesizes a plausible report. Used by `--demo`.
pub struct BreedClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl BreedClassifierFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("classifier").with_namespace("fake"),
        }
    }
}

impl BreedClassifier for BreedClassifierFake {
    fn classify(
        &self,
        image: &[u8],
    ) -> Result<BreedReport, Box<dyn std::error::Error + Send + Sync>> {
        self.logger
            .info(&format!("Classifying {} bytes with fake classifier...", image.len()))?;

        // Give the loading steps a moment on screen, like a real round trip.
        std::thread::sleep(std::time::Duration::from_millis(1500));

        let mut rng = rand::rng();
        let index_dist = Uniform::new(0, BREEDS.len())?;
        let confidence_dist = Uniform::new(0.62f32, 0.98)?;
        let usability_dist = Uniform::new(0.55f32, 0.95)?;

        let profile = &BREEDS[index_dist.sample(&mut rng)];
        let confidence = confidence_dist.sample(&mut rng);

        let report = BreedReport {
            breed: profile.breed.to_string(),
            confidence,
            dairy_level: profile.dairy_level.to_string(),
            purpose: profile.purpose.to_string(),
            usability_score: usability_dist.sample(&mut rng),
            evidence: vec![
                format!(
                    "Classified as {} with {:.0}% confidence.",
                    profile.breed,
                    confidence * 100.0
                ),
                "Body structure is consistent with the breed's profile.".to_string(),
                "Coat pattern and frame match reference animals.".to_string(),
            ],
        };

        self.logger
            .info(&format!("Fake prediction: {}", report.breed))?;
        Ok(report)
    }
}
