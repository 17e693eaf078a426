use crate::breed_classifier::interface::{BreedClassifier, BreedReport};
use crate::library::logger::interface::Logger;
use base64::{engine::general_purpose, Engine as _};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

#[derive(Serialize)]
struct PredictRequest<'a> {
    image: &'a str,
}

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("prediction request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("prediction endpoint returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("prediction endpoint returned an empty body")]
    EmptyBody,
    #[error("prediction response could not be parsed: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub struct BreedClassifierHttp {
    client: reqwest::blocking::Client,
    base_url: String,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl BreedClassifierHttp {
    pub fn new(
        base_url: String,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        // No request timeout: limits are left to the OS network stack, and
        // the state machine guarantees at most one request in flight.
        let client = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()?;

        Ok(Self {
            client,
            base_url,
            logger: logger.with_namespace("classifier").with_namespace("http"),
        })
    }

    fn predict(&self, image: &[u8]) -> Result<BreedReport, ClassifyError> {
        let encoded = general_purpose::STANDARD.encode(image);
        let url = format!("{}/predict", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&PredictRequest { image: &encoded })
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClassifyError::Status(status));
        }

        let body = response.text()?;
        if body.trim().is_empty() {
            return Err(ClassifyError::EmptyBody);
        }

        Ok(serde_json::from_str(&body)?)
    }
}

impl BreedClassifier for BreedClassifierHttp {
    fn classify(
        &self,
        image: &[u8],
    ) -> Result<BreedReport, Box<dyn std::error::Error + Send + Sync>> {
        self.logger
            .info(&format!("Submitting {} bytes for prediction", image.len()))?;

        match self.predict(image) {
            Ok(report) => {
                self.logger.info(&format!(
                    "Prediction: {} ({:.0}%)",
                    report.breed,
                    report.confidence * 100.0
                ))?;
                Ok(report)
            }
            Err(e) => {
                self.logger.warn(&format!("Prediction failed: {}", e))?;
                Err(Box::new(e))
            }
        }
    }
}
