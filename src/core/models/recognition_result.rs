use serde::{Deserialize, Serialize};

use crate::global_constants::LOG_TAG_RECOGNIZE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognitionResult {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default, rename = "recognizedPersons")]
    pub recognized_persons: Vec<String>,
}

impl RecognitionResult {
    pub fn from_json_slice(body: &[u8]) -> serde_json::Result<Self> {
        let parsed: RecognitionResult = serde_json::from_slice(body)?;
        Ok(parsed.enforce_failure_has_no_persons())
    }

    pub fn has_recognized_persons(&self) -> bool {
        self.success && !self.recognized_persons.is_empty()
    }

    pub fn joined_names(&self) -> String {
        self.recognized_persons.join(", ")
    }

    fn enforce_failure_has_no_persons(mut self) -> Self {
        if !self.success && !self.recognized_persons.is_empty() {
            log::warn!(
                "{} server reported failure with {} names, dropping them",
                LOG_TAG_RECOGNIZE,
                self.recognized_persons.len()
            );
            self.recognized_persons.clear();
        }
        self
    }
}
