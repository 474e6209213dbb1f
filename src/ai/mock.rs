use super::{ChatOutcome, VisionChatService};
use crate::sketch::EncodedSketch;
use crate::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockVisionClient {
    outcomes: Arc<Mutex<Vec<ChatOutcome>>>,
    captured_data_urls: Arc<Mutex<Vec<String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockVisionClient {
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(Vec::new())),
            captured_data_urls: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_outcome(self, outcome: ChatOutcome) -> Self {
        self.outcomes.lock().unwrap().push(outcome);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn captured_data_urls(&self) -> Vec<String> {
        self.captured_data_urls.lock().unwrap().clone()
    }
}

impl Default for MockVisionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VisionChatService for MockVisionClient {
    async fn generate_page_code(&self, sketch: &EncodedSketch) -> Result<ChatOutcome> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        self.captured_data_urls
            .lock()
            .unwrap()
            .push(sketch.data_url.clone());

        let outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            // Default mock response
            Ok(ChatOutcome::Text(
                "<html><body>Mock page</body></html>".to_string(),
            ))
        } else {
            let index = (*count - 1) % outcomes.len();
            Ok(outcomes[index].clone())
        }
    }
}
