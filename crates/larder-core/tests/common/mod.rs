//! Shared test doubles for larder-core integration tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use anyhow::{Result, bail};
use async_trait::async_trait;

use larder_core::genai::{GenerationRequest, TextGenerator};

/// A scripted [`TextGenerator`]: pops one canned reply per call and records
/// every request it saw, so tests can assert on both sides of the seam.
pub struct FakeGenerator {
    replies: Mutex<VecDeque<Result<String, String>>>,
    requests: Mutex<Vec<(String, String)>>,
}

impl FakeGenerator {
    /// Script a sequence of successful replies.
    pub fn with_replies<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(|r| Ok(r.into())).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Script a single transport failure.
    pub fn failing(message: &str) -> Self {
        Self {
            replies: Mutex::new(VecDeque::from([Err(message.to_string())])),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// The `(system, prompt)` pairs seen so far.
    pub fn seen_requests(&self) -> Vec<(String, String)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    fn name(&self) -> &str {
        "fake"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        self.requests
            .lock()
            .unwrap()
            .push((request.system.clone(), request.prompt.clone()));

        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(reply)) => Ok(reply),
            Some(Err(message)) => bail!("{message}"),
            None => bail!("fake generator ran out of scripted replies"),
        }
    }
}
