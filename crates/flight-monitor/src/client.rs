//! Vision-model trait seam.
//!
//! The monitor never talks to a vendor API directly; it drives any
//! [`VisionModel`] implementation. Shipping an HTTP client is out of
//! scope, so the only bundled implementation is [`ReplayModel`], which
//! serves previously captured replies for offline runs and tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use thiserror::Error;

/// Failure modes of an external model call.
#[derive(Error, Debug)]
pub enum ModelError {
    /// Network-level failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// Authentication or authorization failure
    #[error("Auth error: {0}")]
    Auth(String),

    /// Provider rate limit hit
    #[error("Rate limited: {0}")]
    RateLimited(String),
}

/// A model that can analyze one image and return raw reply text.
pub trait VisionModel {
    /// Analyze the image at `image_url` using `prompt` as instruction.
    fn analyze_image(
        &self,
        image_url: &str,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<String, ModelError>>;
}

/// Serves captured model replies in order, one per call.
///
/// Runs out of replies with a transport error, which the monitor absorbs
/// into a failure record like any other failed call.
pub struct ReplayModel {
    replies: Mutex<VecDeque<String>>,
}

impl ReplayModel {
    #[must_use]
    pub fn new(replies: Vec<String>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
        }
    }
}

impl VisionModel for ReplayModel {
    async fn analyze_image(&self, image_url: &str, _prompt: &str) -> Result<String, ModelError> {
        let mut replies = self
            .replies
            .lock()
            .map_err(|_| ModelError::Transport("replay queue poisoned".to_string()))?;
        replies.pop_front().ok_or_else(|| {
            ModelError::Transport(format!("no captured reply left for {image_url}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_serves_in_order() {
        let model = ReplayModel::new(vec!["first".to_string(), "second".to_string()]);
        tokio_test::block_on(async {
            assert_eq!(model.analyze_image("a", "p").await.unwrap(), "first");
            assert_eq!(model.analyze_image("b", "p").await.unwrap(), "second");
            assert!(matches!(
                model.analyze_image("c", "p").await,
                Err(ModelError::Transport(_))
            ));
        });
    }
}
