//! Normalized template matching over captured frames
use crate::{cache::NeedleCache, errors::VisualError, models::MatchOutcome, visual::VisualPerceiver};
use async_trait::async_trait;
use image::GrayImage;
use imageproc::template_matching::{match_template, MatchTemplateMethod};
use ocvbot_core_types::{Pattern, Region};
use std::sync::Arc;

/// Supplies the current pixels of a screen region
#[async_trait]
pub trait FrameSource: Send + Sync {
    async fn capture(&self, region: Region) -> Result<GrayImage, VisualError>;
}

/// [`VisualPerceiver`] backed by normalized cross-correlation
pub struct TemplateMatcher<S> {
    source: S,
    needles: Arc<NeedleCache>,
}

impl<S: FrameSource> TemplateMatcher<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            needles: Arc::new(NeedleCache::new()),
        }
    }

    /// Share a needle cache between matchers
    pub fn with_cache(source: S, needles: Arc<NeedleCache>) -> Self {
        Self { source, needles }
    }

    pub fn needles(&self) -> Arc<NeedleCache> {
        Arc::clone(&self.needles)
    }
}

/// Best normalized cross-correlation score of `needle` anywhere in `frame`.
///
/// `None` when the needle does not fit inside the frame.
pub fn best_score(frame: &GrayImage, needle: &GrayImage) -> Option<f32> {
    if needle.width() == 0
        || needle.height() == 0
        || needle.width() > frame.width()
        || needle.height() > frame.height()
    {
        return None;
    }

    let scores = match_template(frame, needle, MatchTemplateMethod::CrossCorrelationNormalized);
    scores
        .pixels()
        .map(|p| p[0])
        .filter(|score| score.is_finite())
        .fold(None, |best: Option<f32>, score| match best {
            Some(current) if current >= score => Some(current),
            _ => Some(score),
        })
}

#[async_trait]
impl<S: FrameSource> VisualPerceiver for TemplateMatcher<S> {
    async fn locate(
        &self,
        region: Region,
        pattern: &Pattern,
        confidence: f32,
    ) -> Result<MatchOutcome, VisualError> {
        let needle = self.needles.load(pattern)?;
        let frame = self.source.capture(region).await?;

        // Correlation is CPU bound; keep it off the async worker
        let score = tokio::task::spawn_blocking(move || best_score(&frame, &needle))
            .await
            .map_err(|e| VisualError::ImageProcessing(format!("Task join error: {}", e)))?;

        tracing::trace!(%region, %pattern, ?score, confidence, "template scored");
        Ok(MatchOutcome::from_score(score, confidence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{imageops, Luma};
    use std::collections::HashMap;

    struct StaticFrames {
        frames: HashMap<Region, GrayImage>,
    }

    #[async_trait]
    impl FrameSource for StaticFrames {
        async fn capture(&self, region: Region) -> Result<GrayImage, VisualError> {
            self.frames
                .get(&region)
                .cloned()
                .ok_or_else(|| VisualError::CaptureFailed(format!("no frame for {}", region)))
        }
    }

    fn textured(width: u32, height: u32) -> GrayImage {
        GrayImage::from_fn(width, height, |x, y| {
            Luma([((x * 31 + y * 17 + (x * y) % 7) * 37 % 251) as u8])
        })
    }

    fn matcher_with(frame: GrayImage) -> TemplateMatcher<StaticFrames> {
        TemplateMatcher::new(StaticFrames {
            frames: HashMap::from([(Region::Inventory, frame)]),
        })
    }

    #[tokio::test]
    async fn crop_of_frame_is_found() {
        let frame = textured(64, 48);
        let needle = imageops::crop_imm(&frame, 20, 10, 12, 12).to_image();
        let matcher = matcher_with(frame);
        let pattern = Pattern::new("needles/items/iron-ore.png");
        matcher.needles().insert(&pattern, needle);

        let outcome = matcher
            .locate(Region::Inventory, &pattern, 0.99)
            .await
            .unwrap();
        assert!(outcome.is_found());
    }

    #[tokio::test]
    async fn unrelated_needle_is_not_found() {
        let matcher = matcher_with(textured(64, 48));
        let stripes = GrayImage::from_fn(12, 12, |_, y| Luma([if y % 2 == 0 { 0 } else { 255 }]));
        let pattern = Pattern::new("needles/items/uncut-ruby.png");
        matcher.needles().insert(&pattern, stripes);

        let outcome = matcher
            .locate(Region::Inventory, &pattern, 0.99)
            .await
            .unwrap();
        assert_eq!(outcome, MatchOutcome::NotFound);
    }

    #[test]
    fn oversized_needle_never_matches() {
        let frame = textured(8, 8);
        let needle = textured(16, 16);
        assert_eq!(best_score(&frame, &needle), None);
    }

    #[tokio::test]
    async fn missing_frame_surfaces_capture_error() {
        let matcher = matcher_with(textured(16, 16));
        let pattern = Pattern::new("needles/game-screen/rock-full.png");
        matcher.needles().insert(&pattern, textured(4, 4));

        let err = matcher
            .locate(Region::GameScreen, &pattern, 0.8)
            .await
            .unwrap_err();
        assert!(matches!(err, VisualError::CaptureFailed(_)));
    }
}
