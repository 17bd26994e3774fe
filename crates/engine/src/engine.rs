//! The analysis engine: two async operations over an injected RNG.

use std::ops::Range;
use std::sync::{Arc, Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use tokio::time::Instant;
use tracing::{debug, info};

use deepauth_core::{
    AnalysisInput, AnalysisResult, IMAGE_EXPLANATION_COUNT, ImageAnalysisResult, ImageInput,
    ImageMetadata, Label, Modality, TEXT_REASON_COUNT, TextAnalysisResult, TextMetadata,
    TextReason, round_to_tenth,
};

use crate::catalog::{IMAGE_EXPLANATIONS, NLP_MODEL, TEXT_REASONS, VISION_MODEL};
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::heatmap::generate_heatmap;
use crate::heuristics::{TextSignals, character_count, word_count};
use crate::probe::{DimensionProbe, HeaderProbe};
use crate::sampling::{pick_distinct, uniform};

/// Probability that an image lands in the AI-leaning branch.
const IMAGE_AI_BRANCH_PROBABILITY: f64 = 0.6;
const IMAGE_AI_RANGE: Range<f64> = 60.0..95.0;
const IMAGE_HUMAN_RANGE: Range<f64> = 15.0..50.0;

const IMAGE_DECISIVE_CONFIDENCE: Range<f64> = 85.0..97.0;
const IMAGE_UNCERTAIN_CONFIDENCE: Range<f64> = 50.0..75.0;
const TEXT_DECISIVE_CONFIDENCE: Range<f64> = 82.0..97.0;
const TEXT_UNCERTAIN_CONFIDENCE: Range<f64> = 55.0..75.0;

/// Text scores at or above this get the AI-leaning reason wording.
const TEXT_AI_WORDING_THRESHOLD: f64 = 50.0;
const REASON_CONFIDENCE: Range<f64> = 70.0..95.0;

/// Simulated content detector.
///
/// Each call closes over its own input; the only shared state is the RNG,
/// which is locked for short synchronous draws and never across an `.await`.
/// There is no concurrency guard or queue here: callers decide how many
/// analyses run at once.
pub struct AnalysisEngine<R = StdRng> {
    config: EngineConfig,
    rng: Mutex<R>,
    probe: Arc<dyn DimensionProbe>,
}

impl AnalysisEngine<StdRng> {
    /// Engine seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Engine whose every draw is reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for AnalysisEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> core::fmt::Debug for AnalysisEngine<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AnalysisEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<R: RngCore + Send> AnalysisEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            config: EngineConfig::default(),
            rng: Mutex::new(rng),
            probe: Arc::new(HeaderProbe),
        }
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_probe(mut self, probe: impl DimensionProbe) -> Self {
        self.probe = Arc::new(probe);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run `f` with exclusive access to the RNG.
    fn draw<T>(&self, f: impl FnOnce(&mut R) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *rng)
    }

    /// Analyze either kind of input.
    pub async fn analyze(&self, input: &AnalysisInput) -> Result<AnalysisResult, EngineError> {
        match input {
            AnalysisInput::Image(image) => self.analyze_image(image).await.map(Into::into),
            AnalysisInput::Text(text) => Ok(self.analyze_text(text).await.into()),
        }
    }

    /// Simulated text analysis. Accepts any string, including an empty one.
    pub async fn analyze_text(&self, text: &str) -> TextAnalysisResult {
        let started = Instant::now();

        let delay = self.draw(|rng| self.config.text_delay.sample(rng));
        debug!(delay_ms = delay.as_millis() as u64, "text analysis started");
        tokio::time::sleep(delay).await;

        let signals = TextSignals::detect(text);
        let (score, label, confidence, reasons) = self.draw(|rng| {
            let score = round_to_tenth(uniform(rng, signals.base_range()));
            let label = Label::classify(score, Modality::Text);
            let confidence = round_to_tenth(uniform(
                rng,
                if label.is_decisive() {
                    TEXT_DECISIVE_CONFIDENCE
                } else {
                    TEXT_UNCERTAIN_CONFIDENCE
                },
            ));

            let ai_leaning = score >= TEXT_AI_WORDING_THRESHOLD;
            let reasons = pick_distinct(rng, &TEXT_REASONS, TEXT_REASON_COUNT)
                .into_iter()
                .map(|template| TextReason {
                    factor: template.factor.to_string(),
                    description: template.description(ai_leaning).to_string(),
                    confidence: round_to_tenth(uniform(rng, REASON_CONFIDENCE)),
                })
                .collect::<Vec<_>>();

            (score, label, confidence, reasons)
        });

        let processing_time = started.elapsed().as_millis() as u64;
        info!(
            modality = "text",
            score,
            label = %label,
            confidence,
            varied = signals.varied_sentence_structure,
            contractions = signals.contractions,
            informal = signals.informal_language,
            processing_ms = processing_time,
            "text analysis completed"
        );

        TextAnalysisResult {
            score,
            label,
            confidence,
            reasons,
            metadata: TextMetadata {
                processing_time,
                model_name: NLP_MODEL.name.to_string(),
                version: NLP_MODEL.version.to_string(),
                word_count: word_count(text),
                character_count: character_count(text),
            },
        }
    }

    /// Simulated image analysis.
    ///
    /// The verdict ignores pixel content; the payload is only read to learn its
    /// dimensions, and a payload that cannot be read fails the whole analysis.
    pub async fn analyze_image(
        &self,
        image: &ImageInput,
    ) -> Result<ImageAnalysisResult, EngineError> {
        let started = Instant::now();

        let delay = self.draw(|rng| self.config.image_delay.sample(rng));
        debug!(
            file_name = image.file_name(),
            delay_ms = delay.as_millis() as u64,
            "image analysis started"
        );
        tokio::time::sleep(delay).await;

        let (score, label, confidence, explanations) = self.draw(|rng| {
            let range = if rng.gen_bool(IMAGE_AI_BRANCH_PROBABILITY) {
                IMAGE_AI_RANGE
            } else {
                IMAGE_HUMAN_RANGE
            };
            let score = round_to_tenth(uniform(rng, range));
            let label = Label::classify(score, Modality::Image);
            let confidence = round_to_tenth(uniform(
                rng,
                if label.is_decisive() {
                    IMAGE_DECISIVE_CONFIDENCE
                } else {
                    IMAGE_UNCERTAIN_CONFIDENCE
                },
            ));
            let explanations = pick_distinct(rng, &IMAGE_EXPLANATIONS, IMAGE_EXPLANATION_COUNT)
                .into_iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>();

            (score, label, confidence, explanations)
        });

        let dimensions = self.probe.probe(image).await?;
        let heatmap_data = self.draw(|rng| generate_heatmap(score, rng));

        let processing_time = started.elapsed().as_millis() as u64;
        info!(
            modality = "image",
            file_name = image.file_name(),
            score,
            label = %label,
            confidence,
            width = dimensions.width,
            height = dimensions.height,
            processing_ms = processing_time,
            "image analysis completed"
        );

        Ok(ImageAnalysisResult {
            score,
            label,
            confidence,
            explanations,
            metadata: ImageMetadata {
                processing_time,
                model_name: VISION_MODEL.name.to_string(),
                version: VISION_MODEL.version.to_string(),
                image_size: dimensions.to_string(),
            },
            heatmap_data,
        })
    }
}
