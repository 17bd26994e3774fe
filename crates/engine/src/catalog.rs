//! Fixed wording tables and model identities.
//!
//! Process-wide read-only data; results pick from these without repetition.

/// Name/version pair reported in result metadata.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ModelInfo {
    pub name: &'static str,
    pub version: &'static str,
}

pub const VISION_MODEL: ModelInfo = ModelInfo {
    name: "DeepAuth-Vision v3.2",
    version: "3.2.1",
};

pub const NLP_MODEL: ModelInfo = ModelInfo {
    name: "DeepAuth-NLP v2.8",
    version: "2.8.4",
};

pub static IMAGE_EXPLANATIONS: [&str; 10] = [
    "GAN fingerprint noise pattern detected in pixel distribution",
    "Unnatural lighting gradients and inconsistent shadow patterns",
    "Overly smooth texture transitions indicative of neural rendering",
    "Facial feature symmetry exceeds natural human variance",
    "Color palette clustering shows synthetic generation markers",
    "Edge artifacts consistent with diffusion model outputs",
    "Frequency domain analysis reveals AI compression signatures",
    "Metadata patterns match known AI image generators",
    "Pixel-level noise distribution shows non-camera characteristics",
    "Background coherence issues typical of generative models",
];

/// A text factor with one description per verdict direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ReasonTemplate {
    pub factor: &'static str,
    pub ai_description: &'static str,
    pub human_description: &'static str,
}

impl ReasonTemplate {
    pub fn description(&self, ai_leaning: bool) -> &'static str {
        if ai_leaning {
            self.ai_description
        } else {
            self.human_description
        }
    }
}

pub static TEXT_REASONS: [ReasonTemplate; 6] = [
    ReasonTemplate {
        factor: "Lexical Diversity",
        ai_description: "Repetitive vocabulary and sentence structures common in AI outputs",
        human_description: "Natural variation in word choice and sentence complexity",
    },
    ReasonTemplate {
        factor: "Syntactic Patterns",
        ai_description: "Overly formal and grammatically perfect structure",
        human_description: "Minor grammatical inconsistencies typical of human writing",
    },
    ReasonTemplate {
        factor: "Semantic Coherence",
        ai_description: "Perfect topic consistency without natural digressions",
        human_description: "Natural topic flow with occasional tangential thoughts",
    },
    ReasonTemplate {
        factor: "Perplexity Score",
        ai_description: "Low perplexity indicates predictable AI-generated patterns",
        human_description: "Higher perplexity shows unpredictable human creativity",
    },
    ReasonTemplate {
        factor: "Burstiness Analysis",
        ai_description: "Uniform sentence length and complexity distribution",
        human_description: "Variable sentence complexity with natural rhythm",
    },
    ReasonTemplate {
        factor: "Stylometric Markers",
        ai_description: "Generic style without personal linguistic fingerprint",
        human_description: "Unique stylistic choices and idiosyncratic expressions",
    },
];
