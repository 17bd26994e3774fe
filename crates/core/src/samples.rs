//! Bundled demo inputs.
//!
//! Two texts written to trip the text heuristics in opposite directions, and
//! two remote images. Nothing here is computed.

use serde::{Deserialize, Serialize};

use crate::input::Modality;

/// Formal, uniform register: no contractions, no slang.
pub const AI_SAMPLE_TEXT: &str = "Artificial intelligence has revolutionized numerous industries by introducing innovative solutions that enhance productivity and efficiency. The integration of machine learning algorithms enables systems to process vast amounts of data with remarkable accuracy. Organizations worldwide are implementing these technologies to streamline operations and improve decision-making processes. Furthermore, the continuous advancement in neural networks has led to significant breakthroughs in natural language processing and computer vision applications.";

/// Informal register with contractions and slang.
pub const HUMAN_SAMPLE_TEXT: &str = "So I was thinking about AI the other day, and honestly it's kinda crazy how fast things are moving. Like, my friend works in tech and he's always telling me about these new tools that pop up every week. Some are useful, some are just... I don't know, weird? Anyway, I'm not sure if I'm ready for all this change but I guess we don't really have a choice lol. What do you think?";

pub const AI_SAMPLE_IMAGE_URL: &str = "https://images.pexels.com/photos/8386440/pexels-photo-8386440.jpeg?auto=compress&cs=tinysrgb&w=800";

pub const HUMAN_SAMPLE_IMAGE_URL: &str = "https://images.pexels.com/photos/1804769/pexels-photo-1804769.jpeg?auto=compress&cs=tinysrgb&w=800";

/// MIME type the sample images are served as.
pub const SAMPLE_IMAGE_MIME: &str = "image/jpeg";

/// Which bundled sample to load.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleKind {
    Ai,
    Human,
}

impl SampleKind {
    pub const ALL: [SampleKind; 2] = [SampleKind::Ai, SampleKind::Human];

    pub fn as_str(&self) -> &'static str {
        match self {
            SampleKind::Ai => "ai",
            SampleKind::Human => "human",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            SampleKind::Ai => AI_SAMPLE_TEXT,
            SampleKind::Human => HUMAN_SAMPLE_TEXT,
        }
    }

    pub fn image_url(&self) -> &'static str {
        match self {
            SampleKind::Ai => AI_SAMPLE_IMAGE_URL,
            SampleKind::Human => HUMAN_SAMPLE_IMAGE_URL,
        }
    }

    /// File name a fetched sample image is stored under.
    pub fn image_file_name(&self) -> String {
        format!("sample-{}.jpg", self.as_str())
    }

    /// Button caption for the sample picker.
    pub fn caption(&self, modality: Modality) -> &'static str {
        match (self, modality) {
            (SampleKind::Ai, Modality::Image) => "Synthetic image",
            (SampleKind::Human, Modality::Image) => "Real photograph",
            (SampleKind::Ai, Modality::Text) => "AI-written text",
            (SampleKind::Human, Modality::Text) => "Human-written text",
        }
    }
}
