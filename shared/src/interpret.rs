//! Turns a raw `(label, confidence)` pair from the model into everything the
//! results panel shows. Pure and total: every label maps to a record.

use crate::PredictionResult;
use crate::i18n::{self, Bilingual};
use derive_more::Display;
use strum_macros::{AsRefStr, Display as StrumDisplay, EnumIter};

/// Percentages at or above this are [`ConfidenceTier::High`].
pub const HIGH_CONFIDENCE_PERCENT: u8 = 80;
/// Percentages at or above this (and below high) are [`ConfidenceTier::Medium`].
pub const MEDIUM_CONFIDENCE_PERCENT: u8 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum Diagnosis {
    #[display(fmt = "Healthy")]
    Healthy,
    #[display(fmt = "Early Blight")]
    EarlyBlight,
    #[display(fmt = "Late Blight")]
    LateBlight,
    /// A label outside the known classes, kept exactly as received.
    #[display(fmt = "{}", _0)]
    Unknown(String),
}

impl Diagnosis {
    pub fn known() -> [Diagnosis; 3] {
        [Diagnosis::Healthy, Diagnosis::EarlyBlight, Diagnosis::LateBlight]
    }

    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "healthy" => Diagnosis::Healthy,
            "early blight" => Diagnosis::EarlyBlight,
            "late blight" => Diagnosis::LateBlight,
            _ => Diagnosis::Unknown(label.to_string()),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Diagnosis::Unknown(_))
    }

    pub fn badge(&self) -> Badge {
        match self {
            Diagnosis::Healthy => Badge::Healthy,
            Diagnosis::EarlyBlight => Badge::EarlyBlight,
            Diagnosis::LateBlight => Badge::LateBlight,
            Diagnosis::Unknown(_) => Badge::Generic,
        }
    }

    pub fn hindi_label(&self) -> &str {
        match self {
            Diagnosis::Healthy => "स्वस्थ",
            Diagnosis::EarlyBlight => "शुरुआती अंगमारी",
            Diagnosis::LateBlight => "देर से होने वाली अंगमारी",
            Diagnosis::Unknown(label) => label,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Diagnosis::Healthy => "✅",
            Diagnosis::EarlyBlight => "⚠️",
            Diagnosis::LateBlight => "🚨",
            Diagnosis::Unknown(_) => "🔍",
        }
    }

    pub fn message(&self) -> Bilingual {
        match self {
            Diagnosis::Healthy => Bilingual::new(
                "आपके आलू के पत्ते स्वस्थ हैं! नियमित देखभाल जारी रखें।",
                "Your potato leaves are healthy! Continue regular care.",
            ),
            Diagnosis::EarlyBlight => Bilingual::new(
                "शुरुआती अंगमारी का संकेत। तुरंत उपचार शुरू करें।",
                "Early blight detected. Start treatment immediately.",
            ),
            Diagnosis::LateBlight => Bilingual::new(
                "देर से होने वाली अंगमारी - तत्काल कार्रवाई आवश्यक।",
                "Late blight detected - immediate action required.",
            ),
            Diagnosis::Unknown(_) => Bilingual::new(
                "परिणाम की व्याख्या उपलब्ध नहीं।",
                "Result interpretation not available.",
            ),
        }
    }

    pub fn action(&self) -> Bilingual {
        match self {
            Diagnosis::Healthy => {
                Bilingual::new("निवारक उपाय जारी रखें", "Continue preventive measures")
            }
            Diagnosis::EarlyBlight => {
                Bilingual::new("कवकनाशी का छिड़काव करें", "Apply fungicide spray")
            }
            Diagnosis::LateBlight => {
                Bilingual::new("विशेषज्ञ सलाह लें", "Consult agricultural expert")
            }
            Diagnosis::Unknown(_) => {
                Bilingual::new("और जांच की आवश्यकता", "Further examination needed")
            }
        }
    }

    /// Short symptom summary used by the information legend.
    pub fn symptoms(&self) -> Bilingual {
        match self {
            Diagnosis::Healthy => Bilingual::new("पत्ते स्वस्थ हैं", "Leaves are healthy"),
            Diagnosis::EarlyBlight => {
                Bilingual::new("प्रारंभिक रोग के लक्षण", "Early disease symptoms")
            }
            Diagnosis::LateBlight => Bilingual::new("गंभीर रोग के लक्षण", "Severe disease symptoms"),
            Diagnosis::Unknown(_) => Bilingual::new("अज्ञात", "Unknown"),
        }
    }
}

/// Display tag for the predicted class; the string form doubles as a CSS
/// class suffix (`badge-early-blight`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Badge {
    Healthy,
    EarlyBlight,
    LateBlight,
    Generic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn from_percent(percent: u8) -> Self {
        if percent >= HIGH_CONFIDENCE_PERCENT {
            ConfidenceTier::High
        } else if percent >= MEDIUM_CONFIDENCE_PERCENT {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }

    pub fn from_confidence(confidence: f64) -> Self {
        Self::from_percent(confidence_percent(confidence))
    }

    /// Human-readable percentage band, e.g. `"60-79%"`.
    pub fn range_label(&self) -> String {
        match self {
            ConfidenceTier::High => format!("≥{}%", HIGH_CONFIDENCE_PERCENT),
            ConfidenceTier::Medium => format!(
                "{}-{}%",
                MEDIUM_CONFIDENCE_PERCENT,
                HIGH_CONFIDENCE_PERCENT - 1
            ),
            ConfidenceTier::Low => format!("<{}%", MEDIUM_CONFIDENCE_PERCENT),
        }
    }

    pub fn label(&self) -> Bilingual {
        match self {
            ConfidenceTier::High => i18n::HIGH_CONFIDENCE,
            ConfidenceTier::Medium => i18n::MEDIUM_CONFIDENCE,
            ConfidenceTier::Low => i18n::LOW_CONFIDENCE,
        }
    }
}

/// `round(confidence * 100)`, halves rounded up.
///
/// Callers must pass a value in `[0, 1]`; [`PredictionResult`] guarantees it.
pub fn confidence_percent(confidence: f64) -> u8 {
    debug_assert!(
        (0.0..=1.0).contains(&confidence),
        "confidence {confidence} outside [0, 1]"
    );
    (confidence.clamp(0.0, 1.0) * 100.0).round() as u8
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationRecord {
    pub diagnosis: Diagnosis,
    pub badge: Badge,
    pub translated_label: String,
    pub english_label: String,
    pub emoji: &'static str,
    pub message: Bilingual,
    pub action: Bilingual,
    pub confidence_percent: u8,
    pub tier: ConfidenceTier,
}

pub fn interpret(result: &PredictionResult) -> RecommendationRecord {
    let diagnosis = Diagnosis::from_label(result.label());
    let confidence_percent = confidence_percent(result.confidence());

    RecommendationRecord {
        badge: diagnosis.badge(),
        translated_label: diagnosis.hindi_label().to_string(),
        english_label: diagnosis.to_string(),
        emoji: diagnosis.emoji(),
        message: diagnosis.message(),
        action: diagnosis.action(),
        confidence_percent,
        tier: ConfidenceTier::from_percent(confidence_percent),
        diagnosis,
    }
}
