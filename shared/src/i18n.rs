//! Hindi/English text shown by the app. Every user-facing string carries both
//! languages and renders as `"<hindi> / <english>"`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bilingual {
    pub hindi: &'static str,
    pub english: &'static str,
}

impl Bilingual {
    pub const fn new(hindi: &'static str, english: &'static str) -> Self {
        Self { hindi, english }
    }
}

impl fmt::Display for Bilingual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.hindi, self.english)
    }
}

pub const NOT_AN_IMAGE: Bilingual = Bilingual::new(
    "कृपया केवल छवि फ़ाइलें अपलोड करें",
    "Please upload only image files",
);

pub const TOO_LARGE: Bilingual = Bilingual::new(
    "फ़ाइल का आकार 5MB से कम होना चाहिए",
    "File size should be less than 5MB",
);

pub const NO_IMAGE_SELECTED: Bilingual =
    Bilingual::new("कृपया एक छवि अपलोड करें", "Please upload an image");

pub const ALREADY_SUBMITTING: Bilingual = Bilingual::new(
    "विश्लेषण पहले से जारी है",
    "Analysis already in progress",
);

pub const NETWORK_ERROR: Bilingual = Bilingual::new(
    "नेटवर्क त्रुटि",
    "Network error. Please check if the API server is running.",
);

pub const FILE_UNREADABLE: Bilingual = Bilingual::new(
    "फ़ाइल पढ़ी नहीं जा सकी",
    "The selected file could not be read",
);

pub const HIGH_CONFIDENCE: Bilingual = Bilingual::new("उच्च विश्वसनीयता", "High Confidence");
pub const MEDIUM_CONFIDENCE: Bilingual = Bilingual::new("मध्यम विश्वसनीयता", "Medium Confidence");
pub const LOW_CONFIDENCE: Bilingual = Bilingual::new("कम विश्वसनीयता", "Low Confidence");
