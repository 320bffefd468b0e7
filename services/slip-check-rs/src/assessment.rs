use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::{
    error::{Result, SlipError},
    hasher::sha256_file,
    ocr::TextExtractor,
    rules::TEXT_LIMIT_CHARS,
    scoring::{classify, score_slip_on, Verdict},
};

/// Output record for one slip. Field order is the JSON key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlipAssessment {
    pub verdict: Verdict,
    pub score: f64,
    pub hash: String,
    pub notes: Vec<String>,
    pub ocr_available: bool,
    pub text: String,
}

/// Structured failure printed instead of an assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl From<&SlipError> for ErrorReport {
    fn from(err: &SlipError) -> Self {
        Self {
            error: err.code(),
            detail: Some(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    ImageNotFound,
    Assessed(SlipAssessment),
}

impl CheckOutcome {
    /// Keys keep struct field order.
    pub fn to_json(&self) -> serde_json::Result<String> {
        match self {
            CheckOutcome::ImageNotFound => serde_json::to_string(&ErrorReport {
                error: "image_not_found",
                detail: None,
            }),
            CheckOutcome::Assessed(assessment) => serde_json::to_string(assessment),
        }
    }
}

pub fn check_slip(image: &Path, amount: Option<&str>, extractor: &dyn TextExtractor) -> Result<CheckOutcome> {
    check_slip_on(image, amount, extractor, Local::now().date_naive())
}

/// Hash, OCR, score. A missing image short-circuits before any of them run.
pub fn check_slip_on(
    image: &Path,
    amount: Option<&str>,
    extractor: &dyn TextExtractor,
    today: NaiveDate,
) -> Result<CheckOutcome> {
    if !image.exists() {
        info!(image = %image.display(), "slip image not found");
        return Ok(CheckOutcome::ImageNotFound);
    }

    let hash = sha256_file(image)?;
    let ocr_available = extractor.is_available();
    let text = extractor.extract_text(image);
    let (score, notes) = score_slip_on(&text, amount, today);
    let verdict = classify(score);

    info!(
        image = %image.display(),
        verdict = verdict.as_str(),
        score,
        notes = notes.len(),
        ocr_available,
        "slip checked"
    );

    Ok(CheckOutcome::Assessed(SlipAssessment {
        verdict,
        score: round2(score),
        hash,
        notes,
        ocr_available,
        text: truncate_chars(&text, TEXT_LIMIT_CHARS),
    }))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((end, _)) => text[..end].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate_chars("abc", 5), "abc");
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        // Myanmar script is multi-byte; a byte cut would split a character
        let burmese = "ငွေလွှဲ".repeat(10);
        let cut = truncate_chars(&burmese, 4);
        assert_eq!(cut.chars().count(), 4);
        assert!(burmese.starts_with(&cut));
    }

    #[test]
    fn json_keys_come_out_in_record_order() {
        let outcome = CheckOutcome::Assessed(SlipAssessment {
            verdict: Verdict::Suspicious,
            score: 60.0,
            hash: "ab".repeat(32),
            notes: vec!["amount_not_found".to_string()],
            ocr_available: true,
            text: "wave transfer".to_string(),
        });
        let json = outcome.to_json().unwrap();
        let positions: Vec<usize> = ["\"verdict\"", "\"score\"", "\"hash\"", "\"notes\"", "\"ocr_available\"", "\"text\""]
            .iter()
            .map(|key| json.find(key).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");
        assert!(json.contains("\"verdict\":\"suspicious\""));
        assert!(json.contains("\"score\":60.0"));
    }

    #[test]
    fn missing_image_report() {
        assert_eq!(
            CheckOutcome::ImageNotFound.to_json().unwrap(),
            r#"{"error":"image_not_found"}"#
        );
    }
}
