//! Payment-slip checker: hashes a slip image, reads it with OCR and scores
//! how believable it is for a claimed amount.

pub mod assessment;
pub mod config;
pub mod error;
pub mod hasher;
pub mod ocr;
pub mod rules;
pub mod scoring;

pub use assessment::{check_slip, check_slip_on, CheckOutcome, ErrorReport, SlipAssessment};
pub use config::Config;
pub use error::{Result, SlipError};
pub use hasher::sha256_file;
pub use ocr::{TesseractExtractor, TextExtractor};
pub use scoring::{classify, score_slip, score_slip_on, Verdict};
