//! Weights, thresholds and vocabulary for slip scoring.

/// Bank, wallet and transfer vocabulary seen on Myanmar payment slips.
pub const KEYWORDS: &[&str] = &[
    "kbz", "aya", "cb", "kpay", "wave", "transfer", "payment", "success", "reference", "txn", "trxn",
];

pub const KEYWORD_POINTS: f64 = 40.0;
pub const AMOUNT_POINTS: f64 = 30.0;
pub const TEXT_LENGTH_POINTS: f64 = 20.0;
pub const FUTURE_DATE_PENALTY: f64 = 10.0;

/// Trimmed text must be longer than this many characters to count as readable.
pub const MIN_TEXT_CHARS: usize = 20;

pub const OK_THRESHOLD: f64 = 70.0;
pub const SUSPICIOUS_THRESHOLD: f64 = 40.0;

/// Extracted text is cut to this many characters in the output record.
pub const TEXT_LIMIT_CHARS: usize = 2000;

pub const NOTE_KEYWORDS_MISSING: &str = "keywords_missing";
pub const NOTE_AMOUNT_NOT_FOUND: &str = "amount_not_found";
pub const NOTE_LOW_TEXT: &str = "low_text";
pub const NOTE_FUTURE_DATE: &str = "future_date";
