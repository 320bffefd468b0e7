use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::rules::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Ok,
    Suspicious,
    Manual,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Ok => "ok",
            Verdict::Suspicious => "suspicious",
            Verdict::Manual => "manual",
        }
    }
}

pub fn classify(score: f64) -> Verdict {
    if score >= OK_THRESHOLD {
        Verdict::Ok
    } else if score >= SUSPICIOUS_THRESHOLD {
        Verdict::Suspicious
    } else {
        Verdict::Manual
    }
}

/// Scores OCR text against today's local date.
pub fn score_slip(text: &str, amount: Option<&str>) -> (f64, Vec<String>) {
    score_slip_on(text, amount, Local::now().date_naive())
}

/// Additive heuristic: every rule runs, none short-circuits. The result is
/// never negative.
pub fn score_slip_on(text: &str, amount: Option<&str>, today: NaiveDate) -> (f64, Vec<String>) {
    let mut notes = Vec::new();
    let mut score = 0.0;

    let t = text.to_lowercase();

    if KEYWORDS.iter().any(|k| t.contains(k)) {
        score += KEYWORD_POINTS;
    } else {
        notes.push(NOTE_KEYWORDS_MISSING.to_string());
    }

    if let Some(amount) = amount.filter(|a| !a.trim().is_empty()) {
        if t.contains(&amount.replace(',', "")) {
            score += AMOUNT_POINTS;
        } else {
            notes.push(NOTE_AMOUNT_NOT_FOUND.to_string());
        }
    }

    if t.trim().chars().count() > MIN_TEXT_CHARS {
        score += TEXT_LENGTH_POINTS;
    } else {
        notes.push(NOTE_LOW_TEXT.to_string());
    }

    let normalized = t.replace('/', "-");
    for token in normalized.split_whitespace() {
        if let Some(date) = parse_date_token(token) {
            if date > today {
                score -= FUTURE_DATE_PENALTY;
                notes.push(NOTE_FUTURE_DATE.to_string());
            }
        }
    }

    (f64::max(score, 0.0), notes)
}

/// Code points of the digit zero in every Unicode decimal-digit (Nd) block;
/// each block runs zero..=nine contiguously.
const DECIMAL_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66, 0x0CE6,
    0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946, 0x19D0, 0x1A80,
    0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0, 0xA9F0, 0xAA50, 0xABF0,
    0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0, 0x112F0, 0x11450, 0x114D0,
    0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50, 0x11DA0, 0x11F50, 0x16A60,
    0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6, 0x1E140, 0x1E2F0, 0x1E4F0,
    0x1E950, 0x1FBF0,
];

/// Value of a decimal digit in any script (Myanmar `၅` is 5).
fn decimal_digit(c: char) -> Option<u32> {
    let code = c as u32;
    DECIMAL_ZEROS
        .iter()
        .find(|&&zero| (zero..zero + 10).contains(&code))
        .map(|&zero| code - zero)
}

fn ascii_digit(c: char) -> Option<u32> {
    c.is_ascii_digit().then(|| c as u32 - '0' as u32)
}

/// Parses a ten character `YYYY-MM-DD` token with the usual strptime field
/// grammar: the year is any four decimal digits (OCR of Burmese slips yields
/// Myanmar digits), the month is ASCII `01`-`12`, the day is ASCII `01`-`09`,
/// `30`, `31`, or `1`/`2` followed by any decimal digit.
fn parse_date_token(token: &str) -> Option<NaiveDate> {
    let chars: Vec<char> = token.chars().collect();
    let [y0, y1, y2, y3, '-', m0, m1, '-', d0, d1] = chars.as_slice() else {
        return None;
    };

    let mut year = 0;
    for &c in [y0, y1, y2, y3] {
        year = year * 10 + decimal_digit(c)?;
    }
    if year < 1 {
        return None;
    }

    let month = match (ascii_digit(*m0)?, ascii_digit(*m1)?) {
        (0, m @ 1..=9) => m,
        (1, m @ 0..=2) => 10 + m,
        _ => return None,
    };

    let day = match (ascii_digit(*d0), *d1) {
        (Some(3), '0') => 30,
        (Some(3), '1') => 31,
        (Some(tens @ (1 | 2)), c) => tens * 10 + decimal_digit(c)?,
        (Some(0), c) => ascii_digit(c).filter(|&d| d >= 1)?,
        _ => return None,
    };

    NaiveDate::from_ymd_opt(year as i32, month, day)
}
