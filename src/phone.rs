//! Phone number canonicalization and trailing-digit matching.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static NON_DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]+").unwrap());

/// Country-code and prefix conventions used to canonicalize numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberingPlan {
    pub country_code: String,
    pub international_prefix: String,
    pub trunk_prefix: String,
    /// Number of trailing digits compared when matching two numbers.
    pub match_digits: usize,
}

impl NumberingPlan {
    /// France: `+33`, international `00`, trunk `0`, 9 significant digits.
    pub fn france() -> Self {
        Self {
            country_code: "33".to_string(),
            international_prefix: "00".to_string(),
            trunk_prefix: "0".to_string(),
            match_digits: 9,
        }
    }

    /// Canonicalize a free-form number into a digit string.
    ///
    /// Strips non-digits, then: an international prefix followed by our
    /// country code loses only the international prefix's length from the
    /// front; any other international prefix is dropped; a single trunk
    /// prefix is replaced by the country code. Never fails.
    pub fn normalize(&self, raw: &str) -> String {
        let digits = NON_DIGIT_RE.replace_all(raw, "").into_owned();
        let intl = self.international_prefix.as_str();
        let home = format!("{}{}", intl, self.country_code);

        if !intl.is_empty() && digits.starts_with(&home) {
            // Removes two characters, not the whole "0033" literal.
            return digits[intl.len()..].to_string();
        }
        if !intl.is_empty() && digits.starts_with(intl) {
            return digits[intl.len()..].to_string();
        }
        if !self.trunk_prefix.is_empty() && digits.starts_with(&self.trunk_prefix) {
            return format!("{}{}", self.country_code, &digits[self.trunk_prefix.len()..]);
        }
        digits
    }

    /// Trailing `match_digits` digits of the canonical form.
    ///
    /// Shorter numbers are returned whole, so degenerate inputs can collide.
    pub fn match_key(&self, raw: &str) -> String {
        let canonical = self.normalize(raw);
        let start = canonical.len().saturating_sub(self.match_digits);
        canonical[start..].to_string()
    }

    /// True when both numbers refer to the same conversation partner.
    pub fn same_partner(&self, a: &str, b: &str) -> bool {
        self.match_key(a) == self.match_key(b)
    }
}

impl Default for NumberingPlan {
    fn default() -> Self {
        Self::france()
    }
}

/// Canonicalize with the default (France) plan.
pub fn normalize(raw: &str) -> String {
    NumberingPlan::france().normalize(raw)
}

/// Trailing-9-digit key with the default plan.
pub fn match_key(raw: &str) -> String {
    NumberingPlan::france().match_key(raw)
}

pub fn same_partner(a: &str, b: &str) -> bool {
    NumberingPlan::france().same_partner(a, b)
}
