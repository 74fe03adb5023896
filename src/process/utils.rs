use once_cell::sync::Lazy;
use regex::Regex;

/// Cell contents the raw export uses for "no value", in addition to the empty cell.
const MISSING_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

static AMOUNT_NOISE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,. $]").expect("amount noise pattern"));

static WORD_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-_]").expect("word separator pattern"));

/// True for cells that load as missing.
pub fn is_missing(raw: &str) -> bool {
    raw.is_empty() || MISSING_TOKENS.contains(&raw)
}

/// Lowercase, then turn every `-` and `_` into a single space.
pub fn clean_text(raw: &str) -> String {
    WORD_SEPARATORS
        .replace_all(&raw.to_lowercase(), " ")
        .into_owned()
}

/// `"$1,200.00"` → `"1200"`.
///
/// Only the first literal `.00` is removed; afterwards every comma, period,
/// space and dollar sign goes. The result is still text.
pub fn normalize_amount(raw: &str) -> String {
    let without_cents = raw.replacen(".00", "", 1);
    AMOUNT_NOISE.replace_all(&without_cents, "").into_owned()
}
