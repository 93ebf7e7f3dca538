use regex::Regex;
use std::sync::LazyLock;

static DAY_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r": ([0-9]+)").expect("day-count pattern is valid"));

/// Outcome of reading a day count out of a free-text reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extraction {
    pub matched: bool,
    pub value: u32,
}

/// First ASCII digit run following `": "` anywhere in the reply.
///
/// Never fails: no reply, no match, or a digit run too large for `u32` all
/// give `{ matched: false, value: 0 }`. Only the first `": <digits>"` is
/// considered, even if a later one looks more plausible.
pub fn extract(reply: Option<&str>) -> Extraction {
    let none = Extraction {
        matched: false,
        value: 0,
    };

    let Some(text) = reply else {
        return none;
    };

    DAY_COUNT
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .map(|value| Extraction {
            matched: true,
            value,
        })
        .unwrap_or(none)
}

/// Zero-defaulted day count, the value that gets stored.
pub fn extract_days_counted(reply: Option<&str>) -> u32 {
    extract(reply).value
}
