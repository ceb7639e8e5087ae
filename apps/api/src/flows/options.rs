//! Fixed option lists for executive profiles, and free-text inference onto them.
//!
//! Inference runs on model output before schema validation. A value that
//! matches no option and no keyword rule is returned unchanged so the
//! validator rejects it.

pub const AVAILABILITY_OPTIONS: &[&str] = &[
    "Full-time (40+ hours/week)",
    "Part-time (20-30 hours/week)",
    "Fractional (10-20 hours/week)",
    "Advisory (under 10 hours/week)",
    "Project-based",
    "Interim / contract-to-hire",
];

pub const COMPENSATION_OPTIONS: &[&str] = &[
    "Cash only",
    "Equity only",
    "Cash + equity",
    "Hourly rate",
    "Monthly retainer",
    "Open to discussion",
];

pub const LOCATION_OPTIONS: &[&str] = &["Remote", "Hybrid", "On-site", "Open to relocation"];

/// Keyword rules, checked in order. The first rule with any matching
/// keyword picks the option at the given index.
type Rules = &'static [(&'static [&'static str], usize)];

const AVAILABILITY_RULES: Rules = &[
    (&["interim", "contract-to-hire", "contract to hire"], 5),
    (&["project", "engagement-based", "per engagement"], 4),
    (
        &["advis", "board", "few hours", "couple of hours", "under 10", "<10"],
        3,
    ),
    (
        &["fractional", "10-20", "one day", "two days", "1-2 days", "couple of days"],
        2,
    ),
    (
        &["half-time", "half time", "halftime", "part-time", "part time", "20-30", "three days"],
        1,
    ),
    (&["full-time", "full time", "fulltime", "40+", "40 hours"], 0),
];

const COMPENSATION_RULES: Rules = &[
    (&["retainer", "per month", "monthly"], 4),
    (&["hourly", "per hour", "/hr", "an hour"], 3),
    (&["negotiable", "flexible", "open to", "discuss", "depends"], 5),
];

const LOCATION_RULES: Rules = &[
    (&["hybrid", "mix of remote", "partly remote"], 1),
    (&["relocat", "willing to move"], 3),
    (
        &["on-site", "onsite", "on site", "in office", "in-office", "in person", "in-person"],
        2,
    ),
    (&["remote", "anywhere", "distributed", "work from home", "wfh"], 0),
];

pub fn infer_availability(raw: &str) -> Option<&'static str> {
    closest_option(raw, AVAILABILITY_OPTIONS, AVAILABILITY_RULES)
}

pub fn infer_compensation(raw: &str) -> Option<&'static str> {
    closest_option(raw, COMPENSATION_OPTIONS, COMPENSATION_RULES).or_else(|| {
        let lower = raw.to_lowercase();
        let cash = ["cash", "salary", "fee", "$", "paid"]
            .iter()
            .any(|k| lower.contains(k));
        let equity = ["equity", "stock", "shares", "options"]
            .iter()
            .any(|k| lower.contains(k));
        match (cash, equity) {
            (true, true) => Some(COMPENSATION_OPTIONS[2]),
            (false, true) => Some(COMPENSATION_OPTIONS[1]),
            (true, false) => Some(COMPENSATION_OPTIONS[0]),
            (false, false) => None,
        }
    })
}

pub fn infer_location(raw: &str) -> Option<&'static str> {
    closest_option(raw, LOCATION_OPTIONS, LOCATION_RULES)
}

/// Exact or case-insensitive match first, then keyword rules.
fn closest_option(raw: &str, options: &[&'static str], rules: Rules) -> Option<&'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some(exact) = options
        .iter()
        .find(|option| option.eq_ignore_ascii_case(trimmed))
    {
        return Some(exact);
    }

    let lower = trimmed.to_lowercase();
    rules
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, index)| options[*index])
}
