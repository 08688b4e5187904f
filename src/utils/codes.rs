//! Human-readable record code generation
//!
//! Worker and staff records carry short codes shown on printed cards and
//! dashboards. Codes are assigned once at creation and never regenerated.
//!
//! | Record | Source of initials | Format |
//! |--------|--------------------|--------|
//! | Worker | hospital name from the request payload, fallback `GEN` | `{INITIALS}_{nnn}` |
//! | Staff (role contains "nurse") | hospital account display name, fallback `HOS` | `{INITIALS}{nnn}` |
//! | Staff (role contains "doctor") | hospital account display name, fallback `HOS` | `{INITIALS}@{nnn}` |
//! | Staff (other roles) | hospital account display name, fallback `HOS` | `{INITIALS}_{nnn}` |
//!
//! The two initials sources are intentionally different and must stay so.

use rand::Rng;

/// Uppercase first letters of each whitespace-separated token.
/// Returns None when the name has no usable tokens.
pub fn initials(name: &str) -> Option<String> {
    let letters: String = name
        .split_whitespace()
        .filter_map(|token| token.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect();
    if letters.is_empty() { None } else { Some(letters) }
}

/// Random 3-digit suffix in 100..=999
fn random_suffix() -> u32 {
    rand::thread_rng().gen_range(100..1000)
}

/// Generate a worker code from the hospital name submitted in the payload.
pub fn worker_code(hospital_name: Option<&str>) -> String {
    let prefix = hospital_name
        .and_then(initials)
        .unwrap_or_else(|| "GEN".to_string());
    format!("{}_{}", prefix, random_suffix())
}

/// Generate a staff code from the hospital account's display name.
/// The separator depends on the staff role (case-insensitive substring match).
pub fn staff_code(hospital_display_name: &str, staff_role: &str) -> String {
    let prefix = initials(hospital_display_name).unwrap_or_else(|| "HOS".to_string());
    let n = random_suffix();
    let role = staff_role.to_lowercase();

    if role.contains("nurse") {
        format!("{prefix}{n}")
    } else if role.contains("doctor") {
        format!("{prefix}@{n}")
    } else {
        format!("{prefix}_{n}")
    }
}
