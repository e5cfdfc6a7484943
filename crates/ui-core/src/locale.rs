// File: crates/ui-core/src/locale.rs
// Summary: First-day-of-week lookup from a BCP 47 style locale tag.

use chrono::Weekday;

const SUNDAY_START: &[&str] = &[
    "AG", "AS", "BD", "BR", "BS", "BT", "BW", "BZ", "CA", "CN", "CO", "DM", "DO", "ET", "GT", "GU",
    "HK", "HN", "ID", "IL", "IN", "JM", "JP", "KE", "KH", "KR", "LA", "MH", "MM", "MO", "MT", "MX",
    "MZ", "NI", "NP", "PA", "PE", "PH", "PK", "PR", "PT", "PY", "SA", "SG", "SV", "TH", "TT", "TW",
    "UM", "US", "VE", "VI", "WS", "YE", "ZA", "ZW",
];

const SATURDAY_START: &[&str] = &[
    "AE", "AF", "BH", "DJ", "DZ", "EG", "IQ", "IR", "JO", "KW", "LY", "OM", "QA", "SD", "SY",
];

/// Default region for a bare language tag.
fn region_for_language(lang: &str) -> Option<&'static str> {
    let region = match lang {
        "en" => "US",
        "ja" => "JP",
        "zh" => "CN",
        "ko" => "KR",
        "he" => "IL",
        "hi" => "IN",
        "pt" => "BR",
        "th" => "TH",
        "ar" => "EG",
        "fa" => "IR",
        _ => return None,
    };
    Some(region)
}

/// Extract the region subtag (`en-GB` -> `GB`, `zh_Hant_TW` -> `TW`).
fn region_of(locale: &str) -> Option<String> {
    let mut parts = locale.split(['-', '_']);
    let lang = parts.next()?.to_ascii_lowercase();
    parts
        .find(|p| p.len() == 2 && p.chars().all(|c| c.is_ascii_alphabetic()))
        .map(|p| p.to_ascii_uppercase())
        .or_else(|| region_for_language(&lang).map(str::to_string))
}

/// First weekday shown in a month grid for `locale`; Monday when unknown.
pub fn week_start_for_locale(locale: &str) -> Weekday {
    match region_of(locale) {
        Some(r) if SUNDAY_START.contains(&r.as_str()) => Weekday::Sun,
        Some(r) if SATURDAY_START.contains(&r.as_str()) => Weekday::Sat,
        _ => Weekday::Mon,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_pick_week_start() {
        assert_eq!(week_start_for_locale("en-US"), Weekday::Sun);
        assert_eq!(week_start_for_locale("en-GB"), Weekday::Mon);
        assert_eq!(week_start_for_locale("de_DE"), Weekday::Mon);
        assert_eq!(week_start_for_locale("ar-EG"), Weekday::Sat);
        assert_eq!(week_start_for_locale("zh-Hant-TW"), Weekday::Sun);
    }

    #[test]
    fn bare_languages_fall_back_to_default_region() {
        assert_eq!(week_start_for_locale("en"), Weekday::Sun);
        assert_eq!(week_start_for_locale("ja"), Weekday::Sun);
        assert_eq!(week_start_for_locale("fr"), Weekday::Mon);
        assert_eq!(week_start_for_locale(""), Weekday::Mon);
    }
}
