// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Locale to script mapping for font selection.

use alloc::string::String;

use icu_locale_core::LanguageIdentifier;
use text_primitives::Script;

/// Returns the script fonts should be selected for in `locale`.
///
/// An explicit script subtag wins. Otherwise the primary language picks the script, with
/// Chinese split into simplified and traditional by region. Anything unrecognized, including a
/// missing or malformed locale, maps to [`Script::COMMON`].
///
/// ```
/// use paragraph_tree::locale::script_for_locale;
///
/// assert_eq!(script_for_locale(Some("ja-JP")).as_str(), "Jpan");
/// assert_eq!(script_for_locale(Some("zh_TW")).as_str(), "Hant");
/// assert_eq!(script_for_locale(Some("sr-Latn")).as_str(), "Latn");
/// assert_eq!(script_for_locale(None).as_str(), "Zyyy");
/// ```
pub fn script_for_locale(locale: Option<&str>) -> Script {
    let Some(locale) = locale.filter(|l| !l.is_empty()) else {
        return Script::COMMON;
    };
    let tag: String = locale.replace('_', "-");
    let id = match LanguageIdentifier::try_from_str(&tag) {
        Ok(id) => id,
        Err(err) => {
            log::debug!("unparseable locale {locale:?} ({err:?}); using the common script");
            return Script::COMMON;
        }
    };
    if let Some(script) = id.script {
        return Script::parse(script.as_str()).unwrap_or(Script::COMMON);
    }
    let region = id.region.as_ref().map(|region| region.as_str());
    Script::from_bytes(*language_script(id.language.as_str(), region))
}

fn language_script(language: &str, region: Option<&str>) -> &'static [u8; 4] {
    match language {
        "ja" => b"Jpan",
        "ko" => b"Kore",
        "zh" => match region {
            Some("TW" | "HK" | "MO") => b"Hant",
            _ => b"Hans",
        },
        "ar" | "fa" | "ur" | "ps" => b"Arab",
        "he" | "yi" => b"Hebr",
        "ru" | "uk" | "bg" | "sr" | "be" | "mk" | "kk" => b"Cyrl",
        "el" => b"Grek",
        "th" => b"Thai",
        "hi" | "mr" | "ne" => b"Deva",
        "bn" => b"Beng",
        "ta" => b"Taml",
        "hy" => b"Armn",
        "ka" => b"Geor",
        "km" => b"Khmr",
        "lo" => b"Laoo",
        "my" => b"Mymr",
        "en" | "fr" | "de" | "es" | "it" | "pt" | "nl" | "sv" | "da" | "nb" | "nn" | "no"
        | "fi" | "pl" | "cs" | "sk" | "hu" | "ro" | "tr" | "vi" | "id" | "ms" | "ca" | "hr"
        | "sl" | "lt" | "lv" | "et" | "is" | "ga" | "sq" | "sw" | "tl" => b"Latn",
        _ => b"Zyyy",
    }
}
