// Supported display languages and localized column selection

use serde::Serialize;
use strum::{EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, EnumString, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    #[default]
    Ko,
    En,
    Zh,
    Ja,
    Vi,
    Mn,
    Ru,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Unknown or missing `lang` values fall back to Korean
    pub fn from_query(value: Option<&str>) -> Self {
        value
            .and_then(|v| v.trim().to_ascii_lowercase().parse().ok())
            .unwrap_or_default()
    }
}

/// Localized variants of a text column; `base` is the Korean original
pub struct LocalizedText<'a> {
    pub base: &'a str,
    pub en: Option<&'a str>,
    pub zh: Option<&'a str>,
    pub ja: Option<&'a str>,
    pub vi: Option<&'a str>,
    pub mn: Option<&'a str>,
    pub ru: Option<&'a str>,
}

impl<'a> LocalizedText<'a> {
    /// Picks the requested language, then English, then the base text
    pub fn pick(&self, lang: Language) -> &'a str {
        let requested = match lang {
            Language::Ko => return self.base,
            Language::En => self.en,
            Language::Zh => self.zh,
            Language::Ja => self.ja,
            Language::Vi => self.vi,
            Language::Mn => self.mn,
            Language::Ru => self.ru,
        };

        let non_empty = |v: Option<&'a str>| v.filter(|s| !s.trim().is_empty());

        non_empty(requested)
            .or_else(|| non_empty(self.en))
            .unwrap_or(self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LocalizedText<'static> {
        LocalizedText {
            base: "해수 담수화 설비",
            en: Some("Seawater desalination plant"),
            zh: Some("海水淡化设备"),
            ja: None,
            vi: Some(""),
            mn: None,
            ru: None,
        }
    }

    #[test]
    fn test_language_from_query() {
        assert_eq!(Language::from_query(Some("en")), Language::En);
        assert_eq!(Language::from_query(Some(" ZH ")), Language::Zh);
        assert_eq!(Language::from_query(Some("fr")), Language::Ko);
        assert_eq!(Language::from_query(None), Language::Ko);
        assert_eq!(Language::Mn.as_str(), "mn");
    }

    #[test]
    fn test_pick_requested_language() {
        assert_eq!(sample().pick(Language::Zh), "海水淡化设备");
        assert_eq!(sample().pick(Language::Ko), "해수 담수화 설비");
    }

    #[test]
    fn test_pick_falls_back_to_english_then_base() {
        assert_eq!(sample().pick(Language::Ja), "Seawater desalination plant");
        // Empty strings count as missing
        assert_eq!(sample().pick(Language::Vi), "Seawater desalination plant");

        let korean_only = LocalizedText {
            base: "펌프",
            en: None,
            zh: None,
            ja: None,
            vi: None,
            mn: None,
            ru: None,
        };
        assert_eq!(korean_only.pick(Language::Ru), "펌프");
    }
}
