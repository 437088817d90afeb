pub mod preference;
pub mod translations;

/// Languages the site text is available in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Marathi,
    Gujarati,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[
            Language::English,
            Language::Hindi,
            Language::Marathi,
            Language::Gujarati,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Marathi => "mr",
            Language::Gujarati => "gu",
        }
    }

    /// Name of the language written in that language.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिन्दी",
            Language::Marathi => "मराठी",
            Language::Gujarati => "ગુજરાતી",
        }
    }

    /// Exact match against the supported codes. Anything else is `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|language| language.code() == code.trim())
    }

    /// Unknown or missing codes resolve to the default language.
    pub fn from_code_or_default(code: Option<&str>) -> Self {
        code.and_then(Self::from_code).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_lookup() {
        for language in Language::all() {
            assert_eq!(Language::from_code(language.code()), Some(*language));
        }
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code(""), None);
        assert_eq!(Language::from_code("EN"), None);
    }

    #[test]
    fn test_default_fallback() {
        assert_eq!(Language::from_code_or_default(None), Language::English);
        assert_eq!(Language::from_code_or_default(Some("xx")), Language::English);
        assert_eq!(Language::from_code_or_default(Some("gu")), Language::Gujarati);
    }
}
