mod breeds;

use crate::language::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreedKind {
    Cattle,
    Buffalo,
}

/// One string per supported language. Empty translations fall back to English.
#[derive(Debug, Clone, Copy)]
pub struct LocalizedText {
    pub en: &'static str,
    pub hi: &'static str,
    pub mr: &'static str,
    pub gu: &'static str,
}

impl LocalizedText {
    pub fn get(&self, language: Language) -> &'static str {
        let text = match language {
            Language::English => self.en,
            Language::Hindi => self.hi,
            Language::Marathi => self.mr,
            Language::Gujarati => self.gu,
        };
        if text.is_empty() {
            self.en
        } else {
            text
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BreedEntry {
    pub slug: &'static str,
    pub kind: BreedKind,
    pub name: LocalizedText,
    pub description: LocalizedText,
    pub image: &'static str,
    pub milk_yield: &'static str,
    pub traits: &'static str,
    pub companion: &'static str,
    pub cost_range: &'static str,
}

pub fn all() -> &'static [BreedEntry] {
    breeds::BREEDS
}

pub fn by_slug(slug: &str) -> Option<&'static BreedEntry> {
    all().iter().find(|entry| entry.slug == slug)
}

pub fn by_kind(kind: BreedKind) -> impl Iterator<Item = &'static BreedEntry> {
    all().iter().filter(move |entry| entry.kind == kind)
}

/// Matches a classifier label such as `"gir_cattle"` or `"Murrah Buffalo"`
/// against catalogue slugs and English names.
pub fn find_by_label(label: &str) -> Option<&'static BreedEntry> {
    let wanted = normalize_label(label);
    if wanted.is_empty() {
        return None;
    }

    all().iter().find(|entry| {
        normalize_label(entry.slug) == wanted || normalize_label(entry.name.en) == wanted
    })
}

/// Lowercase, underscores and hyphens to spaces, species suffix removed,
/// whitespace collapsed.
pub fn normalize_label(label: &str) -> String {
    let mut key = label.trim().to_lowercase().replace(['_', '-'], " ");
    for suffix in [" buffalo", " cattle", " cow", " breed"] {
        if let Some(stripped) = key.strip_suffix(suffix) {
            key = stripped.to_string();
        }
    }
    key.split_whitespace().collect::<Vec<_>>().join(" ")
}
