//! Language selector over the ten published BIP-39 word lists.

use serde::{Deserialize, Serialize};

use crate::core::constants::NUM_WORDS;
use crate::error::Error;

/// One of the ten BIP-39 dictionaries.
///
/// All languages share the same cardinality and index semantics; only the
/// word text differs. The declaration order is stable and used for numeric
/// selection (`0` = English … `9` = Chinese Traditional).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    English,
    Czech,
    Portuguese,
    Italian,
    French,
    Spanish,
    Japanese,
    Korean,
    ChineseSimplified,
    ChineseTraditional,
}

impl Language {
    /// Every language, in selector order.
    pub const ALL: [Language; 10] = [
        Language::English,
        Language::Czech,
        Language::Portuguese,
        Language::Italian,
        Language::French,
        Language::Spanish,
        Language::Japanese,
        Language::Korean,
        Language::ChineseSimplified,
        Language::ChineseTraditional,
    ];

    /// Lower-case language name, e.g. `"chinese_simplified"`.
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Czech => "czech",
            Language::Portuguese => "portuguese",
            Language::Italian => "italian",
            Language::French => "french",
            Language::Spanish => "spanish",
            Language::Japanese => "japanese",
            Language::Korean => "korean",
            Language::ChineseSimplified => "chinese_simplified",
            Language::ChineseTraditional => "chinese_traditional",
        }
    }

    /// Position of this language in [`Language::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Language at `index` in [`Language::ALL`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Whether the word list contains characters that many consoles do not
    /// render without a UTF-8 font and code page.
    pub fn needs_unicode_console(self) -> bool {
        self.index() >= Language::French.index()
    }

    /// The 2048-word list for this language, in BIP-39 index order.
    pub fn word_list(self) -> &'static [&'static str; NUM_WORDS] {
        let published = match self {
            Language::English => bip39::Language::English,
            Language::Czech => bip39::Language::Czech,
            Language::Portuguese => bip39::Language::Portuguese,
            Language::Italian => bip39::Language::Italian,
            Language::French => bip39::Language::French,
            Language::Spanish => bip39::Language::Spanish,
            Language::Japanese => bip39::Language::Japanese,
            Language::Korean => bip39::Language::Korean,
            Language::ChineseSimplified => bip39::Language::SimplifiedChinese,
            Language::ChineseTraditional => bip39::Language::TraditionalChinese,
        };
        published.word_list()
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Language {
    type Err = Error;

    /// Accepts the language name (any case, `-` or `_` separators) or its
    /// numeric selector.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(index) = trimmed.parse::<usize>() {
            return Self::from_index(index).ok_or_else(|| Error::UnknownLanguage(s.to_string()));
        }

        let normalized = trimmed.to_lowercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|lang| lang.name() == normalized)
            .ok_or_else(|| Error::UnknownLanguage(s.to_string()))
    }
}
