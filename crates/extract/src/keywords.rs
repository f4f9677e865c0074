use ingest::{split_sentences, word_count};

use crate::schema::ShortSummary;

/// Electric-vehicle drawback terms used when no keyword list is configured
pub const DEFAULT_KEYWORDS: &[&str] = &[
    // Environmental concerns
    "lithium mining", "cobalt mining", "nickel mining", "rare earth metals",
    "excessive mining", "toxic chemicals", "hazardous waste", "battery waste",
    "battery disposal", "battery leakage", "metal toxicity", "water pollution",
    "soil degradation", "air pollution", "noise pollution",
    // Energy and emissions
    "carbon footprint", "coal-based electricity", "emissions from power generation",
    "fossil fuel dependency", "non-renewable energy dependency", "charging station emissions",
    // Recycling and disposal
    "recycling inefficiency", "recycling challenges", "battery recalls",
    // Supply chain and ethics
    "child labor", "ethical concerns", "displacement of local communities", "supply chain issues",
    // Electrical and grid
    "charging infrastructure", "grid strain", "grid instability", "electricity shortages",
    "power outages", "transformer aging", "local power cuts", "energy storage inefficiency",
    // Performance and reliability
    "limited range", "charging time delays", "limited charging cycles", "battery degradation",
    "battery failure", "thermal runaway", "overheating", "thermal issues", "fire hazard",
    "battery overheating incidents", "battery explosion", "driving risks", "accident severity",
    "cold weather inefficiency", "extreme heat issues", "durability issues", "battery lifespan concerns",
    "maintenance challenges", "high repair costs", "high maintenance costs",
    // Cost
    "high costs", "insurance risks", "infrastructure challenges", "installation costs",
    "operational costs", "battery replacement cost",
    // Technology
    "electromagnetic interference", "circuit damage", "charging station availability",
    // Hidden environmental burdens
    "emissions displacement", "mining ecosystem damage", "local water depletion", "air quality impact",
    // Power generation and grid level
    "load balancing problems", "power plant capacity stress", "transformer failure risks",
    "transmission losses", "emergency backup capacity issues", "grid load forecasting challenges",
];

#[derive(Debug, Clone)]
pub struct KeywordFilter {
    /// Lowercased, trimmed, unique
    keywords: Vec<String>,
}

impl KeywordFilter {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();

        for keyword in keywords {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if !keyword.is_empty() && !normalized.contains(&keyword) {
                normalized.push(keyword);
            }
        }

        Self {
            keywords: normalized,
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Case-insensitive substring match against any keyword
    pub fn matches(&self, sentence: &str) -> bool {
        let lowered = sentence.to_lowercase();
        self.keywords.iter().any(|kw| lowered.contains(kw.as_str()))
    }

    /// Matching sentences, original order preserved
    pub fn filter_sentences<'a>(&self, sentences: &'a [String]) -> Vec<&'a str> {
        sentences
            .iter()
            .filter(|s| self.matches(s))
            .map(String::as_str)
            .collect()
    }

    /// Concatenate matching sentences until `max_words` is reached.
    ///
    /// Selection stops at the first matching sentence that would overflow the budget.
    pub fn short_summary(&self, text: &str, max_words: usize) -> ShortSummary {
        let sentences = split_sentences(text);
        let mut selected: Vec<String> = Vec::new();
        let mut total = 0;

        for sentence in self.filter_sentences(&sentences) {
            let words = word_count(sentence);
            if total + words > max_words {
                break;
            }
            selected.push(sentence.to_string());
            total += words;
        }

        ShortSummary {
            text: selected.join(" "),
            sentences: selected,
            word_count: total,
        }
    }
}

impl Default for KeywordFilter {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS.iter().copied())
    }
}
