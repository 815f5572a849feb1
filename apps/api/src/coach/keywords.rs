//! Keyword buckets used by the fallback path to guess what a user is interested in.
//!
//! Buckets are tested in a fixed precedence order and the first match wins,
//! regardless of how many terms each bucket matched.

/// A named interest area with the terms that identify it.
#[derive(Debug, PartialEq, Eq)]
pub struct KeywordBucket {
    pub name: &'static str,
    /// Human-readable label used in generated reasons and replies.
    pub label: &'static str,
    /// Terms looked for in the user's free text.
    pub input_terms: &'static [&'static str],
    /// Terms looked for in a career option's category or title.
    pub catalog_terms: &'static [&'static str],
}

/// Precedence order: technology, data, design, business, marketing, security.
pub const BUCKETS: [KeywordBucket; 6] = [
    KeywordBucket {
        name: "technology",
        label: "technology and software",
        input_terms: &[
            "programming",
            "coding",
            "code",
            "software",
            "developer",
            "development",
            "developers",
            "programmer",
            "programmers",
            "coder",
            "coders",
            "engineer",
            "engineers",
            "computer",
            "technology",
            "tech",
            "web",
            "app",
            "apps",
            "engineering",
            "javascript",
            "python",
            "java",
            "rust",
        ],
        catalog_terms: &[
            "technology",
            "software",
            "developer",
            "engineer",
            "programming",
            "web",
            "it",
        ],
    },
    KeywordBucket {
        name: "data",
        label: "data and analytics",
        input_terms: &[
            "data",
            "analytics",
            "analysis",
            "statistics",
            "machine learning",
            "ai",
            "artificial intelligence",
            "numbers",
            "math",
            "sql",
            "analyst",
            "analysts",
            "statistician",
            "data scientist",
        ],
        catalog_terms: &["data", "analytics", "machine learning", "ai", "science"],
    },
    KeywordBucket {
        name: "design",
        label: "design and creative work",
        input_terms: &[
            "design",
            "designing",
            "creative",
            "art",
            "ui",
            "ux",
            "graphic",
            "visual",
            "drawing",
            "illustration",
            "designer",
            "designers",
            "illustrator",
            "artist",
            "artists",
        ],
        catalog_terms: &["design", "designer", "creative", "ux", "ui", "graphic"],
    },
    KeywordBucket {
        name: "business",
        label: "business and management",
        input_terms: &[
            "business",
            "management",
            "managing",
            "finance",
            "entrepreneur",
            "entrepreneurship",
            "strategy",
            "consulting",
            "leadership",
            "startup",
            "manager",
            "managers",
            "entrepreneurs",
            "consultant",
            "consultants",
            "founder",
        ],
        catalog_terms: &["business", "management", "manager", "finance", "consultant", "product"],
    },
    KeywordBucket {
        name: "marketing",
        label: "marketing and communications",
        input_terms: &[
            "marketing",
            "sales",
            "advertising",
            "social media",
            "brand",
            "branding",
            "content",
            "seo",
            "communications",
            "marketer",
            "marketers",
            "salesperson",
            "copywriter",
        ],
        catalog_terms: &["marketing", "sales", "advertising", "brand", "content", "seo"],
    },
    KeywordBucket {
        name: "security",
        label: "security and networks",
        input_terms: &[
            "security",
            "cybersecurity",
            "cyber",
            "hacking",
            "network",
            "networks",
            "privacy",
            "forensics",
            "hacker",
            "hackers",
            "pentester",
            "penetration testing",
        ],
        catalog_terms: &["security", "cybersecurity", "cyber", "network"],
    },
];

/// True when `text` mentions `term`: whole words for single-word terms,
/// plain substring for phrases. Both sides are expected lower-case.
pub fn mentions(text: &str, term: &str) -> bool {
    if term.contains(' ') {
        return text.contains(term);
    }
    text.split(|c: char| !c.is_alphanumeric())
        .any(|word| word == term)
}

/// First bucket (in precedence order) with any input term present in `text`.
pub fn detect_bucket(text: &str) -> Option<&'static KeywordBucket> {
    let text = text.to_lowercase();
    BUCKETS
        .iter()
        .find(|bucket| bucket.input_terms.iter().any(|term| mentions(&text, term)))
}

impl KeywordBucket {
    /// Whether a catalog entry's category or title belongs to this bucket.
    pub fn matches_entry(&self, category: &str, title: &str) -> bool {
        let category = category.to_lowercase();
        let title = title.to_lowercase();
        self.catalog_terms
            .iter()
            .any(|term| mentions(&category, term) || mentions(&title, term))
    }
}
