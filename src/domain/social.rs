//! Social Analyzer
//!
//! Placeholder heuristic for social presence: membership in the injected
//! major-token allow-lists drives a GitHub guess, a community-size guess
//! and a sentiment grade. No external signal is consulted; this exists so
//! the composite verdict has a social section until a real social provider
//! is wired in.

use serde::{Deserialize, Serialize};

use super::known_contracts::{LARGE_COMMUNITY_SYMBOLS, MAJOR_TOKEN_SYMBOLS};

/// Estimated community size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CommunitySize {
    Large,
    Medium,
    Small,
    None,
}

/// Estimated community sentiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// Social presence estimate for one token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMetrics {
    pub github_score: u8,
    pub has_github: bool,
    pub twitter_mentions: u32,
    pub community_size: CommunitySize,
    pub sentiment: Sentiment,
    pub red_flags: Vec<String>,
}

/// Symbol-allow-list social heuristics.
#[derive(Debug, Clone)]
pub struct SocialAnalyzer {
    major_tokens: Vec<String>,
    large_communities: Vec<String>,
}

impl SocialAnalyzer {
    /// Build an analyzer over custom allow-lists.
    pub fn new<I, J, S, T>(major_tokens: I, large_communities: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            major_tokens: major_tokens.into_iter().map(|s| s.into().to_uppercase()).collect(),
            large_communities: large_communities
                .into_iter()
                .map(|s| s.into().to_uppercase())
                .collect(),
        }
    }

    /// Compute the social estimate from name and symbol alone.
    pub fn analyze_social(&self, _token_name: &str, token_symbol: &str) -> SocialMetrics {
        let has_github = self.is_major(token_symbol);
        let github_score = if has_github { 70 } else { 20 };
        let community_size = self.estimate_community(token_symbol);
        let sentiment = Self::sentiment(community_size);
        let red_flags = Self::red_flags(has_github, community_size);

        SocialMetrics {
            github_score,
            has_github,
            twitter_mentions: 0,
            community_size,
            sentiment,
            red_flags,
        }
    }

    fn is_major(&self, symbol: &str) -> bool {
        let upper = symbol.to_uppercase();
        self.major_tokens.iter().any(|s| s == &upper)
    }

    fn estimate_community(&self, symbol: &str) -> CommunitySize {
        let upper = symbol.to_uppercase();
        if self.large_communities.iter().any(|s| s == &upper) {
            CommunitySize::Large
        } else {
            CommunitySize::Small
        }
    }

    fn sentiment(size: CommunitySize) -> Sentiment {
        match size {
            CommunitySize::Large => Sentiment::Positive,
            CommunitySize::Medium => Sentiment::Neutral,
            _ => Sentiment::Negative,
        }
    }

    fn red_flags(has_github: bool, size: CommunitySize) -> Vec<String> {
        let mut flags = Vec::new();

        if !has_github {
            flags.push("No public GitHub repository - code not auditable".to_string());
        }
        if size == CommunitySize::None {
            flags.push("No social media presence - potential scam".to_string());
        }

        flags
    }
}

impl Default for SocialAnalyzer {
    fn default() -> Self {
        Self::new(
            MAJOR_TOKEN_SYMBOLS.iter().copied(),
            LARGE_COMMUNITY_SYMBOLS.iter().copied(),
        )
    }
}
