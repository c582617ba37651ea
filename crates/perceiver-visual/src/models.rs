//! Result models for visual perception

/// Result of a single locate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchOutcome {
    Found { score: f32 },
    NotFound,
}

impl MatchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, MatchOutcome::Found { .. })
    }

    /// Classifies a raw best score against a confidence threshold.
    pub fn from_score(score: Option<f32>, confidence: f32) -> Self {
        match score {
            Some(score) if score >= confidence => MatchOutcome::Found { score },
            _ => MatchOutcome::NotFound,
        }
    }
}

/// Result of a bounded wait.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WaitOutcome {
    /// Pattern matched on poll number `polls` (1-based).
    Found { polls: u32, score: f32 },
    /// Every poll missed.
    TimedOut { polls: u32 },
}

impl WaitOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, WaitOutcome::Found { .. })
    }

    pub fn polls(&self) -> u32 {
        match self {
            WaitOutcome::Found { polls, .. } | WaitOutcome::TimedOut { polls } => *polls,
        }
    }
}
