use crate::score::Score;

/// Scores two sequences position by position, without gaps.
///
/// Positions beyond the shorter sequence are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionalScorer {
    pub match_score: Score,
    pub mismatch_score: Score,
}

impl PositionalScorer {
    pub fn score(&self, reference: &str, query: &str) -> Score {
        reference
            .chars()
            .zip(query.chars())
            .map(|(reference_symbol, query_symbol)| {
                if reference_symbol == query_symbol {
                    self.match_score
                } else {
                    self.mismatch_score
                }
            })
            .fold(Score::ZERO, |sum, score| sum + score)
    }
}

impl Default for PositionalScorer {
    fn default() -> Self {
        Self {
            match_score: 1.into(),
            mismatch_score: (-2).into(),
        }
    }
}
