use crate::{alignment_matrix::BaseAlignmentType, score::Score};

/// The weights of the three alignment moves.
///
/// All weights are arbitrary signed integers.
/// In particular, the gap score is not required to be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentConfiguration {
    pub match_score: Score,
    pub mismatch_score: Score,
    pub gap_score: Score,
}

impl AlignmentConfiguration {
    pub fn score(&self, alignment_type: BaseAlignmentType) -> Score {
        match alignment_type {
            BaseAlignmentType::None => {
                panic!("Alignment type 'None' has no score")
            }
            BaseAlignmentType::Insertion | BaseAlignmentType::Deletion => self.gap_score,
            BaseAlignmentType::Match => self.match_score,
            BaseAlignmentType::Substitution => self.mismatch_score,
        }
    }
}

impl Default for AlignmentConfiguration {
    fn default() -> Self {
        Self {
            match_score: 1.into(),
            mismatch_score: (-1).into(),
            gap_score: (-2).into(),
        }
    }
}
