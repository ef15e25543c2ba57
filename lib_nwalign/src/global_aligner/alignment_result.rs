use std::fmt::{Display, Formatter, Result};

use crate::{
    alignment_matrix::{AlignmentMatrix, index::AlignmentMatrixIndex},
    score::Score,
};

/// The symbol emitted for a position where one sequence has no counterpart.
pub const GAP_SYMBOL: char = '-';

/// One optimal global alignment.
///
/// Both rows have the same length and range over the input alphabet plus [`GAP_SYMBOL`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Alignment {
    pub reference: String,
    pub query: String,
}

impl Alignment {
    /// Builds an alignment from rows that were accumulated back-to-front during backtracking.
    pub(super) fn from_reversed_rows(reference_row: &[char], query_row: &[char]) -> Self {
        Self {
            reference: reference_row.iter().rev().collect(),
            query: query_row.iter().rev().collect(),
        }
    }
}

impl Display for Alignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}\n{}", self.reference, self.query)
    }
}

/// The outcome of one alignment invocation, fully owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentResult {
    pub score: Score,
    pub matrix: AlignmentMatrix,
    pub alignments: Vec<Alignment>,
}

impl AlignmentResult {
    pub fn new(score: Score, matrix: AlignmentMatrix, alignments: Vec<Alignment>) -> Self {
        Self {
            score,
            matrix,
            alignments,
        }
    }
}

/// Renders the alignment report.
///
/// Matrix rows put a tab after every value, including the last one.
impl Display for AlignmentResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Score: {}", self.score.as_i64())?;
        writeln!(f)?;

        writeln!(f, "Matrix:")?;
        let (rows, columns) = self.matrix.dimensions();
        for reference_index in 0..rows {
            for query_index in 0..columns {
                let index = AlignmentMatrixIndex::new(reference_index, query_index);
                write!(f, "{}\t", self.matrix[index].as_i64())?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "Quantity of alignments generated: {}",
            self.alignments.len()
        )?;
        writeln!(f)?;

        writeln!(f, "Alignments generated:")?;
        for alignment in &self.alignments {
            writeln!(f, "{alignment}")?;
            writeln!(f)?;
        }
        Ok(())
    }
}
