use log::debug;

use crate::{
    alignment_configuration::AlignmentConfiguration,
    alignment_matrix::{AlignmentMatrix, BaseAlignmentType, index::AlignmentMatrixIndex},
};

pub mod alignment_result;

use alignment_result::{Alignment, AlignmentResult, GAP_SYMBOL};

/// Computes the optimal global alignment score of two sequences and enumerates every alignment achieving it.
///
/// This is a pure function of its inputs: calling it twice with the same arguments yields the same score, matrix and alignment list.
/// The enumeration order is deterministic, trying a gap in the query first, a gap in the reference second and the diagonal move last at every cell.
/// At least one alignment always exists, and the recursion depth of the enumeration is bounded by the summed sequence lengths.
pub fn global_align(
    reference: &str,
    query: &str,
    configuration: AlignmentConfiguration,
) -> AlignmentResult {
    let reference: Vec<char> = reference.chars().collect();
    let query: Vec<char> = query.chars().collect();

    let mut matrix = AlignmentMatrix::new(configuration, reference.len(), query.len());
    let score = matrix.align(&reference, &query);
    debug!("Filled alignment matrix:\n{matrix}");

    let alignments = Backtracker::new(&matrix, &reference, &query).enumerate();
    debug!(
        "Enumerated {} optimal alignments with score {}",
        alignments.len(),
        score.as_i64()
    );

    AlignmentResult::new(score, matrix, alignments)
}

/// Depth-first walker over every score-consistent path from the bottom-right cell to the origin.
///
/// The row accumulators are shared across the recursion: symbols are appended before each recursive call and popped right after it returns, so sibling branches never observe each other's partial state.
/// Rows are accumulated back-to-front and reversed once a walk reaches the origin.
struct Backtracker<'a> {
    matrix: &'a AlignmentMatrix,
    reference: &'a [char],
    query: &'a [char],
    reference_row: Vec<char>,
    query_row: Vec<char>,
    alignments: Vec<Alignment>,
}

impl<'a> Backtracker<'a> {
    fn new(matrix: &'a AlignmentMatrix, reference: &'a [char], query: &'a [char]) -> Self {
        Self {
            matrix,
            reference,
            query,
            reference_row: Vec::new(),
            query_row: Vec::new(),
            alignments: Vec::new(),
        }
    }

    fn enumerate(mut self) -> Vec<Alignment> {
        let (rows, columns) = self.matrix.dimensions();
        self.walk(AlignmentMatrixIndex::new(rows - 1, columns - 1));
        self.alignments
    }

    fn walk(&mut self, index: AlignmentMatrixIndex) {
        if index == AlignmentMatrixIndex::ORIGIN {
            self.alignments.push(Alignment::from_reversed_rows(
                &self.reference_row,
                &self.query_row,
            ));
            return;
        }

        if index.reference_index > 0 && self.is_score_consistent(index, BaseAlignmentType::Deletion)
        {
            self.branch(
                index,
                self.reference[index.reference_index - 1],
                GAP_SYMBOL,
                BaseAlignmentType::Deletion,
            );
        }
        if index.query_index > 0 && self.is_score_consistent(index, BaseAlignmentType::Insertion) {
            self.branch(
                index,
                GAP_SYMBOL,
                self.query[index.query_index - 1],
                BaseAlignmentType::Insertion,
            );
        }
        if index.reference_index > 0 && index.query_index > 0 {
            let alignment_type = if self.reference[index.reference_index - 1]
                == self.query[index.query_index - 1]
            {
                BaseAlignmentType::Match
            } else {
                BaseAlignmentType::Substitution
            };
            if self.is_score_consistent(index, alignment_type) {
                self.branch(
                    index,
                    self.reference[index.reference_index - 1],
                    self.query[index.query_index - 1],
                    alignment_type,
                );
            }
        }
    }

    fn branch(
        &mut self,
        index: AlignmentMatrixIndex,
        reference_symbol: char,
        query_symbol: char,
        alignment_type: BaseAlignmentType,
    ) {
        self.reference_row.push(reference_symbol);
        self.query_row.push(query_symbol);
        self.walk(index.predecessor(alignment_type));
        self.reference_row.pop();
        self.query_row.pop();
    }

    /// A predecessor move is followed iff the recorded cell score equals the predecessor score plus the move's weight.
    fn is_score_consistent(
        &self,
        index: AlignmentMatrixIndex,
        alignment_type: BaseAlignmentType,
    ) -> bool {
        let predecessor_score = self.matrix[index.predecessor(alignment_type)];
        self.matrix[index]
            == predecessor_score + self.matrix.configuration().score(alignment_type)
    }
}
