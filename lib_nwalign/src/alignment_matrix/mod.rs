use index::{
    AlignmentMatrixIndex,
    iterators::{
        AlignmentMatrixInnerIterator, AlignmentMatrixQueryIterator,
        AlignmentMatrixReferenceIterator,
    },
};
use ndarray::Array2;

use crate::{alignment_configuration::AlignmentConfiguration, score::Score};

pub mod index;

/// The Needleman-Wunsch score matrix.
///
/// Cell `(i, j)` holds the optimal score of aligning the length-`i` prefix of the reference against the length-`j` prefix of the query.
/// The matrix is filled once by [`align`](AlignmentMatrix::align) and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentMatrix {
    matrix: Array2<Score>,
    configuration: AlignmentConfiguration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseAlignmentType {
    /// Marks the matrix origin at [0, 0].
    None,
    Insertion,
    Deletion,
    Match,
    Substitution,
}

impl AlignmentMatrix {
    pub fn new(
        configuration: AlignmentConfiguration,
        reference_length: usize,
        query_length: usize,
    ) -> Self {
        Self {
            matrix: Array2::from_elem((reference_length + 1, query_length + 1), Score::MIN),
            configuration,
        }
    }

    pub fn configuration(&self) -> &AlignmentConfiguration {
        &self.configuration
    }

    /// The number of rows and columns, i.e. both sequence lengths plus one.
    pub fn dimensions(&self) -> (usize, usize) {
        self.matrix.dim()
    }

    pub fn reference_index_iter(&self, query_index: usize) -> AlignmentMatrixReferenceIterator {
        AlignmentMatrixReferenceIterator::new(query_index, self.matrix.dim().0)
    }

    pub fn query_index_iter(&self, reference_index: usize) -> AlignmentMatrixQueryIterator {
        AlignmentMatrixQueryIterator::new(reference_index, self.matrix.dim().1)
    }

    pub fn inner_index_iter(&self) -> AlignmentMatrixInnerIterator {
        AlignmentMatrixInnerIterator::new(AlignmentMatrixIndex::new(
            self.matrix.dim().0,
            self.matrix.dim().1,
        ))
    }

    pub fn align(&mut self, reference: &[char], query: &[char]) -> Score {
        self.initialise();
        self.align_inner(reference, query);
        self.matrix[[self.matrix.dim().0 - 1, self.matrix.dim().1 - 1]]
    }

    fn initialise(&mut self) {
        // Initialise matrix origin.
        self.matrix[AlignmentMatrixIndex::ORIGIN] = Score::ZERO;

        // Initialise matrix edges.
        // Accumulating the gap score along each edge yields the multiples `i * gap` and `j * gap`.
        for index in self.reference_index_iter(0).skip(1) {
            self.matrix[index] = self.compute_deletion_score(index);
        }
        for index in self.query_index_iter(0).skip(1) {
            self.matrix[index] = self.compute_insertion_score(index);
        }
    }

    fn align_inner(&mut self, reference: &[char], query: &[char]) {
        for index in self.inner_index_iter() {
            self.set_max_score(index, reference, query);
        }
    }

    fn set_max_score(&mut self, index: AlignmentMatrixIndex, reference: &[char], query: &[char]) {
        // Handle matches and substitutions.
        let mut score = self.compute_match_or_substitution_score(index, reference, query);

        // Handle insertions.
        score = score.max(self.compute_insertion_score(index));

        // Handle deletions.
        score = score.max(self.compute_deletion_score(index));

        self.matrix[index] = score;
    }

    fn compute_insertion_score(&self, index: AlignmentMatrixIndex) -> Score {
        let alignment_type = BaseAlignmentType::Insertion;
        let predecessor_score = self.matrix[index.predecessor(alignment_type)];

        predecessor_score + self.configuration.score(alignment_type)
    }

    fn compute_deletion_score(&self, index: AlignmentMatrixIndex) -> Score {
        let alignment_type = BaseAlignmentType::Deletion;
        let predecessor_score = self.matrix[index.predecessor(alignment_type)];

        predecessor_score + self.configuration.score(alignment_type)
    }

    fn compute_match_or_substitution_score(
        &self,
        index: AlignmentMatrixIndex,
        reference: &[char],
        query: &[char],
    ) -> Score {
        let alignment_type = if reference[index.reference_index - 1] == query[index.query_index - 1]
        {
            BaseAlignmentType::Match
        } else {
            BaseAlignmentType::Substitution
        };
        let predecessor_score = self.matrix[index.match_or_substitution_predecessor()];

        predecessor_score + self.configuration.score(alignment_type)
    }

    #[cfg(test)]
    fn manual_debug_fill(&mut self, scores: impl IntoIterator<Item = Score>) {
        let mut scores = scores.into_iter();
        for index in self.inner_index_iter() {
            self.matrix[index] = scores.next().unwrap();
        }
        assert!(scores.next().is_none());
    }
}

impl std::ops::Index<AlignmentMatrixIndex> for AlignmentMatrix {
    type Output = Score;

    fn index(&self, index: AlignmentMatrixIndex) -> &Self::Output {
        &self.matrix[index]
    }
}

impl core::fmt::Display for AlignmentMatrix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut score_column_widths = vec![0; self.matrix.dim().1];
        for reference_index in 0..self.matrix.dim().0 {
            for (query_index, score_column_width) in score_column_widths.iter_mut().enumerate() {
                let score = self.matrix[[reference_index, query_index]].as_i64();
                *score_column_width = score.to_string().len().max(*score_column_width);
            }
        }

        for reference_index in 0..self.matrix.dim().0 {
            write!(f, "[ ")?;
            #[allow(clippy::needless_range_loop)]
            for query_index in 0..self.matrix.dim().1 {
                write!(
                    f,
                    "{: >width$} ",
                    self.matrix[[reference_index, query_index]].as_i64(),
                    width = score_column_widths[query_index],
                )?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        alignment_configuration::AlignmentConfiguration,
        alignment_matrix::index::AlignmentMatrixIndex, score::Score,
    };

    use super::AlignmentMatrix;

    fn chars(sequence: &str) -> Vec<char> {
        sequence.chars().collect()
    }

    #[test]
    fn test_simple_alignments() {
        let reference = chars("ACG");
        let query = chars("ACCG");

        let mut matrix = AlignmentMatrix::new(
            AlignmentConfiguration::default(),
            reference.len(),
            query.len(),
        );
        assert_eq!(matrix.align(&reference, &query), 1.into());

        let mut manual_matrix = matrix.clone();
        manual_matrix.manual_debug_fill(
            [1, -1, -3, -1, 2, 0, -3, 0, 1, -5, -2, 1]
                .into_iter()
                .map(Score::from),
        );
        assert_eq!(
            matrix, manual_matrix,
            "matrix:\n{matrix}\nmanual_matrix:\n{manual_matrix}"
        );

        let reference = chars("ACCCGT");
        let query = chars("ACCGT");

        let mut matrix = AlignmentMatrix::new(
            AlignmentConfiguration::default(),
            reference.len(),
            query.len(),
        );
        assert_eq!(matrix.align(&reference, &query), 3.into());
    }

    #[test]
    fn test_edge_initialisation() {
        let reference = chars("GGAAG");
        let query = chars("GAAA");

        let mut matrix = AlignmentMatrix::new(
            AlignmentConfiguration::default(),
            reference.len(),
            query.len(),
        );
        matrix.align(&reference, &query);

        for index in matrix.reference_index_iter(0) {
            assert_eq!(
                matrix[index],
                (index.reference_index as i64 * -2).into(),
                "wrong score in column zero at {index:?}"
            );
        }
        for index in matrix.query_index_iter(0) {
            assert_eq!(
                matrix[index],
                (index.query_index as i64 * -2).into(),
                "wrong score in row zero at {index:?}"
            );
        }
    }

    #[test]
    fn test_empty_sequences() {
        let query = chars("ACGT");

        let mut matrix = AlignmentMatrix::new(AlignmentConfiguration::default(), 0, query.len());
        assert_eq!(matrix.align(&[], &query), (-8).into());

        let mut matrix = AlignmentMatrix::new(AlignmentConfiguration::default(), 0, 0);
        assert_eq!(matrix.align(&[], &[]), Score::ZERO);
        assert_eq!(matrix.dimensions(), (1, 1));
        assert_eq!(matrix[AlignmentMatrixIndex::ORIGIN], Score::ZERO);
    }
}
