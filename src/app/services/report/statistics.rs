//! Class-wide statistics computed from finished records

use crate::app::models::{LetterGrade, StudentRecord};

/// Number of students holding each letter grade
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GradeDistribution {
    counts: [usize; LetterGrade::ALL.len()],
}

impl GradeDistribution {
    pub fn add(&mut self, letter: LetterGrade) {
        self.counts[letter.index()] += 1;
    }

    pub fn count(&self, letter: LetterGrade) -> usize {
        self.counts[letter.index()]
    }

    /// Sum over all letters; equals the number of students counted
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// (letter, count) pairs in report order
    pub fn iter(&self) -> impl Iterator<Item = (LetterGrade, usize)> + '_ {
        LetterGrade::ALL
            .iter()
            .map(move |&letter| (letter, self.count(letter)))
    }
}

/// Aggregate statistics for the class section of the report
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassStatistics {
    pub total_students: usize,

    /// Unweighted mean of per-student averages, 0.0 with no students
    pub class_average: f64,

    pub distribution: GradeDistribution,
}

impl ClassStatistics {
    pub fn from_records(records: &[StudentRecord]) -> Self {
        let mut sum = 0.0;
        let mut distribution = GradeDistribution::default();

        for record in records {
            sum += record.average();
            distribution.add(record.letter_grade());
        }

        let total_students = records.len();
        let class_average = if total_students > 0 {
            sum / total_students as f64
        } else {
            0.0
        };

        Self {
            total_students,
            class_average,
            distribution,
        }
    }
}
