//! Data models for student record processing
//!
//! A [`StudentRecord`] is built once from validated input and carries its
//! derived average and letter grade for the rest of the run.

use crate::constants::{GRADE_COUNT, MAX_GRADE, MIN_GRADE, thresholds};
use crate::{RecordsError, Result};
use std::fmt;

// =============================================================================
// Letter Grade
// =============================================================================

/// Letter classification of a numeric average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    /// All letters in report order
    pub const ALL: [LetterGrade; 5] = [
        LetterGrade::A,
        LetterGrade::B,
        LetterGrade::C,
        LetterGrade::D,
        LetterGrade::F,
    ];

    /// Classify an average using closed lower bounds, with no rounding first
    pub fn from_average(average: f64) -> Self {
        if average >= thresholds::A {
            LetterGrade::A
        } else if average >= thresholds::B {
            LetterGrade::B
        } else if average >= thresholds::C {
            LetterGrade::C
        } else if average >= thresholds::D {
            LetterGrade::D
        } else {
            LetterGrade::F
        }
    }

    pub fn as_char(self) -> char {
        match self {
            LetterGrade::A => 'A',
            LetterGrade::B => 'B',
            LetterGrade::C => 'C',
            LetterGrade::D => 'D',
            LetterGrade::F => 'F',
        }
    }

    /// Position of this letter in [`LetterGrade::ALL`]
    pub fn index(self) -> usize {
        match self {
            LetterGrade::A => 0,
            LetterGrade::B => 1,
            LetterGrade::C => 2,
            LetterGrade::D => 3,
            LetterGrade::F => 4,
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// =============================================================================
// Student Record
// =============================================================================

/// One validated student with precomputed statistics
///
/// Fields are private: `average` and `letter_grade` are derived from `grades`
/// at construction and cannot drift from them afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    id: String,
    name: String,
    grades: [i32; GRADE_COUNT],
    average: f64,
    letter_grade: LetterGrade,
}

impl StudentRecord {
    /// Create a record, rejecting any grade outside 0..=100
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        grades: [i32; GRADE_COUNT],
    ) -> Result<Self> {
        if let Some(grade) = grades
            .iter()
            .find(|grade| !(MIN_GRADE..=MAX_GRADE).contains(*grade))
        {
            return Err(RecordsError::invalid_record(format!(
                "Grade {} is outside valid range ({}-{})",
                grade, MIN_GRADE, MAX_GRADE
            )));
        }

        Ok(Self::from_valid_grades(id, name, grades))
    }

    /// Build a record from grades already checked against 0..=100
    pub(crate) fn from_valid_grades(
        id: impl Into<String>,
        name: impl Into<String>,
        grades: [i32; GRADE_COUNT],
    ) -> Self {
        let average = Self::average_of(&grades);

        Self {
            id: id.into(),
            name: name.into(),
            grades,
            average,
            letter_grade: LetterGrade::from_average(average),
        }
    }

    /// Arithmetic mean in double precision, 0.0 for an empty slice
    pub fn average_of(grades: &[i32]) -> f64 {
        if grades.is_empty() {
            return 0.0;
        }
        let sum: f64 = grades.iter().map(|&grade| f64::from(grade)).sum();
        sum / grades.len() as f64
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grades(&self) -> &[i32; GRADE_COUNT] {
        &self.grades
    }

    pub fn average(&self) -> f64 {
        self.average
    }

    pub fn letter_grade(&self) -> LetterGrade {
        self.letter_grade
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_fields_computed_at_construction() {
        let record = StudentRecord::new("S001", "Alice Smith", [85, 90, 78, 92]).unwrap();

        assert_eq!(record.id(), "S001");
        assert_eq!(record.name(), "Alice Smith");
        assert_eq!(record.grades(), &[85, 90, 78, 92]);
        assert_eq!(record.average(), 86.25);
        assert_eq!(record.letter_grade(), LetterGrade::B);
    }

    #[test]
    fn test_letter_thresholds_at_boundaries() {
        assert_eq!(LetterGrade::from_average(100.0), LetterGrade::A);
        assert_eq!(LetterGrade::from_average(90.0), LetterGrade::A);
        assert_eq!(LetterGrade::from_average(89.999), LetterGrade::B);
        assert_eq!(LetterGrade::from_average(80.0), LetterGrade::B);
        assert_eq!(LetterGrade::from_average(79.75), LetterGrade::C);
        assert_eq!(LetterGrade::from_average(70.0), LetterGrade::C);
        assert_eq!(LetterGrade::from_average(69.999), LetterGrade::D);
        assert_eq!(LetterGrade::from_average(60.0), LetterGrade::D);
        assert_eq!(LetterGrade::from_average(59.999), LetterGrade::F);
        assert_eq!(LetterGrade::from_average(0.0), LetterGrade::F);
    }

    #[test]
    fn test_boundary_averages_from_grades() {
        // 359 / 4 = 89.75 stays below the A threshold
        let just_below = StudentRecord::new("1", "x", [90, 90, 90, 89]).unwrap();
        assert_eq!(just_below.average(), 89.75);
        assert_eq!(just_below.letter_grade(), LetterGrade::B);

        let exact = StudentRecord::new("2", "y", [100, 80, 90, 90]).unwrap();
        assert_eq!(exact.average(), 90.0);
        assert_eq!(exact.letter_grade(), LetterGrade::A);

        let d = StudentRecord::new("3", "z", [60, 60, 60, 60]).unwrap();
        assert_eq!(d.letter_grade(), LetterGrade::D);

        let f = StudentRecord::new("4", "w", [60, 60, 60, 59]).unwrap();
        assert_eq!(f.letter_grade(), LetterGrade::F);
    }

    #[test]
    fn test_rejects_out_of_range_grade() {
        assert!(StudentRecord::new("S", "N", [101, 0, 0, 0]).is_err());
        assert!(StudentRecord::new("S", "N", [0, 0, 0, -1]).is_err());
        assert!(StudentRecord::new("S", "N", [0, 100, 0, 100]).is_ok());
    }

    #[test]
    fn test_average_of_empty_is_zero() {
        assert_eq!(StudentRecord::average_of(&[]), 0.0);
    }

    #[test]
    fn test_letter_order_and_chars() {
        let chars: String = LetterGrade::ALL.iter().map(|l| l.as_char()).collect();
        assert_eq!(chars, "ABCDF");
        for (i, letter) in LetterGrade::ALL.iter().enumerate() {
            assert_eq!(letter.index(), i);
        }
        assert_eq!(LetterGrade::C.to_string(), "C");
    }
}
