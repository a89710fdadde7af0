//! Fixed-format text rendering of the student report
//!
//! Layout: title block, one block per student in input order, then the class
//! statistics section. Lines end with `\n`.

use super::statistics::ClassStatistics;
use crate::app::models::StudentRecord;
use crate::constants::report;
use std::fmt;

/// A renderable report over a finished record list
#[derive(Debug, Clone)]
pub struct Report<'a> {
    records: &'a [StudentRecord],
    statistics: ClassStatistics,
}

impl<'a> Report<'a> {
    pub fn new(records: &'a [StudentRecord]) -> Self {
        Self {
            records,
            statistics: ClassStatistics::from_records(records),
        }
    }

    pub fn statistics(&self) -> &ClassStatistics {
        &self.statistics
    }

    fn write_student(f: &mut fmt::Formatter<'_>, record: &StudentRecord) -> fmt::Result {
        let grades = record
            .grades()
            .iter()
            .map(|grade| grade.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        writeln!(f, "Student ID: {}", record.id())?;
        writeln!(f, "Name: {}", record.name())?;
        writeln!(f, "Grades: {}", grades)?;
        writeln!(f, "Average: {}", format_fixed_2(record.average()))?;
        writeln!(f, "Letter Grade: {}", record.letter_grade())?;
        writeln!(f, "{}", report::STUDENT_DIVIDER)
    }

    fn write_statistics(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", report::STATISTICS_TITLE)?;
        writeln!(f, "{}", report::STATISTICS_DIVIDER)?;
        writeln!(f, "Total Students: {}", self.statistics.total_students)?;
        writeln!(
            f,
            "Class Average: {}",
            format_fixed_2(self.statistics.class_average)
        )?;
        writeln!(f, "{}", report::DISTRIBUTION_TITLE)?;
        for (letter, count) in self.statistics.distribution.iter() {
            writeln!(f, "{}: {}", letter, count)?;
        }
        Ok(())
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", report::TITLE)?;
        writeln!(f, "{}", report::TITLE_DIVIDER)?;
        writeln!(f)?;

        for record in self.records {
            Self::write_student(f, record)?;
        }

        self.write_statistics(f)
    }
}

/// Render the complete report text
pub fn render_report(records: &[StudentRecord]) -> String {
    Report::new(records).to_string()
}

/// Format with two decimals, rounding half up on the shortest decimal form
///
/// `1.025` is stored as `1.02499999...` but its shortest form is `1.025`, so
/// it renders as `"1.03"`.
pub fn format_fixed_2(value: f64) -> String {
    if !value.is_finite() {
        return format!("{:.2}", value);
    }

    // f64 Display is the shortest round-trip form and never uses an exponent
    let shortest = value.abs().to_string();
    let (whole, fraction) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));
    let mut digits = fraction.bytes().map(|b| u128::from(b - b'0'));

    let Ok(whole) = whole.parse::<u64>() else {
        return format!("{:.2}", value);
    };
    let tenths = digits.next().unwrap_or(0);
    let hundredths = digits.next().unwrap_or(0);
    let round_up = digits.next().is_some_and(|digit| digit >= 5);

    let cents = u128::from(whole) * 100 + tenths * 10 + hundredths + u128::from(round_up);
    let sign = if value.is_sign_negative() && cents > 0 {
        "-"
    } else {
        ""
    };

    format!("{}{}.{:02}", sign, cents / 100, cents % 100)
}
