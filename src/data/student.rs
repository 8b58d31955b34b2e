use crate::ml::LabeledPoint;

/// Number of features describing a student: attendance, homework and test score.
pub const STUDENT_FEATURES: usize = 3;

/// One row of the student performance dataset. All scores are percentages.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    /// 1-based row identifier.
    pub id: usize,
    pub attendance: f64,
    pub homework: f64,
    pub test_score: f64,
    /// Ground-truth final score, the regression label.
    pub final_score: f64,
}

impl StudentRecord {
    /// Feature vector in the order `[attendance, homework, test_score]`.
    pub fn features(&self) -> Vec<f64> {
        vec![self.attendance, self.homework, self.test_score]
    }

    pub fn to_labeled_point(&self) -> LabeledPoint {
        LabeledPoint::new(self.features(), self.final_score)
    }
}

/// Splits records into a feature matrix and a label vector, row for row.
pub fn features_and_labels(records: &[StudentRecord]) -> (Vec<Vec<f64>>, Vec<f64>) {
    records
        .iter()
        .map(|r| (r.features(), r.final_score))
        .unzip()
}
