//! FILENAME: tests/common/mod.rs
//! Shared test fixtures for integration tests.

use records::{Column, ColumnKind, RecordBatch, Schema};

/// A small remote-work survey dataset, shaped like the CSV the charts
/// load: one row per employee.
pub struct SurveyFixture;

impl SurveyFixture {
    pub fn columns() -> Vec<Column> {
        vec![
            Column::new("Age", ColumnKind::Number),
            Column::new("Work_Location", ColumnKind::Text),
            Column::new("Mental_Health_Condition", ColumnKind::Text),
            Column::new("Stress_Level", ColumnKind::Number),
            Column::new("Social_Isolation_Rating", ColumnKind::Number),
        ]
    }

    pub fn rows() -> Vec<[&'static str; 5]> {
        vec![
            ["24", "Remote", "Anxiety", "3", "4"],
            ["28", "Remote", "None", "2", "3"],
            ["31", "Hybrid", "Burnout", "3", "2"],
            ["35", "Onsite", "Depression", "2", "1"],
            ["38", "Remote", "Anxiety", "3", "5"],
            ["42", "Hybrid", "None", "1", "2"],
            ["47", "Onsite", "Burnout", "2", "1"],
            ["53", "Remote", "Depression", "3", "4"],
            ["58", "Onsite", "None", "1", "1"],
            ["63", "Remote", "Anxiety", "2", "5"],
        ]
    }

    /// Builds the full batch through the raw-string coercion path, the
    /// same way a CSV loader would feed it.
    pub fn batch() -> RecordBatch {
        let schema = Schema::new(Self::columns()).expect("fixture schema");
        let mut batch = RecordBatch::new(schema);
        for row in Self::rows() {
            batch.push_raw(&row).expect("fixture row");
        }
        batch
    }
}
