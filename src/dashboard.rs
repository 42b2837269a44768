use serde::{Deserialize, Serialize};

/// Allocated vs actual mood values per emoji, shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodChart {
    pub labels: Vec<String>,
    pub allocated: Vec<u32>,
    pub actual: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow<'a> {
    pub label: &'a str,
    pub allocated: u32,
    pub actual: u32,
}

impl MoodChart {
    pub fn rows(&self) -> impl Iterator<Item = ChartRow<'_>> {
        self.labels
            .iter()
            .zip(self.allocated.iter().zip(self.actual.iter()))
            .map(|(label, (allocated, actual))| ChartRow {
                label: label.as_str(),
                allocated: *allocated,
                actual: *actual,
            })
    }

    pub fn max_value(&self) -> u32 {
        self.allocated
            .iter()
            .chain(self.actual.iter())
            .copied()
            .max()
            .unwrap_or(0)
    }
}

pub fn mood_chart() -> MoodChart {
    MoodChart {
        labels: ["😭", "🥰", "😐", "😡", "😮"]
            .iter()
            .map(|label| label.to_string())
            .collect(),
        allocated: vec![80, 90, 70, 85, 60],
        actual: vec![70, 95, 60, 75, 50],
    }
}
