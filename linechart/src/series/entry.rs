//! A single data point of a series.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    /// The y value.
    pub value: f64,
    /// The position of the entry on the x axis.
    pub x_index: usize,
}

impl Entry {
    pub fn new(value: f64, x_index: usize) -> Self {
        Self { value, x_index }
    }
}

/// Creates one entry per value, where the x index is the position in \p values.
pub fn entries_from_values(values: &[f64]) -> Vec<Entry> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| Entry::new(*v, i))
        .collect()
}
