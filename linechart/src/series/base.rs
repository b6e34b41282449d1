//! The state that all series share: the entries, the label, the value range
//! and the series colors.

use crate::core::color::Color;
use crate::core::error::{ChartError, ChartResult};
use crate::core::utils::wrap_index;
use crate::series::entry::Entry;

pub const DEFAULT_LABEL: &str = "DataSet";

/// The y axis that a series is plotted against.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AxisDependency {
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct Series {
    // Entries are kept sorted by x index.
    entries: Vec<Entry>,
    pub label: String,
    colors: Vec<Color>,
    pub value_text_color: Color,
    pub visible: bool,
    pub draw_values_enabled: bool,
    pub highlight_enabled: bool,
    pub axis_dependency: AxisDependency,
    y_min: f64,
    y_max: f64,
}

impl Default for Series {
    fn default() -> Self {
        Self::new(Vec::new(), DEFAULT_LABEL)
    }
}

impl Series {
    pub fn new(mut entries: Vec<Entry>, label: &str) -> Self {
        entries.sort_by_key(|e| e.x_index);
        let mut s = Self {
            entries,
            label: label.to_string(),
            colors: vec![Color::series_default()],
            value_text_color: Color::black(),
            visible: true,
            draw_values_enabled: true,
            highlight_enabled: true,
            axis_dependency: AxisDependency::Left,
            y_min: 0.,
            y_max: 0.,
        };
        s.calc_min_max();
        s
    }

    /// Recompute the cached y range. An empty series has the range [0, 0].
    pub fn calc_min_max(&mut self) {
        if self.entries.is_empty() {
            self.y_min = 0.;
            self.y_max = 0.;
            return;
        }
        self.y_min = f64::INFINITY;
        self.y_max = f64::NEG_INFINITY;
        for e in &self.entries {
            self.y_min = self.y_min.min(e.value);
            self.y_max = self.y_max.max(e.value);
        }
    }

    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn search(&self, x_index: usize) -> Result<usize, usize> {
        self.entries.binary_search_by_key(&x_index, |e| e.x_index)
    }

    pub fn entry_for_x_index(&self, x_index: usize) -> Option<&Entry> {
        self.search(x_index).ok().map(|i| &self.entries[i])
    }

    pub fn y_value_for_x_index(&self, x_index: usize) -> Option<f64> {
        self.entry_for_x_index(x_index).map(|e| e.value)
    }

    /// \returns the position of \p entry in the entry list.
    pub fn entry_index(&self, entry: &Entry) -> Option<usize> {
        self.entries.iter().position(|e| e == entry)
    }

    /// Insert \p entry, keeping the entries ordered by x index. Entries
    /// with an equal x index are kept in insertion order.
    pub fn add_entry(&mut self, entry: Entry) {
        let pos = self
            .entries
            .partition_point(|e| e.x_index <= entry.x_index);
        self.entries.insert(pos, entry);
        if self.entries.len() == 1 {
            self.y_min = entry.value;
            self.y_max = entry.value;
        } else {
            self.y_min = self.y_min.min(entry.value);
            self.y_max = self.y_max.max(entry.value);
        }
    }

    /// Remove the entry at \p x_index. \returns true if an entry was removed.
    pub fn remove_entry_at_x_index(&mut self, x_index: usize) -> bool {
        match self.search(x_index) {
            Ok(i) => {
                self.entries.remove(i);
                self.calc_min_max();
                true
            }
            Err(_) => false,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.calc_min_max();
    }

    pub fn y_value_sum(&self) -> f64 {
        self.entries.iter().map(|e| e.value).sum()
    }

    /// \returns the mean y value, or zero for an empty series.
    pub fn average(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.;
        }
        self.y_value_sum() / self.entries.len() as f64
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// \returns the series color for \p index, wrapping around the list.
    pub fn color(&self, index: isize) -> ChartResult<&Color> {
        if self.colors.is_empty() {
            return Err(ChartError::InvalidState(format!(
                "series \"{}\" has no colors",
                self.label
            )));
        }
        Ok(&self.colors[wrap_index(index, self.colors.len())])
    }

    /// Make \p color the only color of the series.
    pub fn set_color(&mut self, color: Color) {
        self.colors.clear();
        self.colors.push(color);
    }

    pub fn set_colors(&mut self, colors: Vec<Color>) {
        self.colors = colors;
    }

    pub fn add_color(&mut self, color: Color) {
        self.colors.push(color);
    }

    pub fn reset_colors(&mut self) {
        self.colors.clear();
    }
}
