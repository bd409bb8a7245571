use serde::{Deserialize, Serialize};

/// Static axis description supplied by the host.
///
/// `number_of_x_divisions` fixes the horizontal scale: one division is one
/// data unit, so values are mapped linearly and never auto-ranged to the
/// dataset. A division count of zero is rejected at layout time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisMetadata {
    #[serde(default)]
    pub x_axis_title: Option<String>,
    #[serde(default)]
    pub y_axis_title: Option<String>,
    pub x_category_labels: Vec<String>,
    pub number_of_x_divisions: u32,
    /// Shifts every x-axis category label one division to the right, leaving
    /// the origin column unlabeled.
    #[serde(default)]
    pub skip_first_x_label: bool,
}

impl AxisMetadata {
    #[must_use]
    pub fn new(x_category_labels: Vec<String>, number_of_x_divisions: u32) -> Self {
        Self {
            x_axis_title: None,
            y_axis_title: None,
            x_category_labels,
            number_of_x_divisions,
            skip_first_x_label: false,
        }
    }

    #[must_use]
    pub fn with_x_axis_title(mut self, title: impl Into<String>) -> Self {
        self.x_axis_title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_y_axis_title(mut self, title: impl Into<String>) -> Self {
        self.y_axis_title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_skip_first_x_label(mut self, skip: bool) -> Self {
        self.skip_first_x_label = skip;
        self
    }
}

impl Default for AxisMetadata {
    fn default() -> Self {
        Self::new(Vec::new(), 10)
    }
}
