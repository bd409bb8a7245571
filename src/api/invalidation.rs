use serde::{Deserialize, Serialize};

/// Ordered repaint classes for pending widget invalidation.
///
/// `Paint` means the committed geometry is still valid and only pixels are
/// stale (style tweak, animation tick). `Layout` additionally recomputes
/// geometry and hit regions (dataset, axis, or size change).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum RepaintLevel {
    #[default]
    None,
    Paint,
    Layout,
}

impl RepaintLevel {
    #[must_use]
    pub const fn max(self, other: Self) -> Self {
        if self as u8 >= other as u8 {
            self
        } else {
            other
        }
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

#[cfg(test)]
mod tests {
    use super::RepaintLevel;

    #[test]
    fn merge_keeps_the_highest_level() {
        let mut pending = RepaintLevel::None;
        pending = pending.max(RepaintLevel::Paint);
        assert_eq!(pending, RepaintLevel::Paint);

        pending = pending.max(RepaintLevel::Layout);
        assert_eq!(pending, RepaintLevel::Layout);

        pending = pending.max(RepaintLevel::Paint);
        assert_eq!(pending, RepaintLevel::Layout);
    }
}
