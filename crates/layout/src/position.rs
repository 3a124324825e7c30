//! Grid cell coordinates.

/// A (month index, day index) pair addressing one cell inside an ordered
/// sequence of month components.
///
/// Valid day indices lie in `[0, day_count)` of the addressed component, but
/// positions are not bounds-checked at construction; incrementing and
/// decrementing deliberately produce out-of-range indices which callers must
/// filter back into the valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPosition {
    /// Index of the month component within its ordered sequence.
    pub month_index: usize,
    /// Index of the day cell within the month component's grid.
    pub day_index: i32,
}

impl GridPosition {
    /// Creates a new grid position.
    pub fn new(month_index: usize, day_index: i32) -> Self {
        Self {
            month_index,
            day_index,
        }
    }

    /// Returns a copy with a different day index.
    pub fn with_day_index(self, day_index: i32) -> Self {
        Self { day_index, ..self }
    }

    /// Returns a copy with the day index decremented by 1.
    pub fn decrementing_day_index(self) -> Self {
        self.with_day_index(self.day_index - 1)
    }

    /// Returns a copy with the day index incremented by 1.
    pub fn incrementing_day_index(self) -> Self {
        self.with_day_index(self.day_index + 1)
    }
}
