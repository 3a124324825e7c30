//! Highlight-part flags for contiguous selection runs.

bitflags::bitflags! {
    /// The visual role of a selected cell within a contiguous selected run.
    ///
    /// The flags are not mutually exclusive by construction, but the shape
    /// computation only ever produces `empty`, `START`, `MID`, `END`, or
    /// `START_AND_END` (an isolated selected date).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct HighlightPart: u8 {
        /// Marks the start of a run of selected dates.
        const START = 1 << 1;
        /// Marks the interior of a run of selected dates.
        const MID = 1 << 2;
        /// Marks the end of a run of selected dates.
        const END = 1 << 3;
        /// An isolated selected date: both the start and the end of its run.
        const START_AND_END = Self::START.bits() | Self::END.bits();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_and_end_is_the_union() {
        assert_eq!(
            HighlightPart::START | HighlightPart::END,
            HighlightPart::START_AND_END
        );
        assert!(HighlightPart::START_AND_END.contains(HighlightPart::START));
        assert!(HighlightPart::START_AND_END.contains(HighlightPart::END));
        assert!(!HighlightPart::START_AND_END.contains(HighlightPart::MID));
    }

    #[test]
    fn default_is_empty() {
        assert_eq!(HighlightPart::default(), HighlightPart::empty());
        assert!(HighlightPart::default().is_empty());
    }
}
