/// How far before the end of the list the sentinel starts counting as
/// visible.
pub const LOOKAHEAD_MARGIN: f32 = 200.0;

/// Contract object for the visibility-driven "near end of list" signal.
/// The caller asserts `disabled` whenever loading is in progress or
/// there is nothing more to load; while disabled the trigger never
/// fires. It may fire repeatedly while the sentinel stays visible; the
/// session's `load_more` guard absorbs the duplicates.
#[derive(Debug, Default)]
pub struct ScrollTrigger {
    disabled: bool,
}

impl ScrollTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// Report the distance from the viewport edge to the sentinel;
    /// returns whether the load-more signal fires.
    pub fn observe(&self, distance_to_sentinel: f32) -> bool {
        !self.disabled && distance_to_sentinel <= LOOKAHEAD_MARGIN
    }
}
