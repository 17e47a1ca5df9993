use carousel::NavDirection;

/// Accumulates incremental pointer deltas and reports drag-threshold crossings.
///
/// Deltas are measured against the previous pointer position, not the original press,
/// and summed into an accumulator; one long gesture can therefore cross the threshold
/// repeatedly and navigate several steps. Crossing the positive threshold (drag right)
/// reveals the previous item and reports [`NavDirection::Backward`]; the negative
/// threshold reports [`NavDirection::Forward`]. Either crossing resets the accumulator
/// so the next step requires the full distance again.
///
/// Release clears the gesture; a finished gesture never navigates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragTracker {
    dragging: bool,
    last_x: f32,
    accumulated: f32,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the tracker at the press position and resets the accumulator.
    pub fn pointer_down(&mut self, x: f32) {
        self.dragging = true;
        self.last_x = x;
        self.accumulated = 0.0;
    }

    /// Feeds a pointer position while dragging.
    ///
    /// Returns the navigation direction when the accumulated distance crosses
    /// `threshold`; `None` while below it or when no gesture is active.
    pub fn pointer_move(&mut self, x: f32, threshold: f32) -> Option<NavDirection> {
        if !self.dragging {
            return None;
        }
        let dx = x - self.last_x;
        self.last_x = x;
        self.accumulated += dx;

        if self.accumulated > threshold {
            self.accumulated = 0.0;
            Some(NavDirection::Backward)
        } else if self.accumulated < -threshold {
            self.accumulated = 0.0;
            Some(NavDirection::Forward)
        } else {
            None
        }
    }

    /// Ends the gesture (pointer up/cancel/leave) and resets the accumulator.
    pub fn pointer_up(&mut self) {
        self.dragging = false;
        self.accumulated = 0.0;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The signed distance accumulated since the last reset (pixels).
    pub fn accumulated(&self) -> f32 {
        self.accumulated
    }
}
