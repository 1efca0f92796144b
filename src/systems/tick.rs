use crate::spatial::{Grid, Pos};

/// What a single tick did
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub moved: u32,
    pub injected: Option<Pos>,
}

impl Grid {
    /// One simulation step: settle sweep, then (if a source is set) one
    /// injected grain, then advance the tick counter.
    ///
    /// Sand is conserved by the sweep; the only grain ever created here is
    /// the one reported in `injected`.
    pub fn tick(&mut self) -> TickOutcome {
        let moved = self.settle();
        let injected = self.inject();
        self.advance_tick_count();
        TickOutcome { moved, injected }
    }
}
