use gridpath_core::Point;

/// Hook into a running search, for progressive display.
///
/// Both methods are called synchronously on the search thread. Neither can
/// change which path is found; `should_stop` can only end the search early.
pub trait SearchObserver {
    /// Called once for every node whose distance becomes final, in
    /// finalization order. The start and goal are never reported.
    fn on_node_finalized(&mut self, _p: Point) {}

    /// Polled before every priority-queue pop.
    fn should_stop(&self) -> bool {
        false
    }
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl SearchObserver for Silent {}

impl<F: FnMut(Point)> SearchObserver for F {
    fn on_node_finalized(&mut self, p: Point) {
        self(p)
    }
}
