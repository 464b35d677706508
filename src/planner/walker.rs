//! Charge-constrained greedy walk over a single batch.

use crate::distance::{euclidean, BatchGrid};
use crate::models::{Battery, Point, PointIndex, VisitLog, HOME_INDEX};

/// Where the robot currently stands.
///
/// An explicit tag rather than a coordinate comparison against home, so the
/// walk never depends on floating-point equality with the station's
/// coordinates.
#[derive(Debug, Clone, Copy)]
enum Position {
    AtHome,
    AtPoint(Point),
}

/// Walks one batch greedily, always heading for the nearest unvisited
/// point, and returning to the charging station whenever the next leg would
/// drain the battery past its reserve.
///
/// The visit log and battery are shared with the orchestrator: earlier
/// batches decide what this walk still considers unvisited, and every
/// arrival at the station (forced or terminal) leaves the battery full for
/// whatever runs next.
pub(crate) struct BatchWalker<'a> {
    home: Point,
    batch: &'a [Point],
    grid: &'a BatchGrid,
    index: &'a PointIndex,
    visits: &'a mut VisitLog,
    battery: &'a mut Battery,
}

impl<'a> BatchWalker<'a> {
    pub(crate) fn new(
        home: Point,
        batch: &'a [Point],
        grid: &'a BatchGrid,
        index: &'a PointIndex,
        visits: &'a mut VisitLog,
        battery: &'a mut Battery,
    ) -> Self {
        Self {
            home,
            batch,
            grid,
            index,
            visits,
            battery,
        }
    }

    /// Produces the batch's stop sequence, opening and closing at home.
    ///
    /// Each step evaluates the queued candidate from the current position:
    /// departures from home always proceed, legs between targets must keep
    /// the charge within `[floor, capacity]`, and an unaffordable leg emits
    /// a recharge return instead — the candidate stays queued and is
    /// re-evaluated from home on the next step.
    pub(crate) fn walk(mut self) -> Vec<usize> {
        let mut order = vec![HOME_INDEX];
        let mut position = Position::AtHome;
        let mut pending = self.next_target(&self.home, self.grid.home_ranking());

        while let Some(target) = pending {
            match position {
                Position::AtHome => {
                    self.battery.drain(euclidean(&self.home, &target));
                    order.push(self.emit(&target));
                    position = Position::AtPoint(target);
                    pending = self.next_target(&target, self.grid.neighbors_of(&target));
                }
                Position::AtPoint(current) => {
                    let leg = euclidean(&current, &target);
                    if self.battery.can_travel(leg) {
                        self.battery.drain(leg);
                        order.push(self.emit(&target));
                        position = Position::AtPoint(target);
                        pending = self.next_target(&target, self.grid.neighbors_of(&target));
                    } else {
                        order.push(HOME_INDEX);
                        self.battery.recharge();
                        self.visits.record_recharge(&self.home);
                        position = Position::AtHome;
                        // `target` stays queued for the next step.
                    }
                }
            }
        }

        order.push(HOME_INDEX);
        self.battery.recharge();
        self.visits.record_recharge(&self.home);
        order
    }

    /// Marks the target visited and returns its original index.
    fn emit(&mut self, target: &Point) -> usize {
        self.visits.mark_visited(target);
        self.index
            .index_of(target)
            .expect("batch points come from the indexed point set")
    }

    /// Nearest unvisited entry of `ranked`, in rank order.
    ///
    /// When the ranked list runs out while the batch still has open
    /// targets, falls back to scanning the whole batch for the point
    /// nearest to `reference` (first wins on ties). Returns `None` only
    /// when every batch point is visited.
    fn next_target(&self, reference: &Point, ranked: &[(Point, f64)]) -> Option<Point> {
        for (candidate, _) in ranked {
            if !self.visits.is_visited(candidate) {
                return Some(*candidate);
            }
        }

        let mut best: Option<(Point, f64)> = None;
        for p in self.batch {
            if self.visits.is_visited(p) {
                continue;
            }
            let d = euclidean(reference, p);
            if best.map_or(true, |(_, bd)| d < bd) {
                best = Some((*p, d));
            }
        }
        if let Some((p, _)) = best {
            log::debug!(
                "ranked neighbor list exhausted with open targets; \
                 picked ({}, {}) by full batch scan",
                p.x(),
                p.y()
            );
        }
        best.map(|(p, _)| p)
    }
}
