//! Charging stop placement along a route.
//!
//! The route is split into checkpoints (a single midpoint for short routes,
//! one every `segment_km` otherwise). For each checkpoint a fixed number of
//! advice variants search the stop pool with a widening tolerance window
//! around the checkpoint's distance from the start.
//!
//! Distances from the start are great-circle, so a stop "at 300 km" is
//! 300 km from the start as the crow flies, not along the road.

use tracing::{debug, trace, warn};

use crate::domain::{Advice, RecommendRequest, Stop};
use crate::geo::distance_km;

use super::config::PlacementConfig;

/// A stop with its distance from the route start.
#[derive(Debug, Clone, Copy)]
struct Candidate<'a> {
    stop: &'a Stop,
    /// Position in the request's stop list.
    index: usize,
    dist_from_start: f64,
}

/// Order candidates closest to `target` first.
///
/// Ties break on stop name, then on input position, so the result never
/// depends on anything but the request.
fn rank_candidates<'a>(candidates: &[Candidate<'a>], target: f64) -> Vec<Candidate<'a>> {
    let mut ranked = candidates.to_vec();
    ranked.sort_by(|a, b| {
        let da = (a.dist_from_start - target).abs();
        let db = (b.dist_from_start - target).abs();
        da.total_cmp(&db)
            .then_with(|| a.stop.name.cmp(&b.stop.name))
            .then_with(|| a.index.cmp(&b.index))
    });
    ranked
}

/// Suggests stops spaced along a route.
#[derive(Debug, Clone)]
pub struct StopPlacementPlanner<'a> {
    config: &'a PlacementConfig,
}

impl<'a> StopPlacementPlanner<'a> {
    pub fn new(config: &'a PlacementConfig) -> Self {
        Self { config }
    }

    /// Checkpoint distances (km from start) for a route of `distance` km.
    ///
    /// Routes up to the single-checkpoint limit, including zero and
    /// negative lengths, get one checkpoint at half the distance.
    pub fn checkpoints(&self, distance: i64) -> Vec<i64> {
        if distance <= self.config.single_checkpoint_max_km {
            return vec![distance / 2];
        }

        let segment = self.config.segment_km.max(1);
        (1..=distance / segment).map(|i| segment * i).collect()
    }

    /// Build advice for every checkpoint, in route order.
    pub fn recommend(&self, req: &RecommendRequest) -> Vec<Advice> {
        let direct_km = distance_km(req.start_point, req.arrival_point);
        if (req.distance as f64) < direct_km {
            warn!(
                declared_km = req.distance,
                direct_km, "route distance is shorter than the great-circle distance"
            );
        }

        let candidates: Vec<Candidate> = req
            .stops
            .iter()
            .enumerate()
            .map(|(index, stop)| Candidate {
                stop,
                index,
                dist_from_start: distance_km(req.start_point, stop.coordinate()),
            })
            .collect();

        let checkpoints = self.checkpoints(req.distance);
        debug!(
            distance = req.distance,
            direct_km,
            candidates = candidates.len(),
            checkpoints = checkpoints.len(),
            "placing stops"
        );

        let capacity = checkpoints
            .len()
            .checked_mul(self.config.advice_count)
            .unwrap_or_default();
        let mut advices = Vec::with_capacity(capacity);
        for checkpoint in checkpoints {
            self.advise_checkpoint(&candidates, checkpoint as f64, &mut advices);
        }
        advices
    }

    /// Append the advice variants for one checkpoint.
    fn advise_checkpoint(&self, candidates: &[Candidate], target_km: f64, out: &mut Vec<Advice>) {
        let ranked = rank_candidates(candidates, target_km);
        let mut taken: Vec<usize> = Vec::new();

        for number in 1..=self.config.advice_count {
            let stops = match self.search(&ranked, target_km, &taken) {
                Some((candidate, tolerance)) => {
                    if self.config.distinct_variants {
                        taken.push(candidate.index);
                    }
                    let color = self.config.colors.color_for(tolerance);
                    vec![candidate.stop.with_color(color)]
                }
                None => {
                    debug!(target_km, number, "no stop near checkpoint");
                    Vec::new()
                }
            };

            out.push(Advice {
                number,
                target_km,
                stops,
            });
        }
    }

    /// Widening search for one stop near a checkpoint.
    ///
    /// Returns the best-ranked candidate strictly inside the window around
    /// `target_km` and the tolerance it was found at.
    fn search<'c>(
        &self,
        ranked: &'c [Candidate<'c>],
        target_km: f64,
        excluded: &[usize],
    ) -> Option<(&'c Candidate<'c>, u32)> {
        for tolerance in self.config.tolerances() {
            let tol = f64::from(tolerance);
            let hit = ranked
                .iter()
                .filter(|c| !excluded.contains(&c.index))
                .find(|c| {
                    c.dist_from_start > target_km - tol && c.dist_from_start < target_km + tol
                });

            if let Some(candidate) = hit {
                trace!(target_km, tolerance, stop = %candidate.stop.name, "matched stop");
                return Some((candidate, tolerance));
            }
            trace!(target_km, tolerance, "widening tolerance");
        }
        None
    }
}

#[cfg(test)]
#[path = "placement_tests.rs"]
mod tests;
