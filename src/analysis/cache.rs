//! Single-slot analysis cache for the canonical position.
//!
//! The cache is either empty or holds exactly one snapshot. Every mutation
//! of the canonical position must be followed by [`AnalysisCache::invalidate`];
//! the next read then recomputes. There is no stale state.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::{Color, Square};
use crate::oracle::PositionOracle;

use super::{analyze, AnalysisParams, AnalysisSnapshot, PawnStructure};

#[derive(Debug, Default)]
enum Slot {
    #[default]
    Empty,
    Valid {
        key: u64,
        snapshot: Arc<AnalysisSnapshot>,
    },
}

/// Owns the canonical snapshot and the parameters it was computed with.
#[derive(Debug, Default)]
pub struct AnalysisCache {
    slot: Slot,
    params: AnalysisParams,
    /// Number of full recomputations performed
    computations: u64,
}

impl AnalysisCache {
    #[must_use]
    pub fn new(params: AnalysisParams) -> Self {
        AnalysisCache {
            slot: Slot::Empty,
            params,
            computations: 0,
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self.slot, Slot::Valid { .. })
    }

    /// Drop the held snapshot. Unconditional: calling it on an empty cache
    /// is fine.
    pub fn invalidate(&mut self) {
        if let Slot::Valid { key, .. } = self.slot {
            log::debug!("analysis cache invalidated (was {key:016x})");
        }
        self.slot = Slot::Empty;
    }

    /// Snapshot of `position`, computing it if the cache is empty.
    ///
    /// `position` must be the canonical position the cache tracks. In debug
    /// builds a held snapshot whose key differs from the position's key
    /// panics, which means a mutation was not followed by `invalidate`.
    pub fn snapshot<P: PositionOracle>(&mut self, position: &P) -> Arc<AnalysisSnapshot> {
        if let Slot::Valid { key, snapshot } = &self.slot {
            debug_assert_eq!(
                *key,
                position.position_key(),
                "stale analysis snapshot: position changed without invalidate()"
            );
            return Arc::clone(snapshot);
        }

        let snapshot = Arc::new(analyze(position, &self.params));
        self.computations += 1;
        log::debug!(
            "analysis cache recomputed for {:016x} (computation #{})",
            snapshot.key(),
            self.computations
        );
        self.slot = Slot::Valid {
            key: snapshot.key(),
            snapshot: Arc::clone(&snapshot),
        };
        snapshot
    }

    pub fn params(&self) -> &AnalysisParams {
        &self.params
    }

    /// Replace the parameters. The held snapshot no longer matches them, so
    /// the cache is emptied.
    pub fn set_params(&mut self, params: AnalysisParams) {
        self.params = params;
        self.invalidate();
    }

    pub fn computations(&self) -> u64 {
        self.computations
    }

    pub fn get_hanging<P: PositionOracle>(&mut self, position: &P, color: Color) -> Vec<Square> {
        self.snapshot(position).hanging(color).to_vec()
    }

    pub fn get_attacked_count<P: PositionOracle>(&mut self, position: &P, color: Color) -> usize {
        self.snapshot(position).attacked_count(color)
    }

    pub fn get_pinned<P: PositionOracle>(&mut self, position: &P, color: Color) -> Vec<Square> {
        self.snapshot(position).pinned(color).to_vec()
    }

    pub fn get_skewered<P: PositionOracle>(&mut self, position: &P, color: Color) -> Vec<Square> {
        self.snapshot(position).skewered(color).to_vec()
    }

    pub fn get_pawn_structure<P: PositionOracle>(
        &mut self,
        position: &P,
        color: Color,
    ) -> PawnStructure {
        self.snapshot(position).pawn_structure(color).clone()
    }

    pub fn get_developed_count<P: PositionOracle>(&mut self, position: &P, color: Color) -> usize {
        self.snapshot(position).developed_count(color)
    }
}

/// An [`AnalysisCache`] behind one mutex, for hosts that read the canonical
/// snapshot from more than one thread.
///
/// The lock covers the whole empty-to-valid transition, so no caller can
/// observe a snapshot from before the latest `invalidate`.
#[derive(Debug, Default)]
pub struct SharedAnalysisCache {
    inner: Mutex<AnalysisCache>,
}

impl SharedAnalysisCache {
    #[must_use]
    pub fn new(params: AnalysisParams) -> Self {
        SharedAnalysisCache {
            inner: Mutex::new(AnalysisCache::new(params)),
        }
    }

    pub fn snapshot<P: PositionOracle>(&self, position: &P) -> Arc<AnalysisSnapshot> {
        self.inner.lock().snapshot(position)
    }

    pub fn invalidate(&self) {
        self.inner.lock().invalidate();
    }

    pub fn is_valid(&self) -> bool {
        self.inner.lock().is_valid()
    }

    pub fn set_params(&self, params: AnalysisParams) {
        self.inner.lock().set_params(params);
    }

    pub fn computations(&self) -> u64 {
        self.inner.lock().computations()
    }
}
