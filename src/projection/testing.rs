//! In-memory projection engine for unit tests

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::projection::engine::{EngineError, EngineResult, ProjectionEngine};
use crate::projection::epsg;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockCrs {
    pub code: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockTransform {
    pub from: u32,
    pub to: u32,
}

/// Counts backend calls and fails on request.
///
/// Geographic to UTM maps `[lat, lon]` to `[lon * 1e4 + 5e5, lat * 1e5]`,
/// UTM to geographic inverts it and UTM to UTM adds the code difference to
/// the easting, so results show which pipeline ran.
#[derive(Default)]
pub struct MockEngine {
    pub crs_created: AtomicUsize,
    pub transforms_created: AtomicUsize,
    pub applied: AtomicUsize,
    failing: Mutex<HashSet<u32>>,
    failing_transforms: Mutex<HashSet<(u32, u32)>>,
    failing_apply: Mutex<HashSet<(u32, u32)>>,
}

impl MockEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_code(&self, code: u32) {
        self.failing.lock().unwrap().insert(code);
    }

    pub fn heal_code(&self, code: u32) {
        self.failing.lock().unwrap().remove(&code);
    }

    pub fn fail_transform(&self, from: u32, to: u32) {
        self.failing_transforms.lock().unwrap().insert((from, to));
    }

    pub fn heal_transform(&self, from: u32, to: u32) {
        self.failing_transforms.lock().unwrap().remove(&(from, to));
    }

    pub fn fail_apply(&self, from: u32, to: u32) {
        self.failing_apply.lock().unwrap().insert((from, to));
    }

    pub fn crs_created(&self) -> usize {
        self.crs_created.load(Ordering::SeqCst)
    }

    pub fn transforms_created(&self) -> usize {
        self.transforms_created.load(Ordering::SeqCst)
    }

    pub fn applied(&self) -> usize {
        self.applied.load(Ordering::SeqCst)
    }
}

impl ProjectionEngine for MockEngine {
    type Crs = MockCrs;
    type Transform = MockTransform;

    fn create_crs(&self, code: u32) -> EngineResult<MockCrs> {
        if self.failing.lock().unwrap().contains(&code) {
            return Err(EngineError::UnknownEpsgCode(code));
        }
        self.crs_created.fetch_add(1, Ordering::SeqCst);
        Ok(MockCrs { code })
    }

    fn create_transform(&self, from: &MockCrs, to: &MockCrs) -> EngineResult<MockTransform> {
        if self.failing_transforms.lock().unwrap().contains(&(from.code, to.code)) {
            return Err(EngineError::Backend(format!("no pipeline {} -> {}", from.code, to.code)));
        }
        self.transforms_created.fetch_add(1, Ordering::SeqCst);
        Ok(MockTransform { from: from.code, to: to.code })
    }

    fn apply(&self, transform: &MockTransform, ordinates: [f64; 2]) -> EngineResult<[f64; 2]> {
        if self.failing_apply.lock().unwrap().contains(&(transform.from, transform.to)) {
            return Err(EngineError::Backend("point outside projection domain".to_string()));
        }
        self.applied.fetch_add(1, Ordering::SeqCst);
        let [a, b] = ordinates;

        match (epsg::is_geographic(transform.from), epsg::is_geographic(transform.to)) {
            (true, false) => Ok([b * 1e4 + 5e5, a * 1e5]),
            (false, true) => Ok([b / 1e5, (a - 5e5) / 1e4]),
            (false, false) => Ok([a + f64::from(transform.to) - f64::from(transform.from), b]),
            (true, true) => Err(EngineError::Backend("geographic to geographic".to_string())),
        }
    }
}
