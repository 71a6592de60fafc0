//! Concurrent cache of coordinate reference systems and transformation pipelines

use std::sync::Arc;

use dashmap::DashMap;
use log::{debug, trace};

use crate::error::Result;
use crate::projection::datum::Datum;
use crate::projection::engine::ProjectionEngine;
use crate::projection::epsg;
use crate::types::Hemisphere;

/// Shared handle to a cached coordinate reference system
#[derive(Debug)]
pub struct CrsHandle<C> {
    epsg: u32,
    crs: Arc<C>,
}

impl<C> CrsHandle<C> {
    /// Returns the EPSG code the handle was created from
    pub fn epsg(&self) -> u32 {
        self.epsg
    }

    /// Returns the backend CRS
    pub fn crs(&self) -> &C {
        &self.crs
    }

    /// Returns true if both handles point at the same cached CRS
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.crs, &other.crs)
    }
}

impl<C> Clone for CrsHandle<C> {
    fn clone(&self) -> Self {
        Self {
            epsg: self.epsg,
            crs: Arc::clone(&self.crs),
        }
    }
}

/// Shared handle to a cached transformation pipeline
#[derive(Debug)]
pub struct TransformHandle<T> {
    from_epsg: u32,
    to_epsg: u32,
    transform: Arc<T>,
}

impl<T> TransformHandle<T> {
    /// Returns the source EPSG code
    pub fn from_epsg(&self) -> u32 {
        self.from_epsg
    }

    /// Returns the target EPSG code
    pub fn to_epsg(&self) -> u32 {
        self.to_epsg
    }

    /// Returns the backend transform
    pub fn transform(&self) -> &T {
        &self.transform
    }

    /// Returns true if both handles point at the same cached pipeline
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.transform, &other.transform)
    }
}

impl<T> Clone for TransformHandle<T> {
    fn clone(&self) -> Self {
        Self {
            from_epsg: self.from_epsg,
            to_epsg: self.to_epsg,
            transform: Arc::clone(&self.transform),
        }
    }
}

/// Memoizes CRS handles and transformation pipelines built by a projection engine
///
/// Both maps are safe to read and populate from many threads. When two
/// threads miss on the same key, both build a value and the first insert
/// wins, so every caller ends up holding the same handle. Failed builds are
/// never stored.
pub struct CrsRegistry<E: ProjectionEngine> {
    engine: E,
    crs: DashMap<u32, CrsHandle<E::Crs>>,
    transforms: DashMap<(u32, u32), TransformHandle<E::Transform>>,
}

impl<E: ProjectionEngine> CrsRegistry<E> {
    /// Creates an empty registry over a projection engine
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            crs: DashMap::new(),
            transforms: DashMap::new(),
        }
    }

    /// Returns the underlying projection engine
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Gets the WGS84 geographic CRS (EPSG:4326)
    pub fn geographic_crs(&self) -> Result<CrsHandle<E::Crs>> {
        self.crs_for_code(epsg::WGS84)
    }

    /// Gets the UTM CRS for a datum, zone and hemisphere
    ///
    /// # Errors
    /// * `UnsupportedDatum` for NSRS
    /// * `InvalidZone` outside 1..=60 (WGS84) or 1..=23 (NAD83)
    /// * `ProjectionBackend` if the engine cannot build the CRS
    pub fn get_crs(&self, datum: Datum, zone: i32, hemisphere: Hemisphere) -> Result<CrsHandle<E::Crs>> {
        let code = epsg::utm_code(datum, zone, hemisphere)?;
        self.crs_for_code(code)
    }

    /// Gets the pipeline transforming `from` into `to`
    ///
    /// Pipelines are keyed by the ordered pair of EPSG codes; the reverse
    /// direction is a separate entry.
    pub fn get_transform(
        &self,
        from: &CrsHandle<E::Crs>,
        to: &CrsHandle<E::Crs>,
    ) -> Result<TransformHandle<E::Transform>> {
        let key = (from.epsg, to.epsg);

        if let Some(entry) = self.transforms.get(&key) {
            trace!("transform cache hit EPSG:{} -> EPSG:{}", key.0, key.1);
            return Ok(entry.value().clone());
        }

        debug!("creating transform EPSG:{} -> EPSG:{}", key.0, key.1);
        let transform = self.engine.create_transform(from.crs(), to.crs())?;
        let handle = TransformHandle {
            from_epsg: key.0,
            to_epsg: key.1,
            transform: Arc::new(transform),
        };

        Ok(self.transforms.entry(key).or_insert(handle).value().clone())
    }

    /// Applies a cached pipeline to a pair of ordinates
    pub fn apply(&self, transform: &TransformHandle<E::Transform>, ordinates: [f64; 2]) -> Result<[f64; 2]> {
        Ok(self.engine.apply(transform.transform(), ordinates)?)
    }

    /// Returns the number of cached CRS handles
    pub fn crs_count(&self) -> usize {
        self.crs.len()
    }

    /// Returns the number of cached pipelines
    pub fn transform_count(&self) -> usize {
        self.transforms.len()
    }

    /// Returns cache statistics
    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            crs_count: self.crs.len(),
            transform_count: self.transforms.len(),
        }
    }

    /// Drops every cached handle
    pub fn clear(&self) {
        self.transforms.clear();
        self.crs.clear();
    }

    fn crs_for_code(&self, code: u32) -> Result<CrsHandle<E::Crs>> {
        if let Some(entry) = self.crs.get(&code) {
            trace!("CRS cache hit EPSG:{}", code);
            return Ok(entry.value().clone());
        }

        debug!("creating CRS EPSG:{}", code);
        let crs = self.engine.create_crs(code)?;
        let handle = CrsHandle {
            epsg: code,
            crs: Arc::new(crs),
        };

        Ok(self.crs.entry(code).or_insert(handle).value().clone())
    }
}

/// Registry statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryStats {
    /// Number of cached CRS handles
    pub crs_count: usize,
    /// Number of cached transformation pipelines
    pub transform_count: usize,
}
