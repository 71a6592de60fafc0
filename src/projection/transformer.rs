use std::sync::{Mutex, MutexGuard};

use log::{debug, warn};
use proj::Proj;

use crate::projection::engine::{EngineError, EngineResult, ProjectionEngine};
use crate::projection::epsg;

/// Coordinate reference system known to PROJ by its EPSG code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpsgCrs {
    code: u32,
}

impl EpsgCrs {
    /// Returns the EPSG code
    pub fn code(&self) -> u32 {
        self.code
    }

    /// Returns true for latitude/longitude systems
    pub fn is_geographic(&self) -> bool {
        epsg::is_geographic(self.code)
    }

    fn definition(&self) -> String {
        format!("EPSG:{}", self.code)
    }
}

/// Transforms coordinates from one EPSG coordinate reference system to another
///
/// PROJ pipelines built from known CRSs work in longitude/latitude order, so
/// geographic ordinates are swapped on the way in and out to keep the
/// `[latitude, longitude]` order of the engine contract.
///
/// A PROJ pipeline is not `Sync`. Each call checks one out of a pool and puts
/// it back afterwards, building another when every pooled pipeline is busy,
/// so concurrent callers only contend on the pool lock, never on a conversion.
pub struct Transformer {
    pipelines: Mutex<Vec<Proj>>,
    from_epsg: u32,
    to_epsg: u32,
}

impl Transformer {
    /// Creates a new transformer from source to target CRS using EPSG codes
    ///
    /// The first pipeline is built eagerly so an unsupported pair fails here.
    pub fn new(from: EpsgCrs, to: EpsgCrs) -> EngineResult<Self> {
        let proj = pipeline(from.code, to.code)?;

        Ok(Self {
            pipelines: Mutex::new(vec![proj]),
            from_epsg: from.code,
            to_epsg: to.code,
        })
    }

    /// Transforms a pair of ordinates from source to target CRS
    pub fn transform(&self, ordinates: [f64; 2]) -> EngineResult<[f64; 2]> {
        let input = if epsg::is_geographic(self.from_epsg) {
            (ordinates[1], ordinates[0])
        } else {
            (ordinates[0], ordinates[1])
        };

        let proj = match self.lock()?.pop() {
            Some(proj) => proj,
            None => {
                debug!("growing pipeline pool EPSG:{} -> EPSG:{}", self.from_epsg, self.to_epsg);
                pipeline(self.from_epsg, self.to_epsg)?
            }
        };

        let converted = proj.convert(input);
        self.lock()?.push(proj);

        let (a, b) = converted
            .map_err(|e| EngineError::Backend(format!("Transformation failed: {}", e)))?;

        if epsg::is_geographic(self.to_epsg) {
            Ok([b, a])
        } else {
            Ok([a, b])
        }
    }

    /// Returns the number of idle pipelines
    pub fn pooled(&self) -> usize {
        self.pipelines.lock().map(|p| p.len()).unwrap_or(0)
    }

    fn lock(&self) -> EngineResult<MutexGuard<'_, Vec<Proj>>> {
        self.pipelines
            .lock()
            .map_err(|_| EngineError::Backend("Pipeline pool lock poisoned".to_string()))
    }

    /// Returns the source EPSG code
    pub fn from_epsg(&self) -> u32 {
        self.from_epsg
    }

    /// Returns the target EPSG code
    pub fn to_epsg(&self) -> u32 {
        self.to_epsg
    }
}

/// Projection engine backed by the PROJ library
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjEngine;

fn pipeline(from: u32, to: u32) -> EngineResult<Proj> {
    Proj::new_known_crs(&format!("EPSG:{}", from), &format!("EPSG:{}", to), None).map_err(|e| {
        warn!("PROJ refused pipeline EPSG:{} -> EPSG:{}: {}", from, to, e);
        EngineError::Backend(format!("Failed to create projection: {}", e))
    })
}

impl ProjEngine {
    /// Creates a new PROJ backed engine
    pub fn new() -> Self {
        Self
    }
}

impl ProjectionEngine for ProjEngine {
    type Crs = EpsgCrs;
    type Transform = Transformer;

    fn create_crs(&self, epsg: u32) -> EngineResult<EpsgCrs> {
        let crs = EpsgCrs { code: epsg };

        Proj::new(&crs.definition()).map_err(|e| {
            warn!("PROJ has no definition for EPSG:{}: {}", epsg, e);
            EngineError::UnknownEpsgCode(epsg)
        })?;

        Ok(crs)
    }

    fn create_transform(&self, from: &EpsgCrs, to: &EpsgCrs) -> EngineResult<Transformer> {
        Transformer::new(*from, *to)
    }

    fn apply(&self, transform: &Transformer, ordinates: [f64; 2]) -> EngineResult<[f64; 2]> {
        transform.transform(ordinates)
    }
}
