//! Shared-instance pools for coordinate values
//!
//! Every distinct coordinate *value* corresponds to exactly one live
//! instance, so reference equality implies value equality and repeated
//! construction of the same point allocates nothing. One pool exists per
//! representation type. Entries are never evicted; the pool lives as long
//! as the process (an accepted trade-off for identity-based sharing).
//!
//! Lookup strategy: an exact map keyed on the bit patterns of the three
//! stored components, backed by a tolerance scan when the exact key
//! misses. Both the scan and the insert happen under one lock
//! acquisition, so `get_or_create` is linearizable: concurrent callers
//! racing on one logical value always receive the same `Arc`.
//!
//! A process-wide pool is available through [`shared`] and the
//! [`cartesian`]/[`spheric`] factory accessors; code that wants isolation
//! (tests, multiple independent contexts) can own its own
//! [`CoordinatePool`].

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;

use crate::coordinates::errors::Result;
use crate::coordinates::{CartesianCoordinate, Coordinate, SphericCoordinate};

/// Exact lookup key: the bit patterns of the three stored components
type BitKey = [u64; 3];

fn bit_key(a: f64, b: f64, c: f64) -> BitKey {
    [a.to_bits(), b.to_bits(), c.to_bits()]
}

/// Interning pool holding the single live instance of every coordinate
/// value handed out so far
#[derive(Debug, Default)]
pub struct CoordinatePool {
    cartesian: Mutex<HashMap<BitKey, Arc<CartesianCoordinate>>>,
    spheric: Mutex<HashMap<BitKey, Arc<SphericCoordinate>>>,
}

impl CoordinatePool {
    /// Creates an empty pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared instance for the Cartesian value (x, y, z),
    /// creating and registering it on first use
    ///
    /// Values within tolerance of an already-interned coordinate resolve
    /// to that instance rather than a new one.
    pub fn get_or_create_cartesian(&self, x: f64, y: f64, z: f64) -> Arc<CartesianCoordinate> {
        self.intern_cartesian(CartesianCoordinate::new(x, y, z))
    }

    /// Interns an already-built Cartesian value
    ///
    /// This is the re-interning path for "mutation": build the changed
    /// value with `with_x`/`with_y`/`with_z`, then swap the handle.
    pub fn intern_cartesian(&self, value: CartesianCoordinate) -> Arc<CartesianCoordinate> {
        let key = bit_key(value.x, value.y, value.z);
        let mut map = self.cartesian.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(existing) = map.get(&key) {
            log::trace!("cartesian pool hit for ({}, {}, {})", value.x, value.y, value.z);
            return Arc::clone(existing);
        }
        // Tolerance scan: an epsilon-close value may be interned under a
        // different bit pattern.
        if let Some(existing) = map.values().find(|c| c.is_equal(&value)).cloned() {
            map.insert(key, Arc::clone(&existing));
            return existing;
        }

        log::trace!("cartesian pool miss for ({}, {}, {})", value.x, value.y, value.z);
        let created = Arc::new(value);
        map.insert(key, Arc::clone(&created));
        created
    }

    /// Returns the shared instance for the spherical value (φ, θ, r),
    /// creating and registering it on first use
    ///
    /// The triple is canonicalized through the validating constructor
    /// (radius check, angle reduction) before keying.
    ///
    /// # Errors
    ///
    /// Construction errors from [`SphericCoordinate::new`] pass through.
    pub fn get_or_create_spheric(
        &self,
        phi: f64,
        theta: f64,
        radius: f64,
    ) -> Result<Arc<SphericCoordinate>> {
        Ok(self.intern_spheric(SphericCoordinate::new(phi, theta, radius)?))
    }

    /// Interns an already-validated spherical value
    pub fn intern_spheric(&self, value: SphericCoordinate) -> Arc<SphericCoordinate> {
        let key = bit_key(value.phi, value.theta, value.radius);
        let mut map = self.spheric.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(existing) = map.get(&key) {
            return Arc::clone(existing);
        }
        if let Some(existing) = map.values().find(|c| c.is_equal(&value)).cloned() {
            map.insert(key, Arc::clone(&existing));
            return existing;
        }

        let created = Arc::new(value);
        map.insert(key, Arc::clone(&created));
        created
    }

    /// Number of distinct Cartesian instances currently interned
    pub fn cartesian_len(&self) -> usize {
        let map = self.cartesian.lock().unwrap_or_else(|e| e.into_inner());
        count_distinct(map.values())
    }

    /// Number of distinct spherical instances currently interned
    pub fn spheric_len(&self) -> usize {
        let map = self.spheric.lock().unwrap_or_else(|e| e.into_inner());
        count_distinct(map.values())
    }

    /// True when nothing has been interned yet
    pub fn is_empty(&self) -> bool {
        self.cartesian_len() == 0 && self.spheric_len() == 0
    }
}

/// Counts instances rather than keys: tolerance aliases map several keys
/// to one Arc.
fn count_distinct<'a, T: 'a>(values: impl Iterator<Item = &'a Arc<T>>) -> usize {
    let mut seen: Vec<*const T> = Vec::new();
    for v in values {
        let ptr = Arc::as_ptr(v);
        if !seen.contains(&ptr) {
            seen.push(ptr);
        }
    }
    seen.len()
}

static SHARED: Lazy<CoordinatePool> = Lazy::new(CoordinatePool::new);

/// The process-wide pool used by the factory accessors
pub fn shared() -> &'static CoordinatePool {
    &SHARED
}

/// Factory accessor: the shared instance for Cartesian (x, y, z)
pub fn cartesian(x: f64, y: f64, z: f64) -> Arc<CartesianCoordinate> {
    SHARED.get_or_create_cartesian(x, y, z)
}

/// Factory accessor: the shared instance for spherical (φ, θ, r)
///
/// # Errors
///
/// Construction errors from [`SphericCoordinate::new`] pass through.
pub fn spheric(phi: f64, theta: f64, radius: f64) -> Result<Arc<SphericCoordinate>> {
    SHARED.get_or_create_spheric(phi, theta, radius)
}
