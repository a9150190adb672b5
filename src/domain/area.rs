//! Area of interest geometry.
//!
//! The monitored area is a polygon ring of `[lon, lat]` pairs (GeoJSON order).
//! Catalog searches use its WKT form; processing requests use its bounding box.

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Meters per degree of longitude at the equator.
const METERS_PER_DEGREE_LON: f64 = 111_320.0;

/// Meters per degree of latitude.
const METERS_PER_DEGREE_LAT: f64 = 110_574.0;

/// A WGS84 vertex in longitude/latitude order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    fn is_valid(&self) -> bool {
        (-180.0..=180.0).contains(&self.lon) && (-90.0..=90.0).contains(&self.lat)
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(coordinate: Coordinate) -> Self {
        [coordinate.lon, coordinate.lat]
    }
}

/// Axis-aligned bounding box in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Square box centered on a point, `half_size` degrees in each direction.
    #[must_use]
    pub fn around(lon: f64, lat: f64, half_size: f64) -> Self {
        Self {
            min_lon: lon - half_size,
            min_lat: lat - half_size,
            max_lon: lon + half_size,
            max_lat: lat + half_size,
        }
    }

    /// Closed polygon ring tracing the box, starting at the south-west corner.
    #[must_use]
    pub fn to_ring(&self) -> Vec<Coordinate> {
        vec![
            Coordinate::new(self.min_lon, self.min_lat),
            Coordinate::new(self.min_lon, self.max_lat),
            Coordinate::new(self.max_lon, self.max_lat),
            Coordinate::new(self.max_lon, self.min_lat),
            Coordinate::new(self.min_lon, self.min_lat),
        ]
    }

    /// `(minx, miny, maxx, maxy)` as an array.
    #[must_use]
    pub fn to_array(&self) -> [f64; 4] {
        [self.min_lon, self.min_lat, self.max_lon, self.max_lat]
    }

    /// Approximate east-west extent in kilometers.
    #[must_use]
    pub fn width_km(&self) -> f64 {
        let mid_lat = (self.min_lat + self.max_lat) / 2.0;
        (self.max_lon - self.min_lon) * METERS_PER_DEGREE_LON * mid_lat.to_radians().cos() / 1000.0
    }

    /// Approximate north-south extent in kilometers.
    #[must_use]
    pub fn height_km(&self) -> f64 {
        (self.max_lat - self.min_lat) * METERS_PER_DEGREE_LAT / 1000.0
    }

    /// Raster dimensions `(width, height)` covering the box at `resolution_m`
    /// meters per pixel. Each side is at least one pixel.
    #[must_use]
    pub fn dimensions(&self, resolution_m: f64) -> (u32, u32) {
        let to_pixels = |km: f64| ((km * 1000.0) / resolution_m).round().max(1.0) as u32;
        (to_pixels(self.width_km()), to_pixels(self.height_km()))
    }
}

/// Named polygon describing the monitored region.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaOfInterest {
    name: String,
    coordinates: Vec<Coordinate>,
}

impl AreaOfInterest {
    /// Create an area from a polygon ring.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TooFewCoordinates`] for fewer than three pairs and
    /// [`DomainError::InvalidCoordinate`] for a vertex outside WGS84 bounds.
    pub fn try_new(
        name: impl Into<String>,
        coordinates: Vec<Coordinate>,
    ) -> Result<Self, DomainError> {
        if coordinates.len() < 3 {
            return Err(DomainError::TooFewCoordinates {
                count: coordinates.len(),
            });
        }
        if let Some(bad) = coordinates.iter().find(|c| !c.is_valid()) {
            return Err(DomainError::InvalidCoordinate {
                lon: bad.lon,
                lat: bad.lat,
            });
        }

        Ok(Self {
            name: name.into(),
            coordinates,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    fn is_closed(&self) -> bool {
        self.coordinates.first() == self.coordinates.last()
    }

    /// Number of distinct vertices; the closing vertex is not counted.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        if self.is_closed() {
            self.coordinates.len() - 1
        } else {
            self.coordinates.len()
        }
    }

    /// Bounding box over all vertices.
    #[must_use]
    pub fn bounds(&self) -> BoundingBox {
        let mut bounds = BoundingBox {
            min_lon: f64::INFINITY,
            min_lat: f64::INFINITY,
            max_lon: f64::NEG_INFINITY,
            max_lat: f64::NEG_INFINITY,
        };
        for c in &self.coordinates {
            bounds.min_lon = bounds.min_lon.min(c.lon);
            bounds.min_lat = bounds.min_lat.min(c.lat);
            bounds.max_lon = bounds.max_lon.max(c.lon);
            bounds.max_lat = bounds.max_lat.max(c.lat);
        }
        bounds
    }

    /// Well-known-text polygon, closing the ring if needed.
    #[must_use]
    pub fn to_wkt(&self) -> String {
        let mut ring: Vec<String> = self
            .coordinates
            .iter()
            .map(|c| format!("{} {}", c.lon, c.lat))
            .collect();
        if !self.is_closed() {
            ring.push(ring[0].clone());
        }
        format!("POLYGON(({}))", ring.join(", "))
    }
}
