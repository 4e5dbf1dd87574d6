//! Coordinates and the map viewport
//!
//! The map is an equirectangular projection: longitude maps linearly onto
//! columns and latitude onto rows. The viewport decides which slice of the
//! world is visible and converts between terminal cells and coordinates.

use ratatui::layout::Rect;

/// A (latitude, longitude) pair in decimal degrees
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Pan direction for keyboard navigation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

pub const MIN_ZOOM: u8 = 0;
pub const MAX_ZOOM: u8 = 6;

/// Fraction of the visible span moved by a single pan step
const PAN_STEP: f64 = 0.25;

/// Visible part of the world: a center point plus a zoom level.
///
/// At zoom 0 the whole world (360° x 180°) is visible, every zoom step
/// halves both spans.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub center: Coordinate,
    pub zoom: u8,
}

impl Viewport {
    pub fn new(center: Coordinate, zoom: u8) -> Self {
        Self {
            center: Coordinate::new(center.lat.clamp(-90.0, 90.0), center.lon.clamp(-180.0, 180.0)),
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }

    pub fn lon_span(&self) -> f64 {
        360.0 / f64::from(1u32 << self.zoom)
    }

    pub fn lat_span(&self) -> f64 {
        180.0 / f64::from(1u32 << self.zoom)
    }

    /// West/east edges of the visible area
    pub fn x_bounds(&self) -> [f64; 2] {
        let half = self.lon_span() / 2.0;
        [self.center.lon - half, self.center.lon + half]
    }

    /// South/north edges of the visible area
    pub fn y_bounds(&self) -> [f64; 2] {
        let half = self.lat_span() / 2.0;
        [self.center.lat - half, self.center.lat + half]
    }

    /// Coordinate under the center of the given cell, if the cell is inside `area`.
    ///
    /// No wrapping or clamping is applied: near the antimeridian this may
    /// yield longitudes beyond ±180.
    pub fn coordinate_at(&self, area: Rect, column: u16, row: u16) -> Option<Coordinate> {
        if area.width == 0 || area.height == 0 {
            return None;
        }
        if column < area.x || column >= area.right() || row < area.y || row >= area.bottom() {
            return None;
        }

        let [west, east] = self.x_bounds();
        let [south, north] = self.y_bounds();

        let fx = (f64::from(column - area.x) + 0.5) / f64::from(area.width);
        let fy = (f64::from(row - area.y) + 0.5) / f64::from(area.height);

        Some(Coordinate {
            lat: north - fy * (north - south),
            lon: west + fx * (east - west),
        })
    }

    /// Terminal cell that contains `coord`, or `None` when it is off-screen.
    pub fn cell_at(&self, area: Rect, coord: Coordinate) -> Option<(u16, u16)> {
        if area.width == 0 || area.height == 0 {
            return None;
        }

        let [west, east] = self.x_bounds();
        let [south, north] = self.y_bounds();
        if coord.lon < west || coord.lon > east || coord.lat < south || coord.lat > north {
            return None;
        }

        let fx = (coord.lon - west) / (east - west);
        let fy = (north - coord.lat) / (north - south);

        let col = ((fx * f64::from(area.width)) as u16).min(area.width - 1);
        let row = ((fy * f64::from(area.height)) as u16).min(area.height - 1);

        Some((area.x + col, area.y + row))
    }

    /// Move the center by a quarter of the visible span.
    ///
    /// Returns `false` when the center is already pinned at the edge.
    pub fn pan(&mut self, direction: Direction) -> bool {
        let before = self.center;
        let dlat = self.lat_span() * PAN_STEP;
        let dlon = self.lon_span() * PAN_STEP;

        match direction {
            Direction::Up => self.center.lat = (self.center.lat + dlat).min(90.0),
            Direction::Down => self.center.lat = (self.center.lat - dlat).max(-90.0),
            Direction::Left => self.center.lon = (self.center.lon - dlon).max(-180.0),
            Direction::Right => self.center.lon = (self.center.lon + dlon).min(180.0),
        }

        self.center != before
    }

    pub fn zoom_in(&mut self) -> bool {
        if self.zoom < MAX_ZOOM {
            self.zoom += 1;
            true
        } else {
            false
        }
    }

    pub fn zoom_out(&mut self) -> bool {
        if self.zoom > MIN_ZOOM {
            self.zoom -= 1;
            true
        } else {
            false
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_CENTER, crate::config::DEFAULT_ZOOM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> Viewport {
        Viewport::new(Coordinate::new(0.0, 0.0), 0)
    }

    #[test]
    fn test_spans_halve_per_zoom_level() {
        let mut vp = world();
        assert_eq!(vp.lon_span(), 360.0);
        assert_eq!(vp.lat_span(), 180.0);

        vp.zoom_in();
        assert_eq!(vp.lon_span(), 180.0);
        assert_eq!(vp.lat_span(), 90.0);
    }

    #[test]
    fn test_coordinate_at_center_cell() {
        let vp = world();
        // Odd dimensions so the middle cell straddles the center exactly
        let area = Rect::new(10, 5, 37, 19);

        let coord = vp.coordinate_at(area, 10 + 18, 5 + 9).unwrap();
        assert!(coord.lat.abs() < 1e-9);
        assert!(coord.lon.abs() < 1e-9);
    }

    #[test]
    fn test_coordinate_at_corners() {
        let vp = world();
        let area = Rect::new(0, 0, 360, 180);

        let nw = vp.coordinate_at(area, 0, 0).unwrap();
        assert!((nw.lat - 89.5).abs() < 1e-9);
        assert!((nw.lon + 179.5).abs() < 1e-9);

        let se = vp.coordinate_at(area, 359, 179).unwrap();
        assert!((se.lat + 89.5).abs() < 1e-9);
        assert!((se.lon - 179.5).abs() < 1e-9);
    }

    #[test]
    fn test_coordinate_at_outside_area() {
        let vp = world();
        let area = Rect::new(10, 10, 20, 10);

        assert!(vp.coordinate_at(area, 9, 12).is_none());
        assert!(vp.coordinate_at(area, 30, 12).is_none());
        assert!(vp.coordinate_at(area, 15, 20).is_none());
        assert!(vp.coordinate_at(Rect::new(0, 0, 0, 0), 0, 0).is_none());
    }

    #[test]
    fn test_coordinate_beyond_antimeridian_is_not_wrapped() {
        let vp = Viewport::new(Coordinate::new(0.0, 180.0), 1);
        let area = Rect::new(0, 0, 100, 50);

        let east = vp.coordinate_at(area, 99, 25).unwrap();
        assert!(east.lon > 180.0);
    }

    #[test]
    fn test_cell_at_roundtrips_through_coordinate_at() {
        let vp = Viewport::new(Coordinate::new(50.08, 14.43), 3);
        let area = Rect::new(40, 1, 80, 30);

        let coord = vp.coordinate_at(area, 63, 17).unwrap();
        assert_eq!(vp.cell_at(area, coord), Some((63, 17)));
    }

    #[test]
    fn test_cell_at_offscreen() {
        let vp = Viewport::new(Coordinate::new(50.0, 14.0), 3);
        let area = Rect::new(0, 0, 80, 30);

        assert!(vp.cell_at(area, Coordinate::new(-33.9, 151.2)).is_none());
    }

    #[test]
    fn test_pan_clamps_at_poles() {
        let mut vp = Viewport::new(Coordinate::new(80.0, 0.0), 0);

        assert!(vp.pan(Direction::Up));
        assert_eq!(vp.center.lat, 90.0);
        assert!(!vp.pan(Direction::Up));

        assert!(vp.pan(Direction::Left));
        assert_eq!(vp.center.lon, -90.0);
    }

    #[test]
    fn test_zoom_limits() {
        let mut vp = Viewport::new(Coordinate::default(), MAX_ZOOM);
        assert!(!vp.zoom_in());
        assert!(vp.zoom_out());

        let mut vp = Viewport::new(Coordinate::default(), MIN_ZOOM);
        assert!(!vp.zoom_out());
    }

    #[test]
    fn test_new_clamps_input() {
        let vp = Viewport::new(Coordinate::new(120.0, -250.0), 42);
        assert_eq!(vp.center, Coordinate::new(90.0, -180.0));
        assert_eq!(vp.zoom, MAX_ZOOM);
    }
}
