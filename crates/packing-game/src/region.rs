//! Drop Zone Geometry
//!
//! Point-in-rectangle test in viewport coordinates.

/// A point in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounds of the drop target
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Region {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Region {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }

    /// Edges are inclusive
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.top
            && point.y <= self.bottom
    }
}

/// A target that has not been measured yet never accepts a drop
pub fn drop_lands_in(target: Option<Region>, point: Point) -> bool {
    target.map_or(false, |region| region.contains(point))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suitcase() -> Region {
        Region::new(100.0, 200.0, 300.0, 400.0)
    }

    #[test]
    fn test_inside() {
        assert!(suitcase().contains(Point::new(150.0, 250.0)));
    }

    #[test]
    fn test_edges_are_inclusive() {
        let r = suitcase();
        assert!(r.contains(Point::new(100.0, 300.0)));
        assert!(r.contains(Point::new(300.0, 300.0)));
        assert!(r.contains(Point::new(200.0, 200.0)));
        assert!(r.contains(Point::new(200.0, 400.0)));
        assert!(r.contains(Point::new(100.0, 200.0)));
        assert!(r.contains(Point::new(300.0, 400.0)));
    }

    #[test]
    fn test_one_unit_outside_each_edge() {
        let r = suitcase();
        assert!(!r.contains(Point::new(99.0, 300.0)));
        assert!(!r.contains(Point::new(301.0, 300.0)));
        assert!(!r.contains(Point::new(200.0, 199.0)));
        assert!(!r.contains(Point::new(200.0, 401.0)));
    }

    #[test]
    fn test_unmeasured_target_rejects() {
        assert!(!drop_lands_in(None, Point::new(150.0, 250.0)));
        assert!(drop_lands_in(Some(suitcase()), Point::new(150.0, 250.0)));
    }
}
