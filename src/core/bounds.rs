//! Achsenparallele Bounding-Box einer Punktmenge in Weltkoordinaten.

use super::interpolation::Point;

/// Minimale Ausdehnung pro Achse, damit Skalierungen endlich bleiben.
pub const MIN_EXTENT: f64 = 1e-6;
/// Halbe Kantenlänge der Ersatz-Box für leere oder punktförmige Mengen.
pub const DEFAULT_HALF_EXTENT: f64 = 1.0;

/// Achsenparallele Box `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub min: Point,
    pub max: Point,
}

impl WorldBounds {
    /// Box um `center` mit halber Kantenlänge `half_extent`.
    pub fn around(center: Point, half_extent: f64) -> Self {
        let half = Point::splat(half_extent);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Bounding-Box aller Punkte.
    ///
    /// - leere Menge: Standard-Box um den Ursprung
    /// - einzelner Punkt (bzw. Box ohne Fläche): Standard-Box um diesen Punkt
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        let mut iter = points.into_iter();
        let Some(first) = iter.next() else {
            return Self::around(Point::ZERO, DEFAULT_HALF_EXTENT);
        };
        let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        let bounds = Self { min, max };
        let size = bounds.size();
        if size.x < MIN_EXTENT && size.y < MIN_EXTENT {
            return Self::around(bounds.center(), DEFAULT_HALF_EXTENT);
        }
        bounds
    }

    /// Mittelpunkt der Box.
    pub fn center(&self) -> Point {
        (self.min + self.max) * 0.5
    }

    /// Ausdehnung pro Achse (ungeklemmt).
    pub fn size(&self) -> Point {
        self.max - self.min
    }

    /// Ausdehnung pro Achse, mindestens [`MIN_EXTENT`].
    pub fn extent(&self) -> Point {
        self.size().max(Point::splat(MIN_EXTENT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn bounds_of_scattered_points() {
        let b = WorldBounds::from_points([
            Point::new(-3.0, 2.0),
            Point::new(5.0, -1.0),
            Point::new(0.0, 7.0),
        ]);
        assert_eq!(b.min, Point::new(-3.0, -1.0));
        assert_eq!(b.max, Point::new(5.0, 7.0));
        assert_relative_eq!(b.center().x, 1.0);
        assert_relative_eq!(b.center().y, 3.0);
    }

    #[test]
    fn empty_set_yields_default_box() {
        let b = WorldBounds::from_points(std::iter::empty());
        assert_eq!(b, WorldBounds::around(Point::ZERO, DEFAULT_HALF_EXTENT));
    }

    #[test]
    fn singleton_yields_default_box_around_point() {
        let p = Point::new(40.0, -12.0);
        let b = WorldBounds::from_points([p, p]);
        assert_eq!(b.center(), p);
        assert_relative_eq!(b.size().x, 2.0 * DEFAULT_HALF_EXTENT);
    }

    #[test]
    fn flat_box_keeps_minimum_extent() {
        let b = WorldBounds::from_points([Point::new(0.0, 5.0), Point::new(10.0, 5.0)]);
        assert_relative_eq!(b.extent().x, 10.0);
        assert_relative_eq!(b.extent().y, MIN_EXTENT);
    }
}
