use gcl_core::Coordinates;
use gcl_core::Energy;

/// A 2D point in (latitude, longitude) space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point(Coordinates);

impl Point {
    pub fn new(latitude: Energy, longitude: Energy) -> Self {
        Self([latitude, longitude])
    }

    pub fn coordinates(&self) -> Coordinates {
        self.0
    }

    /// Squared Euclidean distance to another point.
    pub fn distance2(&self, other: &Self) -> Energy {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum()
    }
}

impl From<Coordinates> for Point {
    fn from(coordinates: Coordinates) -> Self {
        Self(coordinates)
    }
}

/// Running-mean accumulator for centroid updates.
///
/// Centroids are computed by folding cluster members into an identity
/// accumulator and finishing to the mean. A cluster that absorbed nothing
/// keeps its previous centroid.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mean {
    sum: Coordinates,
    n: usize,
}

impl Mean {
    /// Folds one point into the accumulator.
    pub fn absorb(mut self, point: &Point) -> Self {
        self.sum[0] += point.0[0];
        self.sum[1] += point.0[1];
        self.n += 1;
        self
    }

    /// Mean of the absorbed points, or `keep` when nothing was absorbed.
    pub fn finish(self, keep: Point) -> Point {
        match self.n {
            0 => keep,
            n => Point([self.sum[0] / n as Energy, self.sum[1] / n as Energy]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance2_is_squared_euclidean() {
        let a = Point::new(0., 0.);
        let b = Point::new(3., 4.);
        assert_eq!(a.distance2(&b), 25.);
        assert_eq!(b.distance2(&a), 25.);
        assert_eq!(a.distance2(&a), 0.);
    }

    #[test]
    fn mean_absorbs_to_coordinate_wise_average() {
        let points = [Point::new(0., 0.), Point::new(2., 4.), Point::new(4., 8.)];
        let mean = points
            .iter()
            .fold(Mean::default(), Mean::absorb)
            .finish(Point::new(9., 9.));
        assert_eq!(mean, Point::new(2., 4.));
    }

    #[test]
    fn mean_of_nothing_keeps_previous() {
        let keep = Point::new(1., 2.);
        assert_eq!(Mean::default().finish(keep), keep);
    }
}
