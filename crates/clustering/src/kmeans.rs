use super::*;
use gcl_core::Energy;
use rayon::prelude::*;

/// Configured k-means engine.
///
/// Runs [`KMeans::restarts`] independent k-means++ seedings of Lloyd's
/// algorithm in parallel and keeps the partition with the lowest inertia.
/// Restart r seeds its RNG from `seed + r`, and inertia ties break on the
/// restart index, so results are bitwise deterministic for a given input.
#[derive(Debug, Clone)]
pub struct KMeans {
    k: usize,
    restarts: usize,
    iterations: usize,
    seed: u64,
}

/// A partition of the input points.
#[derive(Debug, Clone, PartialEq)]
pub struct Clustering {
    /// Cluster index per input point, in input order. Each value is in [0, k).
    pub assignments: Vec<usize>,
    /// The k cluster centers.
    pub centers: Vec<Point>,
    /// Sum of squared distances from each point to its assigned center.
    pub inertia: Energy,
    /// Lloyd iterations taken by the winning restart.
    pub iterations: usize,
}

impl KMeans {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            restarts: gcl_core::KMEANS_RESTARTS,
            iterations: gcl_core::KMEANS_TRAINING_ITERATIONS,
            seed: gcl_core::KMEANS_SEED,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_restarts(mut self, restarts: usize) -> Self {
        self.restarts = restarts;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Partitions `points` into `k` clusters.
    ///
    /// Fails with [`ClusterError::InvalidInput`] when `points` is empty,
    /// `k` is zero, or `k` exceeds the number of points. Fewer distinct
    /// points than clusters surfaces as [`ClusterError::Computation`].
    pub fn cluster(&self, points: &[Point]) -> Result<Clustering, ClusterError> {
        if points.is_empty() {
            return Err(ClusterError::InvalidInput("no data provided".to_string()));
        }
        if self.k == 0 {
            return Err(ClusterError::InvalidInput(
                "cluster count must be positive".to_string(),
            ));
        }
        if self.k > points.len() {
            return Err(ClusterError::InvalidInput(format!(
                "cluster count {} exceeds point count {}",
                self.k,
                points.len()
            )));
        }
        log::debug!("clustering {} points into {} groups", points.len(), self.k);
        (0..self.restarts)
            .into_par_iter()
            .map(|run| self.lloyd(points, run).map(|c| (run, c)))
            .collect::<Result<Vec<_>, ClusterError>>()?
            .into_iter()
            .min_by(|(i, a), (j, b)| {
                a.inertia
                    .partial_cmp(&b.inertia)
                    .unwrap()
                    .then(i.cmp(j))
            })
            .map(|(_, clustering)| clustering)
            .ok_or_else(|| ClusterError::Computation("no restart converged".to_string()))
    }

    /// One full Lloyd run from a fresh k-means++ seeding.
    ///
    /// Alternates assignment and centroid updates until assignments
    /// stabilize or the iteration cap is reached.
    fn lloyd(&self, points: &[Point], run: usize) -> Result<Clustering, ClusterError> {
        use rand::SeedableRng;
        use rand::rngs::SmallRng;
        let ref mut rng = SmallRng::seed_from_u64(self.seed.wrapping_add(run as u64));
        let mut centers = seeds(points, self.k, rng)?;
        let mut assignments = vec![usize::MAX; points.len()];
        let mut iterations = 0;
        for _ in 0..self.iterations {
            iterations += 1;
            let next = points
                .iter()
                .map(|p| self.nearest(p, &centers).0)
                .collect::<Vec<usize>>();
            let stable = next == assignments;
            assignments = next;
            centers = self.centroids(points, &assignments, &centers);
            if stable {
                break;
            }
        }
        let inertia = points
            .iter()
            .zip(assignments.iter())
            .map(|(p, &j)| p.distance2(&centers[j]))
            .sum::<Energy>();
        Ok(Clustering {
            assignments,
            centers,
            inertia,
            iterations,
        })
    }

    /// Finds the nearest center for a point (O(k) distance calls).
    fn nearest(&self, point: &Point, centers: &[Point]) -> (usize, Energy) {
        centers
            .iter()
            .enumerate()
            .map(|(j, c)| (j, point.distance2(c)))
            .min_by(|(_, d1), (_, d2)| d1.partial_cmp(d2).unwrap())
            .unwrap()
    }

    /// Computes new centroids from current assignments. A cluster with no
    /// members keeps its previous centroid.
    fn centroids(&self, points: &[Point], assignments: &[usize], previous: &[Point]) -> Vec<Point> {
        (0..self.k)
            .map(|j| {
                points
                    .iter()
                    .zip(assignments.iter())
                    .filter(|(_, a)| **a == j)
                    .map(|(p, _)| p)
                    .fold(Mean::default(), Mean::absorb)
                    .finish(previous[j])
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(n: usize) -> Vec<Point> {
        (0..n)
            .map(|i| Point::new((i % 10) as f64, (i / 10) as f64))
            .collect()
    }

    #[test]
    fn empty_input_is_invalid() {
        match KMeans::new(2).cluster(&[]) {
            Err(ClusterError::InvalidInput(_)) => {}
            other => panic!("expected invalid input, got {:?}", other),
        }
    }

    #[test]
    fn zero_k_is_invalid() {
        match KMeans::new(0).cluster(&grid(10)) {
            Err(ClusterError::InvalidInput(_)) => {}
            other => panic!("expected invalid input, got {:?}", other),
        }
    }

    #[test]
    fn k_beyond_point_count_is_invalid() {
        match KMeans::new(11).cluster(&grid(10)) {
            Err(ClusterError::InvalidInput(_)) => {}
            other => panic!("expected invalid input, got {:?}", other),
        }
    }

    #[test]
    fn k_beyond_distinct_points_is_computation_failure() {
        let points = vec![Point::new(1., 1.); 8];
        match KMeans::new(2).cluster(&points) {
            Err(ClusterError::Computation(_)) => {}
            other => panic!("expected computation failure, got {:?}", other),
        }
    }

    #[test]
    fn partition_shape_holds() {
        let points = grid(40);
        let clustering = KMeans::new(5).cluster(&points).unwrap();
        assert_eq!(clustering.assignments.len(), points.len());
        assert_eq!(clustering.centers.len(), 5);
        assert!(clustering.assignments.iter().all(|&a| a < 5));
        assert!(clustering.iterations >= 1);
    }

    #[test]
    fn inertia_matches_recomputation() {
        let points = grid(40);
        let clustering = KMeans::new(4).cluster(&points).unwrap();
        let recomputed = points
            .iter()
            .zip(clustering.assignments.iter())
            .map(|(p, &j)| p.distance2(&clustering.centers[j]))
            .sum::<f64>();
        assert!(clustering.inertia >= 0.);
        assert!((clustering.inertia - recomputed).abs() < 1e-9);
    }

    #[test]
    fn single_cluster_center_is_the_mean() {
        let points = vec![
            Point::new(0., 0.),
            Point::new(2., 2.),
            Point::new(4., 10.),
        ];
        let clustering = KMeans::new(1).cluster(&points).unwrap();
        assert!(clustering.assignments.iter().all(|&a| a == 0));
        assert_eq!(clustering.centers[0], Point::new(2., 4.));
    }

    #[test]
    fn two_separated_points_split_perfectly() {
        let points = vec![Point::new(0., 0.), Point::new(0., 10.)];
        let clustering = KMeans::new(2).cluster(&points).unwrap();
        assert_ne!(clustering.assignments[0], clustering.assignments[1]);
        assert!(clustering.centers.contains(&Point::new(0., 0.)));
        assert!(clustering.centers.contains(&Point::new(0., 10.)));
        assert_eq!(clustering.inertia, 0.);
    }

    #[test]
    fn results_are_deterministic() {
        let points = grid(60);
        let a = KMeans::new(4).cluster(&points).unwrap();
        let b = KMeans::new(4).cluster(&points).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn tight_clusters_beat_a_random_partition() {
        // two well separated blobs: with k = 2 every point must land with
        // its own blob and inertia stays below the single cluster solution
        let mut points = Vec::new();
        for i in 0..10 {
            points.push(Point::new(i as f64 * 0.1, 0.));
            points.push(Point::new(100. + i as f64 * 0.1, 0.));
        }
        let two = KMeans::new(2).cluster(&points).unwrap();
        let one = KMeans::new(1).cluster(&points).unwrap();
        assert!(two.inertia < one.inertia);
        let left = two.assignments[0];
        for (i, &a) in two.assignments.iter().enumerate() {
            assert_eq!(a == left, i % 2 == 0, "point {} in wrong blob", i);
        }
    }
}
