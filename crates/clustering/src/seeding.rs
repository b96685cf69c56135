use super::*;
use gcl_core::Energy;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::rngs::SmallRng;

/// k-means++ seeding.
///
/// The first center is drawn uniformly; each subsequent center is drawn with
/// probability proportional to its squared distance from the nearest center
/// already chosen. When every remaining point coincides with a chosen center
/// the sampling weights sum to zero, which means there are fewer distinct
/// points than requested centers.
///
/// Callers must hand in at least one point; [`KMeans::cluster`] validates
/// this before seeding.
pub fn seeds(points: &[Point], k: usize, rng: &mut SmallRng) -> Result<Vec<Point>, ClusterError> {
    let first = points[rng.random_range(0..points.len())];
    let mut centers = Vec::with_capacity(k);
    let mut potentials = points
        .iter()
        .map(|p| p.distance2(&first))
        .collect::<Vec<Energy>>();
    centers.push(first);
    while centers.len() < k {
        let i = WeightedIndex::new(potentials.iter())
            .map_err(|_| {
                ClusterError::Computation("fewer distinct points than clusters".to_string())
            })?
            .sample(rng);
        let x = points[i];
        centers.push(x);
        potentials = points
            .iter()
            .map(|p| p.distance2(&x))
            .zip(potentials.iter())
            .map(|(d0, d1)| Energy::min(d0, *d1))
            .collect();
    }
    Ok(centers)
}
