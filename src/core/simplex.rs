use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::{
    core::Vertex,
    traits::{CostFunction, Projector},
    DVector, Float,
};

/// The working set of $`n+1`$ [`Vertex`]es in an $`n`$-dimensional space.
///
/// Storage for every vertex is allocated once, by [`Simplex::new`], and every later operation
/// works in place. The positions of the best, worst, and second-worst vertices are found by
/// [`Simplex::rank`]; they are reset by [`Simplex::construct`] and otherwise carried from one
/// ranking to the next, which decides how ties are broken (see [`Simplex::rank`]).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Simplex {
    vertices: Vec<Vertex>,
    best: usize,
    second_worst: usize,
    worst: usize,
}

impl Simplex {
    /// Allocate a simplex of `dimension + 1` unevaluated vertices at the origin.
    pub fn new(dimension: usize) -> Self {
        Self {
            vertices: vec![Vertex::zeros(dimension); dimension + 1],
            best: 0,
            second_worst: 0,
            worst: 0,
        }
    }
    /// The dimension of the space the simplex lives in (one less than the number of vertices).
    pub fn dimension(&self) -> usize {
        self.vertices.len() - 1
    }
    /// All vertices, in storage order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
    /// Storage index of the vertex with the lowest value as of the last [`Simplex::rank`].
    pub const fn best_index(&self) -> usize {
        self.best
    }
    /// Storage index of the vertex with the highest value as of the last [`Simplex::rank`].
    pub const fn worst_index(&self) -> usize {
        self.worst
    }
    /// Storage index of the vertex with the highest value strictly below the worst one, as of the
    /// last [`Simplex::rank`].
    pub const fn second_worst_index(&self) -> usize {
        self.second_worst
    }
    /// The vertex with the lowest value as of the last [`Simplex::rank`].
    pub fn best(&self) -> &Vertex {
        &self.vertices[self.best]
    }
    /// The vertex with the highest value as of the last [`Simplex::rank`].
    pub fn worst(&self) -> &Vertex {
        &self.vertices[self.worst]
    }
    /// The second-worst vertex as of the last [`Simplex::rank`].
    pub fn second_worst(&self) -> &Vertex {
        &self.vertices[self.second_worst]
    }

    /// Place the vertices of a regular simplex with edge length `scale` around `start`.
    ///
    /// Vertex $`0`$ is `start` itself and vertex $`i \geq 1`$ is offset from it by $`p_n`$ along
    /// axis $`i-1`$ and by $`q_n`$ along every other axis, where
    /// ```math
    /// p_n = s\frac{\sqrt{n+1} - 1 + n}{n\sqrt{2}},\quad q_n = s\frac{\sqrt{n+1} - 1}{n\sqrt{2}}
    /// ```
    /// No vertex is evaluated, and the rank indices are reset to zero.
    ///
    /// # Panics
    ///
    /// This method will panic if `start` has fewer coordinates than the simplex dimension.
    #[allow(clippy::suboptimal_flops)]
    pub fn construct(&mut self, start: &[Float], scale: Float) {
        let n = self.dimension() as Float;
        let pn = scale * (Float::sqrt(n + 1.0) - 1.0 + n) / (n * Float::sqrt(2.0));
        let qn = scale * (Float::sqrt(n + 1.0) - 1.0) / (n * Float::sqrt(2.0));
        let dimension = self.dimension();
        for (i, vertex) in self.vertices.iter_mut().enumerate() {
            for j in 0..dimension {
                vertex.x[j] = if i == 0 {
                    start[j]
                } else if i - 1 == j {
                    pn + start[j]
                } else {
                    qn + start[j]
                };
            }
            vertex.fx = Float::NAN;
        }
        self.best = 0;
        self.second_worst = 0;
        self.worst = 0;
    }

    /// Apply `projector` (if any) to every vertex.
    pub fn project_all(&mut self, projector: Option<&dyn Projector>) {
        for vertex in self.vertices.iter_mut() {
            vertex.project(projector);
        }
    }

    /// Evaluate `func` at every vertex, in storage order.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` from the first vertex whose evaluation fails.
    pub fn evaluate_all<E, F>(&mut self, func: &F, evals: &mut usize) -> Result<(), E>
    where
        F: CostFunction<E> + ?Sized,
    {
        for vertex in self.vertices.iter_mut() {
            vertex.evaluate(func, evals)?;
        }
        Ok(())
    }

    /// Find the best, worst, and second-worst vertices.
    ///
    /// One left-to-right pass updates the worst index on a strictly greater value and the best
    /// index on a strictly smaller one, starting from the indices of the previous ranking. A
    /// second pass, starting from the best index, picks the highest value strictly between the
    /// best and the worst. Ties are therefore kept at the previous index when it holds the
    /// extreme value and at the first index in storage order otherwise, and when every value is
    /// equal the second-worst is the best.
    pub fn rank(&mut self) {
        for (j, vertex) in self.vertices.iter().enumerate() {
            if vertex.fx > self.vertices[self.worst].fx {
                self.worst = j;
            }
            if vertex.fx < self.vertices[self.best].fx {
                self.best = j;
            }
        }
        self.second_worst = self.best;
        for (j, vertex) in self.vertices.iter().enumerate() {
            if vertex.fx > self.vertices[self.second_worst].fx
                && vertex.fx < self.vertices[self.worst].fx
            {
                self.second_worst = j;
            }
        }
    }

    /// Write the coordinate-wise mean of every vertex except the worst into `centroid`.
    pub fn centroid_into(&self, centroid: &mut DVector<Float>) {
        centroid.fill(0.0);
        for (m, vertex) in self.vertices.iter().enumerate() {
            if m != self.worst {
                *centroid += &vertex.x;
            }
        }
        *centroid /= self.dimension() as Float;
    }

    /// Move every vertex except the best halfway towards the best one. Cached values are left
    /// stale and must be re-evaluated by the caller.
    pub fn shrink_toward_best(&mut self) {
        let best = self.best;
        for row in 0..self.vertices.len() {
            if row == best {
                continue;
            }
            for j in 0..self.dimension() {
                let xl = self.vertices[best].x[j];
                let xi = self.vertices[row].x[j];
                self.vertices[row].x[j] = xl + (xi - xl) / 2.0;
            }
        }
    }

    /// The spread of the cached values,
    /// ```math
    /// \sigma = \sqrt{\sum_{j=0}^{n} \frac{(f_j - \bar{f})^2}{n}}
    /// ```
    /// where $`\bar{f}`$ is the mean over all $`n+1`$ vertices. Note the normalization by $`n`$
    /// rather than $`n+1`$.
    pub fn std_dev(&self) -> Float {
        let n = self.dimension() as Float;
        let mean = self.vertices.iter().map(|v| v.fx).sum::<Float>() / (n + 1.0);
        self.vertices
            .iter()
            .map(|v| Float::powi(v.fx - mean, 2) / n)
            .sum::<Float>()
            .sqrt()
    }
}

impl Index<usize> for Simplex {
    type Output = Vertex;

    fn index(&self, index: usize) -> &Self::Output {
        &self.vertices[index]
    }
}

impl IndexMut<usize> for Simplex {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.vertices[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::dvector;

    fn simplex_with_values(fx: &[Float]) -> Simplex {
        let mut simplex = Simplex::new(fx.len() - 1);
        for (i, v) in fx.iter().enumerate() {
            simplex[i].fx = *v;
        }
        simplex
    }

    #[test]
    fn test_construct_regular_simplex() {
        let mut simplex = Simplex::new(2);
        simplex.construct(&[1.0, 1.0], 1.0);
        let pn = (Float::sqrt(3.0) - 1.0 + 2.0) / (2.0 * Float::sqrt(2.0));
        let qn = (Float::sqrt(3.0) - 1.0) / (2.0 * Float::sqrt(2.0));
        assert_eq!(simplex[0].x, dvector![1.0, 1.0]);
        assert_relative_eq!(simplex[1].x, dvector![1.0 + pn, 1.0 + qn]);
        assert_relative_eq!(simplex[2].x, dvector![1.0 + qn, 1.0 + pn]);
        assert!(simplex.vertices().iter().all(|v| v.fx.is_nan()));
    }

    #[test]
    fn test_construct_edges_have_scale_length() {
        let mut simplex = Simplex::new(4);
        simplex.construct(&[0.5, -1.0, 2.0, 0.0], 3.0);
        for i in 0..=4 {
            for j in (i + 1)..=4 {
                let d = (&simplex[i].x - &simplex[j].x).norm();
                assert_relative_eq!(d, 3.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_construct_one_dimension() {
        let mut simplex = Simplex::new(1);
        simplex.construct(&[2.0], 0.5);
        assert_eq!(simplex[0].x, dvector![2.0]);
        assert_relative_eq!(simplex[1].x, dvector![2.5]);
    }

    #[test]
    fn test_construct_resets_rank() {
        let mut simplex = simplex_with_values(&[3.0, 1.0, 2.0]);
        simplex.rank();
        assert_eq!(simplex.best_index(), 1);
        simplex.construct(&[0.0, 0.0], 1.0);
        assert_eq!(simplex.best_index(), 0);
        assert_eq!(simplex.worst_index(), 0);
        assert_eq!(simplex.second_worst_index(), 0);
    }

    #[test]
    fn test_rank_distinct_values() {
        let mut simplex = simplex_with_values(&[2.0, 5.0, 1.0, 3.0]);
        simplex.rank();
        assert_eq!(simplex.best_index(), 2);
        assert_eq!(simplex.worst_index(), 1);
        assert_eq!(simplex.second_worst_index(), 3);
        assert_eq!(simplex.best().fx, 1.0);
        assert_eq!(simplex.worst().fx, 5.0);
        assert_eq!(simplex.second_worst().fx, 3.0);
    }

    #[test]
    fn test_rank_ties_take_first_index() {
        let mut simplex = simplex_with_values(&[1.0, 4.0, 1.0, 4.0]);
        simplex.rank();
        assert_eq!(simplex.best_index(), 0);
        assert_eq!(simplex.worst_index(), 1);
        assert_eq!(simplex.second_worst_index(), 0);
    }

    #[test]
    fn test_rank_all_equal() {
        let mut simplex = simplex_with_values(&[7.0, 7.0, 7.0]);
        simplex.rank();
        assert_eq!(simplex.best_index(), 0);
        assert_eq!(simplex.worst_index(), 0);
        assert_eq!(simplex.second_worst_index(), 0);
    }

    #[test]
    fn test_rank_keeps_previous_index_on_ties() {
        let mut simplex = simplex_with_values(&[1.0, 2.0, 3.0]);
        simplex.rank();
        assert_eq!(simplex.worst_index(), 2);
        // vertex 0 now ties with the previous worst, which keeps its index
        simplex[0].fx = 3.0;
        simplex.rank();
        assert_eq!(simplex.worst_index(), 2);
        assert_eq!(simplex.best_index(), 1);
        assert_eq!(simplex.second_worst_index(), 1);
    }

    #[test]
    fn test_centroid_excludes_worst() {
        let mut simplex = simplex_with_values(&[1.0, 2.0, 3.0]);
        simplex[0].x = dvector![1.0, 2.0];
        simplex[1].x = dvector![2.0, 3.0];
        simplex[2].x = dvector![30.0, 40.0];
        simplex.rank();
        let mut centroid = DVector::zeros(2);
        simplex.centroid_into(&mut centroid);
        assert_eq!(centroid, dvector![1.5, 2.5]);
    }

    #[test]
    fn test_shrink_toward_best() {
        let mut simplex = simplex_with_values(&[3.0, 0.0, 1.0]);
        simplex[0].x = dvector![4.0, 4.0];
        simplex[1].x = dvector![0.0, 0.0];
        simplex[2].x = dvector![-2.0, 6.0];
        simplex.rank();
        simplex.shrink_toward_best();
        assert_eq!(simplex[0].x, dvector![2.0, 2.0]);
        assert_eq!(simplex[1].x, dvector![0.0, 0.0]);
        assert_eq!(simplex[2].x, dvector![-1.0, 3.0]);
    }

    #[test]
    fn test_std_dev_normalized_by_dimension() {
        let simplex = simplex_with_values(&[1.0, 2.0, 3.0]);
        // mean 2, squared deviations 1 + 0 + 1 over n = 2
        assert_relative_eq!(simplex.std_dev(), 1.0);
        let flat = simplex_with_values(&[5.0, 5.0, 5.0, 5.0]);
        assert_eq!(flat.std_dev(), 0.0);
    }

    #[test]
    fn test_evaluate_all_counts() {
        let mut simplex = Simplex::new(2);
        simplex.construct(&[0.0, 0.0], 1.0);
        let f = |x: &[Float]| x[0] + x[1];
        let mut evals = 0;
        simplex.evaluate_all(&f, &mut evals).unwrap();
        assert_eq!(evals, 3);
        assert_eq!(simplex[0].fx, 0.0);
        assert!(simplex.vertices().iter().all(|v| v.fx.is_finite()));
    }
}
