use std::{convert::Infallible, fmt::Debug};

use serde::{Deserialize, Serialize};

use crate::{
    core::{vertex::evaluate_counted, NelderMeadError, NelderMeadResults, Simplex},
    traits::{CostFunction, Observer, Projector},
    DVector, Float,
};

/// The configuration of a [`NelderMead`] optimizer.
///
/// None of these values are validated. Non-standard coefficients (such as a reflection
/// coefficient $`\alpha \leq 0`$) are accepted and simply make the search behave poorly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NelderMeadConfig {
    /// The maximum number of refinement iterations in a search (default = `1000`).
    pub max_iterations: usize,
    /// The reflection coefficient $`\alpha`$ (default = `1`).
    pub alpha: Float,
    /// The expansion coefficient $`\beta`$ (default = `2`).
    pub beta: Float,
    /// The contraction coefficient $`\gamma`$ (default = `0.5`).
    pub gamma: Float,
}
impl Default for NelderMeadConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            alpha: 1.0,
            beta: 2.0,
            gamma: 0.5,
        }
    }
}
impl NelderMeadConfig {
    /// Set the maximum number of refinement iterations (default = `1000`).
    pub const fn with_max_iterations(mut self, value: usize) -> Self {
        self.max_iterations = value;
        self
    }
    /// Set the reflection coefficient $`\alpha`$ (default = `1`).
    pub const fn with_alpha(mut self, value: Float) -> Self {
        self.alpha = value;
        self
    }
    /// Set the expansion coefficient $`\beta`$ (default = `2`).
    pub const fn with_beta(mut self, value: Float) -> Self {
        self.beta = value;
        self
    }
    /// Set the contraction coefficient $`\gamma`$ (default = `0.5`).
    pub const fn with_gamma(mut self, value: Float) -> Self {
        self.gamma = value;
        self
    }
    /// A set of adaptive coefficients according to Gao and Han[^1], which are identical to the
    /// standard ones when the dimension is `2` and tend to need fewer function evaluations in
    /// higher dimensions. The shrink step always halves the simplex, so only $`\alpha`$,
    /// $`\beta`$, and $`\gamma`$ are adapted.
    ///
    /// [^1]: [Gao, F., Han, L. Implementing the Nelder-Mead simplex algorithm with adaptive parameters. *Comput Optim Appl* **51**, 259–277 (2012).](https://doi.org/10.1007/s10589-010-9329-3)
    pub fn with_adaptive(mut self, n: usize) -> Self {
        let n = n as Float;
        self.alpha = 1.0;
        self.beta = 1.0 + (2.0 / n);
        self.gamma = 0.75 - 1.0 / (2.0 * n);
        self
    }
}

/// `out = a + coeff * (b - a)`, elementwise and in place.
fn step_into(out: &mut DVector<Float>, a: &DVector<Float>, b: &DVector<Float>, coeff: Float) {
    for ((o, a), b) in out.iter_mut().zip(a.iter()).zip(b.iter()) {
        *o = a + coeff * (b - a);
    }
}

fn project(projector: Option<&dyn Projector>, x: &mut DVector<Float>) {
    if let Some(projector) = projector {
        projector.project(x.as_mut_slice());
    }
}

/// The Nelder-Mead method
///
/// The Nelder-Mead method uses a simplex of $`n+1`$ points where $`n`$ is the dimension of the
/// input vector. A search proceeds as follows:
///
/// 0. Build a regular simplex around the starting point (see [`Simplex::construct`]), project
///    every vertex onto the feasible set (if a [`Projector`] was given), and evaluate it.
/// 1. Rank the vertices into the best $`\vec{x}^*`$, the worst $`\vec{x}^\dagger`$, and the
///    second worst $`\vec{x}^\ddagger`$ (see [`Simplex::rank`]).
/// 2. Calculate the centroid $`\vec{x}_o`$ of all but the worst vertex.
/// 3. **Reflection**: Compute $`\vec{x}_r = \vec{x}_o + \alpha (\vec{x}_o - \vec{x}^\dagger)`$.
///    If $`f(\vec{x}^*) \leq f(\vec{x}_r) < f(\vec{x}^\ddagger)`$, replace $`\vec{x}^\dagger`$
///    with $`\vec{x}_r`$.
/// 4. **Expansion**: If $`f(\vec{x}_r) < f(\vec{x}^*)`$, compute $`\vec{x}_e = \vec{x}_o + \beta
///    (\vec{x}_r - \vec{x}_o)`$ and replace $`\vec{x}^\dagger`$ with whichever of $`\vec{x}_e`$
///    and $`\vec{x}_r`$ is better (preferring $`\vec{x}_r`$ on ties).
/// 5. **Contraction**: If $`f(\vec{x}_r) \geq f(\vec{x}^\ddagger)`$, compute the "outside"
///    contraction $`\vec{x}_c = \vec{x}_o + \gamma (\vec{x}_r - \vec{x}_o)`$ when
///    $`f(\vec{x}_r) < f(\vec{x}^\dagger)`$, and the "inside" contraction $`\vec{x}_c =
///    \vec{x}_o - \gamma (\vec{x}_o - \vec{x}^\dagger)`$ otherwise. If $`f(\vec{x}_c) <
///    f(\vec{x}^\dagger)`$, replace $`\vec{x}^\dagger`$ with $`\vec{x}_c`$.
/// 6. **Shrink**: Otherwise, move every vertex halfway towards $`\vec{x}^*`$, project and
///    re-evaluate all of them, re-rank, and project and re-evaluate the new worst and second-worst
///    vertices once more.
/// 7. Stop if the standard deviation of the vertex values (see [`Simplex::std_dev`]) is below
///    the tolerance or the iteration limit is reached, otherwise go to **Step 1**.
///
/// Steps 3 through 5 each test the reflected value against the vertex values as they stand at
/// that moment, in that order. Every candidate point is projected before it is evaluated.
///
/// The optimizer borrows its [`CostFunction`] and [`Projector`] and owns every buffer a search
/// needs. They are allocated in [`NelderMead::new`] and reused by every call to
/// [`NelderMead::search`].
pub struct NelderMead<'a, E = Infallible> {
    func: &'a dyn CostFunction<E>,
    projector: Option<&'a dyn Projector>,
    config: NelderMeadConfig,
    simplex: Simplex,
    centroid: DVector<Float>,
    reflected: DVector<Float>,
    expanded: DVector<Float>,
    contracted: DVector<Float>,
    results: NelderMeadResults,
    observers: Vec<Box<dyn Observer>>,
}

impl<E> Clone for NelderMead<'_, E> {
    fn clone(&self) -> Self {
        Self {
            func: self.func,
            projector: self.projector,
            config: self.config,
            simplex: self.simplex.clone(),
            centroid: self.centroid.clone(),
            reflected: self.reflected.clone(),
            expanded: self.expanded.clone(),
            contracted: self.contracted.clone(),
            results: self.results.clone(),
            observers: self.observers.clone(),
        }
    }
}

impl<E> Debug for NelderMead<'_, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NelderMead")
            .field("dimension", &self.dimension())
            .field("projected", &self.projector.is_some())
            .field("config", &self.config)
            .field("simplex", &self.simplex)
            .field("results", &self.results)
            .finish_non_exhaustive()
    }
}

impl<'a, E> NelderMead<'a, E> {
    /// Create an optimizer over `dimension` variables which minimizes `func`, projecting every
    /// candidate point with `projector` if one is given.
    ///
    /// # Errors
    ///
    /// Returns [`NelderMeadError::InvalidDimension`] if `dimension` is zero.
    pub fn new<F>(
        dimension: usize,
        func: &'a F,
        projector: Option<&'a dyn Projector>,
    ) -> Result<Self, NelderMeadError<E>>
    where
        F: CostFunction<E> + 'a,
    {
        if dimension < 1 {
            return Err(NelderMeadError::InvalidDimension(dimension));
        }
        Ok(Self {
            func,
            projector,
            config: NelderMeadConfig::default(),
            simplex: Simplex::new(dimension),
            centroid: DVector::zeros(dimension),
            reflected: DVector::zeros(dimension),
            expanded: DVector::zeros(dimension),
            contracted: DVector::zeros(dimension),
            results: NelderMeadResults::new(dimension),
            observers: Vec::new(),
        })
    }
    /// Replace the whole configuration.
    pub const fn with_config(mut self, config: NelderMeadConfig) -> Self {
        self.config = config;
        self
    }
    /// Attach an [`Observer`] which is shown the simplex at every iteration of every search.
    pub fn with_observer<O: Observer + 'static>(mut self, observer: O) -> Self {
        self.observers.push(Box::new(observer));
        self
    }
    /// The current configuration.
    pub const fn config(&self) -> &NelderMeadConfig {
        &self.config
    }
    /// Set the maximum number of refinement iterations used by subsequent searches.
    pub fn set_max_iterations(&mut self, value: usize) {
        self.config.max_iterations = value;
    }
    /// Set the reflection coefficient used by subsequent searches.
    pub fn set_reflection_coefficient(&mut self, value: Float) {
        self.config.alpha = value;
    }
    /// Set the expansion coefficient used by subsequent searches.
    pub fn set_expansion_coefficient(&mut self, value: Float) {
        self.config.beta = value;
    }
    /// Set the contraction coefficient used by subsequent searches.
    pub fn set_contraction_coefficient(&mut self, value: Float) {
        self.config.gamma = value;
    }
    /// The number of variables being minimized over.
    pub fn dimension(&self) -> usize {
        self.simplex.dimension()
    }
    /// The working simplex as left by the most recent search.
    pub const fn simplex(&self) -> &Simplex {
        &self.simplex
    }
    /// The outcome of the most recent successful search.
    pub const fn results(&self) -> &NelderMeadResults {
        &self.results
    }

    /// Minimize the objective starting from `start`.
    ///
    /// The initial simplex is a regular simplex with edge length `scale` (see
    /// [`Simplex::construct`]). The search stops when the standard deviation of the vertex values
    /// drops below `tolerance` or when the configured number of iterations has been used up;
    /// the latter is reported through [`NelderMeadResults::converged`], not as an error.
    ///
    /// Every call starts from scratch and overwrites the stored results, so the same optimizer can
    /// be reused freely.
    ///
    /// # Errors
    ///
    /// Returns [`NelderMeadError::InvalidArgument`] if `start` does not have
    /// [`NelderMead::dimension`] coordinates, [`NelderMeadError::InvalidTolerance`] if
    /// `tolerance` is not positive, [`NelderMeadError::InvalidScale`] if `scale` is zero or
    /// `NaN`, and [`NelderMeadError::Cost`] if the objective fails, in which case the stored
    /// results are left as they were.
    pub fn search(
        &mut self,
        start: &[Float],
        tolerance: Float,
        scale: Float,
    ) -> Result<&NelderMeadResults, NelderMeadError<E>> {
        if start.len() != self.dimension() {
            return Err(NelderMeadError::InvalidArgument {
                expected: self.dimension(),
                found: start.len(),
            });
        }
        if tolerance.is_nan() || tolerance <= 0.0 {
            return Err(NelderMeadError::InvalidTolerance(tolerance));
        }
        if scale.is_nan() || scale == 0.0 {
            return Err(NelderMeadError::InvalidScale(scale));
        }
        let mut evals = 0;
        self.simplex.construct(start, scale);
        self.simplex.project_all(self.projector);
        self.simplex
            .evaluate_all(self.func, &mut evals)
            .map_err(NelderMeadError::Cost)?;
        self.notify(0);

        let mut iteration_count = 0;
        let mut converged = false;
        while iteration_count < self.config.max_iterations {
            iteration_count += 1;
            self.step(&mut evals).map_err(NelderMeadError::Cost)?;
            self.notify(iteration_count);
            if self.simplex.std_dev() < tolerance {
                converged = true;
                break;
            }
        }

        self.simplex.rank();
        let best = self.simplex.best();
        let min = evaluate_counted(self.func, best.x.as_slice(), &mut evals)
            .map_err(NelderMeadError::Cost)?;
        self.results
            .update(iteration_count, evals, best.x.as_slice(), min, converged);
        Ok(&self.results)
    }

    fn notify(&mut self, iteration: usize) {
        for observer in self.observers.iter_mut() {
            observer.observe(iteration, &self.simplex);
        }
    }

    fn step(&mut self, evals: &mut usize) -> Result<(), E> {
        let NelderMeadConfig {
            alpha, beta, gamma, ..
        } = self.config;
        let func = self.func;
        let projector = self.projector;

        self.simplex.rank();
        let l = self.simplex.best_index();
        let s = self.simplex.second_worst_index();
        let h = self.simplex.worst_index();
        self.simplex.centroid_into(&mut self.centroid);

        step_into(
            &mut self.reflected,
            &self.centroid,
            &self.simplex[h].x,
            -alpha,
        );
        project(projector, &mut self.reflected);
        let fr = evaluate_counted(func, self.reflected.as_slice(), evals)?;

        if fr < self.simplex[s].fx && fr >= self.simplex[l].fx {
            self.simplex[h].replace(&self.reflected, fr);
        }

        if fr < self.simplex[l].fx {
            step_into(&mut self.expanded, &self.centroid, &self.reflected, beta);
            project(projector, &mut self.expanded);
            let fe = evaluate_counted(func, self.expanded.as_slice(), evals)?;
            if fe < fr {
                self.simplex[h].replace(&self.expanded, fe);
            } else {
                self.simplex[h].replace(&self.reflected, fr);
            }
        }

        if fr >= self.simplex[s].fx {
            if fr < self.simplex[h].fx && fr >= self.simplex[s].fx {
                step_into(&mut self.contracted, &self.centroid, &self.reflected, gamma);
            } else {
                step_into(
                    &mut self.contracted,
                    &self.centroid,
                    &self.simplex[h].x,
                    gamma,
                );
            }
            project(projector, &mut self.contracted);
            let fc = evaluate_counted(func, self.contracted.as_slice(), evals)?;

            if fc < self.simplex[h].fx {
                self.simplex[h].replace(&self.contracted, fc);
            } else {
                self.simplex.shrink_toward_best();
                self.simplex.project_all(projector);
                self.simplex.evaluate_all(func, evals)?;
                self.simplex.rank();
                let h = self.simplex.worst_index();
                let s = self.simplex.second_worst_index();
                self.simplex[h].project(projector);
                self.simplex[h].evaluate(func, evals)?;
                self.simplex[s].project(projector);
                self.simplex[s].evaluate(func, evals)?;
            }
        }
        Ok(())
    }
}
