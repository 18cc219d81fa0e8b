use log::debug;

use super::SeriesError;
use super::SeriesOptions;
use super::SeriesSolution;
use crate::branching::IndependentVariableValueBrancher;
use crate::engine::domains::DomainId;
use crate::engine::observer::SearchObserver;
use crate::engine::termination::TerminationCondition;
use crate::engine::EngineStatistics;
use crate::propagators::Propagator;
use crate::results::SatisfactionResult;
use crate::solver_assert_moderate;
use crate::Solver;

/// The smallest half-width of the domain of an auxiliary difference variable.
const MIN_DIFFERENCE_BOUND: i32 = 20000;

/// The outcome of solving an instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeriesOutcome {
    Solved(SeriesSolution),
    /// The search space was exhausted; no series exists under the symmetry breaking constraints.
    Infeasible,
    /// The termination condition triggered before a series was found.
    Cancelled,
}

/// The variables and propagators of one All-Interval Series instance.
#[derive(Debug)]
pub struct AllIntervalModel {
    solver: Solver,
    values: Vec<DomainId>,
    distances: Vec<DomainId>,
}

impl AllIntervalModel {
    /// Creates the variables and posts the propagators for `options`.
    ///
    /// Fails with [`SeriesError::InvalidInput`] before creating anything if the size is smaller
    /// than 1.
    pub fn build(options: &SeriesOptions) -> Result<AllIntervalModel, SeriesError> {
        let m = options.size;
        if m < 1 {
            return Err(SeriesError::InvalidInput(m));
        }

        let mut solver = Solver::default();
        let values = (0..m)
            .map(|_| solver.new_bounded_integer(0, m - 1))
            .collect::<Result<Vec<_>, _>>()?;

        let distances = if options.use_auxiliary_views {
            post_distances_through_views(&mut solver, &values)?
        } else {
            post_distances(&mut solver, &values)?
        };

        for variables in [&values, &distances] {
            if !variables.is_empty() {
                let _ = solver.add_propagator(Propagator::all_different(variables.clone()))?;
            }
        }

        if m >= 2 {
            let _ = solver.add_propagator(Propagator::strict_greater(values[1], values[0]))?;
        }
        if m >= 3 {
            let last = distances.len() - 1;
            let _ =
                solver.add_propagator(Propagator::strict_greater(distances[0], distances[last]))?;
        }

        debug!(
            "Built an all-interval series model of size {m} with {} variables and {} propagators",
            solver.num_variables(),
            solver.num_propagators()
        );

        Ok(AllIntervalModel {
            solver,
            values,
            distances,
        })
    }

    pub fn solver(&self) -> &Solver {
        &self.solver
    }

    /// The primary variables `v[0], .., v[m - 1]`.
    pub fn values(&self) -> &[DomainId] {
        &self.values
    }

    /// The distance variables `dist[0], .., dist[m - 2]`, where `dist[i] = |v[i + 1] - v[i]|`.
    pub fn distances(&self) -> &[DomainId] {
        &self.distances
    }

    /// Searches for a series, branching on the primary variables with the smallest domain first
    /// and trying their lower bound first.
    pub fn solve(
        &mut self,
        termination: &mut impl TerminationCondition,
        observer: &mut impl SearchObserver,
    ) -> SeriesOutcome {
        let mut brancher = IndependentVariableValueBrancher::min_domain_lower_bound(&self.values);

        match self
            .solver
            .satisfy_with_observer(&mut brancher, termination, observer)
        {
            SatisfactionResult::Satisfiable(solution) => {
                let series = SeriesSolution::new(
                    solution.get_integer_values(&self.values).collect(),
                    solution.get_integer_values(&self.distances).collect(),
                );
                solver_assert_moderate!(series.is_valid(), "the solver reported an invalid series");

                SeriesOutcome::Solved(series)
            }
            SatisfactionResult::Unsatisfiable => SeriesOutcome::Infeasible,
            SatisfactionResult::Unknown => SeriesOutcome::Cancelled,
        }
    }
}

/// Builds and solves the instance described by `options`, returning the outcome together with the
/// statistics of the search.
pub fn solve(
    options: &SeriesOptions,
    termination: &mut impl TerminationCondition,
    observer: &mut impl SearchObserver,
) -> Result<(SeriesOutcome, EngineStatistics), SeriesError> {
    let mut model = AllIntervalModel::build(options)?;
    let outcome = model.solve(termination, observer);

    Ok((outcome, *model.solver().statistics()))
}

/// `dist[i] in [1, m - 1]` with `|v[i + 1] - v[i]| = dist[i]`.
fn post_distances(solver: &mut Solver, values: &[DomainId]) -> Result<Vec<DomainId>, SeriesError> {
    let m = values.len() as i32;

    values
        .windows(2)
        .map(|pair| {
            let distance = solver.new_bounded_integer(1, m - 1)?;
            let _ = solver.add_propagator(Propagator::distance(pair[1], pair[0], distance))?;
            Ok(distance)
        })
        .collect()
}

/// `v[i] + k = v[i + 1]` and `dist[i] = |k|` for an auxiliary `k`, with `dist[i]` restricted to
/// `[1, m - 1]` by a separate member propagator.
fn post_distances_through_views(
    solver: &mut Solver,
    values: &[DomainId],
) -> Result<Vec<DomainId>, SeriesError> {
    let m = values.len() as i32;
    let bound = i32::max(MIN_DIFFERENCE_BOUND, m);

    values
        .windows(2)
        .map(|pair| {
            let difference = solver.new_bounded_integer(-bound, bound)?;
            let _ = solver.add_propagator(Propagator::sum(pair[0], difference, pair[1]))?;

            let distance = solver.new_bounded_integer(0, bound)?;
            let _ = solver.add_propagator(Propagator::absolute_value(difference, distance))?;
            let _ = solver.add_propagator(Propagator::member(distance, 1, m - 1))?;
            Ok(distance)
        })
        .collect()
}
