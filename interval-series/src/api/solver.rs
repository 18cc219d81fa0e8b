use crate::basic_types::ConstraintOperationError;
use crate::branching::Brancher;
use crate::engine::domains::DomainId;
use crate::engine::domains::DomainStore;
use crate::engine::observer::NoObserver;
use crate::engine::observer::SearchObserver;
use crate::engine::termination::TerminationCondition;
use crate::engine::ConstraintSatisfactionSolver;
use crate::engine::EngineStatistics;
use crate::engine::PropagatorId;
use crate::propagators::Propagator;
use crate::results::SatisfactionResult;
use crate::statistics::log_statistic_postfix;
use crate::statistics::should_log_statistics;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

/// The main interaction point which allows the creation of variables, the addition of
/// propagators, and solving problems.
///
/// # Creating Variables
/// Variables are integer variables with an initial domain `[lower_bound, upper_bound]`, see
/// [`Solver::new_bounded_integer`]. The returned [`DomainId`] is the only handle to a variable.
///
/// # Posting Propagators
/// A [`Propagator`] may only refer to variables created by the same solver; everything has to be
/// posted before the first call to [`Solver::satisfy`].
///
/// ```rust
/// # use interval_series::Solver;
/// # use interval_series::propagators::Propagator;
/// # use interval_series::branching::IndependentVariableValueBrancher;
/// # use interval_series::termination::Indefinite;
/// # use interval_series::results::SatisfactionResult;
/// let mut solver = Solver::default();
/// let x = solver.new_bounded_integer(0, 3).expect("non-empty domain");
/// let y = solver.new_bounded_integer(0, 3).expect("non-empty domain");
/// let _ = solver
///     .add_propagator(Propagator::strict_greater(x, y))
///     .expect("both variables exist");
///
/// let mut brancher = IndependentVariableValueBrancher::min_domain_lower_bound(&[x, y]);
/// let result = solver.satisfy(&mut brancher, &mut Indefinite);
///
/// let SatisfactionResult::Satisfiable(solution) = result else {
///     panic!("x > y has a solution");
/// };
/// assert_eq!(1, solution.get_integer_value(x));
/// assert_eq!(0, solution.get_integer_value(y));
/// ```
#[derive(Debug, Default)]
pub struct Solver {
    pub(crate) satisfaction_solver: ConstraintSatisfactionSolver,
}

impl Solver {
    /// Logs the statistics of the search if statistic logging has been configured, see
    /// [`configure_statistic_logging`](crate::statistics::configure_statistic_logging).
    pub fn log_statistics(&self) {
        if should_log_statistics() {
            self.statistics().log(StatisticLogger::default());
            log_statistic_postfix();
        }
    }

    pub fn statistics(&self) -> &EngineStatistics {
        self.satisfaction_solver.statistics()
    }

    /// The current domains; outside of [`Solver::satisfy`] these are the initial domains.
    pub fn domains(&self) -> &DomainStore {
        self.satisfaction_solver.domains()
    }

    pub fn num_variables(&self) -> usize {
        self.domains().num_domains()
    }

    pub fn num_propagators(&self) -> usize {
        self.satisfaction_solver.num_propagators()
    }

    pub fn lower_bound(&self, variable: DomainId) -> i32 {
        self.domains().lower_bound(variable)
    }

    pub fn upper_bound(&self, variable: DomainId) -> i32 {
        self.domains().upper_bound(variable)
    }
}

impl Solver {
    /// Creates a variable with the domain `[lower_bound, upper_bound]`.
    ///
    /// Fails with [`ConstraintOperationError::EmptyInitialDomain`] if `lower_bound > upper_bound`.
    pub fn new_bounded_integer(
        &mut self,
        lower_bound: i32,
        upper_bound: i32,
    ) -> Result<DomainId, ConstraintOperationError> {
        self.satisfaction_solver
            .create_new_integer_variable(lower_bound, upper_bound)
    }

    /// Posts `propagator`. Fails with [`ConstraintOperationError::UnknownVariable`] if its scope
    /// mentions a variable which was not created by this solver.
    pub fn add_propagator(
        &mut self,
        propagator: Propagator,
    ) -> Result<PropagatorId, ConstraintOperationError> {
        self.satisfaction_solver.add_propagator(propagator)
    }
}

impl Solver {
    /// Searches for a single solution, branching according to `brancher` until `termination`
    /// triggers.
    pub fn satisfy(
        &mut self,
        brancher: &mut impl Brancher,
        termination: &mut impl TerminationCondition,
    ) -> SatisfactionResult {
        self.satisfy_with_observer(brancher, termination, &mut NoObserver)
    }

    /// [`Solver::satisfy`], reporting every step of the search to `observer`.
    pub fn satisfy_with_observer(
        &mut self,
        brancher: &mut impl Brancher,
        termination: &mut impl TerminationCondition,
        observer: &mut impl SearchObserver,
    ) -> SatisfactionResult {
        self.satisfaction_solver
            .satisfy(brancher, termination, observer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::Decision;
    use crate::branching::IndependentVariableValueBrancher;
    use crate::engine::observer::SearchEvent;
    use crate::engine::observer::SearchTrace;
    use crate::termination::DecisionBudget;
    use crate::termination::Indefinite;

    #[test]
    fn inverted_bounds_are_rejected() {
        let mut solver = Solver::default();

        assert_eq!(
            Err(ConstraintOperationError::EmptyInitialDomain {
                lower_bound: 3,
                upper_bound: 2
            }),
            solver.new_bounded_integer(3, 2)
        );
        assert_eq!(0, solver.num_variables());
    }

    #[test]
    fn unknown_variables_are_rejected() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 1).expect("non-empty");

        let result = solver.add_propagator(Propagator::strict_greater(x, DomainId::new(5)));

        assert_eq!(
            Err(ConstraintOperationError::UnknownVariable(DomainId::new(5))),
            result
        );
        assert_eq!(0, solver.num_propagators());
    }

    #[test]
    fn pigeonhole_is_unsatisfiable_after_search() {
        let mut solver = Solver::default();
        let variables = (0..4)
            .map(|_| solver.new_bounded_integer(0, 3).expect("non-empty"))
            .collect::<Vec<_>>();
        // Pairwise distances of at least two leave room for at most two values in [0, 3].
        for (i, &x) in variables.iter().enumerate() {
            for &y in variables.iter().skip(i + 1) {
                let distance = solver.new_bounded_integer(2, 3).expect("non-empty");
                let _ = solver
                    .add_propagator(Propagator::distance(x, y, distance))
                    .expect("variables exist");
            }
        }

        let mut brancher = IndependentVariableValueBrancher::min_domain_lower_bound(&variables);
        let result = solver.satisfy(&mut brancher, &mut Indefinite);

        assert_eq!(SatisfactionResult::Unsatisfiable, result);
        assert!(solver.statistics().num_failures > 0);
    }

    #[test]
    fn root_failure_needs_no_decisions() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 2).expect("non-empty");
        let _ = solver
            .add_propagator(Propagator::member(x, 5, 7))
            .expect("variable exists");

        let mut brancher = IndependentVariableValueBrancher::min_domain_lower_bound(&[x]);
        let result = solver.satisfy(&mut brancher, &mut Indefinite);

        assert_eq!(SatisfactionResult::Unsatisfiable, result);
        assert_eq!(0, solver.statistics().num_decisions);
    }

    #[test]
    fn zero_decision_budget_is_unknown() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 5).expect("non-empty");

        let mut brancher = IndependentVariableValueBrancher::min_domain_lower_bound(&[x]);
        let result = solver.satisfy(&mut brancher, &mut DecisionBudget::new(0));

        assert_eq!(SatisfactionResult::Unknown, result);
    }

    #[test]
    fn unbranched_variables_are_fixed_by_the_fallback() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 3).expect("non-empty");
        let y = solver.new_bounded_integer(0, 3).expect("non-empty");
        let _ = solver
            .add_propagator(Propagator::strict_greater(y, x))
            .expect("variables exist");

        // Only x is a decision variable; y keeps the domain [1, 3] after x = 0.
        let mut brancher = IndependentVariableValueBrancher::min_domain_lower_bound(&[x]);
        let SatisfactionResult::Satisfiable(solution) =
            solver.satisfy(&mut brancher, &mut Indefinite)
        else {
            panic!("y > x is satisfiable");
        };

        assert_eq!(0, solution.get_integer_value(x));
        assert_eq!(1, solution.get_integer_value(y));
    }

    #[test]
    fn posting_after_search_is_rejected() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 1).expect("non-empty");
        let mut brancher = IndependentVariableValueBrancher::min_domain_lower_bound(&[x]);
        let _ = solver.satisfy(&mut brancher, &mut Indefinite);

        assert_eq!(
            Err(ConstraintOperationError::SearchStarted),
            solver.add_propagator(Propagator::member(x, 0, 0))
        );
        assert_eq!(
            Err(ConstraintOperationError::SearchStarted),
            solver.new_bounded_integer(0, 1)
        );
    }

    #[test]
    fn domains_are_restored_after_search() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 9).expect("non-empty");
        let y = solver.new_bounded_integer(0, 9).expect("non-empty");
        let _ = solver
            .add_propagator(Propagator::strict_greater(x, y))
            .expect("variables exist");

        let mut brancher = IndependentVariableValueBrancher::min_domain_lower_bound(&[x, y]);
        let _ = solver.satisfy(&mut brancher, &mut Indefinite);

        assert_eq!((0, 9), (solver.lower_bound(x), solver.upper_bound(x)));
    }

    #[test]
    fn trace_records_backtracking() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 2).expect("non-empty");
        let y = solver.new_bounded_integer(0, 2).expect("non-empty");
        let distance = solver.new_bounded_integer(2, 2).expect("non-empty");
        let _ = solver
            .add_propagator(Propagator::distance(x, y, distance))
            .expect("variables exist");
        let _ = solver
            .add_propagator(Propagator::member(y, 0, 1))
            .expect("variables exist");

        // x = 0 would need y = 2, which is outside of [0, 1].
        let mut brancher = IndependentVariableValueBrancher::min_domain_lower_bound(&[x]);
        let mut trace = SearchTrace::default();
        let result = solver.satisfy_with_observer(&mut brancher, &mut Indefinite, &mut trace);

        let SatisfactionResult::Satisfiable(solution) = result else {
            panic!("x = 2, y = 0 is a solution");
        };
        assert_eq!(2, solution.get_integer_value(x));
        assert_eq!(0, solution.get_integer_value(y));

        let assign_zero = Decision::Assign {
            variable: x,
            value: 0,
        };
        assert_eq!(
            vec![
                SearchEvent::Propagation { num_fixed: 1 },
                SearchEvent::Decision {
                    decision: assign_zero,
                    depth: 1
                },
                SearchEvent::Failure { depth: 1 },
                SearchEvent::Backtrack {
                    refutation: assign_zero.negate(),
                    depth: 0
                },
                SearchEvent::Propagation { num_fixed: 3 },
                SearchEvent::Solution,
            ],
            trace.events()
        );
        assert_eq!(1, trace.num_decisions());
        assert_eq!(1, solver.statistics().num_backtracks);
        assert_eq!(1, solver.statistics().peak_depth);
    }
}
