//! The depth-first search with propagation at every node.
use std::time::Instant;

use log::debug;

use crate::basic_types::ConstraintOperationError;
use crate::basic_types::Solution;
use crate::branching::Brancher;
use crate::branching::Decision;
use crate::branching::IndependentVariableValueBrancher;
use crate::containers::KeyedVec;
use crate::engine::domains::DomainId;
use crate::engine::domains::DomainSnapshot;
use crate::engine::domains::DomainStore;
use crate::engine::domains::EmptyDomain;
use crate::engine::observer::SearchObserver;
use crate::engine::propagation::PropagationEngine;
use crate::engine::propagation::PropagatorId;
use crate::engine::termination::TerminationCondition;
use crate::engine::EngineStatistics;
use crate::propagators::Propagator;
use crate::results::SatisfactionResult;
use crate::solver_assert_moderate;

/// Owns the variables and propagators of a model and searches for an assignment satisfying all
/// propagators.
///
/// The search is a depth-first traversal of binary choice points. Every open choice point is a
/// [`SearchNode`] on an explicit stack; a failure restores the snapshot of the most recent node and
/// continues with its refutation.
#[derive(Debug, Default)]
pub(crate) struct ConstraintSatisfactionSolver {
    domains: DomainStore,
    propagators: KeyedVec<PropagatorId, Propagator>,
    propagation_engine: PropagationEngine,
    statistics: EngineStatistics,
    search_started: bool,
}

/// An open choice point: the domains before its decision and the decision to try on backtrack.
#[derive(Debug)]
struct SearchNode {
    snapshot: DomainSnapshot,
    refutation: Decision,
}

impl ConstraintSatisfactionSolver {
    pub(crate) fn domains(&self) -> &DomainStore {
        &self.domains
    }

    pub(crate) fn statistics(&self) -> &EngineStatistics {
        &self.statistics
    }

    pub(crate) fn num_propagators(&self) -> usize {
        self.propagators.len()
    }

    pub(crate) fn create_new_integer_variable(
        &mut self,
        lower_bound: i32,
        upper_bound: i32,
    ) -> Result<DomainId, ConstraintOperationError> {
        if self.search_started {
            return Err(ConstraintOperationError::SearchStarted);
        }
        if lower_bound > upper_bound {
            return Err(ConstraintOperationError::EmptyInitialDomain {
                lower_bound,
                upper_bound,
            });
        }

        Ok(self.domains.grow(lower_bound, upper_bound))
    }

    pub(crate) fn add_propagator(
        &mut self,
        propagator: Propagator,
    ) -> Result<PropagatorId, ConstraintOperationError> {
        if self.search_started {
            return Err(ConstraintOperationError::SearchStarted);
        }
        if let Some(unknown) = propagator
            .scope()
            .into_iter()
            .find(|&domain_id| !self.domains.contains_domain_id(domain_id))
        {
            return Err(ConstraintOperationError::UnknownVariable(unknown));
        }

        let propagator_id = self.propagators.push(propagator);
        self.propagation_engine
            .register(propagator_id, &self.propagators[propagator_id]);

        Ok(propagator_id)
    }

    /// Searches for a solution. The domains are restored to their initial state afterwards, so the
    /// solver can be asked again.
    pub(crate) fn satisfy(
        &mut self,
        brancher: &mut impl Brancher,
        termination: &mut impl TerminationCondition,
        observer: &mut impl SearchObserver,
    ) -> SatisfactionResult {
        let started_at = Instant::now();
        self.search_started = true;

        let initial_domains = self.domains.snapshot();
        let result = self.search(brancher, termination, observer);
        self.domains.restore(&initial_domains);

        self.statistics.time_spent_in_solver += started_at.elapsed().as_millis() as u64;
        debug!(
            "Search finished after {} decisions and {} failures",
            self.statistics.num_decisions, self.statistics.num_failures
        );

        result
    }

    fn search(
        &mut self,
        brancher: &mut impl Brancher,
        termination: &mut impl TerminationCondition,
        observer: &mut impl SearchObserver,
    ) -> SatisfactionResult {
        self.propagation_engine.enqueue_all();
        if self.propagate().is_err() {
            self.statistics.num_failures += 1;
            observer.on_failure(0);
            return SatisfactionResult::Unsatisfiable;
        }
        observer.on_propagation(&self.domains);

        let mut nodes: Vec<SearchNode> = Vec::new();

        loop {
            let Some(decision) = self.next_decision(brancher) else {
                let solution = Solution::from_fixed_domains(&self.domains);
                solver_assert_moderate!(
                    self.propagators
                        .iter()
                        .all(|propagator| propagator.is_satisfied(&solution)),
                    "the fixpoint of a complete assignment violates a propagator"
                );

                observer.on_solution(&solution);
                return SatisfactionResult::Satisfiable(solution);
            };

            if termination.should_stop() {
                return SatisfactionResult::Unknown;
            }
            termination.decision_has_been_made();
            self.statistics.num_decisions += 1;

            nodes.push(SearchNode {
                snapshot: self.domains.snapshot(),
                refutation: decision.negate(),
            });
            self.statistics.peak_depth = self.statistics.peak_depth.max(nodes.len() as u64);
            observer.on_decision(decision, &self.domains, nodes.len());

            let mut status = self.apply_and_propagate(decision);
            while status.is_err() {
                self.statistics.num_failures += 1;
                observer.on_failure(nodes.len());

                let Some(node) = nodes.pop() else {
                    return SatisfactionResult::Unsatisfiable;
                };

                self.statistics.num_backtracks += 1;
                self.domains.restore(&node.snapshot);
                observer.on_backtrack(node.refutation, nodes.len());

                status = self.apply_and_propagate(node.refutation);
            }
            observer.on_propagation(&self.domains);
        }
    }

    /// Asks the brancher for a decision. If the brancher considers every variable it knows about
    /// fixed while the model still has unfixed variables, the smallest of those is decided on.
    fn next_decision(&self, brancher: &mut impl Brancher) -> Option<Decision> {
        let decision = brancher.next_decision(&self.domains).or_else(|| {
            if self.domains.all_fixed() {
                return None;
            }

            let all_variables = self.domains.get_domains().collect::<Vec<_>>();
            IndependentVariableValueBrancher::min_domain_lower_bound(&all_variables)
                .next_decision(&self.domains)
        });

        solver_assert_moderate!(
            decision.map_or(true, |decision| !self.domains.is_fixed(decision.variable())),
            "decisions have to be taken on unfixed variables"
        );

        decision
    }

    fn apply_and_propagate(&mut self, decision: Decision) -> Result<(), EmptyDomain> {
        decision.apply(&mut self.domains)?;
        self.propagate()
    }

    fn propagate(&mut self) -> Result<(), EmptyDomain> {
        self.propagation_engine.propagate_to_fixpoint(
            &self.propagators,
            &mut self.domains,
            &mut self.statistics,
        )
    }
}
