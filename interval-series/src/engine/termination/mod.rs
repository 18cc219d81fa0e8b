//! A [`TerminationCondition`] is polled by the search before every decision. It lets the caller
//! stop the search before it has either found a series or proven that none exists; the result is
//! then [`SatisfactionResult::Unknown`](crate::results::SatisfactionResult::Unknown).

pub(crate) mod combinator;
pub(crate) mod decision_budget;
pub(crate) mod indefinite;
pub(crate) mod time_budget;

pub use combinator::Combinator;
pub use decision_budget::DecisionBudget;
pub use indefinite::Indefinite;
pub use time_budget::TimeBudget;

/// The central trait that defines a termination condition. A termination condition determines when
/// the solver should give up searching for solutions.
pub trait TerminationCondition {
    /// Returns `true` when the solver should stop, `false` otherwise.
    fn should_stop(&mut self) -> bool;

    /// Called by the solver after every decision.
    fn decision_has_been_made(&mut self) {}
}

impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> bool {
        match self {
            Some(t) => t.should_stop(),
            None => false,
        }
    }

    fn decision_has_been_made(&mut self) {
        if let Some(t) = self {
            t.decision_has_been_made()
        }
    }
}

impl<T: TerminationCondition + ?Sized> TerminationCondition for &mut T {
    fn should_stop(&mut self) -> bool {
        (**self).should_stop()
    }

    fn decision_has_been_made(&mut self) {
        (**self).decision_has_been_made()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_condition_never_stops() {
        let mut termination: Option<DecisionBudget> = None;
        termination.decision_has_been_made();

        assert!(!termination.should_stop());
    }

    #[test]
    fn combinator_stops_when_either_side_stops() {
        let mut termination = Combinator::new(Indefinite, DecisionBudget::new(1));
        assert!(!termination.should_stop());

        termination.decision_has_been_made();

        assert!(termination.should_stop());
    }
}
