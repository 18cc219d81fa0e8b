use crate::branching::value_selection::InDomainMin;
use crate::branching::value_selection::ValueSelector;
use crate::branching::variable_selection::FirstFail;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::Brancher;
use crate::branching::Decision;
use crate::engine::domains::DomainId;
use crate::engine::domains::DomainStore;

/// An implementation of a [`Brancher`] which simply uses a single [`VariableSelector`] and a
/// single [`ValueSelector`] independently of one another.
#[derive(Debug, Clone)]
pub struct IndependentVariableValueBrancher<VariableSelect, ValueSelect> {
    variable_selector: VariableSelect,
    value_selector: ValueSelect,
}

impl<VariableSelect, ValueSelect> IndependentVariableValueBrancher<VariableSelect, ValueSelect>
where
    VariableSelect: VariableSelector,
    ValueSelect: ValueSelector,
{
    pub fn new(variable_selector: VariableSelect, value_selector: ValueSelect) -> Self {
        IndependentVariableValueBrancher {
            variable_selector,
            value_selector,
        }
    }
}

impl IndependentVariableValueBrancher<FirstFail, InDomainMin> {
    /// Smallest domain first, lower bound first.
    pub fn min_domain_lower_bound(variables: &[DomainId]) -> Self {
        IndependentVariableValueBrancher::new(FirstFail::new(variables), InDomainMin)
    }
}

impl<VariableSelect, ValueSelect> Brancher
    for IndependentVariableValueBrancher<VariableSelect, ValueSelect>
where
    VariableSelect: VariableSelector,
    ValueSelect: ValueSelector,
{
    fn next_decision(&mut self, domains: &DomainStore) -> Option<Decision> {
        self.variable_selector
            .select_variable(domains)
            .map(|variable| self.value_selector.select_value(domains, variable))
    }
}
