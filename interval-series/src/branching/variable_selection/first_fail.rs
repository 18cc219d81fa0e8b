use log::warn;

use super::VariableSelector;
use crate::engine::domains::DomainId;
use crate::engine::domains::DomainStore;

/// A [`VariableSelector`] which selects the unfixed variable with the fewest values in its domain.
///
/// Ties are broken in favour of the variable which comes first in the provided order.
#[derive(Clone, Debug)]
pub struct FirstFail {
    variables: Vec<DomainId>,
}

impl FirstFail {
    pub fn new(variables: &[DomainId]) -> Self {
        if variables.is_empty() {
            warn!("The FirstFail variable selector was not provided with any variables");
        }
        FirstFail {
            variables: variables.to_vec(),
        }
    }
}

impl VariableSelector for FirstFail {
    fn select_variable(&mut self, domains: &DomainStore) -> Option<DomainId> {
        // `min_by_key` keeps the first of several minimal elements.
        self.variables
            .iter()
            .copied()
            .filter(|&variable| !domains.is_fixed(variable))
            .min_by_key(|&variable| domains.domain_size(variable))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smallest_domain_is_selected() {
        let mut domains = DomainStore::default();
        let x = domains.grow(0, 10);
        let y = domains.grow(5, 20);
        let mut strategy = FirstFail::new(&[x, y]);

        assert_eq!(Some(x), strategy.select_variable(&domains));

        domains.tighten_lower_bound(y, 15).expect("non-empty");

        assert_eq!(Some(y), strategy.select_variable(&domains));
    }

    #[test]
    fn holes_count_towards_the_size() {
        let mut domains = DomainStore::default();
        let x = domains.grow(0, 3);
        let y = domains.grow(0, 4);
        domains.exclude_range(y, 1, 3).expect("non-empty");
        let mut strategy = FirstFail::new(&[x, y]);

        assert_eq!(Some(y), strategy.select_variable(&domains));
    }

    #[test]
    fn ties_are_broken_in_order() {
        let mut domains = DomainStore::default();
        let x = domains.grow(0, 3);
        let y = domains.grow(4, 7);
        let z = domains.grow(0, 3);

        assert_eq!(Some(y), FirstFail::new(&[y, x, z]).select_variable(&domains));
        assert_eq!(Some(z), FirstFail::new(&[z, y, x]).select_variable(&domains));
    }

    #[test]
    fn fixed_variables_are_not_selected() {
        let mut domains = DomainStore::default();
        let x = domains.grow(1, 1);
        let y = domains.grow(2, 2);
        let mut strategy = FirstFail::new(&[x, y]);

        assert_eq!(None, strategy.select_variable(&domains));
    }
}
