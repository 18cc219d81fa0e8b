use crate::containers::KeyedVec;
use crate::engine::domains::DomainId;
use crate::engine::domains::DomainStore;
use crate::solver_assert_simple;

/// An assignment of a value to every variable of a model, reported when the search reaches a
/// fixpoint in which every domain is fixed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    values: KeyedVec<DomainId, i32>,
}

impl Solution {
    /// Reads the solution from a store in which every domain is fixed.
    pub(crate) fn from_fixed_domains(domains: &DomainStore) -> Solution {
        solver_assert_simple!(
            domains.all_fixed(),
            "a solution can only be extracted when all variables are fixed"
        );

        let mut values = KeyedVec::default();
        for domain_id in domains.get_domains() {
            let _ = values.push(domains.lower_bound(domain_id));
        }

        Solution { values }
    }

    /// Returns the number of defined [`DomainId`]s.
    pub fn num_domains(&self) -> usize {
        self.values.len()
    }

    pub fn contains_domain_id(&self, domain_id: DomainId) -> bool {
        self.values.get(domain_id).is_some()
    }

    /// Returns the value of `var` in this solution.
    ///
    /// # Panics
    /// If `var` was not created by the solver which produced this solution.
    pub fn get_integer_value(&self, var: DomainId) -> i32 {
        self.values[var]
    }

    pub fn get_integer_values<'a>(
        &'a self,
        vars: impl IntoIterator<Item = &'a DomainId> + 'a,
    ) -> impl Iterator<Item = i32> + 'a {
        vars.into_iter().map(|&var| self.get_integer_value(var))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solution_reflects_the_fixed_store() {
        let mut store = DomainStore::default();
        let x = store.grow(4, 4);
        let y = store.grow(-2, -2);

        let solution = Solution::from_fixed_domains(&store);

        assert_eq!(2, solution.num_domains());
        assert_eq!(4, solution.get_integer_value(x));
        assert_eq!(vec![-2, 4], solution.get_integer_values(&[y, x]).collect::<Vec<_>>());
        assert!(!solution.contains_domain_id(DomainId::new(2)));
    }
}
