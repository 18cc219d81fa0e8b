use std::fmt::Display;

use crate::engine::domains::DomainId;
use crate::engine::domains::DomainStore;
use crate::engine::domains::EmptyDomain;

/// A binary choice point of the search. On backtracking the [`Decision::negate`]d decision is
/// applied instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decision {
    /// `[variable = value]`
    Assign { variable: DomainId, value: i32 },
    /// `[variable != value]`
    Exclude { variable: DomainId, value: i32 },
}

impl Decision {
    pub fn variable(&self) -> DomainId {
        match self {
            Decision::Assign { variable, .. } | Decision::Exclude { variable, .. } => *variable,
        }
    }

    pub fn value(&self) -> i32 {
        match self {
            Decision::Assign { value, .. } | Decision::Exclude { value, .. } => *value,
        }
    }

    pub fn negate(&self) -> Decision {
        match *self {
            Decision::Assign { variable, value } => Decision::Exclude { variable, value },
            Decision::Exclude { variable, value } => Decision::Assign { variable, value },
        }
    }

    pub(crate) fn apply(&self, domains: &mut DomainStore) -> Result<(), EmptyDomain> {
        match *self {
            Decision::Assign { variable, value } => domains.assign(variable, value),
            Decision::Exclude { variable, value } => domains.exclude_value(variable, value),
        }
    }
}

impl Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Assign { variable, value } => write!(f, "[{variable} = {value}]"),
            Decision::Exclude { variable, value } => write!(f, "[{variable} != {value}]"),
        }
    }
}
