use enumset::EnumSet;

use super::DomainEvent;
use super::EmptyDomain;
use crate::solver_assert_moderate;

/// An integer domain represented by its bounds and a sorted list of removed interior values.
///
/// Invariants:
/// - `lower_bound <= upper_bound`; an empty domain is never stored, operations which would empty
///   the domain return [`EmptyDomain`] and leave the domain untouched;
/// - every hole lies strictly between the bounds, so both bounds are always members.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct IntegerDomain {
    lower_bound: i32,
    upper_bound: i32,
    holes: Vec<i32>,
}

impl IntegerDomain {
    pub(crate) fn new(lower_bound: i32, upper_bound: i32) -> IntegerDomain {
        solver_assert_moderate!(lower_bound <= upper_bound);

        IntegerDomain {
            lower_bound,
            upper_bound,
            holes: Vec::new(),
        }
    }

    pub(crate) fn lower_bound(&self) -> i32 {
        self.lower_bound
    }

    pub(crate) fn upper_bound(&self) -> i32 {
        self.upper_bound
    }

    pub(crate) fn is_fixed(&self) -> bool {
        self.lower_bound == self.upper_bound
    }

    pub(crate) fn contains(&self, value: i32) -> bool {
        self.lower_bound <= value
            && value <= self.upper_bound
            && self.holes.binary_search(&value).is_err()
    }

    /// The number of values in the domain.
    pub(crate) fn size(&self) -> u64 {
        (i64::from(self.upper_bound) - i64::from(self.lower_bound) + 1) as u64
            - self.holes.len() as u64
    }

    /// Whether some value of the domain lies in `[from, to]`.
    pub(crate) fn intersects(&self, from: i32, to: i32) -> bool {
        let mut candidate = i32::max(from, self.lower_bound);
        if candidate > i32::min(to, self.upper_bound) {
            return false;
        }

        let mut hole = self.holes.partition_point(|&hole| hole < candidate);
        while hole < self.holes.len() && self.holes[hole] == candidate {
            candidate += 1;
            hole += 1;
        }

        candidate <= to
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = i32> + '_ {
        (self.lower_bound..=self.upper_bound).filter(|value| self.holes.binary_search(value).is_err())
    }

    pub(crate) fn set_lower_bound(
        &mut self,
        value: i32,
    ) -> Result<EnumSet<DomainEvent>, EmptyDomain> {
        if value <= self.lower_bound {
            return Ok(EnumSet::empty());
        }
        if value > self.upper_bound {
            return Err(EmptyDomain);
        }

        // Holes are sorted and strictly inside the bounds, so the new bound can only land on a
        // run of consecutive holes directly following it.
        let mut new_lower_bound = value;
        let mut first_kept_hole = self.holes.partition_point(|&hole| hole < value);
        while first_kept_hole < self.holes.len() && self.holes[first_kept_hole] == new_lower_bound
        {
            new_lower_bound += 1;
            first_kept_hole += 1;
        }
        let _ = self.holes.drain(..first_kept_hole);
        self.lower_bound = new_lower_bound;

        let mut events = EnumSet::only(DomainEvent::LowerBound);
        if self.is_fixed() {
            events |= DomainEvent::Assign;
        }
        Ok(events)
    }

    pub(crate) fn set_upper_bound(
        &mut self,
        value: i32,
    ) -> Result<EnumSet<DomainEvent>, EmptyDomain> {
        if value >= self.upper_bound {
            return Ok(EnumSet::empty());
        }
        if value < self.lower_bound {
            return Err(EmptyDomain);
        }

        let mut new_upper_bound = value;
        let mut end_of_kept_holes = self.holes.partition_point(|&hole| hole <= value);
        while end_of_kept_holes > 0 && self.holes[end_of_kept_holes - 1] == new_upper_bound {
            new_upper_bound -= 1;
            end_of_kept_holes -= 1;
        }
        self.holes.truncate(end_of_kept_holes);
        self.upper_bound = new_upper_bound;

        let mut events = EnumSet::only(DomainEvent::UpperBound);
        if self.is_fixed() {
            events |= DomainEvent::Assign;
        }
        Ok(events)
    }

    pub(crate) fn remove_value(&mut self, value: i32) -> Result<EnumSet<DomainEvent>, EmptyDomain> {
        if !self.contains(value) {
            return Ok(EnumSet::empty());
        }
        if self.is_fixed() {
            return Err(EmptyDomain);
        }

        if value == self.lower_bound {
            self.set_lower_bound(value + 1)
        } else if value == self.upper_bound {
            self.set_upper_bound(value - 1)
        } else {
            let position = self.holes.partition_point(|&hole| hole < value);
            self.holes.insert(position, value);
            Ok(EnumSet::only(DomainEvent::Removal))
        }
    }

    /// Removes every value in `[from, to]` from the domain.
    pub(crate) fn remove_range(
        &mut self,
        from: i32,
        to: i32,
    ) -> Result<EnumSet<DomainEvent>, EmptyDomain> {
        let from = from.max(self.lower_bound);
        let to = to.min(self.upper_bound);
        if from > to {
            return Ok(EnumSet::empty());
        }

        if from == self.lower_bound && to == self.upper_bound {
            return Err(EmptyDomain);
        }
        if from == self.lower_bound {
            return self.set_lower_bound(to + 1);
        }
        if to == self.upper_bound {
            return self.set_upper_bound(from - 1);
        }

        let start = self.holes.partition_point(|&hole| hole < from);
        let end = self.holes.partition_point(|&hole| hole <= to);
        let num_present_before = (to - from + 1) as usize - (end - start);
        if num_present_before == 0 {
            return Ok(EnumSet::empty());
        }
        let _ = self.holes.splice(start..end, from..=to);

        Ok(EnumSet::only(DomainEvent::Removal))
    }
}
