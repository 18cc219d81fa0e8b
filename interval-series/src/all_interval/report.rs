use std::fmt::Display;

use crate::containers::HashSet;

/// The number of entries on one line of the report.
const ENTRIES_PER_LINE: usize = 10;

/// A series found by the solver: the values of the primary variables and the distances between
/// consecutive values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeriesSolution {
    values: Vec<i32>,
    distances: Vec<i32>,
}

impl SeriesSolution {
    pub fn new(values: Vec<i32>, distances: Vec<i32>) -> Self {
        SeriesSolution { values, distances }
    }

    pub fn size(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn distances(&self) -> &[i32] {
        &self.distances
    }

    /// Checks that the values are a permutation of `{0, .., m - 1}`, that every distance is the
    /// absolute difference of its two neighbours, and that the distances are a permutation of
    /// `{1, .., m - 1}`.
    pub fn is_valid(&self) -> bool {
        let m = self.values.len();
        if m == 0 || self.distances.len() != m - 1 {
            return false;
        }

        let distances_match = self
            .values
            .windows(2)
            .zip(&self.distances)
            .all(|(pair, &distance)| (pair[1] - pair[0]).abs() == distance);

        distances_match
            && is_permutation_of(&self.values, 0..m as i32)
            && is_permutation_of(&self.distances, 1..m as i32)
    }
}

fn is_permutation_of(values: &[i32], range: std::ops::Range<i32>) -> bool {
    let mut seen: HashSet<i32> = HashSet::default();
    values.len() == range.len()
        && values
            .iter()
            .all(|&value| range.contains(&value) && seen.insert(value))
}

impl Display for SeriesSolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "All interval series({})", self.size())?;
        write!(f, "\t")?;
        for (index, (value, distance)) in self.values.iter().zip(&self.distances).enumerate() {
            write!(f, "{value} <{distance}> ")?;
            if index % ENTRIES_PER_LINE == ENTRIES_PER_LINE - 1 {
                write!(f, "\n\t")?;
            }
        }
        if let Some(last) = self.values.last() {
            write!(f, "{last}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_of_a_short_series() {
        let series = SeriesSolution::new(vec![0, 3, 1, 2], vec![3, 2, 1]);

        assert_eq!(
            "All interval series(4)\n\t0 <3> 3 <2> 1 <1> 2",
            series.to_string()
        );
    }

    #[test]
    fn report_of_a_single_value() {
        let series = SeriesSolution::new(vec![0], vec![]);

        assert_eq!("All interval series(1)\n\t0", series.to_string());
    }

    #[test]
    fn report_breaks_after_every_tenth_entry() {
        // 0, 11, 1, 10, 2, 9, 3, 8, 4, 7, 5, 6
        let values = vec![0, 11, 1, 10, 2, 9, 3, 8, 4, 7, 5, 6];
        let distances = values
            .windows(2)
            .map(|pair: &[i32]| (pair[1] - pair[0]).abs())
            .collect::<Vec<_>>();
        let series = SeriesSolution::new(values, distances);

        let report = series.to_string();
        let lines = report.lines().collect::<Vec<_>>();

        assert!(series.is_valid());
        assert_eq!(
            vec![
                "All interval series(12)",
                "\t0 <11> 11 <10> 1 <9> 10 <8> 2 <7> 9 <6> 3 <5> 8 <4> 4 <3> 7 <2> ",
                "\t5 <1> 6",
            ],
            lines
        );
    }

    #[test]
    fn exactly_ten_entries_end_on_an_empty_continuation_line() {
        let values = vec![0, 10, 1, 9, 2, 8, 3, 7, 4, 6, 5];
        let distances = values
            .windows(2)
            .map(|pair: &[i32]| (pair[1] - pair[0]).abs())
            .collect::<Vec<_>>();
        let series = SeriesSolution::new(values, distances);

        assert!(series.to_string().ends_with("6 <1> \n\t5"));
    }

    #[test]
    fn repeated_values_are_invalid() {
        let series = SeriesSolution::new(vec![0, 1, 0], vec![1, 1]);

        assert!(!series.is_valid());
    }

    #[test]
    fn distances_have_to_match_the_values() {
        let series = SeriesSolution::new(vec![0, 2, 1], vec![1, 2]);

        assert!(!series.is_valid());
    }
}
