//! Lookups and filters over a [`Catalog`](crate::Catalog).
//!
//! Each query is a pure scan of one collection with a single predicate bound
//! to a fixed field path. Results keep source order. There is no error path:
//! anything that cannot match, including unparsable parameters and records
//! missing the field, simply does not match.

mod case;
mod operations;
pub mod predicates;
mod years;

pub use case::CaseFolded;
pub use years::{YearRange, parse_leading_int};

/// Result of a catalog query: either data or an explicit "nothing matched".
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome<T> {
    Found(T),
    Empty,
}

impl<T> QueryOutcome<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, QueryOutcome::Found(_))
    }

    pub fn found(self) -> Option<T> {
        match self {
            QueryOutcome::Found(value) => Some(value),
            QueryOutcome::Empty => None,
        }
    }
}

impl<T> QueryOutcome<Vec<T>> {
    /// An empty match list becomes [`QueryOutcome::Empty`].
    pub fn from_matches(matches: Vec<T>) -> Self {
        if matches.is_empty() {
            QueryOutcome::Empty
        } else {
            QueryOutcome::Found(matches)
        }
    }

    /// Number of matches; zero for `Empty`.
    pub fn len(&self) -> usize {
        match self {
            QueryOutcome::Found(matches) => matches.len(),
            QueryOutcome::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> From<Option<T>> for QueryOutcome<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => QueryOutcome::Found(value),
            None => QueryOutcome::Empty,
        }
    }
}

/// Keep the items of `items` accepted by `predicate`, in order.
pub(crate) fn select<'a, T>(
    items: &'a [T],
    predicate: impl Fn(&T) -> bool,
) -> QueryOutcome<Vec<&'a T>> {
    QueryOutcome::from_matches(
        items.iter().filter(|item| predicate(item)).collect(),
    )
}
