//! Row filters and ordering.

use smallvec::SmallVec;

/// Equality filter on one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub column: &'static str,
    pub value: String,
}

impl Filter {
    pub fn eq(column: &'static str, value: impl ToString) -> Self {
        Self {
            column,
            value: value.to_string(),
        }
    }

    fn to_pair(&self) -> (String, String) {
        (self.column.to_string(), format!("eq.{}", self.value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Filters, ordering and limit for a select.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    filters: SmallVec<[Filter; 2]>,
    order: Option<(&'static str, Direction)>,
    limit: Option<usize>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    #[must_use]
    pub fn eq(self, column: &'static str, value: impl ToString) -> Self {
        self.filter(Filter::eq(column, value))
    }

    #[must_use]
    pub fn order_by(mut self, column: &'static str, direction: Direction) -> Self {
        self.order = Some((column, direction));
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// Query string pairs in the store's REST syntax.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("select".to_string(), "*".to_string())];

        pairs.extend(self.filters.iter().map(Filter::to_pair));

        if let Some((column, direction)) = self.order {
            pairs.push((
                "order".to_string(),
                format!("{column}.{}", direction.as_str()),
            ));
        }

        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }

        pairs
    }
}

/// Query string pairs for a filter on its own, as used by update and delete.
pub(crate) fn filter_pairs(filter: &Filter) -> Vec<(String, String)> {
    vec![filter.to_pair()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn builds_rest_query_string_pairs() {
        let query = Query::new()
            .eq("photo_id", "abc")
            .order_by("created_at", Direction::Desc)
            .limit(1);

        assert_eq!(
            query.to_pairs(),
            vec![
                pair("select", "*"),
                pair("photo_id", "eq.abc"),
                pair("order", "created_at.desc"),
                pair("limit", "1"),
            ]
        );
    }

    #[test]
    fn empty_query_selects_everything() {
        assert_eq!(Query::new().to_pairs(), vec![pair("select", "*")]);
    }
}
