//! Conjunctive product filter folded into an `sqlx::QueryBuilder`.
//!
//! Each supplied search term becomes one `<column> LIKE ?` predicate with its pattern bound as
//! a parameter. Terms that are absent or blank are never pushed, so a filter with only a name
//! constrains only the name.

use sqlx::{QueryBuilder, Sqlite};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    ProductNameLike(String),
    CategoryNameLike(String),
}

impl Predicate {
    pub fn column(&self) -> &'static str {
        match self {
            Predicate::ProductNameLike(_) => "products.name",
            Predicate::CategoryNameLike(_) => "categories.name",
        }
    }

    /// Substring pattern bound for the `LIKE` clause.
    pub fn pattern(&self) -> String {
        match self {
            Predicate::ProductNameLike(term) | Predicate::CategoryNameLike(term) => {
                format!("%{}%", term)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    predicates: Vec<Predicate>,
}

fn present(term: Option<&str>) -> Option<String> {
    term.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, term: Option<&str>) -> Self {
        if let Some(t) = present(term) {
            self.predicates.push(Predicate::ProductNameLike(t));
        }
        self
    }

    pub fn category(mut self, term: Option<&str>) -> Self {
        if let Some(t) = present(term) {
            self.predicates.push(Predicate::CategoryNameLike(t));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Appends ` WHERE p1 AND p2 ...` to `qb`. An empty filter appends nothing.
    pub fn push_where(&self, qb: &mut QueryBuilder<'_, Sqlite>) {
        for (idx, predicate) in self.predicates.iter().enumerate() {
            qb.push(if idx == 0 { " WHERE " } else { " AND " });
            qb.push(predicate.column());
            qb.push(" LIKE ");
            qb.push_bind(predicate.pattern());
        }
    }
}
