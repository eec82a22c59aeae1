/// Builder for a filtered/sorted/limited read over one backend table.
///
/// Renders to PostgREST query parameters: equality and range filters are
/// `column=op.value` pairs, disjunctions go through the `or` parameter,
/// embedded resources ride on `select`. Values are percent-encoded by the
/// HTTP client when the request is built, not here.
#[derive(Debug, Clone, Default)]
pub struct Select {
    columns: Option<String>,
    filters: Vec<(String, String)>,
    or: Option<String>,
    order: Option<String>,
    limit: Option<usize>,
}

impl Select {
    pub fn new() -> Self {
        Self::default()
    }

    /// Column list for the `select` parameter. Accepts embedded resources,
    /// e.g. `"*,stores(name,address,rating)"`.
    pub fn columns(mut self, columns: impl Into<String>) -> Self {
        self.columns = Some(columns.into());
        self
    }

    /// Equality filter: `column = value`.
    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters
            .push((column.to_string(), format!("eq.{}", value.to_string())));
        self
    }

    /// Lower-bound filter: `column >= value`.
    pub fn gte(mut self, column: &str, value: impl ToString) -> Self {
        self.filters
            .push((column.to_string(), format!("gte.{}", value.to_string())));
        self
    }

    /// Disjunction of filters, rendered as `or=(expr)`. The expression uses
    /// the backend's filter grammar verbatim.
    pub fn or(mut self, expr: impl Into<String>) -> Self {
        self.or = Some(expr.into());
        self
    }

    pub fn order_asc(mut self, column: &str) -> Self {
        self.order = Some(format!("{column}.asc"));
        self
    }

    pub fn order_desc(mut self, column: &str) -> Self {
        self.order = Some(format!("{column}.desc"));
        self
    }

    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Render to query pairs in a stable order: select, filters, or, order,
    /// limit.
    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(ref columns) = self.columns {
            pairs.push(("select".to_string(), columns.clone()));
        }
        for (column, filter) in &self.filters {
            pairs.push((column.clone(), filter.clone()));
        }
        if let Some(ref expr) = self.or {
            pairs.push(("or".to_string(), format!("({expr})")));
        }
        if let Some(ref order) = self.order {
            pairs.push(("order".to_string(), order.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs
    }
}
