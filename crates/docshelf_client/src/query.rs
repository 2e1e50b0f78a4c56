use crate::CategoryId;

/// Filter for the document listing endpoint. `q` carries the search
/// text only when non-empty; `category` only when one is committed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentQuery {
    pub q: Option<String>,
    pub category: Option<CategoryId>,
}

impl DocumentQuery {
    /// Builds a query from raw UI state, dropping the parts the server
    /// should not see: an empty search string and an absent category.
    pub fn from_inputs(search: String, category: Option<CategoryId>) -> Self {
        Self {
            q: (!search.is_empty()).then_some(search),
            category,
        }
    }

    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(q) = &self.q {
            params.push(("q", q.clone()));
        }
        if let Some(category) = self.category {
            params.push(("category", category.to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::DocumentQuery;

    #[test]
    fn empty_inputs_produce_no_params() {
        let query = DocumentQuery::from_inputs(String::new(), None);
        assert_eq!(query, DocumentQuery::default());
        assert!(query.params().is_empty());
    }

    #[test]
    fn raw_search_text_is_passed_through() {
        let query = DocumentQuery::from_inputs(" rust ".to_string(), Some(3));
        assert_eq!(
            query.params(),
            vec![("q", " rust ".to_string()), ("category", "3".to_string())]
        );
    }
}
