use contracts::domain::a001_search_connector::SearchSourceConnector;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ConnectorListState {
    pub items: Vec<SearchSourceConnector>,
    pub sort_ascending: bool,
    pub is_loaded: bool,
}

impl Default for ConnectorListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            sort_ascending: true, // A-Z по умолчанию
            is_loaded: false,
        }
    }
}

impl ConnectorListState {
    /// Подключения, отсортированные по имени без учёта регистра
    pub fn sorted(&self) -> Vec<SearchSourceConnector> {
        let mut items = self.items.clone();
        items.sort_by_cached_key(|c| c.name.to_lowercase());
        if !self.sort_ascending {
            items.reverse();
        }
        items
    }
}

pub fn create_state() -> RwSignal<ConnectorListState> {
    RwSignal::new(ConnectorListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_search_connector::ConnectorType;
    use std::collections::BTreeMap;

    fn connector(id: i64, name: &str) -> SearchSourceConnector {
        SearchSourceConnector {
            id,
            name: name.to_string(),
            connector_type: ConnectorType::SerperApi,
            is_indexable: false,
            last_indexed_at: None,
            config: BTreeMap::new(),
            user_id: None,
            created_at: None,
        }
    }

    #[test]
    fn test_sorted_case_insensitive() {
        let state = ConnectorListState {
            items: vec![connector(1, "beta"), connector(2, "Alpha"), connector(3, "gamma")],
            ..Default::default()
        };
        let names: Vec<String> = state.sorted().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Alpha", "beta", "gamma"]);

        let desc = ConnectorListState {
            sort_ascending: false,
            ..state
        };
        let ids: Vec<i64> = desc.sorted().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
