//! Навигация по страницам панели подключений

use std::rc::Rc;

/// Переход на другую страницу приложения
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Навигация через `leptos_router`.
///
/// Создавать внутри компонента, расположенного под `<Router>`.
#[derive(Clone)]
pub struct RouterNavigator {
    navigate: Rc<dyn Fn(&str)>,
}

impl RouterNavigator {
    pub fn new() -> Self {
        let navigate = leptos_router::hooks::use_navigate();
        Self {
            navigate: Rc::new(move |path: &str| navigate(path, Default::default())),
        }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, path: &str) {
        log::debug!("navigate to {}", path);
        (self.navigate)(path);
    }
}

/// Список подключений рабочего пространства
pub fn connectors_path(workspace_id: &str) -> String {
    format!("/dashboard/{}/connectors", workspace_id)
}

/// Каталог доступных подключений
pub fn add_connector_path(workspace_id: &str) -> String {
    format!("{}/add", connectors_path(workspace_id))
}

/// Форма подключения Serper API
pub fn add_serper_path(workspace_id: &str) -> String {
    format!("{}/serper-api", add_connector_path(workspace_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(connectors_path("42"), "/dashboard/42/connectors");
        assert_eq!(add_connector_path("42"), "/dashboard/42/connectors/add");
        assert_eq!(
            add_serper_path("42"),
            "/dashboard/42/connectors/add/serper-api"
        );
    }
}
