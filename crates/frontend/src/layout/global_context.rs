use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Clients,
    Projects,
    Sales,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Dashboard, Page::Clients, Page::Projects, Page::Sales];

    pub fn key(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Clients => "clients",
            Page::Projects => "projects",
            Page::Sales => "sales",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Clients => "Clients",
            Page::Projects => "Projects",
            Page::Sales => "Sales",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Dashboard => "home",
            Page::Clients => "users",
            Page::Projects => "folder",
            Page::Sales => "dollar-sign",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
struct PageQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    page: Option<String>,
}

/// Reads `?page=` from a query string; unknown or missing keys give `None`.
pub fn page_from_query(search: &str) -> Option<Page> {
    let query: PageQuery = serde_qs::from_str(search.trim_start_matches('?')).ok()?;
    query.page.as_deref().and_then(Page::from_key)
}

pub fn query_for_page(page: Page) -> String {
    let query = PageQuery {
        page: Some(page.key().to_string()),
    };
    format!("?{}", serde_qs::to_string(&query).unwrap_or_default())
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    /// Only meaningful while the sidebar is a drawer.
    pub sidebar_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::default()),
            sidebar_open: RwSignal::new(false),
        }
    }

    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(page) = page_from_query(&search) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = query_for_page(this.active.get());
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    /// `close_drawer` is true when the sidebar is currently an overlay.
    pub fn open_page(&self, page: Page, close_drawer: bool) {
        log::debug!("open page '{}'", page.key());
        self.active.set(page);
        if close_drawer {
            self.sidebar_open.set(false);
        }
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }

    pub fn close_sidebar(&self) {
        self.sidebar_open.set(false);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_keys_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_key(page.key()), Some(page));
        }
        assert_eq!(Page::from_key("reports"), None);
    }

    #[test]
    fn test_page_from_query() {
        assert_eq!(page_from_query("?page=sales"), Some(Page::Sales));
        assert_eq!(page_from_query("page=clients&x=1"), Some(Page::Clients));
        assert_eq!(page_from_query(""), None);
        assert_eq!(page_from_query("?page=unknown"), None);
    }

    #[test]
    fn test_query_for_page() {
        assert_eq!(query_for_page(Page::Projects), "?page=projects");
    }
}
