// src/screens.rs

//! View-models das telas. Nenhuma tela guarda cache: `open`/`refresh`
//! sempre buscam dados novos na API.

pub mod clients;
pub mod dashboard;
pub mod employees;
pub mod line_item_editor;
pub mod login;
pub mod products;
pub mod request_creator;
pub mod request_detail;
pub mod request_editor;
pub mod request_lister;
pub mod users;

/// Próximo destino de navegação devolvido pelas telas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    RequestCreator,
    LineItemEditor { request_id: i64 },
    RequestEditor { request_id: i64 },
    RequestLister,
    RequestHistory,
    RequestDetail { request_id: i64 },
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn apply(self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

/// Busca sem diferenciar maiúsculas.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.trim().to_lowercase())
}
