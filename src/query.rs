//! Browse state carried in page URLs
//!
//! The directory keeps its state in the query string: `?type=fire,water&page=2`.
//! [`BrowseQuery`] parses that state leniently and renders the links a
//! presentation layer needs for type toggles and page navigation.

use crate::types::TypeName;
use url::form_urlencoded;

/// Selected types and page of a directory view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseQuery {
    /// 1-based page number
    pub page: u32,
    /// Selected types, in selection order
    pub types: Vec<TypeName>,
}

impl Default for BrowseQuery {
    fn default() -> Self {
        Self {
            page: 1,
            types: Vec::new(),
        }
    }
}

impl BrowseQuery {
    /// Build state from raw `page` and `type` query values.
    ///
    /// `page` is read like an integer prefix (`"3abc"` is page 3); anything
    /// else, including 0, means page 1. `type` is a comma-separated list in
    /// which empty entries are ignored.
    pub fn parse(page: Option<&str>, types: Option<&str>) -> Self {
        Self {
            page: page.map_or(1, parse_page),
            types: types.map(split_types).unwrap_or_default(),
        }
    }

    /// Build state from a full query string such as `type=fire&page=2`
    pub fn from_query_string(query: &str) -> Self {
        let mut page = None;
        let mut types = None;
        for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            match key.as_ref() {
                "page" => page = Some(value.into_owned()),
                "type" => types = Some(value.into_owned()),
                _ => {}
            }
        }
        Self::parse(page.as_deref(), types.as_deref())
    }

    /// Check if a type is selected
    pub fn is_selected(&self, type_name: &str) -> bool {
        self.types.iter().any(|t| t == type_name)
    }

    /// Select or deselect a type; changing the filter goes back to page 1
    #[must_use]
    pub fn toggle_type(&self, type_name: &str) -> Self {
        let types = if self.is_selected(type_name) {
            self.types
                .iter()
                .filter(|t| *t != type_name)
                .cloned()
                .collect()
        } else {
            let mut types = self.types.clone();
            types.push(type_name.to_string());
            types
        };
        Self { page: 1, types }
    }

    /// Drop the type filter and go back to page 1
    #[must_use]
    pub fn clear_types(&self) -> Self {
        Self::default()
    }

    /// Same filter on another page
    #[must_use]
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            types: self.types.clone(),
        }
    }

    /// Render as a root-relative URL: `/?type=fire%2Cwater&page=2`.
    ///
    /// Page 1 and an empty filter are left out, so the default view is `/`.
    pub fn to_url(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        if !self.types.is_empty() {
            query.append_pair("type", &self.types.join(","));
        }
        if self.page > 1 {
            query.append_pair("page", &self.page.to_string());
        }

        let query = query.finish();
        if query.is_empty() {
            "/".to_string()
        } else {
            format!("/?{query}")
        }
    }
}

fn parse_page(raw: &str) -> u32 {
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok().filter(|page| *page >= 1).unwrap_or(1)
}

fn split_types(raw: &str) -> Vec<TypeName> {
    raw.split(',')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
