//! Shared search infrastructure: the [`Search`] trait, [`SearchCommon`]
//! fields, and [`SortDirection`].

use std::str::FromStr;

/// A set of request parameters serialized as form or query pairs.
///
/// The vendor takes `application/x-www-form-urlencoded` bodies on POST and
/// ordinary query strings on GET, so one pair-based representation covers
/// both.
pub trait Params {
    /// Serializes these parameters as wire-name/value pairs.
    fn to_pairs(&self) -> Vec<(&'static str, String)>;
}

/// Trait implemented by all search builders. Provides pair serialization and
/// shared builder methods for pagination and sort order.
pub trait Search: Params {
    /// Returns a mutable reference to the common search fields.
    fn get_common(&mut self) -> &mut SearchCommon;

    /// Sets the page number (1-indexed).
    fn with_page(mut self, page: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = Some(page);
        self
    }

    /// Sets the number of results per page.
    fn with_per_page(mut self, per_page: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().per_page = Some(per_page);
        self
    }

    /// Sets the field to order results by (e.g. `created_at`).
    fn with_order(mut self, order: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().order = Some(order.to_string());
        self
    }

    /// Sets the sort direction (ascending or descending).
    fn with_sort_direction(mut self, sort_direction: SortDirection) -> Self
    where
        Self: Sized,
    {
        self.get_common().sort_direction = Some(sort_direction);
        self
    }
}

/// Sort order for search results.
#[derive(Clone, Copy, Default)]
pub enum SortDirection {
    /// Ascending order (oldest/smallest first). This is the API default.
    #[default]
    Asc,
    /// Descending order (newest/largest first).
    Desc,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortDirection::Asc => "asc",
                SortDirection::Desc => "desc",
            }
        )
    }
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

/// Fields shared by all search types: pagination and sort order.
#[derive(Clone, Default)]
pub struct SearchCommon {
    /// Page number (1-indexed). `None` uses the API default of 1.
    pub page: Option<i64>,
    /// Results per page. `None` uses the API default of 25.
    pub per_page: Option<i64>,
    /// Field to order by. `None` uses the API default of `created_at`.
    pub order: Option<String>,
    /// Sort direction. `None` uses the API default of ascending.
    pub sort_direction: Option<SortDirection>,
}

impl SearchCommon {
    /// Appends the common pagination parameters to the pair list.
    pub fn add_to_pairs(&self, pairs: &mut Vec<(&'static str, String)>) {
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page", per_page.to_string()));
        }
        if let Some(order) = &self.order {
            pairs.push(("order", order.clone()));
        }
        if let Some(sort_direction) = self.sort_direction {
            pairs.push(("order_asc_desc", sort_direction.to_string()));
        }
    }
}
