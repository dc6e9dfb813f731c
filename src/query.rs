//! Listing pipeline: turns raw query parameters into a validated [`ListQuery`]
//! and applies it to a snapshot of the store.
//!
//! Stages run in a fixed order: status filter, category filter, free-text
//! filter, stable sort, then pagination. Pagination metadata always reflects
//! the filtered (pre-pagination) result set.

use crate::error::{ItemDeskError, Result};
use crate::model::{Item, ItemCategory, ItemStatus};
use crate::search::TextQuery;
use crate::validation;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::str::FromStr;

/// Raw, unvalidated list parameters as they arrive on the query string.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    pub q: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListParams {
    /// Collects decoded query pairs. A key given more than once is treated as
    /// absent; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut seen: HashMap<String, Option<String>> = HashMap::new();
        for (key, value) in pairs {
            seen.entry(key)
                .and_modify(|existing| *existing = None)
                .or_insert(Some(value));
        }
        let mut take = |key: &str| seen.remove(key).flatten();

        Self {
            q: take("q"),
            status: take("status"),
            category: take("category"),
            sort: take("sort"),
            order: take("order"),
            page: take("page"),
            limit: take("limit"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    CreatedAt,
    Name,
    Status,
}

impl FromStr for SortField {
    type Err = ItemDeskError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "createdAt" => Ok(SortField::CreatedAt),
            "name" => Ok(SortField::Name),
            "status" => Ok(SortField::Status),
            _ => Err(ItemDeskError::validation("Invalid sort field")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortOrder {
    type Err = ItemDeskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(ItemDeskError::validation("Invalid order")),
        }
    }
}

/// A validated listing request.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub text: TextQuery,
    pub status: Option<ItemStatus>,
    pub category: Option<ItemCategory>,
    pub sort: SortField,
    pub order: SortOrder,
    pub page: u32,
    pub limit: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            text: TextQuery::default(),
            status: None,
            category: None,
            sort: SortField::default(),
            order: SortOrder::default(),
            page: validation::DEFAULT_PAGE,
            limit: validation::DEFAULT_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: u32,
    pub limit: u32,
    pub total: usize,
    pub total_pages: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub data: Vec<Item>,
    pub meta: PageMeta,
}

/// Treats absent and blank parameters the same way.
fn present(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl ListQuery {
    /// Validates raw parameters. Checks run status, category, sort, order;
    /// the first failure wins.
    pub fn from_params(params: &ListParams) -> Result<Self> {
        let status = present(&params.status)
            .map(str::parse::<ItemStatus>)
            .transpose()?;
        let category = present(&params.category)
            .map(str::parse::<ItemCategory>)
            .transpose()?;
        let sort = present(&params.sort)
            .map(str::parse::<SortField>)
            .transpose()?
            .unwrap_or_default();
        let order = present(&params.order)
            .map(str::parse::<SortOrder>)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            text: TextQuery::new(params.q.as_deref().unwrap_or_default()),
            status,
            category,
            sort,
            order,
            page: validation::parse_page(params.page.as_deref()),
            limit: validation::parse_limit(params.limit.as_deref()),
        })
    }

    pub fn matches(&self, item: &Item) -> bool {
        self.status.is_none_or(|s| item.status == s)
            && self.category.is_none_or(|c| item.category == c)
            && self.text.matches(item)
    }

    fn compare(&self, a: &Item, b: &Item) -> Ordering {
        let ordering = match self.sort {
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortField::Status => a.status.as_str().cmp(b.status.as_str()),
        };
        match self.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }

    /// Filters, sorts and paginates a snapshot of the store.
    pub fn run(&self, mut items: Vec<Item>) -> Page {
        items.retain(|item| self.matches(item));
        // Stable, so ties keep store order.
        items.sort_by(|a, b| self.compare(a, b));

        let total = items.len();
        let limit = self.limit.max(1) as usize;
        let start = (self.page.max(1) as usize - 1) * limit;
        let data: Vec<Item> = items.into_iter().skip(start).take(limit).collect();

        Page {
            data,
            meta: PageMeta {
                page: self.page,
                limit: self.limit,
                total,
                total_pages: total.div_ceil(limit).max(1),
            },
        }
    }
}
