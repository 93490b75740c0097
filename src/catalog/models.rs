//! Project catalog data model
//!
//! Records are built once at startup and never mutated. Only `slug`,
//! `title`, `description`, `category` and `tags` take part in queries; the
//! remaining fields are carried through for the rendering layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed classification of a project case study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    CustomerAnalytics,
    PredictiveModeling,
    BusinessIntelligence,
    DataStrategy,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::CustomerAnalytics,
        Category::PredictiveModeling,
        Category::BusinessIntelligence,
        Category::DataStrategy,
    ];

    /// Wire value, e.g. `customer-analytics`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::CustomerAnalytics => "customer-analytics",
            Category::PredictiveModeling => "predictive-modeling",
            Category::BusinessIntelligence => "business-intelligence",
            Category::DataStrategy => "data-strategy",
        }
    }

    /// Human-readable label shown in the filter bar.
    pub fn label(&self) -> &'static str {
        match self {
            Category::CustomerAnalytics => "Customer Analytics",
            Category::PredictiveModeling => "Predictive Modeling",
            Category::BusinessIntelligence => "Business Intelligence",
            Category::DataStrategy => "Data Strategy",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category '{s}'"))
    }
}

/// Category restriction applied by a catalog query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const ALL_SENTINEL: &'static str = "all";

    /// Parse a filter value coming from a query string or CLI flag.
    ///
    /// Anything that is neither `all` nor a known category means no
    /// restriction. Use [`CategoryFilter::parse_strict`] when unknown values
    /// must be rejected instead.
    pub fn parse_lenient(value: &str) -> Self {
        Self::parse_strict(value).unwrap_or_else(|_| {
            tracing::debug!(
                "Unrecognized category filter '{}', applying no restriction",
                value
            );
            CategoryFilter::All
        })
    }

    pub fn parse_strict(value: &str) -> Result<Self, String> {
        let value = value.trim();
        if value.is_empty() || value == Self::ALL_SENTINEL {
            return Ok(CategoryFilter::All);
        }
        value.parse().map(CategoryFilter::Only)
    }

    pub fn admits(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => *only == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(Self::ALL_SENTINEL),
            CategoryFilter::Only(category) => fmt::Display::fmt(category, f),
        }
    }
}

/// Entry of the category listing served to the filter UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// The `all` sentinel followed by every category, in display order.
pub fn category_options() -> Vec<CategoryOption> {
    std::iter::once(CategoryOption {
        value: CategoryFilter::ALL_SENTINEL,
        label: "All Projects",
    })
    .chain(Category::ALL.iter().map(|c| CategoryOption {
        value: c.as_str(),
        label: c.label(),
    }))
    .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolCategory {
    Language,
    Framework,
    Database,
    Visualization,
    Cloud,
    Tools,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    pub icon: String,
    pub category: ToolCategory,
}

/// A headline outcome of a project, e.g. `Marketing ROI +35%`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectResult {
    pub metric: String,
    pub value: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
    pub rating: u8,
}

/// One project case study in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub excerpt: String,
    pub category: Category,
    pub image: String,
    pub tags: Vec<String>,
    pub client: String,
    pub duration: String,
    pub date: NaiveDate,
    pub challenge: String,
    pub solution: String,
    #[serde(default)]
    pub results: Vec<ProjectResult>,
    #[serde(default)]
    pub tools: Vec<Tool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testimonial: Option<Testimonial>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gallery: Vec<String>,
}

/// Compact view of a record used for "next project" links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub image: String,
}

impl From<&ProjectRecord> for ProjectSummary {
    fn from(record: &ProjectRecord) -> Self {
        Self {
            slug: record.slug.clone(),
            title: record.title.clone(),
            excerpt: record.excerpt.clone(),
            image: record.image.clone(),
        }
    }
}
