//! Filter/sort/paginate pipeline over normalized catalog items.
//!
//! Step order is fixed: partition by category, text search, exact type
//! filter, sort, page slice. Empty results are a valid terminal state; the
//! pipeline never errors.

use serde::{Deserialize, Serialize};

use crate::adapter::CatalogItem;

/// Page size of the customer catalog view.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Catalog category, the first partition step.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sugar,
    Sugarcane,
}

/// Exact-match type/variety filter with an `all` sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeFilter {
    All,
    Exact(String),
}

impl TypeFilter {
    pub fn from_param(raw: &str) -> Self {
        if raw == "all" {
            TypeFilter::All
        } else {
            TypeFilter::Exact(raw.to_string())
        }
    }

    fn matches(&self, item: &CatalogItem) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Exact(wanted) => item.details.type_key() == wanted,
        }
    }
}

/// The four supported sort orders. Anything else leaves the filtered order
/// untouched.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    PriceAsc,
    PriceDesc,
    RatingDesc,
    NameAsc,
    Unsorted,
}

impl SortOrder {
    pub fn from_key(key: &str) -> Self {
        match key {
            "price-asc" => SortOrder::PriceAsc,
            "price-desc" => SortOrder::PriceDesc,
            "rating-desc" => SortOrder::RatingDesc,
            "name-asc" => SortOrder::NameAsc,
            _ => SortOrder::Unsorted,
        }
    }
}

/// Query state of a catalog view.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQuery {
    pub category: Category,
    pub search: String,
    pub type_filter: TypeFilter,
    pub sort: SortOrder,
    /// 1-based page number; 0 is treated as 1.
    pub page: usize,
    pub page_size: usize,
}

impl CatalogQuery {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            search: String::new(),
            type_filter: TypeFilter::All,
            sort: SortOrder::Unsorted,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of pipeline output plus paging metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogPage {
    pub items: Vec<CatalogItem>,
    pub total_items: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

/// Run the full pipeline for one query.
pub fn run(items: &[CatalogItem], query: &CatalogQuery) -> CatalogPage {
    let filtered = filter(items, query);
    paginate(sort(filtered, query.sort), query)
}

/// Steps 1-3: category partition, text search, exact type filter.
pub fn filter(items: &[CatalogItem], query: &CatalogQuery) -> Vec<CatalogItem> {
    let needle = query.search.to_lowercase();

    items
        .iter()
        .filter(|item| match query.category {
            Category::Sugarcane => item.details.is_cane(),
            Category::Sugar => !item.details.is_cane(),
        })
        .filter(|item| matches_search(item, &needle))
        .filter(|item| query.type_filter.matches(item))
        .cloned()
        .collect()
}

fn matches_search(item: &CatalogItem, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    item.name.to_lowercase().contains(needle)
        || item.description.to_lowercase().contains(needle)
        || item.details.seller().to_lowercase().contains(needle)
}

/// Step 4: sort. Stable, so `Unsorted` genuinely preserves filtered order.
fn sort(mut items: Vec<CatalogItem>, order: SortOrder) -> Vec<CatalogItem> {
    match order {
        SortOrder::PriceAsc => items.sort_by_key(|i| i.price),
        SortOrder::PriceDesc => items.sort_by(|a, b| b.price.cmp(&a.price)),
        SortOrder::RatingDesc => items.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(core::cmp::Ordering::Equal)
        }),
        SortOrder::NameAsc => {
            items.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        }
        SortOrder::Unsorted => {}
    }
    items
}

/// Step 5: page slice plus metadata.
fn paginate(items: Vec<CatalogItem>, query: &CatalogQuery) -> CatalogPage {
    let page_size = query.page_size.max(1);
    let page = query.page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size);

    let start = (page - 1).saturating_mul(page_size).min(total_items);
    let end = start.saturating_add(page_size).min(total_items);

    CatalogPage {
        items: items[start..end].to_vec(),
        total_items,
        page,
        page_size,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::ItemDetails;
    use canemart_core::{QualityGrade, RecordId};
    use canemart_products::ProductType;

    fn cane_item(name: &str, price: u64, rating: f64, farmer: &str, variety: &str) -> CatalogItem {
        CatalogItem {
            id: RecordId::new(),
            name: name.to_string(),
            price,
            quantity: 100,
            unit: "ton".to_string(),
            description: format!("{name} description"),
            image: String::new(),
            rating,
            reviews: 10,
            origin: None,
            details: ItemDetails::Cane {
                variety: variety.to_string(),
                quality: QualityGrade::Standard,
                harvest_date: "2025-03-01".to_string(),
                farmer: farmer.to_string(),
            },
        }
    }

    fn sugar_item(name: &str, price: u64, producer: &str, product_type: ProductType) -> CatalogItem {
        CatalogItem {
            id: RecordId::new(),
            name: name.to_string(),
            price,
            quantity: 100,
            unit: "kg".to_string(),
            description: format!("{name} description"),
            image: String::new(),
            rating: 4.7,
            reviews: 20,
            origin: None,
            details: ItemDetails::Sugar {
                product_type,
                package_size: "25 kg".to_string(),
                producer: producer.to_string(),
                sugar_content: "99%".to_string(),
            },
        }
    }

    fn mixed() -> Vec<CatalogItem> {
        vec![
            cane_item("beta cane", 50, 4.5, "Rajesh", "CO-86032"),
            sugar_item("White Sugar", 45, "Sweet Mills", ProductType::White),
            cane_item("Alpha cane", 10, 4.2, "Suresh", "CO-0238"),
            sugar_item("brown sugar", 55, "Organic Mills", ProductType::Brown),
            cane_item("gamma cane", 30, 4.8, "Rajesh", "CO-86032"),
        ]
    }

    fn query(category: Category) -> CatalogQuery {
        CatalogQuery::new(category)
    }

    #[test]
    fn partition_keeps_only_the_requested_category() {
        let page = run(&mixed(), &query(Category::Sugarcane));
        assert_eq!(page.total_items, 3);
        assert!(page.items.iter().all(|i| i.details.is_cane()));

        let page = run(&mixed(), &query(Category::Sugar));
        assert_eq!(page.total_items, 2);
    }

    #[test]
    fn search_is_case_insensitive_over_name_description_and_seller() {
        let mut q = query(Category::Sugarcane);
        q.search = "RAJESH".to_string();
        let page = run(&mixed(), &q);
        assert_eq!(page.total_items, 2);

        q.search = "alpha".to_string();
        let page = run(&mixed(), &q);
        assert_eq!(page.total_items, 1);
        assert_eq!(page.items[0].name, "Alpha cane");
    }

    #[test]
    fn empty_search_matches_everything() {
        let mut q = query(Category::Sugar);
        q.search = String::new();
        assert_eq!(run(&mixed(), &q).total_items, 2);
    }

    #[test]
    fn type_filter_is_exact_unless_all() {
        let mut q = query(Category::Sugarcane);
        q.type_filter = TypeFilter::from_param("CO-86032");
        assert_eq!(run(&mixed(), &q).total_items, 2);

        q.type_filter = TypeFilter::from_param("all");
        assert_eq!(run(&mixed(), &q).total_items, 3);

        let mut q = query(Category::Sugar);
        q.type_filter = TypeFilter::from_param("brown");
        let page = run(&mixed(), &q);
        assert_eq!(page.total_items, 1);
        assert_eq!(page.items[0].name, "brown sugar");
    }

    #[test]
    fn price_asc_sorts_ascending() {
        let mut q = query(Category::Sugarcane);
        q.sort = SortOrder::from_key("price-asc");
        let prices: Vec<u64> = run(&mixed(), &q).items.iter().map(|i| i.price).collect();
        assert_eq!(prices, vec![10, 30, 50]);
    }

    #[test]
    fn name_asc_is_case_insensitive() {
        let mut q = query(Category::Sugarcane);
        q.sort = SortOrder::from_key("name-asc");
        let result = run(&mixed(), &q);
        let names: Vec<&str> = result
            .items
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["Alpha cane", "beta cane", "gamma cane"]);
    }

    #[test]
    fn unknown_sort_key_preserves_filtered_order() {
        let mut q = query(Category::Sugarcane);
        q.sort = SortOrder::from_key("newest-first");
        assert_eq!(q.sort, SortOrder::Unsorted);
        let result = run(&mixed(), &q);
        let names: Vec<&str> = result
            .items
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["beta cane", "Alpha cane", "gamma cane"]);
    }

    #[test]
    fn rating_desc_sorts_descending() {
        let mut q = query(Category::Sugarcane);
        q.sort = SortOrder::RatingDesc;
        let ratings: Vec<f64> = run(&mixed(), &q).items.iter().map(|i| i.rating).collect();
        assert_eq!(ratings, vec![4.8, 4.5, 4.2]);
    }

    #[test]
    fn pagination_slices_and_counts_pages() {
        let items: Vec<CatalogItem> = (0..13)
            .map(|i| cane_item(&format!("cane {i}"), i, 4.5, "f", "v"))
            .collect();

        let mut q = query(Category::Sugarcane);
        q.page_size = 6;

        q.page = 1;
        let page = run(&items, &q);
        assert_eq!(page.items.len(), 6);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_items, 13);

        q.page = 3;
        let page = run(&items, &q);
        assert_eq!(page.items.len(), 1);

        // Past the end: empty page, same metadata.
        q.page = 9;
        let page = run(&items, &q);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let mut q = query(Category::Sugarcane);
        q.search = "no such thing".to_string();
        let page = run(&mixed(), &q);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn any_items() -> impl Strategy<Value = Vec<CatalogItem>> {
            proptest::collection::vec(
                ("[a-zA-Z ]{0,12}", 0u64..10_000, 0u8..2),
                0..40,
            )
            .prop_map(|specs| {
                specs
                    .into_iter()
                    .map(|(name, price, kind)| {
                        if kind == 0 {
                            cane_item(&name, price, 4.5, "farmer", "v1")
                        } else {
                            sugar_item(&name, price, "mill", ProductType::White)
                        }
                    })
                    .collect()
            })
        }

        proptest! {
            /// Property: the returned page never exceeds the page size, and
            /// total_pages is exactly ceil(total_items / page_size).
            #[test]
            fn page_bounds_hold(
                items in any_items(),
                page in 0usize..10,
                page_size in 1usize..9,
                search in "[a-z]{0,4}",
            ) {
                let mut q = CatalogQuery::new(Category::Sugarcane);
                q.page = page;
                q.page_size = page_size;
                q.search = search;

                let out = run(&items, &q);
                prop_assert!(out.items.len() <= page_size);
                prop_assert_eq!(out.total_pages, out.total_items.div_ceil(page_size));
            }

            /// Property: filtering is idempotent; re-filtering the filtered
            /// set with the same predicates changes nothing.
            #[test]
            fn filter_is_idempotent(items in any_items(), search in "[a-z]{0,4}") {
                let mut q = CatalogQuery::new(Category::Sugar);
                q.search = search;

                let once = filter(&items, &q);
                let twice = filter(&once, &q);
                prop_assert_eq!(once, twice);
            }

            /// Property: sorting by price ascending yields a non-decreasing
            /// price sequence.
            #[test]
            fn price_asc_is_sorted(items in any_items()) {
                let mut q = CatalogQuery::new(Category::Sugar);
                q.sort = SortOrder::PriceAsc;
                q.page_size = 1 << 16;

                let out = run(&items, &q);
                prop_assert!(out.items.windows(2).all(|w| w[0].price <= w[1].price));
            }
        }
    }
}
