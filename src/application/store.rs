//! Shared application state.

use std::future::Future;

use tracing::{debug, info, warn};

use crate::application::services::ProductFilter;
use crate::domain::entities::{Category, Product};
use crate::domain::errors::ApiError;
use crate::domain::screen::Screen;

/// Notification text for a failed initial product load.
pub const INITIAL_LOAD_FAILED: &str = "Failed to fetch initial product data.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum InitialLoad {
    #[default]
    NotStarted,
    Pending,
    Finished,
}

/// Result of the one-off initial product load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitialLoadOutcome {
    /// The products were stored; carries how many.
    Loaded(usize),
    /// The caller should raise a notification with this message.
    Failed(&'static str),
    /// The load had already completed; the result was ignored.
    Ignored,
}

/// Single source of truth for navigation, filters, products and the shared
/// loading/error flags.
///
/// Owned by the UI loop and handed to views by reference.
#[derive(Debug, Clone, Default)]
pub struct AppStore {
    screen: Screen,
    search_term: String,
    category_filter: Option<Category>,
    loading: bool,
    error: Option<String>,
    products: Vec<Product>,
    initial_load: InitialLoad,
}

impl AppStore {
    /// Creates an empty store on the dashboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial screen.
    #[must_use]
    pub fn with_screen(mut self, screen: Screen) -> Self {
        self.screen = screen;
        self
    }

    /// Returns the current screen.
    #[must_use]
    pub const fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Switches screen.
    pub fn set_screen(&mut self, screen: Screen) {
        debug!(from = %self.screen, to = %screen, "Screen change");
        self.screen = screen;
    }

    /// Sets the screen from a free-form identifier.
    pub fn set_screen_id(&mut self, id: &str) {
        self.set_screen(Screen::from_id(id));
    }

    /// Returns the product search term.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Sets the product search term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Returns the category filter.
    #[must_use]
    pub const fn category_filter(&self) -> Option<Category> {
        self.category_filter
    }

    /// Sets or clears the category filter.
    pub fn set_category_filter(&mut self, category: Option<Category>) {
        self.category_filter = category;
    }

    /// Returns whether any fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Sets the shared loading flag.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Returns the shared error message.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Sets or clears the shared error message.
    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    /// Marks the start of a fetch cycle: loading on, error cleared.
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Ends a fetch cycle. Loading is always cleared; on failure `message`
    /// becomes the shared error.
    pub fn finish_fetch<T>(&mut self, result: &Result<T, ApiError>, message: &str) {
        self.loading = false;
        if let Err(e) = result {
            warn!(error = %e, "{message}");
            self.error = Some(message.to_string());
        }
    }

    /// Runs `fetch` between [`Self::begin_fetch`] and [`Self::finish_fetch`].
    pub async fn run_fetch<T, F>(&mut self, message: &str, fetch: F) -> Option<T>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        self.begin_fetch();
        let result = fetch.await;
        self.finish_fetch(&result, message);
        result.ok()
    }

    /// Returns every known product in insertion order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Appends a product. Ids are not checked for uniqueness.
    pub fn add_product(&mut self, product: Product) {
        debug!(id = %product.id(), name = %product.name(), "Adding product");
        self.products.push(product);
    }

    /// Returns the filter built from the current search term and category.
    #[must_use]
    pub fn product_filter(&self) -> ProductFilter {
        ProductFilter::new(&self.search_term, self.category_filter)
    }

    /// Products matching the current search term and category filter.
    #[must_use]
    pub fn filtered_products(&self) -> Vec<&Product> {
        self.product_filter().apply(&self.products)
    }

    /// Claims the initial product load. Returns true exactly once.
    pub fn begin_initial_load(&mut self) -> bool {
        if self.initial_load != InitialLoad::NotStarted {
            return false;
        }
        self.initial_load = InitialLoad::Pending;
        true
    }

    /// Applies the initial product load. Failures never touch the shared
    /// error flag and leave the collection as it was.
    pub fn complete_initial_load(
        &mut self,
        result: Result<Vec<Product>, ApiError>,
    ) -> InitialLoadOutcome {
        if self.initial_load != InitialLoad::Pending {
            return InitialLoadOutcome::Ignored;
        }
        self.initial_load = InitialLoad::Finished;

        match result {
            Ok(products) => {
                info!(count = products.len(), "Initial products loaded");
                let count = products.len();
                // Products created while the request was in flight stay after
                // the fetched ones.
                let created = std::mem::replace(&mut self.products, products);
                self.products.extend(created);
                InitialLoadOutcome::Loaded(count)
            }
            Err(e) => {
                warn!(error = %e, "Initial product load failed");
                InitialLoadOutcome::Failed(INITIAL_LOAD_FAILED)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::product;

    fn sample() -> Vec<Product> {
        vec![
            product("1", "Spiced Turmeric Latte", Category::Beverages),
            product("2", "Coconut Quinoa Bites", Category::Snacks),
        ]
    }

    #[test]
    fn test_defaults() {
        let store = AppStore::new();
        assert_eq!(store.screen(), &Screen::Dashboard);
        assert_eq!(store.search_term(), "");
        assert_eq!(store.category_filter(), None);
        assert!(!store.is_loading());
        assert!(store.error().is_none());
        assert!(store.products().is_empty());
    }

    #[test]
    fn test_add_product_appends_last() {
        let mut store = AppStore::new();
        for p in sample() {
            store.add_product(p);
        }
        let before: Vec<_> = store.products().to_vec();

        store.add_product(product("3", "Green Tea Yogurt", Category::Dairy));

        assert_eq!(store.products().len(), before.len() + 1);
        assert_eq!(&store.products()[..before.len()], before.as_slice());
        assert_eq!(store.products().last().unwrap().name(), "Green Tea Yogurt");
    }

    #[test]
    fn test_duplicate_ids_are_accepted() {
        let mut store = AppStore::new();
        store.add_product(product("7", "First", Category::Dairy));
        store.add_product(product("7", "Second", Category::Dairy));

        assert_eq!(store.products().len(), 2);
        assert_eq!(store.products()[0].id(), store.products()[1].id());
    }

    #[test]
    fn test_unknown_screen_id_is_stored_verbatim() {
        let mut store = AppStore::new();
        store.set_screen_id("settings");
        assert_eq!(store.screen(), &Screen::Unknown("settings".to_string()));
    }

    #[test]
    fn test_filtered_products_follow_store_state() {
        let mut store = AppStore::new();
        for p in sample() {
            store.add_product(p);
        }

        store.set_search_term("latte");
        let names: Vec<_> = store.filtered_products().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Spiced Turmeric Latte"]);

        store.set_search_term("");
        store.set_category_filter(Some(Category::Snacks));
        let names: Vec<_> = store.filtered_products().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Coconut Quinoa Bites"]);
        assert_eq!(store.products().len(), 2);
    }

    #[tokio::test]
    async fn test_run_fetch_resets_loading_on_failure() {
        let mut store = AppStore::new();
        store.set_error(Some("stale".to_string()));

        let result: Option<u32> = store
            .run_fetch("Failed to fetch dashboard data.", async {
                Err(ApiError::network("offline"))
            })
            .await;

        assert!(result.is_none());
        assert!(!store.is_loading());
        assert_eq!(store.error(), Some("Failed to fetch dashboard data."));
    }

    #[tokio::test]
    async fn test_run_fetch_success_clears_error() {
        let mut store = AppStore::new();
        store.set_error(Some("stale".to_string()));

        let result = store.run_fetch("unused", async { Ok(5) }).await;

        assert_eq!(result, Some(5));
        assert!(!store.is_loading());
        assert!(store.error().is_none());
    }

    #[test]
    fn test_initial_load_runs_once() {
        let mut store = AppStore::new();
        assert!(store.begin_initial_load());
        assert!(!store.begin_initial_load());

        assert_eq!(store.complete_initial_load(Ok(sample())), InitialLoadOutcome::Loaded(2));
        assert_eq!(
            store.complete_initial_load(Ok(Vec::new())),
            InitialLoadOutcome::Ignored
        );
        assert_eq!(store.products().len(), 2);
    }

    #[test]
    fn test_initial_load_failure_only_notifies() {
        let mut store = AppStore::new();
        store.begin_initial_load();

        let outcome = store.complete_initial_load(Err(ApiError::status(500, "down")));

        assert_eq!(outcome, InitialLoadOutcome::Failed(INITIAL_LOAD_FAILED));
        assert!(store.error().is_none());
        assert!(store.products().is_empty());
    }

    #[test]
    fn test_products_created_during_initial_load_are_kept() {
        let mut store = AppStore::new();
        store.begin_initial_load();
        store.add_product(product("99", "Tropical Fizz", Category::Beverages));

        store.complete_initial_load(Ok(sample()));

        let names: Vec<_> = store.products().iter().map(Product::name).collect();
        assert_eq!(
            names,
            vec!["Spiced Turmeric Latte", "Coconut Quinoa Bites", "Tropical Fizz"]
        );
    }
}
