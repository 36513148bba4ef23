//! Items View
//!
//! State machine behind the item list page. The view starts out loading,
//! becomes ready once the data layer holds items, and keeps at most one
//! fetch in flight: every new load cancels the previous one first.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::client::{CancellationToken, ClientError, DataLayer, ItemsTransport, PageRequest};
use crate::models::ItemId;
use crate::view::{ContainerSize, FixedSizeList, RowStyle};

/// Items requested per page
pub const PAGE_SIZE: usize = 50;

/// Height of one list row in pixels
pub const ROW_HEIGHT: u32 = 40;

// == Rendered Output ==
/// What the view shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// No items held yet
    Loading,
    /// Items present
    Ready(ListScreen),
}

/// Search box, visible rows and pagination controls of a loaded page.
#[derive(Debug, Clone, PartialEq)]
pub struct ListScreen {
    /// Current contents of the search box
    pub search: String,
    /// Rows inside the visible window
    pub rows: Vec<RowView>,
    /// Number of items on the current page, rendered or not
    pub item_count: usize,
    /// Page label and button states
    pub pagination: Pagination,
}

/// One rendered list row, linking to the item's detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    /// Id of the item shown
    pub id: ItemId,
    /// Item name, empty when the item has none
    pub label: String,
    /// Link to the item's detail page
    pub href: String,
    /// Absolute position of the row inside the list
    pub style: RowStyle,
}

/// Previous/next controls under the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    /// Current page
    pub page: usize,
    /// Number of pages
    pub total_pages: usize,
    /// "Page X of Y"
    pub label: String,
    /// Whether the previous button is enabled
    pub previous_enabled: bool,
    /// Whether the next button is enabled
    pub next_enabled: bool,
}

impl Pagination {
    fn new(page: usize, total_pages: usize) -> Self {
        Self {
            page,
            total_pages,
            label: format!("Page {} of {}", page, total_pages),
            previous_enabled: page > 1,
            next_enabled: page < total_pages,
        }
    }
}

/// Outcome of a spawned load. Cancellation resolves to `Ok(())`.
pub type LoadHandle = JoinHandle<Result<(), ClientError>>;

// == Items View ==
/// The item list page, driven by a shared data layer.
pub struct ItemsView<T> {
    data: Arc<DataLayer<T>>,
    /// Text in the search box, possibly not yet submitted
    search: String,
    /// Query of the last submitted search, reused when paging
    active_query: String,
    /// Token of the fetch currently running, if any
    in_flight: Option<CancellationToken>,
    mounted: bool,
}

impl<T: ItemsTransport> ItemsView<T> {
    /// Creates an unmounted view. Nothing is fetched until `mount`.
    pub fn new(data: Arc<DataLayer<T>>) -> Self {
        Self {
            data,
            search: String::new(),
            active_query: String::new(),
            in_flight: None,
            mounted: false,
        }
    }

    // == Lifecycle ==
    /// Mounts the view and loads the first page.
    pub fn mount(&mut self) -> LoadHandle {
        self.mounted = true;
        self.load(1)
    }

    /// Cancels any fetch in flight. Nothing updates state after this.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.cancel_in_flight();
    }

    /// Whether the view is mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    // == Search ==
    /// Updates the search box without fetching.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Current contents of the search box.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Submits the search box and loads page 1 of the results.
    pub fn submit_search(&mut self) -> LoadHandle {
        self.active_query = self.search.clone();
        self.load(1)
    }

    // == Paging ==
    /// Loads `page` of the current query.
    pub fn change_page(&mut self, page: usize) -> LoadHandle {
        self.load(page.max(1))
    }

    /// Loads the next page, or None while the next button is disabled.
    pub async fn next_page(&mut self) -> Option<LoadHandle> {
        let meta = self.data.state().await.meta;
        (meta.page < meta.total_pages).then(|| self.change_page(meta.page + 1))
    }

    /// Loads the previous page, or None while the previous button is disabled.
    pub async fn previous_page(&mut self) -> Option<LoadHandle> {
        let meta = self.data.state().await.meta;
        (meta.page > 1).then(|| self.change_page(meta.page - 1))
    }

    // == Render ==
    /// Renders the page for a container of `size`, list scrolled to `scroll_top`.
    pub async fn render(&self, size: ContainerSize, scroll_top: u64) -> Screen {
        let state = self.data.state().await;
        if state.items.is_empty() {
            return Screen::Loading;
        }

        let list = FixedSizeList::new(state.items.len(), ROW_HEIGHT);
        let rows = list.render(size, scroll_top, |index, style| {
            let item = &state.items[index];
            RowView {
                id: item.id,
                label: item.name().to_string(),
                href: format!("/items/{}", item.id),
                style,
            }
        });

        Screen::Ready(ListScreen {
            search: self.search.clone(),
            rows,
            item_count: state.items.len(),
            pagination: Pagination::new(state.meta.page, state.meta.total_pages),
        })
    }

    // == Load ==
    /// Cancels the fetch in flight and starts a new one for `page`.
    /// While unmounted nothing is fetched and the handle resolves at once.
    fn load(&mut self, page: usize) -> LoadHandle {
        self.cancel_in_flight();
        if !self.mounted {
            debug!("View unmounted, skipping fetch of page {}", page);
            return tokio::spawn(async { Ok(()) });
        }

        let token = CancellationToken::new();
        self.in_flight = Some(token.clone());

        let data = Arc::clone(&self.data);
        let request = PageRequest::new(page, self.active_query.clone()).with_limit(PAGE_SIZE);

        tokio::spawn(async move {
            match data.fetch_items(request, Some(&token)).await {
                Ok(_) => Ok(()),
                Err(err) if err.is_cancelled() => {
                    debug!("Superseded item fetch cancelled");
                    Ok(())
                }
                Err(err) => {
                    error!("{}", err);
                    Err(err)
                }
            }
        })
    }
}

impl<T> ItemsView<T> {
    fn cancel_in_flight(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
    }
}

impl<T> Drop for ItemsView<T> {
    fn drop(&mut self) {
        self.cancel_in_flight();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{paginate, ListQuery};
    use crate::models::{Item, PageResult};

    struct StaticTransport(Vec<Item>);

    impl ItemsTransport for StaticTransport {
        async fn fetch_page(&self, request: &PageRequest) -> Result<PageResult, ClientError> {
            let query = ListQuery {
                page: request.page,
                limit: request.limit,
                q: request.q.clone(),
            };
            Ok(paginate(self.0.clone(), &query))
        }
    }

    fn view_over(count: i64) -> ItemsView<StaticTransport> {
        let items = (1..=count)
            .map(|id| Item::new(id, format!("Item {}", id), 10.0))
            .collect();
        ItemsView::new(Arc::new(DataLayer::new(StaticTransport(items))))
    }

    #[test]
    fn test_pagination_buttons() {
        let first = Pagination::new(1, 3);
        assert!(!first.previous_enabled);
        assert!(first.next_enabled);
        assert_eq!(first.label, "Page 1 of 3");

        let last = Pagination::new(3, 3);
        assert!(last.previous_enabled);
        assert!(!last.next_enabled);
    }

    #[tokio::test]
    async fn test_loading_before_mount() {
        let view = view_over(3);
        assert_eq!(view.render(ContainerSize::new(300, 400), 0).await, Screen::Loading);
    }

    #[tokio::test]
    async fn test_mount_loads_first_page() {
        let mut view = view_over(120);
        view.mount().await.unwrap().unwrap();

        let Screen::Ready(screen) = view.render(ContainerSize::new(300, 400), 0).await else {
            panic!("expected ready screen");
        };
        assert_eq!(screen.item_count, PAGE_SIZE);
        assert_eq!(screen.pagination.label, "Page 1 of 3");
        assert_eq!(screen.rows[0].href, "/items/1");
        assert_eq!(screen.rows[0].label, "Item 1");
        assert!(screen.rows.len() < PAGE_SIZE);
    }

    #[tokio::test]
    async fn test_next_and_previous_respect_bounds() {
        let mut view = view_over(60);
        view.mount().await.unwrap().unwrap();

        assert!(view.previous_page().await.is_none());
        view.next_page().await.unwrap().await.unwrap().unwrap();
        assert!(view.next_page().await.is_none());

        let Screen::Ready(screen) = view.render(ContainerSize::new(300, 400), 0).await else {
            panic!("expected ready screen");
        };
        assert_eq!(screen.pagination.page, 2);
        assert_eq!(screen.item_count, 10);
        assert_eq!(screen.rows[0].id, 51);
    }

    #[tokio::test]
    async fn test_search_box_is_not_submitted_by_typing() {
        let mut view = view_over(3);
        view.mount().await.unwrap().unwrap();

        view.set_search("Item 2");
        assert_eq!(view.search(), "Item 2");

        let Screen::Ready(screen) = view.render(ContainerSize::new(300, 400), 0).await else {
            panic!("expected ready screen");
        };
        assert_eq!(screen.search, "Item 2");
        assert_eq!(screen.item_count, 3);
    }

    #[tokio::test]
    async fn test_no_fetch_after_unmount() {
        let mut view = view_over(120);
        view.mount().await.unwrap().unwrap();
        let before = view.data.state().await;
        view.unmount();

        view.set_search("Item 7");
        view.submit_search().await.unwrap().unwrap();
        view.change_page(2).await.unwrap().unwrap();

        assert_eq!(view.data.state().await, before);
        assert!(view.in_flight.is_none());
    }

    #[tokio::test]
    async fn test_fetch_before_mount_is_skipped() {
        let mut view = view_over(3);
        view.change_page(1).await.unwrap().unwrap();
        assert_eq!(view.render(ContainerSize::new(300, 400), 0).await, Screen::Loading);
    }

    #[tokio::test]
    async fn test_unmount_marks_view_unmounted() {
        let mut view = view_over(1);
        view.mount().await.unwrap().unwrap();
        assert!(view.is_mounted());
        view.unmount();
        assert!(!view.is_mounted());
    }
}
