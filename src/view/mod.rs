//! View Module
//!
//! Headless model of the item list page: search box, windowed list of the
//! current page and pagination controls, driven through the client data
//! layer.

mod items;
mod virtual_list;

pub use items::{
    ItemsView, ListScreen, LoadHandle, Pagination, RowView, Screen, PAGE_SIZE, ROW_HEIGHT,
};
pub use virtual_list::{ContainerSize, FixedSizeList, RowStyle};
