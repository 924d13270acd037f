//! UI Components
//!
//! Leptos components for the storefront shell and its two views.

mod nav_bar;
mod footer;
mod catalog_view;
mod product_card;
mod cart_panel;
mod not_found;
mod item_management;
mod item_form;
mod item_table;
mod delete_confirm_button;

pub use nav_bar::NavBar;
pub use footer::Footer;
pub use catalog_view::CatalogView;
pub use product_card::ProductCard;
pub use cart_panel::CartPanel;
pub use not_found::NotFound;
pub use item_management::ItemManagement;
pub use item_form::ItemFormPanel;
pub use item_table::ItemTable;
pub use delete_confirm_button::DeleteConfirmButton;
