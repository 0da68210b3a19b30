//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render menu, cart, order and table surfaces while reading and
//! writing shared state from Leptos context providers. Pages compose them.

pub mod add_menu_item_modal;
pub mod assistance_list;
pub mod cart_panel;
pub mod category_section;
pub mod customer_orders_panel;
pub mod edit_menu_position;
pub mod item_detail_modal;
pub mod menu_item_card;
pub mod menu_item_form;
pub mod menu_view;
pub mod navbar;
pub mod notice_banner;
pub mod order_board;
pub mod staff_list;
pub mod table_panel;
