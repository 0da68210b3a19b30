//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (redirects, loaders, polling
//! setup) and delegates rendering details to `components`.

pub mod add_staff;
pub mod customer_bill;
pub mod customer_menu;
pub mod help;
pub mod kitchen_staff;
pub mod landing;
pub mod manager;
pub mod password_reset;
pub mod ready_to_dine_in;
pub mod sign_in;
pub mod sign_up;
pub mod table_number;
pub mod wait_staff;
