//! Static help page.

#[cfg(test)]
#[path = "help_test.rs"]
mod help_test;

use leptos::prelude::*;

use crate::components::navbar::LandingNavbar;
use crate::util::markdown::render_markdown_html;

pub const HELP_MARKDOWN: &str = "\
# How can we help?

## Dining in

1. Press **Dine In** on the home page.
2. Enter the restaurant name and location printed on your table.
3. Enter your table number. A table already in use cannot be claimed.
4. Add dishes to the cart and press **Place Order**.
5. Press **Need Assistance** to call a waiter, or **Request Bill** when you are done.

## Staff pages

| Role | Page | What it shows |
|---|---|---|
| Manager | /manager | Menu editor, orders, tables and staff |
| Wait | /waitstaff | Dishes ready to serve, tables and assistance calls |
| Kitchen | /kitchenstaff | Orders waiting to be cooked |

## Accounts

- Managers register the restaurant from **Register**.
- Wait and kitchen accounts are created by the manager from the **Staff** tab.
- Forgot your password? Use **Forgot password?** on the sign in page.
";

#[component]
pub fn HelpPage() -> impl IntoView {
    let html = render_markdown_html(HELP_MARKDOWN);
    view! {
        <div class="help-page">
            <LandingNavbar/>
            <article class="help-page__content markdown" inner_html=html></article>
        </div>
    }
}
