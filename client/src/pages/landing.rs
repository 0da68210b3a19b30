//! Public landing page.

use leptos::prelude::*;

use crate::components::navbar::LandingNavbar;

/// (title, description) for each role card.
const ROLES: [(&str, &str); 4] = [
    (
        "Restaurant Owner / Manager",
        "The person in authority of the restaurant. You create kitchen and wait staff accounts. You edit the menu.",
    ),
    (
        "Kitchen Staff",
        "The staff in charge of cooking. You receive orders from customers and mark them as done for the wait staff to serve.",
    ),
    (
        "Wait Staff",
        "The staff in charge of handing orders out to customers. You also handle customers who need assistance.",
    ),
    ("Customer", "You order food from a restaurant that uses Quenify, straight from your table."),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <LandingNavbar/>
            <section class="landing__hero">
                <h1 class="landing__title">
                    "Manage your " <mark>"restaurants"</mark> ", all in one app."
                </h1>
                <p class="landing__lead">
                    "Customers order from their table, the kitchen sees every dish as it arrives, and wait staff know which tables need them."
                </p>
                <div class="landing__actions">
                    <a class="btn btn--primary" href="/signin">"Sign In"</a>
                    <a class="btn" href="/signup">"Register"</a>
                    <a class="btn btn--accent" href="/readytodinein">"Dine In"</a>
                </div>
            </section>
            <section class="landing__roles">
                {ROLES
                    .into_iter()
                    .map(|(title, description)| {
                        view! {
                            <div class="role-card">
                                <h3 class="role-card__title">{title}</h3>
                                <p>{description}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>
        </div>
    }
}
