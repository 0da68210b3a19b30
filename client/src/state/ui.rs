//! Local UI chrome state (theme, manager tabs, customer drawers, banners).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`menu`,
//! `orders`, `tables`) so layout controls can evolve independently of
//! backend data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Tabs on the manager dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ManagerTab {
    #[default]
    Menu,
    Orders,
    Tables,
    Staff,
}

impl ManagerTab {
    pub const ALL: [ManagerTab; 4] = [ManagerTab::Menu, ManagerTab::Orders, ManagerTab::Tables, ManagerTab::Staff];

    pub fn label(self) -> &'static str {
        match self {
            ManagerTab::Menu => "Menu",
            ManagerTab::Orders => "Orders",
            ManagerTab::Tables => "Tables",
            ManagerTab::Staff => "Staff",
        }
    }
}

/// Customer-side drawer currently open over the menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CustomerDrawer {
    #[default]
    Closed,
    Cart,
    Orders,
}

/// Severity of a banner message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub manager_tab: ManagerTab,
    pub drawer: CustomerDrawer,
    pub notice: Option<Notice>,
    /// Incremented when the customer's order list should re-fetch.
    pub orders_refresh_seq: u64,
}

impl UiState {
    pub fn info(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice { kind: NoticeKind::Info, text: text.into() });
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice { kind: NoticeKind::Error, text: text.into() });
    }

    pub fn dismiss(&mut self) {
        self.notice = None;
    }

    /// Toggle a drawer; opening one closes the other.
    pub fn toggle_drawer(&mut self, drawer: CustomerDrawer) {
        self.drawer = if self.drawer == drawer { CustomerDrawer::Closed } else { drawer };
    }

    pub fn refresh_customer_orders(&mut self) {
        self.orders_refresh_seq = self.orders_refresh_seq.wrapping_add(1);
    }
}
