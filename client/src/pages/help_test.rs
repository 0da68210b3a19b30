use super::*;

#[test]
fn help_renders_sections_and_role_table() {
    let html = render_markdown_html(HELP_MARKDOWN);
    assert!(html.contains("<h1>How can we help?</h1>"));
    assert!(html.contains("<h2>Dining in</h2>"));
    assert!(html.contains("<td>/kitchenstaff</td>"));
    assert!(html.contains("<strong>Place Order</strong>"));
}

#[test]
fn help_lists_every_staff_route() {
    for route in ["/manager", "/waitstaff", "/kitchenstaff"] {
        assert!(HELP_MARKDOWN.contains(route), "missing {route}");
    }
}
