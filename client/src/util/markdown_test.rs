use super::*;

#[test]
fn renders_headings_and_lists() {
    let out = render_markdown_html("## Ordering\n\n- Pick a dish\n- Press **Order**\n");
    assert!(out.contains("<h2>Ordering</h2>"));
    assert!(out.contains("<li>Pick a dish</li>"));
    assert!(out.contains("<strong>Order</strong>"));
}

#[test]
fn renders_tables() {
    let out = render_markdown_html("| Role | Page |\n|---|---|\n| Kitchen | /kitchenstaff |\n");
    assert!(out.contains("<table>"));
    assert!(out.contains("<td>Kitchen</td>"));
}

#[test]
fn strips_raw_html() {
    let out = render_markdown_html("Fresh <script>alert(1)</script> bread\n\n<div>block</div>\n");
    assert!(!out.contains("<script>"));
    assert!(!out.contains("<div>"));
    assert!(out.contains("Fresh"));
}
