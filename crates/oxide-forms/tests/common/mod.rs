#![allow(dead_code)]

use oxide_dom::{Document, NodeId, NodeSpec, PageSpec};

pub fn group(field: NodeSpec) -> NodeSpec {
    NodeSpec::new("div").class("mb-3").child(field)
}

pub fn text_input(name: &str, value: &str) -> NodeSpec {
    group(
        NodeSpec::new("input")
            .attr("name", name)
            .attr("required", "")
            .value(value),
    )
}

/// A contact page with first name, email, message, privacy box and submit
/// button.
pub fn contact_page(first_name: &str, email: &str, message: &str) -> Document {
    Document::from_spec(
        &PageSpec::new("/contact.html").body(
            NodeSpec::new("form")
                .class("needs-validation")
                .attr("novalidate", "")
                .child(text_input("firstName", first_name))
                .child(group(
                    NodeSpec::new("input")
                        .attr("name", "email")
                        .attr("type", "email")
                        .attr("required", "")
                        .value(email),
                ))
                .child(group(
                    NodeSpec::new("textarea")
                        .attr("name", "message")
                        .attr("required", "")
                        .value(message),
                ))
                .child(group(
                    NodeSpec::new("input")
                        .attr("name", "newsletter")
                        .attr("type", "checkbox")
                        .value("yes"),
                ))
                .child(
                    NodeSpec::new("button")
                        .class("btn")
                        .attr("type", "submit")
                        .text("Send message"),
                ),
        ),
    )
}

pub fn node(doc: &Document, selector: &str) -> NodeId {
    doc.query_selector(selector)
        .unwrap_or_else(|e| panic!("Bad selector {selector}: {e}"))
        .unwrap_or_else(|| panic!("Nothing matches {selector}"))
}

pub fn form(doc: &Document) -> NodeId {
    node(doc, "form")
}

pub fn submit_button(doc: &Document) -> NodeId {
    node(doc, "[type=\"submit\"]")
}
