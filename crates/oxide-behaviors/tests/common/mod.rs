#![allow(dead_code)]

use oxide_dom::{Document, NodeId, NodeSpec, PageSpec, Rect};

fn field(input: NodeSpec) -> NodeSpec {
    NodeSpec::new("div").class("mb-3").child(input)
}

/// A landing page exercising every behavior.
pub fn landing_page(path: &str) -> PageSpec {
    let link = |href: &str| NodeSpec::new("a").class("nav-link").attr("href", href);
    PageSpec::new(path)
        .body(
            NodeSpec::new("header")
                .rect(Rect::new(0.0, 0.0, 1280.0, 80.0))
                .child(NodeSpec::new("button").class("navbar-toggler"))
                .child(
                    NodeSpec::new("div")
                        .class("navbar-collapse")
                        .child(link("/"))
                        .child(link("#services"))
                        .child(link("#contact")),
                ),
        )
        .body(
            NodeSpec::new("section")
                .id("services")
                .rect(Rect::new(900.0, 0.0, 1280.0, 700.0))
                .child(NodeSpec::new("h2").text("Services"))
                .child(NodeSpec::new("span").class("stat").attr("data-count", "125").text("0"))
                .child(NodeSpec::new("img").attr("src", "seo.png")),
        )
        .body(
            NodeSpec::new("section").id("contact").child(
                NodeSpec::new("form")
                    .class("needs-validation")
                    .child(field(
                        NodeSpec::new("input")
                            .attr("name", "firstName")
                            .attr("required", ""),
                    ))
                    .child(field(
                        NodeSpec::new("input")
                            .attr("name", "email")
                            .attr("type", "email")
                            .attr("required", ""),
                    ))
                    .child(field(
                        NodeSpec::new("textarea")
                            .attr("name", "message")
                            .attr("required", ""),
                    ))
                    .child(
                        NodeSpec::new("button")
                            .class("btn")
                            .attr("type", "submit")
                            .text("Send"),
                    ),
            ),
        )
        .body(
            NodeSpec::new("footer")
                .child(NodeSpec::new("a").attr("href", "#privacy").text("Privacy")),
        )
}

pub fn landing_document(path: &str) -> Document {
    Document::from_spec(&landing_page(path))
}

pub fn node(doc: &Document, selector: &str) -> NodeId {
    doc.query_selector(selector)
        .unwrap_or_else(|e| panic!("Bad selector {selector}: {e}"))
        .unwrap_or_else(|| panic!("Nothing matches {selector}"))
}

pub fn fill(doc: &mut Document, first_name: &str, email: &str, message: &str) {
    let first = node(doc, "input[name=\"firstName\"]");
    let mail = node(doc, "input[name=\"email\"]");
    let body = node(doc, "textarea");
    doc[first].value = first_name.to_string();
    doc[mail].value = email.to_string();
    doc[body].value = message.to_string();
}
