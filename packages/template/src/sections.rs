//! Built-in landing-page sections.
//!
//! Placeholder ids are template-local and replaced wholesale on
//! expansion; they only need to be readable in fixtures.

use pagecraft_tree::ComponentNode;
use serde_json::json;

pub(crate) fn hero() -> ComponentNode {
    ComponentNode::new("hero", "Container")
        .with_prop("direction", json!("column"))
        .with_style("padding", json!("96px 24px"))
        .with_style("align", json!("center"))
        .with_child(
            ComponentNode::new("hero-title", "Heading")
                .with_prop("text", json!("Build something people want"))
                .with_prop("level", json!("h1")),
        )
        .with_child(
            ComponentNode::new("hero-subtitle", "Text")
                .with_prop("text", json!("Launch your next idea in minutes, not months.")),
        )
        .with_child(
            ComponentNode::new("hero-cta", "Button")
                .with_prop("text", json!("Get started"))
                .with_prop("variant", json!("primary")),
        )
}

pub(crate) fn navbar() -> ComponentNode {
    ComponentNode::new("navbar", "Container")
        .with_prop("direction", json!("row"))
        .with_style("padding", json!("16px 24px"))
        .with_style("justify", json!("space-between"))
        .with_child(
            ComponentNode::new("navbar-brand", "Heading")
                .with_prop("text", json!("Acme"))
                .with_prop("level", json!("h3")),
        )
        .with_child(
            ComponentNode::new("navbar-links", "Container")
                .with_prop("direction", json!("row"))
                .with_style("gap", json!("24px"))
                .with_child(
                    ComponentNode::new("navbar-login", "Button")
                        .with_prop("text", json!("Log in"))
                        .with_prop("variant", json!("ghost")),
                )
                .with_child(
                    ComponentNode::new("navbar-signup", "Button")
                        .with_prop("text", json!("Sign up"))
                        .with_prop("variant", json!("primary")),
                ),
        )
}

pub(crate) fn pricing() -> ComponentNode {
    let tier = |id: &str, name: &str, price: &str, cta: &str| {
        ComponentNode::new(id, "Container")
            .with_prop("direction", json!("column"))
            .with_style("padding", json!("32px"))
            .with_style("border", json!("1px solid #e2e2e2"))
            .with_child(
                ComponentNode::new(format!("{id}-name"), "Heading")
                    .with_prop("text", json!(name))
                    .with_prop("level", json!("h3")),
            )
            .with_child(
                ComponentNode::new(format!("{id}-price"), "Heading")
                    .with_prop("text", json!(price))
                    .with_prop("level", json!("h2")),
            )
            .with_child(
                ComponentNode::new(format!("{id}-cta"), "Button")
                    .with_prop("text", json!(cta))
                    .with_prop("variant", json!("secondary")),
            )
    };

    ComponentNode::new("pricing", "Container")
        .with_prop("direction", json!("column"))
        .with_style("padding", json!("64px 24px"))
        .with_child(
            ComponentNode::new("pricing-title", "Heading")
                .with_prop("text", json!("Pricing"))
                .with_prop("level", json!("h2")),
        )
        .with_child(
            ComponentNode::new("pricing-tiers", "Container")
                .with_prop("direction", json!("row"))
                .with_style("gap", json!("24px"))
                .with_child(tier("pricing-free", "Free", "$0/mo", "Start free"))
                .with_child(tier("pricing-pro", "Pro", "$19/mo", "Go Pro"))
                .with_child(tier("pricing-team", "Team", "$49/mo", "Contact us")),
        )
}

pub(crate) fn features() -> ComponentNode {
    let feature = |id: &str, title: &str, body: &str| {
        ComponentNode::new(id, "Container")
            .with_prop("direction", json!("column"))
            .with_style("gap", json!("8px"))
            .with_child(
                ComponentNode::new(format!("{id}-title"), "Heading")
                    .with_prop("text", json!(title))
                    .with_prop("level", json!("h3")),
            )
            .with_child(
                ComponentNode::new(format!("{id}-body"), "Text").with_prop("text", json!(body)),
            )
    };

    ComponentNode::new("features", "Container")
        .with_prop("direction", json!("row"))
        .with_style("padding", json!("64px 24px"))
        .with_style("gap", json!("32px"))
        .with_child(feature(
            "features-fast",
            "Fast",
            "Pages render at the edge, close to your visitors.",
        ))
        .with_child(feature(
            "features-flexible",
            "Flexible",
            "Compose pages from components, bind them to your data.",
        ))
        .with_child(feature(
            "features-safe",
            "Safe",
            "Every change is versioned and reversible.",
        ))
}

pub(crate) fn footer() -> ComponentNode {
    ComponentNode::new("footer", "Container")
        .with_prop("direction", json!("row"))
        .with_style("padding", json!("32px 24px"))
        .with_style("justify", json!("space-between"))
        .with_child(
            ComponentNode::new("footer-copy", "Text")
                .with_prop("text", json!("© Acme Inc. All rights reserved.")),
        )
        .with_child(
            ComponentNode::new("footer-contact", "Button")
                .with_prop("text", json!("Contact"))
                .with_prop("variant", json!("ghost")),
        )
}
