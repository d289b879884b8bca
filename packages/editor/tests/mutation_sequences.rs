//! Mutation sequences over a whole document: ordering, uniqueness, and
//! locate round-trips under realistic editing runs.

use pagecraft_editor::{ComponentNode, Document, IdGenerator, LayoutData, Mutation};
use pagecraft_tree::{collect_ids, locate};
use serde_json::json;
use std::collections::HashSet;

fn flat_doc(ids: &[&str]) -> Document {
    Document::from_layout(LayoutData::new(
        ids.iter()
            .map(|id| ComponentNode::new(*id, "Divider"))
            .collect(),
    ))
}

#[test]
fn insert_button_into_empty_page() {
    let mut doc = Document::from_layout(LayoutData::default());

    doc.apply(Mutation::InsertNode {
        parent_id: None,
        node: ComponentNode::new("btn-1", "Button").with_prop("text", json!("Click me")),
        position: 0,
    })
    .unwrap();

    let content = doc.content();
    assert_eq!(content.len(), 1);
    assert_eq!(content[0].type_name, "Button");
    assert_eq!(content[0].props["text"], "Click me");
}

#[test]
fn reorder_last_before_first() {
    let mut doc = flat_doc(&["a", "b", "c"]);

    doc.apply(Mutation::Reorder {
        active_id: "c".to_string(),
        over_id: "a".to_string(),
    })
    .unwrap();

    assert_eq!(collect_ids(doc.content()), vec!["c", "a", "b"]);
}

#[test]
fn duplicate_container_with_children() {
    let mut doc = Document::from_layout(LayoutData::new(vec![ComponentNode::new(
        "a", "Container",
    )
    .with_prop("direction", json!("row"))
    .with_child(ComponentNode::new("x", "Heading"))
    .with_child(ComponentNode::new("y", "Button"))]))
    .with_id_generator(IdGenerator::seeded("copy"));

    let outcome = doc
        .apply(Mutation::DuplicateNode {
            node_id: "a".to_string(),
        })
        .unwrap();

    let content = doc.content();
    assert_eq!(content.len(), 2);

    let clone = &content[1];
    assert_ne!(clone.id, "a");
    assert_ne!(clone.children[0].id, "x");
    assert_ne!(clone.children[1].id, "y");
    assert_eq!(clone.props, content[0].props);

    // The outcome reports exactly the minted ids.
    let minted: HashSet<String> = outcome.created_ids.into_iter().collect();
    let expected: HashSet<String> = collect_ids(std::slice::from_ref(clone)).into_iter().collect();
    assert_eq!(minted, expected);
}

#[test]
fn remove_takes_the_subtree_with_it() {
    let mut doc = Document::from_layout(LayoutData::new(vec![
        ComponentNode::new("a", "Container")
            .with_child(ComponentNode::new("x", "Heading"))
            .with_child(ComponentNode::new("y", "Button")),
        ComponentNode::new("b", "Divider"),
    ]));

    doc.apply(Mutation::RemoveNode {
        node_id: "a".to_string(),
    })
    .unwrap();

    assert_eq!(collect_ids(doc.content()), vec!["b"]);
    assert!(locate(doc.content(), "x").is_none());
}

#[test]
fn locate_round_trips_after_every_step() {
    let mut doc = flat_doc(&["a", "b"]);

    let steps = vec![
        Mutation::InsertNode {
            parent_id: Some("a".to_string()),
            node: ComponentNode::new("child", "Text"),
            position: 999,
        },
        Mutation::Reorder {
            active_id: "b".to_string(),
            over_id: "a".to_string(),
        },
        Mutation::DuplicateNode {
            node_id: "a".to_string(),
        },
        Mutation::UpdateProps {
            node_id: "child".to_string(),
            props: [("text".to_string(), json!("hello"))].into_iter().collect(),
        },
    ];

    for step in steps {
        doc.apply(step).unwrap();
        for id in collect_ids(doc.content()) {
            let found = locate(doc.content(), &id).expect("collected id must locate");
            assert_eq!(found.node.id, id);
            assert_eq!(found.siblings[found.index].id, id);
        }
    }
}

#[test]
fn ids_stay_unique_across_editing_run() {
    let mut doc = Document::from_layout(LayoutData::default());

    doc.apply(Mutation::InsertNode {
        parent_id: None,
        node: ComponentNode::new("root", "Container"),
        position: 0,
    })
    .unwrap();
    doc.apply(Mutation::InsertNode {
        parent_id: Some("root".to_string()),
        node: ComponentNode::new("leaf", "Button"),
        position: 0,
    })
    .unwrap();

    // Duplicate repeatedly, nested and at top level.
    for _ in 0..5 {
        doc.apply(Mutation::DuplicateNode {
            node_id: "root".to_string(),
        })
        .unwrap();
        doc.apply(Mutation::DuplicateNode {
            node_id: "leaf".to_string(),
        })
        .unwrap();
    }

    let all = collect_ids(doc.content());
    let unique: HashSet<&String> = all.iter().collect();
    assert_eq!(all.len(), unique.len(), "duplicate ids after editing run");
}

#[test]
fn failed_drop_leaves_document_intact() {
    let mut doc = flat_doc(&["a"]);
    let before = doc.layout().clone();

    let result = doc.apply(Mutation::InsertNode {
        parent_id: Some("ghost".to_string()),
        node: ComponentNode::new("b", "Button"),
        position: 0,
    });

    assert!(result.is_err());
    assert_eq!(doc.layout(), &before);
}
