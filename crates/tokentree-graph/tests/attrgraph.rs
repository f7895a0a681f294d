use std::collections::BTreeMap;

use serde_json::json;
use tokentree_canonical::{Node, Tokenizer, Value};
use tokentree_graph::AttributeGraph;
use tokentree_store::{MemoryStore, StoreReader, StoreWriter};
use tokentree_transform::{Policy, Transformer};

fn attrs(pairs: &[(&str, Value)]) -> BTreeMap<String, Value> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn engine() -> Transformer {
    Transformer::new(Policy::IncludeAnnotated, Tokenizer::sha1())
}

fn transform(node: Node) -> Vec<(tokentree_canonical::Token, Value)> {
    engine()
        .transform(node)
        .collect::<Result<_, _>>()
        .unwrap()
}

#[test]
fn attributes_only_graph_emits_attrs_then_node() {
    let graph = AttributeGraph::with_attrs(attrs(&[
        ("a", json!("aye!")),
        ("A", json!("Eh.")),
    ]));
    let pairs = transform(graph.to_node());
    assert_eq!(pairs.len(), 2);
    assert_eq!(
        pairs[0].0.as_str(),
        "9540eb4400be41df59a1f37ac3abb8748b7a44a5"
    );
    assert_eq!(pairs[0].1, json!({"A": "Eh.", "a": "aye!"}));
    assert_eq!(
        pairs[1].0.as_str(),
        "6653a2c28a7bd9b37767ac7f677b04a25e1c687c"
    );
    assert_eq!(
        pairs[1].1,
        json!(["9540eb4400be41df59a1f37ac3abb8748b7a44a5"])
    );
}

#[test]
fn attribute_tables_are_tokenized_as_one_block() {
    // Nested structure inside attrs does not get its own token.
    let graph = AttributeGraph::with_attrs(attrs(&[
        ("b", json!("b")),
        ("a", json!({"a": "aye!", "A": "Eh."})),
    ]));
    let pairs = transform(graph.to_node());
    assert_eq!(pairs.len(), 2);
    assert_eq!(
        pairs[0].0.as_str(),
        "a8338b5acbc5711c1d7d747b799715046d4e7e54"
    );
    assert_eq!(
        pairs[0].1,
        json!({"a": {"A": "Eh.", "a": "aye!"}, "b": "b"})
    );
    assert_eq!(
        pairs[1].0.as_str(),
        "96f4ee4e2928c2e848892f27d052226638f5a993"
    );
}

#[test]
fn graph_nodes_are_annotated_by_default() {
    // A graph inside a plain list still explodes into its own pairs.
    let graph = AttributeGraph::with_attrs(attrs(&[
        ("b", json!("bi")),
        ("B", json!("Bee!")),
    ]));
    let pairs = transform(Node::Sequence(vec![graph.to_node()]));
    assert_eq!(pairs.len(), 3);
    assert_eq!(
        pairs[0].0.as_str(),
        "fa45424f13aab9a9858927d507ccf4242a31b0ed"
    );
    assert_eq!(pairs[0].1, json!({"B": "Bee!", "b": "bi"}));
    // The graph node references its attrs token, and the list references
    // the graph node token.
    assert_eq!(pairs[1].1, json!([pairs[0].0.as_str()]));
    assert_eq!(pairs[2].1, json!([pairs[1].0.as_str()]));
}

fn family() -> AttributeGraph {
    let mut members = BTreeMap::new();
    members.insert(
        "bro".to_string(),
        AttributeGraph::with_attrs(attrs(&[
            ("gender", json!("male")),
            ("name", json!("johnny")),
        ])),
    );
    members.insert(
        "sis".to_string(),
        AttributeGraph::with_attrs(attrs(&[
            ("gender", json!("female")),
            ("name", json!("sissy")),
        ])),
    );
    AttributeGraph::new(
        attrs(&[("abc", json!(123)), ("bcd", json!(234))]),
        members,
    )
}

const FAMILY_EMISSIONS: [(&str, &str); 7] = [
    // (token, role)
    ("aee8581ae8966810f38c9837eaded46e028e32e0", "top attrs"),
    ("faf7493ce465f477797336496b1ffb76f4112883", "bro attrs"),
    ("4c9078566f2085924d2c539fdbfdc4993380c361", "bro node"),
    ("f99c840afb82d568e3a2fe71fa0216028e9584e5", "sis attrs"),
    ("549c3ea3b53130e2800871dc420406d7ba31b663", "sis node"),
    ("3dab3581748db8302681180a1641bd756fa5103e", "member table"),
    ("a1e0b946606be6a646717c18f3815279221aef31", "top node"),
];

#[test]
fn graph_with_members_emits_depth_first_in_key_order() {
    let pairs = transform(family().to_node());
    let tokens: Vec<&str> = pairs.iter().map(|(t, _)| t.as_str()).collect();
    let expected: Vec<&str> = FAMILY_EMISSIONS.iter().map(|(t, _)| *t).collect();
    assert_eq!(tokens, expected);

    assert_eq!(pairs[0].1, json!({"abc": 123, "bcd": 234}));
    assert_eq!(
        pairs[5].1,
        json!({
            "bro": "4c9078566f2085924d2c539fdbfdc4993380c361",
            "sis": "549c3ea3b53130e2800871dc420406d7ba31b663",
        })
    );
    assert_eq!(
        pairs[6].1,
        json!([
            "aee8581ae8966810f38c9837eaded46e028e32e0",
            "3dab3581748db8302681180a1641bd756fa5103e",
        ])
    );
}

#[test]
fn graph_restores_from_its_head_token() {
    let pairs = transform(family().to_node());
    let mut store = MemoryStore::new();
    store.populate(pairs);

    let head = store.head().unwrap().clone();
    let restored = AttributeGraph::from_token(&store, &head).unwrap();

    assert_eq!(restored.attrs, attrs(&[("abc", json!(123)), ("bcd", json!(234))]));
    assert_eq!(
        restored.members.keys().map(String::as_str).collect::<Vec<_>>(),
        ["bro", "sis"]
    );
    let bro = &restored.members["bro"];
    assert_eq!(
        bro.attrs,
        attrs(&[("gender", json!("male")), ("name", json!("johnny"))])
    );
    assert!(bro.members.is_empty());
    assert_eq!(restored, family());
}

fn named(name: &str) -> BTreeMap<String, Value> {
    attrs(&[("name", json!(name))])
}

fn walker_graph() -> AttributeGraph {
    let kid = |n: &str| AttributeGraph::with_attrs(named(n));
    let parent = |n: &str, a: AttributeGraph, b: AttributeGraph| {
        let mut members = BTreeMap::new();
        members.insert("a".to_string(), a);
        members.insert("b".to_string(), b);
        AttributeGraph::new(named(n), members)
    };
    parent(
        "grandparent",
        parent("parent-a", kid("child-a-a"), kid("child-a-b")),
        parent("parent-b", kid("child-b-a"), kid("child-b-b")),
    )
}

fn path_names(path: &[(Option<&str>, &AttributeGraph)]) -> Vec<(Option<String>, String)> {
    path.iter()
        .map(|(key, node)| {
            let name = node.attrs["name"].as_str().unwrap_or("").to_string();
            (key.map(str::to_string), name)
        })
        .collect()
}

#[test]
fn node_walk_visits_every_node_with_its_path() {
    let top = walker_graph();
    let seen: Vec<_> = top.nodes().map(|p| path_names(&p)).collect();
    let s = |v: &str| Some(v.to_string());
    assert_eq!(
        seen,
        vec![
            vec![(None, "grandparent".into())],
            vec![(s("a"), "parent-a".into()), (None, "grandparent".into())],
            vec![
                (s("a"), "child-a-a".into()),
                (s("a"), "parent-a".into()),
                (None, "grandparent".into()),
            ],
            vec![
                (s("b"), "child-a-b".into()),
                (s("a"), "parent-a".into()),
                (None, "grandparent".into()),
            ],
            vec![(s("b"), "parent-b".into()), (None, "grandparent".into())],
            vec![
                (s("a"), "child-b-a".into()),
                (s("b"), "parent-b".into()),
                (None, "grandparent".into()),
            ],
            vec![
                (s("b"), "child-b-b".into()),
                (s("b"), "parent-b".into()),
                (None, "grandparent".into()),
            ],
        ]
    );
}

#[test]
fn leaf_walk_visits_only_childless_nodes() {
    let top = walker_graph();
    let leaf_names: Vec<String> = top
        .leaves()
        .map(|p| path_names(&p)[0].1.clone())
        .collect();
    assert_eq!(
        leaf_names,
        ["child-a-a", "child-a-b", "child-b-a", "child-b-b"]
    );
}
