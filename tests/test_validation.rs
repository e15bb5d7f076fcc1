use std::collections::{BTreeMap, HashMap, HashSet};
use std::marker::PhantomData;

use rstest::rstest;

use leftview::util::testing;
use leftview::{get_left_view, Absent, Level, Node, TreeError};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

const NODE_MESSAGE: &str = "'current_node' should be instance of Node class";
const VISIBLE_NODES_MESSAGE: &str = "'visible_nodes' should be of type list";
const CURRENT_LEVEL_MESSAGE: &str = "'current_level' should be of type int";
const VISITED_LEVELS_MESSAGE: &str = "'visited_levels' should be of type set";

#[rstest]
fn test_node_instance_validation() {
    let mut visible_nodes: Vec<&str> = Vec::new();

    let err = get_left_view(&(), &mut visible_nodes, &mut Absent, 0).unwrap_err();
    assert_eq!(err, TreeError::InvalidNode);
    assert_eq!(err.to_string(), NODE_MESSAGE);

    let err = get_left_view(&Vec::<i32>::new(), &mut visible_nodes, &mut Absent, 0).unwrap_err();
    assert_eq!(err.to_string(), NODE_MESSAGE);

    let err = get_left_view(&PhantomData::<Node<&str>>, &mut visible_nodes, &mut Absent, 0)
        .unwrap_err();
    assert_eq!(err.to_string(), NODE_MESSAGE);

    let err = get_left_view(
        &HashMap::<String, String>::new(),
        &mut visible_nodes,
        &mut Absent,
        0,
    )
    .unwrap_err();
    assert_eq!(err.to_string(), NODE_MESSAGE);

    let err = get_left_view(&None::<Node<&str>>, &mut visible_nodes, &mut Absent, 0).unwrap_err();
    assert_eq!(err.to_string(), NODE_MESSAGE);

    assert!(visible_nodes.is_empty());
}

#[rstest]
fn test_visible_nodes_validation() {
    let node_instance = Node::new("A");

    let err = get_left_view(&node_instance, &mut String::new(), &mut Absent, 0).unwrap_err();
    assert_eq!(err, TreeError::InvalidVisibleNodes);
    assert_eq!(err.to_string(), VISIBLE_NODES_MESSAGE);

    let err = get_left_view(&node_instance, &mut "", &mut Absent, 0).unwrap_err();
    assert_eq!(err.to_string(), VISIBLE_NODES_MESSAGE);

    let mut mapping: BTreeMap<String, String> = BTreeMap::new();
    let err = get_left_view(&node_instance, &mut mapping, &mut Absent, 0).unwrap_err();
    assert_eq!(err.to_string(), VISIBLE_NODES_MESSAGE);

    let mut set: HashSet<&str> = HashSet::new();
    let err = get_left_view(&node_instance, &mut set, &mut Absent, 0).unwrap_err();
    assert_eq!(err.to_string(), VISIBLE_NODES_MESSAGE);
    assert!(set.is_empty());
}

#[rstest]
fn test_current_level_validation() {
    let node_instance = Node::new("A");
    let mut visible_nodes = Vec::new();

    let err = get_left_view(&node_instance, &mut visible_nodes, &mut Absent, "").unwrap_err();
    assert_eq!(err, TreeError::InvalidCurrentLevel);
    assert_eq!(err.to_string(), CURRENT_LEVEL_MESSAGE);

    let err = get_left_view(&node_instance, &mut visible_nodes, &mut Absent, Vec::<i32>::new())
        .unwrap_err();
    assert_eq!(err.to_string(), CURRENT_LEVEL_MESSAGE);

    let err = get_left_view(
        &node_instance,
        &mut visible_nodes,
        &mut Absent,
        HashMap::<String, i32>::new(),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), CURRENT_LEVEL_MESSAGE);

    let err = get_left_view(&node_instance, &mut visible_nodes, &mut Absent, false).unwrap_err();
    assert_eq!(err.to_string(), CURRENT_LEVEL_MESSAGE);

    assert!(visible_nodes.is_empty());
}

#[rstest]
fn test_visited_levels_validation() {
    let node_instance = Node::new("A");
    let mut visible_nodes = Vec::new();

    let err = get_left_view(&node_instance, &mut visible_nodes, &mut String::new(), 0).unwrap_err();
    assert_eq!(err, TreeError::InvalidVisitedLevels);
    assert_eq!(err.to_string(), VISITED_LEVELS_MESSAGE);

    let err = get_left_view(&node_instance, &mut visible_nodes, &mut Vec::<usize>::new(), 0)
        .unwrap_err();
    assert_eq!(err.to_string(), VISITED_LEVELS_MESSAGE);

    let err = get_left_view(&node_instance, &mut visible_nodes, &mut false, 0).unwrap_err();
    assert_eq!(err.to_string(), VISITED_LEVELS_MESSAGE);

    let err = get_left_view(
        &node_instance,
        &mut visible_nodes,
        &mut HashMap::<usize, bool>::new(),
        0,
    )
    .unwrap_err();
    assert_eq!(err.to_string(), VISITED_LEVELS_MESSAGE);

    assert!(visible_nodes.is_empty());
}

#[rstest]
fn test_validation_order_when_all_arguments_are_wrong() {
    let err = get_left_view::<&str, _, _, _, _>(&(), &mut String::new(), &mut false, "").unwrap_err();
    assert_eq!(err, TreeError::InvalidVisibleNodes);

    let mut visible_nodes: Vec<&str> = Vec::new();

    let err = get_left_view(&(), &mut visible_nodes, &mut false, "").unwrap_err();
    assert_eq!(err, TreeError::InvalidVisitedLevels);

    let err = get_left_view(&(), &mut visible_nodes, &mut Absent, "").unwrap_err();
    assert_eq!(err, TreeError::InvalidCurrentLevel);

    let err = get_left_view(&(), &mut visible_nodes, &mut Absent, 0).unwrap_err();
    assert_eq!(err, TreeError::InvalidNode);
}

#[rstest]
fn test_rejected_call_leaves_visited_levels_untouched() {
    let node_instance = Node::new("A");
    let mut visible_nodes = Vec::new();
    let mut visited_levels: HashSet<Level> = HashSet::new();

    let err = get_left_view(&node_instance, &mut visible_nodes, &mut visited_levels, "").unwrap_err();
    assert_eq!(err, TreeError::InvalidCurrentLevel);
    assert!(visited_levels.is_empty());
    assert!(visible_nodes.is_empty());
}
