//! Depth-first traversal with an explicit stack
//!
//! Each node carries a three-state mark (unvisited, on the current path,
//! finished). One walk over the whole graph yields both the post-order
//! (dependencies before dependents) and every back edge, so inventories of
//! any depth are handled without recursion.
//!
//! An on-path node reached again is treated as already ordered. Within a
//! cycle this means the order cannot honour every edge; cycles are reported
//! separately so callers can decide what to do with them.

use crate::graph::DependencyGraph;
use petgraph::graph::NodeIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Finished,
}

#[derive(Debug)]
struct Frame {
    node: NodeIndex,
    successors: Vec<NodeIndex>,
    cursor: usize,
}

impl Frame {
    fn new(graph: &DependencyGraph<'_>, node: NodeIndex) -> Self {
        Self {
            node,
            successors: graph.successors(node).into_iter().map(|(n, _)| n).collect(),
            cursor: 0,
        }
    }
}

/// Result of one full depth-first walk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Walk {
    /// Post-order over every node, each exactly once
    pub(crate) order: Vec<NodeIndex>,
    /// One path per back edge, from the re-entered node to the node closing the loop
    pub(crate) cycles: Vec<Vec<NodeIndex>>,
}

/// Walk the whole graph, starting roots in inventory order
pub(crate) fn walk(graph: &DependencyGraph<'_>) -> Walk {
    let mut marks = vec![Mark::Unvisited; graph.node_count()];
    let mut result = Walk {
        order: Vec::with_capacity(graph.node_count()),
        cycles: Vec::new(),
    };
    let mut stack: Vec<Frame> = Vec::new();

    for root in graph.nodes() {
        if marks[root.index()] != Mark::Unvisited {
            continue;
        }
        marks[root.index()] = Mark::OnPath;
        stack.push(Frame::new(graph, root));

        while let Some(top) = stack.last_mut() {
            let Some(&next) = top.successors.get(top.cursor) else {
                marks[top.node.index()] = Mark::Finished;
                result.order.push(top.node);
                stack.pop();
                continue;
            };
            top.cursor += 1;

            match marks[next.index()] {
                Mark::Unvisited => {
                    marks[next.index()] = Mark::OnPath;
                    stack.push(Frame::new(graph, next));
                }
                Mark::OnPath => {
                    let start = stack
                        .iter()
                        .position(|frame| frame.node == next)
                        .unwrap_or_default();
                    result
                        .cycles
                        .push(stack[start..].iter().map(|frame| frame.node).collect());
                }
                Mark::Finished => {}
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use mig_inventory::{Component, ComponentKind, DependencyRef};

    fn module(id: &str, deps: &[&str]) -> Component {
        deps.iter().fold(Component::new(id, id, ComponentKind::CodeModule), |c, d| {
            c.with_requires(DependencyRef::new(*d, *d, ComponentKind::CodeModule))
        })
    }

    fn ids(graph: &DependencyGraph<'_>, nodes: &[NodeIndex]) -> Vec<String> {
        nodes.iter().map(|&n| graph.component(n).id.clone()).collect()
    }

    #[test]
    fn post_order_puts_dependencies_first() {
        let inventory = vec![module("app", &["lib", "util"]), module("lib", &["util"]), module("util", &[])];
        let graph = DependencyGraph::build(&inventory);
        let walk = walk(&graph);

        assert_eq!(ids(&graph, &walk.order), ["util", "lib", "app"]);
        assert!(walk.cycles.is_empty());
    }

    #[test]
    fn back_edge_records_path_from_reentered_node() {
        let inventory = vec![
            module("entry", &["a"]),
            module("a", &["b"]),
            module("b", &["c"]),
            module("c", &["a"]),
        ];
        let graph = DependencyGraph::build(&inventory);
        let walk = walk(&graph);

        assert_eq!(walk.cycles.len(), 1);
        assert_eq!(ids(&graph, &walk.cycles[0]), ["a", "b", "c"]);
        assert_eq!(ids(&graph, &walk.order), ["c", "b", "a", "entry"]);
    }

    #[test]
    fn self_loop_is_a_one_node_cycle() {
        let inventory = vec![module("a", &["a"])];
        let graph = DependencyGraph::build(&inventory);
        let walk = walk(&graph);

        assert_eq!(ids(&graph, &walk.cycles[0]), ["a"]);
        assert_eq!(walk.order.len(), 1);
    }

    #[test]
    fn finds_disjoint_cycles() {
        let inventory = vec![
            module("a", &["b"]),
            module("b", &["a"]),
            module("x", &["y"]),
            module("y", &["x"]),
        ];
        let graph = DependencyGraph::build(&inventory);
        let walk = walk(&graph);

        assert_eq!(walk.cycles.len(), 2);
        assert_eq!(ids(&graph, &walk.cycles[0]), ["a", "b"]);
        assert_eq!(ids(&graph, &walk.cycles[1]), ["x", "y"]);
    }

    #[test]
    fn deep_chain_does_not_overflow() {
        let n = 50_000;
        let inventory: Vec<Component> = (0..n)
            .map(|i| {
                let id = format!("m{i}");
                if i + 1 < n {
                    let next = format!("m{}", i + 1);
                    module(&id, &[next.as_str()])
                } else {
                    module(&id, &[])
                }
            })
            .collect();
        let graph = DependencyGraph::build(&inventory);
        let walk = walk(&graph);

        assert_eq!(walk.order.len(), n);
        assert_eq!(graph.component(walk.order[0]).id, format!("m{}", n - 1));
    }
}
