//! The in-memory workflow graph.
//!
//! [`Workflow`] is the single source of truth for nodes and connections. Every
//! other component refers to graph elements by id.

use crate::constants::{NODE_WIDTH, PORT_ANCHOR_Y};
use crate::types::*;

/// Ordered collections of nodes and connections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workflow {
    nodes: Vec<Node>,
    connections: Vec<Connection>,
}

impl Workflow {
    /// Creates an empty workflow.
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Connections in insertion order, including dangling ones.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Looks up a node by id.
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == *id)
    }

    /// Looks up a node by id for mutation.
    pub fn node_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == *id)
    }

    /// Whether a node with this id exists.
    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Appends a node and returns its id.
    ///
    /// Ids are generated by the caller; a duplicate id is a bug in the caller.
    pub fn add_node(&mut self, node: Node) -> NodeId {
        debug_assert!(
            !self.contains_node(&node.id),
            "duplicate node id {}",
            node.id
        );
        let id = node.id.clone();
        log::debug!("add node {id} ({})", node.node_type);
        self.nodes.push(node);
        id
    }

    /// Merges `patch` into the node's data. Returns `false` if the node does not exist.
    pub fn update_node_data(&mut self, id: &NodeId, patch: NodeDataPatch) -> bool {
        match self.node_mut(id) {
            Some(node) => {
                patch.apply_to(&mut node.data);
                true
            }
            None => false,
        }
    }

    /// Replaces the node's position. Returns `false` if the node does not exist.
    pub fn move_node(&mut self, id: &NodeId, position: Position) -> bool {
        match self.node_mut(id) {
            Some(node) => {
                node.position = position;
                true
            }
            None => false,
        }
    }

    /// Removes a node and every connection that references it.
    ///
    /// Returns `false` (and leaves connections untouched) if the node did not exist.
    pub fn remove_node(&mut self, id: &NodeId) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id != *id);
        let removed = self.nodes.len() != before;
        if removed {
            self.connections.retain(|c| !c.touches(id));
            log::debug!("removed node {id} and its connections");
        }
        removed
    }

    /// Appends a connection. Endpoints, ports and duplicates are not validated.
    pub fn add_connection(&mut self, connection: Connection) {
        log::debug!(
            "connect {}/{} -> {}/{}",
            connection.source_node_id,
            connection.source_port,
            connection.target_node_id,
            connection.target_port
        );
        self.connections.push(connection);
    }

    /// Inserts a node together with a connection to or from it.
    pub fn insert_linked(&mut self, node: Node, connection: Connection) -> NodeId {
        let id = self.add_node(node);
        self.add_connection(connection);
        id
    }

    /// Connections whose endpoints both exist, paired with their source and target nodes.
    pub fn renderable_connections(&self) -> impl Iterator<Item = (&Connection, &Node, &Node)> {
        self.connections.iter().filter_map(move |c| {
            let source = self.node(&c.source_node_id)?;
            let target = self.node(&c.target_node_id)?;
            Some((c, source, target))
        })
    }

    /// Topmost node whose bounds contain the world-space point.
    ///
    /// Later nodes are painted above earlier ones, so the search runs back to front.
    pub fn node_at(&self, world: Position) -> Option<&Node> {
        self.nodes.iter().rev().find(|n| n.world_rect().contains(world))
    }
}

/// World-space anchor where connections enter a node.
pub fn input_anchor(node: &Node) -> Position {
    pos(node.position.x, node.position.y + PORT_ANCHOR_Y)
}

/// World-space anchor where connections leave a node.
pub fn output_anchor(node: &Node) -> Position {
    pos(node.position.x + NODE_WIDTH, node.position.y + PORT_ANCHOR_Y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, x: f32, y: f32) -> Node {
        Node::new(NodeId::from(id), NodeType::Logic, pos(x, y), NodeData::labeled(id))
    }

    fn link(id: &str, from: &str, to: &str) -> Connection {
        Connection::new(
            ConnectionId::from(id),
            (NodeId::from(from), "out-1"),
            (NodeId::from(to), "in-1"),
        )
    }

    fn three_node_chain() -> Workflow {
        let mut wf = Workflow::new();
        wf.add_node(node("a", 0.0, 0.0));
        wf.add_node(node("b", 300.0, 0.0));
        wf.add_node(node("c", 600.0, 0.0));
        wf.add_connection(link("ab", "a", "b"));
        wf.add_connection(link("bc", "b", "c"));
        wf.add_connection(link("ac", "a", "c"));
        wf
    }

    #[test]
    fn test_add_node_appends_in_order() {
        let mut wf = Workflow::new();
        let id = wf.add_node(node("x", 1.0, 2.0));
        wf.add_node(node("y", 3.0, 4.0));

        assert_eq!(id, NodeId::from("x"));
        let ids: Vec<&str> = wf.nodes().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["x", "y"]);
    }

    #[test]
    fn test_update_node_data_missing_id_is_noop() {
        let mut wf = three_node_chain();
        let before = wf.clone();

        assert!(!wf.update_node_data(&NodeId::from("zzz"), NodeDataPatch::label("nope")));
        assert_eq!(wf, before);

        assert!(wf.update_node_data(&NodeId::from("b"), NodeDataPatch::label("renamed")));
        assert_eq!(wf.node(&NodeId::from("b")).unwrap().data.label, "renamed");
    }

    #[test]
    fn test_move_node_replaces_position() {
        let mut wf = three_node_chain();
        assert!(wf.move_node(&NodeId::from("a"), pos(-5.0, 7.5)));
        assert_eq!(wf.node(&NodeId::from("a")).unwrap().position, pos(-5.0, 7.5));
        assert!(!wf.move_node(&NodeId::from("missing"), pos(0.0, 0.0)));
    }

    #[test]
    fn test_remove_node_removes_exactly_touching_connections() {
        let mut wf = three_node_chain();
        wf.add_node(node("d", 900.0, 0.0));
        wf.add_connection(link("cd", "c", "d"));

        assert!(wf.remove_node(&NodeId::from("b")));

        let nodes: Vec<&str> = wf.nodes().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(nodes, ["a", "c", "d"]);
        let conns: Vec<&str> = wf.connections().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(conns, ["ac", "cd"]);
    }

    #[test]
    fn test_remove_missing_node_keeps_dangling_connections() {
        let mut wf = Workflow::new();
        wf.add_node(node("a", 0.0, 0.0));
        wf.add_connection(link("ghost", "a", "nowhere"));

        assert!(!wf.remove_node(&NodeId::from("nowhere")));
        assert_eq!(wf.connections().len(), 1);
    }

    #[test]
    fn test_add_connection_does_not_validate() {
        let mut wf = Workflow::new();
        wf.add_connection(link("c1", "p", "q"));
        wf.add_connection(link("c1", "p", "q"));
        assert_eq!(wf.connections().len(), 2);
    }

    #[test]
    fn test_renderable_connections_skip_dangling() {
        let mut wf = three_node_chain();
        wf.add_connection(link("dangling", "c", "gone"));

        let ids: Vec<&str> = wf
            .renderable_connections()
            .map(|(c, _, _)| c.id.as_str())
            .collect();
        assert_eq!(ids, ["ab", "bc", "ac"]);
    }

    #[test]
    fn test_port_anchors_use_fixed_offsets() {
        let n = node("n", 100.0, 300.0);
        assert_eq!(input_anchor(&n), pos(100.0, 360.0));
        assert_eq!(output_anchor(&n), pos(340.0, 360.0));
    }

    #[test]
    fn test_node_at_prefers_later_nodes() {
        let mut wf = Workflow::new();
        wf.add_node(node("under", 0.0, 0.0));
        wf.add_node(node("over", 100.0, 50.0));

        assert_eq!(wf.node_at(pos(150.0, 80.0)).unwrap().id.as_str(), "over");
        assert_eq!(wf.node_at(pos(10.0, 10.0)).unwrap().id.as_str(), "under");
        assert!(wf.node_at(pos(-1.0, -1.0)).is_none());
    }
}
