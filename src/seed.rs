//! Built-in starter pipeline loaded when the editor opens.

use crate::types::*;
use crate::workflow::Workflow;

/// Video source → detection → (tracking | zone filter) → database sink.
pub fn starter_pipeline() -> Workflow {
    let mut wf = Workflow::new();

    wf.add_node(
        Node::new(
            NodeId::from("1"),
            NodeType::Input,
            pos(100.0, 300.0),
            NodeData::labeled("Video Source")
                .with_description("RTSP Stream 01")
                .with_status(NodeStatus::Running),
        )
        .with_ports(&[], &["out-1"]),
    );
    wf.add_node(
        Node::new(
            NodeId::from("2"),
            NodeType::Detection,
            pos(450.0, 200.0),
            NodeData::labeled("YOLOv8 Detection")
                .with_description("Person, Car")
                .with_status(NodeStatus::Running),
        )
        .with_ports(&["in-2"], &["out-2"]),
    );
    wf.add_node(
        Node::new(
            NodeId::from("3"),
            NodeType::Tracking,
            pos(800.0, 200.0),
            NodeData::labeled("ByteTrack")
                .with_description("High speed tracking")
                .with_status(NodeStatus::Idle),
        )
        .with_ports(&["in-3"], &["out-3"]),
    );
    wf.add_node(
        Node::new(
            NodeId::from("4"),
            NodeType::Logic,
            pos(800.0, 400.0),
            NodeData::labeled("Zone Filter")
                .with_description("Exclude Safe Zone")
                .with_status(NodeStatus::Idle),
        )
        .with_ports(&["in-4"], &["out-4"]),
    );
    wf.add_node(
        Node::new(
            NodeId::from("5"),
            NodeType::Output,
            pos(1150.0, 300.0),
            NodeData::labeled("Database Sink")
                .with_description("PostgreSQL")
                .with_status(NodeStatus::Idle),
        )
        .with_ports(&["in-5"], &[]),
    );

    for (id, from, out, to, inp) in [
        ("c1", "1", "out-1", "2", "in-2"),
        ("c2", "2", "out-2", "3", "in-3"),
        ("c3", "2", "out-2", "4", "in-4"),
        ("c4", "3", "out-3", "5", "in-5"),
    ] {
        wf.add_connection(Connection::new(
            ConnectionId::from(id),
            (NodeId::from(from), out),
            (NodeId::from(to), inp),
        ));
    }

    wf
}
