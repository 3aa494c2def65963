//! Static node library shown in the sidebar and the add-node popover.

use crate::types::NodeType;

/// Library grouping of node templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Video inputs
    Source,
    /// Inference stages
    AiModel,
    /// Routing and filtering
    Logic,
    /// Sinks
    Output,
}

impl Category {
    /// Categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Source,
        Category::AiModel,
        Category::Logic,
        Category::Output,
    ];

    /// Heading text.
    pub fn label(self) -> &'static str {
        match self {
            Category::Source => "Source",
            Category::AiModel => "AI Model",
            Category::Logic => "Logic",
            Category::Output => "Output",
        }
    }
}

/// A draggable node template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryEntry {
    /// Type of node created from this entry
    pub node_type: NodeType,
    /// Display name
    pub label: &'static str,
    /// Short list of example implementations
    pub description: &'static str,
    /// Group it is listed under
    pub category: Category,
}

/// Every library entry, in display order.
pub const CATALOG: [LibraryEntry; 7] = [
    LibraryEntry {
        node_type: NodeType::Input,
        label: "Video Source",
        description: "Camera, RTSP, File",
        category: Category::Source,
    },
    LibraryEntry {
        node_type: NodeType::Detection,
        label: "Object Detection",
        description: "YOLO, SSD, FasterRCNN",
        category: Category::AiModel,
    },
    LibraryEntry {
        node_type: NodeType::Tracking,
        label: "Object Tracking",
        description: "ByteTrack, DeepSort",
        category: Category::AiModel,
    },
    LibraryEntry {
        node_type: NodeType::Pose,
        label: "Pose Estimation",
        description: "MoveNet, PoseNet",
        category: Category::AiModel,
    },
    LibraryEntry {
        node_type: NodeType::Classifier,
        label: "Classification",
        description: "ResNet, MobileNet",
        category: Category::AiModel,
    },
    LibraryEntry {
        node_type: NodeType::Logic,
        label: "Logic Gate",
        description: "Filter, Switch, Merge",
        category: Category::Logic,
    },
    LibraryEntry {
        node_type: NodeType::Output,
        label: "Output Sink",
        description: "DB, API, File",
        category: Category::Output,
    },
];

/// Entries whose label contains `term`, ignoring case. An empty term matches everything.
pub fn search(term: &str) -> Vec<&'static LibraryEntry> {
    let needle = term.trim().to_lowercase();
    CATALOG
        .iter()
        .filter(|e| e.label.to_lowercase().contains(&needle))
        .collect()
}

/// Groups entries by category, in category order, dropping empty groups.
pub fn grouped(
    entries: &[&'static LibraryEntry],
) -> Vec<(Category, Vec<&'static LibraryEntry>)> {
    Category::ALL
        .into_iter()
        .filter_map(|cat| {
            let items: Vec<_> = entries.iter().copied().filter(|e| e.category == cat).collect();
            (!items.is_empty()).then_some((cat, items))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_node_type_is_listed_once() {
        for t in NodeType::ALL {
            assert_eq!(CATALOG.iter().filter(|e| e.node_type == t).count(), 1);
        }
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let hits = search("OBJECT");
        let types: Vec<NodeType> = hits.iter().map(|e| e.node_type).collect();
        assert_eq!(types, [NodeType::Detection, NodeType::Tracking]);

        assert_eq!(search("").len(), CATALOG.len());
        assert!(search("lidar").is_empty());
    }

    #[test]
    fn test_grouping_keeps_category_order_and_drops_empty() {
        let groups = grouped(&search("s"));
        let cats: Vec<Category> = groups.iter().map(|(c, _)| *c).collect();
        assert_eq!(cats, [Category::Source, Category::AiModel, Category::Output]);
        let ai: Vec<NodeType> = groups[1].1.iter().map(|e| e.node_type).collect();
        assert_eq!(ai, [NodeType::Pose, NodeType::Classifier]);

        let only_pose = grouped(&search("pose"));
        assert_eq!(only_pose.len(), 1);
        assert_eq!(only_pose[0].0, Category::AiModel);
        assert_eq!(only_pose[0].1[0].node_type, NodeType::Pose);
    }
}
