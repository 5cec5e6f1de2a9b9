pub mod graph_node;
pub mod scan_id;
pub mod scan_request;
pub mod scan_result;

pub use graph_node::GraphNode;
pub use scan_id::ScanId;
pub use scan_request::{ResultInclusion, ScanRequest, ScanTarget};
pub use scan_result::{
    Component, Cve, ImpactPathNode, License, ScanResponse, Violation, Vulnerability,
};
