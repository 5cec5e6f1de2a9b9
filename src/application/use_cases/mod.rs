/// Use cases module containing application business logic orchestration
mod get_build_info;
mod publish_build_info;
mod scan_graph;

pub use get_build_info::GetBuildInfoUseCase;
pub use publish_build_info::PublishBuildInfoUseCase;
pub use scan_graph::ScanGraphUseCase;
