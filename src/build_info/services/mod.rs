/// Build-info services
mod build_info_service;

pub use build_info_service::{BuildInfoService, BUILD_INFO_CONTENT_TYPE};
