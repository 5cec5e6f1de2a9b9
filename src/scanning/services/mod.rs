/// Scan services - submission, polling and decoding
mod graph_submission;
mod response_decoder;
mod result_poller;
mod scan_service;

pub use graph_submission::{submission_url, submit_graph, SCAN_GRAPH_API};
pub use response_decoder::ResponseDecoder;
pub use result_poller::{PollState, ResultPoller, DEFAULT_MAX_WAIT, DEFAULT_SYNC_SLEEP_INTERVAL};
pub use scan_service::ScanService;
