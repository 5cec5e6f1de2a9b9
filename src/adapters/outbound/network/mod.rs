/// Network adapters for external API calls
mod reqwest_transport;

pub use reqwest_transport::ReqwestTransport;
