/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound (driven) ports exist: the use cases are called directly by
/// the CLI, and reach the network, console and file system through these.
pub mod outbound;
