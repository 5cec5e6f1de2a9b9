/// Build-info domain - Publishing CI build metadata to the artifact repository
pub mod domain;
pub mod services;
