//! Client configuration files on disk
//!
//! Two write modes are supported:
//! - Full overwrite of a generated document
//! - Selective merge of a single top-level key into a file owned by a client

pub mod managed_json;
pub mod paths;

pub use managed_json::{merge_mcp_servers, replace_field, write_json_document};
pub use paths::{MergeTarget, OverwriteTarget, TargetPaths};
