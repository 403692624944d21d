use serde::{Deserialize, Serialize};

/// Body of a compile-and-execute submission. Field names follow the wire
/// format of the remote API, camelCased where it differs from Rust.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompileRequest {
    pub(crate) source: String,
    pub(crate) options: CompileOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileOptions {
    pub(crate) user_arguments: String,
    pub(crate) filters: Filters,
    pub(crate) compiler_options: CompilerOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Filters {
    pub(crate) execute: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    pub(crate) executor_request: bool,
}

impl CompileRequest {
    /// Builds a submission body. Both execution flags are always on, this
    /// client never asks for compile-only.
    pub fn new(source: String, user_arguments: &str) -> Self {
        CompileRequest {
            source,
            options: CompileOptions {
                user_arguments: user_arguments.to_string(),
                filters: Filters { execute: true },
                compiler_options: CompilerOptions {
                    executor_request: true,
                },
            },
        }
    }
}
