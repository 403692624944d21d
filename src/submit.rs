use crate::config::Config;

use self::{api::CompilerApi, error::SubmitError, models::request::CompileRequest};

pub mod api;
pub mod error;
pub mod models;
pub mod standard;

/// Printed verbatim when no compiler id is given. The list is a hand-picked
/// set of ids that exist on the public instance.
pub const USAGE: &str = "\
Usage: cerun <compiler-id>

Useful compiler ids:

g114      - x86-64 gcc 11.4
g133      - x86-64 gcc 13.3
g142      - x86-64 gcc 14.2
gsnapshot - x86-64 gcc (trunk)
clang1500 - x86-64 clang 15.0.0
clang1600 - x86-64 clang 16.0.0
clang1701 - x86-64 clang 17.0.1
clang1810 - x86-64 clang 18.1.0
clang1910 - x86-64 clang 19.1.0
vcpp_v19_latest_x64 - x64 msvc latest
";

/// Submits the configured source file to the remote compiler and returns the
/// raw response body.
///
/// The flow is strictly sequential: read the file, pick the standard flag,
/// build the request, issue the one POST. Any local failure aborts the
/// submission; whatever the service answers is returned untouched.
pub async fn run(config: &Config, compiler_id: &str) -> Result<String, SubmitError> {
    let source = tokio::fs::read_to_string(&config.source_file).await?;
    trace!("read {} bytes from {}", source.len(), config.source_file);

    let std_flag = standard::standard_flag(compiler_id);
    trace!("selected standard flag {} for {}", std_flag, compiler_id);

    let request = CompileRequest::new(source, std_flag);

    let api = CompilerApi::new(config.base_url.clone());
    api.compile(compiler_id, &request).await
}
