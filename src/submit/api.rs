use reqwest::header::CONTENT_TYPE;

use super::{error::SubmitError, models::request::CompileRequest};

/// HTTP boundary to the remote compilation service.
pub struct CompilerApi {
    base_url: String,
    client: reqwest::Client,
}

impl CompilerApi {
    pub fn new(base_url: String) -> Self {
        CompilerApi {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// The compiler id lands in the path exactly as given; the service owns
    /// all validation of it.
    pub fn compile_url(&self, compiler_id: &str) -> String {
        format!("{}/api/compiler/{}/compile", self.base_url, compiler_id)
    }

    /// Issues the one POST of a submission and hands back the raw body,
    /// whatever it is. No timeout is configured, the call waits until the
    /// service answers or the transport gives up.
    pub async fn compile(
        &self,
        compiler_id: &str,
        request: &CompileRequest,
    ) -> Result<String, SubmitError> {
        let url = self.compile_url(compiler_id);
        trace!("posting submission to {}", url);

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(serde_json::to_string(request)?)
            .send()
            .await?;

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::CompilerApi;

    #[test]
    fn url_is_base_plus_compiler_path() {
        let api = CompilerApi::new("https://godbolt.org".to_string());
        assert_eq!(
            api.compile_url("g142"),
            "https://godbolt.org/api/compiler/g142/compile"
        );
    }

    #[test]
    fn compiler_id_is_not_encoded_or_validated() {
        let api = CompilerApi::new("http://127.0.0.1:5000".to_string());
        assert_eq!(
            api.compile_url("vcpp_v19 latest+x64"),
            "http://127.0.0.1:5000/api/compiler/vcpp_v19 latest+x64/compile"
        );
    }
}
