use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Backend base URL, e.g. "http://192.168.1.5:8080/api"
    pub base_url: String,
    /// Skip the backend and browse the bundled sample catalog
    #[serde(default)]
    pub use_sample_data: bool,
}
