pub struct Config;

impl Config {
    pub const DEFAULT_API_BASE_URL: &'static str = "http://localhost:5000";

    /// localStorage key under which the sign-in flow keeps the bearer token.
    pub const TOKEN_STORAGE_KEY: &'static str = "token";

    /// Backend origin, baked in at build time through `API_BASE_URL`.
    pub fn api_base_url() -> String {
        Self::resolve_base_url(option_env!("API_BASE_URL"))
    }

    pub fn resolve_base_url(configured: Option<&str>) -> String {
        configured
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(Self::DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string()
    }
}
