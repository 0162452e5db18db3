use std::env;

// Immutable snapshot of the service environment, read once at startup.
// Origin admission works off this snapshot, never off live env state.
#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub app_env: String,
    pub frontend_url: Option<String>,
    pub vercel_domains: Vec<String>,
    pub renderer_url: String,
    pub mailer_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(3000);
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let frontend_url = env::var("FRONTEND_URL").ok().filter(|url| !url.is_empty());
        let vercel_domains = env::var("VERCEL_DOMAINS")
            .map(|raw| split_domains(&raw))
            .unwrap_or_default();
        let renderer_url = env::var("RENDERER_SERVICE_URL")
            .unwrap_or_else(|_| "http://localhost:3003".to_string());
        let mailer_url = env::var("MAILER_SERVICE_URL")
            .unwrap_or_else(|_| "http://localhost:3004".to_string());

        Self {
            port,
            app_env,
            frontend_url,
            vercel_domains,
            renderer_url,
            mailer_url,
        }
    }

    // Exact-match origin allow-list derived from this snapshot. Local dev
    // origins are only listed outside production; suffix and local-marker
    // rules live in the policy itself.
    pub fn allowed_origins(&self) -> Vec<String> {
        let mut origins = Vec::new();

        if let Some(url) = &self.frontend_url {
            origins.push(url.clone());
        }
        origins.extend(self.vercel_domains.iter().cloned());

        if self.app_env != "production" {
            origins.push("http://localhost:3000".to_string());
            origins.push("http://localhost:5173".to_string());
        }

        origins
    }
}

fn split_domains(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|domain| !domain.is_empty())
        .map(str::to_string)
        .collect()
}
