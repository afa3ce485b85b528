pub const SUPERJOB_API_KEY: &str = "SUPERJOB_API_KEY";

/// Supplies api credentials to job site clients
pub trait CredentialProvider {
    fn superjob_api_key(&self) -> Option<String>;
}

/// Reads credentials from the process environment, call `dotenv()` beforehand to pick up `.env`
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvCredentials;

impl CredentialProvider for EnvCredentials {
    fn superjob_api_key(&self) -> Option<String> {
        std::env::var(SUPERJOB_API_KEY)
            .ok()
            .map(|key| key.trim().to_owned())
            .filter(|key| !key.is_empty())
    }
}

#[derive(Debug, Default, Clone)]
pub struct StaticCredentials {
    pub superjob_api_key: Option<String>,
}

impl StaticCredentials {
    pub fn new(superjob_api_key: impl Into<String>) -> Self {
        Self {
            superjob_api_key: Some(superjob_api_key.into()),
        }
    }
}

impl CredentialProvider for StaticCredentials {
    fn superjob_api_key(&self) -> Option<String> {
        self.superjob_api_key.clone()
    }
}
