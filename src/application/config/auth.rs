use std::env;

/// bcrypt rejects costs outside this range
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Work factor for password hashing (env: `ECOTRIP_BCRYPT_COST`)
    pub bcrypt_cost: u32,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            bcrypt_cost: env::var("ECOTRIP_BCRYPT_COST")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .map(|cost| cost.clamp(MIN_BCRYPT_COST, MAX_BCRYPT_COST))
                .unwrap_or(bcrypt::DEFAULT_COST),
        }
    }
}
