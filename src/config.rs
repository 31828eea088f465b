use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    pub session_file: String,
    pub cors_origin: String,
    pub seed_default_users: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let session_file =
            env::var("SESSION_FILE").unwrap_or_else(|_| "shiftcal-session.json".to_string());

        let cors_origin =
            env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string());

        let seed_default_users = match env::var("SEED_DEFAULT_USERS") {
            Ok(v) => v
                .parse::<bool>()
                .map_err(|_| "SEED_DEFAULT_USERS must be true or false".to_string())?,
            Err(_) => true,
        };

        Ok(Self {
            bind_addr,
            session_file,
            cors_origin,
            seed_default_users,
        })
    }
}
