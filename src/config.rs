use std::env;

#[derive(Clone)]
pub struct Config {
    pub auth_token: String,
    pub port: u16,
    pub database_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            auth_token: env::var("AUTH_TOKEN").expect("AUTH_TOKEN must be set"),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            database_dir: env::var("DATABASE_DIR").unwrap_or_else(|_| "./database".to_string()),
        }
    }
}
