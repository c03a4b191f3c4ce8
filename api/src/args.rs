use clap::Parser;
use nutritrack_core::domain::common::{
    AuthConfig, DatabaseConfig, GoogleOAuthConfig, NutritrackConfig,
};

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    /// Port of the HTTP server
    #[clap(long, env = "PORT", default_value = "3001")]
    pub port: u16,

    /// Root path for every API route
    #[clap(long, env = "ROOT_PATH", default_value = "/api")]
    pub root_path: String,

    /// Origins allowed by CORS
    #[clap(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173,http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    /// Frontend URL used for OAuth callback redirects
    #[clap(long, env = "FRONTEND_URL", default_value = "http://localhost:5173")]
    pub frontend_url: String,

    #[clap(long, env = "LOG_JSON", default_value = "false")]
    pub log_json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[clap(long = "db-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[clap(id = "db_port", long = "db-port", env = "DATABASE_PORT", default_value = "5432")]
    pub port: u16,

    #[clap(long = "db-user", env = "DATABASE_USER", default_value = "postgres")]
    pub username: String,

    #[clap(long = "db-password", env = "DATABASE_PASSWORD", default_value = "postgres")]
    pub password: String,

    #[clap(long = "db-name", env = "DATABASE_NAME", default_value = "nutritrack")]
    pub name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct AuthArgs {
    #[clap(long, env = "JWT_SECRET", default_value = "dev-secret-change-me")]
    pub jwt_secret: String,

    /// Login sessions (and tokens) expire after this many days
    #[clap(long, env = "SESSION_TTL_DAYS", default_value = "7")]
    pub session_ttl_days: i64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct OAuthArgs {
    #[clap(long, env = "GOOGLE_CLIENT_ID")]
    pub google_client_id: Option<String>,

    #[clap(long, env = "GOOGLE_CLIENT_SECRET")]
    pub google_client_secret: Option<String>,

    #[clap(long, env = "GOOGLE_REDIRECT_URI")]
    pub google_redirect_uri: Option<String>,
}

#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub oauth: OAuthArgs,
}

impl From<Args> for NutritrackConfig {
    fn from(args: Args) -> Self {
        // OAuth stays disabled unless all three Google values are present.
        let oauth = match (
            args.oauth.google_client_id,
            args.oauth.google_client_secret,
            args.oauth.google_redirect_uri,
        ) {
            (Some(client_id), Some(client_secret), Some(redirect_uri)) => Some(GoogleOAuthConfig {
                client_id,
                client_secret,
                redirect_uri,
            }),
            _ => None,
        };

        NutritrackConfig {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.username,
                password: args.db.password,
                name: args.db.name,
            },
            auth: AuthConfig {
                jwt_secret: args.auth.jwt_secret,
                session_ttl_days: args.auth.session_ttl_days,
            },
            oauth,
        }
    }
}
