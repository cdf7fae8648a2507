use super::*;

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8010);
    assert_eq!(config.server.environment, Environment::Development);
    assert_eq!(config.server.allowed_origins, vec!["*"]);
    assert!(config.server.allows_any_origin());
    assert_eq!(config.model.name, "gemini-2.5-flash");
    assert_eq!(config.session.db_url, "sqlite:///./sessions.db");
    assert!(config.cloud.project.is_none());
    assert_eq!(config.cloud.location, "us-central1");
    assert!(!config.logging.cloud_logging);
    assert!(config.logging.dir.is_none());
    assert_eq!(config.agents.names(), vec!["movie_pitch_agent"]);
}

#[test]
fn test_environment_from_string() {
    assert_eq!(Environment::from("production".to_string()), Environment::Production);
    assert_eq!(Environment::from(" Development ".to_string()), Environment::Development);
    assert_eq!(
        Environment::from("staging".to_string()),
        Environment::Other("staging".to_string())
    );
}

#[test]
fn test_environment_display_and_flags() {
    assert_eq!(Environment::Production.to_string(), "production");
    assert_eq!(Environment::Other("qa".into()).to_string(), "qa");
    assert!(Environment::Development.is_development());
    assert!(Environment::Production.is_production());
    assert!(!Environment::Other("qa".into()).is_production());
}

#[test]
fn test_environment_serde_as_string() {
    let config: ServerConfig = toml::from_str(r#"environment = "production""#).unwrap();
    assert_eq!(config.environment, Environment::Production);

    let rendered = toml::to_string(&config).unwrap();
    assert!(rendered.contains(r#"environment = "production""#));
}

#[test]
fn test_session_scheme() {
    let session = SessionConfig::default();
    assert_eq!(session.scheme(), Some("sqlite"));

    let session = SessionConfig {
        db_url: "postgresql://db/sessions".to_string(),
    };
    assert_eq!(session.scheme(), Some("postgresql"));

    let session = SessionConfig {
        db_url: "sessions.db".to_string(),
    };
    assert_eq!(session.scheme(), None);

    let session = SessionConfig {
        db_url: "://nowhere".to_string(),
    };
    assert_eq!(session.scheme(), None);
}

#[test]
fn test_explicit_origins_do_not_allow_any() {
    let server = ServerConfig {
        allowed_origins: vec!["https://a.example".into(), "https://b.example".into()],
        ..ServerConfig::default()
    };
    assert!(!server.allows_any_origin());
}
