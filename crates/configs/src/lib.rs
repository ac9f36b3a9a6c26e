use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
    /// 前端 SPA 构建产物目录
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
            worker_threads: Some(4),
            static_dir: default_static_dir(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

fn default_static_dir() -> String {
    "frontend".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_idle_timeout() -> u64 {
    600
}

fn default_max_lifetime() -> u64 {
    3600
}

fn default_acquire_timeout() -> u64 {
    5
}

fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

/// 文件不存在时使用默认值；文件存在但无法读取或解析时报错
fn load_or_default(path: &str) -> Result<AppConfig> {
    match load_from_file(path) {
        Ok(cfg) => Ok(cfg),
        Err(e) => {
            let missing = e
                .downcast_ref::<std::io::Error>()
                .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound);
            if missing {
                Ok(AppConfig::default())
            } else {
                Err(e.context(format!("配置文件 {path} 无效")))
            }
        }
    }
}

impl AppConfig {
    /// 读取 config.toml（缺失时使用默认值），叠加环境变量并校验。
    /// 未提供数据库连接串时返回错误，进程应拒绝启动。
    pub fn load_and_validate() -> Result<Self> {
        Self::load_and_validate_with(&config_path(), |key| std::env::var(key).ok())
    }

    /// 同 `load_and_validate`，配置路径与环境变量查找由调用方给出
    pub fn load_and_validate_with<F>(path: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = load_or_default(path)?;
        cfg.apply_env_with(lookup);
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// 用给定的查找函数覆盖配置项，便于测试时不触碰进程环境变量
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT").and_then(|p| p.parse::<u16>().ok()) {
            self.server.port = port;
        }
        if let Some(w) = lookup("TOKIO_WORKER_THREADS").and_then(|v| v.parse::<usize>().ok()) {
            self.server.worker_threads = Some(w);
        }
        if let Some(dir) = lookup("STATIC_DIR") {
            self.server.static_dir = dir;
        }
        self.database.normalize_from(&lookup);
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        // 归一化 server
        self.server.normalize()?;
        self.database.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port 必须在 1..=65535 范围内"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        if self.static_dir.trim().is_empty() {
            self.static_dir = default_static_dir();
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    fn normalize_from<F>(&mut self, lookup: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // 若 TOML 中未提供 URL，则尝试从环境变量填充
        if self.url.trim().is_empty() {
            if let Some(url) = lookup("DATABASE_URL") {
                self.url = url;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!(
                "database.url 为空；请在 config.toml 或环境变量 DATABASE_URL 中提供"
            ));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://")) {
            return Err(anyhow!("database.url 必须以 postgresql:// 或 postgres:// 开头"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections 必须 >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections 必须 >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database 超时配置必须为正整数秒"));
        }
        Ok(())
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    pub fn max_lifetime(&self) -> Duration {
        Duration::from_secs(self.max_lifetime_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_database_url_is_fatal() {
        let mut cfg = AppConfig::default();
        cfg.apply_env_with(env(&[]));
        let err = cfg.normalize_and_validate().unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn env_fills_database_url_and_server() {
        let mut cfg = AppConfig::default();
        cfg.apply_env_with(env(&[
            ("DATABASE_URL", "postgres://u:p@localhost:5432/site"),
            ("SERVER_HOST", "0.0.0.0"),
            ("SERVER_PORT", "9000"),
            ("STATIC_DIR", "dist/public"),
        ]));
        cfg.normalize_and_validate().expect("valid config");
        assert_eq!(cfg.server.bind_addr(), "0.0.0.0:9000");
        assert_eq!(cfg.server.static_dir, "dist/public");
        assert_eq!(cfg.database.url, "postgres://u:p@localhost:5432/site");
    }

    #[test]
    fn toml_url_wins_over_env() {
        let mut cfg: AppConfig = toml::from_str(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8081

            [database]
            url = "postgresql://db/site"
            "#,
        )
        .expect("parse toml");
        cfg.apply_env_with(env(&[("DATABASE_URL", "postgres://other/site")]));
        cfg.normalize_and_validate().expect("valid config");
        assert_eq!(cfg.database.url, "postgresql://db/site");
        assert_eq!(cfg.database.max_connections, 10);
        assert_eq!(cfg.server.static_dir, "frontend");
        assert_eq!(cfg.server.worker_threads, Some(4));
    }

    fn temp_config(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("configs-{}-{name}.toml", std::process::id()));
        std::fs::write(&path, content).expect("write temp config");
        path
    }

    #[test]
    fn malformed_config_file_is_fatal() {
        let path = temp_config("malformed", "[server]\nport = \"not-a-number");
        let res = AppConfig::load_and_validate_with(
            &path.to_string_lossy(),
            env(&[("DATABASE_URL", "postgres://localhost/site")]),
        );
        let _ = std::fs::remove_file(&path);
        let err = res.expect_err("malformed config must not fall back to defaults");
        assert!(err.to_string().contains("无效"));
    }

    #[test]
    fn missing_config_file_uses_defaults() {
        let cfg = AppConfig::load_and_validate_with(
            "/definitely/not/here/config.toml",
            env(&[("DATABASE_URL", "postgres://localhost/site")]),
        )
        .expect("defaults when file is absent");
        assert_eq!(cfg.server.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn config_file_values_are_loaded() {
        let path = temp_config("valid", "[server]\nhost = \"0.0.0.0\"\nport = 7000\n");
        let cfg = AppConfig::load_and_validate_with(
            &path.to_string_lossy(),
            env(&[("DATABASE_URL", "postgres://localhost/site")]),
        );
        let _ = std::fs::remove_file(&path);
        assert_eq!(cfg.expect("valid config").server.bind_addr(), "0.0.0.0:7000");
    }

    #[test]
    fn rejects_non_postgres_scheme() {
        let mut cfg = AppConfig::default();
        cfg.database.url = "mongodb://localhost/site".into();
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn rejects_inverted_pool_bounds() {
        let mut cfg = AppConfig::default();
        cfg.database.url = "postgres://localhost/site".into();
        cfg.database.min_connections = 5;
        cfg.database.max_connections = 2;
        assert!(cfg.normalize_and_validate().is_err());
    }
}
