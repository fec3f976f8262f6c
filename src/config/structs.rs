use serde::{Deserialize, Serialize};

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 静态配置（从 TOML 加载，启动时使用）
///
/// - server: 监听地址、端口、worker 数量
/// - database: 数据库连接配置
/// - logging: 日志配置
/// - brand: 写入每条 lead 的运营方常量
/// - consent: 授权文案核对
/// - api: 接口行为
/// - cors: 跨域配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub brand: BrandConfig,
    #[serde(default)]
    pub consent: ConsentConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > TOML > 默认值
    /// ENV 前缀：LEADS，分隔符：__
    /// 示例：LEADS__SERVER__PORT=9999
    ///
    /// 文件不存在时只使用默认值和环境变量；文件存在但无法解析时返回错误。
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        use config::{Config, Environment, File, FileFormat};

        let settings = Config::builder()
            .add_source(File::new(path, FileFormat::Toml).required(false))
            .add_source(
                Environment::with_prefix("LEADS")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            )
            .build()?;

        let config = settings.try_deserialize::<StaticConfig>()?;
        if std::path::Path::new(path).exists() {
            eprintln!("[INFO] Configuration loaded from: {}", path);
        }
        Ok(config)
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
    #[serde(default = "default_cpu_count")]
    pub cpu_count: usize,
}

/// 数据库连接配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_database_pool_size")]
    pub pool_size: u32,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

/// 运营方常量，写入每一条 lead 的 brand / domain 列
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandConfig {
    #[serde(default = "default_brand_name")]
    pub name: String,
    #[serde(default = "default_brand_domain")]
    pub domain: String,
}

/// 授权文案核对
///
/// `canonical_text` 为空时不做任何比对，客户端文案原样入库。
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConsentConfig {
    #[serde(default)]
    pub canonical_text: Option<String>,
    #[serde(default)]
    pub enforce_canonical: bool,
}

/// 接口行为配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// 500 响应中是否透传底层错误信息
    #[serde(default = "default_expose_internal_errors")]
    pub expose_internal_errors: bool,
    #[serde(default = "default_max_payload_bytes")]
    pub max_payload_bytes: usize,
}

/// CORS 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    #[serde(default = "default_cors_max_age")]
    pub max_age: u64,
}

// ============================================================
// Default value functions
// ============================================================

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_cpu_count() -> usize {
    num_cpus::get()
}

fn default_database_url() -> String {
    "leads.db".to_string()
}

fn default_database_pool_size() -> u32 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

fn default_brand_name() -> String {
    "Go Mejor Insurance".to_string()
}

fn default_brand_domain() -> String {
    "gomejorinsurance.com".to_string()
}

fn default_expose_internal_errors() -> bool {
    true
}

fn default_max_payload_bytes() -> usize {
    64 * 1024
}

fn default_cors_max_age() -> u64 {
    3600
}

// ============================================================
// Default implementations
// ============================================================

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            cpu_count: default_cpu_count(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            pool_size: default_database_pool_size(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            name: default_brand_name(),
            domain: default_brand_domain(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            expose_internal_errors: default_expose_internal_errors(),
            max_payload_bytes: default_max_payload_bytes(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            allowed_origins: Vec::new(),
            max_age: default_cors_max_age(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StaticConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.database_url, "leads.db");
        assert_eq!(config.brand.name, "Go Mejor Insurance");
        assert_eq!(config.brand.domain, "gomejorinsurance.com");
        assert!(config.consent.canonical_text.is_none());
        assert!(!config.consent.enforce_canonical);
        assert!(config.api.expose_internal_errors);
        assert!(!config.cors.enabled);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: StaticConfig = toml::from_str(
            r#"
            [brand]
            name = "Acme Leads"

            [consent]
            enforce_canonical = true
            "#,
        )
        .unwrap();
        assert_eq!(config.brand.name, "Acme Leads");
        assert_eq!(config.brand.domain, "gomejorinsurance.com");
        assert!(config.consent.enforce_canonical);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_sample_config_round_trips() {
        let sample = StaticConfig::generate_sample_config();
        assert!(sample.contains("[brand]"));
        let parsed: StaticConfig = toml::from_str(&sample).unwrap();
        assert_eq!(parsed.logging.level, "info");
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let config = StaticConfig::load_from("/nonexistent/leadintake.toml").unwrap();
        assert_eq!(config.api.max_payload_bytes, 64 * 1024);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[brand]\nname = \"Acme Leads\"\n").unwrap();

        let config = StaticConfig::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(config.brand.name, "Acme Leads");
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        // 类型错误不能静默回退到默认值
        std::fs::write(&path, "[server]\nport = \"not a port\"\n").unwrap();

        assert!(StaticConfig::load_from(path.to_str().unwrap()).is_err());
    }
}
