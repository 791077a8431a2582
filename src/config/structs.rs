use serde::{Deserialize, Serialize};

use crate::errors::{LinkfrontError, Result};

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 环境变量前缀，例如 `LF__SITE__URL=https://s.example.com`
pub const ENV_PREFIX: &str = "LF";

/// 静态配置（从 TOML 加载，启动时使用）
///
/// - site: 站点地址与 hostname 覆盖
/// - api: 后端接口凭据
/// - http: HTTP 客户端参数
/// - state: 本地设置文件（主题、会话 cookie）
/// - qr: 二维码颜色与 logo
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub state: StateConfig,
    #[serde(default)]
    pub qr: QrConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > config.toml > 默认值
    /// ENV 前缀：LF，分隔符：__
    /// 示例：LF__SITE__URL=https://s.example.com
    pub fn load(path: Option<&str>) -> Self {
        use config::{Config, Environment, File};

        let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

        let builder = Config::builder()
            // 1. 从 TOML 文件加载（可选）
            .add_source(File::with_name(path).required(false))
            // 2. 从环境变量覆盖
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            );

        match builder.build() {
            Ok(settings) => match settings.try_deserialize::<StaticConfig>() {
                Ok(config) => {
                    if std::path::Path::new(path).exists() {
                        eprintln!("[INFO] Configuration loaded from: {}", path);
                    }
                    config
                }
                Err(e) => {
                    eprintln!("[ERROR] Failed to deserialize config: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("[ERROR] Failed to build config: {}", e);
                Self::default()
            }
        }
    }

    /// Check the values that every flow depends on.
    pub fn validate(&self) -> Result<()> {
        let site = url::Url::parse(&self.site.url)?;
        if !matches!(site.scheme(), "http" | "https") {
            return Err(LinkfrontError::configuration(format!(
                "site.url must be http:// or https://, got '{}'",
                self.site.url
            )));
        }
        if let Some(hostname) = &self.site.hostname
            && hostname.trim().is_empty()
        {
            return Err(LinkfrontError::configuration(
                "site.hostname is set but empty",
            ));
        }
        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(LinkfrontError::configuration(format!(
                "logging.format must be 'text' or 'json', got '{}'",
                self.logging.format
            )));
        }
        Ok(())
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
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

/// 站点配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Origin serving `/conf.yaml` and the front-end routes.
    #[serde(default = "default_site_url")]
    pub url: String,
    /// Skips fetching `/conf.yaml` when set.
    #[serde(default)]
    pub hostname: Option<String>,
}

/// 后端接口配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiConfig {
    /// Sent as `Authorization: Bearer` on credentialed calls.
    #[serde(default)]
    pub bearer_token: Option<String>,
}

/// HTTP 客户端配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Unset means the transport default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// 本地状态文件配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateConfig {
    #[serde(default = "default_state_path")]
    pub path: String,
}

/// 二维码配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrConfig {
    #[serde(default = "default_logo_path")]
    pub logo_path: Option<String>,
    #[serde(default = "default_dot_color")]
    pub dot_color: String,
    #[serde(default = "default_background_color")]
    pub background_color: String,
    #[serde(default = "default_dot_color_dark")]
    pub dot_color_dark: String,
    #[serde(default = "default_background_color_dark")]
    pub background_color_dark: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_log_file")]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions for static config
// ============================================================

fn default_site_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_user_agent() -> String {
    concat!("linkfront/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_state_path() -> String {
    "linkfront-state.json".to_string()
}

fn default_logo_path() -> Option<String> {
    Some("icon-QR.png".to_string())
}

fn default_dot_color() -> String {
    "#000000".to_string()
}

fn default_background_color() -> String {
    "#ffffff".to_string()
}

fn default_dot_color_dark() -> String {
    "#e6e6e6".to_string()
}

fn default_background_color_dark() -> String {
    "#1f1f1f".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_log_file() -> Option<String> {
    None
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

// ============================================================
// Default implementations
// ============================================================

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: default_site_url(),
            hostname: None,
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            path: default_state_path(),
        }
    }
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            logo_path: default_logo_path(),
            dot_color: default_dot_color(),
            background_color: default_background_color(),
            dot_color_dark: default_dot_color_dark(),
            background_color_dark: default_background_color_dark(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: default_log_file(),
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}
