use tracing::debug;

use crate::config::StaticConfig;
use crate::errors::Result;

/// CLI / TUI 模式预处理
///
/// 校验配置；后端地址在第一次请求时才解析。
pub fn cli_tui_pre_startup(config: &StaticConfig) -> Result<()> {
    config.validate()?;
    debug!(
        "Configuration ok: site={}, hostname override={:?}, state={}",
        config.site.url, config.site.hostname, config.state.path
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes() {
        assert!(cli_tui_pre_startup(&StaticConfig::default()).is_ok());
    }

    #[test]
    fn test_bad_site_url_fails() {
        let mut config = StaticConfig::default();
        config.site.url = "ftp://example.com".to_string();
        assert!(cli_tui_pre_startup(&config).is_err());
    }
}
