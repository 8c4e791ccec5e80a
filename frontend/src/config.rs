//! 编译期配置
//!
//! Trunk 构建时的环境变量经由 `option_env!` 固化进 WASM。

use petagenda::config::{ENV_API_URL, ENV_BACKEND, ENV_LOG};
use petagenda::RuntimeConfig;

fn build_env(name: &str) -> Option<String> {
    let value = match name {
        ENV_API_URL => option_env!("PETAGENDA_API_URL"),
        ENV_BACKEND => option_env!("PETAGENDA_BACKEND"),
        ENV_LOG => option_env!("PETAGENDA_LOG"),
        _ => None,
    };
    value.map(str::to_string)
}

/// 读取配置；无效值会被记录下来并回退到默认配置
pub fn load() -> (RuntimeConfig, Option<String>) {
    match RuntimeConfig::from_env(&build_env) {
        Ok(config) => (config, None),
        Err(e) => (RuntimeConfig::default(), Some(e.to_string())),
    }
}
