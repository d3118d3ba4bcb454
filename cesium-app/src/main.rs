use std::path::PathBuf;

use cesium_config::{AppConfig, ConfigError, OutputConfig};
use cesium_io::{JsFileSaver, ScriptSaver};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

mod demo;

fn main() {
    let mut args = std::env::args().skip(1);
    let mut config_override: Option<PathBuf> = None;
    let mut output_override: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let Some(path) = args.next() else {
                    eprintln!("`--config` 需要提供配置文件路径");
                    std::process::exit(1);
                };
                config_override = Some(PathBuf::from(path));
            }
            "--output" => {
                let Some(path) = args.next() else {
                    eprintln!("`--output` 需要提供输出文件路径");
                    std::process::exit(1);
                };
                output_override = Some(PathBuf::from(path));
            }
            other => {
                eprintln!("未知参数：{other}");
                std::process::exit(1);
            }
        }
    }

    let config = load_configuration(config_override);
    init_logging(&config);
    info!("生成 Cesium 示例实体");

    let scene = match demo::build_scene() {
        Ok(scene) => scene,
        Err(err) => {
            error!(error = %err, "构建示例场景失败");
            std::process::exit(1);
        }
    };
    let objects = demo::render_scene(&scene);

    let saver = script_saver(&config.output);
    match output_override.or(config.output.path) {
        Some(path) => {
            if let Err(err) = saver.save(&objects, &path) {
                error!(error = %err, "写入脚本失败");
                std::process::exit(1);
            }
            info!(path = %path.display(), count = objects.len(), "示例脚本已生成");
        }
        None => print!("{}", saver.format_script(&objects)),
    }
}

/// `[output] statement_prefix` 决定每行是否包裹成语句。
fn script_saver(output: &OutputConfig) -> JsFileSaver {
    match &output.statement_prefix {
        Some(prefix) => JsFileSaver::with_statement_prefix(prefix.clone()),
        None => JsFileSaver::new(),
    }
}

fn load_configuration(override_path: Option<PathBuf>) -> AppConfig {
    match override_path {
        Some(path) => AppConfig::from_file(&path).unwrap_or_else(|err| {
            warn!(path = %path.display(), error = %err, "加载指定配置失败，使用默认配置");
            AppConfig::default()
        }),
        None => match AppConfig::discover() {
            Ok(cfg) => cfg,
            Err(err) => {
                match &err {
                    ConfigError::Io { path, .. } | ConfigError::Parse { path, .. } => {
                        warn!(path = %path.display(), error = %err, "加载默认配置失败，使用内建默认值");
                    }
                    ConfigError::Context { .. } => {
                        warn!(error = %err, "加载默认配置失败，使用内建默认值");
                    }
                }
                AppConfig::default()
            }
        },
    }
}

fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_new(&config.logging.level).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = fmt().with_env_filter(filter).with_writer(std::io::stderr);
    if subscriber.try_init().is_err() {
        // 已初始化，忽略
    }
}
