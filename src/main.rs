//! mesh_mean - OBJ 顶点均值命令行工具
//!
//! # 使用方法
//!
//! ```bash
//! mesh_mean assets/F1_car/rearleft.obj
//! mesh_mean model.obj --precision 3 --log-level warn
//! mesh_mean model.obj --config custom.toml --log-file logs/mesh_mean.log
//! mesh_mean --precision 3 --write-config mesh_mean.toml
//! ```
//!
//! 成功时退出码为 0，无法计算均值时为 1，参数或配置错误时为 2。

use mesh_mean::core::{log, Config};
use mesh_mean::geometry::{MeanComputer, ObjMeanComputer};
use mesh_mean::{app_error, app_info};
use std::path::Path;
use std::process::ExitCode;

const DEFAULT_CONFIG_FILE: &str = "mesh_mean.toml";

const USAGE: &str = "usage: mesh_mean <file.obj> [--config <file>] [--log-level <level>] \
[--log-file <path>] [--precision <n>] [--quiet-skipped] [--write-config <file>]";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    // 1. 加载配置（在初始化日志之前）
    let mut config = match Config::config_path(&args) {
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::from(2);
            }
        },
        None => Config::from_file_or_default(DEFAULT_CONFIG_FILE),
    };

    // 2. 应用命令行参数并验证
    if let Err(e) = config.apply_args(&args).and_then(|_| config.validate()) {
        eprintln!("Invalid configuration: {}", e);
        return ExitCode::from(2);
    }

    // 导出当前生效的配置后直接退出
    if let Some(path) = Config::write_config_path(&args) {
        return match config.save_to_file(path) {
            Ok(()) => {
                println!("Wrote configuration to {}", path);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{}", e);
                ExitCode::from(2)
            }
        };
    }

    let Some(input) = Config::input_path(&args) else {
        eprintln!("{}", USAGE);
        return ExitCode::from(2);
    };

    // 3. 初始化日志系统
    let log_file = config
        .logging
        .file_output
        .then_some(config.logging.log_file.as_str());
    log::init_logger(config.logging.level, config.logging.file_output, log_file);
    app_info!(version = env!("CARGO_PKG_VERSION"), input = %input, "mesh_mean starting");

    // 4. 计算均值
    let report = match ObjMeanComputer::mean_from_file(Path::new(input)) {
        Ok(report) => report,
        Err(e) => {
            app_error!("无法计算均值: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", report.summary(config.report.precision));
    if !report.skipped.is_empty() {
        println!("Skipped {} malformed vertex line(s)", report.skipped.len());
        if config.report.list_skipped {
            for line in &report.skipped {
                println!("  {}", line);
            }
        }
    }

    ExitCode::SUCCESS
}
