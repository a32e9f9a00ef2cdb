//! mesh_mean - OBJ 顶点均值计算
//!
//! 读取 Wavefront OBJ 文本文件，计算所有顶点坐标的算术平均值，
//! 用于快速检查模型是否居中、是否与管线中的其他资源对齐。
//!
//! # 模块结构
//!
//! - `core`: 核心功能模块（日志、配置、错误处理）
//! - `geometry`: 顶点解析、累加与均值计算
//!
//! # 使用示例
//!
//! ```no_run
//! use mesh_mean::compute_mean;
//!
//! match compute_mean("assets/F1_car/rearleft.obj") {
//!     Some((x, y, z)) => println!("均值: ({x:.6}, {y:.6}, {z:.6})"),
//!     None => println!("无法计算均值"),
//! }
//! ```

pub mod core;
pub mod geometry;

pub use geometry::compute_mean;
