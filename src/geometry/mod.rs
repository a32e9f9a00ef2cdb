/// 几何体扫描模块
///
/// 从 OBJ 文本中提取顶点位置并计算各轴坐标均值。
///
/// # 模块结构
///
/// - `vertex`: 顶点声明的识别与解析
/// - `accumulator`: 累加和与计数
/// - `report`: 计算结果与摘要格式化
/// - `scanners`: 各种格式的均值计算器
///
/// # 数据流
///
/// ```text
/// 文件 (OBJ)
///     ↓ 逐行读取
/// Vertex::parse_declaration
///     ↓
/// Accumulator (sum, count)
///     ↓
/// MeanReport / (x, y, z)
/// ```

pub mod vertex;
pub mod accumulator;
pub mod report;
pub mod scanners;

// 重新导出常用类型
pub use vertex::Vertex;
pub use accumulator::Accumulator;
pub use report::MeanReport;
pub use scanners::{compute_mean, MeanComputer, ObjMeanComputer};
