/// 均值计算结果
///
/// 成功扫描后返回的详细信息：来源、顶点数、均值以及被跳过的顶点行。

use nalgebra::Point3;
use std::fmt;

use crate::core::error::VertexLineError;

/// 默认输出的小数位数
pub const DEFAULT_PRECISION: usize = 6;

#[derive(Debug)]
pub struct MeanReport {
    /// 数据来源（文件路径或内存数据的名称）
    pub source_name: String,

    /// 成功解析的顶点数，总是大于 0
    pub vertex_count: usize,

    /// 各轴坐标均值
    pub mean: Point3<f64>,

    /// 被跳过的顶点声明行
    pub skipped: Vec<VertexLineError>,
}

impl MeanReport {
    /// 均值三元组 (x, y, z)
    #[inline]
    pub fn mean_tuple(&self) -> (f64, f64, f64) {
        (self.mean.x, self.mean.y, self.mean.z)
    }

    /// 以指定小数位数格式化摘要
    pub fn summary(&self, precision: usize) -> String {
        format!(
            "Read '{}': {} vertices, mean = (x: {:.p$}, y: {:.p$}, z: {:.p$})",
            self.source_name,
            self.vertex_count,
            self.mean.x,
            self.mean.y,
            self.mean.z,
            p = precision
        )
    }
}

impl fmt::Display for MeanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary(DEFAULT_PRECISION))
    }
}
