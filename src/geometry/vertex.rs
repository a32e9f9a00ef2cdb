/// 顶点声明解析模块
///
/// OBJ 文件中顶点位置以 `v x y z` 的形式声明，其余以 `vn`、`vt`、`f`、`#`
/// 等开头的行与均值计算无关。

use nalgebra::Point3;

use crate::core::error::{VertexLineError, VertexLineErrorKind};

/// 顶点声明的行首标记（小写 v 加一个空格）
pub const VERTEX_MARKER: &str = "v ";

/// 从一行顶点声明中解析出的顶点位置
///
/// 只在扫描期间短暂存在，累加进 `Accumulator` 后即被丢弃。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// 顶点位置 (x, y, z)
    pub position: Point3<f64>,
}

impl Vertex {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: Point3::new(x, y, z),
        }
    }

    /// 解析一行文本
    ///
    /// # 返回
    ///
    /// - `None`: 不是顶点声明，调用方应忽略该行
    /// - `Some(Ok(vertex))`: 解析成功
    /// - `Some(Err(e))`: 是顶点声明但坐标缺失或不是数字
    ///
    /// 第 3 个坐标之后的字段（例如可选的 w 分量）被忽略。
    pub fn parse_declaration(
        line_number: usize,
        line: &str,
    ) -> Option<Result<Vertex, VertexLineError>> {
        let trimmed = line.trim();
        if !trimmed.starts_with(VERTEX_MARKER) {
            return None;
        }

        let mut fields = trimmed.split_whitespace().skip(1);
        let mut coords = [0.0_f64; 3];

        for (offset, coord) in coords.iter_mut().enumerate() {
            let index = offset + 1;
            let kind = match fields.next() {
                None => VertexLineErrorKind::MissingField { index },
                Some(value) => match value.parse::<f64>() {
                    Ok(parsed) => {
                        *coord = parsed;
                        continue;
                    }
                    Err(source) => VertexLineErrorKind::InvalidNumber {
                        index,
                        value: value.to_string(),
                        source,
                    },
                },
            };

            return Some(Err(VertexLineError {
                line_number,
                content: trimmed.to_string(),
                kind,
            }));
        }

        Some(Ok(Vertex::new(coords[0], coords[1], coords[2])))
    }
}
