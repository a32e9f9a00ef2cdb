//! 顶点坐标累加器
//!
//! 计算均值只需要各轴的累加和与顶点数量，不需要保留每个顶点。

use nalgebra::{Point3, Vector3};

use super::vertex::Vertex;

/// 各轴坐标的累加和及顶点计数
///
/// 每次扫描创建一个，扫描结束时通过 `finish` 消费掉。
#[derive(Debug, Clone, PartialEq)]
pub struct Accumulator {
    sum: Vector3<f64>,
    count: usize,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulator {
    pub fn new() -> Self {
        Self {
            sum: Vector3::zeros(),
            count: 0,
        }
    }

    /// 累加一个顶点
    #[inline]
    pub fn push(&mut self, vertex: Vertex) {
        self.sum += vertex.position.coords;
        self.count += 1;
    }

    /// 当前均值，没有顶点时为 `None`
    pub fn mean(&self) -> Option<Point3<f64>> {
        if self.count == 0 {
            return None;
        }
        Some(Point3::from(self.sum / self.count as f64))
    }

    /// 结束累加，返回均值和顶点数
    pub fn finish(self) -> Option<(Point3<f64>, usize)> {
        self.mean().map(|mean| (mean, self.count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn accumulate<'a>(vertices: impl IntoIterator<Item = &'a Vertex>) -> Accumulator {
        let mut acc = Accumulator::new();
        for vertex in vertices {
            acc.push(*vertex);
        }
        acc
    }

    #[test]
    fn test_empty_has_no_mean() {
        let acc = Accumulator::new();
        assert!(acc.mean().is_none());
        assert!(acc.finish().is_none());
    }

    #[test]
    fn test_tetrahedron_corners() {
        let acc = accumulate(&[
            Vertex::new(0.0, 0.0, 0.0),
            Vertex::new(2.0, 0.0, 0.0),
            Vertex::new(0.0, 2.0, 0.0),
            Vertex::new(0.0, 0.0, 2.0),
        ]);

        assert_eq!(acc.sum, Vector3::new(2.0, 2.0, 2.0));

        let (mean, count) = acc.finish().unwrap();
        assert_eq!(count, 4);
        assert_relative_eq!(mean, Point3::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_order_does_not_matter() {
        let vertices = [
            Vertex::new(1.5, -3.25, 10.0),
            Vertex::new(-7.0, 0.125, 2.5),
            Vertex::new(0.3, 0.7, -1.1),
        ];

        let forward = accumulate(vertices.iter());
        let backward = accumulate(vertices.iter().rev());

        assert_relative_eq!(
            forward.mean().unwrap(),
            backward.mean().unwrap(),
            max_relative = 1e-12
        );
    }
}
