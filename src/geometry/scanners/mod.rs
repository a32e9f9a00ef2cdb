/// 均值计算器模块
///
/// 提供统一的均值计算接口和 OBJ 格式的具体实现。
///
/// # 使用示例
///
/// ```rust,no_run
/// use mesh_mean::geometry::scanners::compute_mean;
///
/// if let Some((x, y, z)) = compute_mean("model.obj") {
///     println!("centroid: {x} {y} {z}");
/// }
/// ```
use crate::core::error::Result;
use crate::geometry::report::MeanReport;
use std::path::Path;

pub mod obj_scanner;
mod text_lines;

pub use obj_scanner::ObjMeanComputer;

/// 均值计算器 trait
///
/// 计算器是无状态的（使用静态方法），每次调用拥有自己的累加器。
pub trait MeanComputer {
    /// 从文件路径计算顶点均值
    ///
    /// # 错误
    ///
    /// - 文件无法打开
    /// - 读取中途失败
    /// - 文件中没有任何有效顶点
    fn mean_from_file(path: &Path) -> Result<MeanReport>;

    /// 从内存数据计算顶点均值
    fn mean_from_memory(data: &[u8]) -> Result<MeanReport>;

    /// 支持的文件扩展名列表（小写，不含点号）
    fn supported_extensions() -> &'static [&'static str];
}

/// 计算 OBJ 文件中所有顶点坐标的均值
///
/// 所有错误都在内部处理并记录为诊断日志，调用方只会看到成功的
/// `(mean_x, mean_y, mean_z)` 或 `None`。需要区分失败原因时使用
/// [`ObjMeanComputer::mean_from_file`]。
pub fn compute_mean<P: AsRef<Path>>(path: P) -> Option<(f64, f64, f64)> {
    ObjMeanComputer::mean_from_file(path.as_ref())
        .ok()
        .map(|report| report.mean_tuple())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::path::PathBuf;

    fn fixture(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "mesh_mean_compute_{}_{}.obj",
            std::process::id(),
            name
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_supported_extensions() {
        assert!(ObjMeanComputer::supported_extensions().contains(&"obj"));
    }

    #[test]
    fn test_compute_mean_tetrahedron() {
        let path = fixture("tetra", "v 0 0 0\nv 2 0 0\nv 0 2 0\nv 0 0 2\nf 1 2 3 4\n");
        let (x, y, z) = compute_mean(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_relative_eq!(x, 0.5);
        assert_relative_eq!(y, 0.5);
        assert_relative_eq!(z, 0.5);
    }

    #[test]
    fn test_compute_mean_missing_file() {
        assert_eq!(compute_mean("no/such/dir/missing.obj"), None);
    }

    #[test]
    fn test_compute_mean_without_vertices() {
        let path = fixture("faces_only", "# only faces\nf 1 2 3\nvn 0 0 1\n\n");
        let result = compute_mean(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(result, None);
    }

    #[test]
    fn test_compute_mean_is_idempotent() {
        let path = fixture("idempotent", "v 0.1 0.2 0.3\nv -4 5e2 6.25\nv 7 8 9\n");
        let first = compute_mean(&path);
        let second = compute_mean(&path);
        let _ = std::fs::remove_file(&path);

        assert!(first.is_some());
        assert_eq!(first, second);
    }
}
