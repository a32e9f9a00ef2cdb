/// OBJ 顶点均值计算器
///
/// 逐行扫描 Wavefront OBJ 文本，只关心 `v x y z` 顶点声明。
use super::text_lines::TextLines;
use super::MeanComputer;
use crate::core::error::{Result, ScanError};
use crate::geometry::accumulator::Accumulator;
use crate::geometry::report::MeanReport;
use crate::geometry::vertex::Vertex;
use crate::{scan_error, scan_info, scan_warn, span_trace};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// OBJ 格式均值计算器
///
/// # 行为
///
/// - 无法解析的顶点行会被跳过并记录警告，扫描继续
/// - 读取中途出现的其他错误会终止扫描，不返回部分结果
/// - 没有任何有效顶点时返回 `ScanError::NoVerticesFound`
///
/// # 使用示例
///
/// ```rust,no_run
/// use mesh_mean::geometry::scanners::{MeanComputer, ObjMeanComputer};
/// use std::path::Path;
///
/// let report = ObjMeanComputer::mean_from_file(Path::new("model.obj"))?;
/// println!("{} 个顶点, 均值 {}", report.vertex_count, report.mean);
/// # Ok::<(), mesh_mean::core::MeshMeanError>(())
/// ```
pub struct ObjMeanComputer;

impl ObjMeanComputer {
    /// 扫描任意带缓冲的读取器
    ///
    /// `source_name` 只用于诊断信息和结果中的来源标识。
    /// `\n`、`\r\n` 和单独的 `\r` 都视为换行。
    pub fn mean_from_reader<R: BufRead>(reader: R, source_name: &str) -> Result<MeanReport> {
        let span = span_trace!("scan", source = source_name);
        let _enter = span.enter();

        let mut acc = Accumulator::new();
        let mut skipped = Vec::new();

        for (idx, line) in TextLines::new(reader).enumerate() {
            let line_number = idx + 1;
            let line = match line {
                Ok(line) => line,
                Err(source) => {
                    let err = ScanError::ReadFailure {
                        source_name: source_name.to_string(),
                        line_number,
                        source,
                    };
                    scan_error!("读取文件时发生未知错误: {}", err);
                    return Err(err.into());
                }
            };

            match Vertex::parse_declaration(line_number, &line) {
                None => {}
                Some(Ok(vertex)) => acc.push(vertex),
                Some(Err(err)) => {
                    scan_warn!("无法解析顶点行，已跳过: {}", err);
                    skipped.push(err);
                }
            }
        }

        let Some((mean, vertex_count)) = acc.finish() else {
            let err = ScanError::NoVerticesFound {
                source_name: source_name.to_string(),
            };
            scan_error!("{}", err);
            return Err(err.into());
        };

        let report = MeanReport {
            source_name: source_name.to_string(),
            vertex_count,
            mean,
            skipped,
        };

        scan_info!(
            vertices = report.vertex_count,
            skipped = report.skipped.len(),
            "{}",
            report
        );

        Ok(report)
    }
}

impl MeanComputer for ObjMeanComputer {
    fn mean_from_file(path: &Path) -> Result<MeanReport> {
        // 文件句柄在函数返回时随 reader 一起释放
        let file = match File::open(path) {
            Ok(file) => file,
            Err(source) => {
                let err = ScanError::MissingFile {
                    path: path.to_path_buf(),
                    source,
                };
                scan_error!("{}", err);
                return Err(err.into());
            }
        };

        Self::mean_from_reader(BufReader::new(file), &path.display().to_string())
    }

    fn mean_from_memory(data: &[u8]) -> Result<MeanReport> {
        Self::mean_from_reader(data, "<memory>")
    }

    fn supported_extensions() -> &'static [&'static str] {
        &["obj"]
    }
}
