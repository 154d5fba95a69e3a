//! 依赖解析错误类型。
//!
//! 分类：
//! - 平台库目录缺失：不是错误，由匹配器直接返回空列表
//! - 工程根目录缺失/不可读：致命配置错误，必须向上传递
//! - 扩展名不匹配：不是错误，文件被过滤
//! - 匹配模式无法编译：返回错误，不当作“无匹配”
//!
//! 作者：Infraworld 项目组
//! 创建时间：2026-10-18
//! 修改时间：2026-10-18

use std::path::PathBuf;

use thiserror::Error;

/// 解析过程中可能出现的错误。
#[derive(Debug, Error)]
pub enum ResolveError {
    /// 工程根目录不存在或不可访问（`path` 为模块目录或给定的工程根目录）。
    #[error("无法定位工程根目录: {path}")]
    ProjectRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 目录存在但无法读取（权限、非目录等）。
    #[error("读取目录失败: {dir}")]
    ReadDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("未知平台标识: {0}")]
    UnknownPlatform(String),
    #[error("未知构建配置: {0}")]
    UnknownConfiguration(String),
    #[error("扩展名匹配模式无效: {pattern}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
