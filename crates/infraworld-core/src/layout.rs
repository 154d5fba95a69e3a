//! 预编译产物目录布局（外部约定）。
//!
//! 工程根目录下的约定结构：
//! - `GrpcIncludes/include`：gRPC 头文件
//! - `GrpcIncludes/third_party/protobuf/src`：内置 protobuf 源码头文件
//! - `GrpcLibraries/<平台>/*.lib|*.a`：平台静态库（平铺，不嵌套）
//!
//! 约定：
//! - 目录名属于与产物打包流程共享的版本化约定，集中在 [`ArtifactLayout`]，不散落在解析逻辑中
//! - 所有字段通过 `#[serde(default)]` 提供默认值，JSON 覆盖文件可只写需要改动的字段
//!
//! 作者：Infraworld 项目组
//! 创建时间：2026-10-18
//! 修改时间：2026-10-18

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// 头文件根目录名。
pub const INCLUDE_FOLDER: &str = "GrpcIncludes";

/// 静态库根目录名。
pub const LIBRARY_FOLDER: &str = "GrpcLibraries";

/// 产物目录布局。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactLayout {
    #[serde(default = "default_include_folder")]
    /// 头文件根目录名（相对工程根目录）。
    pub include_folder: String,
    #[serde(default = "default_library_folder")]
    /// 静态库根目录名（相对工程根目录）。
    pub library_folder: String,
    #[serde(default = "default_header_subpaths")]
    /// 头文件搜索路径（相对头文件根目录，按顺序输出）。
    pub header_subpaths: Vec<Vec<String>>,
}

fn default_include_folder() -> String {
    INCLUDE_FOLDER.to_string()
}

fn default_library_folder() -> String {
    LIBRARY_FOLDER.to_string()
}

fn default_header_subpaths() -> Vec<Vec<String>> {
    vec![
        vec!["include".to_string()],
        vec![
            "third_party".to_string(),
            "protobuf".to_string(),
            "src".to_string(),
        ],
    ]
}

impl Default for ArtifactLayout {
    fn default() -> Self {
        Self {
            include_folder: default_include_folder(),
            library_folder: default_library_folder(),
            header_subpaths: default_header_subpaths(),
        }
    }
}

impl ArtifactLayout {
    /// 读取 JSON 布局覆盖文件。
    ///
    /// 异常处理：
    /// - 文件读取失败或 JSON 解析失败返回错误
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).with_context(|| format!("读取布局文件失败: {}", path.display()))?;
        let layout: ArtifactLayout = serde_json::from_slice(&bytes)
            .with_context(|| format!("解析布局 JSON 失败: {}", path.display()))?;
        Ok(layout)
    }

    pub fn include_root(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.include_folder)
    }

    pub fn library_root(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.library_folder)
    }

    /// 头文件搜索路径，按配置顺序；不检查是否存在。
    pub fn header_paths(&self, project_root: &Path) -> Vec<PathBuf> {
        let include_root = self.include_root(project_root);
        self.header_subpaths
            .iter()
            .map(|parts| parts.iter().fold(include_root.clone(), |acc, p| acc.join(p)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_header_paths_keep_order() {
        let root = Path::new("/proj");
        let headers = ArtifactLayout::default().header_paths(root);
        assert_eq!(
            headers,
            vec![
                root.join("GrpcIncludes").join("include"),
                root.join("GrpcIncludes")
                    .join("third_party")
                    .join("protobuf")
                    .join("src"),
            ]
        );
    }

    #[test]
    /// 只覆盖部分字段时，其余字段回落到默认值。
    fn partial_override_keeps_defaults() {
        let json = r#"{ "library_folder": "PrebuiltLibs" }"#;
        let layout: ArtifactLayout = serde_json::from_str(json).unwrap();
        assert_eq!(layout.include_folder, INCLUDE_FOLDER);
        assert_eq!(layout.library_folder, "PrebuiltLibs");
        assert_eq!(layout.header_subpaths.len(), 2);
    }
}
