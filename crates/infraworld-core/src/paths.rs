//! 工程根目录定位。
//!
//! 约定：
//! - 模块目录位于 `<工程根>/Source/<模块名>`，工程根目录即模块目录向上两级
//! - 工程根目录无法定位属于宿主配置错误，必须向上传递，不能退化为“没有依赖”
//!
//! 作者：Infraworld 项目组
//! 创建时间：2026-10-18
//! 修改时间：2026-10-18

use std::io;
use std::path::{Path, PathBuf};

use crate::error::ResolveError;

/// 工程根目录相对模块目录的层数。
pub const PROJECT_ROOT_DEPTH: usize = 2;

/// 从模块目录推导工程根目录（绝对、规范化路径）。
///
/// 参数：
/// - `module_dir`：模块自身所在目录
///
/// 返回值：
/// - 成功：`module_dir/../..` 的规范化路径
///
/// 异常处理：
/// - 模块目录不存在或不可访问时返回 [`ResolveError::ProjectRoot`]
pub fn project_root_from_module_dir(module_dir: &Path) -> Result<PathBuf, ResolveError> {
    let mut candidate = module_dir.to_path_buf();
    for _ in 0..PROJECT_ROOT_DEPTH {
        candidate.push("..");
    }
    canonical_dir(&candidate).map_err(|source| ResolveError::ProjectRoot {
        path: module_dir.to_path_buf(),
        source,
    })
}

/// 校验宿主直接给出的工程根目录，返回其规范化路径。
///
/// 异常处理：
/// - 路径不存在、不可访问或不是目录时返回 [`ResolveError::ProjectRoot`]
pub fn canonical_project_root(project_root: &Path) -> Result<PathBuf, ResolveError> {
    canonical_dir(project_root).map_err(|source| ResolveError::ProjectRoot {
        path: project_root.to_path_buf(),
        source,
    })
}

fn canonical_dir(path: &Path) -> io::Result<PathBuf> {
    let canonical = std::fs::canonicalize(path)?;
    if !canonical.is_dir() {
        return Err(io::Error::other(format!("不是目录: {}", canonical.display())));
    }
    Ok(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_module_dir_is_an_error() {
        let missing = std::env::temp_dir()
            .join("infraworld-paths-missing-5c1e")
            .join("Source")
            .join("InfraworldRuntime");
        assert!(matches!(
            project_root_from_module_dir(&missing),
            Err(ResolveError::ProjectRoot { .. })
        ));
    }

    #[test]
    fn missing_project_root_is_an_error() {
        let missing = std::env::temp_dir().join("infraworld-paths-noroot-8b24");
        assert!(matches!(
            canonical_project_root(&missing),
            Err(ResolveError::ProjectRoot { .. })
        ));
    }

    #[test]
    fn existing_project_root_is_canonical() {
        let root = canonical_project_root(&std::env::temp_dir()).unwrap();
        assert!(root.is_absolute());
        assert!(root.is_dir());
    }
}
