//! 依赖解析器：计算头文件搜索路径与静态库文件列表。
//!
//! 流程：
//! 1) 由工程根目录与 [`ArtifactLayout`] 得到头文件根目录与静态库根目录
//! 2) 通过 [`LibraryLocator`] 列出平台静态库
//! 3) 按布局顺序追加固定的头文件路径（不检查是否存在）
//!
//! 作者：Infraworld 项目组
//! 创建时间：2026-10-18
//! 修改时间：2026-10-18

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::ResolveError;
use crate::layout::ArtifactLayout;
use crate::matcher::{FileMatcher, LooseSuffix, MatchPolicy};
use crate::paths;
use crate::platform::{BuildConfiguration, LibraryLocator, Platform};

/// 一次解析的结果（不可变）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionResult {
    header_paths: Vec<PathBuf>,
    library_paths: Vec<PathBuf>,
}

impl ResolutionResult {
    pub fn new(header_paths: Vec<PathBuf>, library_paths: Vec<PathBuf>) -> Self {
        Self {
            header_paths,
            library_paths,
        }
    }

    /// 头文件搜索路径（插入顺序）。
    pub fn header_paths(&self) -> &[PathBuf] {
        &self.header_paths
    }

    /// 静态库文件路径（按路径排序）。
    pub fn library_paths(&self) -> &[PathBuf] {
        &self.library_paths
    }

    pub fn into_parts(self) -> (Vec<PathBuf>, Vec<PathBuf>) {
        (self.header_paths, self.library_paths)
    }
}

impl fmt::Display for ResolutionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Headers:")?;
        for p in &self.header_paths {
            writeln!(f, "{}", p.display())?;
        }
        write!(f, "Libs:")?;
        for p in &self.library_paths {
            write!(f, "\n{}", p.display())?;
        }
        Ok(())
    }
}

/// 依赖解析器。
#[derive(Debug, Clone)]
pub struct DependencyResolver<P = LooseSuffix> {
    project_root: PathBuf,
    layout: ArtifactLayout,
    locator: LibraryLocator<P>,
}

impl DependencyResolver<LooseSuffix> {
    /// 以默认布局创建解析器。
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            layout: ArtifactLayout::default(),
            locator: LibraryLocator::new(),
        }
    }

    /// 从模块目录创建解析器（工程根目录为模块目录向上两级）。
    ///
    /// 异常处理：
    /// - 工程根目录无法定位时返回 [`ResolveError::ProjectRoot`]
    pub fn for_module_dir(module_dir: &Path) -> Result<Self, ResolveError> {
        Ok(Self::new(paths::project_root_from_module_dir(module_dir)?))
    }

    /// 从宿主直接给出的工程根目录创建解析器。
    ///
    /// 异常处理：
    /// - 工程根目录不存在或不是目录时返回 [`ResolveError::ProjectRoot`]，不会退化为空库列表
    pub fn for_project_root(project_root: &Path) -> Result<Self, ResolveError> {
        Ok(Self::new(paths::canonical_project_root(project_root)?))
    }
}

impl<P: MatchPolicy> DependencyResolver<P> {
    pub fn with_layout(mut self, layout: ArtifactLayout) -> Self {
        self.layout = layout;
        self
    }

    /// 替换文件匹配策略。
    pub fn with_policy<Q: MatchPolicy>(self, policy: Q) -> DependencyResolver<Q> {
        DependencyResolver {
            project_root: self.project_root,
            layout: self.layout,
            locator: LibraryLocator::with_matcher(FileMatcher::with_policy(policy)),
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn layout(&self) -> &ArtifactLayout {
        &self.layout
    }

    pub fn include_root(&self) -> PathBuf {
        self.layout.include_root(&self.project_root)
    }

    pub fn library_root(&self) -> PathBuf {
        self.layout.library_root(&self.project_root)
    }

    /// 解析指定平台的依赖。
    ///
    /// 返回值：
    /// - 平台库目录不存在：`library_paths` 为空，`header_paths` 照常返回
    ///
    /// 异常处理：
    /// - 目录存在但读取失败时返回 [`ResolveError::ReadDir`]
    pub fn resolve(&self, platform: Platform) -> Result<ResolutionResult, ResolveError> {
        let library_root = self.library_root();
        debug!("INCLUDE_ROOT: {}", self.include_root().display());
        debug!("LIB_ROOT: {}", library_root.display());

        let library_paths = self.locator.locate(platform, &library_root)?;
        let header_paths = self.layout.header_paths(&self.project_root);

        Ok(ResolutionResult::new(header_paths, library_paths))
    }

    /// 带构建配置的解析入口；构建配置只记录日志，不影响结果。
    pub fn resolve_for(
        &self,
        platform: Platform,
        configuration: BuildConfiguration,
    ) -> Result<ResolutionResult, ResolveError> {
        debug!(
            "解析依赖: platform={}, configuration={} ({})",
            platform,
            configuration,
            configuration.artifact_flavor()
        );
        self.resolve(platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_headers_then_libs() {
        let result = ResolutionResult::new(
            vec![PathBuf::from("/p/inc"), PathBuf::from("/p/src")],
            vec![PathBuf::from("/p/libs/grpc.a")],
        );
        assert_eq!(result.to_string(), "Headers:\n/p/inc\n/p/src\nLibs:\n/p/libs/grpc.a");
    }

    #[test]
    fn display_with_no_libs() {
        let result = ResolutionResult::new(vec![PathBuf::from("/p/inc")], Vec::new());
        assert_eq!(result.to_string(), "Headers:\n/p/inc\nLibs:");
    }

    #[test]
    fn missing_project_yields_headers_without_libs() {
        let root = std::env::temp_dir().join("infraworld-resolver-empty-91d2");
        let result = DependencyResolver::new(&root).resolve(Platform::Linux).unwrap();
        assert_eq!(result.header_paths().len(), 2);
        assert!(result.library_paths().is_empty());
    }
}
