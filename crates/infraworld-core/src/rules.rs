//! 宿主模块配置：把解析结果与预处理器定义写入模块规则。
//!
//! 说明：
//! - [`ModuleRules`] 对应宿主构建系统中的模块配置对象，只做数据承载
//! - OpenSSL/zlib 由宿主自行接线，这里只按名字引用
//!
//! 作者：Infraworld 项目组
//! 创建时间：2026-10-18
//! 修改时间：2026-10-18

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::definitions::{self, Definition};
use crate::error::ResolveError;
use crate::layout::ArtifactLayout;
use crate::platform::{BuildConfiguration, Platform};
use crate::resolver::{DependencyResolver, ResolutionResult};

/// 宿主提供的构建目标信息。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TargetRules {
    pub platform: Platform,
    pub configuration: BuildConfiguration,
}

/// 由宿主预先接好的第三方系统库。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ThirdPartyDependency {
    OpenSsl,
    Zlib,
}

impl ThirdPartyDependency {
    /// 宿主侧的依赖名。
    pub fn host_name(self) -> &'static str {
        match self {
            ThirdPartyDependency::OpenSsl => "OpenSSL",
            ThirdPartyDependency::Zlib => "zlib",
        }
    }

    /// 链接器使用的库名（cargo 宿主）。
    pub fn link_names(self) -> &'static [&'static str] {
        match self {
            ThirdPartyDependency::OpenSsl => &["ssl", "crypto"],
            ThirdPartyDependency::Zlib => &["z"],
        }
    }
}

/// 模块配置。
#[derive(Debug, Clone, Serialize)]
pub struct ModuleRules {
    pub target: TargetRules,
    /// 静态库根目录（用于增量构建的变更检测）。
    pub library_root: PathBuf,
    pub public_definitions: Vec<Definition>,
    pub public_include_paths: Vec<PathBuf>,
    pub public_additional_libraries: Vec<PathBuf>,
    pub public_dependency_module_names: Vec<String>,
    pub private_dependency_module_names: Vec<String>,
    pub third_party_static_dependencies: Vec<ThirdPartyDependency>,
}

impl ModuleRules {
    /// 依赖路径视图（与解析结果的文本格式一致）。
    pub fn dependency_paths(&self) -> ResolutionResult {
        ResolutionResult::new(
            self.public_include_paths.clone(),
            self.public_additional_libraries.clone(),
        )
    }

    /// 以默认布局配置模块。
    pub fn configure(target: TargetRules, module_dir: &Path) -> Result<Self, ResolveError> {
        Self::configure_with_layout(target, module_dir, ArtifactLayout::default())
    }

    /// 配置模块：添加公共定义、解析依赖并写入路径列表。
    ///
    /// 异常处理：
    /// - 工程根目录无法定位或库目录不可读时返回错误，宿主应中止构建
    pub fn configure_with_layout(
        target: TargetRules,
        module_dir: &Path,
        layout: ArtifactLayout,
    ) -> Result<Self, ResolveError> {
        let resolver = DependencyResolver::for_module_dir(module_dir)?.with_layout(layout);
        Self::from_resolver(target, &resolver)
    }

    /// 已知工程根目录时直接配置（不再从模块目录推导）。
    pub fn from_resolver(target: TargetRules, resolver: &DependencyResolver) -> Result<Self, ResolveError> {
        let deps = resolver.resolve_for(target.platform, target.configuration)?;
        info!("{deps}");

        let (public_include_paths, public_additional_libraries) = deps.into_parts();
        Ok(Self {
            target,
            library_root: resolver.library_root(),
            public_definitions: definitions::public_definitions(),
            public_include_paths,
            public_additional_libraries,
            public_dependency_module_names: vec!["Core".to_string()],
            private_dependency_module_names: vec!["CoreUObject".to_string(), "Engine".to_string()],
            third_party_static_dependencies: vec![ThirdPartyDependency::OpenSsl, ThirdPartyDependency::Zlib],
        })
    }
}
