//! 平台/构建配置标识与平台静态库定位。
//!
//! 说明：
//! - 平台标识只作为查找键：决定 `GrpcLibraries` 下的子目录名与静态库扩展名
//! - 平台到 {子目录, 扩展名约定} 的映射集中在 [`PLATFORM_RULES`]，新增约定只需改表
//!
//! 作者：Infraworld 项目组
//! 创建时间：2026-10-18
//! 修改时间：2026-10-18

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ResolveError;
use crate::matcher::{FileMatcher, LooseSuffix, MatchPolicy};

/// 目标平台标识（由宿主提供）。
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Platform {
    Win64,
    Mac,
    Linux,
    LinuxAArch64,
    IOS,
    Android,
    HTML5,
    PS4,
    XboxOne,
    Switch,
}

impl Platform {
    /// 全部平台（与 [`PLATFORM_RULES`] 顺序一致）。
    pub const ALL: [Platform; 10] = [
        Platform::Win64,
        Platform::Mac,
        Platform::Linux,
        Platform::LinuxAArch64,
        Platform::IOS,
        Platform::Android,
        Platform::HTML5,
        Platform::PS4,
        Platform::XboxOne,
        Platform::Switch,
    ];

    /// 规范名称，同时也是 `GrpcLibraries` 下的子目录名。
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Win64 => "Win64",
            Platform::Mac => "Mac",
            Platform::Linux => "Linux",
            Platform::LinuxAArch64 => "LinuxAArch64",
            Platform::IOS => "IOS",
            Platform::Android => "Android",
            Platform::HTML5 => "HTML5",
            Platform::PS4 => "PS4",
            Platform::XboxOne => "XboxOne",
            Platform::Switch => "Switch",
        }
    }

    /// 当前编译宿主对应的平台（CLI 默认值）。
    pub fn host() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Win64
        } else if cfg!(target_os = "macos") {
            Platform::Mac
        } else if cfg!(all(target_os = "linux", target_arch = "aarch64")) {
            Platform::LinuxAArch64
        } else {
            Platform::Linux
        }
    }

    /// 查找该平台的目录/扩展名规则。
    pub fn rule(self) -> &'static PlatformRule {
        let index = match self {
            Platform::Win64 => 0,
            Platform::Mac => 1,
            Platform::Linux => 2,
            Platform::LinuxAArch64 => 3,
            Platform::IOS => 4,
            Platform::Android => 5,
            Platform::HTML5 => 6,
            Platform::PS4 => 7,
            Platform::XboxOne => 8,
            Platform::Switch => 9,
        };
        &PLATFORM_RULES[index]
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ResolveError::UnknownPlatform(s.to_string()))
    }
}

/// 构建配置标识（由宿主提供）。
///
/// 目前只随解析入口传递并记录日志，不参与任何路径决策。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BuildConfiguration {
    Debug,
    DebugGame,
    #[default]
    Development,
    Shipping,
    Test,
}

impl BuildConfiguration {
    pub const ALL: [BuildConfiguration; 5] = [
        BuildConfiguration::Debug,
        BuildConfiguration::DebugGame,
        BuildConfiguration::Development,
        BuildConfiguration::Shipping,
        BuildConfiguration::Test,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BuildConfiguration::Debug => "Debug",
            BuildConfiguration::DebugGame => "DebugGame",
            BuildConfiguration::Development => "Development",
            BuildConfiguration::Shipping => "Shipping",
            BuildConfiguration::Test => "Test",
        }
    }

    /// 产物风味：`Shipping` 为 `Release`，其余为 `Debug`。
    pub fn artifact_flavor(self) -> &'static str {
        if self == BuildConfiguration::Shipping {
            "Release"
        } else {
            "Debug"
        }
    }
}

impl fmt::Display for BuildConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildConfiguration {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuildConfiguration::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ResolveError::UnknownConfiguration(s.to_string()))
    }
}

/// 静态库文件扩展名约定。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StaticLibConvention {
    /// `*.lib`
    Windows,
    /// `*.a`
    Unix,
}

impl StaticLibConvention {
    pub fn extension(self) -> &'static str {
        match self {
            StaticLibConvention::Windows => "lib",
            StaticLibConvention::Unix => "a",
        }
    }
}

/// 单个平台的库目录规则。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlatformRule {
    pub platform: Platform,
    /// `GrpcLibraries` 下的子目录名。
    pub subdir: &'static str,
    pub convention: StaticLibConvention,
}

const fn rule(platform: Platform, subdir: &'static str, convention: StaticLibConvention) -> PlatformRule {
    PlatformRule {
        platform,
        subdir,
        convention,
    }
}

/// 平台映射表：只有 Win64 使用 Windows 约定，其余平台共用 Unix 约定。
///
/// 行顺序与 [`Platform::rule`] 中的下标一致。
pub static PLATFORM_RULES: [PlatformRule; 10] = [
    rule(Platform::Win64, "Win64", StaticLibConvention::Windows),
    rule(Platform::Mac, "Mac", StaticLibConvention::Unix),
    rule(Platform::Linux, "Linux", StaticLibConvention::Unix),
    rule(Platform::LinuxAArch64, "LinuxAArch64", StaticLibConvention::Unix),
    rule(Platform::IOS, "IOS", StaticLibConvention::Unix),
    rule(Platform::Android, "Android", StaticLibConvention::Unix),
    rule(Platform::HTML5, "HTML5", StaticLibConvention::Unix),
    rule(Platform::PS4, "PS4", StaticLibConvention::Unix),
    rule(Platform::XboxOne, "XboxOne", StaticLibConvention::Unix),
    rule(Platform::Switch, "Switch", StaticLibConvention::Unix),
];

/// 平台静态库定位器：选出平台子目录与扩展名，再交给 [`FileMatcher`]。
#[derive(Debug, Clone, Default)]
pub struct LibraryLocator<P = LooseSuffix> {
    matcher: FileMatcher<P>,
}

impl LibraryLocator<LooseSuffix> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: MatchPolicy> LibraryLocator<P> {
    pub fn with_matcher(matcher: FileMatcher<P>) -> Self {
        Self { matcher }
    }

    /// 平台库目录：`library_root/<子目录>`。
    pub fn platform_dir(&self, platform: Platform, library_root: &Path) -> PathBuf {
        library_root.join(platform.rule().subdir)
    }

    /// 列出平台库目录下符合扩展名约定的文件；目录不存在时返回空列表。
    pub fn locate(&self, platform: Platform, library_root: &Path) -> Result<Vec<PathBuf>, ResolveError> {
        let rule = platform.rule();
        let dir = self.platform_dir(platform, library_root);
        debug!("PlatformLibRoot: {}", dir.display());
        self.matcher.find(&dir, rule.convention.extension())
    }
}
