//! 将模块配置渲染为 cargo 构建脚本指令（`build.rs` 宿主）。
//!
//! 输出示例：
//! - `cargo:rustc-link-search=native=<目录>`
//! - `cargo:rustc-link-lib=static=grpc`
//! - `cargo:include=<头文件路径，按平台分隔符连接>`
//! - `cargo:defines=GOOGLE_PROTOBUF_NO_RTTI,...`

use std::path::Path;

use crate::platform::StaticLibConvention;
use crate::rules::ModuleRules;

/// cargo 指令集合。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CargoDirectives {
    lines: Vec<String>,
}

impl CargoDirectives {
    pub fn from_rules(rules: &ModuleRules) -> Self {
        let convention = rules.target.platform.rule().convention;
        let mut lines = Vec::new();

        let mut search_dirs: Vec<&Path> = Vec::new();
        for lib in &rules.public_additional_libraries {
            if let Some(dir) = lib.parent() {
                if !search_dirs.contains(&dir) {
                    search_dirs.push(dir);
                }
            }
        }
        for dir in search_dirs {
            lines.push(format!("cargo:rustc-link-search=native={}", dir.display()));
        }
        for lib in &rules.public_additional_libraries {
            if let Some(name) = link_name(lib, convention) {
                lines.push(format!("cargo:rustc-link-lib=static={name}"));
            }
        }
        for dep in &rules.third_party_static_dependencies {
            for name in dep.link_names() {
                lines.push(format!("cargo:rustc-link-lib={name}"));
            }
        }

        if let Ok(joined) = std::env::join_paths(&rules.public_include_paths) {
            lines.push(format!("cargo:include={}", joined.to_string_lossy()));
        }
        let defines: Vec<String> = rules.public_definitions.iter().map(ToString::to_string).collect();
        lines.push(format!("cargo:defines={}", defines.join(",")));
        lines.push(format!("cargo:rerun-if-changed={}", rules.library_root.display()));

        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// 输出到标准输出，供 cargo 读取。
    pub fn emit(&self) {
        for line in &self.lines {
            println!("{line}");
        }
    }
}

/// 静态库文件对应的链接名：去掉扩展名，Unix 约定下再去掉 `lib` 前缀。
fn link_name(path: &Path, convention: StaticLibConvention) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    let name = match convention {
        StaticLibConvention::Unix => stem.strip_prefix("lib").unwrap_or(stem),
        StaticLibConvention::Windows => stem,
    };
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::definitions;
    use crate::platform::{BuildConfiguration, Platform};
    use crate::rules::{TargetRules, ThirdPartyDependency};

    fn rules_for(platform: Platform, libs: Vec<PathBuf>) -> ModuleRules {
        ModuleRules {
            target: TargetRules {
                platform,
                configuration: BuildConfiguration::Development,
            },
            library_root: PathBuf::from("/proj/GrpcLibraries"),
            public_definitions: definitions::public_definitions(),
            public_include_paths: vec![PathBuf::from("/proj/GrpcIncludes/include")],
            public_additional_libraries: libs,
            public_dependency_module_names: vec!["Core".to_string()],
            private_dependency_module_names: Vec::new(),
            third_party_static_dependencies: vec![ThirdPartyDependency::Zlib],
        }
    }

    #[test]
    fn unix_archives_drop_lib_prefix() {
        let rules = rules_for(
            Platform::Linux,
            vec![
                PathBuf::from("/proj/GrpcLibraries/Linux/libgrpc.a"),
                PathBuf::from("/proj/GrpcLibraries/Linux/libprotobuf.a"),
            ],
        );
        let d = CargoDirectives::from_rules(&rules);
        let lines = d.lines();
        assert_eq!(lines[0], "cargo:rustc-link-search=native=/proj/GrpcLibraries/Linux");
        assert_eq!(lines[1], "cargo:rustc-link-lib=static=grpc");
        assert_eq!(lines[2], "cargo:rustc-link-lib=static=protobuf");
        assert_eq!(lines[3], "cargo:rustc-link-lib=z");
        assert!(lines.contains(&"cargo:defines=GOOGLE_PROTOBUF_NO_RTTI,GPR_FORBID_UNREACHABLE_CODE,GRPC_ALLOW_EXCEPTIONS=0,__NVCC__".to_string()));
        assert_eq!(
            lines.last().map(String::as_str),
            Some("cargo:rerun-if-changed=/proj/GrpcLibraries")
        );
    }

    #[test]
    fn windows_libraries_keep_stem() {
        assert_eq!(
            link_name(Path::new("/x/libprotobuf.lib"), StaticLibConvention::Windows).as_deref(),
            Some("libprotobuf")
        );
        assert_eq!(
            link_name(Path::new("/x/grpc++.lib"), StaticLibConvention::Windows).as_deref(),
            Some("grpc++")
        );
    }

    #[test]
    fn no_libraries_still_emits_defines() {
        let d = CargoDirectives::from_rules(&rules_for(Platform::Mac, Vec::new()));
        assert!(!d.lines().iter().any(|l| l.contains("link-search")));
        assert!(d.lines().iter().any(|l| l.starts_with("cargo:defines=")));
    }
}
