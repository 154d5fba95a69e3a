//! 文件匹配器：按扩展名在单层目录中查找文件。
//!
//! 约定：
//! - 目录不存在时返回空列表（不是错误）
//! - 只列举直接子项中的普通文件，不递归
//! - 匹配规则由 [`MatchPolicy`] 决定；默认 [`LooseSuffix`] 为非尾部锚定的宽松匹配
//!
//! 作者：Infraworld 项目组
//! 创建时间：2026-10-18
//! 修改时间：2026-10-18

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::ResolveError;

/// 文件名匹配策略：按扩展名生成一次匹配规则，再对目录中每个文件求值。
pub trait MatchPolicy {
    type Rule: ExtensionRule;

    /// 为扩展名 `extension`（不含前导点）构造匹配规则。
    fn compile(&self, extension: &str) -> Result<Self::Rule, ResolveError>;
}

/// 已构造好的扩展名匹配规则。
pub trait ExtensionRule {
    fn matches(&self, path: &Path) -> bool;
}

/// 宽松匹配：完整路径中出现“至少一个字符 + `.` + 扩展名”即视为匹配。
///
/// 注意：模式不锚定在末尾，`foo.alib` 会匹配扩展名 `a`。
#[derive(Debug, Clone, Copy, Default)]
pub struct LooseSuffix;

/// 宽松匹配规则（`.+\.<ext>`，作用于完整路径字符串）。
#[derive(Debug, Clone)]
pub struct LooseSuffixRule {
    re: Regex,
}

impl LooseSuffixRule {
    pub fn new(extension: &str) -> Result<Self, ResolveError> {
        let pattern = format!(r".+\.{}", regex::escape(extension));
        let re = Regex::new(&pattern).map_err(|source| ResolveError::Pattern { pattern, source })?;
        Ok(Self { re })
    }
}

impl ExtensionRule for LooseSuffixRule {
    fn matches(&self, path: &Path) -> bool {
        self.re.is_match(&path.to_string_lossy())
    }
}

impl MatchPolicy for LooseSuffix {
    type Rule = LooseSuffixRule;

    fn compile(&self, extension: &str) -> Result<Self::Rule, ResolveError> {
        LooseSuffixRule::new(extension)
    }
}

/// 严格匹配：`Path::extension()` 必须与扩展名完全相等。
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictExtension;

#[derive(Debug, Clone)]
pub struct StrictExtensionRule {
    extension: String,
}

impl ExtensionRule for StrictExtensionRule {
    fn matches(&self, path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == self.extension.as_str())
    }
}

impl MatchPolicy for StrictExtension {
    type Rule = StrictExtensionRule;

    fn compile(&self, extension: &str) -> Result<Self::Rule, ResolveError> {
        Ok(StrictExtensionRule {
            extension: extension.to_string(),
        })
    }
}

/// 宽松匹配规则的单次求值。
pub fn matches_loose_suffix(path: &Path, extension: &str) -> Result<bool, ResolveError> {
    Ok(LooseSuffixRule::new(extension)?.matches(path))
}

/// 单层目录文件匹配器。
#[derive(Debug, Clone, Default)]
pub struct FileMatcher<P = LooseSuffix> {
    policy: P,
}

impl FileMatcher<LooseSuffix> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: MatchPolicy> FileMatcher<P> {
    /// 使用自定义匹配策略。
    pub fn with_policy(policy: P) -> Self {
        Self { policy }
    }

    /// 在 `dir` 中查找扩展名为 `extension` 的文件。
    ///
    /// 返回值：
    /// - 目录不存在：空列表
    /// - 其他情况：`dir.join(文件名)` 列表，按路径字典序排序
    ///
    /// 异常处理：
    /// - 目录存在但读取失败（权限、`dir` 是文件等）返回 [`ResolveError::ReadDir`]
    pub fn find(&self, dir: &Path, extension: &str) -> Result<Vec<PathBuf>, ResolveError> {
        let rule = self.policy.compile(extension)?;
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(ResolveError::ReadDir {
                    dir: dir.to_path_buf(),
                    source,
                })
            }
        };

        let mut matches = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| ResolveError::ReadDir {
                dir: dir.to_path_buf(),
                source,
            })?;
            let file_type = entry.file_type().map_err(|source| ResolveError::ReadDir {
                dir: dir.to_path_buf(),
                source,
            })?;
            let path = dir.join(entry.file_name());
            let is_file = if file_type.is_symlink() {
                path.is_file()
            } else {
                file_type.is_file()
            };
            if !is_file {
                continue;
            }
            if rule.matches(&path) {
                matches.push(path);
            }
        }
        // 文件系统枚举顺序不稳定，统一排序。
        matches.sort();
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loose(path: &str, extension: &str) -> bool {
        matches_loose_suffix(Path::new(path), extension).unwrap()
    }

    #[test]
    fn loose_suffix_is_not_end_anchored() {
        assert!(loose("/libs/foo.a", "a"));
        assert!(loose("/libs/bar.alib", "a"));
        assert!(!loose("/libs/baz.txt", "a"));
    }

    #[test]
    fn loose_suffix_needs_a_character_before_the_dot() {
        assert!(!loose(".a", "a"));
        assert!(loose("x.a", "a"));
    }

    #[test]
    fn loose_suffix_escapes_extension() {
        assert!(!loose("/libs/fooXlib", "."));
        assert!(loose("/libs/foo..", "."));
    }

    #[test]
    fn compiled_rule_is_reused_across_paths() {
        let rule = LooseSuffix.compile("lib").unwrap();
        assert!(rule.matches(Path::new("/libs/grpc.lib")));
        assert!(rule.matches(Path::new("/libs/gpr.lib")));
        assert!(!rule.matches(Path::new("/libs/gpr.a")));
    }

    #[test]
    fn strict_extension_rejects_longer_suffix() {
        let rule = StrictExtension.compile("a").unwrap();
        assert!(rule.matches(Path::new("/libs/foo.a")));
        assert!(!rule.matches(Path::new("/libs/bar.alib")));
        assert!(!rule.matches(Path::new("/libs/noext")));
    }

    #[test]
    fn missing_directory_yields_empty() {
        let dir = std::env::temp_dir().join("infraworld-matcher-does-not-exist-7f3a");
        let found = FileMatcher::new().find(&dir, "a").unwrap();
        assert!(found.is_empty());
    }
}
