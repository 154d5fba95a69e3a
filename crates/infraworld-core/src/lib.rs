//! Infraworld 构建期依赖解析核心库。
//!
//! 功能：
//! - 按平台在预编译产物目录中定位 gRPC/protobuf 静态库（[`matcher`]、[`platform`]）
//! - 计算头文件搜索路径并汇总为不可变解析结果（[`resolver`]）
//! - 定义产物目录布局约定（[`layout`]）与工程根目录定位（[`paths`]）
//! - 提供内置代码所需的预处理器定义（[`definitions`]）
//! - 将结果写入宿主模块配置或渲染为 cargo 指令（[`rules`]、[`cargo`]）
//!
//! 作者：Infraworld 项目组
//! 创建时间：2026-10-18
//! 修改时间：2026-10-18

pub mod cargo;
pub mod definitions;
pub mod error;
pub mod layout;
pub mod matcher;
pub mod paths;
pub mod platform;
pub mod resolver;
pub mod rules;

pub use error::ResolveError;
pub use layout::ArtifactLayout;
pub use platform::{BuildConfiguration, Platform};
pub use resolver::{DependencyResolver, ResolutionResult};
