//! 内置 gRPC/protobuf 代码编译所需的公共预处理器定义。

use std::fmt;

use serde::Serialize;

/// 单个预处理器定义：`NAME` 或 `NAME=VALUE`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Definition {
    pub name: &'static str,
    pub value: Option<&'static str>,
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(v) => write!(f, "{}={}", self.name, v),
            None => f.write_str(self.name),
        }
    }
}

/// protobuf 不依赖 RTTI。
pub const GOOGLE_PROTOBUF_NO_RTTI: Definition = Definition {
    name: "GOOGLE_PROTOBUF_NO_RTTI",
    value: None,
};

/// gRPC 禁止生成不可达代码。
pub const GPR_FORBID_UNREACHABLE_CODE: Definition = Definition {
    name: "GPR_FORBID_UNREACHABLE_CODE",
    value: None,
};

/// gRPC 不使用异常报告错误。
pub const GRPC_ALLOW_EXCEPTIONS: Definition = Definition {
    name: "GRPC_ALLOW_EXCEPTIONS",
    value: Some("0"),
};

/// 兼容垫片：protobuf 生成代码里 `static_assert(std::is_pod<...>)` 在 MSVC 上触发
/// C4647（`__is_pod` 行为变化），宿主将该警告视为错误；定义 `__NVCC__` 绕开该断言。
/// 不是功能开关，始终添加。
pub const NVCC_WARNING_SHIM: Definition = Definition {
    name: "__NVCC__",
    value: None,
};

/// 全部公共定义，顺序固定，与平台和构建配置无关。
pub fn public_definitions() -> Vec<Definition> {
    vec![
        GOOGLE_PROTOBUF_NO_RTTI,
        GPR_FORBID_UNREACHABLE_CODE,
        GRPC_ALLOW_EXCEPTIONS,
        NVCC_WARNING_SHIM,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_all_four_in_order() {
        let rendered: Vec<String> = public_definitions().iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            [
                "GOOGLE_PROTOBUF_NO_RTTI",
                "GPR_FORBID_UNREACHABLE_CODE",
                "GRPC_ALLOW_EXCEPTIONS=0",
                "__NVCC__",
            ]
        );
    }
}
