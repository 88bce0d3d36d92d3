//! 自定义断言辅助模块
//!
//! 提供测试中的常用断言函数

use graph_bulkload::ingest::StoreEncoder;
use graph_bulkload::{Mutation, RowKey};

/// 断言结果成功，返回内部值
pub fn assert_ok<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
    result.expect("操作应该成功")
}

/// 断言结果失败并匹配错误消息
pub fn assert_err_with<T: std::fmt::Debug, E: std::fmt::Display>(result: Result<T, E>, expected_msg: &str) {
    let err = result.expect_err("操作应该失败");
    let err_str = err.to_string();
    assert!(
        err_str.contains(expected_msg),
        "错误消息应包含 '{}', 实际是 '{}'",
        expected_msg,
        err_str
    );
}

/// 断言集合包含指定数量的元素
pub fn assert_count<T>(collection: &[T], expected: usize, item_name: &str) {
    assert_eq!(
        collection.len(),
        expected,
        "{}数量不匹配: 期望 {}, 实际 {}",
        item_name,
        expected,
        collection.len()
    );
}

/// 断言每个输出的行键等于写入操作的行键，且等于还原出的顶点标识对应的行键
pub fn assert_key_pairing(encoder: &dyn StoreEncoder, pairs: &[(RowKey, Mutation)]) {
    for (key, mutation) in pairs {
        assert_eq!(mutation.row(), key, "写入操作行键与输出行键不一致");
        let vertex = encoder
            .read_vertex(key, mutation)
            .expect("输出应当可以还原为顶点");
        assert_eq!(&encoder.row_key_for(vertex.id()), key, "行键与顶点标识不对应");
    }
}
