//! 测试数据固件

use graph_bulkload::Vertex;

/// 小型社交网络，TSV 格式
pub fn social_network_tsv() -> Vec<&'static str> {
    vec![
        "alice\tperson\tname=Alice,age=30\tbob,carol",
        "bob\tperson\tname=Bob,age=25,vip=true\tcarol",
        "carol\tperson\tname=Carol,score=4.5",
        "acme\tcompany\tname=\"ACME\",founded=1999",
        "not-a-valid-line",
        "dave\tperson\t\talice",
    ]
}

/// 与 `social_network_tsv` 对应的 JSON 记录
pub fn social_network_json() -> Vec<&'static str> {
    vec![
        r#"{"id":"alice","label":"person","properties":{"name":"Alice","age":30},"edges":["bob","carol"]}"#,
        r#"{"id":"bob","label":"person","properties":{"name":"Bob","age":25,"vip":true},"edges":["carol"]}"#,
        r#"{"id":"carol","label":"person","properties":{"name":"Carol","score":4.5}}"#,
        r#"{"id":"acme","label":"company","properties":{"name":"ACME","founded":1999}}"#,
        r#"{"label":"person"}"#,
        r#"{"id":"dave","label":"person","edges":["alice"]}"#,
    ]
}

pub fn alice() -> Vertex {
    Vertex::new("alice", "person")
        .with_property("name", "Alice")
        .with_property("age", 30i64)
        .with_edge("bob")
        .with_edge("carol")
}

/// `social_network_*` 中可以成功解码的顶点数量
pub const SOCIAL_NETWORK_VALID: usize = 5;
