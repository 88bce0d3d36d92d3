use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点属性值
///
/// JSON 形式为裸标量（untagged），`1` 为整数，`1.0` 为浮点数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl PropertyValue {
    /// 从文本推断类型：布尔、整数、有限浮点数，其余为字符串；双引号包裹的文本强制为字符串
    pub fn infer(text: &str) -> Self {
        if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
            return PropertyValue::String(text[1..text.len() - 1].to_string());
        }
        match text {
            "true" => return PropertyValue::Bool(true),
            "false" => return PropertyValue::Bool(false),
            _ => {}
        }
        if let Ok(i) = text.parse::<i64>() {
            return PropertyValue::Int(i);
        }
        if let Ok(f) = text.parse::<f64>() {
            // "nan"、"inf" 这类文本按字符串处理
            if f.is_finite() {
                return PropertyValue::Float(f);
            }
        }
        PropertyValue::String(text.to_string())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::Bool(_) => "bool",
            PropertyValue::Int(_) => "int",
            PropertyValue::Float(_) => "float",
            PropertyValue::String(_) => "string",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            PropertyValue::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Bool(b) => write!(f, "{}", b),
            PropertyValue::Int(i) => write!(f, "{}", i),
            PropertyValue::Float(v) => write!(f, "{}", v),
            PropertyValue::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::String(s)
    }
}

impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self {
        PropertyValue::Int(i)
    }
}

impl From<f64> for PropertyValue {
    fn from(f: f64) -> Self {
        PropertyValue::Float(f)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_scalar_types() {
        assert_eq!(PropertyValue::infer("true"), PropertyValue::Bool(true));
        assert_eq!(PropertyValue::infer("42"), PropertyValue::Int(42));
        assert_eq!(PropertyValue::infer("-3.5"), PropertyValue::Float(-3.5));
        assert_eq!(PropertyValue::infer("Alice"), PropertyValue::from("Alice"));
    }

    #[test]
    fn test_infer_quoted_and_non_finite() {
        assert_eq!(PropertyValue::infer("\"42\""), PropertyValue::from("42"));
        assert_eq!(PropertyValue::infer("nan"), PropertyValue::from("nan"));
        assert_eq!(PropertyValue::infer("inf"), PropertyValue::from("inf"));
        assert_eq!(PropertyValue::infer("\""), PropertyValue::from("\""));
    }

    #[test]
    fn test_json_untagged_form() {
        let values = vec![
            PropertyValue::Bool(false),
            PropertyValue::Int(7),
            PropertyValue::Float(1.5),
            PropertyValue::from("x"),
        ];
        let json = serde_json::to_string(&values).expect("序列化失败");
        assert_eq!(json, r#"[false,7,1.5,"x"]"#);
        let back: Vec<PropertyValue> = serde_json::from_str(&json).expect("反序列化失败");
        assert_eq!(back, values);
    }
}
