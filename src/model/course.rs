//! 课程记录：持久化的数据结构与局部更新描述

use serde::{Deserialize, Serialize, Serializer};

/// 单条课程记录（与 courses.json 中的对象一一对应）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// 创建时生成的唯一标识，之后不可变
    pub id: String,
    pub title: String,
    /// 价格；文件中为 null 或缺失时为 None，原样写回 null
    #[serde(default, serialize_with = "serialize_price")]
    pub price: Option<f64>,
}

/// 整数值的价格写成整数（10 而不是 10.0），保持已有文件格式
fn serialize_price<S: Serializer>(price: &Option<f64>, s: S) -> Result<S::Ok, S::Error> {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0; // 2^53
    match *price {
        Some(p) if p.fract() == 0.0 && p.abs() <= MAX_EXACT => s.serialize_i64(p as i64),
        Some(p) => s.serialize_f64(p),
        None => s.serialize_none(),
    }
}

/// 价格的展示文本：缺失时显示 null
pub fn price_text(price: Option<f64>) -> String {
    match price {
        Some(p) => p.to_string(),
        None => "null".to_string(),
    }
}

/// 新建课程时由用户提供的字段
#[derive(Debug, Clone, PartialEq)]
pub struct CourseDraft {
    pub title: String,
    pub price: f64,
}

impl CourseDraft {
    pub fn new(title: impl Into<String>, price: f64) -> Self {
        Self {
            title: title.into(),
            price,
        }
    }

    /// 绑定ID，生成完整记录
    pub fn into_course(self, id: String) -> Course {
        Course {
            id,
            title: self.title,
            price: Some(self.price),
        }
    }
}

/// 局部更新：Some 覆盖旧值，None 保留旧值
///
/// 无法表达“清空字段”，空输入一律视为未指定。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoursePatch {
    pub title: Option<String>,
    pub price: Option<f64>,
}

impl CoursePatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// 补丁是否不包含任何字段
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.price.is_none()
    }

    /// 将补丁合并到已有记录上（id 永不改变）
    pub fn apply(self, course: &mut Course) {
        if let Some(title) = self.title {
            course.title = title;
        }
        if let Some(price) = self.price {
            course.price = Some(price);
        }
    }
}
