//! Catalog：内存中的课程集合及其增删改查
//!
//! 所有操作只作用于内存，不做任何IO；读写文件由 data_core 负责。

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::course::{Course, CourseDraft, CoursePatch};

/// 有序课程集合，插入顺序即展示顺序
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按存储顺序返回全部课程
    pub fn list(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// 新建课程并追加到末尾，使用随机 UUID v4 作为ID
    pub fn create(&mut self, draft: CourseDraft) -> &Course {
        self.create_with(draft, || Uuid::new_v4().to_string())
    }

    /// 使用指定的ID生成器新建课程
    ///
    /// 生成的ID若与已有记录冲突则重新生成。
    pub fn create_with<F>(&mut self, draft: CourseDraft, mut next_id: F) -> &Course
    where
        F: FnMut() -> String,
    {
        let mut id = next_id();
        while self.find_by_id(&id).is_some() {
            tracing::warn!("生成的课程ID冲突，重新生成: {}", id);
            id = next_id();
        }

        self.courses.push(draft.into_course(id));
        let created = &self.courses[self.courses.len() - 1];
        tracing::debug!("新建课程: {} ({})", created.title, created.id);
        created
    }

    /// 线性查找第一个ID完全相同的课程
    pub fn find_by_id(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// 按ID局部更新，未找到时返回 None
    pub fn update_by_id(&mut self, id: &str, patch: CoursePatch) -> Option<&Course> {
        let course = self.courses.iter_mut().find(|c| c.id == id)?;
        patch.apply(course);
        tracing::debug!("更新课程: {}", id);
        Some(&*course)
    }

    /// 按ID删除，返回是否有记录被删除
    pub fn delete_by_id(&mut self, id: &str) -> bool {
        let before = self.courses.len();
        self.courses.retain(|c| c.id != id);
        let removed = self.courses.len() != before;
        if removed {
            tracing::debug!("删除课程: {}", id);
        }
        removed
    }
}
