//! 课程管理工具库
//!
//! 提供课程记录的内存增删改查、JSON文件持久化和交互式命令处理
//! 遵循 model / utils / vm 分层

pub mod model;
pub mod utils;
pub mod vm;

// 重新导出主要类型
pub use model::catalog::Catalog;
pub use model::course::{Course, CourseDraft, CoursePatch};
pub use model::data_core::{AppError, CourseStore, StoreConfig};
