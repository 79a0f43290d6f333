//! CourseStore：课程集合与 courses.json 之间的持久化边界
//!
//! 每次调用整体读取、整体覆盖写入，不加锁、不重试。
//! 并发运行多个进程时以最后写入者为准。

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::catalog::Catalog;
use crate::utils::fs::{read_json_file, write_json_file};

/// 默认数据文件（相对当前工作目录）
pub const DEFAULT_DATA_FILE: &str = "courses.json";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO失败: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON解析失败: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("输入已结束: {0}")]
    InputClosed(String),
}

/// 存储配置：数据文件位置由调用方显式传入
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[derive(Debug, Clone)]
pub struct CourseStore {
    config: StoreConfig,
}

impl CourseStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// 读取全部课程；文件缺失或内容损坏时返回空集合，从不报错
    pub fn load(&self) -> Catalog {
        catalog_or_empty(self.path(), read_json_file(self.path()))
    }

    /// 将全部课程整体覆盖写入数据文件
    pub fn save(&self, catalog: &Catalog) -> Result<(), AppError> {
        write_json_file(self.path(), catalog)?;
        tracing::info!("已保存 {} 门课程到 {}", catalog.len(), self.path().display());
        Ok(())
    }
}

/// 读取失败时一律退化为空集合
///
/// 损坏的文件内容会在下一次保存时被覆盖。
pub fn catalog_or_empty(path: &Path, loaded: Result<Catalog, AppError>) -> Catalog {
    match loaded {
        Ok(catalog) => {
            tracing::debug!("已加载 {} 门课程: {}", catalog.len(), path.display());
            catalog
        }
        Err(AppError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("数据文件不存在，视为空: {}", path.display());
            Catalog::new()
        }
        Err(e) => {
            tracing::warn!("数据文件无法读取，视为空: {} ({})", path.display(), e);
            Catalog::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::course::{CourseDraft, CoursePatch};
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    /// 创建临时JSON文件用于测试
    fn create_test_json_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("创建临时文件失败");
        file.write_all(content.as_bytes()).expect("写入临时文件失败");
        file
    }

    fn store_for(path: &Path) -> CourseStore {
        CourseStore::new(StoreConfig::new(path))
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().expect("创建临时目录失败");
        let store = store_for(&dir.path().join("courses.json"));

        let catalog = store.load();
        assert!(catalog.is_empty(), "文件不存在时应返回空集合");
        assert!(catalog.list().is_empty());
    }

    #[test]
    fn test_load_empty_file() {
        let file = create_test_json_file("");
        assert!(store_for(file.path()).load().is_empty(), "空文件应视为空集合");
    }

    #[test]
    fn test_load_truncated_json() {
        let file = create_test_json_file(r#"[{"id": "a", "title": "Alge"#);
        let catalog = store_for(file.path()).load();
        assert!(catalog.is_empty(), "截断的JSON不应报错，应返回空集合");
    }

    #[test]
    fn test_load_wrong_shape() {
        let file = create_test_json_file(r#"{"id": "a", "title": "Algebra", "price": 10}"#);
        assert!(store_for(file.path()).load().is_empty(), "非数组内容应视为空集合");
    }

    #[test]
    fn test_load_existing_courses() {
        let file = create_test_json_file(
            r#"[
  {"id": "1", "title": "Algebra", "price": 10},
  {"id": "2", "title": "Biology", "price": 20.5}
]"#,
        );
        let catalog = store_for(file.path()).load();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.list()[0].title, "Algebra");
        assert_eq!(catalog.list()[1].price, Some(20.5));
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempdir().expect("创建临时目录失败");
        let store = store_for(&dir.path().join("courses.json"));

        let mut catalog = Catalog::new();
        catalog.create(CourseDraft::new("Algebra", 10.0));
        catalog.create(CourseDraft::new("生物学", 19.5));
        let id = catalog.list()[0].id.clone();
        catalog.update_by_id(&id, CoursePatch::default().title("Linear Algebra"));

        store.save(&catalog).expect("保存应该成功");
        assert_eq!(store.load(), catalog, "保存后再读取应得到相同集合");
    }

    #[test]
    fn test_save_overwrites_corrupt_file() {
        let file = create_test_json_file("not json at all");
        let store = store_for(file.path());

        let mut catalog = store.load();
        catalog.create(CourseDraft::new("Algebra", 10.0));
        store.save(&catalog).expect("保存应该成功");

        let text = std::fs::read_to_string(file.path()).unwrap();
        assert!(!text.contains("not json"), "损坏内容应被整体覆盖");
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let dir = tempdir().expect("创建临时目录失败");
        let store = store_for(&dir.path().join("missing").join("courses.json"));

        let result = store.save(&Catalog::new());
        assert!(matches!(result, Err(AppError::Io(_))), "写入失败应向上传递");
    }

    #[test]
    fn test_catalog_or_empty_decisions() {
        let path = Path::new("courses.json");
        let missing = AppError::Io(std::io::Error::new(ErrorKind::NotFound, "gone"));
        let denied = AppError::Io(std::io::Error::new(ErrorKind::PermissionDenied, "denied"));
        let parse = AppError::Parse(serde_json::from_str::<Catalog>("[").unwrap_err());

        assert!(catalog_or_empty(path, Err(missing)).is_empty());
        assert!(catalog_or_empty(path, Err(denied)).is_empty());
        assert!(catalog_or_empty(path, Err(parse)).is_empty());

        let mut catalog = Catalog::new();
        catalog.create(CourseDraft::new("Algebra", 10.0));
        assert_eq!(catalog_or_empty(path, Ok(catalog.clone())), catalog);
    }

    #[test]
    fn test_null_price_survives_save() {
        let file = create_test_json_file(
            r#"[{"id":"k1","title":"Keep me","price":10},{"id":"k2","title":"Bad price","price":null}]"#,
        );
        let store = store_for(file.path());

        let mut catalog = store.load();
        assert_eq!(catalog.len(), 2, "null 价格的记录不应让整个文件被视为损坏");
        assert_eq!(catalog.find_by_id("k2").map(|c| c.price), Some(None));

        catalog.create(CourseDraft::new("Chem", 5.0));
        store.save(&catalog).expect("保存应该成功");

        let reloaded = store.load();
        assert_eq!(reloaded.len(), 3, "已有记录在保存后都应保留");
        assert_eq!(reloaded.find_by_id("k1").map(|c| c.price), Some(Some(10.0)));
        assert_eq!(reloaded.find_by_id("k2").map(|c| c.title.as_str()), Some("Bad price"));
    }

    #[test]
    fn test_integer_prices_keep_format_after_save() {
        let file = create_test_json_file(r#"[{"id": "1", "title": "Algebra", "price": 10}]"#);
        let store = store_for(file.path());

        let mut catalog = store.load();
        catalog.create(CourseDraft::new("Biology", 20.5));
        store.save(&catalog).expect("保存应该成功");

        let text = std::fs::read_to_string(file.path()).unwrap();
        assert!(text.contains("\"price\": 10\n"), "整数价格应原样写回: {}", text);
        assert!(!text.contains("10.0"));
        assert!(text.contains("\"price\": 20.5"));
    }

    #[test]
    fn test_default_config_path() {
        assert_eq!(StoreConfig::default().path, PathBuf::from("courses.json"));
    }
}
