//! IO helper: whole-file read/write for JSON

use std::{fs::File, io::BufReader, path::Path};

use serde::{de::DeserializeOwned, Serialize};
use crate::model::data_core::AppError;

/// 从文件读取并反序列化JSON数据
pub fn read_json_file<T: DeserializeOwned>(p: &Path) -> Result<T, AppError> {
    let f = File::open(p)?;
    let rdr = BufReader::new(f);
    let v: T = serde_json::from_reader(rdr)?;
    Ok(v)
}

/// 将数据序列化为JSON并整体覆盖写入文件（格式化输出，2空格缩进）
pub fn write_json_file<T: Serialize>(p: &Path, value: &T) -> Result<(), AppError> {
    let f = File::create(p)?;
    serde_json::to_writer_pretty(f, value)?;
    Ok(())
}
