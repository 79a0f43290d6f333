//! VM桥接层：命令处理器向用户输出的文本
//!
//! 这里只提供公共常量，具体处理逻辑在 commands.rs

// === 常量定义（消除魔法值） ===
pub const MSG_ADDED: &str = "Course added successfully";
pub const MSG_UPDATED: &str = "Course updated successfully";
pub const MSG_DELETED: &str = "Course deleted successfully";
pub const MSG_EMPTY: &str = "No courses found";
pub const MSG_NOT_FOUND_PREFIX: &str = "Course not found with ID: ";

// === 提问文本 ===
pub const ASK_TITLE: &str = "Course title:";
pub const ASK_PRICE: &str = "Course price:";
pub const ASK_ID: &str = "Enter course ID:";
pub const ASK_ID_UPDATE: &str = "Enter course ID to update:";
pub const ASK_ID_DELETE: &str = "Enter course ID to delete:";
pub const ASK_NEW_TITLE: &str = "New title (leave empty to keep old):";
pub const ASK_NEW_PRICE: &str = "New price (leave empty to keep old):";
