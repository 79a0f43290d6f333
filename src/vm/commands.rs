//! CommandBridge：把交互式提问、课程集合操作和持久化串起来
//!
//! 修改类命令：load → 操作 → save；查询类命令：load → 操作。

use std::io::{BufRead, Write};

use crate::model::course::{CourseDraft, CoursePatch};
use crate::model::data_core::{AppError, CourseStore};
use crate::utils::prompt::Prompter;
use crate::utils::table::render_table;
use crate::vm::bridge::*;

pub struct CommandBridge<R, W> {
    store: CourseStore,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> CommandBridge<R, W> {
    pub fn new(store: CourseStore, prompter: Prompter<R, W>) -> Self {
        Self { store, prompter }
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// 新建课程
    pub fn handle_add(&mut self) -> Result<(), AppError> {
        let title = self.prompter.ask(ASK_TITLE)?;
        let price = self.prompter.ask_price(ASK_PRICE)?;

        let mut catalog = self.store.load();
        let created = catalog.create(CourseDraft::new(title, price)).clone();
        self.store.save(&catalog)?;

        tracing::info!("课程已添加: {}", created.id);
        let out = self.prompter.output();
        writeln!(out, "{}", MSG_ADDED)?;
        write!(out, "{}", render_table(std::slice::from_ref(&created)))?;
        Ok(())
    }

    /// 列出全部课程
    pub fn handle_list(&mut self) -> Result<(), AppError> {
        let catalog = self.store.load();
        let out = self.prompter.output();
        if catalog.is_empty() {
            writeln!(out, "{}", MSG_EMPTY)?;
        } else {
            write!(out, "{}", render_table(catalog.list()))?;
        }
        Ok(())
    }

    /// 按ID查看课程
    pub fn handle_get(&mut self) -> Result<(), AppError> {
        let catalog = self.store.load();
        if catalog.is_empty() {
            writeln!(self.prompter.output(), "{}", MSG_EMPTY)?;
            return Ok(());
        }

        let id = self.prompter.ask(ASK_ID)?;
        let out = self.prompter.output();
        match catalog.find_by_id(&id) {
            Some(course) => write!(out, "{}", render_table(std::slice::from_ref(course)))?,
            None => writeln!(out, "{}{}", MSG_NOT_FOUND_PREFIX, id)?,
        }
        Ok(())
    }

    /// 按ID更新课程：空输入保留旧值
    pub fn handle_update(&mut self) -> Result<(), AppError> {
        let mut catalog = self.store.load();
        if catalog.is_empty() {
            writeln!(self.prompter.output(), "{}", MSG_EMPTY)?;
            return Ok(());
        }

        let id = self.prompter.ask(ASK_ID_UPDATE)?;
        let Some(current) = catalog.find_by_id(&id).cloned() else {
            writeln!(self.prompter.output(), "{}{}", MSG_NOT_FOUND_PREFIX, id)?;
            return Ok(());
        };

        let patch = CoursePatch {
            title: self.prompter.ask_or_keep(ASK_NEW_TITLE, &current.title)?,
            price: self.prompter.ask_price_or_keep(ASK_NEW_PRICE, current.price)?,
        };
        if patch.is_empty() {
            tracing::debug!("更新内容为空，保持原值: {}", id);
        }

        let Some(updated) = catalog.update_by_id(&id, patch).cloned() else {
            writeln!(self.prompter.output(), "{}{}", MSG_NOT_FOUND_PREFIX, id)?;
            return Ok(());
        };
        self.store.save(&catalog)?;

        tracing::info!("课程已更新: {}", id);
        let out = self.prompter.output();
        writeln!(out, "{}", MSG_UPDATED)?;
        write!(out, "{}", render_table(std::slice::from_ref(&updated)))?;
        Ok(())
    }

    /// 按ID删除课程
    pub fn handle_delete(&mut self) -> Result<(), AppError> {
        let mut catalog = self.store.load();
        if catalog.is_empty() {
            writeln!(self.prompter.output(), "{}", MSG_EMPTY)?;
            return Ok(());
        }

        let id = self.prompter.ask(ASK_ID_DELETE)?;
        if !catalog.delete_by_id(&id) {
            writeln!(self.prompter.output(), "{}{}", MSG_NOT_FOUND_PREFIX, id)?;
            return Ok(());
        }
        self.store.save(&catalog)?;

        tracing::info!("课程已删除: {}", id);
        writeln!(self.prompter.output(), "{}", MSG_DELETED)?;
        Ok(())
    }
}
