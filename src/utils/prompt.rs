//! Prompt  line-based interactive input over any BufRead/Write pair

use std::io::{BufRead, Write};

use crate::model::course::price_text;
use crate::model::data_core::AppError;

/// 交互式提问器（测试时可注入内存读写端）
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// 输出端（命令处理器用它打印结果）
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// 打印问题并读取一行，去掉首尾空白
    pub fn ask(&mut self, message: &str) -> Result<String, AppError> {
        write!(self.output, "? {} ", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed(message.to_string()));
        }
        Ok(line.trim().to_string())
    }

    /// 带默认值提问：直接回车返回 None（保留旧值）
    pub fn ask_or_keep(&mut self, message: &str, current: &str) -> Result<Option<String>, AppError> {
        let answer = self.ask(&format!("{} ({})", message, current))?;
        Ok(if answer.is_empty() { None } else { Some(answer) })
    }

    /// 提问价格，直到输入合法的有限数值为止
    pub fn ask_price(&mut self, message: &str) -> Result<f64, AppError> {
        loop {
            let answer = self.ask(message)?;
            match parse_price(&answer) {
                Some(price) => return Ok(price),
                None => self.reject(&answer)?,
            }
        }
    }

    /// 带默认值提问价格：直接回车返回 None（保留旧值）
    pub fn ask_price_or_keep(&mut self, message: &str, current: Option<f64>) -> Result<Option<f64>, AppError> {
        let message = format!("{} ({})", message, price_text(current));
        loop {
            let answer = self.ask(&message)?;
            if answer.is_empty() {
                return Ok(None);
            }
            match parse_price(&answer) {
                Some(price) => return Ok(Some(price)),
                None => self.reject(&answer)?,
            }
        }
    }

    fn reject(&mut self, answer: &str) -> Result<(), AppError> {
        tracing::debug!("价格输入无效: {:?}", answer);
        writeln!(self.output, ">> Please enter a valid number")?;
        Ok(())
    }
}

/// 解析价格：只接受有限数值
fn parse_price(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|p| p.is_finite())
}
