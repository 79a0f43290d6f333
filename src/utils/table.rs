//! 表格输出：把课程列表渲染为带边框的文本表格

use unicode_width::UnicodeWidthStr;

use crate::model::course::{price_text, Course};

const HEADERS: [&str; 4] = ["(index)", "id", "title", "price"];

/// 渲染课程表格，列宽按终端显示宽度自适应（中日韩文字占两列）
pub fn render_table(courses: &[Course]) -> String {
    let rows: Vec<[String; 4]> = courses
        .iter()
        .enumerate()
        .map(|(i, c)| [i.to_string(), c.id.clone(), c.title.clone(), price_text(c.price)])
        .collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.width());
        }
    }

    let mut out = String::new();
    out.push_str(&border(&widths, '┌', '┬', '┐'));
    out.push_str(&line(&widths, HEADERS.iter().copied()));
    out.push_str(&border(&widths, '├', '┼', '┤'));
    for row in &rows {
        out.push_str(&line(&widths, row.iter().map(String::as_str)));
    }
    out.push_str(&border(&widths, '└', '┴', '┘'));
    out
}

fn border(widths: &[usize], left: char, mid: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}\n", left, segments.join(&mid.to_string()), right)
}

fn line<'a>(widths: &[usize], cells: impl Iterator<Item = &'a str>) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, w)| {
            let pad = w - cell.width();
            format!(" {}{} ", cell, " ".repeat(pad))
        })
        .collect();
    format!("│{}│\n", padded.join("│"))
}
