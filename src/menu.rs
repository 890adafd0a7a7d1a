//! Interactive prompts for category and thread mode.

use colored::Colorize;
use log::debug;
use std::io::{BufRead, Write};

use crate::catalog::Category;
use crate::errors::AppError;
use crate::probe::ThreadMode;
use crate::session::TestSelection;

/// Category used when the user just presses enter.
pub const DEFAULT_CATEGORY: Category = Category::ThreeIsp;

/// Menu display order: 1 through 8, then 0.
const MENU_ORDER: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 0];

/// Interpret a category answer. Empty input picks the default; anything
/// that is not a single digit 0-8 is rejected.
pub fn parse_category(input: &str) -> Option<Category> {
    let input = input.trim();
    if input.is_empty() {
        return Some(DEFAULT_CATEGORY);
    }

    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            c.to_digit(10).and_then(|d| Category::from_code(d as u8))
        }
        _ => None,
    }
}

/// Only `y` selects eight threads; anything else, including `Y` and empty
/// input, selects one.
pub fn parse_thread_mode(input: &str) -> ThreadMode {
    if input.trim() == "y" {
        ThreadMode::Eight
    } else {
        ThreadMode::Single
    }
}

fn read_answer<R: BufRead>(input: &mut R) -> Result<String, AppError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(AppError::input("input closed before a selection was made"));
    }
    Ok(line)
}

pub fn print_menu<W: Write>(out: &mut W) -> std::io::Result<()> {
    for code in MENU_ORDER {
        if let Some(category) = Category::from_code(code) {
            let default = if category == DEFAULT_CATEGORY { " (默认)" } else { "" };
            writeln!(
                out,
                "{} {}{}",
                format!("{}.", code).green(),
                category.label(),
                default
            )?;
        }
    }
    Ok(())
}

/// Ask for a category until a valid one is given, then for the thread
/// mode. Cancel is returned like any other choice.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<TestSelection, AppError> {
    print_menu(out)?;

    let category = loop {
        write!(out, "请选择测速类型 (默认 {}): ", DEFAULT_CATEGORY.code())?;
        out.flush()?;

        let answer = read_answer(input)?;
        match parse_category(&answer) {
            Some(category) => break category,
            None => {
                debug!("Rejected category input {:?}", answer.trim());
                writeln!(out, "{}", "输入错误, 请输入 0-8 之间的数字".red())?;
            }
        }
    };

    if category == Category::Cancel {
        return Ok(TestSelection { category, threads: ThreadMode::Single });
    }

    write!(out, "启用八线程测速 [y/N]: ")?;
    out.flush()?;
    let threads = parse_thread_mode(&read_answer(input)?);

    Ok(TestSelection { category, threads })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use proptest::prelude::*;
    use std::io::Cursor;

    fn run(answers: &str) -> (Result<TestSelection, AppError>, String) {
        let mut input = Cursor::new(answers.as_bytes().to_vec());
        let mut out = Vec::new();
        let selection = prompt(&mut input, &mut out);
        (selection, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_empty_input_defaults_to_three_isp() {
        assert_eq!(parse_category(""), Some(Category::ThreeIsp));
        assert_eq!(parse_category("  \n"), Some(Category::ThreeIsp));
    }

    #[test]
    fn test_invalid_categories() {
        for input in ["9", "12", "a", "-1", "3 4", "１"] {
            assert_eq!(parse_category(input), None, "{input}");
        }
    }

    #[test]
    fn test_thread_mode() {
        assert_eq!(parse_thread_mode("y\n"), ThreadMode::Eight);
        assert_eq!(parse_thread_mode("Y\n"), ThreadMode::Single);
        assert_eq!(parse_thread_mode("  y  "), ThreadMode::Eight);
        assert_eq!(parse_thread_mode("N"), ThreadMode::Single);
        assert_eq!(parse_thread_mode(""), ThreadMode::Single);
        assert_eq!(parse_thread_mode("yes"), ThreadMode::Single);
    }

    #[test]
    fn test_prompt_telecom_single() {
        let (selection, _) = run("3\nN\n");
        assert_eq!(
            selection.unwrap(),
            TestSelection {
                category: Category::Telecom,
                threads: ThreadMode::Single
            }
        );
    }

    #[test]
    fn test_prompt_reprompts_on_invalid() {
        let (selection, output) = run("x\n9\n6\ny\n");
        assert_eq!(
            selection.unwrap(),
            TestSelection {
                category: Category::EduIpv4,
                threads: ThreadMode::Eight
            }
        );
        assert_eq!(output.matches("请选择测速类型").count(), 3);
    }

    #[test]
    fn test_prompt_uppercase_y_is_single_thread() {
        let (selection, _) = run("4\nY\n");
        assert_eq!(selection.unwrap().threads, ThreadMode::Single);
    }

    #[test]
    fn test_cancel_skips_thread_prompt() {
        let (selection, output) = run("2\n");
        assert_eq!(selection.unwrap().category, Category::Cancel);
        assert!(!output.contains("八线程"));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let (selection, _) = run("x\n");
        assert_eq!(selection.unwrap_err().kind, ErrorKind::Input);
    }

    #[test]
    fn test_menu_lists_every_code() {
        let mut out = Vec::new();
        print_menu(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 9);
        assert!(text.contains("三网测速 (默认)"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn every_digit_maps_to_its_code(code in 0u8..=8) {
            let category = parse_category(&format!("{}\n", code));
            prop_assert_eq!(category.map(|c| c.code()), Some(code));
        }

        #[test]
        fn multi_char_input_is_rejected(input in "[0-9a-z]{2,5}") {
            prop_assert_eq!(parse_category(&input), None);
        }
    }
}
