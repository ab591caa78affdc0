use board::board::Board;
use board::error::{BoardError, Context, Error, ErrorKind, LoadError, Result};
use std::path::MAIN_SEPARATOR;

fn location(line: u32) -> String {
    let file = ["core", "board", "tests", "test_error.rs"].join(&MAIN_SEPARATOR.to_string());
    format!("[{file}:{line}]")
}

// clear; cargo fmt; cargo test -- --nocapture
#[test]
fn show_error_messages() {
    let scene_err = LoadError::ParseError("Invalid symbol".to_string());
    let err: Error = scene_err.into();
    let err = err
        .context("解析列：5")
        .context("處理棋盤配置")
        .context("載入存檔");

    let error_str = err.to_string();

    // 驗證原始錯誤訊息
    assert!(error_str.contains("Invalid symbol"));

    // 驗證 contexts 存在且依序附上呼叫位置
    let lines: Vec<&str> = error_str.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].contains("解析列：5"));
    assert!(lines[2].contains("處理棋盤配置"));
    assert!(lines[3].contains("載入存檔"));
    assert!(lines[1].ends_with(&location(16)), "{}", lines[1]);
}

#[test]
fn test_result_context() {
    fn build() -> Result<Board> {
        Board::new(0).context("建立空棋盤")
    }

    let err = build().unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Board(BoardError::EmptyBoard)));
    assert!(err.to_string().starts_with("棋盤大小必須大於 0"));
    assert!(err.to_string().contains("建立空棋盤"));
    assert!(Board::new(3).context("不會附加").is_ok());
}

#[test]
fn test_error_source() {
    let err: Error = BoardError::EmptyBoard.into();
    // transparent 包裝，沒有下一層 source
    assert!(std::error::Error::source(&err).is_none());
}
