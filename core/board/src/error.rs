//! 錯誤處理系統
//!
//! 兩類錯誤分開處理：
//! - `Error`：設定、載入、IO 失敗，開局前即應中止
//! - `ActionError`：玩家指令不合法，屬於正常結果，棋盤狀態不變

use crate::component::PieceId;
use crate::domain::alias::{Coord, Hp};
use crate::domain::core_types::{PlayerId, Position};
use thiserror::Error as ThisError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// 頂層錯誤，包含原始錯誤和 context 鏈
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    contexts: Vec<String>,
}

/// 錯誤種類
#[derive(Debug, ThisError)]
pub enum ErrorKind {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// 棋盤設定錯誤
#[derive(Debug, ThisError)]
pub enum BoardError {
    #[error("棋盤大小必須大於 0")]
    EmptyBoard,
    #[error("棋盤大小 {size} 超過上限 {max}")]
    TooLarge { size: Coord, max: Coord },
    #[error("位置超出棋盤邊界: {pos} 邊長 {size}")]
    OutOfBounds { pos: Position, size: Coord },
    #[error("位置 {pos} 已有棋子 {occupant}")]
    Occupied { pos: Position, occupant: PieceId },
    #[error("位置 {pos} 不可通行")]
    NotTraversable { pos: Position },
    #[error("找不到棋子 {id}")]
    PieceNotFound { id: PieceId },
    #[error("棋子 {id} 的 HP 必須大於 0: {hp}")]
    InvalidHp { id: PieceId, hp: Hp },
}

/// 格式載入錯誤
#[derive(Debug, ThisError)]
pub enum LoadError {
    #[error("解析失敗: {0}")]
    ParseError(String),
    #[error("{format} 反序列化失敗: {reason}")]
    DeserializeError { format: String, reason: String },
    #[error("{format} 序列化失敗: {reason}")]
    SerializeError { format: String, reason: String },
    #[error("讀寫檔案 {path} 失敗: {reason}")]
    Io { path: String, reason: String },
    #[error("無法由副檔名判斷存檔格式: {path}")]
    UnknownFormat { path: String },
}

/// 不合法的玩家指令（移動、攻擊）
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ActionError {
    #[error("找不到棋子 {id}")]
    NoSuchPiece { id: PieceId },
    #[error("位置 {pos} 超出棋盤")]
    OutOfBounds { pos: Position },
    #[error("目的地與目前位置相同 {pos}")]
    SamePosition { pos: Position },
    #[error("現在是 {current} 的回合，棋子屬於 {owner}")]
    NotYourTurn { owner: PlayerId, current: PlayerId },
    #[error("位置 {pos} 已有其他棋子")]
    Occupied { pos: Position },
    #[error("位置 {pos} 不可通行")]
    NotTraversable { pos: Position },
    #[error("距離 {distance} 超過移動範圍 {range}")]
    OutOfMovementRange { distance: usize, range: usize },
    #[error("移動規則不允許走到 {pos}")]
    MoveRejected { pos: Position },
    #[error("{player} 能量不足")]
    NoEnergy { player: PlayerId },
    #[error("位置 {pos} 沒有目標棋子")]
    NoTarget { pos: Position },
    #[error("目標 {pos} 不在攻擊範圍內")]
    AttackRejected { pos: Position },
    #[error("不能攻擊自己的棋子 {pos}")]
    FriendlyFire { pos: Position },
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// 添加錯誤上下文，自動記錄呼叫位置
    #[track_caller]
    pub fn context<C: Into<String>>(mut self, context: C) -> Self {
        let loc = std::panic::Location::caller();
        let msg = format!("{} [{}:{}]", context.into(), loc.file(), loc.line());
        self.contexts.push(msg);
        self
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)?;
        for ctx in &self.contexts {
            write!(f, "\n  {}", ctx)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.kind)
    }
}

impl<E: Into<ErrorKind>> From<E> for Error {
    fn from(error: E) -> Self {
        Self {
            kind: error.into(),
            contexts: Vec::new(),
        }
    }
}

/// Result 擴展 trait，用於添加錯誤上下文
pub trait Context<T> {
    fn context<C: Into<String>>(self, context: C) -> Result<T>;
}

impl<T> Context<T> for Result<T> {
    #[track_caller]
    fn context<C: Into<String>>(self, context: C) -> Result<T> {
        match self {
            Ok(value) => Ok(value),
            Err(e) => Err(e.context(context)),
        }
    }
}
