//! 棋盤載入器
//!
//! - ASCII 格式：場景設計與測試用
//! - 存檔文件：JSON 或 TOML，結構見 `loader_schema`

use crate::board::Board;
use crate::component::{Player, Tile};
use crate::domain::core_types::{PieceType, PlayerId, Position};
use crate::error::{Context, LoadError, Result};
use crate::loader_schema::{GameState, PieceRecord, PlayerRecord, TileRecord};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::info;

/// 空的可通行格
const EMPTY_SYMBOL: &str = ".";
/// 不可通行格
const BARRIER_SYMBOL: &str = "#";

// ============================================================================
// ASCII
// ============================================================================

/// 從 ASCII 格式載入棋盤
///
/// ASCII 格式：每行用空格分隔的符號，行數必須等於每行的符號數
/// - `.` = 可通行空格
/// - `#` = 不可通行格
/// - 棋子符號（`P B N R Q A C K`）= 棋子，大寫屬玩家 1、小寫屬玩家 2
/// - 其他字串（`S`、`E` 等）= 標記位置（也是可通行空格），相同標記收集成 Vec
///
/// 返回：(棋盤, 標記映射)
///
/// 例如：
/// ```text
/// R . . S
/// . # . .
/// . . . .
/// . . . a
/// ```
pub fn load_from_ascii(ascii: &str) -> Result<(Board, HashMap<String, Vec<Position>>)> {
    let lines: Vec<&str> = ascii
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();

    if lines.is_empty() {
        return Err(LoadError::ParseError("棋盤為空".to_string()).into());
    }

    let size = lines.len();
    let mut board = Board::new(size)?;
    let mut markers: HashMap<String, Vec<Position>> = HashMap::new();

    for (row, line) in lines.iter().enumerate() {
        let cells: Vec<&str> = line.split_whitespace().collect();
        if cells.len() != size {
            return Err(LoadError::ParseError(format!(
                "第 {row} 列有 {} 格，棋盤必須是 {size}x{size}",
                cells.len()
            ))
            .into());
        }

        for (col, cell) in cells.into_iter().enumerate() {
            let pos = Position { row, col };
            match cell {
                EMPTY_SYMBOL => {}
                BARRIER_SYMBOL => board.set_tile(pos, Tile::barrier())?,
                _ => match parse_piece_symbol(cell) {
                    Some((piece_type, owner)) => {
                        board.place_piece(piece_type, owner, pos)?;
                    }
                    None => markers.entry(cell.to_string()).or_default().push(pos),
                },
            }
        }
    }

    Ok((board, markers))
}

fn parse_piece_symbol(cell: &str) -> Option<(PieceType, PlayerId)> {
    let mut chars = cell.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => PieceType::from_symbol(symbol),
        _ => None,
    }
}

// ============================================================================
// 存檔文件 <-> 棋盤
// ============================================================================

impl Board {
    /// 投影成存檔文件（列出所有格子，棋子依位置排序）
    pub fn to_state(&self) -> GameState {
        let tiles = self
            .positions()
            .filter_map(|pos| {
                self.tile(pos).map(|tile| TileRecord {
                    row: pos.row,
                    col: pos.col,
                    is_traversable: tile.traversable,
                    background_color: tile.background,
                })
            })
            .collect();

        let pieces = self
            .pieces()
            .into_iter()
            .map(|piece| PieceRecord {
                row: piece.pos.row,
                col: piece.pos.col,
                owner_id: piece.owner,
                piece_type: piece.piece_type,
            })
            .collect();

        GameState {
            board_size: self.size(),
            current_player: self.current_player_id(),
            player1: player_record(self.player(PlayerId::One)),
            player2: player_record(self.player(PlayerId::Two)),
            tiles,
            pieces,
        }
    }

    /// 由存檔文件重建棋盤
    ///
    /// 格子預設可通行，文件中有列出的格子覆蓋預設值；
    /// 棋子數值依種類重建。
    pub fn from_state(state: &GameState) -> Result<Self> {
        let mut board = Board::new(state.board_size).context("建立棋盤")?;

        for tile in &state.tiles {
            let pos = Position::new(tile.row, tile.col);
            let value = Tile {
                traversable: tile.is_traversable,
                background: tile.background_color,
            };
            board
                .set_tile(pos, value)
                .context(format!("設定格子 {pos}"))?;
        }

        for piece in &state.pieces {
            let pos = Position::new(piece.row, piece.col);
            board
                .place_piece(piece.piece_type, piece.owner_id, pos)
                .context(format!("放置棋子 {} {pos}", piece.piece_type))?;
        }

        board.restore_players(
            [player_from(&state.player1), player_from(&state.player2)],
            state.current_player,
        );
        Ok(board)
    }
}

fn player_record(player: &Player) -> PlayerRecord {
    PlayerRecord {
        energy: player.energy,
        hp: player.hp,
        color_name: player.color,
    }
}

fn player_from(record: &PlayerRecord) -> Player {
    Player {
        energy: record.energy,
        hp: record.hp,
        color: record.color_name,
    }
}

// ============================================================================
// 序列化格式
// ============================================================================

/// 存檔格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveFormat {
    Json,
    Toml,
}

impl SaveFormat {
    /// 由副檔名判斷格式
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("json") => Ok(SaveFormat::Json),
            Some("toml") => Ok(SaveFormat::Toml),
            _ => Err(LoadError::UnknownFormat {
                path: path.display().to_string(),
            }
            .into()),
        }
    }

    fn name(self) -> &'static str {
        match self {
            SaveFormat::Json => "json",
            SaveFormat::Toml => "toml",
        }
    }

    /// 反序列化存檔文件
    pub fn parse(self, text: &str) -> Result<GameState> {
        let parsed = match self {
            SaveFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
            SaveFormat::Toml => toml::from_str(text).map_err(|e| e.to_string()),
        };
        parsed.map_err(|reason| {
            LoadError::DeserializeError {
                format: self.name().to_string(),
                reason,
            }
            .into()
        })
    }

    /// 序列化存檔文件（JSON 使用縮排格式）
    pub fn render(self, state: &GameState) -> Result<String> {
        let rendered = match self {
            SaveFormat::Json => serde_json::to_string_pretty(state).map_err(|e| e.to_string()),
            SaveFormat::Toml => toml::to_string_pretty(state).map_err(|e| e.to_string()),
        };
        rendered.map_err(|reason| {
            LoadError::SerializeError {
                format: self.name().to_string(),
                reason,
            }
            .into()
        })
    }
}

/// 從字串載入棋盤
pub fn load_from_str(text: &str, format: SaveFormat) -> Result<Board> {
    let state = format.parse(text)?;
    Board::from_state(&state)
}

/// 把棋盤存成字串
pub fn save_to_string(board: &Board, format: SaveFormat) -> Result<String> {
    format.render(&board.to_state())
}

/// 從檔案載入棋盤，格式依副檔名判斷
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Board> {
    let path = path.as_ref();
    let format = SaveFormat::from_path(path)?;
    let text = fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let board =
        load_from_str(&text, format).context(format!("載入存檔 {}", path.display()))?;
    info!(path = %path.display(), pieces = board.piece_count(), "載入存檔");
    Ok(board)
}

/// 把棋盤存到檔案（自動建立上層目錄），格式依副檔名判斷
pub fn save_to_path(board: &Board, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let format = SaveFormat::from_path(path)?;
    let text = save_to_string(board, format)?;

    let io_error = |e: std::io::Error| LoadError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(path, text).map_err(io_error)?;
    info!(path = %path.display(), "儲存存檔");
    Ok(())
}
