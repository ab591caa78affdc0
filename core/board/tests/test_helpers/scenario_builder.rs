//! 測試輔助：ScenarioBuilder
//!
//! 用 ASCII art 定義棋盤，再疊加玩家狀態與格子顏色，產生存檔文件。

use board::domain::alias::{Energy, Hp};
use board::domain::core_types::{ColorName, PlayerId};
use board::error::Result;
use board::loader::load_from_ascii;
use board::loader_schema::{GameState, PlayerRecord};

struct TileColorDef {
    marker: String,
    color: ColorName,
}

/// 用 ASCII art 建立存檔文件
///
/// # 使用範例
///
/// ```
/// let state = ScenarioBuilder::from_ascii("
///   R . . W
///   . # . .
///   . . . .
///   . . . k
/// ")
/// .tile_color("W", ColorName::Blue)
/// .current_player(PlayerId::Two)
/// .to_state();
/// ```
pub struct ScenarioBuilder {
    ascii: String,
    current_player: PlayerId,
    players: [Option<PlayerRecord>; 2],
    tile_colors: Vec<TileColorDef>,
}

impl ScenarioBuilder {
    /// 以 ASCII art 初始化 builder
    pub fn from_ascii(ascii: &str) -> Self {
        ScenarioBuilder {
            ascii: ascii.to_string(),
            current_player: PlayerId::One,
            players: [None, None],
            tile_colors: Vec::new(),
        }
    }

    /// 設定目前回合的玩家
    pub fn current_player(mut self, player: PlayerId) -> Self {
        self.current_player = player;
        self
    }

    /// 覆蓋玩家狀態
    pub fn player(mut self, player: PlayerId, energy: Energy, hp: Hp, color: ColorName) -> Self {
        self.players[player.index()] = Some(PlayerRecord {
            energy,
            hp,
            color_name: color,
        });
        self
    }

    /// 設定標記格子的背景色
    pub fn tile_color(mut self, marker: &str, color: ColorName) -> Self {
        self.tile_colors.push(TileColorDef {
            marker: marker.to_string(),
            color,
        });
        self
    }

    /// 組裝存檔文件
    pub fn to_state(self) -> Result<GameState> {
        let (board, markers) = load_from_ascii(&self.ascii)?;
        let mut state = board.to_state();

        state.current_player = self.current_player;
        let [player1, player2] = self.players;
        if let Some(record) = player1 {
            state.player1 = record;
        }
        if let Some(record) = player2 {
            state.player2 = record;
        }

        for def in &self.tile_colors {
            let Some(positions) = markers.get(&def.marker) else {
                continue;
            };
            for tile in state.tiles.iter_mut() {
                if positions.iter().any(|p| p.row == tile.row && p.col == tile.col) {
                    tile.background_color = def.color;
                }
            }
        }

        Ok(state)
    }
}
