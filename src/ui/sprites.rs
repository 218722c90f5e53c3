//! ASCII art for the battle scene.

use ratatui::style::Color;
use std::io;
use std::path::Path;
use tower_rpg::enemies::{Archetype, EnemyColor};

/// Where the player sprite is read from, relative to the working directory.
pub const PLAYER_SPRITE_PATH: &str = "assets/player.txt";

const FALLBACK_PLAYER_SPRITE: &str = r"   /\
  /__\
 ( oo )
 /|##|\
  |  |
 _|  |_";

const GOBLIN_SPRITE: &str = r"  ,   ,
 (o\_/o)
  (\ /)
  /|=|\
   / \";

const ORC_SPRITE: &str = r" ,-----.
( o   o )
 \ VVV /
 /|###|\
/ |###| \
  /   \";

const TROLL_SPRITE: &str = r"  _____
 / o o \
|  ___  |
 \/|||\/
 /#####\
| ##### |
  || ||";

const DEMON_SPRITE: &str = r" /\   /\
(  \_/  )
 \ >.< /
 /|\_/|\
/ |###| \
  /\ /\";

const DRAGON_SPRITE: &str = r"      __/\__
 /\  / o  o \
/  \/  ----  \
\  /\  \/\/  /
 \/  \______/
    /|/||\|\
   ~~ ~~ ~~ ~~";

/// Read a sprite file. An empty file counts as missing.
pub fn read_sprite(path: impl AsRef<Path>) -> io::Result<String> {
    let art = std::fs::read_to_string(path)?;
    let art = art.trim_end();
    if art.trim().is_empty() {
        return Err(io::Error::new(io::ErrorKind::InvalidData, "empty sprite file"));
    }
    Ok(art.to_string())
}

/// The player sprite from `path`, or the built-in one when it cannot be used.
pub fn player_sprite(path: impl AsRef<Path>) -> String {
    read_sprite(path).unwrap_or_else(|_| FALLBACK_PLAYER_SPRITE.to_string())
}

pub fn enemy_sprite(archetype: Archetype) -> &'static str {
    match archetype {
        Archetype::Goblin => GOBLIN_SPRITE,
        Archetype::Orc => ORC_SPRITE,
        Archetype::Troll => TROLL_SPRITE,
        Archetype::Demon => DEMON_SPRITE,
        Archetype::Dragon => DRAGON_SPRITE,
    }
}

pub fn terminal_color(color: EnemyColor) -> Color {
    match color {
        EnemyColor::Green => Color::Green,
        EnemyColor::Orange => Color::Rgb(255, 165, 0),
        EnemyColor::Purple => Color::Magenta,
        EnemyColor::DarkRed => Color::Rgb(139, 0, 0),
        EnemyColor::Gold => Color::Rgb(255, 215, 0),
    }
}
