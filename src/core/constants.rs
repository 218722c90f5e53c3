// Player starting stats
pub const PLAYER_NAME: &str = "Rogue Mage";
pub const PLAYER_BASE_HP: u32 = 100;
pub const PLAYER_BASE_ATTACK: u32 = 20;
pub const PLAYER_BASE_DEFENSE: u32 = 5;

// Combat arithmetic
pub const ATTACK_VARIANCE: u32 = 3; // +/- applied to every attack roll
pub const DEFEND_DAMAGE_FACTOR: f64 = 0.5;
pub const MIN_DAMAGE: u32 = 1;

// Potions
pub const STARTING_POTIONS: u32 = 3;
pub const POTION_HEAL_AMOUNT: u32 = 30;
pub const POTION_REWARD_CAP: u32 = 5; // potion reward only offered below this count

// Floor-clear rewards
pub const REWARD_MAX_HP: u32 = 15;
pub const REWARD_ATTACK: u32 = 3;
pub const REWARD_DEFENSE: u32 = 2;
pub const REWARD_POTIONS: u32 = 2;

// Tower progression
pub const MAX_FLOOR: u32 = 20;
pub const FLOOR_HEAL_FRACTION: f64 = 0.3;
pub const FLOOR_SCALING_PER_FLOOR: f64 = 0.1;

// Timing
pub const ENEMY_ACTION_DELAY_MS: u64 = 1500;
pub const FRAME_MS: u64 = 16; // ~60 FPS
pub const MESSAGE_DURATION_FRAMES: u32 = 120;
pub const LONG_MESSAGE_FRAMES: u32 = 300;
pub const FLOOR_INTRO_MESSAGE_FRAMES: u32 = MESSAGE_DURATION_FRAMES * 2;
pub const RUN_WON_MESSAGE_FRAMES: u32 = 500;

// Combat log
pub const COMBAT_LOG_CAPACITY: usize = 10;
