pub const SECRET_LEN: usize = 3;
pub const DIGITS: u8 = 10;
pub const ITEMS_PER_PLAYER: usize = 6;
pub const PLAYERS: usize = 2;

/// Forced calls granted by DOUBLE on top of the normal one.
pub const DOUBLE_EXTRA_CALLS: u8 = 2;

/// HIGH/LOW classification boundary: 5-9 is HIGH, 0-4 is LOW.
pub const HIGH_THRESHOLD: u8 = 5;

pub fn is_high(digit: u8) -> bool {
    digit >= HIGH_THRESHOLD
}
