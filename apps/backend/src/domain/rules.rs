use std::ops::RangeInclusive;

pub const FRAMES_PER_GAME: u8 = 10;
pub const LAST_FRAME: u8 = FRAMES_PER_GAME;
pub const PINS_PER_RACK: u8 = 10;
pub const MIN_PLAYERS: usize = 2;

pub type FrameNumber = u8; // 1..=10

pub fn frame_numbers() -> RangeInclusive<FrameNumber> {
    1..=FRAMES_PER_GAME
}

pub fn is_last_frame(frame_number: FrameNumber) -> bool {
    frame_number == LAST_FRAME
}
