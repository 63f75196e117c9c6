pub mod app_loop;
pub mod options;
pub mod ui_render;
pub mod ui_text;
pub mod window_config;

pub const APP_NAME: &str = "PolyTrip";

/// Format a snapshot hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}
