//! # Taxoslice CLI Library
//!
//! サブタクソノミー抽出のコマンドラインインターフェース

pub mod commands;

pub use commands::*;
