//! バックエンドAPI

pub mod predict;
