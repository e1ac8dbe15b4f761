//! Turns [`hs_core::DownloadSettings`] into an N_m3u8DL-RE invocation and
//! supervises the resulting process.

pub mod command;
pub mod downloader;
