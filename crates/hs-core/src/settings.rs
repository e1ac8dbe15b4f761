use crate::options::{DecryptionEngine, HlsMethod, LogLevel, SubFormat, UiLanguage};
use crate::placeholder;
use serde::{Deserialize, Serialize};

/// Every form field of the front-end, one-to-one.
///
/// Field names double as the JSON keys of the settings files, so renaming a
/// field breaks files written by earlier releases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadSettings {
    // Paths
    pub executable: String,
    pub work_dir: String,
    pub ffmpeg_path: String,

    // Source
    pub m3u8_url: String,
    pub title: String,
    pub headers: String,
    pub baseurl: String,
    pub mux_file: String,

    // Range
    pub start_time: String,
    pub end_time: String,

    // Performance
    pub max_threads: u32,
    pub retry_count: u32,
    pub timeout: u32,
    pub limit_speed: u32,

    // Basic switches
    pub del_after_merge: bool,
    pub only_parse_m3u8: bool,
    pub mux_while_download: bool,
    pub binary_merge: bool,
    pub auto_select: bool,
    pub check_segments_count: bool,
    pub concurrent_download: bool,
    pub merge_to_mp4: bool,

    pub args: String,
    pub key: String,

    // Output
    pub tmp_dir: String,
    pub save_pattern: String,
    pub log_file_path: String,
    pub key_text_file: String,

    // Live
    pub live_record_limit: String,
    pub live_wait_time: u32,
    pub live_take_count_enabled: bool,
    pub live_take_count: u32,
    pub live_perform_as_vod: bool,
    pub live_keep_segments: bool,
    pub task_start_at: String,

    // Tracks
    pub select_video: String,
    pub select_audio: String,
    pub select_subtitle: String,
    pub drop_video: String,
    pub drop_audio: String,
    pub drop_subtitle: String,
    pub ad_keyword: String,
    pub urlprocessor_args: String,

    // Decryption
    pub decryption_engine: DecryptionEngine,
    pub decryption_binary_path: String,
    pub mp4_real_time_decryption: bool,
    pub custom_hls_method: HlsMethod,
    pub custom_hls_key: String,
    pub custom_hls_iv: String,

    // Subtitles
    pub sub_only: bool,
    pub sub_format: SubFormat,
    pub auto_subtitle_fix: bool,
    pub live_fix_vtt_by_audio: bool,

    // Proxy
    pub custom_proxy: String,
    pub no_system_proxy: bool,

    // Advanced
    pub log_level: LogLevel,
    pub ui_language: UiLanguage,
    pub force_ansi_console: bool,
    pub no_ansi_color: bool,
    pub use_ffmpeg_concat_demuxer: bool,
    pub write_meta_json: bool,
    pub append_url_params: bool,
    pub allow_hls_multi_ext_map: bool,
    pub no_merge: bool,
    pub no_date_in_name: bool,
    pub no_log: bool,
    pub disable_update_check: bool,

    // Window
    pub always_on_top: bool,
}

impl DownloadSettings {
    pub const THREADS_RANGE: (u32, u32) = (1, 100);
    pub const RETRY_RANGE: (u32, u32) = (1, 100);
    pub const TIMEOUT_RANGE: (u32, u32) = (1, 300);
    pub const SPEED_RANGE: (u32, u32) = (0, 10_000);
    pub const LIVE_WAIT_RANGE: (u32, u32) = (1, 3600);
    pub const LIVE_TAKE_RANGE: (u32, u32) = (1, 100);

    pub const DEFAULT_LIVE_WAIT_TIME: u32 = 3;
    pub const DEFAULT_LIVE_TAKE_COUNT: u32 = 16;

    /// Pulls numeric fields back into the ranges the form allows.
    ///
    /// Hand-edited files can carry anything; the downloader rejects some
    /// out-of-range values outright (a thread count of 0, for instance).
    pub fn normalize(&mut self) {
        fn clamp(value: &mut u32, (lo, hi): (u32, u32)) {
            *value = (*value).clamp(lo, hi);
        }

        clamp(&mut self.max_threads, Self::THREADS_RANGE);
        clamp(&mut self.retry_count, Self::RETRY_RANGE);
        clamp(&mut self.timeout, Self::TIMEOUT_RANGE);
        clamp(&mut self.limit_speed, Self::SPEED_RANGE);
        clamp(&mut self.live_wait_time, Self::LIVE_WAIT_RANGE);
        clamp(&mut self.live_take_count, Self::LIVE_TAKE_RANGE);
    }

    pub fn default_executable() -> String {
        if cfg!(windows) {
            "N_m3u8DL-RE.exe".into()
        } else {
            "N_m3u8DL-RE".into()
        }
    }
}

impl Default for DownloadSettings {
    fn default() -> Self {
        Self {
            executable: Self::default_executable(),
            work_dir: String::new(),
            ffmpeg_path: String::new(),

            m3u8_url: String::new(),
            title: String::new(),
            headers: String::new(),
            baseurl: String::new(),
            mux_file: String::new(),

            start_time: placeholder::RANGE_ZERO.into(),
            end_time: placeholder::RANGE_ZERO.into(),

            max_threads: 32,
            retry_count: 15,
            timeout: 100,
            limit_speed: 0,

            del_after_merge: true,
            only_parse_m3u8: false,
            mux_while_download: false,
            binary_merge: false,
            auto_select: true,
            check_segments_count: true,
            concurrent_download: true,
            merge_to_mp4: true,

            args: String::new(),
            key: String::new(),

            tmp_dir: String::new(),
            save_pattern: String::new(),
            log_file_path: String::new(),
            key_text_file: String::new(),

            live_record_limit: placeholder::RECORD_LIMIT.into(),
            live_wait_time: Self::DEFAULT_LIVE_WAIT_TIME,
            live_take_count_enabled: true,
            live_take_count: Self::DEFAULT_LIVE_TAKE_COUNT,
            live_perform_as_vod: false,
            live_keep_segments: true,
            task_start_at: placeholder::TASK_START_AT.into(),

            select_video: String::new(),
            select_audio: String::new(),
            select_subtitle: String::new(),
            drop_video: String::new(),
            drop_audio: String::new(),
            drop_subtitle: String::new(),
            ad_keyword: String::new(),
            urlprocessor_args: String::new(),

            decryption_engine: DecryptionEngine::default(),
            decryption_binary_path: String::new(),
            mp4_real_time_decryption: false,
            custom_hls_method: HlsMethod::default(),
            custom_hls_key: String::new(),
            custom_hls_iv: String::new(),

            sub_only: false,
            sub_format: SubFormat::default(),
            auto_subtitle_fix: true,
            live_fix_vtt_by_audio: false,

            custom_proxy: String::new(),
            no_system_proxy: true,

            log_level: LogLevel::default(),
            ui_language: UiLanguage::default(),
            force_ansi_console: false,
            no_ansi_color: false,
            use_ffmpeg_concat_demuxer: false,
            write_meta_json: true,
            append_url_params: false,
            allow_hls_multi_ext_map: false,
            no_merge: false,
            no_date_in_name: true,
            no_log: false,
            disable_update_check: false,

            always_on_top: false,
        }
    }
}
