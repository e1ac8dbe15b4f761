use super::types::CommandLine;
use super::utils::{custom_range, is_unset, split_headers};
use hs_core::{placeholder, DownloadSettings, HlsMethod};

/// Assembles the downloader invocation for `s`.
///
/// Argument order is significant to users who copy the generated command
/// and diff it between runs, so groups are emitted in a fixed sequence:
/// source and paths, headers, switches, performance, subtitles, proxy,
/// console, decryption, live, track selection, then free-form extras.
pub fn build_command(s: &DownloadSettings) -> CommandLine {
    let mut cmd = CommandLine::new(s.executable.trim());
    cmd.arg(s.m3u8_url.as_str());

    // 1. Naming & paths
    cmd.opt("--save-name", &s.title)
        .opt("--save-dir", &s.work_dir)
        .opt("--tmp-dir", &s.tmp_dir)
        .opt("--save-pattern", &s.save_pattern)
        .opt("--log-file-path", &s.log_file_path)
        .opt("--ffmpeg-binary-path", &s.ffmpeg_path);

    // 2. Request shaping
    for header in split_headers(&s.headers) {
        cmd.arg("-H").arg(header);
    }
    cmd.opt("--base-url", &s.baseurl)
        .opt("--mux-import", &s.mux_file);

    if let Some(range) = custom_range(&s.start_time, &s.end_time) {
        cmd.arg("--custom-range").arg(range);
    }

    // 3. Basic switches
    cmd.flag_if(s.del_after_merge, "--del-after-done")
        .flag_if(s.no_date_in_name, "--no-date-info")
        .flag_if(s.no_system_proxy, "--use-system-proxy=false")
        .flag_if(s.only_parse_m3u8, "--skip-download");
    if s.mux_while_download {
        cmd.arg("--live-real-time-merge").arg("--live-pipe-mux");
    }
    cmd.flag_if(s.no_merge, "--skip-merge")
        .flag_if(s.binary_merge, "--binary-merge")
        .flag_if(s.auto_select, "--auto-select")
        .flag_if(s.no_log, "--no-log")
        .flag_if(s.check_segments_count, "--check-segments-count")
        .flag_if(s.concurrent_download, "--concurrent-download");
    if s.merge_to_mp4 {
        cmd.arg("-M").arg("format=mp4");
    }

    // 4. Performance
    cmd.arg("--thread-count")
        .arg(s.max_threads.to_string())
        .arg("--download-retry-count")
        .arg(s.retry_count.to_string())
        .arg("--http-request-timeout")
        .arg(s.timeout.to_string());
    if s.limit_speed > 0 {
        cmd.arg("--max-speed").arg(format!("{}K", s.limit_speed));
    }

    // 5. Subtitles
    cmd.flag_if(s.sub_only, "--sub-only")
        .arg("--sub-format")
        .arg(s.sub_format.as_str())
        .flag_if(!s.auto_subtitle_fix, "--auto-subtitle-fix=false")
        .flag_if(s.live_fix_vtt_by_audio, "--live-fix-vtt-by-audio");

    // 6. Proxy
    cmd.opt("--custom-proxy", &s.custom_proxy);

    // 7. Console & output behaviour
    cmd.arg("--log-level")
        .arg(s.log_level.as_str())
        .arg("--ui-language")
        .arg(s.ui_language.as_str())
        .flag_if(s.force_ansi_console, "--force-ansi-console")
        .flag_if(s.no_ansi_color, "--no-ansi-color")
        .flag_if(s.use_ffmpeg_concat_demuxer, "--use-ffmpeg-concat-demuxer")
        .flag_if(!s.write_meta_json, "--write-meta-json=false")
        .flag_if(s.append_url_params, "--append-url-params")
        .flag_if(s.allow_hls_multi_ext_map, "--allow-hls-multi-ext-map")
        .flag_if(s.disable_update_check, "--disable-update-check");

    // 8. Decryption
    cmd.opt("--key", &s.key)
        .opt("--key-text-file", &s.key_text_file)
        .arg("--decryption-engine")
        .arg(s.decryption_engine.as_str())
        .opt("--decryption-binary-path", &s.decryption_binary_path)
        .flag_if(s.mp4_real_time_decryption, "--mp4-real-time-decryption");
    if s.custom_hls_method != HlsMethod::Aes128 {
        cmd.arg("--custom-hls-method")
            .arg(s.custom_hls_method.as_str());
    }
    cmd.opt("--custom-hls-key", &s.custom_hls_key)
        .opt("--custom-hls-iv", &s.custom_hls_iv);

    // 9. Live
    if !is_unset(&s.live_record_limit, placeholder::RECORD_LIMIT) {
        cmd.arg("--live-record-limit")
            .arg(s.live_record_limit.trim());
    }
    if s.live_wait_time != DownloadSettings::DEFAULT_LIVE_WAIT_TIME {
        cmd.arg("--live-wait-time")
            .arg(s.live_wait_time.to_string());
    }
    if s.live_take_count_enabled && s.live_take_count != DownloadSettings::DEFAULT_LIVE_TAKE_COUNT {
        cmd.arg("--live-take-count")
            .arg(s.live_take_count.to_string());
    }
    cmd.flag_if(s.live_perform_as_vod, "--live-perform-as-vod")
        .flag_if(!s.live_keep_segments, "--live-keep-segments=false");
    if !is_unset(&s.task_start_at, placeholder::TASK_START_AT) {
        cmd.arg("--task-start-at").arg(s.task_start_at.trim());
    }

    // 10. Track selection
    cmd.opt("--select-video", &s.select_video)
        .opt("--select-audio", &s.select_audio)
        .opt("--select-subtitle", &s.select_subtitle)
        .opt("--drop-video", &s.drop_video)
        .opt("--drop-audio", &s.drop_audio)
        .opt("--drop-subtitle", &s.drop_subtitle)
        .opt("--ad-keyword", &s.ad_keyword)
        .opt("--urlprocessor-args", &s.urlprocessor_args);

    // 11. Anything the form does not cover
    for extra in s.args.split_whitespace() {
        cmd.arg(extra);
    }

    cmd
}
