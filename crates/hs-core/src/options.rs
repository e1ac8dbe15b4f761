//! Closed value sets for the combo-box backed flags.
//!
//! The serialized form of every variant is the exact token the downloader
//! expects on its command line, so settings files and argument vectors stay
//! in sync.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! option_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $token:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

option_enum! {
    DecryptionEngine {
        Mp4Decrypt => "MP4DECRYPT",
        Ffmpeg => "FFMPEG",
        ShakaPackager => "SHAKA_PACKAGER",
    }
}

option_enum! {
    /// Overrides the encryption method declared by the playlist.
    HlsMethod {
        Aes128 => "AES_128",
        Aes128Ecb => "AES_128_ECB",
        Cenc => "CENC",
        Chacha20 => "CHACHA20",
        None => "NONE",
        SampleAes => "SAMPLE_AES",
        SampleAesCtr => "SAMPLE_AES_CTR",
        Unknown => "UNKNOWN",
    }
}

option_enum! {
    SubFormat {
        Srt => "SRT",
        Vtt => "VTT",
    }
}

option_enum! {
    LogLevel {
        Debug => "DEBUG",
        Info => "INFO",
        Warn => "WARN",
        Error => "ERROR",
        Off => "OFF",
    }
}

option_enum! {
    UiLanguage {
        EnUs => "en-US",
        ZhCn => "zh-CN",
        ZhTw => "zh-TW",
    }
}

impl Default for DecryptionEngine {
    fn default() -> Self {
        Self::Mp4Decrypt
    }
}

impl Default for HlsMethod {
    fn default() -> Self {
        Self::Aes128
    }
}

impl Default for SubFormat {
    fn default() -> Self {
        Self::Srt
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::Info
    }
}

impl Default for UiLanguage {
    fn default() -> Self {
        Self::ZhCn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_match_downloader_flags() {
        assert_eq!(HlsMethod::SampleAesCtr.as_str(), "SAMPLE_AES_CTR");
        assert_eq!(UiLanguage::ZhTw.to_string(), "zh-TW");
        assert_eq!(DecryptionEngine::ALL.len(), 3);
        assert_eq!(HlsMethod::ALL.first(), Some(&HlsMethod::Aes128));
    }

    #[test]
    fn serde_uses_the_flag_token() {
        let json = serde_json::to_string(&LogLevel::Warn).unwrap();
        assert_eq!(json, "\"WARN\"");

        let parsed: SubFormat = serde_json::from_str("\"VTT\"").unwrap();
        assert_eq!(parsed, SubFormat::Vtt);

        assert!(serde_json::from_str::<SubFormat>("\"ASS\"").is_err());
    }
}
