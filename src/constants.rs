pub const EXTINF_MARKER: &str = "#EXTINF";
pub const URL_PREFIX: &str = "http";
pub const M3U_HEADER: &str = "#EXTM3U";
pub const PLAYLIST_EXTS: [&str; 2] = ["m3u", "m3u8"];
pub const DEFAULT_SOURCE_DIR: &str = "./source";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_HOSTNAME: &str = "ott.mobaibox.com";
pub const DEFAULT_HOSTNAME_FILE: &str = "ott_mobaibox.m3u";
pub const DEFAULT_IPV4_FILE: &str = "ipv4_channels.m3u";
pub const DEFAULT_IPV6_FILE: &str = "ipv6_channels.m3u";
pub const DEFAULT_CONFIG_DIR: &str = "m3usort";
pub const DEFAULT_CONFIG_FILE: &str = "m3usort.toml";
pub const DEFAULT_LOG_FILE: &str = "m3usort.log";
