//! Unity build targets recorded in serialized files

/// Get the `BuildTarget` name for a recorded target platform value
pub fn build_target_name(value: i32) -> Option<&'static str> {
    let name = match value {
        -2 => "NoTarget",
        1 => "DashboardWidget",
        2 => "StandaloneOSX",
        3 => "StandaloneOSXPPC",
        4 => "StandaloneOSXIntel",
        5 => "StandaloneWindows",
        6 => "WebPlayer",
        7 => "WebPlayerStreamed",
        8 => "Wii",
        9 => "iOS",
        10 => "PS3",
        11 => "XBOX360",
        13 => "Android",
        14 => "StandaloneGLESEmu",
        16 => "NaCl",
        17 => "StandaloneLinux",
        18 => "FlashPlayer",
        19 => "StandaloneWindows64",
        20 => "WebGL",
        21 => "WSAPlayer",
        24 => "StandaloneLinux64",
        25 => "StandaloneLinuxUniversal",
        26 => "WP8Player",
        27 => "StandaloneOSXIntel64",
        28 => "BlackBerry",
        29 => "Tizen",
        30 => "PSP2",
        31 => "PS4",
        32 => "PSM",
        33 => "XboxOne",
        34 => "SamsungTV",
        35 => "N3DS",
        36 => "WiiU",
        37 => "tvOS",
        38 => "Switch",
        39 => "Lumin",
        40 => "Stadia",
        41 => "CloudRendering",
        42 => "GameCoreXboxSeries",
        43 => "GameCoreXboxOne",
        44 => "PS5",
        45 => "EmbeddedLinux",
        46 => "QNX",
        9999 => "UnknownPlatform",
        _ => return None,
    };
    Some(name)
}

/// Platform tag for a target value; unnamed values keep their number
pub fn platform_tag(value: i32) -> String {
    build_target_name(value)
        .map(str::to_string)
        .unwrap_or_else(|| value.to_string())
}
