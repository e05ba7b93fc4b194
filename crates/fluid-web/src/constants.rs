// Front-end wiring constants

// Canvas element the renderer attaches to
pub const CANVAS_ID: &str = "canvas";

// User-agent fragments that select the handheld tuning profile
pub const MOBILE_UA_NEEDLES: [&str; 7] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "windows phone",
];
