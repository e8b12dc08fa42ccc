// Altalt Key Type
// Represents a single key code from Linux input-event-codes.h

use std::fmt;
use std::str::FromStr;

/// Represents a single keyboard key code.
///
/// This is a newtype wrapper around u16 for type safety.
/// The numeric values match Linux input-event-codes.h definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Key(pub u16);

/// Error returned when a key name or code cannot be resolved
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyParseError {
    #[error("Unknown key: {0}")]
    UnknownName(String),

    #[error("Invalid key code: {0}")]
    InvalidCode(String),
}

impl Key {
    pub const ESC: Key = Key(1);
    pub const KEY_1: Key = Key(2);
    pub const KEY_2: Key = Key(3);
    pub const KEY_3: Key = Key(4);
    pub const KEY_4: Key = Key(5);
    pub const KEY_5: Key = Key(6);
    pub const KEY_6: Key = Key(7);
    pub const KEY_7: Key = Key(8);
    pub const KEY_8: Key = Key(9);
    pub const KEY_9: Key = Key(10);
    pub const KEY_0: Key = Key(11);
    pub const BACKSPACE: Key = Key(14);
    pub const TAB: Key = Key(15);
    pub const E: Key = Key(18);
    pub const LEFT_BRACE: Key = Key(26);
    pub const RIGHT_BRACE: Key = Key(27);
    pub const A: Key = Key(30);
    pub const J: Key = Key(36);
    pub const SEMICOLON: Key = Key(39);
    pub const APOSTROPHE: Key = Key(40);
    pub const GRAVE: Key = Key(41);
    pub const LEFT_SHIFT: Key = Key(42);
    pub const BACKSLASH: Key = Key(43);
    pub const V: Key = Key(47);
    pub const COMMA: Key = Key(51);
    pub const DOT: Key = Key(52);
    pub const SLASH: Key = Key(53);
    pub const LEFT_ALT: Key = Key(56);
    pub const F1: Key = Key(59);
    pub const F2: Key = Key(60);
    pub const F3: Key = Key(61);
    pub const F4: Key = Key(62);
    pub const F5: Key = Key(63);
    pub const F6: Key = Key(64);
    pub const F7: Key = Key(65);
    pub const F8: Key = Key(66);
    pub const F9: Key = Key(67);
    pub const F10: Key = Key(68);
    pub const UP: Key = Key(103);
    pub const PAGE_UP: Key = Key(104);
    pub const DOWN: Key = Key(108);
    pub const PAGE_DOWN: Key = Key(109);
    pub const INSERT: Key = Key(110);
    pub const DELETE: Key = Key(111);
    pub const EURO: Key = Key(0x1b3);

    /// Highest key code the kernel accepts (KEY_MAX)
    pub const MAX_CODE: u16 = 0x2ff;

    /// Get the raw numeric code value
    pub fn code(self) -> u16 {
        self.0
    }

    /// Get the name of this key
    pub fn name(self) -> &'static str {
        key_name(self.0)
    }

    /// Parse a key given either by name or by raw numeric code.
    ///
    /// A string made only of digits (or a `0x` hex literal) is taken as a raw
    /// code, anything else goes through the name table. Single digit keys
    /// therefore cannot be selected by name here, use `KEY_1` style instead.
    pub fn from_name_or_code(s: &str) -> Result<Key, KeyParseError> {
        let trimmed = s.trim();
        let numeric = if let Some(hex) = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            Some(u32::from_str_radix(hex, 16))
        } else if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            Some(trimmed.parse::<u32>())
        } else {
            None
        };

        match numeric {
            Some(Ok(code)) if code <= u32::from(Key::MAX_CODE) => Ok(Key(code as u16)),
            Some(_) => Err(KeyParseError::InvalidCode(trimmed.to_string())),
            None => trimmed.parse(),
        }
    }
}

impl From<u16> for Key {
    fn from(code: u16) -> Self {
        Key(code)
    }
}

impl From<Key> for u16 {
    fn from(key: Key) -> Self {
        key.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match KEY_NAMES.iter().find(|(_, code)| *code == self.0) {
            Some((name, _)) => write!(f, "{}", name),
            None => write!(f, "KEY({})", self.0),
        }
    }
}

impl FromStr for Key {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        key_from_name(s).ok_or_else(|| KeyParseError::UnknownName(s.to_string()))
    }
}

// Canonical names first; aliases follow so reverse lookups hit the canonical one.
const KEY_NAMES: &[(&str, u16)] = &[
    ("RESERVED", 0),
    ("ESC", 1),
    ("1", 2),
    ("2", 3),
    ("3", 4),
    ("4", 5),
    ("5", 6),
    ("6", 7),
    ("7", 8),
    ("8", 9),
    ("9", 10),
    ("0", 11),
    ("MINUS", 12),
    ("EQUAL", 13),
    ("BACKSPACE", 14),
    ("TAB", 15),
    ("Q", 16),
    ("W", 17),
    ("E", 18),
    ("R", 19),
    ("T", 20),
    ("Y", 21),
    ("U", 22),
    ("I", 23),
    ("O", 24),
    ("P", 25),
    ("LEFT_BRACE", 26),
    ("RIGHT_BRACE", 27),
    ("ENTER", 28),
    ("LEFT_CTRL", 29),
    ("A", 30),
    ("S", 31),
    ("D", 32),
    ("F", 33),
    ("G", 34),
    ("H", 35),
    ("J", 36),
    ("K", 37),
    ("L", 38),
    ("SEMICOLON", 39),
    ("APOSTROPHE", 40),
    ("GRAVE", 41),
    ("LEFT_SHIFT", 42),
    ("BACKSLASH", 43),
    ("Z", 44),
    ("X", 45),
    ("C", 46),
    ("V", 47),
    ("B", 48),
    ("N", 49),
    ("M", 50),
    ("COMMA", 51),
    ("DOT", 52),
    ("SLASH", 53),
    ("RIGHT_SHIFT", 54),
    ("KPASTERISK", 55),
    ("LEFT_ALT", 56),
    ("SPACE", 57),
    ("CAPSLOCK", 58),
    ("F1", 59),
    ("F2", 60),
    ("F3", 61),
    ("F4", 62),
    ("F5", 63),
    ("F6", 64),
    ("F7", 65),
    ("F8", 66),
    ("F9", 67),
    ("F10", 68),
    ("NUMLOCK", 69),
    ("SCROLLLOCK", 70),
    ("KPMINUS", 74),
    ("KPPLUS", 78),
    ("102ND", 86),
    ("F11", 87),
    ("F12", 88),
    ("KPENTER", 96),
    ("RIGHT_CTRL", 97),
    ("KPSLASH", 98),
    ("SYSRQ", 99),
    ("RIGHT_ALT", 100),
    ("HOME", 102),
    ("UP", 103),
    ("PAGE_UP", 104),
    ("LEFT", 105),
    ("RIGHT", 106),
    ("END", 107),
    ("DOWN", 108),
    ("PAGE_DOWN", 109),
    ("INSERT", 110),
    ("DELETE", 111),
    ("MUTE", 113),
    ("VOLUMEDOWN", 114),
    ("VOLUMEUP", 115),
    ("POWER", 116),
    ("KPEQUAL", 117),
    ("PAUSE", 119),
    ("KPCOMMA", 121),
    ("LEFT_META", 125),
    ("RIGHT_META", 126),
    ("COMPOSE", 127),
    ("MENU", 139),
    ("BACK", 158),
    ("FORWARD", 159),
    ("NEXTSONG", 163),
    ("PLAYPAUSE", 164),
    ("PREVIOUSSONG", 165),
    ("STOPCD", 166),
    ("HOMEPAGE", 172),
    ("F13", 183),
    ("F14", 184),
    ("F15", 185),
    ("F16", 186),
    ("F17", 187),
    ("F18", 188),
    ("F19", 189),
    ("F20", 190),
    ("F21", 191),
    ("F22", 192),
    ("F23", 193),
    ("F24", 194),
    ("PRINT", 210),
    ("SEARCH", 217),
    ("BRIGHTNESSDOWN", 224),
    ("BRIGHTNESSUP", 225),
    ("DOLLAR", 0x1b2),
    ("EURO", 0x1b3),
    // Remaining input-event-codes.h keys
    ("KP7", 71),
    ("KP8", 72),
    ("KP9", 73),
    ("KP4", 75),
    ("KP5", 76),
    ("KP6", 77),
    ("KP1", 79),
    ("KP2", 80),
    ("KP3", 81),
    ("KP0", 82),
    ("KPDOT", 83),
    ("ZENKAKUHANKAKU", 85),
    ("RO", 89),
    ("KATAKANA", 90),
    ("HIRAGANA", 91),
    ("HENKAN", 92),
    ("KATAKANAHIRAGANA", 93),
    ("MUHENKAN", 94),
    ("KPJPCOMMA", 95),
    ("LINEFEED", 101),
    ("MACRO", 112),
    ("KPPLUSMINUS", 118),
    ("SCALE", 120),
    ("HANGEUL", 122),
    ("HANJA", 123),
    ("YEN", 124),
    ("STOP", 128),
    ("AGAIN", 129),
    ("PROPS", 130),
    ("UNDO", 131),
    ("FRONT", 132),
    ("COPY", 133),
    ("OPEN", 134),
    ("PASTE", 135),
    ("FIND", 136),
    ("CUT", 137),
    ("HELP", 138),
    ("CALC", 140),
    ("SETUP", 141),
    ("SLEEP", 142),
    ("WAKEUP", 143),
    ("FILE", 144),
    ("SENDFILE", 145),
    ("DELETEFILE", 146),
    ("XFER", 147),
    ("PROG1", 148),
    ("PROG2", 149),
    ("WWW", 150),
    ("MSDOS", 151),
    ("COFFEE", 152),
    ("ROTATE_DISPLAY", 153),
    ("CYCLEWINDOWS", 154),
    ("MAIL", 155),
    ("BOOKMARKS", 156),
    ("COMPUTER", 157),
    ("CLOSECD", 160),
    ("EJECTCD", 161),
    ("EJECTCLOSECD", 162),
    ("RECORD", 167),
    ("REWIND", 168),
    ("PHONE", 169),
    ("ISO", 170),
    ("CONFIG", 171),
    ("REFRESH", 173),
    ("EXIT", 174),
    ("MOVE", 175),
    ("EDIT", 176),
    ("SCROLLUP", 177),
    ("SCROLLDOWN", 178),
    ("KPLEFTPAREN", 179),
    ("KPRIGHTPAREN", 180),
    ("NEW", 181),
    ("REDO", 182),
    ("PLAYCD", 200),
    ("PAUSECD", 201),
    ("PROG3", 202),
    ("PROG4", 203),
    ("ALL_APPLICATIONS", 204),
    ("SUSPEND", 205),
    ("CLOSE", 206),
    ("PLAY", 207),
    ("FASTFORWARD", 208),
    ("BASSBOOST", 209),
    ("HP", 211),
    ("CAMERA", 212),
    ("SOUND", 213),
    ("QUESTION", 214),
    ("EMAIL", 215),
    ("CHAT", 216),
    ("CONNECT", 218),
    ("FINANCE", 219),
    ("SPORT", 220),
    ("SHOP", 221),
    ("ALTERASE", 222),
    ("CANCEL", 223),
    ("MEDIA", 226),
    ("SWITCHVIDEOMODE", 227),
    ("KBDILLUMTOGGLE", 228),
    ("KBDILLUMDOWN", 229),
    ("KBDILLUMUP", 230),
    ("SEND", 231),
    ("REPLY", 232),
    ("FORWARDMAIL", 233),
    ("SAVE", 234),
    ("DOCUMENTS", 235),
    ("BATTERY", 236),
    ("BLUETOOTH", 237),
    ("WLAN", 238),
    ("UWB", 239),
    ("UNKNOWN", 240),
    ("VIDEO_NEXT", 241),
    ("VIDEO_PREV", 242),
    ("BRIGHTNESS_CYCLE", 243),
    ("BRIGHTNESS_AUTO", 244),
    ("DISPLAY_OFF", 245),
    ("WWAN", 246),
    ("RFKILL", 247),
    ("MICMUTE", 248),
    ("OK", 0x160),
    ("SELECT", 0x161),
    ("GOTO", 0x162),
    ("CLEAR", 0x163),
    ("POWER2", 0x164),
    ("OPTION", 0x165),
    ("INFO", 0x166),
    ("TIME", 0x167),
    ("VENDOR", 0x168),
    ("ARCHIVE", 0x169),
    ("PROGRAM", 0x16a),
    ("CHANNEL", 0x16b),
    ("FAVORITES", 0x16c),
    ("EPG", 0x16d),
    ("PVR", 0x16e),
    ("MHP", 0x16f),
    ("LANGUAGE", 0x170),
    ("TITLE", 0x171),
    ("SUBTITLE", 0x172),
    ("ANGLE", 0x173),
    ("FULL_SCREEN", 0x174),
    ("MODE", 0x175),
    ("KEYBOARD", 0x176),
    ("ASPECT_RATIO", 0x177),
    ("PC", 0x178),
    ("TV", 0x179),
    ("TV2", 0x17a),
    ("VCR", 0x17b),
    ("VCR2", 0x17c),
    ("SAT", 0x17d),
    ("SAT2", 0x17e),
    ("CD", 0x17f),
    ("TAPE", 0x180),
    ("RADIO", 0x181),
    ("TUNER", 0x182),
    ("PLAYER", 0x183),
    ("TEXT", 0x184),
    ("DVD", 0x185),
    ("AUX", 0x186),
    ("MP3", 0x187),
    ("AUDIO", 0x188),
    ("VIDEO", 0x189),
    ("DIRECTORY", 0x18a),
    ("LIST", 0x18b),
    ("MEMO", 0x18c),
    ("CALENDAR", 0x18d),
    ("RED", 0x18e),
    ("GREEN", 0x18f),
    ("YELLOW", 0x190),
    ("BLUE", 0x191),
    ("CHANNELUP", 0x192),
    ("CHANNELDOWN", 0x193),
    ("FIRST", 0x194),
    ("LAST", 0x195),
    ("AB", 0x196),
    ("NEXT", 0x197),
    ("RESTART", 0x198),
    ("SLOW", 0x199),
    ("SHUFFLE", 0x19a),
    ("BREAK", 0x19b),
    ("PREVIOUS", 0x19c),
    ("DIGITS", 0x19d),
    ("TEEN", 0x19e),
    ("TWEN", 0x19f),
    ("VIDEOPHONE", 0x1a0),
    ("GAMES", 0x1a1),
    ("ZOOMIN", 0x1a2),
    ("ZOOMOUT", 0x1a3),
    ("ZOOMRESET", 0x1a4),
    ("WORDPROCESSOR", 0x1a5),
    ("EDITOR", 0x1a6),
    ("SPREADSHEET", 0x1a7),
    ("GRAPHICSEDITOR", 0x1a8),
    ("PRESENTATION", 0x1a9),
    ("DATABASE", 0x1aa),
    ("NEWS", 0x1ab),
    ("VOICEMAIL", 0x1ac),
    ("ADDRESSBOOK", 0x1ad),
    ("MESSENGER", 0x1ae),
    ("DISPLAYTOGGLE", 0x1af),
    ("SPELLCHECK", 0x1b0),
    ("LOGOFF", 0x1b1),
    ("FRAMEBACK", 0x1b4),
    ("FRAMEFORWARD", 0x1b5),
    ("CONTEXT_MENU", 0x1b6),
    ("MEDIA_REPEAT", 0x1b7),
    ("10CHANNELSUP", 0x1b8),
    ("10CHANNELSDOWN", 0x1b9),
    ("IMAGES", 0x1ba),
    ("NOTIFICATION_CENTER", 0x1bc),
    ("PICKUP_PHONE", 0x1bd),
    ("HANGUP_PHONE", 0x1be),
    ("LINK_PHONE", 0x1bf),
    ("DEL_EOL", 0x1c0),
    ("DEL_EOS", 0x1c1),
    ("INS_LINE", 0x1c2),
    ("DEL_LINE", 0x1c3),
    ("FN", 0x1d0),
    ("FN_ESC", 0x1d1),
    ("FN_F1", 0x1d2),
    ("FN_F2", 0x1d3),
    ("FN_F3", 0x1d4),
    ("FN_F4", 0x1d5),
    ("FN_F5", 0x1d6),
    ("FN_F6", 0x1d7),
    ("FN_F7", 0x1d8),
    ("FN_F8", 0x1d9),
    ("FN_F9", 0x1da),
    ("FN_F10", 0x1db),
    ("FN_F11", 0x1dc),
    ("FN_F12", 0x1dd),
    ("FN_1", 0x1de),
    ("FN_2", 0x1df),
    ("FN_D", 0x1e0),
    ("FN_E", 0x1e1),
    ("FN_F", 0x1e2),
    ("FN_S", 0x1e3),
    ("FN_B", 0x1e4),
    ("FN_RIGHT_SHIFT", 0x1e5),
    ("BRL_DOT1", 0x1f1),
    ("BRL_DOT2", 0x1f2),
    ("BRL_DOT3", 0x1f3),
    ("BRL_DOT4", 0x1f4),
    ("BRL_DOT5", 0x1f5),
    ("BRL_DOT6", 0x1f6),
    ("BRL_DOT7", 0x1f7),
    ("BRL_DOT8", 0x1f8),
    ("BRL_DOT9", 0x1f9),
    ("BRL_DOT10", 0x1fa),
    ("NUMERIC_0", 0x200),
    ("NUMERIC_1", 0x201),
    ("NUMERIC_2", 0x202),
    ("NUMERIC_3", 0x203),
    ("NUMERIC_4", 0x204),
    ("NUMERIC_5", 0x205),
    ("NUMERIC_6", 0x206),
    ("NUMERIC_7", 0x207),
    ("NUMERIC_8", 0x208),
    ("NUMERIC_9", 0x209),
    ("NUMERIC_STAR", 0x20a),
    ("NUMERIC_POUND", 0x20b),
    ("NUMERIC_A", 0x20c),
    ("NUMERIC_B", 0x20d),
    ("NUMERIC_C", 0x20e),
    ("NUMERIC_D", 0x20f),
    ("CAMERA_FOCUS", 0x210),
    ("WPS_BUTTON", 0x211),
    ("TOUCHPAD_TOGGLE", 0x212),
    ("TOUCHPAD_ON", 0x213),
    ("TOUCHPAD_OFF", 0x214),
    ("CAMERA_ZOOMIN", 0x215),
    ("CAMERA_ZOOMOUT", 0x216),
    ("CAMERA_UP", 0x217),
    ("CAMERA_DOWN", 0x218),
    ("CAMERA_LEFT", 0x219),
    ("CAMERA_RIGHT", 0x21a),
    ("ATTENDANT_ON", 0x21b),
    ("ATTENDANT_OFF", 0x21c),
    ("ATTENDANT_TOGGLE", 0x21d),
    ("LIGHTS_TOGGLE", 0x21e),
    ("ALS_TOGGLE", 0x230),
    ("ROTATE_LOCK_TOGGLE", 0x231),
    ("REFRESH_RATE_TOGGLE", 0x232),
    ("BUTTONCONFIG", 0x240),
    ("TASKMANAGER", 0x241),
    ("JOURNAL", 0x242),
    ("CONTROLPANEL", 0x243),
    ("APPSELECT", 0x244),
    ("SCREENSAVER", 0x245),
    ("VOICECOMMAND", 0x246),
    ("ASSISTANT", 0x247),
    ("KBD_LAYOUT_NEXT", 0x248),
    ("EMOJI_PICKER", 0x249),
    ("DICTATE", 0x24a),
    ("BRIGHTNESS_MIN", 0x250),
    ("BRIGHTNESS_MAX", 0x251),
    ("KBDINPUTASSIST_PREV", 0x260),
    ("KBDINPUTASSIST_NEXT", 0x261),
    ("KBDINPUTASSIST_PREVGROUP", 0x262),
    ("KBDINPUTASSIST_NEXTGROUP", 0x263),
    ("KBDINPUTASSIST_ACCEPT", 0x264),
    ("KBDINPUTASSIST_CANCEL", 0x265),
    ("RIGHT_UP", 0x266),
    ("RIGHT_DOWN", 0x267),
    ("LEFT_UP", 0x268),
    ("LEFT_DOWN", 0x269),
    ("ROOT_MENU", 0x26a),
    ("MEDIA_TOP_MENU", 0x26b),
    ("NUMERIC_11", 0x26c),
    ("NUMERIC_12", 0x26d),
    ("AUDIO_DESC", 0x26e),
    ("3D_MODE", 0x26f),
    ("NEXT_FAVORITE", 0x270),
    ("STOP_RECORD", 0x271),
    ("PAUSE_RECORD", 0x272),
    ("VOD", 0x273),
    ("UNMUTE", 0x274),
    ("FASTREVERSE", 0x275),
    ("SLOWREVERSE", 0x276),
    ("DATA", 0x277),
    ("ONSCREEN_KEYBOARD", 0x278),
    ("PRIVACY_SCREEN_TOGGLE", 0x279),
    ("SELECTIVE_SCREENSHOT", 0x27a),
    ("NEXT_ELEMENT", 0x27b),
    ("PREVIOUS_ELEMENT", 0x27c),
    ("AUTOPILOT_ENGAGE_TOGGLE", 0x27d),
    ("MARK_WAYPOINT", 0x27e),
    ("SOS", 0x27f),
    ("NAV_CHART", 0x280),
    ("FISHING_CHART", 0x281),
    ("SINGLE_RANGE_RADAR", 0x282),
    ("DUAL_RANGE_RADAR", 0x283),
    ("RADAR_OVERLAY", 0x284),
    ("TRADITIONAL_SONAR", 0x285),
    ("CLEARVU_SONAR", 0x286),
    ("SIDEVU_SONAR", 0x287),
    ("NAV_INFO", 0x288),
    ("BRIGHTNESS_MENU", 0x289),
    ("MACRO1", 0x290),
    ("MACRO2", 0x291),
    ("MACRO3", 0x292),
    ("MACRO4", 0x293),
    ("MACRO5", 0x294),
    ("MACRO6", 0x295),
    ("MACRO7", 0x296),
    ("MACRO8", 0x297),
    ("MACRO9", 0x298),
    ("MACRO10", 0x299),
    ("MACRO11", 0x29a),
    ("MACRO12", 0x29b),
    ("MACRO13", 0x29c),
    ("MACRO14", 0x29d),
    ("MACRO15", 0x29e),
    ("MACRO16", 0x29f),
    ("MACRO17", 0x2a0),
    ("MACRO18", 0x2a1),
    ("MACRO19", 0x2a2),
    ("MACRO20", 0x2a3),
    ("MACRO21", 0x2a4),
    ("MACRO22", 0x2a5),
    ("MACRO23", 0x2a6),
    ("MACRO24", 0x2a7),
    ("MACRO25", 0x2a8),
    ("MACRO26", 0x2a9),
    ("MACRO27", 0x2aa),
    ("MACRO28", 0x2ab),
    ("MACRO29", 0x2ac),
    ("MACRO30", 0x2ad),
    ("MACRO_RECORD_START", 0x2b0),
    ("MACRO_RECORD_STOP", 0x2b1),
    ("MACRO_PRESET_CYCLE", 0x2b2),
    ("MACRO_PRESET1", 0x2b3),
    ("MACRO_PRESET2", 0x2b4),
    ("MACRO_PRESET3", 0x2b5),
    ("KBD_LCD_MENU1", 0x2b8),
    ("KBD_LCD_MENU2", 0x2b9),
    ("KBD_LCD_MENU3", 0x2ba),
    ("KBD_LCD_MENU4", 0x2bb),
    ("KBD_LCD_MENU5", 0x2bc),
    // Aliases
    ("ESCAPE", 1),
    ("ALT", 56),
    ("ALTGR", 100),
    ("SHIFT", 42),
    ("CTRL", 29),
    ("PRTSCR", 99),
    ("HANGUEL", 122),
    ("SCREENLOCK", 152),
    ("DIRECTION", 153),
    ("DASHBOARD", 204),
    ("BRIGHTNESS_ZERO", 244),
    ("WIMAX", 246),
    ("ZOOM", 0x174),
    ("SCREEN", 0x177),
    ("BRIGHTNESS_TOGGLE", 0x1af),
];

/// Normalize a key name for comparison: upper case, no `KEY_` prefix, no underscores.
fn normalize(name: &str) -> String {
    let upper = name.trim().to_uppercase();
    let stripped = upper.strip_prefix("KEY_").unwrap_or(&upper);
    stripped.chars().filter(|c| *c != '_').collect()
}

/// Display name for a key code
pub fn key_name(code: u16) -> &'static str {
    KEY_NAMES
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(name, _)| *name)
        .unwrap_or("UNKNOWN")
}

/// Try to parse a key name to a key code.
///
/// Matching ignores case, a leading `KEY_` and underscores, so `KEY_LEFTALT`,
/// `left_alt` and `LeftAlt` all resolve to the same key.
pub fn key_from_name(name: &str) -> Option<Key> {
    let wanted = normalize(name);
    if wanted.is_empty() {
        return None;
    }
    KEY_NAMES
        .iter()
        .find(|(n, _)| normalize(n) == wanted)
        .map(|(_, code)| Key(*code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_name() {
        assert_eq!(key_from_name("a"), Some(Key::A));
        assert_eq!(key_from_name("ESC"), Some(Key::ESC));
        assert_eq!(key_from_name("escape"), Some(Key::ESC));
        assert_eq!(key_from_name("1"), Some(Key::KEY_1));
        assert_eq!(key_from_name("0"), Some(Key::KEY_0));
        assert_eq!(key_from_name("EURO"), Some(Key::EURO));
        assert_eq!(key_from_name("nope"), None);
        assert_eq!(key_from_name(""), None);
    }

    #[test]
    fn test_key_from_name_kernel_spelling() {
        assert_eq!(key_from_name("KEY_LEFTALT"), Some(Key::LEFT_ALT));
        assert_eq!(key_from_name("key_pagedown"), Some(Key::PAGE_DOWN));
        assert_eq!(key_from_name("LeftShift"), Some(Key::LEFT_SHIFT));
        assert_eq!(key_from_name("KEY_1"), Some(Key::KEY_1));
    }

    #[test]
    fn test_key_from_name_full_kernel_table() {
        assert_eq!(key_from_name("KEY_KP7"), Some(Key(71)));
        assert_eq!(key_from_name("KEY_EURO"), Some(Key(0x1b3)));
        assert_eq!(key_from_name("KEY_MACRO1"), Some(Key(0x290)));
        assert_eq!(key_from_name("KEY_NUMERIC_0"), Some(Key(0x200)));
        assert_eq!(key_from_name("KEY_KBD_LCD_MENU5"), Some(Key(0x2bc)));
        // header aliases resolve to the canonical code and name
        assert_eq!(key_from_name("KEY_HANGUEL"), Some(Key(122)));
        assert_eq!(key_from_name("KEY_SCREENLOCK"), Some(Key(152)));
        assert_eq!(Key(152).name(), "COFFEE");
    }

    #[test]
    fn test_key_display() {
        assert_eq!(Key::A.to_string(), "A");
        assert_eq!(Key::PAGE_UP.to_string(), "PAGE_UP");
        assert_eq!(Key::ESC.to_string(), "ESC");
        assert_eq!(Key(0x2fe).to_string(), "KEY(766)");
    }

    #[test]
    fn test_key_name_unknown() {
        assert_eq!(Key(0x2fe).name(), "UNKNOWN");
        assert_eq!(Key::LEFT_ALT.name(), "LEFT_ALT");
    }

    #[test]
    fn test_from_str_error() {
        let err = "bogus".parse::<Key>().unwrap_err();
        assert_eq!(err, KeyParseError::UnknownName("bogus".to_string()));
    }

    #[test]
    fn test_from_name_or_code() {
        assert_eq!(Key::from_name_or_code("56"), Ok(Key::LEFT_ALT));
        assert_eq!(Key::from_name_or_code("0x38"), Ok(Key::LEFT_ALT));
        assert_eq!(Key::from_name_or_code("left_alt"), Ok(Key::LEFT_ALT));
        assert_eq!(Key::from_name_or_code("2"), Ok(Key(2)));
        assert!(matches!(
            Key::from_name_or_code("70000"),
            Err(KeyParseError::InvalidCode(_))
        ));
        assert!(matches!(
            Key::from_name_or_code("0xzz"),
            Err(KeyParseError::InvalidCode(_))
        ));
        assert!(matches!(
            Key::from_name_or_code("hyper"),
            Err(KeyParseError::UnknownName(_))
        ));
    }
}
