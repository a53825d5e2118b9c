use serde::Serialize;

/// Style tokens for one HUNTER point color.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ColorDefinition {
    pub background: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub name: &'static str,
}

const fn def(
    background: &'static str,
    border: &'static str,
    text: &'static str,
    name: &'static str,
) -> ColorDefinition {
    ColorDefinition {
        background,
        border,
        text,
        name,
    }
}

pub const PALETTE_SIZE: usize = 16;

pub static PALETTE: [ColorDefinition; PALETTE_SIZE] = [
    def("bg-blue-100", "border-blue-500", "text-blue-800", "Blue"),
    def("bg-green-100", "border-green-500", "text-green-800", "Green"),
    def("bg-purple-100", "border-purple-500", "text-purple-800", "Purple"),
    def("bg-orange-100", "border-orange-500", "text-orange-800", "Orange"),
    def("bg-pink-100", "border-pink-500", "text-pink-800", "Pink"),
    def("bg-indigo-100", "border-indigo-500", "text-indigo-800", "Indigo"),
    def("bg-yellow-100", "border-yellow-500", "text-yellow-800", "Yellow"),
    def("bg-red-100", "border-red-500", "text-red-800", "Red"),
    def("bg-teal-100", "border-teal-500", "text-teal-800", "Teal"),
    def("bg-cyan-100", "border-cyan-500", "text-cyan-800", "Cyan"),
    def("bg-lime-100", "border-lime-500", "text-lime-800", "Lime"),
    def("bg-amber-100", "border-amber-500", "text-amber-800", "Amber"),
    def("bg-emerald-100", "border-emerald-500", "text-emerald-800", "Emerald"),
    def("bg-violet-100", "border-violet-500", "text-violet-800", "Violet"),
    def("bg-rose-100", "border-rose-500", "text-rose-800", "Rose"),
    def("bg-sky-100", "border-sky-500", "text-sky-800", "Sky"),
];

/// Color used when no point can be resolved.
pub fn default_color() -> &'static ColorDefinition {
    &PALETTE[0]
}

/// Palette entry for a point, without caching.
pub fn point_color(point: &str) -> &'static ColorDefinition {
    let idx = hash_point(point) as usize % PALETTE_SIZE;
    &PALETTE[idx]
}

/// Whitespace stripped from point names before hashing: Unicode `White_Space`
/// minus NEL, plus the byte order mark, matching what browsers trim.
fn is_trimmed(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// DJB2-style hash over the trimmed, lowercased point name.
///
/// Accumulates UTF-16 code units as `(hash << 5) - hash + unit` in wrapping
/// 32-bit signed arithmetic and returns the absolute value, so `"Foo"`,
/// `"foo"` and `" FOO "` all hash the same. Blank input hashes to `0`.
pub fn hash_point(point: &str) -> u32 {
    let normalized = point.trim_matches(is_trimmed).to_lowercase();
    let mut hash: i32 = 0;
    for unit in normalized.encode_utf16() {
        hash = (hash << 5).wrapping_sub(hash).wrapping_add(unit as i32);
    }
    hash.unsigned_abs()
}
