use crate::records::Role;
use crate::ui::colors::ColorDefinition;

pub const NEUTRAL_BORDER: &str = "border-gray-300";

const ORIGINATOR_BASE: &str = "inline-flex items-center px-2 py-0.5 rounded text-xs font-mono bg-blue-50 text-blue-700";
const RECEPTOR_BASE: &str = "inline-flex items-center px-2 py-0.5 rounded text-xs font-mono bg-green-50 text-green-700";

pub fn role_base(role: Role) -> &'static str {
    match role {
        Role::Originator => ORIGINATOR_BASE,
        Role::Receptor => RECEPTOR_BASE,
    }
}

/// Cell badge style. A resolved point color adds a thick border in that
/// color; otherwise the badge gets a thin neutral one.
pub fn compose(role: Role, point_color: Option<&ColorDefinition>) -> String {
    match point_color {
        Some(color) => format!("{} border-2 {}", role_base(role), color.border),
        None => format!("{} border {NEUTRAL_BORDER}", role_base(role)),
    }
}

pub fn point_badge(color: &ColorDefinition) -> String {
    format!(
        "inline-flex items-center px-2 py-0.5 rounded-full text-xs font-semibold border {} {} {}",
        color.background, color.border, color.text
    )
}
