use crate::rank::Rank;
use crate::stats::Trophy;
use crate::theme::{Theme, ThemeColors};

pub const TILE_WIDTH: u32 = 110;
pub const TILE_HEIGHT: u32 = 110;

const PANEL_INSET: u32 = 5;
const PANEL_SIZE: u32 = 100;
const CENTER_X: u32 = TILE_WIDTH / 2;

/// Gradient stops per tier, highest first. Each tier gets its own `<linearGradient>`.
const TIER_GRADIENTS: [(Rank, &str, &str); 7] = [
    (Rank::SSS, "#ffd700", "#ff8c00"),
    (Rank::SS, "#f5f5f5", "#a0a0a0"),
    (Rank::S, "#ffb199", "#ff0844"),
    (Rank::A, "#a8e063", "#56ab2f"),
    (Rank::B, "#89f7fe", "#66a6ff"),
    (Rank::C, "#d4a373", "#8b5a2b"),
    (Rank::D, "#9e9e9e", "#616161"),
];

/// Element id of the gradient used for a tier's medal.
pub fn tier_gradient_id(rank: Rank) -> String {
    format!("rank-{}", rank.as_str().to_ascii_lowercase())
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn build_gradient_defs() -> String {
    let mut out = String::from("<defs>\n");
    for (tier, from, to) in TIER_GRADIENTS {
        out.push_str(&format!(
            r#"<linearGradient id="{id}" x1="0" y1="0" x2="1" y2="1"><stop offset="0%" stop-color="{from}"/><stop offset="100%" stop-color="{to}"/></linearGradient>
"#,
            id = tier_gradient_id(tier),
        ));
    }
    out.push_str("</defs>\n");
    out
}

fn build_tile(index: usize, trophy: &Trophy, colors: &ThemeColors) -> String {
    let x = index as u32 * TILE_WIDTH;
    format!(
        r#"<g transform="translate({x}, 0)">
<rect x="{inset}" y="{inset}" width="{size}" height="{size}" rx="10" fill="{bg}" stroke="{border}" stroke-width="2"/>
<text x="{cx}" y="30" text-anchor="middle" fill="{text}" font-family="Arial" font-size="12" font-weight="bold">{name}</text>
<circle cx="{cx}" cy="58" r="22" fill="url(#{gradient})" opacity="0.45"/>
<text x="{cx}" y="70" text-anchor="middle" fill="{rank_color}" font-family="Arial" font-size="36" font-weight="bold">{rank}</text>
<text x="{cx}" y="90" text-anchor="middle" fill="{text}" font-family="Arial" font-size="10">{value} total</text>
</g>
"#,
        inset = PANEL_INSET,
        size = PANEL_SIZE,
        cx = CENTER_X,
        bg = colors.bg,
        border = colors.border,
        text = colors.text,
        rank_color = colors.rank,
        name = escape_xml(&trophy.name),
        gradient = tier_gradient_id(trophy.rank),
        rank = trophy.rank,
        value = escape_xml(&trophy.value.to_string()),
    )
}

/// Renders the trophy card. Unknown theme keys fall back to the default theme.
///
/// Pure: the same trophies and key always produce the same bytes.
pub fn render(trophies: &[Trophy], theme_key: Option<&str>) -> String {
    let colors = Theme::from_key(theme_key).colors();
    let width = trophies.len() as u32 * TILE_WIDTH;
    let height = TILE_HEIGHT;

    let tiles: String = trophies
        .iter()
        .enumerate()
        .map(|(i, t)| build_tile(i, t, &colors))
        .collect();

    format!(
        r#"<svg width="{width}" height="{height}" viewBox="0 0 {width} {height}" xmlns="http://www.w3.org/2000/svg">
{defs}{tiles}</svg>
"#,
        defs = build_gradient_defs(),
    )
}
