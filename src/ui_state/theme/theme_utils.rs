use anyhow::{Result, anyhow, bail};
use ratatui::{style::Color, widgets::BorderType};

pub(crate) fn parse_color(s: &str) -> Result<Color> {
    let s = s.trim();
    match s {
        s if s.starts_with('#') => parse_hex(s),
        s if s.starts_with("rgb(") => parse_rgb(s),
        _ => try_from_str(s),
    }
}

pub(super) fn parse_hex(s: &str) -> Result<Color> {
    let hex = s.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        bail!("Invalid hex input: {s}\nExpected format\"#FF20D5\"");
    }

    let r = u8::from_str_radix(&hex[0..2], 16)?;
    let g = u8::from_str_radix(&hex[2..4], 16)?;
    let b = u8::from_str_radix(&hex[4..], 16)?;

    Ok(Color::Rgb(r, g, b))
}

pub(super) fn parse_rgb(s: &str) -> Result<Color> {
    if s.ends_with(')') {
        let inner = &s[4..s.len() - 1];
        let parts = inner.split(',').collect::<Vec<&str>>();
        if parts.len() == 3 {
            let r = parts[0].trim().parse::<u8>()?;
            let g = parts[1].trim().parse::<u8>()?;
            let b = parts[2].trim().parse::<u8>()?;
            return Ok(Color::Rgb(r, g, b));
        }
    }
    Err(anyhow!(
        "Invalid rgb input: {s}\nExpected ex: \"rgb(255, 50, 120)\""
    ))
}

pub(super) fn try_from_str(s: &str) -> Result<Color> {
    match s.to_lowercase().as_str() {
        "" | "none" => Ok(Color::Reset),
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "white" => Ok(Color::White),
        "gray" | "grey" => Ok(Color::Gray),
        "darkgray" | "darkgrey" => Ok(Color::DarkGray),
        "lightred" => Ok(Color::LightRed),
        "lightgreen" => Ok(Color::LightGreen),
        "lightyellow" => Ok(Color::LightYellow),
        "lightblue" => Ok(Color::LightBlue),
        "lightmagenta" => Ok(Color::LightMagenta),
        "lightcyan" => Ok(Color::LightCyan),
        _ => Err(anyhow!("Invalid input: {}", s)),
    }
}

pub(super) fn parse_border_type(s: &str) -> BorderType {
    match s.trim().to_lowercase().as_str() {
        "plain" => BorderType::Plain,
        "double" => BorderType::Double,
        "thick" => BorderType::Thick,
        _ => BorderType::Rounded,
    }
}

/// Linear blend between two RGB colours, `t` in `[0, 1]`. Named colours
/// have no components to blend, so the nearer end wins.
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_color_notation() {
        assert_eq!(parse_color("#BB86FC").unwrap(), Color::Rgb(0xBB, 0x86, 0xFC));
        assert_eq!(parse_color(" rgb(98, 0, 238) ").unwrap(), Color::Rgb(98, 0, 238));
        assert_eq!(parse_color("DarkGrey").unwrap(), Color::DarkGray);
        assert_eq!(parse_color("none").unwrap(), Color::Reset);
    }

    #[test]
    fn rejects_malformed_colors() {
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("#GG0000").is_err());
        assert!(parse_color("rgb(1,2)").is_err());
        assert!(parse_color("rgb(300,0,0)").is_err());
        assert!(parse_color("chartreuse").is_err());
    }

    #[test]
    fn border_type_falls_back_to_rounded() {
        assert_eq!(parse_border_type("Double"), BorderType::Double);
        assert_eq!(parse_border_type("zigzag"), BorderType::Rounded);
    }

    #[test]
    fn blend_hits_both_ends() {
        let top = Color::Rgb(0xBB, 0x86, 0xFC);
        let bottom = Color::Rgb(0x62, 0x00, 0xEE);
        assert_eq!(blend(top, bottom, 0.0), top);
        assert_eq!(blend(top, bottom, 1.0), bottom);
        assert_eq!(blend(top, bottom, 7.0), bottom);
        assert_eq!(blend(Color::Red, Color::Blue, 0.2), Color::Red);
    }
}
