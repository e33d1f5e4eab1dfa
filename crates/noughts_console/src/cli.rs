//! Command-line options.

use clap::Parser;

/// Console tic-tac-toe against a heuristic opponent, first to five wins.
#[derive(Parser, Debug)]
#[command(name = "noughts", version, about)]
pub struct Cli {
    /// Your display name (prompted for when omitted).
    #[arg(long)]
    pub name: Option<String>,

    /// Glyph drawn for your squares.
    #[arg(long, default_value_t = 'X', value_parser = parse_marker)]
    pub marker: char,

    /// Round wins needed to take a match.
    #[arg(long, default_value_t = noughts_engine::DEFAULT_TARGET_WINS)]
    pub target: u32,

    /// Seed for the opponent's name draw and fallback moves.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Milliseconds the opponent "thinks" before moving.
    #[arg(long, default_value_t = 500)]
    pub delay_ms: u64,
}

/// One visible character that cannot be mistaken for the opponent's glyph
/// or an open square's index digit.
fn parse_marker(raw: &str) -> Result<char, String> {
    let mut chars = raw.chars();
    let (Some(glyph), None) = (chars.next(), chars.next()) else {
        return Err("marker must be a single character".into());
    };
    if glyph.is_whitespace() {
        return Err("marker must be visible".into());
    }
    if glyph == 'O' {
        return Err("the opponent already marks with O".into());
    }
    if glyph.is_ascii_digit() {
        return Err("digits label the open squares".into());
    }
    Ok(glyph)
}

#[cfg(test)]
mod tests {
    use super::parse_marker;

    #[test]
    fn test_marker_accepts_a_single_glyph() {
        assert_eq!(parse_marker("X"), Ok('X'));
        assert_eq!(parse_marker("#"), Ok('#'));
    }

    #[test]
    fn test_marker_rejects_bad_input() {
        assert!(parse_marker("").is_err());
        assert!(parse_marker("XX").is_err());
        assert!(parse_marker("O").is_err());
        assert!(parse_marker("7").is_err());
        assert!(parse_marker(" ").is_err());
    }
}
