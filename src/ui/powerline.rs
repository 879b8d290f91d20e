use crate::ui::theme::LutEntry;

pub const PWL_RIGHT_FILLED: &str = "\u{e0b0}";
pub const PWL_LEFT_FILLED:  &str = "\u{e0b2}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    None,
    Left,
    Right,
}

impl Direction {
    fn glyph(&self) -> &'static str {
        match self {
            Direction::None  => "",
            Direction::Left  => PWL_LEFT_FILLED,
            Direction::Right => PWL_RIGHT_FILLED,
        }
    }
}

/// Flag-level display settings for one segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    pub use_colors:          bool,
    pub use_powerline_left:  bool,
    pub use_powerline_right: bool,
    pub segments_to_left:    bool,
    /// tmux colour index of the neighbouring segment.
    pub left_color:          i16,
}

/// How the opening of a coloured segment is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoration {
    RightSegmented,
    RightPlain,
    LeftSegmented,
    LeftPlain,
    None,
}

impl Decoration {
    /// Right-hand powerline wins when both sides are requested.
    pub fn from_options(opts: &DisplayOptions) -> Self {
        match (opts.use_powerline_right, opts.use_powerline_left, opts.segments_to_left) {
            (true, _, true)      => Decoration::RightSegmented,
            (true, _, false)     => Decoration::RightPlain,
            (false, true, true)  => Decoration::LeftSegmented,
            (false, true, false) => Decoration::LeftPlain,
            (false, false, _)    => Decoration::None,
        }
    }

    /// Write the segment opening for `entry`.
    pub fn open(&self, out: &mut String, entry: &LutEntry, left_color: i16) {
        match self {
            Decoration::RightSegmented => {
                powerline_char(out, entry, left_color, Direction::Right, false);
                out.push(' ');
            }
            Decoration::RightPlain => {
                out.push_str("#[bg=default]");
                powerline(out, entry, Direction::Right, false);
                out.push(' ');
            }
            Decoration::LeftSegmented => {
                powerline_char(out, entry, left_color, Direction::Left, false);
                out.push(' ');
            }
            Decoration::LeftPlain => {
                // The default background has no colour to invert into an arrow.
                powerline(out, entry, Direction::None, false);
                out.push(' ');
            }
            Decoration::None => powerline(out, entry, Direction::None, false),
        }
    }
}

/// Write a powerline transition between the terminal default and `entry`.
/// With `invert` the segment style is not re-applied after the glyph.
pub fn powerline(out: &mut String, entry: &LutEntry, direction: Direction, invert: bool) {
    if direction == Direction::None {
        out.push_str(&entry.marker());
        return;
    }
    out.push_str(&entry.edge());
    out.push_str(direction.glyph());
    if !invert {
        out.push_str(&entry.marker());
    }
}

/// Like [`powerline`] but the arrow joins a neighbouring segment drawn in
/// tmux colour `prev_color` instead of the terminal default.
pub fn powerline_char(out: &mut String, entry: &LutEntry, prev_color: i16, direction: Direction, invert: bool) {
    match direction {
        Direction::None  => {
            out.push_str(&entry.marker());
            return;
        }
        Direction::Right => out.push_str(&format!("#[fg=colour{},bg={}]", prev_color, entry.bg)),
        Direction::Left  => out.push_str(&format!("#[fg={},bg=colour{}]", entry.bg, prev_color)),
    }
    out.push_str(direction.glyph());
    if !invert {
        out.push_str(&entry.marker());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRY: LutEntry = LutEntry { fg: "black", bg: "green" };

    fn opts(left: bool, right: bool, segments: bool) -> DisplayOptions {
        DisplayOptions {
            use_colors: true,
            use_powerline_left: left,
            use_powerline_right: right,
            segments_to_left: segments,
            left_color: 0,
        }
    }

    #[test]
    fn test_decoration_choice() {
        assert_eq!(Decoration::from_options(&opts(false, true, true)),   Decoration::RightSegmented);
        assert_eq!(Decoration::from_options(&opts(false, true, false)),  Decoration::RightPlain);
        assert_eq!(Decoration::from_options(&opts(true, false, true)),   Decoration::LeftSegmented);
        assert_eq!(Decoration::from_options(&opts(true, false, false)),  Decoration::LeftPlain);
        assert_eq!(Decoration::from_options(&opts(false, false, true)),  Decoration::None);
        assert_eq!(Decoration::from_options(&opts(false, false, false)), Decoration::None);
        // both sides → right takes precedence
        assert_eq!(Decoration::from_options(&opts(true, true, false)),   Decoration::RightPlain);
    }

    #[test]
    fn test_powerline_none_is_marker_only() {
        let mut s = String::new();
        powerline(&mut s, &ENTRY, Direction::None, true);
        assert_eq!(s, "#[fg=black,bg=green]");
    }

    #[test]
    fn test_powerline_right_opens_segment() {
        let mut s = String::new();
        powerline(&mut s, &ENTRY, Direction::Right, false);
        assert_eq!(s, format!("#[fg=green,bg=default]{}#[fg=black,bg=green]", PWL_RIGHT_FILLED));
    }

    #[test]
    fn test_powerline_inverted_leaves_segment() {
        let mut s = String::new();
        powerline(&mut s, &ENTRY, Direction::Left, true);
        assert_eq!(s, format!("#[fg=green,bg=default]{}", PWL_LEFT_FILLED));
    }

    #[test]
    fn test_powerline_char_uses_neighbour_colour() {
        let mut s = String::new();
        powerline_char(&mut s, &ENTRY, 236, Direction::Right, false);
        assert_eq!(s, format!("#[fg=colour236,bg=green]{}#[fg=black,bg=green]", PWL_RIGHT_FILLED));

        let mut s = String::new();
        powerline_char(&mut s, &ENTRY, 236, Direction::Left, false);
        assert_eq!(s, format!("#[fg=green,bg=colour236]{}#[fg=black,bg=green]", PWL_LEFT_FILLED));
    }

    #[test]
    fn test_open_right_plain_resets_background_first() {
        let mut s = String::new();
        Decoration::RightPlain.open(&mut s, &ENTRY, 0);
        assert!(s.starts_with("#[bg=default]#[fg=green,bg=default]"));
        assert!(s.ends_with(' '));
    }

    #[test]
    fn test_open_none_has_no_trailing_space() {
        let mut s = String::new();
        Decoration::None.open(&mut s, &ENTRY, 0);
        assert_eq!(s, "#[fg=black,bg=green]");
    }
}
