//! RGB color model
//!
//! [`ColorState`] holds the three 8-bit channels and the display mode. All
//! numeric validation lives here: out-of-range values are pinned to the
//! nearest bound, and text that does not parse leaves the state untouched.
//!
//! Only the channel triple is stored. The packed `0xRRGGBB` value is always
//! computed from it, so the two can never disagree.

use std::fmt;

use crate::error::InputError;

/// Largest value of a single channel.
pub const MAX_CHANNEL: i32 = 0xFF;

/// Largest packed `0xRRGGBB` value.
pub const MAX_PACKED: i32 = 0xFF_FFFF;

/// One 8-bit component of a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in display order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Bit offset of this channel inside the packed value.
    pub const fn shift(self) -> u32 {
        match self {
            Channel::Red => 16,
            Channel::Green => 8,
            Channel::Blue => 0,
        }
    }

    /// Human-readable name.
    pub const fn label(self) -> &'static str {
        match self {
            Channel::Red => "Red",
            Channel::Green => "Green",
            Channel::Blue => "Blue",
        }
    }

    const fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Numeric base used to parse entered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Decimal,
    Hexadecimal,
}

impl Radix {
    /// The base as a number (10 or 16).
    pub const fn value(self) -> u32 {
        match self {
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Radix::Decimal => f.write_str("decimal"),
            Radix::Hexadecimal => f.write_str("hexadecimal"),
        }
    }
}

/// Display and entry convention.
///
/// Switching modes never changes the stored channels, only how they are
/// shown and typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Three base-10 fields, one per channel.
    #[default]
    Decimal,
    /// One base-16 field holding the packed value.
    Hex,
}

impl Mode {
    /// Radix used for text entry in this mode.
    pub const fn radix(self) -> Radix {
        match self {
            Mode::Decimal => Radix::Decimal,
            Mode::Hex => Radix::Hexadecimal,
        }
    }

    /// The other mode.
    pub const fn toggled(self) -> Mode {
        match self {
            Mode::Decimal => Mode::Hex,
            Mode::Hex => Mode::Decimal,
        }
    }

    /// Title shown around the controls.
    pub const fn title(self) -> &'static str {
        match self {
            Mode::Decimal => "Decimal",
            Mode::Hex => "Hexadecimal",
        }
    }

    /// Label of the button that switches away from this mode.
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Mode::Decimal => "Hex",
            Mode::Hex => "Dec",
        }
    }
}

/// Where a parsed number is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Channel(Channel),
    Packed,
}

/// The picker's color and display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorState {
    channels: [u8; 3],
    mode: Mode,
}

impl ColorState {
    /// Black, in the given mode.
    pub fn new(mode: Mode) -> Self {
        Self {
            channels: [0; 3],
            mode,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn channel(&self, channel: Channel) -> u8 {
        self.channels[channel.index()]
    }

    pub fn red(&self) -> u8 {
        self.channel(Channel::Red)
    }

    pub fn green(&self) -> u8 {
        self.channel(Channel::Green)
    }

    pub fn blue(&self) -> u8 {
        self.channel(Channel::Blue)
    }

    /// Channels as `[red, green, blue]`.
    pub fn rgb(&self) -> [u8; 3] {
        self.channels
    }

    /// `(red << 16) | (green << 8) | blue`
    pub fn packed(&self) -> u32 {
        Channel::ALL
            .iter()
            .fold(0, |acc, &c| acc | (u32::from(self.channel(c)) << c.shift()))
    }

    /// Stores `value` in `channel`, clamped to `0..=255`.
    pub fn set_channel(&mut self, channel: Channel, value: i32) {
        let clamped = value.clamp(0, MAX_CHANNEL);
        if clamped != value {
            tracing::debug!("{} value {} clamped to {}", channel, value, clamped);
        }
        self.channels[channel.index()] = clamped as u8;
    }

    /// Stores a packed `0xRRGGBB` value, clamped to `0..=0xFFFFFF`.
    pub fn set_packed(&mut self, value: i32) {
        let clamped = value.clamp(0, MAX_PACKED);
        if clamped != value {
            tracing::debug!("packed value {:#X} clamped to {:#X}", value, clamped);
        }
        for channel in Channel::ALL {
            self.channels[channel.index()] = ((clamped >> channel.shift()) & 0xFF) as u8;
        }
    }

    /// Parses `text` in `radix` and writes it to `target`.
    ///
    /// Accepts an optional leading `+` or `-`; surrounding whitespace and
    /// values outside the `i32` range are parse failures. Returns the parsed
    /// value before clamping. On error the state is left as it was.
    pub fn parse_and_apply(
        &mut self,
        text: &str,
        radix: Radix,
        target: Target,
    ) -> Result<i32, InputError> {
        let value =
            i32::from_str_radix(text, radix.value()).map_err(|source| InputError::InvalidNumber {
                text: text.to_string(),
                radix,
                source,
            })?;

        match target {
            Target::Channel(channel) => self.set_channel(channel, value),
            Target::Packed => self.set_packed(value),
        }
        Ok(value)
    }

    /// Applies text typed into `field` according to the current mode.
    ///
    /// In decimal mode the value goes to `field`'s channel. In hex mode it is
    /// the packed value, whichever field it came from.
    pub fn submit(&mut self, text: &str, field: Channel) -> Result<i32, InputError> {
        let target = match self.mode {
            Mode::Decimal => Target::Channel(field),
            Mode::Hex => Target::Packed,
        };
        self.parse_and_apply(text, self.mode.radix(), target)
    }

    /// Switches between decimal and hex. Channel values are kept.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Text for the editable fields of the current mode.
    ///
    /// Decimal: three base-10 channel values. Hex: one uppercase base-16
    /// packed value without zero padding.
    pub fn display_strings(&self) -> Vec<String> {
        match self.mode {
            Mode::Decimal => self.channels.iter().map(u8::to_string).collect(),
            Mode::Hex => vec![format!("{:X}", self.packed())],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(r: i32, g: i32, b: i32) -> ColorState {
        let mut state = ColorState::default();
        state.set_channel(Channel::Red, r);
        state.set_channel(Channel::Green, g);
        state.set_channel(Channel::Blue, b);
        state
    }

    #[test]
    fn test_new_is_black() {
        let state = ColorState::new(Mode::Hex);
        assert_eq!(state.rgb(), [0, 0, 0]);
        assert_eq!(state.packed(), 0);
        assert_eq!(state.mode(), Mode::Hex);
        assert_eq!(ColorState::default().mode(), Mode::Decimal);
    }

    #[test]
    fn test_channels_pack_in_any_order() {
        for (r, g, b) in [(0, 0, 0), (255, 255, 255), (18, 52, 86), (1, 128, 254)] {
            let expected = ((r << 16) | (g << 8) | b) as u32;

            assert_eq!(state_with(r, g, b).packed(), expected);

            let mut reversed = ColorState::default();
            reversed.set_channel(Channel::Blue, b);
            reversed.set_channel(Channel::Green, g);
            reversed.set_channel(Channel::Red, r);
            assert_eq!(reversed.packed(), expected);
        }
    }

    #[test]
    fn test_every_channel_value_packs() {
        for v in 0..=MAX_CHANNEL {
            let state = state_with(v, 255 - v, v / 2);
            let expected = ((v << 16) | ((255 - v) << 8) | (v / 2)) as u32;
            assert_eq!(state.packed(), expected);
        }
    }

    #[test]
    fn test_packed_round_trip() {
        let mut state = ColorState::default();
        // Strided walk plus the edges keeps this fast in debug builds.
        let samples = (0..=MAX_PACKED)
            .step_by(0x1F3)
            .chain([0, 1, 0xFF, 0x100, 0xFFFF, 0x10000, MAX_PACKED - 1, MAX_PACKED]);
        for v in samples {
            state.set_packed(v);
            assert_eq!(state.packed(), v as u32, "value {:#X}", v);
        }
    }

    #[test]
    fn test_set_packed_decomposes() {
        let mut state = ColorState::default();
        state.set_packed(0x123456);
        assert_eq!(state.red(), 0x12);
        assert_eq!(state.green(), 0x34);
        assert_eq!(state.blue(), 0x56);
    }

    #[test]
    fn test_channel_clamping() {
        let mut state = ColorState::default();
        state.set_channel(Channel::Red, -5);
        assert_eq!(state.red(), 0);
        state.set_channel(Channel::Red, 999);
        assert_eq!(state.red(), 255);
        state.set_channel(Channel::Green, i32::MIN);
        assert_eq!(state.green(), 0);
        state.set_channel(Channel::Blue, i32::MAX);
        assert_eq!(state.blue(), 255);
    }

    #[test]
    fn test_packed_clamping() {
        let mut state = state_with(10, 20, 30);
        state.set_packed(-1);
        assert_eq!(state.packed(), 0);
        state.set_packed(0x2000000);
        assert_eq!(state.packed(), 0xFFFFFF);
        assert_eq!(state.rgb(), [255, 255, 255]);
    }

    #[test]
    fn test_toggle_preserves_channels() {
        let mut state = state_with(12, 34, 56);
        state.toggle_mode();
        assert_eq!(state.mode(), Mode::Hex);
        assert_eq!(state.rgb(), [12, 34, 56]);
        state.toggle_mode();
        assert_eq!(state.mode(), Mode::Decimal);
        assert_eq!(state.rgb(), [12, 34, 56]);
    }

    #[test]
    fn test_parse_failure_is_noop() {
        let mut state = state_with(42, 0, 0);
        let err = state
            .parse_and_apply("abc", Radix::Decimal, Target::Channel(Channel::Red))
            .unwrap_err();
        assert_eq!(err.text(), "abc");
        assert_eq!(state.red(), 42);

        for bad in ["", " 5", "5 ", "1.5", "0x10", "99999999999", "-"] {
            let before = state;
            assert!(
                state
                    .parse_and_apply(bad, Radix::Decimal, Target::Channel(Channel::Red))
                    .is_err(),
                "{:?} should be rejected",
                bad
            );
            assert_eq!(state, before);
        }
    }

    #[test]
    fn test_wrong_radix_rejected() {
        let mut state = ColorState::default();
        assert!(
            state
                .parse_and_apply("FF", Radix::Decimal, Target::Channel(Channel::Red))
                .is_err()
        );
        assert_eq!(state.red(), 0);
        assert!(state.parse_and_apply("FFG", Radix::Hexadecimal, Target::Packed).is_err());
        assert_eq!(state.packed(), 0);
    }

    #[test]
    fn test_parse_and_apply_clamps() {
        let mut state = ColorState::default();
        let parsed = state
            .parse_and_apply("300", Radix::Decimal, Target::Channel(Channel::Green))
            .unwrap();
        assert_eq!(parsed, 300);
        assert_eq!(state.green(), 255);

        state
            .parse_and_apply("-7", Radix::Decimal, Target::Channel(Channel::Green))
            .unwrap();
        assert_eq!(state.green(), 0);

        state
            .parse_and_apply("+1FFFFFF", Radix::Hexadecimal, Target::Packed)
            .unwrap();
        assert_eq!(state.packed(), 0xFFFFFF);
    }

    #[test]
    fn test_hex_parse_is_case_insensitive() {
        let mut state = ColorState::default();
        state.parse_and_apply("abcdef", Radix::Hexadecimal, Target::Packed).unwrap();
        assert_eq!(state.packed(), 0xABCDEF);
        state.parse_and_apply("FF00", Radix::Hexadecimal, Target::Packed).unwrap();
        assert_eq!(state.rgb(), [0, 0xFF, 0]);
    }

    #[test]
    fn test_submit_follows_mode() {
        let mut state = ColorState::default();
        state.submit("200", Channel::Blue).unwrap();
        assert_eq!(state.rgb(), [0, 0, 200]);

        state.toggle_mode();
        // In hex mode any field writes the packed value.
        state.submit("FF0000", Channel::Green).unwrap();
        assert_eq!(state.rgb(), [255, 0, 0]);

        assert!(state.submit("200", Channel::Blue).is_ok());
        assert_eq!(state.packed(), 0x200);
        assert!(state.submit("xyz", Channel::Blue).is_err());
        assert_eq!(state.packed(), 0x200);
    }

    #[test]
    fn test_display_decimal_then_hex() {
        let mut state = ColorState::new(Mode::Decimal);
        state.set_channel(Channel::Red, 255);
        state.set_channel(Channel::Green, 0);
        state.set_channel(Channel::Blue, 128);
        assert_eq!(state.display_strings(), vec!["255", "0", "128"]);

        state.toggle_mode();
        assert_eq!(state.display_strings(), vec!["FF0080"]);
    }

    #[test]
    fn test_display_hex_then_decimal() {
        let mut state = ColorState::new(Mode::Hex);
        state.set_packed(0xABCDEF);
        state.toggle_mode();
        assert_eq!(state.display_strings(), vec!["171", "205", "239"]);
    }

    #[test]
    fn test_hex_display_has_no_padding() {
        let mut state = ColorState::new(Mode::Hex);
        assert_eq!(state.display_strings(), vec!["0"]);
        state.set_packed(0x00000A);
        assert_eq!(state.display_strings(), vec!["A"]);
        state.set_packed(0x00FF00);
        assert_eq!(state.display_strings(), vec!["FF00"]);
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(Mode::Decimal.title(), "Decimal");
        assert_eq!(Mode::Hex.title(), "Hexadecimal");
        assert_eq!(Mode::Decimal.toggle_label(), "Hex");
        assert_eq!(Mode::Hex.toggle_label(), "Dec");
        assert_eq!(Mode::Hex.radix().value(), 16);
        assert_eq!(Mode::Decimal.radix().value(), 10);
    }
}
