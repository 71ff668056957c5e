//! Keyboard bindings for the drawing controls.

use dabble_engine::input::Key;
use dabble_engine::scene::ShapeKind;
use dabble_engine::sketch::{Channel, Style, StyleCommand};

/// Step for color channel and opacity keys.
pub const UNIT_STEP: f32 = 0.05;

pub const HELP: &str = "\
keys: 1/2/3 point/triangle/circle | R/G red/green | U/J I/K O/L red/green/blue +/- | \
Y/H opacity +/- | Up/Down size | Right/Left segments | Del clear | B bee | Esc quit";

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Action {
    Style(StyleCommand),
    Clear,
    StampBee,
    Quit,
}

pub fn action_for(key: Key) -> Option<Action> {
    use StyleCommand::*;

    let action = match key {
        Key::Digit1 => Action::Style(SelectKind(ShapeKind::Point)),
        Key::Digit2 => Action::Style(SelectKind(ShapeKind::Triangle)),
        Key::Digit3 => Action::Style(SelectKind(ShapeKind::Circle)),

        Key::R => Action::Style(SetRgb(Style::RED)),
        Key::G => Action::Style(SetRgb(Style::GREEN)),

        Key::U => Action::Style(AdjustChannel(Channel::Red, UNIT_STEP)),
        Key::J => Action::Style(AdjustChannel(Channel::Red, -UNIT_STEP)),
        Key::I => Action::Style(AdjustChannel(Channel::Green, UNIT_STEP)),
        Key::K => Action::Style(AdjustChannel(Channel::Green, -UNIT_STEP)),
        Key::O => Action::Style(AdjustChannel(Channel::Blue, UNIT_STEP)),
        Key::L => Action::Style(AdjustChannel(Channel::Blue, -UNIT_STEP)),

        Key::Y => Action::Style(AdjustOpacity(UNIT_STEP)),
        Key::H => Action::Style(AdjustOpacity(-UNIT_STEP)),

        Key::ArrowUp => Action::Style(AdjustSize(1.0)),
        Key::ArrowDown => Action::Style(AdjustSize(-1.0)),
        Key::ArrowRight => Action::Style(AdjustSegments(1)),
        Key::ArrowLeft => Action::Style(AdjustSegments(-1)),

        Key::Delete | Key::Backspace => Action::Clear,
        Key::B => Action::StampBee,
        Key::Escape => Action::Quit,

        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_select_shape_kinds() {
        assert_eq!(
            action_for(Key::Digit3),
            Some(Action::Style(StyleCommand::SelectKind(ShapeKind::Circle)))
        );
    }

    #[test]
    fn paired_keys_move_in_opposite_directions() {
        let pairs = [(Key::U, Key::J), (Key::I, Key::K), (Key::O, Key::L), (Key::Y, Key::H)];
        for (up, down) in pairs {
            let (Some(Action::Style(inc)), Some(Action::Style(dec))) = (action_for(up), action_for(down))
            else {
                panic!("{up}/{down} are not style keys");
            };

            let mut style = Style::default();
            style.apply(StyleCommand::SetRgb([0.5; 3]));
            style.apply(StyleCommand::AdjustOpacity(-0.5));
            let level = |s: &Style| s.rgb.iter().sum::<f32>() + s.opacity;
            let start = level(&style);

            style.apply(inc);
            assert!(level(&style) > start, "{up} does not raise");
            style.apply(dec);
            style.apply(dec);
            assert!(level(&style) < start, "{down} does not lower");
        }
    }

    #[test]
    fn both_delete_keys_clear() {
        assert_eq!(action_for(Key::Delete), Some(Action::Clear));
        assert_eq!(action_for(Key::Backspace), Some(Action::Clear));
    }

    #[test]
    fn unbound_keys_do_nothing() {
        assert_eq!(action_for(Key::Z), None);
        assert_eq!(action_for(Key::Unknown(7)), None);
    }
}
