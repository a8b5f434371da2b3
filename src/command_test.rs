use super::*;

fn parse(line: &str) -> Result<Command, CommandError> {
    line.parse()
}

#[test]
fn parses_each_command() {
    assert_eq!(parse("color #F00").unwrap(), Command::Color(Color::from_rgb(255, 0, 0)));
    assert_eq!(parse("draw 10 20").unwrap(), Command::Draw { x: 10, y: 20 });
    assert_eq!(parse("zoom").unwrap(), Command::ToggleZoom);
    assert_eq!(parse("pan -5 2.5").unwrap(), Command::Pan { x: -5.0, y: 2.5 });
    assert_eq!(parse("jump 0 0").unwrap(), Command::Jump { x: 0.0, y: 0.0 });
    assert_eq!(parse("scale 12").unwrap(), Command::Scale(12.0));
    assert_eq!(parse("status").unwrap(), Command::Status);
    assert_eq!(parse("quit").unwrap(), Command::Quit);
    assert_eq!(parse("exit").unwrap(), Command::Quit);
}

#[test]
fn command_names_are_case_insensitive_and_trimmed() {
    assert_eq!(parse("  DRAW   1 2 ").unwrap(), Command::Draw { x: 1, y: 2 });
}

#[test]
fn empty_line_is_error() {
    assert_eq!(parse("   "), Err(CommandError::Empty));
}

#[test]
fn unknown_command_reported() {
    assert_eq!(parse("erase 1 2"), Err(CommandError::Unknown("erase".into())));
}

#[test]
fn missing_argument_reported() {
    assert_eq!(parse("draw 1"), Err(CommandError::MissingArg { command: "draw", arg: "y" }));
    assert_eq!(parse("color"), Err(CommandError::MissingArg { command: "color", arg: "hex" }));
}

#[test]
fn negative_tile_coordinate_rejected() {
    assert_eq!(parse("draw -1 2"), Err(CommandError::BadNumber { arg: "x", value: "-1".into() }));
}

#[test]
fn extra_arguments_rejected() {
    assert_eq!(parse("zoom in"), Err(CommandError::ExtraArgs { command: "zoom" }));
    assert_eq!(parse("draw 1 2 3"), Err(CommandError::ExtraArgs { command: "draw" }));
}

#[test]
fn bad_color_wraps_color_error() {
    assert!(matches!(parse("color blue"), Err(CommandError::Color(ColorError::MissingHash(_)))));
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(
        CommandError::MissingArg { command: "pan", arg: "x" }.to_string(),
        "pan: missing argument <x>"
    );
}
