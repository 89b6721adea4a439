//! Tests for cli

use super::*;
use crate::sequence::WrapMode;

fn parse(args: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("osc52").chain(args.iter().copied())).unwrap()
}

fn explicit_defaults() -> SequenceConfig {
    SequenceConfig {
        mode: ModeSetting::None,
        ..SequenceConfig::default()
    }
}

#[test]
fn test_content_parts_are_joined() {
    let args = parse(&["hello", "world"]);
    let request = args.build_request(&explicit_defaults(), None);

    assert_eq!(request.content(), "hello world");
    assert_eq!(request.operation(), Operation::Set);
    assert_eq!(request.encode().as_str(), "\x1b]52;c;aGVsbG8gd29ybGQ=\x07");
}

#[test]
fn test_flags_override_config() {
    let defaults = SequenceConfig {
        clipboard: Clipboard::System,
        mode: ModeSetting::Screen,
        limit: 100,
        encoding: TextEncoding::Utf16Le,
    };
    let args = parse(&["--primary", "--mode", "tmux", "--limit", "3", "-e", "utf8", "x"]);
    let request = args.build_request(&defaults, None);

    assert_eq!(request.clipboard(), Clipboard::Primary);
    assert_eq!(request.mode(), WrapMode::Tmux);
    assert_eq!(request.limit(), 3);
    assert_eq!(args.encoding(&defaults), TextEncoding::Utf8);
}

#[test]
fn test_config_used_without_flags() {
    let defaults = SequenceConfig {
        clipboard: Clipboard::Primary,
        mode: ModeSetting::Screen,
        limit: 42,
        encoding: TextEncoding::Utf16Le,
    };
    let args = parse(&["x"]);
    let request = args.build_request(&defaults, None);

    assert_eq!(request.clipboard(), Clipboard::Primary);
    assert_eq!(request.mode(), WrapMode::Screen);
    assert_eq!(request.limit(), 42);
    assert_eq!(args.encoding(&defaults), TextEncoding::Utf16Le);
}

#[test]
fn test_negative_limit_flag_clamps() {
    let args = parse(&["--limit", "-5", "x"]);
    let request = args.build_request(&explicit_defaults(), None);
    assert_eq!(request.limit(), 0);
}

#[test]
fn test_query_flag() {
    let args = parse(&["--query"]);
    assert!(!args.reads_stdin());

    let request = args.build_request(&explicit_defaults(), None);
    assert_eq!(request.encode().as_str(), "\x1b]52;c;?\x07");
}

#[test]
fn test_clear_flag() {
    let args = parse(&["-c", "-p"]);
    let request = args.build_request(&explicit_defaults(), None);
    assert_eq!(request.encode().as_str(), "\x1b]52;p;!\x07");
}

#[test]
fn test_query_conflicts_with_clear() {
    let result = Args::try_parse_from(["osc52", "--query", "--clear"]);
    assert!(result.is_err());
}

#[test]
fn test_invalid_mode_rejected() {
    let result = Args::try_parse_from(["osc52", "--mode", "zellij", "x"]);
    assert!(result.is_err());
}

#[test]
fn test_stdin_content_used_when_no_parts() {
    let args = parse(&[]);
    assert!(args.reads_stdin());

    let request = args.build_request(&explicit_defaults(), Some("piped\n".to_string()));
    assert_eq!(request.content(), "piped\n");
}

#[test]
fn test_stdin_content_ignored_when_parts_given() {
    let args = parse(&["arg"]);
    let request = args.build_request(&explicit_defaults(), Some("piped".to_string()));
    assert_eq!(request.content(), "arg");
}

#[test]
fn test_read_content_utf8() {
    let content = read_content("日本語".as_bytes()).unwrap();
    assert_eq!(content, "日本語");
}

#[test]
fn test_read_content_rejects_invalid_utf8() {
    let result = read_content(&[0xff, 0xfe, 0x00][..]);
    assert!(matches!(result, Err(Osc52Error::InvalidArgument(_))));
}
