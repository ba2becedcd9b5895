extern crate png as png_crate;

use super::*;
use crate::color::parse_hex;
use crate::frame::{controls_y, terminal_rect};
use crate::highlight::{classify, scan_line, Token};
use crate::layout::{char_width, text_width_cells, text_width_px};
use crate::png::optimize_png;
use crate::surface::{CornerMode, Surface};
use crate::text::detab;
use std::io::Cursor;
use std::path::PathBuf;

fn png_dimensions(bytes: &[u8]) -> (u32, u32) {
    let decoder = png_crate::Decoder::new(Cursor::new(bytes));
    let reader = decoder.read_info().expect("png info");
    let info = reader.info();
    (info.width, info.height)
}

fn svg_string(code: &str, options: &Options) -> String {
    let bytes = code_to_svg(code, options).expect("render svg");
    String::from_utf8(bytes).expect("utf8 svg")
}

fn text_xs(svg: &str) -> Vec<f32> {
    let mut out = Vec::new();
    let mut rest = svg;
    while let Some(pos) = rest.find("<text x=\"") {
        let after = &rest[pos + 9..];
        let end = after.find('"').expect("attr end");
        out.push(after[..end].parse::<f32>().expect("x value"));
        rest = &after[end..];
    }
    out
}

#[test]
fn darken_reduces_each_channel() {
    let out = darken("#ff3366", 20.0).expect("darken");
    assert_eq!(out, "#cc2851");
}

#[test]
fn darken_zero_percent_is_identity() {
    assert_eq!(darken("#ff3366", 0.0).expect("darken"), "#ff3366");
    assert_eq!(darken("#0a192f", 0.0).expect("darken"), "#0a192f");
}

#[test]
fn darken_full_percent_is_black() {
    assert_eq!(darken("#ffffff", 100.0).expect("darken"), "#000000");
}

#[test]
fn darken_never_brightens() {
    for color in ["#000000", "#ffffff", "#ff3366", "#6c5ce7", "#27c93f"] {
        let (r, g, b) = parse_hex(color).expect("input");
        for percent in [0.0, 10.0, 33.3, 50.0, 99.0, 100.0] {
            let out = darken(color, percent).expect("darken");
            let (dr, dg, db) = parse_hex(&out).expect("output is valid hex");
            assert!(dr <= r && dg <= g && db <= b, "{color} at {percent}%");
        }
    }
}

#[test]
fn darken_rejects_malformed_colors() {
    for color in ["ff3366", "#ff336", "#ff33667", "#ff33zz", "#", "red"] {
        assert!(
            matches!(darken(color, 20.0), Err(Error::InvalidColor(_))),
            "{color} should be rejected"
        );
    }
}

#[test]
fn parse_hex_channels() {
    assert_eq!(parse_hex("#0a192f").expect("parse"), (10, 25, 47));
}

#[test]
fn detab_expands_to_tab_stops() {
    assert_eq!(detab("a\tb", 4), "a   b");
    assert_eq!(detab("\tx", 4), "    x");
    assert_eq!(detab("ab\ncd\te", 4), "ab\ncd  e");
}

#[test]
fn text_width_counts_cells() {
    assert_eq!(text_width_cells("abc"), 3);
    assert_eq!(text_width_cells("\t"), 4);
    let width = text_width_px("abcd", 24.0);
    assert_eq!(width, 4.0 * char_width(24.0));
}

#[test]
fn estimate_stays_within_bounds() {
    let long_line = "x".repeat(500);
    let many_lines = "line\n".repeat(200);
    for code in [
        "",
        "short",
        long_line.as_str(),
        many_lines.as_str(),
        "function helloWorld() {\n  console.log(\"Hello, world!\");\n}",
    ] {
        let dims = estimate(code, 24.0, 1.5);
        assert!((400..=2000).contains(&dims.width), "width {}", dims.width);
        assert!((200..=1500).contains(&dims.height), "height {}", dims.height);
    }
}

#[test]
fn estimate_single_line_matches_formula() {
    let code = "console.log(\"It's that SIMPLE?\");";
    let dims = estimate(code, 24.0, 1.5);
    let expected_width = (text_width_px(code, 24.0) + 150.0).ceil() as u32;
    assert_eq!(dims.width, expected_width);
    assert_eq!(dims.width, 622);
    assert_eq!(dims.height, 226);
}

#[test]
fn estimate_width_is_monotonic() {
    let mut previous = 0u32;
    for len in 1..=300 {
        let dims = estimate(&"a".repeat(len), 24.0, 1.5);
        assert!(dims.width >= previous, "shrank at length {len}");
        previous = dims.width;
    }
    assert_eq!(previous, 2000);
}

#[test]
fn estimate_caps_both_axes() {
    let dims = estimate(&"x".repeat(1000), 24.0, 1.5);
    assert_eq!(dims.width, 2000);
    let dims = estimate(&"a\n".repeat(100), 24.0, 1.5);
    assert_eq!(dims.height, 1500);
}

#[test]
fn scan_splits_punctuation_from_words() {
    let tokens = scan_line("foo();");
    assert_eq!(
        tokens,
        vec![
            Token::Word("foo".to_string()),
            Token::Punct('('),
            Token::Punct(')'),
            Token::Punct(';'),
        ]
    );
}

#[test]
fn scan_keeps_quoted_spans_atomic() {
    let tokens = scan_line("say \"hello world\" now");
    assert_eq!(
        tokens,
        vec![
            Token::Word("say".to_string()),
            Token::Space,
            Token::Quoted("\"hello world\"".to_string()),
            Token::Space,
            Token::Word("now".to_string()),
        ]
    );
}

#[test]
fn scan_tolerates_unterminated_strings() {
    let tokens = scan_line("x = \"oops");
    assert_eq!(
        tokens.last(),
        Some(&Token::Quoted("\"oops".to_string())),
        "remainder of the line becomes one quoted run"
    );
}

#[test]
fn scan_matches_delimiters_by_kind() {
    let tokens = scan_line("`tick 'n' tock`");
    assert_eq!(tokens, vec![Token::Quoted("`tick 'n' tock`".to_string())]);
    let tokens = scan_line("'a\"b'");
    assert_eq!(tokens, vec![Token::Quoted("'a\"b'".to_string())]);
}

#[test]
fn scan_console_log_call() {
    let tokens = scan_line("console.log(\"It's that SIMPLE?\");");
    assert_eq!(
        tokens,
        vec![
            Token::Word("console".to_string()),
            Token::Punct('.'),
            Token::Word("log".to_string()),
            Token::Punct('('),
            Token::Quoted("\"It's that SIMPLE?\"".to_string()),
            Token::Punct(')'),
            Token::Punct(';'),
        ]
    );
}

#[test]
fn scan_empty_line() {
    assert!(scan_line("").is_empty());
}

#[test]
fn classify_first_match_wins() {
    assert_eq!(classify("function"), TokenKind::Keyword);
    assert_eq!(classify("console"), TokenKind::Keyword);
    assert_eq!(classify("=>"), TokenKind::Keyword);
    assert_eq!(classify("log("), TokenKind::Function);
    assert_eq!(classify("\"hi\""), TokenKind::String);
    assert_eq!(classify("//note"), TokenKind::Comment);
    assert_eq!(classify("foo"), TokenKind::Normal);
    assert_eq!(classify("_private"), TokenKind::Normal);
}

#[test]
fn classify_call_needs_word_before_paren() {
    assert_eq!(classify("(x"), TokenKind::Normal);
    assert_eq!(classify("a(b"), TokenKind::Function);
}

#[test]
fn token_kind_palette() {
    assert_eq!(TokenKind::Keyword.color(), "#f92672");
    assert_eq!(TokenKind::Function.color(), "#66d9ef");
    assert_eq!(TokenKind::String.color(), "#e6db74");
    assert_eq!(TokenKind::Comment.color(), "#75715e");
    assert_eq!(TokenKind::Variable.color(), "#a6e22e");
    assert_eq!(TokenKind::Normal.color(), "#f8f8f2");
}

#[test]
fn token_kind_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&TokenKind::Keyword).expect("serialize"),
        "\"keyword\""
    );
    let kind: TokenKind = serde_json::from_str("\"variable\"").expect("deserialize");
    assert_eq!(kind, TokenKind::Variable);
}

#[test]
fn output_format_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&OutputFormat::Png).expect("serialize"),
        "\"png\""
    );
}

#[test]
fn resolve_fills_defaults() {
    let config = Config::resolve("hi", &Options::default());
    assert_eq!(config.background_color, "#ff3366");
    assert_eq!(config.output_path, PathBuf::from("code-snippet.png"));
    assert_eq!(config.width, 400);
    assert_eq!(config.height, 226);
    assert_eq!(config.padding, 50.0);
    assert_eq!(config.font.family, "monospace");
    assert_eq!(config.font.size, 24.0);
    assert_eq!(config.line_height, 1.5);
    assert_eq!(config.terminal_radius, 15.0);
    assert_eq!(config.control_button_radius, 12.0);
    assert_eq!(config.control_button_spacing, 25.0);
    assert!(!config.png.optimize);
}

#[test]
fn resolve_explicit_dimensions_bypass_clamps() {
    let options = Options {
        width: Some(100),
        height: Some(80),
        ..Options::default()
    };
    let config = Config::resolve(&"x".repeat(500), &options);
    assert_eq!(config.width, 100);
    assert_eq!(config.height, 80);
}

#[test]
fn resolve_substitutes_adaptive_per_axis() {
    let options = Options {
        width: Some(1400),
        ..Options::default()
    };
    let config = Config::resolve("hi", &options);
    assert_eq!(config.width, 1400);
    assert_eq!(config.height, 226);
}

#[test]
fn options_from_json_partial() {
    let options =
        Options::from_json(r##"{"background_color":"#123456","width":640,"png":{"optimize":true}}"##)
            .expect("parse options");
    assert_eq!(options.background_color.as_deref(), Some("#123456"));
    assert_eq!(options.width, Some(640));
    assert!(options.png.optimize);
    assert_eq!(options.height, None);
}

#[test]
fn options_from_json_rejects_garbage() {
    assert!(matches!(
        Options::from_json("not json"),
        Err(Error::Config(_))
    ));
}

#[test]
fn surface_rejects_degenerate_sizes() {
    assert!(matches!(Surface::new(0, 100), Err(Error::Surface(_))));
    assert!(matches!(Surface::new(100, 0), Err(Error::Surface(_))));
    assert!(matches!(Surface::new(5000, 5000), Err(Error::Surface(_))));
}

#[test]
fn rounded_rect_fallback_path_geometry() {
    let mut surface = Surface::with_corner_mode(200, 120, CornerMode::Path).expect("surface");
    surface.fill_rounded_rect(20.0, 10.0, 160.0, 100.0, 15.0, "#336699", 1.0);
    let svg = surface.to_svg();
    assert!(svg.contains("M 35.00 10.00 L 165.00 10.00 A 15.00 15.00 0 0 1 180.00 25.00"));
    assert_eq!(svg.matches(" A ").count(), 4, "four quarter-round corners");
    assert!(svg.contains("Z\" fill=\"#336699\""));
}

#[test]
fn corner_modes_rasterize_identical_pixels() {
    let mut native = Surface::with_corner_mode(200, 120, CornerMode::Native).expect("surface");
    let mut path = Surface::with_corner_mode(200, 120, CornerMode::Path).expect("surface");
    for surface in [&mut native, &mut path] {
        surface.fill_rounded_rect(20.0, 10.0, 160.0, 100.0, 15.0, "#336699", 1.0);
        surface.fill_rounded_rect(24.0, 14.0, 160.0, 100.0, 15.0, "#000000", 0.18);
    }
    let native_pixels = native
        .rasterize(usvg::fontdb::Database::new())
        .expect("rasterize");
    let path_pixels = path
        .rasterize(usvg::fontdb::Database::new())
        .expect("rasterize");
    assert_eq!(native_pixels.data(), path_pixels.data());
}

#[test]
fn frame_geometry_follows_padding() {
    let config = Config::resolve("hi", &Options::default());
    let term = terminal_rect(&config);
    assert_eq!(term.x, 50.0);
    assert_eq!(term.y, 50.0);
    assert_eq!(term.width, 300.0);
    assert_eq!(term.height, 126.0);
    assert_eq!(controls_y(&config), 77.0);
}

#[test]
fn frame_paints_in_order() {
    let svg = svg_string("hi", &Options::default());
    let gradient = svg.find("linearGradient").expect("gradient");
    let shadow = svg.find("fill-opacity=\"0.084\"").expect("first shadow layer");
    let contact = svg.find("fill-opacity=\"0.180\"").expect("contact shadow");
    let body = svg.find("#0a192f").expect("terminal body");
    let dot = svg.find("#ff6057").expect("first control dot");
    assert!(gradient < shadow && shadow < contact && contact < body && body < dot);
    assert!(svg.contains("fill-opacity=\"0.004\""), "last shadow layer");
}

#[test]
fn frame_draws_three_control_dots() {
    let svg = svg_string("hi", &Options::default());
    assert_eq!(svg.matches("<circle").count(), 3);
    for color in ["#ff6057", "#ffbd2e", "#27c93f"] {
        assert!(svg.contains(color), "{color} dot missing");
    }
    // Dots sit inset from the terminal corner, spaced 30px apart.
    assert!(svg.contains("cx=\"77.00\" cy=\"77.00\" r=\"12.00\""));
    assert!(svg.contains("cx=\"107.00\""));
    assert!(svg.contains("cx=\"137.00\""));
}

#[test]
fn code_origin_offsets_from_frame() {
    let svg = svg_string("hi", &Options::default());
    // First token at terminal_x + 30, baseline one em below controls_y + 35.
    assert!(svg.contains("<text x=\"80.00\" y=\"136.00\""));
}

#[test]
fn keyword_and_string_runs_use_palette_colors() {
    let svg = svg_string("console.log(\"It's that SIMPLE?\");", &Options::default());
    assert!(svg.contains("fill=\"#f92672\" xml:space=\"preserve\">console</text>"));
    assert!(svg.contains("fill=\"#e6db74\" xml:space=\"preserve\">\"It's that SIMPLE?\"</text>"));
    assert!(svg.contains("fill=\"#f8f8f2\" xml:space=\"preserve\">;</text>"));
}

#[test]
fn unterminated_string_paints_rest_of_line() {
    let svg = svg_string("x = \"oops", &Options::default());
    assert!(svg.contains("fill=\"#e6db74\" xml:space=\"preserve\">\"oops</text>"));
}

#[test]
fn spaces_advance_without_painting() {
    let svg = svg_string("a b", &Options::default());
    let xs = text_xs(&svg);
    assert_eq!(xs.len(), 2, "only two painted runs");
    let gap = xs[1] - xs[0];
    let expected = 2.0 * char_width(24.0);
    assert!((gap - expected).abs() < 0.01, "gap {gap} != {expected}");
}

#[test]
fn cursor_advances_strictly_left_to_right() {
    let svg = svg_string("foo();", &Options::default());
    let xs = text_xs(&svg);
    assert_eq!(xs.len(), 4);
    for pair in xs.windows(2) {
        assert!(pair[1] > pair[0], "cursor overlap at {pair:?}");
    }
}

#[test]
fn second_line_drops_by_line_advance() {
    let svg = svg_string("a\nb", &Options::default());
    // Baselines at code_y + n * 36 + font_size.
    assert!(svg.contains("y=\"136.00\""));
    assert!(svg.contains("y=\"172.00\""));
}

#[test]
fn render_png_round_trips_resolved_dimensions() {
    let code = "console.log(\"It's that SIMPLE?\");";
    let bytes = code_to_image(code, &Options::default()).expect("render");
    assert_eq!(&bytes[..4], b"\x89PNG");
    assert_eq!(png_dimensions(&bytes), (622, 226));
}

#[test]
fn render_png_honors_explicit_dimensions() {
    let options = Options {
        width: Some(1400),
        height: Some(1000),
        ..Options::default()
    };
    let bytes = code_to_image(&"x".repeat(400), &options).expect("render");
    assert_eq!(png_dimensions(&bytes), (1400, 1000));
}

#[test]
fn render_dispatches_on_format() {
    let svg = render("hi", &Options::default(), OutputFormat::Svg).expect("svg");
    assert!(svg.starts_with(b"<svg"));
    let png = render("hi", &Options::default(), OutputFormat::Png).expect("png");
    assert_eq!(&png[..4], b"\x89PNG");
}

#[test]
fn render_tabs_are_expanded() {
    let svg = svg_string("\tfoo", &Options::default());
    let xs = text_xs(&svg);
    let expected = 80.0 + 4.0 * char_width(24.0);
    assert!((xs[0] - expected).abs() < 0.01, "tab did not advance cursor");
}

#[test]
fn render_rejects_invalid_background() {
    let options = Options {
        background_color: Some("nope".to_string()),
        ..Options::default()
    };
    assert!(matches!(
        code_to_image("hi", &options),
        Err(Error::InvalidColor(_))
    ));
}

#[test]
fn optimize_pass_preserves_dimensions() {
    let bytes = code_to_image("hi", &Options::default()).expect("render");
    let options = PngOptions {
        optimize: true,
        level: 2,
        strip: PngStrip::Safe,
    };
    let optimized = optimize_png(bytes.clone(), &options).expect("optimize");
    assert_eq!(png_dimensions(&optimized), png_dimensions(&bytes));
}

#[tokio::test]
async fn save_image_writes_bytes() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("out.png");
    save_image(b"fake png", &path).await.expect("save");
    assert_eq!(std::fs::read(&path).expect("read back"), b"fake png");
}

#[tokio::test]
async fn save_image_surfaces_storage_errors() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing").join("out.png");
    assert!(matches!(
        save_image(b"fake png", &path).await,
        Err(Error::Io(_))
    ));
}

#[tokio::test]
async fn generate_code_image_saves_to_configured_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = dir.path().join("snippet.png");
    let options = Options {
        output_path: Some(output.clone()),
        ..Options::default()
    };
    let path = generate_code_image("console.log(\"hi\");", &options)
        .await
        .expect("generate");
    assert_eq!(path, output);
    let bytes = std::fs::read(&path).expect("read back");
    assert_eq!(&bytes[..4], b"\x89PNG");
}
