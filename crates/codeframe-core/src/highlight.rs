use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::layout::{char_width, text_width_px};
use crate::surface::Surface;
use crate::Config;

/// Highlight classes with a Monokai-style palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Keyword,
    Function,
    String,
    Comment,
    Variable,
    Normal,
}

impl TokenKind {
    pub fn color(self) -> &'static str {
        match self {
            TokenKind::Keyword => "#f92672",
            TokenKind::Function => "#66d9ef",
            TokenKind::String => "#e6db74",
            TokenKind::Comment => "#75715e",
            TokenKind::Variable => "#a6e22e",
            TokenKind::Normal => "#f8f8f2",
        }
    }
}

/// One run of characters from a single source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Word(String),
    Quoted(String),
    Punct(char),
    Space,
}

static KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "console", "const", "let", "var", "function", "return", "if", "else", "for", "while",
        "class", "import", "export", "from", "=>",
    ]
    .into_iter()
    .collect()
});

const PUNCTUATION: &[char] = &['(', ')', '{', '}', '[', ']', ',', ';', ':', '.'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    InWord,
    InString(char),
}

/// Splits one line into paint runs. Quoted spans are captured atomically up
/// to the matching delimiter; a span with no closer runs to end of line.
pub(crate) fn scan_line(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut state = ScanState::Normal;
    let mut word = String::new();

    for ch in line.chars() {
        if let ScanState::InString(quote) = state {
            word.push(ch);
            if ch == quote {
                tokens.push(Token::Quoted(std::mem::take(&mut word)));
                state = ScanState::Normal;
            }
            continue;
        }
        match ch {
            '"' | '\'' | '`' => {
                flush_word(&mut word, &mut tokens);
                word.push(ch);
                state = ScanState::InString(ch);
            }
            ' ' => {
                flush_word(&mut word, &mut tokens);
                tokens.push(Token::Space);
                state = ScanState::Normal;
            }
            ch if PUNCTUATION.contains(&ch) => {
                flush_word(&mut word, &mut tokens);
                tokens.push(Token::Punct(ch));
                state = ScanState::Normal;
            }
            ch => {
                word.push(ch);
                state = ScanState::InWord;
            }
        }
    }
    match state {
        ScanState::InString(_) => {
            if !word.is_empty() {
                tokens.push(Token::Quoted(word));
            }
        }
        ScanState::Normal | ScanState::InWord => flush_word(&mut word, &mut tokens),
    }
    tokens
}

fn flush_word(word: &mut String, tokens: &mut Vec<Token>) {
    if !word.is_empty() {
        tokens.push(Token::Word(std::mem::take(word)));
    }
}

/// First matching rule wins.
pub(crate) fn classify(word: &str) -> TokenKind {
    if KEYWORDS.contains(word) {
        TokenKind::Keyword
    } else if looks_like_call(word) {
        TokenKind::Function
    } else if contains_quoted_span(word) {
        // Quoted spans are normally isolated by the scanner before this runs.
        TokenKind::String
    } else if word.contains("//") {
        TokenKind::Comment
    } else {
        TokenKind::Normal
    }
}

fn looks_like_call(word: &str) -> bool {
    let mut prev_is_word = false;
    for ch in word.chars() {
        if ch == '(' && prev_is_word {
            return true;
        }
        prev_is_word = ch.is_ascii_alphanumeric() || ch == '_';
    }
    false
}

fn contains_quoted_span(word: &str) -> bool {
    for (idx, ch) in word.char_indices() {
        if matches!(ch, '"' | '\'' | '`') && word[idx + ch.len_utf8()..].contains(ch) {
            return true;
        }
    }
    false
}

/// Paints `code` line by line starting at `(origin_x, origin_y)`. The
/// cursor advances by measured widths; spaces advance without painting.
pub(crate) fn paint_code(
    surface: &mut Surface,
    code: &str,
    origin_x: f32,
    origin_y: f32,
    config: &Config,
) {
    let font_size = config.font.size;
    let family = &config.font.family;
    let space_width = char_width(font_size);
    for (index, line) in code.split('\n').enumerate() {
        let y = origin_y + index as f32 * font_size * config.line_height;
        let mut cursor_x = origin_x;
        for token in scan_line(line) {
            match token {
                Token::Space => cursor_x += space_width,
                Token::Punct(ch) => {
                    let text = ch.to_string();
                    surface.fill_text(
                        &text,
                        cursor_x,
                        y,
                        font_size,
                        family,
                        TokenKind::Normal.color(),
                    );
                    cursor_x += text_width_px(&text, font_size);
                }
                Token::Quoted(text) => {
                    surface.fill_text(
                        &text,
                        cursor_x,
                        y,
                        font_size,
                        family,
                        TokenKind::String.color(),
                    );
                    cursor_x += text_width_px(&text, font_size);
                }
                Token::Word(text) => {
                    let kind = classify(&text);
                    surface.fill_text(&text, cursor_x, y, font_size, family, kind.color());
                    cursor_x += text_width_px(&text, font_size);
                }
            }
        }
    }
}
