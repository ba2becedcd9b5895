pub(crate) fn detab(text: &str, tab_width: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut col = 0usize;
    for ch in text.chars() {
        if ch == '\t' {
            let count = tab_width - col % tab_width;
            for _ in 0..count {
                out.push(' ');
            }
            col += count;
        } else {
            if ch == '\n' {
                col = 0;
            } else {
                col += unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
            }
            out.push(ch);
        }
    }
    out
}
