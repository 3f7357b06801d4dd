use smallvec::SmallVec;

/// Wraps a short category label onto (at most) two lines.
///
/// Line one starts with the first word and keeps taking interior words while
/// it is shorter than the last word. At the first interior word that does not
/// fit, that word and everything after it, last word included, go onto line
/// two and wrapping stops. Two-word labels always split between the words.
/// Input with fewer than two words is returned unchanged.
///
/// Every word is kept exactly once and in order; words within a line are
/// joined by a space and lines by `\n`. Lengths are counted in chars.
#[must_use]
pub fn break_text(text: &str) -> String {
    let words: SmallVec<[&str; 8]> = text.split_whitespace().collect();
    let [first, interior @ .., last] = words.as_slice() else {
        return text.to_owned();
    };

    let last_len = last.chars().count();
    let mut wrapped = String::with_capacity(text.len() + 1);
    wrapped.push_str(first);
    let mut last_placed = false;
    let mut line_len = first.chars().count();

    for (offset, word) in interior.iter().enumerate() {
        if line_len < last_len {
            wrapped.push(' ');
            wrapped.push_str(word);
            line_len += 1 + word.chars().count();
            continue;
        }

        wrapped.push('\n');
        wrapped.push_str(word);
        for rest in interior[offset + 1..].iter().chain(std::iter::once(last)) {
            wrapped.push(' ');
            wrapped.push_str(rest);
        }
        last_placed = true;
        break;
    }

    if !last_placed {
        wrapped.push('\n');
        wrapped.push_str(last);
    }

    wrapped
}

#[cfg(test)]
mod tests {
    use super::break_text;

    #[test]
    fn short_interior_words_join_the_first_line() {
        assert_eq!(break_text("Team Work Ethic"), "Team Work\nEthic");
    }

    #[test]
    fn long_first_word_pushes_the_rest_to_line_two() {
        assert_eq!(
            break_text("Communication and Team Skills"),
            "Communication\nand Team Skills"
        );
    }

    #[test]
    fn last_word_contained_in_earlier_word_is_still_emitted() {
        assert_eq!(break_text("x abcd abc"), "x abcd\nabc");
        assert_eq!(break_text("ab a"), "ab\na");
    }

    #[test]
    fn empty_and_blank_input_pass_through() {
        assert_eq!(break_text(""), "");
        assert_eq!(break_text("   "), "   ");
    }
}
