//! Text casing helpers shared by the page parsers.

/// Upper-case the first letter of every word and lower-case the rest.
///
/// A word is a run of letters; digits and punctuation break words.
///
/// # Examples
/// ```
/// use simpsonsua_core::parser::title_case;
///
/// assert_eq!(title_case("my title here"), "My Title Here");
/// assert_eq!(title_case("ГОМЕР і мардж"), "Гомер І Мардж");
/// ```
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}

/// Upper-case the first character and lower-case the remainder.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
