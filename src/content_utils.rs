/// Normaliza el texto de las diapositivas intro/teoría/dato:
/// corta por `\n`, recorta cada línea, descarta las vacías y
/// vuelve a unir con una línea en blanco entre párrafos.
pub fn normalize_content(input: &str) -> String {
    input
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Solo los dígitos de una entrada, como máximo `max` caracteres.
pub fn digits_only(input: &str, max: usize) -> String {
    input.chars().filter(char::is_ascii_digit).take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_rejoins_paragraphs() {
        assert_eq!(
            normalize_content("  Line one.\n\n  Line two.  \n"),
            "Line one.\n\nLine two."
        );
    }

    #[test]
    fn single_newlines_become_paragraphs() {
        assert_eq!(normalize_content("a\nb\r\n   \nc"), "a\n\nb\n\nc");
    }

    #[test]
    fn empty_and_blank_input() {
        assert_eq!(normalize_content(""), "");
        assert_eq!(normalize_content(" \n \n"), "");
    }

    #[test]
    fn digits_are_filtered_and_capped() {
        assert_eq!(digits_only("12a3-45 678", 6), "123456");
        assert_eq!(digits_only("abc", 6), "");
    }
}
