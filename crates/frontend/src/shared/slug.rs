//! Slug generation for catalog entities
//!
//! Turns a human label (usually Russian) into a URL-safe token:
//! lowercase latin letters and digits separated by single hyphens.

/// Latin spelling of a lowercase Cyrillic letter, `None` for anything else.
fn transliterate(ch: char) -> Option<&'static str> {
    let latin = match ch {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' => "e",
        'ё' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "y",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "h",
        'ц' => "c",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "sch",
        'ъ' => "",
        'ы' => "y",
        'ь' => "",
        'э' => "e",
        'ю' => "yu",
        'я' => "ya",
        _ => return None,
    };
    Some(latin)
}

/// Generate a slug from a label
///
/// # Example
/// ```rust
/// use laserio_admin::shared::slug::slugify;
///
/// assert_eq!(slugify("Лазерный Станок №1"), "lazernyy-stanok-1");
/// assert_eq!(slugify("---"), "");
/// ```
pub fn slugify(source: &str) -> String {
    let transliterated: String = source
        .to_lowercase()
        .chars()
        .fold(String::new(), |mut acc, ch| {
            match transliterate(ch) {
                Some(latin) => acc.push_str(latin),
                None => acc.push(ch),
            }
            acc
        });

    // Любая серия символов вне [a-z0-9] превращается в один дефис
    let mut slug = String::with_capacity(transliterated.len());
    let mut in_separator = false;
    for ch in transliterated.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            slug.push(ch);
            in_separator = false;
        } else if !in_separator {
            slug.push('-');
            in_separator = true;
        }
    }

    collapse_hyphens(slug.trim_matches('-'))
}

/// Squeeze runs of hyphens into one.
fn collapse_hyphens(value: &str) -> String {
    value
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Check that a value already looks like a slug: `[a-z0-9]+(-[a-z0-9]+)*`
pub fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && value.split('-').all(|part| {
            !part.is_empty()
                && part
                    .chars()
                    .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_cyrillic_label() {
        assert_eq!(slugify("Лазерный Станок №1"), "lazernyy-stanok-1");
        assert_eq!(slugify("Щётки и ёмкости"), "schetki-i-emkosti");
        assert_eq!(slugify("Объявление"), "obyavlenie");
        assert_eq!(slugify("Цех Юга"), "ceh-yuga");
    }

    #[test]
    fn test_latin_and_digits_pass_through() {
        assert_eq!(slugify("CO2 Laser 100W"), "co2-laser-100w");
        assert_eq!(slugify("  Hello,   World!  "), "hello-world");
    }

    #[test]
    fn test_empty_results() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("---"), "");
        assert_eq!(slugify("№ !!! 🙂"), "");
        assert_eq!(slugify("ъь"), "");
    }

    #[test]
    fn test_unmapped_letters_become_separators() {
        // é и ß отсутствуют в таблице и не входят в [a-z0-9]
        assert_eq!(slugify("café crème"), "caf-cr-me");
        assert_eq!(slugify("straße"), "stra-e");
    }

    #[test]
    fn test_output_shape_and_idempotence() {
        let samples = [
            "",
            "---",
            "Лазерный Станок №1",
            "a--b",
            "-a-",
            "ЁЖИК в тумане 2024",
            "Ünïcödé ✓ test",
            "日本語 text",
            "  __x__  ",
            "Съёмка-Подъём",
            "UPPER lower 123",
        ];

        for sample in samples {
            let slug = slugify(sample);
            assert!(
                slug.is_empty() || is_valid_slug(&slug),
                "bad slug {slug:?} for {sample:?}"
            );
            assert_eq!(slugify(&slug), slug, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_is_valid_slug() {
        assert!(is_valid_slug("lazernyy-stanok-1"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("-a"));
        assert!(!is_valid_slug("a--b"));
        assert!(!is_valid_slug("Ab"));
    }

    proptest! {
        #[test]
        fn slug_shape_holds_for_any_text(text in any::<String>()) {
            let slug = slugify(&text);
            prop_assert!(slug.is_empty() || is_valid_slug(&slug), "bad slug {:?}", slug);
        }

        #[test]
        fn slugify_is_idempotent_for_any_text(text in any::<String>()) {
            let slug = slugify(&text);
            prop_assert_eq!(slugify(&slug), slug);
        }

        #[test]
        fn cyrillic_labels_give_valid_idempotent_slugs(
            text in "[а-яёА-ЯЁ0-9 №,.!-]{0,40}"
        ) {
            let slug = slugify(&text);
            prop_assert!(slug.is_empty() || is_valid_slug(&slug), "bad slug {:?}", slug);
            prop_assert_eq!(slugify(&slug), slug);
        }
    }
}
