//! Тесты парсинга карт из строк визарда.
//!
//! Парсер – внешняя граница: на любой мусор отвечаем `Err`,
//! паниковать нельзя.

use poker_replay::Card;

/// Валидные строки во всех принятых регистрах масти/ранга.
#[test]
fn parses_valid_cards() {
    let ace_hearts: Card = "Ah".parse().unwrap();
    assert_eq!(ace_hearts.to_string(), "Ah");

    let ten_diamonds: Card = "td".parse().unwrap();
    assert_eq!(ten_diamonds.to_string(), "Td");

    let seven_clubs: Card = "7C".parse().unwrap();
    assert_eq!(seven_clubs.to_string(), "7c");
}

/// Неизвестный ранг или масть – ошибка, не паника.
#[test]
fn rejects_unknown_rank_and_suit() {
    assert!("Xh".parse::<Card>().is_err());
    assert!("Az".parse::<Card>().is_err());
}

/// Неверное число символов – ошибка.
#[test]
fn rejects_wrong_length() {
    assert!("".parse::<Card>().is_err());
    assert!("A".parse::<Card>().is_err());
    assert!("Ahh".parse::<Card>().is_err());
}

/// Многобайтовый ввод: один символ занимает два байта.
/// Считать надо символы, а не байты – иначе "é" проходит проверку длины.
#[test]
fn rejects_multibyte_garbage() {
    assert!("é".parse::<Card>().is_err());
    assert!("éé".parse::<Card>().is_err());
    assert!("Aé".parse::<Card>().is_err());
}
