//! Built-in character pool: the default community helpers.

use crate::domain::Character;

fn helper(name: &str, glyph: &str) -> Character {
  Character { name: name.to_string(), glyph: glyph.to_string() }
}

/// The eight helpers every install ships with. Config may add more, but
/// these guarantee the generator always has enough operands.
pub fn builtin_characters() -> Vec<Character> {
  vec![
    helper("Doctor", "👨‍⚕️"),
    helper("Cook", "👨‍🍳"),
    helper("Police", "👮"),
    helper("Firefighter", "👨‍🚒"),
    helper("Teacher", "👩‍🏫"),
    helper("Engineer", "👷"),
    helper("Nurse", "👩‍⚕️"),
    helper("Farmer", "👨‍🌾"),
  ]
}
