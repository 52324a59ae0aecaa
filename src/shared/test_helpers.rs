#[cfg(test)]
use fake::faker::lorem::en::{Sentence, Word};
#[cfg(test)]
use fake::Fake;

#[cfg(test)]
use crate::shared::constants::CATEGORY_NAME_MAX_LENGTH;

#[cfg(test)]
pub fn fake_name() -> String {
    Word().fake()
}

#[cfg(test)]
pub fn fake_description(words: usize) -> String {
    Sentence(words..words + 1).fake()
}

/// A name guaranteed to be over the length limit
#[cfg(test)]
pub fn fake_long_name() -> String {
    let mut name: String = Sentence(100..101).fake();
    while name.chars().count() <= CATEGORY_NAME_MAX_LENGTH {
        name.push_str(" lorem");
    }
    name
}
